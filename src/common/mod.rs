pub mod bitstream;
pub mod capacity;
pub mod codec;
pub mod ec;
pub mod error;
pub mod iter;
pub mod metadata;

pub use bitstream::*;
pub use capacity::*;
pub use codec::*;
pub use error::*;
pub use iter::*;
pub use metadata::*;
