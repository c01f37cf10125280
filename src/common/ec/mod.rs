mod galois;
mod poly;

pub use galois::*;
pub use poly::*;
