//! # qrsmith
//!
//! A Rust library for building the module matrix of small QR codes, from text
//! classification through Reed-Solomon error correction to data placement.
//!
//! ## Features
//!
//! - **Mode Selection**: Numeric, alphanumeric and byte encoding of the input text
//! - **Version Selection**: Smallest of versions 1-4 that fits the text at the chosen error correction level
//! - **Reed-Solomon Error Correction**: GF(256) arithmetic with generator polynomials built on demand
//! - **Module Matrix**: Finder, timing and alignment patterns with zig-zag data placement
//! - **Rendering**: In-memory grayscale image behind the `image` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use qrsmith::{QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("HELLO WORLD").build()?;
//! assert_eq!(qr.version(), Version::V1);
//!
//! let grid = qr.to_grid();  // true is a dark module
//! assert!(grid[0][0]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Step by step
//!
//! ```rust
//! use qrsmith::{
//!     assemble_final_codewords, build_module_matrix, build_padded_codeword_bits,
//!     compute_error_correction_codewords, determine_smallest_version, ECLevel,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = "HELLO WORLD";
//! let version = determine_smallest_version(text, ECLevel::M)?;
//! let data = build_padded_codeword_bits(text, ECLevel::M)?;
//! let ecc = compute_error_correction_codewords(&data, version, ECLevel::M)?;
//! assert_eq!(ecc, [196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
//!
//! let codewords = assemble_final_codewords(data.data(), &ecc);
//! let qr = build_module_matrix(&codewords, version)?;
//! assert_eq!(qr.width(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//!
//! Only single block symbols are produced and format information is left
//! blank, so the matrix is unmasked. Kanji text is rejected.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{
    assemble_final_codewords, build_module_matrix, compute_error_correction_codewords, Module,
    ModuleMatrix, QRBuilder,
};
pub use common::bitstream::BitStream;
pub use common::capacity::{capacity_for, ec_codewords, CapacityEntry};
pub use common::codec::{
    build_bitstream, build_padded_codeword_bits, determine_smallest_version, encode_with_version,
    select_mode, Mode,
};
pub use common::error::{ErrorKind, QRError, QRResult};
pub use common::metadata::{Color, ECLevel, Version};
