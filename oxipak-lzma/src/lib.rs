//! # OxiPak LZMA
//!
//! LZMA (Lempel-Ziv-Markov chain Algorithm) decompression for asset
//! bundles.
//!
//! This is a decoder only: asset bundles are produced offline by a
//! standard LZMA encoder, so the runtime side needs exactly one
//! operation, turning a compressed stream plus its parameters into the
//! declared number of output bytes.
//!
//! ## Features
//!
//! - **Pure Rust** implementation
//! - Range coder for adaptive entropy decoding
//! - Context-dependent probability models (literal, length, distance)
//! - Sliding-window dictionary with overlapping match copies
//!
//! ## Usage
//!
//! ```
//! use oxipak_lzma::{LzmaProperties, decompress_raw};
//!
//! // Empty stream: just the 5-byte range-coder prologue.
//! let stream = [0x00, 0x12, 0x34, 0x56, 0x78];
//! let props = LzmaProperties::new(3, 0, 2);
//! let out = decompress_raw(&stream, props, 4096, 0).unwrap();
//! assert!(out.is_empty());
//! ```
//!
//! ## Stream layout
//!
//! The raw stream starts with a 5-byte prologue (one zero byte, then the
//! initial 32-bit range-coder code, big-endian), followed by the entropy
//! coded data. Structural parameters (`lc`, `lp`, `pb`), the dictionary
//! size, and the uncompressed size come from the surrounding container
//! and are passed in by the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decoder;
pub mod model;
pub mod range_coder;
pub mod window;

// Re-exports
pub use decoder::{LzmaDecoder, decompress_raw};
pub use model::{LzmaModel, LzmaProperties, State};
pub use range_coder::RangeDecoder;
pub use window::{DICT_SIZE_MIN, Window};
