//! # OxiPak Core
//!
//! Shared building blocks for the OxiPak asset-bundle unpacker.
//!
//! ## Architecture
//!
//! OxiPak is a layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: CLI                                                 │
//! │     oxipak-cli: extract / inspect bundles               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Container                                           │
//! │     oxipak-bundle: ZIP local-file + entry headers       │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Codec                                               │
//! │     oxipak-lzma: range decoder, model, sliding window   │
//! ├─────────────────────────────────────────────────────────┤
//! │ L0: Core (this crate)                                   │
//! │     error types shared by every layer                   │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// Re-exports for convenience
pub use error::{PakError, Result};
