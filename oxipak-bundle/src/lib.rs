//! # OxiPak Bundle
//!
//! Container front-end for ZIP-packed, LZMA-compressed asset bundles.
//!
//! A bundle is a ZIP file holding one LZMA entry (compression method 14).
//! The front-end validates the local file header, parses the entry-local
//! LZMA header, and drives [`oxipak_lzma`] over the raw stream, returning
//! exactly the declared number of uncompressed bytes.
//!
//! ## Layout
//!
//! ```text
//! [ZIP local file header | filename | extra]
//! [version:u16 | propsSize:u16 == 5 | propsByte:u8 | dictSize:u32 LE]
//! [raw LZMA stream]
//! ```
//!
//! The whole bundle must be resident in memory; parsing is slice-based
//! with no seeking and no central directory walk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod header;

pub use header::{
    CompressionMethod, ENTRY_LZMA_HEADER_LEN, EntryLzmaHeader, LOCAL_FILE_HEADER_LEN,
    LOCAL_FILE_HEADER_SIG, LocalFileHeader,
};

use oxipak_core::error::{PakError, Result};
use oxipak_lzma::{LzmaProperties, decompress_raw};

/// Entry name every asset bundle is expected to carry.
pub const ASSET_PAK_ENTRY: &str = "asset.pak";

/// Parsed metadata for the bundle's entry, without decoding the stream.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// Entry file name.
    pub name: String,
    /// Compression method recorded in the local file header.
    pub method: CompressionMethod,
    /// Compressed payload size (LZMA header included).
    pub compressed_size: u32,
    /// Declared uncompressed size.
    pub uncompressed_size: u32,
    /// Structural parameters from the properties byte.
    pub properties: LzmaProperties,
    /// Declared dictionary size.
    pub dict_size: u32,
}

/// Split a bundle into its validated headers and raw LZMA stream.
fn parse_bundle(data: &[u8]) -> Result<(LocalFileHeader, EntryLzmaHeader, &[u8])> {
    let header = LocalFileHeader::parse(data)?;

    if header.method != CompressionMethod::Lzma {
        return Err(PakError::unsupported_method(header.method.describe()));
    }

    let compressed_size = header.compressed_size as usize;
    if compressed_size < ENTRY_LZMA_HEADER_LEN {
        return Err(PakError::invalid_header(format!(
            "compressed size {compressed_size} smaller than the entry LZMA header"
        )));
    }

    let payload = &data[header.data_offset..];
    let lzma_header = EntryLzmaHeader::parse(payload)?;

    if payload.len() < compressed_size {
        return Err(PakError::unexpected_eof(compressed_size - payload.len()));
    }
    let stream = &payload[ENTRY_LZMA_HEADER_LEN..compressed_size];

    Ok((header, lzma_header, stream))
}

/// Read the entry's metadata without decompressing anything.
pub fn entry_info(data: &[u8]) -> Result<EntryInfo> {
    let (header, lzma_header, _) = parse_bundle(data)?;
    Ok(EntryInfo {
        name: header.filename,
        method: header.method,
        compressed_size: header.compressed_size,
        uncompressed_size: header.uncompressed_size,
        properties: lzma_header.properties,
        dict_size: lzma_header.dict_size,
    })
}

/// Unpack the named entry from a bundle.
///
/// Validates the container, then decodes the LZMA stream to exactly the
/// declared uncompressed size. No partial output is ever returned.
pub fn unpack(data: &[u8], entry_name: &str) -> Result<Vec<u8>> {
    let (header, lzma_header, stream) = parse_bundle(data)?;

    if header.filename != entry_name {
        return Err(PakError::entry_not_found(entry_name));
    }

    decompress_raw(
        stream,
        lzma_header.properties,
        lzma_header.dict_size,
        header.uncompressed_size as usize,
    )
}

/// Unpack the standard `asset.pak` entry.
pub fn unpack_asset_pak(data: &[u8]) -> Result<Vec<u8>> {
    unpack(data, ASSET_PAK_ENTRY)
}
