//! Bundle header structures.
//!
//! An asset bundle is a ZIP file whose payload of interest is a single
//! LZMA-compressed entry. Two headers matter: the ZIP local file header
//! in front of the entry, and the entry-local LZMA header in front of
//! the compressed stream. Both are parsed out of the resident buffer;
//! no seeking, no central directory.

use oxipak_core::error::{PakError, Result};
use oxipak_lzma::LzmaProperties;

/// ZIP local file header signature.
pub const LOCAL_FILE_HEADER_SIG: u32 = 0x04034B50;

/// Fixed size of the ZIP local file header.
pub const LOCAL_FILE_HEADER_LEN: usize = 30;

/// Size of the entry-local LZMA header preceding the raw stream.
pub const ENTRY_LZMA_HEADER_LEN: usize = 9;

/// ZIP compression methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Stored (no compression).
    Stored,
    /// Deflate compression.
    Deflate,
    /// LZMA compression.
    Lzma,
    /// Unknown method.
    Unknown(u16),
}

impl CompressionMethod {
    /// Create from a u16 value.
    pub fn from_u16(value: u16) -> Self {
        match value {
            0 => Self::Stored,
            8 => Self::Deflate,
            14 => Self::Lzma,
            _ => Self::Unknown(value),
        }
    }

    /// Human-readable form for error messages and listings.
    pub fn describe(&self) -> String {
        match self {
            Self::Stored => "stored (0)".to_string(),
            Self::Deflate => "deflate (8)".to_string(),
            Self::Lzma => "lzma (14)".to_string(),
            Self::Unknown(id) => format!("unknown ({id})"),
        }
    }
}

/// ZIP local file header.
#[derive(Debug, Clone)]
pub struct LocalFileHeader {
    /// Minimum version needed to extract.
    pub version_needed: u16,
    /// General purpose bit flag.
    pub flags: u16,
    /// Compression method.
    pub method: CompressionMethod,
    /// CRC-32 of uncompressed data (not verified here).
    pub crc32: u32,
    /// Compressed size of the entry payload.
    pub compressed_size: u32,
    /// Uncompressed size declared for the entry.
    pub uncompressed_size: u32,
    /// File name.
    pub filename: String,
    /// Offset of the entry payload from the start of the buffer.
    pub data_offset: usize,
}

impl LocalFileHeader {
    /// Parse a local file header from the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < LOCAL_FILE_HEADER_LEN {
            return Err(PakError::unexpected_eof(LOCAL_FILE_HEADER_LEN - data.len()));
        }

        let signature = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if signature != LOCAL_FILE_HEADER_SIG {
            return Err(PakError::invalid_magic(
                LOCAL_FILE_HEADER_SIG.to_le_bytes().to_vec(),
                signature.to_le_bytes().to_vec(),
            ));
        }

        let version_needed = u16::from_le_bytes([data[4], data[5]]);
        let flags = u16::from_le_bytes([data[6], data[7]]);
        let method = CompressionMethod::from_u16(u16::from_le_bytes([data[8], data[9]]));
        // data[10..18]: DOS mtime/mdate, ignored for asset bundles.
        let crc32 = u32::from_le_bytes([data[14], data[15], data[16], data[17]]);
        let compressed_size = u32::from_le_bytes([data[18], data[19], data[20], data[21]]);
        let uncompressed_size = u32::from_le_bytes([data[22], data[23], data[24], data[25]]);
        let filename_len = u16::from_le_bytes([data[26], data[27]]) as usize;
        let extra_len = u16::from_le_bytes([data[28], data[29]]) as usize;

        let data_offset = LOCAL_FILE_HEADER_LEN + filename_len + extra_len;
        if data.len() < data_offset {
            return Err(PakError::unexpected_eof(data_offset - data.len()));
        }

        let filename = String::from_utf8_lossy(
            &data[LOCAL_FILE_HEADER_LEN..LOCAL_FILE_HEADER_LEN + filename_len],
        )
        .into_owned();

        Ok(Self {
            version_needed,
            flags,
            method,
            crc32,
            compressed_size,
            uncompressed_size,
            filename,
            data_offset,
        })
    }
}

/// Entry-local LZMA header: the first 9 bytes of an LZMA entry's payload.
#[derive(Debug, Clone, Copy)]
pub struct EntryLzmaHeader {
    /// Encoder version that produced the stream.
    pub version: u16,
    /// Structural parameters decoded from the properties byte.
    pub properties: LzmaProperties,
    /// Declared dictionary size.
    pub dict_size: u32,
}

impl EntryLzmaHeader {
    /// Parse the entry-local header from the start of an entry payload.
    pub fn parse(payload: &[u8]) -> Result<Self> {
        if payload.len() < ENTRY_LZMA_HEADER_LEN {
            return Err(PakError::unexpected_eof(
                ENTRY_LZMA_HEADER_LEN - payload.len(),
            ));
        }

        let version = u16::from_le_bytes([payload[0], payload[1]]);
        let properties_size = u16::from_le_bytes([payload[2], payload[3]]);
        if properties_size != 5 {
            return Err(PakError::invalid_header(format!(
                "LZMA properties size must be 5, found {properties_size}"
            )));
        }

        let properties = LzmaProperties::from_byte(payload[4]).ok_or_else(|| {
            PakError::invalid_header(format!("invalid LZMA properties byte 0x{:02X}", payload[4]))
        })?;
        let dict_size = u32::from_le_bytes([payload[5], payload[6], payload[7], payload[8]]);

        Ok(Self {
            version,
            properties,
            dict_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_header_bytes(method: u16, name: &[u8], extra: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&LOCAL_FILE_HEADER_SIG.to_le_bytes());
        buf.extend_from_slice(&20u16.to_le_bytes()); // version needed
        buf.extend_from_slice(&0u16.to_le_bytes()); // flags
        buf.extend_from_slice(&method.to_le_bytes());
        buf.extend_from_slice(&0u16.to_le_bytes()); // mtime
        buf.extend_from_slice(&0u16.to_le_bytes()); // mdate
        buf.extend_from_slice(&0u32.to_le_bytes()); // crc32
        buf.extend_from_slice(&100u32.to_le_bytes()); // compressed
        buf.extend_from_slice(&400u32.to_le_bytes()); // uncompressed
        buf.extend_from_slice(&(name.len() as u16).to_le_bytes());
        buf.extend_from_slice(&(extra.len() as u16).to_le_bytes());
        buf.extend_from_slice(name);
        buf.extend_from_slice(extra);
        buf
    }

    #[test]
    fn test_compression_method() {
        assert_eq!(CompressionMethod::from_u16(0), CompressionMethod::Stored);
        assert_eq!(CompressionMethod::from_u16(8), CompressionMethod::Deflate);
        assert_eq!(CompressionMethod::from_u16(14), CompressionMethod::Lzma);
        assert!(matches!(
            CompressionMethod::from_u16(99),
            CompressionMethod::Unknown(99)
        ));
    }

    #[test]
    fn test_parse_local_header() {
        let buf = local_header_bytes(14, b"asset.pak", &[0xAB; 4]);
        let header = LocalFileHeader::parse(&buf).unwrap();

        assert_eq!(header.method, CompressionMethod::Lzma);
        assert_eq!(header.filename, "asset.pak");
        assert_eq!(header.compressed_size, 100);
        assert_eq!(header.uncompressed_size, 400);
        // 30 fixed + 9 name + 4 extra; the extra length counts bytes, not
        // 16-bit words.
        assert_eq!(header.data_offset, 43);
    }

    #[test]
    fn test_bad_signature() {
        let mut buf = local_header_bytes(14, b"asset.pak", &[]);
        buf[0] = 0x51;
        let err = LocalFileHeader::parse(&buf).unwrap_err();
        assert!(matches!(err, PakError::InvalidMagic { .. }));
    }

    #[test]
    fn test_header_too_short() {
        let buf = local_header_bytes(14, b"asset.pak", &[]);
        let err = LocalFileHeader::parse(&buf[..20]).unwrap_err();
        assert!(matches!(err, PakError::UnexpectedEof { expected: 10 }));
    }

    #[test]
    fn test_truncated_filename() {
        let buf = local_header_bytes(14, b"asset.pak", &[]);
        // Fixed part intact, filename cut off.
        let err = LocalFileHeader::parse(&buf[..32]).unwrap_err();
        assert!(matches!(err, PakError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_parse_entry_lzma_header() {
        let payload = [0x09, 0x14, 0x05, 0x00, 0x5D, 0x00, 0x00, 0x01, 0x00];
        let header = EntryLzmaHeader::parse(&payload).unwrap();

        assert_eq!(header.version, 0x1409);
        assert_eq!(header.properties.lc, 3);
        assert_eq!(header.properties.lp, 0);
        assert_eq!(header.properties.pb, 2);
        assert_eq!(header.dict_size, 0x0001_0000);
    }

    #[test]
    fn test_wrong_properties_size() {
        let payload = [0x09, 0x14, 0x04, 0x00, 0x5D, 0x00, 0x00, 0x01, 0x00];
        let err = EntryLzmaHeader::parse(&payload).unwrap_err();
        assert!(matches!(err, PakError::InvalidHeader { .. }));
    }

    #[test]
    fn test_invalid_properties_byte() {
        let payload = [0x09, 0x14, 0x05, 0x00, 0xFF, 0x00, 0x00, 0x01, 0x00];
        let err = EntryLzmaHeader::parse(&payload).unwrap_err();
        assert!(matches!(err, PakError::InvalidHeader { .. }));
    }
}
