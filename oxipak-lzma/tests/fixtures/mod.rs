//! Compressed fixtures captured from liblzma (FORMAT_ALONE payloads,
//! lc=3 lp=0 pb=2, 64 KiB dictionary).

/// 4096 bytes cycling through "0123456789ABCDEF".
pub const PATTERN_STREAM: [u8; 49] = [
    0x00, 0x18, 0x0C, 0x42, 0x92, 0x6A, 0x67, 0xBC, 0x0E, 0xD1, 0x33, 0x2B,
    0xFC, 0xB8, 0xCC, 0xA1, 0x5C, 0xDC, 0x75, 0x46, 0xC1, 0xBF, 0xF6, 0xFF,
    0xCF, 0x11, 0x0B, 0x6D, 0xB2, 0x99, 0x62, 0xD7, 0x24, 0xC7, 0x8A, 0x4E,
    0x20, 0xB5, 0x28, 0xC9, 0xF6, 0x82, 0xFB, 0xBF, 0xFF, 0xF9, 0x66, 0xA0,
    0x00,
];

/// 1000 repeated 'A' bytes.
pub const RUN_OF_A_STREAM: [u8; 18] = [
    0x00, 0x20, 0xEF, 0xFB, 0xBF, 0xFE, 0xA3, 0xB0, 0xBA, 0x6C, 0xAA, 0xF7,
    0xFF, 0xFF, 0x9F, 0xEC, 0x00, 0x00,
];

/// "The quick brown fox jumps over the lazy dog. " x 8 (360 bytes).
pub const TEXT_STREAM: [u8; 59] = [
    0x00, 0x2A, 0x1A, 0x08, 0xA2, 0x03, 0x25, 0x66, 0xF1, 0x4B, 0x78, 0xC5,
    0xA2, 0x05, 0xFF, 0x2E, 0xE6, 0xD9, 0xD2, 0x20, 0x1A, 0xAD, 0x34, 0xF8,
    0xE2, 0x1D, 0xE8, 0x41, 0x36, 0xFA, 0xDC, 0x06, 0x69, 0xBB, 0x3C, 0xE4,
    0x10, 0x34, 0x27, 0x09, 0xEB, 0xB3, 0x66, 0xE3, 0xED, 0x37, 0x98, 0xED,
    0x92, 0x5F, 0x6B, 0x27, 0x32, 0x3F, 0xFF, 0xE9, 0xAC, 0x60, 0x00,
];

/// 512 bytes of `(i * 31 + (i >> 3)) & 0xFF`.
pub const MIXED_STREAM: [u8; 339] = [
    0x00, 0x00, 0x08, 0x8B, 0x3D, 0xCC, 0xC6, 0x84, 0xC4, 0xC6, 0x72, 0x62,
    0x14, 0x5C, 0xEC, 0x0B, 0xEE, 0x4A, 0x17, 0x0B, 0x42, 0xE5, 0x2F, 0xBB,
    0x8B, 0x09, 0xD1, 0xA3, 0xD5, 0xE1, 0x29, 0x80, 0x45, 0x17, 0x89, 0xF6,
    0xD3, 0xD6, 0x3E, 0x6B, 0x9E, 0x5F, 0x56, 0x8A, 0xEB, 0x86, 0x28, 0x40,
    0x7C, 0x96, 0xBB, 0xB2, 0x96, 0x1A, 0xDD, 0x39, 0xA1, 0x24, 0x82, 0x53,
    0x37, 0x57, 0x3B, 0xAE, 0x59, 0x4E, 0xE6, 0x1C, 0xEE, 0xC6, 0xDC, 0x67,
    0x75, 0x29, 0x45, 0xDC, 0x64, 0x6F, 0x87, 0xB1, 0xA4, 0xA5, 0xD4, 0x50,
    0x98, 0x04, 0x91, 0xFA, 0x3B, 0xB5, 0x82, 0x67, 0xE2, 0x1E, 0xC3, 0xEA,
    0xF3, 0xB2, 0x84, 0x38, 0xD4, 0xC7, 0xB9, 0xD6, 0x18, 0x1E, 0x07, 0xC4,
    0x3A, 0x76, 0xAE, 0x34, 0xC8, 0xC9, 0x40, 0x27, 0x57, 0x53, 0xAD, 0x41,
    0x70, 0x63, 0x0A, 0xCC, 0xAA, 0x0C, 0x5D, 0x2D, 0xEE, 0x04, 0x37, 0x50,
    0x86, 0x4A, 0xF5, 0xAB, 0xE2, 0x7D, 0x51, 0x32, 0x6C, 0x4B, 0x12, 0x00,
    0xA8, 0x1D, 0x4A, 0xAF, 0xAB, 0xC2, 0x7B, 0xBD, 0xF5, 0x99, 0x66, 0x19,
    0xCC, 0x9D, 0x45, 0xD1, 0x58, 0x60, 0x5B, 0xA8, 0x85, 0x4B, 0xE3, 0x28,
    0x93, 0xF9, 0x1B, 0xAF, 0xFE, 0x7C, 0x18, 0xE0, 0xB0, 0xD1, 0xA9, 0xD0,
    0x7E, 0x58, 0xF0, 0x04, 0x09, 0x46, 0xD9, 0xA2, 0xB0, 0x29, 0x51, 0xC6,
    0x13, 0x95, 0xA8, 0xD9, 0x7E, 0x9B, 0x6F, 0xA1, 0xA6, 0xAE, 0x3C, 0x93,
    0xDF, 0xF7, 0x99, 0xFA, 0xB9, 0x38, 0xFE, 0x15, 0xC4, 0x14, 0x80, 0x8E,
    0xC0, 0x5C, 0x97, 0x05, 0x5E, 0xCF, 0xBC, 0x91, 0x56, 0x4E, 0x2F, 0x86,
    0xBF, 0x41, 0x7D, 0x2F, 0xE1, 0x8A, 0x10, 0x85, 0x09, 0xAF, 0x36, 0xBB,
    0x02, 0x08, 0x72, 0xFB, 0x53, 0xA8, 0xA8, 0x7A, 0x19, 0xA3, 0xC1, 0x37,
    0x91, 0xFB, 0xA5, 0x11, 0xE4, 0x44, 0x97, 0x64, 0xAC, 0xA8, 0x17, 0x10,
    0x5E, 0x75, 0x35, 0xB2, 0x3B, 0x5E, 0x20, 0x90, 0xAA, 0x4A, 0x24, 0xE6,
    0x30, 0xC5, 0x71, 0xAA, 0x06, 0x7B, 0x08, 0x9C, 0xD1, 0x02, 0xD8, 0xB3,
    0xE6, 0xCB, 0x6B, 0x36, 0x6D, 0xFA, 0x4D, 0xF8, 0x9F, 0xD5, 0x7D, 0x1F,
    0x8D, 0xA9, 0x2B, 0x26, 0x52, 0x9F, 0xD4, 0xF9, 0xDA, 0x57, 0xDA, 0x3B,
    0x3D, 0x6A, 0x78, 0x68, 0x11, 0x3A, 0xB1, 0xCF, 0x6D, 0x04, 0x4A, 0xC0,
    0x1C, 0x8F, 0xD2, 0xA2, 0xC1, 0x29, 0xB6, 0x36, 0x32, 0xFF, 0xFF, 0xBA,
    0xDA, 0x00, 0x00,
];
