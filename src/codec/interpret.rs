//! Read-only interpretations of the bytes under the cursor.

use super::Endian;

/// Decode `width` bytes (1, 2, 4 or 8) as an integer.
///
/// Signed values are sign-extended into the returned `i128` so every width
/// fits one return type. Returns `None` when fewer than `width` bytes are
/// available or the width is unsupported.
pub fn decode_multi_byte(bytes: &[u8], width: usize, signed: bool, endian: Endian) -> Option<i128> {
    if !matches!(width, 1 | 2 | 4 | 8) || bytes.len() < width {
        return None;
    }

    let mut raw = [0u8; 8];
    if endian.is_little() {
        raw[..width].copy_from_slice(&bytes[..width]);
    } else {
        for (i, b) in bytes[..width].iter().rev().enumerate() {
            raw[i] = *b;
        }
    }
    let unsigned = u64::from_le_bytes(raw);

    if !signed {
        return Some(unsigned as i128);
    }

    let bits = width * 8;
    let shift = 64 - bits;
    Some((((unsigned << shift) as i64) >> shift) as i128)
}

/// All panel values derived from the bytes at one index.
///
/// A field is `None` when the buffer ends before enough bytes are available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretations {
    pub u8: Option<u8>,
    pub i8: Option<i8>,
    pub u16: Option<u16>,
    pub i16: Option<i16>,
    pub u32: Option<u32>,
    pub i32: Option<i32>,
    pub u64: Option<u64>,
    pub i64: Option<i64>,
    pub f32: Option<f32>,
    pub f64: Option<f64>,
}

impl Interpretations {
    /// Decode the interpretations of `bytes[index..]`.
    pub fn at(bytes: &[u8], index: usize, endian: Endian) -> Self {
        let tail = bytes.get(index..).unwrap_or(&[]);
        let int = |width, signed| decode_multi_byte(tail, width, signed, endian);

        Self {
            u8: int(1, false).map(|v| v as u8),
            i8: int(1, true).map(|v| v as i8),
            u16: int(2, false).map(|v| v as u16),
            i16: int(2, true).map(|v| v as i16),
            u32: int(4, false).map(|v| v as u32),
            i32: int(4, true).map(|v| v as i32),
            u64: int(8, false).map(|v| v as u64),
            i64: int(8, true).map(|v| v as i64),
            f32: int(4, false).map(|v| f32::from_bits(v as u32)),
            f64: int(8, false).map(|v| f64::from_bits(v as u64)),
        }
    }

    /// Render as `(label, value)` pairs for the panel; absent values show `-`.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        fn show<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
        }

        vec![
            ("u8", show(self.u8)),
            ("i8", show(self.i8)),
            ("u16", show(self.u16)),
            ("i16", show(self.i16)),
            ("u32", show(self.u32)),
            ("i32", show(self.i32)),
            ("u64", show(self.u64)),
            ("i64", show(self.i64)),
            ("f32", show(self.f32)),
            ("f64", show(self.f64)),
        ]
    }
}
