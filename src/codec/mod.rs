//! Number base and endianness codec.
//!
//! Formats bytes for the grid, parses typed numeric input, and decodes
//! multi-byte integers for the interpretation panel.
//!
//! - `NumberBase`: digit alphabet, radix, input length and cell width
//! - `Endian`: byte order used only for multi-byte interpretations
//! - `interpret`: read-only decoding of the bytes under the cursor

mod interpret;

pub use interpret::{decode_multi_byte, Interpretations};

use serde::{Deserialize, Serialize};

/// Errors produced while parsing typed numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("'{digit}' is not a valid {base} digit")]
    InvalidDigit { digit: char, base: NumberBase },

    #[error("{text} does not fit ({base})")]
    Overflow { text: String, base: NumberBase },

    #[error("nothing to parse")]
    Empty,
}

/// Numeric base used to display and enter bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    #[serde(alias = "binary")]
    Bin,
    #[serde(alias = "octal")]
    Oct,
    #[serde(alias = "decimal")]
    Dec,
    #[default]
    #[serde(alias = "hexadecimal")]
    Hex,
}

impl NumberBase {
    /// All bases in menu order.
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Bin,
        NumberBase::Oct,
        NumberBase::Dec,
        NumberBase::Hex,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Bin => 2,
            NumberBase::Oct => 8,
            NumberBase::Dec => 10,
            NumberBase::Hex => 16,
        }
    }

    /// Maximum number of digits typed before the entry auto-commits.
    pub fn max_digits(self) -> usize {
        match self {
            NumberBase::Bin => 8,
            NumberBase::Oct => 3,
            NumberBase::Dec => 3,
            NumberBase::Hex => 2,
        }
    }

    /// Width of one formatted byte. Equal to `max_digits` for every base.
    pub fn width(self) -> usize {
        self.max_digits()
    }

    /// Whether `c` belongs to this base's digit alphabet (case-insensitive).
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.radix())
    }

    /// Short name shown in the status line.
    pub fn label(self) -> &'static str {
        match self {
            NumberBase::Bin => "bin",
            NumberBase::Oct => "oct",
            NumberBase::Dec => "dec",
            NumberBase::Hex => "hex",
        }
    }

    /// Map a selection letter (b/o/d/h) to a base.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'b' => Some(NumberBase::Bin),
            'o' => Some(NumberBase::Oct),
            'd' => Some(NumberBase::Dec),
            'h' => Some(NumberBase::Hex),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumberBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NumberBase::Bin => "binary",
            NumberBase::Oct => "octal",
            NumberBase::Dec => "decimal",
            NumberBase::Hex => "hexadecimal",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for NumberBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bin" | "binary" | "b" => Ok(NumberBase::Bin),
            "oct" | "octal" | "o" => Ok(NumberBase::Oct),
            "dec" | "decimal" | "d" => Ok(NumberBase::Dec),
            "hex" | "hexadecimal" | "h" => Ok(NumberBase::Hex),
            other => Err(format!("unknown base '{}'", other)),
        }
    }
}

/// Byte order for multi-byte interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    #[default]
    Native,
    Little,
    Big,
}

impl Endian {
    /// Map a selection letter (n/l/b) to an endianness.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Endian::Native),
            'l' => Some(Endian::Little),
            'b' => Some(Endian::Big),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Endian::Native => "native",
            Endian::Little => "little",
            Endian::Big => "big",
        }
    }

    /// Resolve `Native` to the concrete order of the running target.
    pub fn is_little(self) -> bool {
        match self {
            Endian::Native => cfg!(target_endian = "little"),
            Endian::Little => true,
            Endian::Big => false,
        }
    }
}

impl std::str::FromStr for Endian {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" | "n" => Ok(Endian::Native),
            "little" | "le" | "l" => Ok(Endian::Little),
            "big" | "be" | "b" => Ok(Endian::Big),
            other => Err(format!("unknown endianness '{}'", other)),
        }
    }
}

/// Format one byte as zero-padded fixed-width text.
pub fn format_byte(value: u8, base: NumberBase) -> String {
    match base {
        NumberBase::Bin => format!("{:08b}", value),
        NumberBase::Oct => format!("{:03o}", value),
        NumberBase::Dec => format!("{:03}", value),
        NumberBase::Hex => format!("{:02X}", value),
    }
}

/// Parse an unsigned number typed in `base`.
pub fn parse_value(text: &str, base: NumberBase) -> Result<u64, CodecError> {
    if text.is_empty() {
        return Err(CodecError::Empty);
    }

    let radix = base.radix();
    let mut value: u64 = 0;
    for c in text.chars() {
        let digit = c
            .to_digit(radix)
            .ok_or(CodecError::InvalidDigit { digit: c, base })?;
        value = value
            .checked_mul(radix as u64)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or_else(|| CodecError::Overflow {
                text: text.to_string(),
                base,
            })?;
    }
    Ok(value)
}

/// Parse a single byte typed in `base`.
pub fn parse_byte(text: &str, base: NumberBase) -> Result<u8, CodecError> {
    let value = parse_value(text, base)?;
    u8::try_from(value).map_err(|_| CodecError::Overflow {
        text: text.to_string(),
        base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_to_fixed_width() {
        assert_eq!(format_byte(5, NumberBase::Bin), "00000101");
        assert_eq!(format_byte(8, NumberBase::Oct), "010");
        assert_eq!(format_byte(7, NumberBase::Dec), "007");
        assert_eq!(format_byte(0xAB, NumberBase::Hex), "AB");
        assert_eq!(format_byte(0, NumberBase::Hex), "00");
    }

    #[test]
    fn every_byte_survives_format_then_parse_in_every_base() {
        for base in NumberBase::ALL {
            for v in 0..=255u8 {
                let text = format_byte(v, base);
                assert_eq!(text.len(), base.width());
                assert_eq!(parse_byte(&text, base), Ok(v), "{} in {}", v, base);
            }
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_byte("ff", NumberBase::Hex), Ok(255));
        assert_eq!(parse_byte("Fe", NumberBase::Hex), Ok(254));
    }

    #[test]
    fn parse_rejects_foreign_digits() {
        assert_eq!(
            parse_byte("12", NumberBase::Bin),
            Err(CodecError::InvalidDigit {
                digit: '2',
                base: NumberBase::Bin
            })
        );
        assert!(matches!(
            parse_byte("8", NumberBase::Oct),
            Err(CodecError::InvalidDigit { digit: '8', .. })
        ));
        assert!(matches!(
            parse_byte("g", NumberBase::Hex),
            Err(CodecError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn parse_byte_rejects_values_above_255() {
        assert!(matches!(
            parse_byte("256", NumberBase::Dec),
            Err(CodecError::Overflow { .. })
        ));
        assert!(matches!(
            parse_byte("777", NumberBase::Oct),
            Err(CodecError::Overflow { .. })
        ));
        assert_eq!(parse_value("777", NumberBase::Oct), Ok(511));
    }

    #[test]
    fn parse_value_reports_empty_and_u64_overflow() {
        assert_eq!(parse_value("", NumberBase::Hex), Err(CodecError::Empty));
        assert!(matches!(
            parse_value("1ffffffffffffffff", NumberBase::Hex),
            Err(CodecError::Overflow { .. })
        ));
    }

    #[test]
    fn digit_alphabets() {
        assert!(NumberBase::Bin.is_digit('1'));
        assert!(!NumberBase::Bin.is_digit('2'));
        assert!(NumberBase::Oct.is_digit('7'));
        assert!(!NumberBase::Oct.is_digit('8'));
        assert!(!NumberBase::Dec.is_digit('a'));
        assert!(NumberBase::Hex.is_digit('a'));
        assert!(NumberBase::Hex.is_digit('F'));
    }

    #[test]
    fn selection_letters() {
        assert_eq!(NumberBase::from_key('B'), Some(NumberBase::Bin));
        assert_eq!(NumberBase::from_key('o'), Some(NumberBase::Oct));
        assert_eq!(NumberBase::from_key('d'), Some(NumberBase::Dec));
        assert_eq!(NumberBase::from_key('H'), Some(NumberBase::Hex));
        assert_eq!(NumberBase::from_key('x'), None);
        assert_eq!(Endian::from_key('N'), Some(Endian::Native));
        assert_eq!(Endian::from_key('l'), Some(Endian::Little));
        assert_eq!(Endian::from_key('b'), Some(Endian::Big));
        assert_eq!(Endian::from_key('q'), None);
    }

    #[test]
    fn names_parse_from_cli_strings() {
        assert_eq!("hex".parse::<NumberBase>(), Ok(NumberBase::Hex));
        assert_eq!("Binary".parse::<NumberBase>(), Ok(NumberBase::Bin));
        assert_eq!("be".parse::<Endian>(), Ok(Endian::Big));
        assert!("nine".parse::<NumberBase>().is_err());
    }
}
