use crate::common::error::{QRError, QRResult};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    // 4 bit mode indicator
    pub fn indicator(&self) -> QRResult<u16> {
        match self {
            Self::Kanji => Err(QRError::KanjiNotSupported),
            m => Ok(*m as u16),
        }
    }

    #[inline]
    pub(crate) fn numeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Numeric.contains(char), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    pub(crate) fn alphanumeric_digit(char: u8) -> u16 {
        debug_assert!(Mode::Alphanumeric.contains(char), "Invalid alphanumeric data: {char}");
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    pub(crate) fn encode_chunk(&self, data: &[u8]) -> u16 {
        let len = data.len();
        match self {
            Self::Numeric => {
                debug_assert!(len <= 3, "Data is too long for numeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
            }
            Self::Alphanumeric => {
                debug_assert!(len <= 2, "Data is too long for alphanumeric conver: {len}");
                data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
            }
            Self::Byte => {
                debug_assert!(len == 1, "Data is too long for byte conver: {len}");
                data.first().map_or(0, |&b| b as u16)
            }
            Self::Kanji => unreachable!("Kanji chunks are never encoded"),
        }
    }

    // Bit width of an encoded chunk. A numeric group is 10 bits only when its
    // value has three significant digits; every other group takes its natural
    // binary width with a 4 bit minimum.
    pub(crate) fn chunk_bits(&self, data: &[u8]) -> usize {
        match self {
            Self::Numeric => match self.encode_chunk(data) {
                100..=999 => 10,
                n => std::cmp::max(4, (u16::BITS - n.leading_zeros()) as usize),
            },
            Self::Alphanumeric => (data.len() * 11).div_ceil(2),
            Self::Byte => 8,
            Self::Kanji => unreachable!("Kanji chunks are never encoded"),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        match self {
            Self::Numeric => byte.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(byte, b'0'..=b'9' | b'A'..=b'Z' | b' ' | b'$' | b'%' | b'*' | b'+' | b'-' | b'.' | b'/' | b':')
            }
            Self::Byte => true,
            Self::Kanji => false,
        }
    }

    pub fn chunk_size(&self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric => 2,
            Self::Byte | Self::Kanji => 1,
        }
    }
}
