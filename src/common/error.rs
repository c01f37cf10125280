use std::fmt::{Display, Error, Formatter};

// Error kind
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    InvalidArgument,
    NotImplemented,
    OutOfRange,
    NotFound,
}

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    // Encoder
    UnsupportedMode,
    KanjiNotSupported,
    DataTooLong,
    InvalidVersion,
    UnalignedCodewords,

    // Tables
    CapacityNotFound,
    MissingLogEntry,
}

impl QRError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Self::UnsupportedMode | Self::InvalidVersion | Self::UnalignedCodewords => {
                ErrorKind::InvalidArgument
            }
            Self::KanjiNotSupported | Self::MissingLogEntry => ErrorKind::NotImplemented,
            Self::DataTooLong => ErrorKind::OutOfRange,
            Self::CapacityNotFound => ErrorKind::NotFound,
        }
    }
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Encoder
            Self::UnsupportedMode => "Unsupported encoding mode",
            Self::KanjiNotSupported => "Kanji mode is not implemented",
            Self::DataTooLong => "Data too long for every supported version",
            Self::InvalidVersion => "Invalid version",
            Self::UnalignedCodewords => "Codeword bits are not byte aligned",

            // Tables
            Self::CapacityNotFound => "No capacity entry for version, ec level and mode",
            Self::MissingLogEntry => "Zero has no discrete log in GF(256)",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for QRError {}

pub type QRResult<T> = Result<T, QRError>;
