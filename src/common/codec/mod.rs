pub mod encoder;
pub mod types;

pub use encoder::*;
pub use types::*;

// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b11101100, 0b00010001];

// Codec proptesting
//------------------------------------------------------------------------------

#[cfg(test)]
mod codec_proptests {
    use proptest::prelude::*;

    use super::{build_padded_codeword_bits, determine_smallest_version, select_mode, Mode};
    use crate::common::capacity::data_codewords;
    use crate::common::metadata::ECLevel;

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #[test]
        fn proptest_numeric_mode(data in "[0-9]{1,200}") {
            prop_assert_eq!(select_mode(&data), Mode::Numeric);
        }

        #[test]
        fn proptest_alphanumeric_mode(data in "[0-9A-Z $%*+\\-./:]{0,50}[A-Z $%*+\\-./:][0-9A-Z $%*+\\-./:]{0,50}") {
            prop_assert_eq!(select_mode(&data), Mode::Alphanumeric);
        }

        #[test]
        fn proptest_byte_mode(data in "[0-9A-Z]{0,20}[a-z!@#&]{1,5}[0-9A-Z]{0,20}") {
            prop_assert_eq!(select_mode(&data), Mode::Byte);
        }

        #[test]
        fn proptest_version_monotonic(len in 1usize..120, c in "[0-9A-Za-z]", ecl in ec_level_strategy()) {
            let short = c.repeat(len);
            let long = c.repeat(len + 1);
            if let Ok(long_ver) = determine_smallest_version(&long, ecl) {
                let short_ver = determine_smallest_version(&short, ecl).unwrap();
                prop_assert!(short_ver <= long_ver);
            }
        }

        #[test]
        fn proptest_padded_length(data in "[0-9A-Z]{1,30}", ecl in ec_level_strategy()) {
            let ver = determine_smallest_version(&data, ecl).unwrap();
            let bs = build_padded_codeword_bits(&data, ecl).unwrap();
            prop_assert_eq!(bs.len() / 8, data_codewords(ver, ecl).unwrap());
        }
    }
}
