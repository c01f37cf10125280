use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Capacity entry
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct CapacityEntry {
    pub version: Version,
    pub ec_level: ECLevel,
    pub mode: Mode,
    pub total_codewords: usize,
    // Max characters the symbol holds in this mode
    pub max_capacity: usize,
}

impl CapacityEntry {
    const fn new(
        version: Version,
        ec_level: ECLevel,
        mode: Mode,
        total_codewords: usize,
        max_capacity: usize,
    ) -> Self {
        Self { version, ec_level, mode, total_codewords, max_capacity }
    }
}

pub fn capacity_for(version: Version, ec_level: ECLevel, mode: Mode) -> QRResult<&'static CapacityEntry> {
    CAPACITY_TABLE
        .iter()
        .find(|e| e.version == version && e.ec_level == ec_level && e.mode == mode)
        .ok_or(QRError::CapacityNotFound)
}

// Entries matching (mode, ec level), in increasing version order
pub fn capacities(ec_level: ECLevel, mode: Mode) -> impl Iterator<Item = &'static CapacityEntry> {
    CAPACITY_TABLE.iter().filter(move |e| e.ec_level == ec_level && e.mode == mode)
}

pub fn ec_codewords(version: Version, ec_level: ECLevel) -> QRResult<usize> {
    EC_CODEWORDS.get(*version - 1).map(|row| row[ec_level as usize]).ok_or(QRError::CapacityNotFound)
}

pub fn total_codewords(version: Version) -> QRResult<usize> {
    TOTAL_CODEWORDS.get(*version - 1).copied().ok_or(QRError::CapacityNotFound)
}

pub fn data_codewords(version: Version, ec_level: ECLevel) -> QRResult<usize> {
    Ok(total_codewords(version)? - ec_codewords(version, ec_level)?)
}

pub fn data_bit_capacity(version: Version, ec_level: ECLevel) -> QRResult<usize> {
    Ok(data_codewords(version, ec_level)? << 3)
}

#[cfg(test)]
mod capacity_tests {
    use test_case::test_case;

    use super::{
        capacities, capacity_for, data_bit_capacity, data_codewords, ec_codewords, CAPACITY_TABLE,
    };
    use crate::common::codec::Mode;
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_capacity_for() {
        let entry = capacity_for(Version::V1, ECLevel::M, Mode::Alphanumeric).unwrap();
        assert_eq!(entry.total_codewords, 26);
        assert_eq!(entry.max_capacity, 20);
        let entry = capacity_for(Version::V4, ECLevel::H, Mode::Byte).unwrap();
        assert_eq!(entry.total_codewords, 100);
        assert_eq!(entry.max_capacity, 34);
    }

    #[test]
    fn test_capacity_for_not_found() {
        let v5 = Version::new(5).unwrap();
        assert_eq!(capacity_for(v5, ECLevel::L, Mode::Numeric), Err(QRError::CapacityNotFound));
    }

    #[test]
    fn test_table_has_one_entry_per_combination() {
        assert_eq!(CAPACITY_TABLE.len(), 4 * 4 * 4);
        for v in [Version::V1, Version::V2, Version::V3, Version::V4] {
            for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
                for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji] {
                    let n = CAPACITY_TABLE
                        .iter()
                        .filter(|e| e.version == v && e.ec_level == ecl && e.mode == mode)
                        .count();
                    assert_eq!(n, 1, "{v} {ecl:?} {mode:?}");
                }
            }
        }
    }

    #[test]
    fn test_capacity_increases_with_version() {
        for ecl in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji] {
                let caps = capacities(ecl, mode).map(|e| e.max_capacity).collect::<Vec<_>>();
                assert_eq!(caps.len(), 4);
                assert!(caps.windows(2).all(|w| w[0] < w[1]), "{ecl:?} {mode:?} {caps:?}");
            }
        }
    }

    #[test]
    fn test_capacity_decreases_with_ec_level() {
        for e in CAPACITY_TABLE.iter().filter(|e| e.ec_level != ECLevel::H) {
            let stronger = [ECLevel::M, ECLevel::Q, ECLevel::H][e.ec_level as usize];
            let next = capacity_for(e.version, stronger, e.mode).unwrap();
            assert!(next.max_capacity < e.max_capacity);
        }
    }

    #[test_case(Version::V1, ECLevel::L, 7)]
    #[test_case(Version::V1, ECLevel::M, 10)]
    #[test_case(Version::V2, ECLevel::Q, 22)]
    #[test_case(Version::V3, ECLevel::H, 44)]
    #[test_case(Version::V4, ECLevel::H, 64)]
    fn test_ec_codewords(v: Version, ecl: ECLevel, exp: usize) {
        assert_eq!(ec_codewords(v, ecl), Ok(exp));
    }

    #[test]
    fn test_data_codewords() {
        assert_eq!(data_codewords(Version::V1, ECLevel::M), Ok(16));
        assert_eq!(data_codewords(Version::V4, ECLevel::L), Ok(80));
        assert_eq!(data_bit_capacity(Version::V1, ECLevel::H), Ok(72));
        assert_eq!(data_codewords(Version::new(7).unwrap(), ECLevel::L), Err(QRError::CapacityNotFound));
    }

    #[test]
    fn test_total_codewords_match_per_version() {
        for e in CAPACITY_TABLE.iter() {
            let total = data_codewords(e.version, e.ec_level).unwrap()
                + ec_codewords(e.version, e.ec_level).unwrap();
            assert_eq!(total, e.total_codewords);
        }
    }
}

// Global constants
//------------------------------------------------------------------------------

static TOTAL_CODEWORDS: [usize; 4] = [26, 44, 70, 100];

// Total error correction codewords per version, indexed by ec level
static EC_CODEWORDS: [[usize; 4]; 4] = [[7, 10, 13, 17], [10, 16, 22, 28], [15, 26, 36, 44], [20, 36, 52, 64]];

use ECLevel::{H, L, M, Q};
use Mode::{Alphanumeric as A, Byte as B, Kanji as K, Numeric as N};

static CAPACITY_TABLE: [CapacityEntry; 64] = [
    // Version 1
    CapacityEntry::new(Version::V1, L, N, 26, 41),
    CapacityEntry::new(Version::V1, L, A, 26, 25),
    CapacityEntry::new(Version::V1, L, B, 26, 17),
    CapacityEntry::new(Version::V1, L, K, 26, 10),
    CapacityEntry::new(Version::V1, M, N, 26, 34),
    CapacityEntry::new(Version::V1, M, A, 26, 20),
    CapacityEntry::new(Version::V1, M, B, 26, 14),
    CapacityEntry::new(Version::V1, M, K, 26, 8),
    CapacityEntry::new(Version::V1, Q, N, 26, 27),
    CapacityEntry::new(Version::V1, Q, A, 26, 16),
    CapacityEntry::new(Version::V1, Q, B, 26, 11),
    CapacityEntry::new(Version::V1, Q, K, 26, 7),
    CapacityEntry::new(Version::V1, H, N, 26, 17),
    CapacityEntry::new(Version::V1, H, A, 26, 10),
    CapacityEntry::new(Version::V1, H, B, 26, 7),
    CapacityEntry::new(Version::V1, H, K, 26, 4),
    // Version 2
    CapacityEntry::new(Version::V2, L, N, 44, 77),
    CapacityEntry::new(Version::V2, L, A, 44, 47),
    CapacityEntry::new(Version::V2, L, B, 44, 32),
    CapacityEntry::new(Version::V2, L, K, 44, 20),
    CapacityEntry::new(Version::V2, M, N, 44, 63),
    CapacityEntry::new(Version::V2, M, A, 44, 38),
    CapacityEntry::new(Version::V2, M, B, 44, 26),
    CapacityEntry::new(Version::V2, M, K, 44, 16),
    CapacityEntry::new(Version::V2, Q, N, 44, 48),
    CapacityEntry::new(Version::V2, Q, A, 44, 29),
    CapacityEntry::new(Version::V2, Q, B, 44, 20),
    CapacityEntry::new(Version::V2, Q, K, 44, 12),
    CapacityEntry::new(Version::V2, H, N, 44, 34),
    CapacityEntry::new(Version::V2, H, A, 44, 20),
    CapacityEntry::new(Version::V2, H, B, 44, 14),
    CapacityEntry::new(Version::V2, H, K, 44, 8),
    // Version 3
    CapacityEntry::new(Version::V3, L, N, 70, 127),
    CapacityEntry::new(Version::V3, L, A, 70, 77),
    CapacityEntry::new(Version::V3, L, B, 70, 53),
    CapacityEntry::new(Version::V3, L, K, 70, 32),
    CapacityEntry::new(Version::V3, M, N, 70, 101),
    CapacityEntry::new(Version::V3, M, A, 70, 61),
    CapacityEntry::new(Version::V3, M, B, 70, 42),
    CapacityEntry::new(Version::V3, M, K, 70, 26),
    CapacityEntry::new(Version::V3, Q, N, 70, 77),
    CapacityEntry::new(Version::V3, Q, A, 70, 47),
    CapacityEntry::new(Version::V3, Q, B, 70, 32),
    CapacityEntry::new(Version::V3, Q, K, 70, 20),
    CapacityEntry::new(Version::V3, H, N, 70, 58),
    CapacityEntry::new(Version::V3, H, A, 70, 35),
    CapacityEntry::new(Version::V3, H, B, 70, 24),
    CapacityEntry::new(Version::V3, H, K, 70, 15),
    // Version 4
    CapacityEntry::new(Version::V4, L, N, 100, 187),
    CapacityEntry::new(Version::V4, L, A, 100, 114),
    CapacityEntry::new(Version::V4, L, B, 100, 78),
    CapacityEntry::new(Version::V4, L, K, 100, 48),
    CapacityEntry::new(Version::V4, M, N, 100, 149),
    CapacityEntry::new(Version::V4, M, A, 100, 90),
    CapacityEntry::new(Version::V4, M, B, 100, 62),
    CapacityEntry::new(Version::V4, M, K, 100, 38),
    CapacityEntry::new(Version::V4, Q, N, 100, 111),
    CapacityEntry::new(Version::V4, Q, A, 100, 67),
    CapacityEntry::new(Version::V4, Q, B, 100, 46),
    CapacityEntry::new(Version::V4, Q, K, 100, 28),
    CapacityEntry::new(Version::V4, H, N, 100, 82),
    CapacityEntry::new(Version::V4, H, A, 100, 50),
    CapacityEntry::new(Version::V4, H, B, 100, 34),
    CapacityEntry::new(Version::V4, H, K, 100, 21),
];
