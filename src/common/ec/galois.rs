use std::ops::{Add, Mul};

use crate::common::error::{QRError, QRResult};

// Galois field element
//------------------------------------------------------------------------------

// Element of GF(256) in integer notation. The alpha notation is derived on
// demand through the log table, so there is no separate "unset" state.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub struct GF(pub u8);

impl GF {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    // Alpha notation: the exponent e such that a^e equals this element
    pub fn log(&self) -> QRResult<u8> {
        match self.0 {
            0 => Err(QRError::MissingLogEntry),
            n => Ok(LOG_TABLE[n as usize]),
        }
    }

    // Integer notation of a^alpha
    pub fn exp(alpha: usize) -> Self {
        Self(EXP_TABLE[alpha % 255])
    }
}

impl From<u8> for GF {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

impl Add for GF {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for GF {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        let log_sum = LOG_TABLE[self.0 as usize] as usize + LOG_TABLE[rhs.0 as usize] as usize;
        Self::exp(log_sum)
    }
}


// Global constants
//------------------------------------------------------------------------------

// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE: u16 = 0x11d;

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    table
}

const fn build_log_table(exp: [u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const EXP: [u8; 256] = build_exp_table();

pub static EXP_TABLE: [u8; 256] = EXP;

pub static LOG_TABLE: [u8; 256] = build_log_table(EXP);
