use std::fmt::{Display, Error, Formatter};

// Bit stream
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity.div_ceil(8)), len: 0, capacity }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Packed bytes; the last byte is zero filled when the length is unaligned
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        (index < self.len).then(|| self.data[index >> 3] & (0b10000000 >> (index & 7)) != 0)
    }

    pub fn push_bits(&mut self, bits: u16, size: usize) {
        debug_assert!(size <= 16, "Bit count shouldn't exceed 16: Size {size}");
        debug_assert!(
            size >= (16 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        for i in (0..size).rev() {
            self.push((bits >> i) & 1 == 1);
        }
    }

    pub fn push(&mut self, bit: bool) {
        debug_assert!(
            self.len < self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + 1
        );

        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }

        self.len += 1;
    }

    pub fn extend(&mut self, other: &BitStream) {
        other.iter().for_each(|b| self.push(b));
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.data[i >> 3] & (0b10000000 >> (i & 7)) != 0)
    }
}

impl From<&[u8]> for BitStream {
    fn from(bytes: &[u8]) -> Self {
        let len = bytes.len() << 3;
        Self { data: bytes.to_vec(), len, capacity: len }
    }
}

impl Display for BitStream {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        self.iter().try_for_each(|b| f.write_str(if b { "1" } else { "0" }))
    }
}
