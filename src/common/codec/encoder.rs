pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::trace;

    use crate::common::bitstream::BitStream;
    use crate::common::capacity::{capacities, capacity_for, data_bit_capacity};
    use crate::common::codec::Mode;
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    use super::writer::{pad_remaining_capacity, push_data, push_header, push_terminator};

    pub fn select_mode(text: &str) -> Mode {
        let bytes = text.as_bytes();
        if bytes.iter().all(|b| Mode::Numeric.contains(*b)) {
            Mode::Numeric
        } else if bytes.iter().all(|b| Mode::Alphanumeric.contains(*b)) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    pub fn determine_smallest_version(text: &str, ecl: ECLevel) -> QRResult<Version> {
        let mode = select_mode(text);
        let len = text.len();
        let ver = capacities(ecl, mode)
            .filter(|e| e.max_capacity > len)
            .min_by_key(|e| e.max_capacity)
            .map(|e| e.version)
            .ok_or(QRError::DataTooLong)?;
        trace!(?mode, ?ecl, len, %ver, "Selected smallest version");
        Ok(ver)
    }

    // Data bits only, without header, terminator or padding
    pub fn build_bitstream(text: &str) -> BitStream {
        let mode = select_mode(text);
        let data = text.as_bytes();
        let bit_len = data.chunks(mode.chunk_size()).map(|c| mode.chunk_bits(c)).sum();
        let mut bs = BitStream::new(bit_len);
        push_data(mode, data, &mut bs);
        bs
    }

    pub fn build_padded_codeword_bits(text: &str, ecl: ECLevel) -> QRResult<BitStream> {
        let ver = determine_smallest_version(text, ecl)?;
        encode_with_version(text, ver, ecl)
    }

    pub fn encode_with_version(text: &str, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
        let mode = select_mode(text);
        let data = text.as_bytes();
        if capacity_for(ver, ecl, mode)?.max_capacity <= data.len() {
            return Err(QRError::DataTooLong);
        }

        let bcap = data_bit_capacity(ver, ecl)?;
        let payload = build_bitstream(text);
        let header_len = ver.mode_bits() + ver.char_cnt_bits(mode)?;
        if header_len + payload.len() > bcap {
            return Err(QRError::DataTooLong);
        }

        let mut bs = BitStream::new(bcap);
        push_header(mode, data.len(), ver, &mut bs)?;
        bs.extend(&payload);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        Ok(bs)
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bitstream::BitStream;
    use crate::common::codec::{Mode, PADDING_CODEWORDS};
    use crate::common::error::QRResult;
    use crate::common::metadata::Version;

    pub fn push_header(mode: Mode, char_cnt: usize, ver: Version, out: &mut BitStream) -> QRResult<()> {
        let mode_bits = ver.mode_bits();
        let len_bits = ver.char_cnt_bits(mode)?;
        debug_assert!(
            char_cnt < (1 << len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {len_bits}"
        );
        out.push_bits(mode.indicator()?, mode_bits);
        out.push_bits(char_cnt as u16, len_bits);
        Ok(())
    }

    pub fn push_data(mode: Mode, data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(mode.chunk_size()) {
            out.push_bits(mode.encode_chunk(chunk), mode.chunk_bits(chunk));
        }
    }

    pub fn push_terminator(out: &mut BitStream) {
        let bit_len = out.len();
        let bit_capacity = out.capacity();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream) {
        let offset = out.len() & 7;
        debug_assert!(offset == 0, "Bit offset should be zero before padding codewords: {offset}");

        let remain_byte_capacity = (out.capacity() - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc as u16, 8);
        });
    }

}
