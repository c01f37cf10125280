use crate::common::{
    bitstream::BitStream,
    capacity::ec_codewords,
    ec::Polynomial,
    error::{QRError, QRResult},
    metadata::{ECLevel, Version},
};

// ECC: Error Correction Codeword generator. The whole data sequence is
// treated as a single block.
pub fn compute_error_correction_codewords(
    bits: &BitStream,
    version: Version,
    ec_level: ECLevel,
) -> QRResult<Vec<u8>> {
    if bits.len() & 7 != 0 {
        return Err(QRError::UnalignedCodewords);
    }

    let ecc_count = ec_codewords(version, ec_level)?;
    ecc_per_block(bits.data(), ecc_count)
}

// Performs polynomial long division with data polynomial(num)
// and generator polynomial(den) to compute remainder polynomial,
// the coefficients of which are the ecc
pub fn ecc_per_block(block: &[u8], ecc_count: usize) -> QRResult<Vec<u8>> {
    let mut msg = Polynomial::message(block, ecc_count);
    let mut gen = Polynomial::generator(ecc_count);

    let (msg_lead, gen_lead) = (msg.lead_exponent(), gen.lead_exponent());
    if msg_lead > gen_lead {
        gen = gen.multiply_with_exponent(msg_lead - gen_lead);
    }

    // Xor keeps the dividend's exponents, so the divisor stays aligned by
    // position after each lead term is dropped
    for _ in 0..block.len() {
        let Some(&lead) = msg.lead() else { break };
        if !lead.coeff.is_zero() {
            let scaled = gen.multiply_with_alpha(lead.alpha()?)?;
            msg = msg.xor(&scaled);
        }
        debug_assert!(msg.lead().is_some_and(|t| t.coeff.is_zero()), "Lead term was not cancelled");
        msg.drop_lead();
    }

    debug_assert_eq!(msg.len(), ecc_count, "Remainder length mismatch");
    Ok(msg.coefficients())
}

pub fn assemble_final_codewords(data: &[u8], ecc: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(data.len() + ecc.len());
    res.extend_from_slice(data);
    res.extend_from_slice(ecc);
    res
}


#[cfg(test)]
mod ec_proptests {
    use proptest::prelude::*;

    use super::compute_error_correction_codewords;
    use crate::common::{
        bitstream::BitStream,
        capacity::ec_codewords,
        metadata::{ECLevel, Version},
    };

    pub fn version_strategy() -> BoxedStrategy<Version> {
        prop_oneof![Just(Version::V1), Just(Version::V2), Just(Version::V3), Just(Version::V4)].boxed()
    }

    pub fn ec_level_strategy() -> BoxedStrategy<ECLevel> {
        prop_oneof![Just(ECLevel::L), Just(ECLevel::M), Just(ECLevel::Q), Just(ECLevel::H)].boxed()
    }

    proptest! {
        #[test]
        fn proptest_ecc_len(
            data in prop::collection::vec(any::<u8>(), 0..128),
            version in version_strategy(),
            ecl in ec_level_strategy(),
        ) {
            let bits = BitStream::from(&data[..]);
            let ecc = compute_error_correction_codewords(&bits, version, ecl).unwrap();
            prop_assert_eq!(ecc.len(), ec_codewords(version, ecl).unwrap());
        }
    }
}
