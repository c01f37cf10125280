use super::galois::GF;
use crate::common::error::QRResult;

// Term
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Term {
    pub coeff: GF,
    pub exp: usize,
}

impl Term {
    pub fn new(coeff: u8, exp: usize) -> Self {
        Self { coeff: GF(coeff), exp }
    }

    // Integer notation of a^alpha * x^exp
    pub fn from_alpha(alpha: usize, exp: usize) -> Self {
        Self { coeff: GF::exp(alpha), exp }
    }

    pub fn alpha(&self) -> QRResult<u8> {
        self.coeff.log()
    }

    pub fn multiply_with_alpha(&self, alpha: u8) -> QRResult<Self> {
        let sum = self.alpha()? as usize + alpha as usize;
        Ok(Self::from_alpha(sum % 255, self.exp))
    }

    pub fn multiply_with_exponent(&self, k: usize) -> Self {
        Self { coeff: self.coeff, exp: self.exp + k }
    }

    // Addition in GF(256). Keeps the exponent of the left operand.
    pub fn xor(&self, other: &Self) -> Self {
        Self { coeff: self.coeff + other.coeff, exp: self.exp }
    }
}


// Polynomial
//------------------------------------------------------------------------------

// Terms are kept in descending exponent order
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    // Data codewords as coefficients of x^(n-1+ec_len) ... x^ec_len, followed
    // by ec_len zero terms that receive the remainder
    pub fn message(data: &[u8], ec_len: usize) -> Self {
        let n = data.len();
        let terms = data
            .iter()
            .copied()
            .chain(std::iter::repeat(0).take(ec_len))
            .enumerate()
            .map(|(i, c)| Term::new(c, n + ec_len - 1 - i))
            .collect();
        Self { terms }
    }

    // Product of (x - a^i) for i in 0..degree
    pub fn generator(degree: usize) -> Self {
        let mut coeffs = vec![GF::ONE];
        for i in 0..degree {
            let root = GF::exp(i);
            let mut next = vec![GF::ZERO; coeffs.len() + 1];
            for (j, &c) in coeffs.iter().enumerate() {
                next[j] = next[j] + c;
                next[j + 1] = next[j + 1] + c * root;
            }
            coeffs = next;
        }
        let terms =
            coeffs.into_iter().enumerate().map(|(i, c)| Term { coeff: c, exp: degree - i }).collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn lead(&self) -> Option<&Term> {
        self.terms.first()
    }

    pub fn lead_exponent(&self) -> usize {
        self.lead().map_or(0, |t| t.exp)
    }

    pub fn multiply_with_exponent(&self, k: usize) -> Self {
        Self { terms: self.terms.iter().map(|t| t.multiply_with_exponent(k)).collect() }
    }

    pub fn multiply_with_alpha(&self, alpha: u8) -> QRResult<Self> {
        let terms = self.terms.iter().map(|t| t.multiply_with_alpha(alpha)).collect::<QRResult<_>>()?;
        Ok(Self { terms })
    }

    // Term-wise XOR by position. Positions past the end of other XOR against
    // zero.
    pub fn xor(&self, other: &Self) -> Self {
        debug_assert!(
            self.len() >= other.len(),
            "Divisor is longer than dividend: {} > {}",
            other.len(),
            self.len()
        );
        let terms = self
            .terms
            .iter()
            .enumerate()
            .map(|(i, t)| match other.terms.get(i) {
                Some(o) => t.xor(o),
                None => *t,
            })
            .collect();
        Self { terms }
    }

    pub fn drop_lead(&mut self) {
        if !self.terms.is_empty() {
            self.terms.remove(0);
        }
    }

    pub fn coefficients(&self) -> Vec<u8> {
        self.terms.iter().map(|t| t.coeff.0).collect()
    }

    pub fn alphas(&self) -> QRResult<Vec<u8>> {
        self.terms.iter().map(|t| t.alpha()).collect()
    }
}

#[cfg(test)]
mod polynomial_tests {
    use super::{Polynomial, Term};

    #[test]
    fn test_message() {
        let msg = Polynomial::message(&[32, 91], 3);
        assert_eq!(
            msg.terms(),
            [Term::new(32, 4), Term::new(91, 3), Term::new(0, 2), Term::new(0, 1), Term::new(0, 0)]
        );
        assert_eq!(msg.lead_exponent(), 4);
    }

    #[test]
    fn test_generator() {
        assert_eq!(Polynomial::generator(0).coefficients(), [1]);
        assert_eq!(Polynomial::generator(1).alphas().unwrap(), [0, 0]);
        assert_eq!(Polynomial::generator(2).alphas().unwrap(), [0, 25, 1]);
        assert_eq!(Polynomial::generator(7).alphas().unwrap(), [0, 87, 229, 146, 149, 238, 102, 21]);
        assert_eq!(
            Polynomial::generator(10).alphas().unwrap(),
            [0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45]
        );
        assert_eq!(Polynomial::generator(10).lead_exponent(), 10);
    }

    #[test]
    fn test_generator_has_no_zero_coefficients() {
        for degree in 0..=68 {
            let gen = Polynomial::generator(degree);
            assert_eq!(gen.len(), degree + 1);
            assert!(gen.terms().iter().all(|t| !t.coeff.is_zero()), "degree {degree}");
        }
    }

    #[test]
    fn test_multiply_with_exponent() {
        let gen = Polynomial::generator(2).multiply_with_exponent(3);
        assert_eq!(gen.terms().iter().map(|t| t.exp).collect::<Vec<_>>(), [5, 4, 3]);
    }

    #[test]
    fn test_xor_keeps_tail() {
        let a = Polynomial::message(&[5, 6, 7], 0);
        let b = Polynomial::message(&[5, 1], 0);
        assert_eq!(a.xor(&b).coefficients(), [0, 7, 7]);
    }

    #[test]
    fn test_drop_lead() {
        let mut p = Polynomial::message(&[0, 9], 1);
        p.drop_lead();
        assert_eq!(p.coefficients(), [9, 0]);
        assert_eq!(p.lead_exponent(), 1);
        p.drop_lead();
        p.drop_lead();
        assert!(p.is_empty());
        p.drop_lead();
        assert!(p.is_empty());
    }
}
