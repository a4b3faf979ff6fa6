use crate::checksum::{body, weighted_sum, CheckDigitAlgorithm};
use crate::digits::X_SENTINEL;
use crate::DocumentError;

pub struct RgChecksum;

const RG_BODY_LENGTH: usize = 8;

impl CheckDigitAlgorithm for RgChecksum {
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError> {
        let digits = body(digits, RG_BODY_LENGTH)?;
        let remainder = weighted_sum(digits, 2..=9) % 11;
        let v = match 11 - remainder {
            11 => 0,
            // printed as `X`
            10 => X_SENTINEL,
            digit => digit as u8,
        };
        Ok(vec![v])
    }
}
