use crate::checksum::{body, weighted_sum, CheckDigitAlgorithm};
use crate::DocumentError;

pub struct VoterTitleChecksum;

const VOTER_TITLE_BODY_LENGTH: usize = 10;
const SEQUENCE_LENGTH: usize = 8;

/// The two digits after the sequential number, read as a number.
pub(crate) fn federative_unit(digits: &[u8]) -> u8 {
    digits[SEQUENCE_LENGTH] * 10 + digits[SEQUENCE_LENGTH + 1]
}

impl CheckDigitAlgorithm for VoterTitleChecksum {
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError> {
        let digits = body(digits, VOTER_TITLE_BODY_LENGTH)?;
        let unit = federative_unit(digits);

        // São Paulo (01) and Minas Gerais (02) turn a zero remainder into 1
        let check_digit = |sum: u32| match sum % 11 {
            10 => 0,
            0 if unit == 1 || unit == 2 => 1,
            remainder => remainder as u8,
        };

        let v1 = check_digit(weighted_sum(&digits[..SEQUENCE_LENGTH], 2..=9));
        let v2 = check_digit(weighted_sum(
            &[digits[SEQUENCE_LENGTH], digits[SEQUENCE_LENGTH + 1], v1],
            7..=9,
        ));
        Ok(vec![v1, v2])
    }
}
