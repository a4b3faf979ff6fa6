use crate::checksum::{body, weighted_sum, CheckDigitAlgorithm};
use crate::DocumentError;

pub struct CpfChecksum;

const BRAZILIAN_CPF_BODY_LENGTH: usize = 9;

/// Weights run from `len + 1` down to 2, so the second digit (computed over the
/// body plus the first digit) uses 11 down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let weights = (2..=digits.len() as u32 + 1).rev();
    match weighted_sum(digits, weights) * 10 % 11 {
        10 => 0,
        remainder => remainder as u8,
    }
}

impl CheckDigitAlgorithm for CpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError> {
        let mut digits = body(digits, BRAZILIAN_CPF_BODY_LENGTH)?.to_vec();
        let v1 = check_digit(&digits);
        digits.push(v1);
        let v2 = check_digit(&digits);
        Ok(vec![v1, v2])
    }
}
