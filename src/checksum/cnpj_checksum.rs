use crate::checksum::{body, cyclic_mod11_weights, weighted_sum, CheckDigitAlgorithm};
use crate::DocumentError;

pub struct CnpjChecksum;

const BRAZILIAN_CNPJ_BODY_LENGTH: usize = 12;

fn check_digit(digits: &[u8]) -> u8 {
    match weighted_sum(digits, cyclic_mod11_weights(digits.len())) % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder as u8,
    }
}

impl CheckDigitAlgorithm for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError> {
        let mut digits = body(digits, BRAZILIAN_CNPJ_BODY_LENGTH)?.to_vec();
        let v1 = check_digit(&digits);
        digits.push(v1);
        let v2 = check_digit(&digits);
        Ok(vec![v1, v2])
    }
}
