use crate::checksum::{body, cyclic_mod11_weights, weighted_sum, CheckDigitAlgorithm};
use crate::DocumentError;

pub struct PisChecksum;

const PIS_BODY_LENGTH: usize = 10;

impl CheckDigitAlgorithm for PisChecksum {
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError> {
        let digits = body(digits, PIS_BODY_LENGTH)?;
        // weights 3, 2, 9, 8, 7, 6, 5, 4, 3, 2
        let remainder = weighted_sum(digits, cyclic_mod11_weights(PIS_BODY_LENGTH)) % 11;
        let v = match 11 - remainder {
            10 | 11 => 0,
            digit => digit as u8,
        };
        Ok(vec![v])
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;
    use crate::digits::{DecimalCodec, DigitSequence};

    #[test]
    fn test_valid_pis_numbers() {
        let valid_ids = vec![
            ("11.277341.09-0", 0),
            ("95748906823", 3),
            ("88360759835", 5),
            // remainder of 0 or 1 gives 0
            ("37406812410", 0),
            ("58683449780", 0),
        ];
        for (id, expected) in valid_ids {
            let digits = DigitSequence::extract(id, &DecimalCodec);
            assert_eq!(
                PisChecksum.verification_digits(digits.as_slice()),
                Ok(vec![expected])
            );
        }
    }
}
