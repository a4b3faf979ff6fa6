mod cnpj_checksum;
mod cpf_checksum;
mod pis_checksum;
mod rg_checksum;
mod voter_title_checksum;

pub use crate::checksum::cnpj_checksum::CnpjChecksum;
pub use crate::checksum::cpf_checksum::CpfChecksum;
pub use crate::checksum::pis_checksum::PisChecksum;
pub use crate::checksum::rg_checksum::RgChecksum;
pub use crate::checksum::voter_title_checksum::VoterTitleChecksum;
pub(crate) use crate::checksum::voter_title_checksum::federative_unit;
use crate::DocumentError;

pub trait CheckDigitAlgorithm: Send + Sync {
    /// Computes the verification digits of a document. `digits` is either the full
    /// document (its verification digits are ignored) or the body alone.
    fn verification_digits(&self, digits: &[u8]) -> Result<Vec<u8>, DocumentError>;
}

/// The first `body_length` digits of `digits`
fn body(digits: &[u8], body_length: usize) -> Result<&[u8], DocumentError> {
    digits.get(..body_length).ok_or(DocumentError::OutOfRange {
        length: digits.len(),
        required: body_length,
    })
}

fn weighted_sum(digits: &[u8], weights: impl IntoIterator<Item = u32>) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

/// Weights 2, 3, ..., 9 assigned from the rightmost digit leftwards, starting
/// over at 2 after 9. Returned in left-to-right order.
fn cyclic_mod11_weights(length: usize) -> impl Iterator<Item = u32> {
    (0..length).rev().map(|from_right| 2 + (from_right % 8) as u32)
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn cyclic_weights_wrap_after_nine() {
        let weights: Vec<u32> = cyclic_mod11_weights(12).collect();
        assert_eq!(weights, vec![5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

        let weights: Vec<u32> = cyclic_mod11_weights(13).collect();
        assert_eq!(weights, vec![6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

        let weights: Vec<u32> = cyclic_mod11_weights(10).collect();
        assert_eq!(weights, vec![3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    }

    #[test]
    fn body_requires_enough_digits() {
        assert_eq!(body(&[1, 2, 3], 2), Ok(&[1, 2][..]));
        assert_eq!(
            body(&[1], 2),
            Err(DocumentError::OutOfRange {
                length: 1,
                required: 2
            })
        );
    }

    #[test]
    fn short_input_is_out_of_range_for_every_algorithm() {
        let algorithms: Vec<&dyn CheckDigitAlgorithm> = vec![
            &CpfChecksum,
            &CnpjChecksum,
            &PisChecksum,
            &RgChecksum,
            &VoterTitleChecksum,
        ];
        for algorithm in algorithms {
            assert!(matches!(
                algorithm.verification_digits(&[1, 2, 3]),
                Err(DocumentError::OutOfRange { length: 3, .. })
            ));
        }
    }
}
