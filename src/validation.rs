use serde::{Deserialize, Serialize};

use crate::checksum::federative_unit;
use crate::digits::{DigitSequence, X_SENTINEL};
use crate::document::{DocumentDescriptor, DocumentType};
use crate::DocumentError;

/// Which checks a document has to pass to be considered valid.
///
/// Every policy checks the length and the verification digits. Policies are
/// ordered: a document valid under one is valid under every laxer one.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Length and verification digits only
    Basic,
    /// Also rejects the known-invalid repeated-digit sequences
    Permissive,
    /// Also runs the document-specific structural checks
    #[default]
    Strict,
}

impl ValidationPolicy {
    fn rejects_known_invalid(self) -> bool {
        match self {
            ValidationPolicy::Basic => false,
            ValidationPolicy::Permissive | ValidationPolicy::Strict => true,
        }
    }

    fn checks_structure(self) -> bool {
        match self {
            ValidationPolicy::Basic | ValidationPolicy::Permissive => false,
            ValidationPolicy::Strict => true,
        }
    }
}

const VOTER_TITLE_FEDERATIVE_UNITS: std::ops::RangeInclusive<u8> = 1..=28;

/// Checks `digits` against the descriptor. Cheap checks run first and short-circuit.
pub(crate) fn is_valid_digits(
    descriptor: &DocumentDescriptor,
    digits: &DigitSequence,
    policy: ValidationPolicy,
) -> Result<bool, DocumentError> {
    if digits.len() != descriptor.total_length {
        return Ok(false);
    }

    if policy.rejects_known_invalid() && descriptor.is_known_invalid(digits) {
        return Ok(false);
    }

    if policy.checks_structure() && !has_valid_structure(descriptor.document_type, digits) {
        return Ok(false);
    }

    let body = digits.remove_verification_digits(descriptor.verification_length)?;
    let expected = descriptor.checksum.verification_digits(body)?;
    let actual = digits.extract_verification_digits(descriptor.verification_length)?;
    Ok(expected == actual)
}

/// Document-specific checks beyond the checksum. Expects a sequence of the document's length.
fn has_valid_structure(document_type: DocumentType, digits: &DigitSequence) -> bool {
    match document_type {
        DocumentType::Cpf => {
            let sum = digits.sum();
            sum <= 99 && sum % 11 == 0
        }
        DocumentType::VoterTitle => {
            VOTER_TITLE_FEDERATIVE_UNITS.contains(&federative_unit(digits.as_slice()))
        }
        // `X` is only allowed as the verification digit
        DocumentType::Rg => {
            let body = &digits.as_slice()[..digits.len() - 1];
            !body.contains(&X_SENTINEL)
        }
        DocumentType::Cnpj | DocumentType::Pis => true,
    }
}
