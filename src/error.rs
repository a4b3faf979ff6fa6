use thiserror::Error;

use crate::document::DocumentType;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// No document was given to `format` or `is_valid`
    #[error("Missing document")]
    MissingDocument,

    /// A digit sequence was too short to be sliced as requested. This is an
    /// internal logic error and is not reachable through the public façade.
    #[error("Digit sequence of length {length} is out of range ({required} required)")]
    OutOfRange { length: usize, required: usize },

    #[error("Could not generate a valid {document} after {attempts} attempts")]
    GenerationExhausted {
        document: DocumentType,
        attempts: usize,
    },
}

#[cfg(test)]
mod test {
    use crate::document::DocumentType;
    use crate::DocumentError;

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(DocumentError::MissingDocument.to_string(), "Missing document");
        assert_eq!(
            DocumentError::OutOfRange {
                length: 1,
                required: 2
            }
            .to_string(),
            "Digit sequence of length 1 is out of range (2 required)"
        );
        assert_eq!(
            DocumentError::GenerationExhausted {
                document: DocumentType::VoterTitle,
                attempts: 3
            }
            .to_string(),
            "Could not generate a valid voter_title after 3 attempts"
        );
    }
}
