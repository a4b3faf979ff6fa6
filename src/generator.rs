use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::digits::DigitSequence;
use crate::document::DocumentDescriptor;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::observability::metrics::GeneratorMetrics;
use crate::validation::{is_valid_digits, ValidationPolicy};
use crate::DocumentError;

pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// How many random samples may be drawn before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Generated documents are guaranteed to pass this policy
    #[serde(default)]
    pub policy: ValidationPolicy,

    #[serde(skip)]
    pub labels: Labels,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            policy: ValidationPolicy::default(),
            labels: NO_LABEL,
        }
    }
}

impl GeneratorConfig {
    pub fn max_attempts(&self, max_attempts: usize) -> Self {
        self.mutate_clone(|x| x.max_attempts = max_attempts)
    }

    pub fn policy(&self, policy: ValidationPolicy) -> Self {
        self.mutate_clone(|x| x.policy = policy)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// Draws random bodies, appends their verification digits and keeps the first
/// one that validates. The result is formatted.
pub(crate) fn generate<R: Rng + ?Sized>(
    descriptor: &DocumentDescriptor,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<String, DocumentError> {
    let metrics = GeneratorMetrics::new(&config.labels, descriptor.document_type);

    for _ in 0..config.max_attempts {
        let mut digits = DigitSequence::random(descriptor.body_length(), rng);
        let verification_digits = descriptor.checksum.verification_digits(digits.as_slice())?;
        digits.extend_from_slice(&verification_digits);

        // Round trip through text so the sample is checked exactly as a caller would check it
        let text = digits.join(descriptor.codec);
        if is_valid_digits(descriptor, &descriptor.extract(&text), config.policy)? {
            metrics.documents.increment(1);
            return Ok(descriptor.format(&text));
        }
        metrics.rejected_samples.increment(1);
    }

    metrics.exhausted.increment(1);
    Err(DocumentError::GenerationExhausted {
        document: descriptor.document_type,
        attempts: config.max_attempts,
    })
}
