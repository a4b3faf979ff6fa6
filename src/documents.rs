use rand::Rng;

use crate::document::{DocumentDescriptor, DocumentType};
use crate::generator::{generate, GeneratorConfig};
use crate::validation::{is_valid_digits, ValidationPolicy};
use crate::DocumentError;

/// Formats, validates and generates one kind of Brazilian document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    document_type: DocumentType,
    policy: ValidationPolicy,
    generator_config: GeneratorConfig,
}

pub fn cpf() -> Document {
    document(DocumentType::Cpf)
}

pub fn cnpj() -> Document {
    document(DocumentType::Cnpj)
}

pub fn pis() -> Document {
    document(DocumentType::Pis)
}

pub fn rg() -> Document {
    document(DocumentType::Rg)
}

pub fn voter_title() -> Document {
    document(DocumentType::VoterTitle)
}

pub fn document(document_type: DocumentType) -> Document {
    Document {
        document_type,
        policy: ValidationPolicy::default(),
        generator_config: GeneratorConfig::default(),
    }
}

impl Document {
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Validation policy used by [Document::is_valid]. Generation keeps its own
    /// policy, see [Document::generator_config].
    pub fn policy(&self, policy: ValidationPolicy) -> Self {
        self.mutate_clone(|x| x.policy = policy)
    }

    pub fn generator_config(&self, generator_config: GeneratorConfig) -> Self {
        self.mutate_clone(|x| x.generator_config = generator_config)
    }

    /// Re-punctuates the digits of `text`, truncating or zero-padding them to the
    /// document length. The result is well-formed but not necessarily valid.
    pub fn format<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<String, DocumentError> {
        let text = text.into().ok_or(DocumentError::MissingDocument)?;
        Ok(self.descriptor().format(text))
    }

    /// A random, formatted document that passes validation.
    pub fn generate(&self) -> Result<String, DocumentError> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Samples have to pass the stricter of [Document::policy] and the generator
    /// policy, so the result always passes [Document::is_valid].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<String, DocumentError> {
        let policy = self.policy.max(self.generator_config.policy);
        generate(self.descriptor(), &self.generator_config.policy(policy), rng)
    }

    /// An invalid document is `Ok(false)`; only a missing one is an error.
    pub fn is_valid<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<bool, DocumentError> {
        let text = text.into().ok_or(DocumentError::MissingDocument)?;
        let descriptor = self.descriptor();
        is_valid_digits(descriptor, &descriptor.extract(text), self.policy)
    }

    fn descriptor(&self) -> &'static DocumentDescriptor {
        self.document_type.descriptor()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
