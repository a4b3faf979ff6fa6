use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::checksum::{
    CheckDigitAlgorithm, CnpjChecksum, CpfChecksum, PisChecksum, RgChecksum, VoterTitleChecksum,
};
use crate::digits::{
    insert_leading_zeros, remove_trailing, DecimalCodec, DecimalWithXCodec, DigitCodec,
    DigitSequence,
};

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DocumentType {
    /// Cadastro de Pessoas Físicas, the individual taxpayer registry number
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, the company registry number
    Cnpj,
    /// Programa de Integração Social worker number
    Pis,
    /// Registro Geral, the state identity card number
    Rg,
    /// Título de Eleitor
    VoterTitle,
}

impl DocumentType {
    pub(crate) fn descriptor(self) -> &'static DocumentDescriptor {
        match self {
            DocumentType::Cpf => &CPF,
            DocumentType::Cnpj => &CNPJ,
            DocumentType::Pis => &PIS,
            DocumentType::Rg => &RG,
            DocumentType::VoterTitle => &VOTER_TITLE,
        }
    }
}

/// Everything needed to read, check and print one kind of document.
pub(crate) struct DocumentDescriptor {
    pub document_type: DocumentType,
    /// Digit count including the verification digits
    pub total_length: usize,
    pub verification_length: usize,
    /// `(digit_index, separator)`: the separator is printed before the digit at `digit_index`
    pub separators: &'static [(usize, char)],
    pub codec: &'static dyn DigitCodec,
    pub checksum: &'static dyn CheckDigitAlgorithm,
}

// ddd.ddd.ddd/vv
pub(crate) static CPF: DocumentDescriptor = DocumentDescriptor {
    document_type: DocumentType::Cpf,
    total_length: 11,
    verification_length: 2,
    separators: &[(3, '.'), (6, '.'), (9, '/')],
    codec: &DecimalCodec,
    checksum: &CpfChecksum,
};

// dd.ddd.ddd/dddd-vv
pub(crate) static CNPJ: DocumentDescriptor = DocumentDescriptor {
    document_type: DocumentType::Cnpj,
    total_length: 14,
    verification_length: 2,
    separators: &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
    codec: &DecimalCodec,
    checksum: &CnpjChecksum,
};

// dd.ddddddd.d-v
pub(crate) static PIS: DocumentDescriptor = DocumentDescriptor {
    document_type: DocumentType::Pis,
    total_length: 11,
    verification_length: 1,
    separators: &[(2, '.'), (9, '.'), (10, '-')],
    codec: &DecimalCodec,
    checksum: &PisChecksum,
};

// dd.ddd.ddd-v
pub(crate) static RG: DocumentDescriptor = DocumentDescriptor {
    document_type: DocumentType::Rg,
    total_length: 9,
    verification_length: 1,
    separators: &[(2, '.'), (5, '.'), (8, '-')],
    codec: &DecimalWithXCodec,
    checksum: &RgChecksum,
};

// dddd dddd dd vv
pub(crate) static VOTER_TITLE: DocumentDescriptor = DocumentDescriptor {
    document_type: DocumentType::VoterTitle,
    total_length: 12,
    verification_length: 2,
    separators: &[(4, ' '), (8, ' '), (10, ' ')],
    codec: &DecimalCodec,
    checksum: &VoterTitleChecksum,
};

impl DocumentDescriptor {
    pub fn body_length(&self) -> usize {
        self.total_length - self.verification_length
    }

    pub fn extract(&self, text: &str) -> DigitSequence {
        DigitSequence::extract(text, self.codec)
    }

    /// The sequences made of a single repeated digit. They are never issued,
    /// whatever their checksum says.
    pub fn known_invalid(&self) -> impl Iterator<Item = DigitSequence> + '_ {
        (0..10u8).map(|digit| DigitSequence::new(vec![digit; self.total_length]))
    }

    pub fn is_known_invalid(&self, digits: &DigitSequence) -> bool {
        self.known_invalid().any(|invalid| invalid == *digits)
    }

    /// Extracts the digits of `text`, truncates or zero-pads them to the document
    /// length and inserts the separators. The output is well-formed, not necessarily valid.
    pub fn format(&self, text: &str) -> String {
        let joined = self.extract(text).join(self.codec);
        let digits = insert_leading_zeros(
            remove_trailing(&joined, self.total_length),
            self.total_length,
        );

        let mut formatted = String::with_capacity(self.total_length + self.separators.len());
        let mut separators = self.separators.iter().peekable();
        for (index, c) in digits.chars().enumerate() {
            if let Some((_, separator)) = separators.next_if(|(at, _)| *at == index) {
                formatted.push(*separator);
            }
            formatted.push(c);
        }
        formatted
    }
}
