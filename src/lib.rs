// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod digits;
mod document;
mod documents;
mod error;
mod generator;
mod observability;
mod scanner;
mod validation;

// This is the public API of the brdocs core library
pub use document::DocumentType;
pub use documents::{cnpj, cpf, document, pis, rg, voter_title, Document};
pub use error::DocumentError;
pub use generator::{GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
pub use observability::labels::Labels;
pub use scanner::{CreateScannerError, DocumentMatch, DocumentScanner, ScannerConfig};
pub use validation::ValidationPolicy;

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::{
    checksum::{
        CheckDigitAlgorithm, CnpjChecksum, CpfChecksum, PisChecksum, RgChecksum,
        VoterTitleChecksum,
    },
    digits::{
        insert_leading_zeros, remove_trailing, DecimalCodec, DecimalWithXCodec, DigitCodec,
        DigitSequence, X_SENTINEL,
    },
};
