use metrics::{counter, Counter};

use crate::document::DocumentType;
use crate::observability::labels::Labels;

pub struct GeneratorMetrics {
    /// Valid documents handed back to the caller
    pub documents: Counter,
    /// Random samples thrown away because they did not validate
    pub rejected_samples: Counter,
    pub exhausted: Counter,
}

impl GeneratorMetrics {
    pub fn new(labels: &Labels, document_type: DocumentType) -> Self {
        let labels = labels.with_document_type(document_type);
        GeneratorMetrics {
            documents: counter!("generator.documents", labels.clone()),
            rejected_samples: counter!("generator.rejected_samples", labels.clone()),
            exhausted: counter!("generator.exhausted", labels),
        }
    }
}

pub struct ScannerMetrics {
    pub match_count: Counter,
    /// Pattern matches that failed validation
    pub rejected_candidates: Counter,
}

impl ScannerMetrics {
    pub fn new(labels: &Labels, document_type: DocumentType) -> Self {
        let labels = labels.with_document_type(document_type);
        ScannerMetrics {
            match_count: counter!("scanning.match_count", labels.clone()),
            rejected_candidates: counter!("scanning.rejected_candidates", labels),
        }
    }
}
