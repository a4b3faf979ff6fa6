use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::document::{DocumentDescriptor, DocumentType};
use crate::observability::labels::Labels;
use crate::observability::metrics::ScannerMetrics;
use crate::validation::{is_valid_digits, ValidationPolicy};
use crate::DocumentError;

#[derive(Debug, Error)]
pub enum CreateScannerError {
    #[error("Invalid pattern for {document}")]
    InvalidPattern {
        document: DocumentType,
        #[source]
        source: regex::Error,
    },
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScannerConfig {
    /// Document types to look for. Empty means all of them.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub documents: Vec<DocumentType>,

    #[serde(default)]
    pub policy: ValidationPolicy,

    #[serde(skip)]
    pub labels: Labels,
}

impl ScannerConfig {
    pub fn documents(&self, documents: Vec<DocumentType>) -> Self {
        self.mutate_clone(|x| x.documents = documents)
    }

    pub fn policy(&self, policy: ValidationPolicy) -> Self {
        self.mutate_clone(|x| x.policy = policy)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    pub fn build(&self) -> Result<DocumentScanner, CreateScannerError> {
        DocumentScanner::new(self)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentMatch {
    pub document_type: DocumentType,
    /// Byte offset of the first character of the match
    pub start: usize,
    /// Byte offset one past the last character of the match
    pub end: usize,
    pub value: String,
}

struct CompiledDocumentPattern {
    descriptor: &'static DocumentDescriptor,
    regex: Regex,
    metrics: ScannerMetrics,
}

/// Finds valid document numbers inside free text. Each document type is
/// searched independently, so the same text may match several types.
pub struct DocumentScanner {
    patterns: Vec<CompiledDocumentPattern>,
    policy: ValidationPolicy,
}

const SEPARATOR: &str = "[./ -]?";

/// The document layout with every separator optional, so both formatted and
/// bare numbers match. The last RG digit may be `X`.
fn document_pattern(descriptor: &DocumentDescriptor) -> String {
    let mut pattern = String::from(r"\b");
    for index in 0..descriptor.total_length {
        if descriptor.separators.iter().any(|(at, _)| *at == index) {
            pattern.push_str(SEPARATOR);
        }
        let is_last = index + 1 == descriptor.total_length;
        if is_last && descriptor.document_type == DocumentType::Rg {
            pattern.push_str("[0-9Xx]");
        } else {
            pattern.push_str("[0-9]");
        }
    }
    pattern.push_str(r"\b");
    pattern
}

impl DocumentScanner {
    pub fn new(config: &ScannerConfig) -> Result<Self, CreateScannerError> {
        let mut document_types: Vec<DocumentType> = if config.documents.is_empty() {
            DocumentType::iter().collect()
        } else {
            config.documents.clone()
        };
        document_types.sort();
        document_types.dedup();

        let patterns = document_types
            .into_iter()
            .map(|document_type| {
                let descriptor = document_type.descriptor();
                let regex = Regex::new(&document_pattern(descriptor)).map_err(|source| {
                    CreateScannerError::InvalidPattern {
                        document: document_type,
                        source,
                    }
                })?;
                Ok(CompiledDocumentPattern {
                    descriptor,
                    regex,
                    metrics: ScannerMetrics::new(&config.labels, document_type),
                })
            })
            .collect::<Result<Vec<_>, CreateScannerError>>()?;

        Ok(Self {
            patterns,
            policy: config.policy,
        })
    }

    /// Every valid document in `content`, ordered by position.
    pub fn scan(&self, content: &str) -> Result<Vec<DocumentMatch>, DocumentError> {
        let mut matches = vec![];
        for pattern in &self.patterns {
            for candidate in pattern.regex.find_iter(content) {
                let digits = pattern.descriptor.extract(candidate.as_str());
                if is_valid_digits(pattern.descriptor, &digits, self.policy)? {
                    pattern.metrics.match_count.increment(1);
                    matches.push(DocumentMatch {
                        document_type: pattern.descriptor.document_type,
                        start: candidate.start(),
                        end: candidate.end(),
                        value: candidate.as_str().to_owned(),
                    });
                } else {
                    pattern.metrics.rejected_candidates.increment(1);
                }
            }
        }
        matches.sort_by_key(|m| (m.start, m.document_type));
        Ok(matches)
    }
}

#[cfg(test)]
mod test {
    use crate::document::DocumentType;
    use crate::scanner::{document_pattern, DocumentMatch, ScannerConfig};
    use crate::validation::ValidationPolicy;
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn pattern_follows_layout() {
        assert_eq!(
            document_pattern(DocumentType::Rg.descriptor()),
            r"\b[0-9][0-9][./ -]?[0-9][0-9][0-9][./ -]?[0-9][0-9][0-9][./ -]?[0-9Xx]\b"
        );
    }

    #[test]
    fn finds_formatted_and_bare_documents() {
        let scanner = ScannerConfig::default()
            .documents(vec![DocumentType::Cpf, DocumentType::Cnpj])
            .build()
            .unwrap();
        let content = "cliente 106.694.192/06 empresa 00623904000173, outro 106.694.192/07";
        let matches = scanner.scan(content).unwrap();
        assert_eq!(
            matches,
            vec![
                DocumentMatch {
                    document_type: DocumentType::Cpf,
                    start: 8,
                    end: 22,
                    value: "106.694.192/06".to_string(),
                },
                DocumentMatch {
                    document_type: DocumentType::Cnpj,
                    start: 31,
                    end: 45,
                    value: "00623904000173".to_string(),
                },
            ]
        );
    }

    #[test]
    fn finds_rg_with_x_and_voter_titles() {
        let scanner = ScannerConfig::default()
            .documents(vec![DocumentType::Rg, DocumentType::VoterTitle])
            .build()
            .unwrap();
        let matches = scanner.scan("RG 75.135.000-X, título 8370 4987 13 33.").unwrap();
        let found: Vec<_> = matches
            .iter()
            .map(|m| (m.document_type, m.value.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (DocumentType::Rg, "75.135.000-X"),
                (DocumentType::VoterTitle, "8370 4987 13 33"),
            ]
        );
    }

    #[test]
    fn digits_glued_to_other_digits_are_ignored() {
        let scanner = ScannerConfig::default()
            .documents(vec![DocumentType::Cpf])
            .build()
            .unwrap();
        assert!(scanner.scan("9106.694.192/06").unwrap().is_empty());
        assert!(scanner.scan("106.694.192/069").unwrap().is_empty());
    }

    #[test]
    fn policy_applies_to_matches() {
        let content = "000.000.000/00";
        let strict = ScannerConfig::default()
            .documents(vec![DocumentType::Cpf])
            .build()
            .unwrap();
        assert!(strict.scan(content).unwrap().is_empty());

        let basic = ScannerConfig::default()
            .documents(vec![DocumentType::Cpf])
            .policy(ValidationPolicy::Basic)
            .build()
            .unwrap();
        assert_eq!(basic.scan(content).unwrap().len(), 1);
    }

    #[test]
    fn null_documents_means_all_types() {
        let config: ScannerConfig =
            serde_json::from_str(r#"{"documents": null, "policy": "permissive"}"#).unwrap();
        assert_eq!(
            config,
            ScannerConfig::default().policy(ValidationPolicy::Permissive)
        );

        let scanner = config.build().unwrap();
        let matches = scanner.scan("58.396.330-4 11.2773410.9-0").unwrap();
        let found: Vec<_> = matches.iter().map(|m| m.document_type).collect();
        assert_eq!(found, vec![DocumentType::Rg, DocumentType::Pis]);
    }

    #[test]
    fn should_submit_scanning_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            let scanner = ScannerConfig::default()
                .documents(vec![DocumentType::Cpf])
                .build()
                .unwrap();
            scanner.scan("106.694.192/06 and 106.694.192/07").unwrap();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let labels = vec![Label::new("document_type", "cpf")];

        let metric_value = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts("scanning.match_count", labels.clone()),
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let metric_value = snapshot
            .get(&CompositeKey::new(
                Counter,
                Key::from_parts("scanning.rejected_candidates", labels),
            ))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }

    #[test]
    fn arbitrary_text_scans_without_error() {
        let scanner = ScannerConfig::default().build().unwrap();
        for content in ["", "X", "--..//  ", "0", "1234567890123456789", "título nº 00 00 00"] {
            assert!(scanner.scan(content).is_ok(), "{}", content);
        }
    }
}
