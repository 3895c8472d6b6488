use crate::domain::model::CountTable;
use crate::utils::error::{Result, ZipfError};
use crate::utils::validation::validate_csv_suffix;
use std::fs::File;
use std::io::{ErrorKind, Read};

/// Accumulator for merging word-count CSV sources into one cumulative
/// table.
///
/// Each run owns its own `Collator`; there is no process-wide state, so
/// independent corpora can be collated concurrently with separate
/// instances.
#[derive(Debug, Default)]
pub struct Collator {
    counts: CountTable,
}

impl Collator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update word counts with data from another reader.
    ///
    /// Rows are headerless `word,count` pairs; each count is parsed as an
    /// integer and added onto the accumulator's existing value for that
    /// word.
    pub fn update_counts<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        for row in csv_reader.records() {
            let record = row?;
            if record.len() != 2 {
                return Err(ZipfError::ProcessingError {
                    message: format!("expected (word, count) row, got {:?}", record),
                });
            }
            let word = record.get(0).filter(|w| !w.is_empty());
            let count_field = record.get(1);
            match (word, count_field) {
                (Some(word), Some(count_field)) => {
                    let count: u64 = count_field.trim().parse().map_err(|_| {
                        ZipfError::ProcessingError {
                            message: format!(
                                "invalid count '{}' for word '{}'",
                                count_field, word
                            ),
                        }
                    })?;
                    self.counts.add(word, count);
                }
                _ => {
                    return Err(ZipfError::ProcessingError {
                        message: format!("expected (word, count) row, got {:?}", record),
                    });
                }
            }
        }
        Ok(())
    }

    /// Merge a single named source, classifying failures.
    ///
    /// The `.csv` suffix is validated before any I/O. Missing and
    /// unreadable files become `SourceUnavailable`; anything that fails
    /// while parsing becomes `MalformedSource`.
    pub fn add_source(&mut self, name: &str) -> Result<()> {
        validate_csv_suffix(name)?;

        let file = match File::open(name) {
            Ok(file) => file,
            Err(e) => {
                let reason = match e.kind() {
                    ErrorKind::NotFound => "file not found".to_string(),
                    ErrorKind::PermissionDenied => "insufficient permissions".to_string(),
                    _ => e.to_string(),
                };
                return Err(ZipfError::SourceUnavailable {
                    name: name.to_string(),
                    reason,
                });
            }
        };

        self.update_counts(file)
            .map_err(|e| ZipfError::MalformedSource {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    /// Attempt every source in order. A failing source is logged and
    /// skipped; work already merged from prior sources is kept and later
    /// sources are still processed. Zero usable sources is not an error.
    pub fn aggregate<S: AsRef<str>>(&mut self, sources: &[S]) {
        tracing::info!("Processing files...");
        for source in sources {
            let name = source.as_ref();
            tracing::debug!("Reading in {}...", name);
            match self.add_source(name) {
                Ok(()) => tracing::debug!("Merged counts from {}", name),
                Err(e) => tracing::warn!("{}", e),
            }
        }
    }

    pub fn finish(self) -> CountTable {
        self.counts
    }
}
