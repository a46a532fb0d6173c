use crate::error::MergeUtilsError;
use log::info;
use sampletoolkit_common::{auto_csv_reader_from_path, column_index, field};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_SAMPLE_TYPE: &str = "Faeces";

const SAMPLE_TYPE_COLUMN: &str = "Sample type";
const SUBJECT_COLUMN: &str = "Subject id";
const VISIT_COLUMN: &str = "Visit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub subject_id: String,
    pub visit: String,
}

impl Sample {
    /// `3250` at visit `V3` gives `3250_v3_<read>.fastq.gz`.
    pub fn merged_name(&self, read: u32) -> String {
        let visit = self.visit.chars().last().map(String::from).unwrap_or_default();
        format!("{}_v{}_{}.fastq.gz", self.subject_id, visit, read)
    }
}

/// Samples of a single sample type, keyed by barcode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SampleTable {
    samples: HashMap<u32, Sample>,
}

impl SampleTable {
    pub fn load<P: AsRef<Path>>(path: P, sample_type: &str) -> Result<Self, MergeUtilsError> {
        let path = path.as_ref();
        let table = Self::from_reader(auto_csv_reader_from_path(path, true)?, sample_type, path)?;
        info!(
            "loaded {} \"{}\" samples from {}",
            table.len(),
            sample_type,
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(
        mut reader: csv::Reader<R>,
        sample_type: &str,
        path: &Path,
    ) -> Result<Self, MergeUtilsError> {
        let headers = reader.headers()?.clone();
        let sample_type_index = column_index(&headers, SAMPLE_TYPE_COLUMN, path)?;
        let subject_index = column_index(&headers, SUBJECT_COLUMN, path)?;
        let visit_index = column_index(&headers, VISIT_COLUMN, path)?;

        let mut samples = HashMap::new();
        for row in reader.records() {
            let row = row?;
            if field(&row, sample_type_index, path)? != sample_type {
                continue;
            }
            let barcode_field = field(&row, 0, path)?;
            let barcode: u32 =
                barcode_field
                    .parse()
                    .map_err(|_| MergeUtilsError::InvalidBarcode {
                        value: barcode_field.to_string(),
                        path: path.display().to_string(),
                    })?;
            let visit = field(&row, visit_index, path)?;
            if visit.is_empty() {
                return Err(MergeUtilsError::EmptyVisit {
                    barcode,
                    path: path.display().to_string(),
                });
            }
            samples.insert(
                barcode,
                Sample {
                    subject_id: field(&row, subject_index, path)?.to_string(),
                    visit: visit.to_string(),
                },
            );
        }
        Ok(SampleTable { samples })
    }

    pub fn get(&self, barcode: u32) -> Option<&Sample> {
        self.samples.get(&barcode)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<(u32, Sample)> for SampleTable {
    fn from_iter<T: IntoIterator<Item = (u32, Sample)>>(iter: T) -> Self {
        SampleTable {
            samples: iter.into_iter().collect(),
        }
    }
}
