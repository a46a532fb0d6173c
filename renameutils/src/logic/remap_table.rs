use super::filename::FilenameConvention;
use crate::error::RenameUtilsError;
use log::{info, warn};
use sampletoolkit_common::{auto_csv_reader_from_path, column_index, field};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Corrections keyed by the composite subject/visit key of a file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemapTable {
    entries: HashMap<String, String>,
}

impl RemapTable {
    /// Load a remap table. The first column is the key and `column` names the
    /// column holding the corrected value.
    pub fn load<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, RenameUtilsError> {
        let path = path.as_ref();
        let table = Self::from_reader(auto_csv_reader_from_path(path, true)?, column, path)?;
        info!(
            "loaded {} remap entries from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(
        mut reader: csv::Reader<R>,
        column: &str,
        path: &Path,
    ) -> Result<Self, RenameUtilsError> {
        let value_index = column_index(reader.headers()?, column, path)?;
        let mut entries = HashMap::new();
        for row in reader.records() {
            let row = row?;
            let key = field(&row, 0, path)?;
            let value = field(&row, value_index, path)?;
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(RemapTable { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|x| x.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Turn a table of corrections into one that undoes them.
    ///
    /// For [`FilenameConvention::DottedPrefix`] a key like `3250_v3` mapped to
    /// `9001` becomes `9001_v3` mapped to `3250`: the new key is the value
    /// followed by the last three characters of the old key, the new value is
    /// the first four characters of the old key. Rows whose key is too short
    /// for that are dropped. For [`FilenameConvention::FixedPrefix`] values are
    /// whole prefixes and the table is simply swapped.
    pub fn inverted(self, convention: FilenameConvention) -> Self {
        let entries = match convention {
            FilenameConvention::DottedPrefix => self
                .entries
                .into_iter()
                .filter_map(|(k, v)| match (head(&k, 4), tail(&k, 3)) {
                    (Some(subject), Some(visit)) => Some((format!("{}{}", v, visit), subject)),
                    _ => {
                        warn!("cannot invert remap entry {} -> {}", k, v);
                        None
                    }
                })
                .collect(),
            FilenameConvention::FixedPrefix => {
                self.entries.into_iter().map(|(k, v)| (v, k)).collect()
            }
        };
        RemapTable { entries }
    }
}

impl FromIterator<(String, String)> for RemapTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        RemapTable {
            entries: iter.into_iter().collect(),
        }
    }
}

fn head(s: &str, n: usize) -> Option<String> {
    if s.chars().count() < n {
        return None;
    }
    Some(s.chars().take(n).collect())
}

fn tail(s: &str, n: usize) -> Option<String> {
    let count = s.chars().count();
    if count < n {
        return None;
    }
    Some(s.chars().skip(count - n).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_load_remap_table() -> Result<(), RenameUtilsError> {
        let table = RemapTable::load("./testfiles/remap-subject.csv", "ind.ratt")?;
        assert_eq!(
            table,
            [
                ("3250_v3".to_string(), "9001".to_string()),
                ("3300_v4".to_string(), "3301".to_string()),
            ]
            .into_iter()
            .collect()
        );
        assert_eq!(table.get("3250_v3"), Some("9001"));
        assert_eq!(table.get("3250_v4"), None);

        let table = RemapTable::load("./testfiles/remap-visit.tsv", "correct_id")?;
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("4300_v4"), Some("4301_v4"));
        Ok(())
    }

    #[test]
    fn test_load_missing_column() {
        let result = RemapTable::load("./testfiles/remap-subject.csv", "correct_id");
        assert!(matches!(result, Err(RenameUtilsError::TableError(_))));
        let result = RemapTable::load("./testfiles/no-such-table.csv", "ind.ratt");
        assert!(matches!(result, Err(RenameUtilsError::CsvError(_))));
    }

    #[test]
    fn test_duplicate_keys_last_wins() -> Result<(), RenameUtilsError> {
        let data = "key,ind.ratt\n3250_v3,9001\n3250_v3,9002\n";
        let reader = csv::Reader::from_reader(data.as_bytes());
        let table = RemapTable::from_reader(reader, "ind.ratt", Path::new("inline"))?;
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("3250_v3"), Some("9002"));
        Ok(())
    }

    #[test]
    fn test_inverted_dotted_prefix() -> Result<(), RenameUtilsError> {
        let table = RemapTable::load("./testfiles/remap-subject.csv", "ind.ratt")?
            .inverted(FilenameConvention::DottedPrefix);
        assert_eq!(
            table,
            [
                ("9001_v3".to_string(), "3250".to_string()),
                ("3301_v4".to_string(), "3300".to_string()),
            ]
            .into_iter()
            .collect()
        );
        Ok(())
    }

    #[test]
    fn test_inverted_drops_short_keys() {
        let table: RemapTable = [
            ("v3".to_string(), "9001".to_string()),
            ("3250_v3".to_string(), "9001".to_string()),
        ]
        .into_iter()
        .collect();
        let table = table.inverted(FilenameConvention::DottedPrefix);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("9001_v3"), Some("3250"));
    }

    #[test]
    fn test_inverted_fixed_prefix() -> Result<(), RenameUtilsError> {
        let table = RemapTable::load("./testfiles/remap-visit.tsv", "correct_id")?
            .inverted(FilenameConvention::FixedPrefix);
        assert_eq!(table.get("4301_v4"), Some("4300_v4"));
        assert_eq!(table.get("4300_v4"), None);
        Ok(())
    }
}
