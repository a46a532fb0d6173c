use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

const FIELD_COUNT: usize = 8;

/// One FASTQ file from a sequencing run, named
/// `<prefix>_<barcode>_<lane>_<date>_<flowcell>_<prefix>_<index>_<read>`,
/// e.g. `P1_12_1_20170101_FC1_X_idx1_1.fastq.gz`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFile {
    pub path: PathBuf,
    pub barcode: u32,
    pub lane: u32,
    pub date: String,
    pub flowcell: String,
    pub index: String,
    pub read: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunFileError {
    NoFileName,
    FieldCount(usize),
    InvalidBarcode(String),
    InvalidLane(String),
    InvalidRead(String),
}

impl Display for RunFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunFileError::NoFileName => write!(f, "no file name"),
            RunFileError::FieldCount(x) => {
                write!(f, "expected {} fields but found {}", FIELD_COUNT, x)
            }
            RunFileError::InvalidBarcode(x) => write!(f, "invalid barcode \"{}\"", x),
            RunFileError::InvalidLane(x) => write!(f, "invalid lane \"{}\"", x),
            RunFileError::InvalidRead(x) => write!(f, "invalid read \"{}\"", x),
        }
    }
}

impl RunFile {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, RunFileError> {
        let path = path.as_ref();
        let basename = path
            .file_name()
            .and_then(|x| x.to_str())
            .ok_or(RunFileError::NoFileName)?;
        let fields: Vec<&str> = basename.split('_').collect();
        let (barcode, lane, date, flowcell, index, read) = match fields[..] {
            [_, barcode, lane, date, flowcell, _, index, read] => {
                (barcode, lane, date, flowcell, index, read)
            }
            _ => return Err(RunFileError::FieldCount(fields.len())),
        };

        Ok(RunFile {
            path: path.to_path_buf(),
            barcode: barcode
                .parse()
                .map_err(|_| RunFileError::InvalidBarcode(barcode.to_string()))?,
            lane: lane
                .parse()
                .map_err(|_| RunFileError::InvalidLane(lane.to_string()))?,
            date: date.to_string(),
            flowcell: flowcell.to_string(),
            index: index.to_string(),
            read: read_number(read).ok_or_else(|| RunFileError::InvalidRead(read.to_string()))?,
        })
    }
}

/// `1.fastq.gz`, `R1` and `R2.fastq.gz` carry read numbers 1, 1 and 2.
fn read_number(field: &str) -> Option<u32> {
    field
        .strip_prefix('R')
        .unwrap_or(field)
        .chars()
        .next()?
        .to_digit(10)
}
