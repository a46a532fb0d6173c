use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Visit code assumed when a file name carries no visit segment.
pub const FIRST_VISIT: &str = "V1";

const DOTTED_PREFIX_WIDTH: usize = 9;
const FIXED_PREFIX_WIDTH: usize = 7;

/// Positional layouts used to embed subject and visit in sequencing file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameConvention {
    /// `1.3250.V3_S34_L001_R1_001.fastq.gz`, or `1.3264_S67_L001_R1_001.fastq.gz`
    /// for first visit samples.
    DottedPrefix,
    /// `4295_v4_1.fastq.gz`; the first seven characters are the whole key.
    FixedPrefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameRecord {
    pub directory: PathBuf,
    pub basename: String,
    pub subject_id: u32,
    pub visit: String,
    pub key: String,
}

impl FilenameRecord {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.basename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoFileName,
    TooShort,
    InvalidSubject(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoFileName => write!(f, "no file name"),
            SkipReason::TooShort => write!(f, "file name is too short"),
            SkipReason::InvalidSubject(x) => write!(f, "subject \"{}\" is not a number", x),
        }
    }
}

impl FilenameConvention {
    /// Name of the remap table column holding corrected values.
    pub fn default_column(&self) -> &'static str {
        match self {
            FilenameConvention::DottedPrefix => "ind.ratt",
            FilenameConvention::FixedPrefix => "correct_id",
        }
    }

    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<FilenameRecord, SkipReason> {
        let path = path.as_ref();
        let basename = path
            .file_name()
            .and_then(|x| x.to_str())
            .ok_or(SkipReason::NoFileName)?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let (subject_id, visit, key) = match self {
            FilenameConvention::DottedPrefix => {
                if basename.get(..2).is_none() || basename.get(6..).is_none() {
                    return Err(SkipReason::TooShort);
                }
                let (subject, visit) = dotted_tokens(basename)?;
                let subject_id = parse_subject(subject)?;
                let key = format!("{}_{}", subject_id, visit.to_lowercase());
                (subject_id, visit, key)
            }
            FilenameConvention::FixedPrefix => {
                let key = basename
                    .get(..FIXED_PREFIX_WIDTH)
                    .ok_or(SkipReason::TooShort)?;
                let subject = key.get(..4).ok_or(SkipReason::TooShort)?;
                let visit = key.get(5..).ok_or(SkipReason::TooShort)?;
                (parse_subject(subject)?, visit.to_string(), key.to_string())
            }
        };

        Ok(FilenameRecord {
            directory,
            basename: basename.to_string(),
            subject_id,
            visit,
            key,
        })
    }

    /// Replace the identifier-bearing prefix of `basename` with `mapped`.
    /// Everything after the fixed-width prefix is kept verbatim.
    pub fn rename(&self, basename: &str, mapped: &str) -> Option<String> {
        match self {
            FilenameConvention::DottedPrefix => Some(format!(
                "{}{}{}",
                basename.get(..2)?,
                mapped,
                basename.get(6..)?
            )),
            FilenameConvention::FixedPrefix => Some(format!(
                "{}{}",
                mapped,
                basename.get(FIXED_PREFIX_WIDTH..)?
            )),
        }
    }
}

fn dotted_tokens(basename: &str) -> Result<(&str, String), SkipReason> {
    let prefix = match basename.char_indices().nth(DOTTED_PREFIX_WIDTH) {
        Some((i, _)) => &basename[..i],
        None => basename,
    };
    let parts: Vec<&str> = prefix.split('.').collect();
    if let [_, subject, visit] = parts[..] {
        // first visit files have no visit segment
        let visit = if visit.starts_with("fi") {
            FIRST_VISIT.to_string()
        } else {
            visit.to_string()
        };
        Ok((subject, visit))
    } else {
        let subject = basename.get(2..6).ok_or(SkipReason::TooShort)?;
        Ok((subject, FIRST_VISIT.to_string()))
    }
}

fn parse_subject(token: &str) -> Result<u32, SkipReason> {
    token
        .parse()
        .map_err(|_| SkipReason::InvalidSubject(token.to_string()))
}
