use super::run_file::RunFile;
use super::sample_table::SampleTable;
use crate::error::MergeUtilsError;
use log::{debug, error, warn};
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append `source` to the merged sample file `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeCommand {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Display for MergeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cat {} >> {}",
            quote_path(&self.source)?,
            quote_path(&self.destination)?
        )
    }
}

fn quote_path(path: &Path) -> Result<String, fmt::Error> {
    let path = path.to_string_lossy();
    shlex::try_quote(&path)
        .map(Cow::into_owned)
        .map_err(|_| fmt::Error)
}

pub fn plan_file<P: AsRef<Path>>(
    path: P,
    samples: &SampleTable,
    outdir: &Path,
) -> Result<MergeCommand, MergeUtilsError> {
    let path = path.as_ref();
    let run_file = RunFile::parse(path).map_err(|reason| MergeUtilsError::Unparseable {
        path: path.to_path_buf(),
        reason,
    })?;
    let sample = samples
        .get(run_file.barcode)
        .ok_or_else(|| MergeUtilsError::SampleNotFound {
            barcode: run_file.barcode,
            path: path.to_path_buf(),
        })?;
    debug!(
        "{}: barcode {} lane {} flowcell {}",
        path.display(),
        run_file.barcode,
        run_file.lane,
        run_file.flowcell
    );
    Ok(MergeCommand {
        source: run_file.path,
        destination: outdir.join(sample.merged_name(run_file.read)),
    })
}

/// Plan one command per input file. Files sharing a destination are appended
/// in the order given.
pub fn plan_merge<P: AsRef<Path>>(
    files: &[P],
    samples: &SampleTable,
    outdir: &Path,
) -> Vec<Result<MergeCommand, MergeUtilsError>> {
    files
        .iter()
        .map(|x| plan_file(x, samples, outdir))
        .collect()
}

/// Write the plan as shell commands. Files that could not be planned are
/// written as shell comments. Returns the barcodes missing from the sample
/// table.
pub fn write_merge_plan<W: Write>(
    plan: &[Result<MergeCommand, MergeUtilsError>],
    mut output: W,
) -> io::Result<Vec<u32>> {
    let mut missing = Vec::new();
    for one in plan {
        match one {
            Ok(command) => writeln!(output, "{}", command)?,
            Err(e @ MergeUtilsError::SampleNotFound { barcode, .. }) => {
                error!("{}", e);
                writeln!(output, "# ERROR: {}", e)?;
                missing.push(*barcode);
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(output, "# ERROR: {}", e)?;
            }
        }
    }
    Ok(missing)
}
