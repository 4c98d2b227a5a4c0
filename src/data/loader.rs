use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};

use super::model::{Dataset, Patient};
use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Record layout of the v4 format
// ---------------------------------------------------------------------------

/// `id` plus the trailing `sex, age, group`; a line may carry zero
/// measurement columns but never fewer fields than this.
const MIN_FIELDS: usize = 4;

/// Column layout of a v4 inflammation file.
///
/// Roles in order: `id, m_1, ..., m_k, sex, age, group`. `k` varies
/// between files but is fixed within one file; the first data line anchors
/// the expected width (the header line is skipped without validation, so
/// it cannot).
#[derive(Debug, Clone, Copy)]
struct RecordLayout {
    width: usize,
}

impl RecordLayout {
    fn from_first_line(width: usize, line: usize) -> Result<Self> {
        if width < MIN_FIELDS {
            return Err(DataError::ShapeMismatch {
                line,
                expected: MIN_FIELDS,
                found: width,
            });
        }
        Ok(RecordLayout { width })
    }

    /// Number of measurement columns (`k`).
    fn measurement_count(&self) -> usize {
        self.width - MIN_FIELDS
    }

    fn check(&self, found: usize, line: usize) -> Result<()> {
        if found != self.width {
            return Err(DataError::ShapeMismatch {
                line,
                expected: self.width,
                found,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DataFolder – the loader's entry point
// ---------------------------------------------------------------------------

/// A directory holding inflammation data files, addressed by filename.
///
/// The base path is explicit configuration rather than a process-wide
/// global, so tests can point a `DataFolder` at any temporary directory.
#[derive(Debug, Clone)]
pub struct DataFolder {
    root: PathBuf,
}

impl DataFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DataFolder { root: root.into() }
    }

    /// The directory files are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a v4 inflammation CSV by filename.
    ///
    /// Layout per line: `id, m_1, ..., m_k, sex, age, group`, one subject
    /// per line after a single header line. The header is discarded
    /// unconditionally. There is no quoting or escaping: a comma inside a
    /// field value is always a separator (a constraint of the fixed target
    /// format, not of this reader).
    ///
    /// Fails with [`DataError::InvalidInput`] before opening anything if
    /// the filename does not exist under the folder root. Any malformed
    /// line fails the entire load; there is no partial result.
    pub fn load(&self, filename: &str) -> Result<Dataset> {
        let path = self.root.join(filename);
        if !path.is_file() {
            return Err(DataError::InvalidInput {
                filename: filename.to_string(),
                folder: self.root.clone(),
            });
        }

        debug!("loading inflammation data from {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .quoting(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&path)?;

        let mut layout: Option<RecordLayout> = None;
        let mut patients = Vec::new();

        for (i, result) in reader.records().enumerate() {
            let record = result?;
            // 1-based file line: data line i sits after the header.
            let line = i + 2;

            let layout = match layout {
                Some(layout) => {
                    layout.check(record.len(), line)?;
                    layout
                }
                None => {
                    let first = RecordLayout::from_first_line(record.len(), line)?;
                    layout = Some(first);
                    first
                }
            };

            patients.push(parse_patient(&record, layout, line)?);
        }

        info!("loaded {} patients from {}", patients.len(), filename);
        Ok(Dataset::new(patients))
    }
}

/// Map one validated record to a [`Patient`].
///
/// Fields are anchored positionally from both ends: `id` first, then the
/// measurements, then `sex, age, group`.
fn parse_patient(record: &csv::StringRecord, layout: RecordLayout, line: usize) -> Result<Patient> {
    let n = record.len();

    let measurements = (1..1 + layout.measurement_count())
        .map(|col| parse_int(&record[col], "measurement", line))
        .collect::<Result<Vec<i64>>>()?;

    Ok(Patient {
        id: record[0].to_string(),
        sex: record[n - 3].to_string(),
        age: parse_int(&record[n - 2], "age", line)?,
        group: record[n - 1].to_string(),
        measurements,
    })
}

fn parse_int<T>(token: &str, role: &'static str, line: usize) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| DataError::MalformedField {
        line,
        role,
        value: token.to_string(),
        source,
    })
}
