use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::ParseFloatError,
    path::Path,
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

use crate::{Real, SubIterationTime, Time};

pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO Error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Cannot parse '{field}' on line {line}: {source}")]
    ParseFloat {
        line: usize,
        field: String,
        source: ParseFloatError,
    },
    #[error("Expected 2 or 3 columns on line {line}, got {columns}")]
    ColumnCount { line: usize, columns: usize },
    #[error("Line {line} has {columns} columns but earlier lines have {expected}")]
    MixedArity {
        line: usize,
        columns: usize,
        expected: usize,
    },
}

/// A series of samples read from a file, keyed either by a scalar time
/// or by a primary time and sub-iteration marker.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleSeries {
    Scalar(Vec<(Time, Real)>),
    SubIteration(Vec<(SubIterationTime, Real)>),
}

impl Default for SampleSeries {
    fn default() -> Self {
        Self::Scalar(Vec::default())
    }
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        match self {
            SampleSeries::Scalar(points) => points.len(),
            SampleSeries::SubIteration(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses lines of the form `time,value` or `time,sub,value`.
    /// Blank lines and lines starting with `#` are skipped.
    /// Every data line must have the same number of columns.
    pub fn parse<R: BufRead>(reader: R) -> LoaderResult<Self> {
        let mut series = SampleSeries::default();
        let mut arity = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields = trimmed
                .split(',')
                .map(|field| parse_field(field, line_number))
                .collect::<LoaderResult<Vec<Real>>>()?;

            match (arity, fields.len()) {
                (None, columns @ (2 | 3)) => {
                    arity = Some(columns);
                    if columns == 3 {
                        series = SampleSeries::SubIteration(Vec::default());
                    }
                }
                (None, columns) => {
                    return Err(LoaderError::ColumnCount {
                        line: line_number,
                        columns,
                    })
                }
                (Some(expected), columns) if expected != columns => {
                    return Err(LoaderError::MixedArity {
                        line: line_number,
                        columns,
                        expected,
                    })
                }
                _ => {}
            }

            match (&mut series, fields.as_slice()) {
                (SampleSeries::Scalar(points), &[time, value]) => points.push((time, value)),
                (SampleSeries::SubIteration(points), &[primary, sub, value]) => {
                    points.push((SubIterationTime::new(primary, sub), value))
                }
                _ => {
                    return Err(LoaderError::ColumnCount {
                        line: line_number,
                        columns: fields.len(),
                    })
                }
            }
        }
        Ok(series)
    }
}

fn parse_field(field: &str, line: usize) -> LoaderResult<Real> {
    let field = field.trim();
    Real::from_str(field).map_err(|source| LoaderError::ParseFloat {
        line,
        field: field.to_owned(),
        source,
    })
}

pub fn load_sample_file(path: &Path) -> LoaderResult<SampleSeries> {
    let file = File::open(path)?;
    let series = SampleSeries::parse(BufReader::new(file))?;
    debug!("Loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}
