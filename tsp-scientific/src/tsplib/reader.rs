#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;
use tsp_core::models::DistanceMatrix;
use tsp_core::utils::{Float, TspError};

/// A trait to read a distance matrix from tsplib95 problem with explicit edge weights.
/// Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads tsplib95 problem.
    fn read_tsplib(self) -> Result<DistanceMatrix, TspError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> Result<DistanceMatrix, TspError> {
        TsplibReader::new(self).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> Result<DistanceMatrix, TspError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

/// Specifies how edge weights are laid out in `EDGE_WEIGHT_SECTION`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeWeightFormat {
    /// Row-major values strictly above the diagonal.
    UpperRow,
    /// Row-major values above the diagonal including it.
    UpperDiagRow,
    /// Row-major values strictly below the diagonal.
    LowerRow,
    /// Row-major values below the diagonal including it.
    LowerDiagRow,
    /// All values of the matrix row by row.
    FullMatrix,
}

impl EdgeWeightFormat {
    /// Returns amount of values expected for the given dimension.
    pub fn values_count(&self, dimension: usize) -> usize {
        let triangle = dimension * dimension.saturating_sub(1) / 2;

        match self {
            EdgeWeightFormat::UpperRow | EdgeWeightFormat::LowerRow => triangle,
            EdgeWeightFormat::UpperDiagRow | EdgeWeightFormat::LowerDiagRow => triangle + dimension,
            EdgeWeightFormat::FullMatrix => dimension * dimension,
        }
    }

    /// Creates a matrix from values laid out in this format.
    pub fn create_matrix(&self, dimension: usize, values: &[Float]) -> Result<DistanceMatrix, TspError> {
        let expected = self.values_count(dimension);
        if values.len() != expected {
            return Err(TspError::MalformedInput(format!(
                "expecting {expected} weights for DIMENSION {dimension}, got {}",
                values.len()
            )));
        }

        match self {
            EdgeWeightFormat::UpperRow => DistanceMatrix::from_upper_triangle(dimension, values),
            EdgeWeightFormat::LowerRow => DistanceMatrix::from_lower_triangle(dimension, values),
            EdgeWeightFormat::UpperDiagRow => {
                let diagonal_at = (0..dimension).scan(0, |start, i| {
                    let position = *start;
                    *start += dimension - i;
                    Some(position)
                });
                DistanceMatrix::from_upper_triangle(dimension, &skip_diagonal(values, diagonal_at)?)
            }
            EdgeWeightFormat::LowerDiagRow => {
                let diagonal_at = (0..dimension).scan(0, |start, i| {
                    *start += i + 1;
                    Some(*start - 1)
                });
                DistanceMatrix::from_lower_triangle(dimension, &skip_diagonal(values, diagonal_at)?)
            }
            EdgeWeightFormat::FullMatrix => DistanceMatrix::new(values.to_vec()),
        }
    }
}

impl FromStr for EdgeWeightFormat {
    type Err = TspError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "UPPER_ROW" => Ok(EdgeWeightFormat::UpperRow),
            "UPPER_DIAG_ROW" => Ok(EdgeWeightFormat::UpperDiagRow),
            "LOWER_ROW" => Ok(EdgeWeightFormat::LowerRow),
            "LOWER_DIAG_ROW" => Ok(EdgeWeightFormat::LowerDiagRow),
            "FULL_MATRIX" => Ok(EdgeWeightFormat::FullMatrix),
            _ => Err(TspError::MalformedInput(format!("unsupported EDGE_WEIGHT_FORMAT: '{value}'"))),
        }
    }
}

pub(crate) struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
    format: Option<EdgeWeightFormat>,
}

impl<R: Read> TsplibReader<R> {
    pub(crate) fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None, format: None }
    }

    pub(crate) fn read_problem(&mut self) -> Result<DistanceMatrix, TspError> {
        self.read_meta()?;

        let dimension = self.dimension.ok_or_else(|| TspError::MalformedInput("missing DIMENSION".to_string()))?;
        let format =
            self.format.ok_or_else(|| TspError::MalformedInput("missing EDGE_WEIGHT_FORMAT".to_string()))?;

        let values = self.read_weights()?;
        if values.is_empty() {
            return Err(TspError::MalformedInput("no weight values in EDGE_WEIGHT_SECTION".to_string()));
        }

        format.create_matrix(dimension, values.as_slice()).map_err(|err| match err {
            TspError::InvalidMatrix(msg) => TspError::MalformedInput(msg),
            err => err,
        })
    }

    /// Reads specification part until `EDGE_WEIGHT_SECTION`. Keys which are not needed are ignored.
    pub(crate) fn read_meta(&mut self) -> Result<(), TspError> {
        loop {
            if self.read_line()? == 0 {
                return Err(TspError::MalformedInput("missing EDGE_WEIGHT_SECTION".to_string()));
            }

            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with("EDGE_WEIGHT_SECTION") {
                return Ok(());
            }

            if line == "EOF" {
                return Err(TspError::MalformedInput("missing EDGE_WEIGHT_SECTION".to_string()));
            }

            let Some((key, value)) = line.split_once(':') else {
                return Err(TspError::MalformedInput(format!("expected colon separated string, got: '{line}'")));
            };

            let (key, value) = (key.trim(), value.trim());
            match key {
                "TYPE" if value != "TSP" => {
                    return Err(TspError::MalformedInput(format!("expecting 'TSP' as TYPE, got '{value}'")));
                }
                "EDGE_WEIGHT_TYPE" if value != "EXPLICIT" => {
                    return Err(TspError::MalformedInput(format!(
                        "expecting 'EXPLICIT' as EDGE_WEIGHT_TYPE, got '{value}'"
                    )));
                }
                "DIMENSION" => {
                    let dimension = value
                        .parse::<usize>()
                        .map_err(|err| TspError::MalformedInput(format!("cannot parse DIMENSION: '{err}'")))?;

                    if dimension == 0 {
                        return Err(TspError::MalformedInput("DIMENSION must be positive".to_string()));
                    }

                    self.dimension = Some(dimension);
                }
                "EDGE_WEIGHT_FORMAT" => self.format = Some(value.parse()?),
                _ => {}
            }
        }
    }

    /// Reads weights until `EOF`, the next section or the end of input.
    pub(crate) fn read_weights(&mut self) -> Result<Vec<Float>, TspError> {
        let mut values = Vec::new();

        while self.read_line()? > 0 {
            let line = self.buffer.trim();

            if line == "EOF" || line.ends_with("_SECTION") {
                break;
            }

            values.extend(line.split_whitespace().filter_map(|token| token.parse::<Float>().ok()));
        }

        Ok(values)
    }

    fn read_line(&mut self) -> Result<usize, TspError> {
        self.buffer.clear();
        self.reader
            .read_line(&mut self.buffer)
            .map_err(|err| TspError::MalformedInput(format!("cannot read line: {err}")))
    }
}

/// Returns values without those at diagonal positions, checking that diagonal values are zeros.
fn skip_diagonal<I>(values: &[Float], diagonal_at: I) -> Result<Vec<Float>, TspError>
where
    I: Iterator<Item = usize>,
{
    let mut diagonal = diagonal_at.peekable();

    values
        .iter()
        .enumerate()
        .filter_map(|(idx, &value)| match diagonal.next_if_eq(&idx) {
            Some(_) if value != 0. => {
                Some(Err(TspError::MalformedInput(format!("non-zero diagonal weight {value} at position {idx}"))))
            }
            Some(_) => None,
            None => Some(Ok(value)),
        })
        .collect()
}
