#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use super::*;
use crate::utils::{TspError, is_close};

/// An immutable square matrix of non-negative edge weights. Invariants are checked on construction:
/// the matrix is square, symmetric, has zero diagonal and all values are finite and non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a new matrix from row-major flattened values.
    pub fn new(values: Vec<Float>) -> Result<Self, TspError> {
        let size = (values.len() as Float).sqrt() as usize;

        if size * size != values.len() {
            return Err(TspError::InvalidMatrix(format!("non-square flatten matrix: {} items", values.len())));
        }

        let matrix = Self { size, values };
        matrix.validate()?;

        Ok(matrix)
    }

    /// Creates a new matrix from rows.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> Result<Self, TspError> {
        let size = rows.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(TspError::InvalidMatrix(format!(
                "row {idx} has {} values, expected {size} for square matrix",
                row.len()
            )));
        }

        let matrix = Self { size, values: rows.into_iter().flatten().collect() };
        matrix.validate()?;

        Ok(matrix)
    }

    /// Creates a symmetric matrix from values strictly above the diagonal given row by row:
    /// `[0][1], [0][2], .., [0][n-1], [1][2], .., [n-2][n-1]`.
    pub fn from_upper_triangle(size: usize, values: &[Float]) -> Result<Self, TspError> {
        Self::from_triangle(size, values, (0..size).flat_map(|i| (i + 1..size).map(move |j| (i, j))))
    }

    /// Creates a symmetric matrix from values strictly below the diagonal given row by row:
    /// `[1][0], [2][0], [2][1], [3][0], .., [n-1][n-2]`.
    pub fn from_lower_triangle(size: usize, values: &[Float]) -> Result<Self, TspError> {
        Self::from_triangle(size, values, (1..size).flat_map(|i| (0..i).map(move |j| (i, j))))
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the matrix has no cities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a weight of the edge between two cities.
    pub fn weight(&self, from: Node, to: Node) -> Result<Cost, TspError> {
        self.check_index(from)?;
        self.check_index(to)?;

        Ok(self.values[from * self.size + to])
    }

    /// Returns an error if the given city is outside of the matrix bounds.
    pub fn check_index(&self, node: Node) -> Result<(), TspError> {
        if node < self.size { Ok(()) } else { Err(TspError::IndexOutOfRange { index: node, size: self.size }) }
    }

    /// Returns matrix rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Float]> + '_ {
        // NOTE chunks panics on zero chunk size
        self.values.chunks(self.size.max(1)).take(self.size)
    }

    /// Checks whether the matrix is metric: `w(i, k) <= w(i, j) + w(j, k)` for all cities.
    /// Solvers never call it, the approximation bound of the MST based solver depends on it.
    pub fn satisfies_triangle_inequality(&self) -> bool {
        let w = |i: Node, j: Node| self.values[i * self.size + j];
        let holds = |direct: Float, detour: Float| direct <= detour || is_close(direct, detour);

        (0..self.size).all(|i| (0..self.size).all(|j| (0..self.size).all(|k| holds(w(i, k), w(i, j) + w(j, k)))))
    }

    /// Creates a matrix filling symmetric cells in the order given by `cells`.
    fn from_triangle<I>(size: usize, values: &[Float], cells: I) -> Result<Self, TspError>
    where
        I: Iterator<Item = (Node, Node)>,
    {
        let expected = size * size.saturating_sub(1) / 2;
        if values.len() != expected {
            return Err(TspError::InvalidMatrix(format!(
                "triangle of {size} cities needs {expected} values, got {}",
                values.len()
            )));
        }

        let mut matrix = vec![0.; size * size];
        cells.zip(values.iter()).for_each(|((i, j), &weight)| {
            matrix[i * size + j] = weight;
            matrix[j * size + i] = weight;
        });

        let matrix = Self { size, values: matrix };
        matrix.validate()?;

        Ok(matrix)
    }

    fn validate(&self) -> Result<(), TspError> {
        for i in 0..self.size {
            for j in 0..self.size {
                let weight = self.values[i * self.size + j];

                if !weight.is_finite() {
                    return Err(TspError::InvalidMatrix(format!("weight at [{i}][{j}] is not finite: {weight}")));
                }

                if weight < 0. {
                    return Err(TspError::InvalidMatrix(format!("weight at [{i}][{j}] is negative: {weight}")));
                }

                if i == j && weight != 0. {
                    return Err(TspError::InvalidMatrix(format!("diagonal weight at [{i}][{i}] is not zero: {weight}")));
                }

                let opposite = self.values[j * self.size + i];
                if weight != opposite {
                    return Err(TspError::InvalidMatrix(format!(
                        "matrix is not symmetric: [{i}][{j}] is {weight}, [{j}][{i}] is {opposite}"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl WeightedGraph for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn weight(&self, from: Node, to: Node) -> Option<Cost> {
        if from < self.size && to < self.size { self.values.get(from * self.size + to).copied() } else { None }
    }
}
