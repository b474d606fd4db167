#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::*;
use crate::utils::TspError;

/// A closed sequence of cities which starts and ends at the same city and visits every other
/// city exactly once in between, together with its total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    path: Vec<Node>,
    cost: Cost,
}

impl Tour {
    /// Creates a tour from the path evaluating its cost with the given matrix.
    /// The path is expected to be closed already: the closing edge is not added.
    pub fn evaluate(matrix: &DistanceMatrix, path: Vec<Node>) -> Result<Self, TspError> {
        let cost = evaluate_cost(matrix, path.as_slice())?;

        Ok(Self { path, cost })
    }

    /// Creates a tour from the path and its already known cost.
    pub(crate) fn new(path: Vec<Node>, cost: Cost) -> Self {
        Self { path, cost }
    }

    /// Creates an empty tour used for instances without cities.
    pub fn empty() -> Self {
        Self { path: vec![], cost: 0. }
    }

    /// Creates a trivial tour which consists of a single city.
    pub fn single(city: Node) -> Self {
        Self { path: vec![city], cost: 0. }
    }

    /// Returns the sequence of visited cities.
    pub fn path(&self) -> &[Node] {
        self.path.as_slice()
    }

    /// Returns the total cost of the tour.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Returns the start city if the tour is not empty.
    pub fn start(&self) -> Option<Node> {
        self.path.first().copied()
    }

    /// Returns the length of the path including the closing city.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Splits the tour into its path and cost.
    pub fn into_parts(self) -> (Vec<Node>, Cost) {
        (self.path, self.cost)
    }

    /// Checks whether the path is a hamiltonian cycle over `size` cities: it has `size + 1` cities,
    /// ends at its start and visits each city exactly once in between.
    pub fn is_hamiltonian_cycle(&self, size: usize) -> bool {
        match (size, self.path.as_slice()) {
            (0, path) => path.is_empty(),
            (1, [city]) => *city == 0,
            (_, [first, inner @ .., last]) if self.path.len() == size + 1 && first == last => {
                let mut visited = vec![false; size];

                std::iter::once(first).chain(inner.iter()).all(|&city| {
                    city < size && !std::mem::replace(&mut visited[city], true)
                })
            }
            _ => false,
        }
    }
}

/// Returns the sum of weights between consecutive cities of the path. The path has to include
/// the closing edge already, it is not added here. Empty path costs nothing, single city path
/// costs nothing once the city index is valid.
pub fn evaluate_cost(matrix: &DistanceMatrix, path: &[Node]) -> Result<Cost, TspError> {
    if let Some(&city) = path.iter().find(|&&city| city >= matrix.size()) {
        return Err(TspError::IndexOutOfRange { index: city, size: matrix.size() });
    }

    path.windows(2).try_fold(Cost::default(), |acc, pair| Ok(acc + matrix.weight(pair[0], pair[1])?))
}
