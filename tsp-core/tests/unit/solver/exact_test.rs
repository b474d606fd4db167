use super::*;
use crate::helpers::models::*;

#[test]
fn can_find_known_optimum_for_classic_instance() {
    let tour = ExactSolver.solve(&create_classic_matrix(), 0).unwrap();

    assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
    assert_eq!(tour.cost(), 80.);
}

#[test]
fn can_keep_first_found_tour_on_ties() {
    // [0, 1, 3, 2, 0] and its reversal [0, 2, 3, 1, 0] have the same cost, the first one is found first
    let tour = ExactSolver.solve(&create_classic_matrix(), 0).unwrap();

    assert_eq!(tour.path(), &[0, 1, 3, 2, 0]);
}

#[test]
fn can_solve_from_non_zero_start() {
    let tour = ExactSolver.solve(&create_classic_matrix(), 2).unwrap();

    assert_eq!(tour.path(), &[2, 0, 1, 3, 2]);
    assert_eq!(tour.cost(), 80.);
}

parameterized_test! {can_find_same_optimum_from_any_start, (size, seed), {
    can_find_same_optimum_from_any_start_impl(size, seed);
}}

can_find_same_optimum_from_any_start! {
    case01: (5, 101),
    case02: (6, 102),
    case03: (7, 103),
}

fn can_find_same_optimum_from_any_start_impl(size: usize, seed: u64) {
    let matrix = create_random_matrix(size, seed);

    let costs = (0..size).map(|start| ExactSolver.solve(&matrix, start).unwrap().cost()).collect::<Vec<_>>();

    assert!(costs.windows(2).all(|pair| pair[0] == pair[1]), "costs differ: {costs:?}");
}

#[test]
fn can_find_optimum_not_worse_than_any_permutation() {
    let matrix = create_random_matrix(6, 77);
    let tour = ExactSolver.solve(&matrix, 0).unwrap();

    crate::algorithms::permutations::get_permutations(&[1, 2, 3, 4, 5]).into_iter().for_each(|permutation| {
        let path = std::iter::once(0).chain(permutation).chain(std::iter::once(0)).collect::<Vec<_>>();

        assert!(tour.cost() <= evaluate_cost(&matrix, path.as_slice()).unwrap());
    });
}
