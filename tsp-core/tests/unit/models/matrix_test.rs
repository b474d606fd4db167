use super::*;
use crate::helpers::models::*;

#[test]
fn can_create_matrix_from_rows() {
    let matrix = create_classic_matrix();

    assert_eq!(matrix.size(), 4);
    assert!(!matrix.is_empty());
    assert_eq!(matrix.weight(1, 3), Ok(25.));
    assert_eq!(matrix.weight(3, 1), Ok(25.));
    assert_eq!(matrix.rows().nth(2), Some([15., 35., 0., 30.].as_slice()));
}

#[test]
fn can_create_empty_matrix() {
    let matrix = DistanceMatrix::new(vec![]).expect("cannot create empty matrix");

    assert_eq!(matrix.size(), 0);
    assert!(matrix.is_empty());
    assert_eq!(matrix.rows().count(), 0);
}

parameterized_test! {can_reject_invalid_values, (values, expected_msg), {
    can_reject_invalid_values_impl(values, expected_msg);
}}

can_reject_invalid_values! {
    case01_non_square: (vec![0., 1., 1.], "non-square flatten matrix: 3 items"),
    case02_asymmetric: (vec![0., 1., 2., 0.], "matrix is not symmetric: [0][1] is 1, [1][0] is 2"),
    case03_negative: (vec![0., -1., -1., 0.], "weight at [0][1] is negative: -1"),
    case04_diagonal: (vec![1., 1., 1., 0.], "diagonal weight at [0][0] is not zero: 1"),
    case05_infinite: (vec![0., Float::INFINITY, Float::INFINITY, 0.], "weight at [0][1] is not finite: inf"),
    case06_nan: (vec![0., Float::NAN, Float::NAN, 0.], "weight at [0][1] is not finite: NaN"),
}

fn can_reject_invalid_values_impl(values: Vec<Float>, expected_msg: &str) {
    let result = DistanceMatrix::new(values);

    assert_eq!(result, Err(TspError::InvalidMatrix(expected_msg.to_string())));
}

#[test]
fn can_reject_non_square_rows() {
    let result = DistanceMatrix::from_rows(vec![vec![0., 1.], vec![1.]]);

    assert_eq!(result, Err(TspError::InvalidMatrix("row 1 has 1 values, expected 2 for square matrix".to_string())));
}

#[test]
fn can_create_matrix_from_upper_triangle() {
    let matrix = DistanceMatrix::from_upper_triangle(4, &[10., 15., 20., 35., 25., 30.]).unwrap();

    assert_eq!(matrix, create_classic_matrix());
}

#[test]
fn can_create_matrix_from_lower_triangle() {
    let matrix = DistanceMatrix::from_lower_triangle(4, &[10., 15., 35., 20., 25., 30.]).unwrap();

    assert_eq!(matrix, create_classic_matrix());
}

#[test]
fn can_reject_triangle_with_wrong_amount_of_values() {
    let result = DistanceMatrix::from_upper_triangle(4, &[10., 15.]);

    assert_eq!(result, Err(TspError::InvalidMatrix("triangle of 4 cities needs 6 values, got 2".to_string())));
}

#[test]
fn can_create_single_city_triangle() {
    let matrix = DistanceMatrix::from_lower_triangle(1, &[]).unwrap();

    assert_eq!(matrix.size(), 1);
    assert_eq!(matrix.weight(0, 0), Ok(0.));
}

#[test]
fn can_return_index_out_of_range_for_weight() {
    let matrix = create_classic_matrix();

    assert_eq!(matrix.weight(0, 4), Err(TspError::IndexOutOfRange { index: 4, size: 4 }));
    assert_eq!(matrix.check_index(7), Err(TspError::IndexOutOfRange { index: 7, size: 4 }));
}

#[test]
fn can_use_matrix_as_weighted_graph() {
    let matrix = create_classic_matrix();
    let graph: &dyn WeightedGraph = &matrix;

    assert_eq!(graph.size(), 4);
    assert_eq!(graph.weight(2, 3), Some(30.));
    assert_eq!(graph.weight(0, 4), None);
    assert_eq!(graph.weight(4, 0), None);
    assert_eq!(graph.weight(usize::MAX, 1), None);
    assert_eq!(graph.weight(1, usize::MAX), None);
}

parameterized_test! {can_check_triangle_inequality, (rows, expected), {
    assert_eq!(create_matrix(rows).satisfies_triangle_inequality(), expected);
}}

can_check_triangle_inequality! {
    case01_metric: (vec![vec![0., 1., 2.], vec![1., 0., 1.], vec![2., 1., 0.]], true),
    case02_non_metric: (vec![vec![0., 1., 5.], vec![1., 0., 1.], vec![5., 1., 0.]], false),
    case03_classic: (vec![
        vec![0., 10., 15., 20.],
        vec![10., 0., 35., 25.],
        vec![15., 35., 0., 30.],
        vec![20., 25., 30., 0.],
    ], false),
}

#[test]
fn can_generate_metric_euclidean_matrix() {
    assert!(create_euclidean_matrix(12, 7).satisfies_triangle_inequality());
}
