use super::*;

parameterized_test! {can_format_error, (error, expected), {
    assert_eq!(error.to_string(), expected);
}}

can_format_error! {
    case01: (TspError::IndexOutOfRange { index: 5, size: 3 }, "city index 5 is out of range, matrix has 3 cities"),
    case02: (TspError::DisconnectedGraph { accepted: 1, required: 3 },
             "cannot connect all cities: accepted 1 tree edges of 3 required"),
    case03: (TspError::InvalidMatrix("asd".to_string()), "invalid distance matrix: asd"),
    case04: (TspError::MalformedInput("no data".to_string()), "malformed input: no data"),
}

#[test]
fn can_convert_to_generic_error() {
    let error: GenericError = TspError::IndexOutOfRange { index: 1, size: 1 }.into();

    assert_eq!(error, GenericError::from("city index 1 is out of range, matrix has 1 cities"));
}

#[test]
fn can_join_many_generic_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errors.as_slice(), ", "), "first, second");
}
