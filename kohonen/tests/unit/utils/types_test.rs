use super::*;

parameterized_test! {can_parse_parameters, (parameters, count, expected), {
    assert_eq!(parse_parameters(parameters, count), Ok(expected));
}}

can_parse_parameters! {
    case01_single: ("0.5", 1, vec![0.5]),
    case02_spaces: ("  0.8   0.1 ", 2, vec![0.8, 0.1]),
    case03_comma: ("1,2", 2, vec![1., 2.]),
    case04_empty: ("", 0, vec![]),
    case05_exponent: ("1e-3", 1, vec![0.001]),
}

#[test]
fn can_reject_bad_token() {
    assert!(matches!(parse_parameters("0.5 abc", 2), Err(SomError::Parse(_))));
}

#[test]
fn can_reject_wrong_parameter_count() {
    assert!(matches!(parse_parameters("0.5 0.6", 1), Err(SomError::Configuration(_))));
    assert!(matches!(parse_parameters("", 1), Err(SomError::Configuration(_))));
}

#[test]
fn can_format_parameters_parseable_back() {
    let values = [0.1 + 0.2, 5., 1e-12];

    let formatted = format_parameters(&values);

    assert_eq!(formatted, "0.30000000000000004 5 0.000000000001");
    assert_eq!(parse_parameters(&formatted, 3), Ok(values.to_vec()));
}
