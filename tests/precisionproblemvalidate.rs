use precisionproblem::configuration::Configuration;
use precisionproblem::pipeline::exactdecimal::to_plain_string;
use precisionproblem::pipeline::roundingpipeline::evaluate;
use precisionproblem::validator::{
    check_case,
    run_table,
    ValidationCase
};

fn naive_text(literal: &str) -> String {
    let case = ValidationCase::new(literal, "");
    match check_case(&case, 2) {
        Ok(outcome) => outcome.actual().to_owned(),
        Err(precisionproblem::error::PrecisionError::AssertionMismatch { actual, .. }) => actual,
        Err(error) => panic!("{}", error)
    }
}

#[test]
fn standard_table_matches_naive_rounding() {
    let configuration = Configuration::standard();
    for result in run_table(configuration.validation()) {
        if let Err(error) = result {
            panic!("{}", error);
        }
    }
}

#[test]
fn standard_table_covers_every_block() {
    let configuration = Configuration::standard();
    let literals: Vec<String> = run_table(configuration.validation())
        .into_iter()
        .filter_map(|result| result.ok())
        .map(|outcome| outcome.literal().to_owned())
        .collect();
    assert_eq!(literals.len(), 10 + 9 + 9 + 10 + 1 + 1);
    assert_eq!(literals.first().map(String::as_str), Some("5.7241"));
    assert!(literals.contains(&"5.995".to_owned()));
    assert_eq!(literals.last().map(String::as_str), Some("200000000000000.0544"));
}

#[test]
fn below_half_stays() {
    assert_eq!(naive_text("5.7241"), "5.72");
    assert_eq!(naive_text("5.7349"), "5.73");
}

#[test]
fn above_half_rounds_up() {
    assert_eq!(naive_text("5.7251"), "5.73");
    assert_eq!(naive_text("5.7350"), "5.74");
}

#[test]
fn tie_rounds_to_even() {
    assert_eq!(naive_text("5.7250"), "5.72");
    assert_eq!(naive_text("5.7350"), "5.74");
}

#[test]
fn rounded_whole_number_keeps_single_zero() {
    assert_eq!(naive_text("5.995"), "6.0");
}

#[test]
fn integer_part_exhausts_significant_digits() {
    assert_eq!(naive_text("200000000000000.0544"), "2.0000000000000006E14");
}

#[test]
fn demonstration_input_rounds_incorrectly() {
    let configuration = Configuration::standard();
    let demonstration = configuration.demonstration();
    let evaluation = evaluate(demonstration.input(), demonstration.digits()).unwrap();
    assert_eq!(to_plain_string(evaluation.correct()), demonstration.expected_rounded());
    assert_eq!(to_plain_string(evaluation.naive()), demonstration.incorrect_rounded());
}
