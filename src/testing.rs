//! Invariant checks shared by the fuzz harness and the regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`check_value_list`]: tokenizer and statement invariants for arbitrary text
//! - [`check_quoted_values`]: encode values as a quoted list and tokenize them back

use crate::sql::{Value, ValueTokenizer, parse_statement, parse_values};

/// Expected value for a segment under the `NULL` and trimming rules.
fn expected_value(segment: &str) -> Value {
    match segment.trim() {
        "NULL" => Value::Null,
        trimmed => Value::Text(trimmed.into()),
    }
}

/// Check the invariants that hold for any value list.
///
/// # Panics
///
/// Panics if an invariant is violated.
pub fn check_value_list(input: &str) {
    let mut tokenizer = ValueTokenizer::new(input);
    let values: Vec<Value> = tokenizer.by_ref().collect();

    let commas = input.matches(',').count();
    assert!(
        values.len() <= commas + 1,
        "{} values from {commas} commas in {input:?}",
        values.len()
    );
    for value in &values {
        if let Value::Text(text) = value {
            assert_eq!(text.trim(), text, "untrimmed value in {input:?}");
            assert_ne!(text, "NULL", "NULL literal kept as text in {input:?}");
        }
    }

    // Without quotes, escapes or braces every comma separates.
    if !input.contains(['\'', '"', '\\', '{', '}']) {
        assert!(tokenizer.is_balanced());
        let mut expected: Vec<Value> = input.split(',').map(expected_value).collect();
        if expected.last() == Some(&Value::Text(String::new())) {
            expected.pop();
        }
        assert_eq!(values, expected, "plain value list {input:?}");
    }

    // Wrapping the list into a statement hands it back unchanged.
    let line = format!("INSERT INTO fuzz VALUES({input});");
    let statement = parse_statement(&line).expect("wrapped value list must match");
    assert_eq!(statement.table, "fuzz");
    assert_eq!(statement.values, input);
}

/// Encode `values` as a list of single-quoted values and check that
/// tokenizing it gives every value back.
///
/// Values containing a quote character or a backslash are skipped since the
/// dump never emits them unescaped.
///
/// # Panics
///
/// Panics if a value does not come back as expected.
pub fn check_quoted_values(values: &[String]) {
    let values: Vec<&String> = values
        .iter()
        .filter(|v| !v.contains(['\'', '"', '\\']))
        .collect();

    let list = values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(",");

    let mut expected: Vec<Value> = values.iter().map(|v| expected_value(v)).collect();
    if expected.last() == Some(&Value::Text(String::new())) {
        expected.pop();
    }

    assert_eq!(parse_values(&list), expected, "quoted value list {list:?}");
}
