//! Value counts and contents of the tokenizer over combinations of the value
//! shapes found in real dumps.

use strain_dump_extract::{Value, ValueTokenizer, parse_statement, parse_values};

fn text(value: &str) -> Value {
    Value::Text(value.into())
}

/// Value shapes paired with what they tokenize to.
fn atoms() -> Vec<(&'static str, Value)> {
    vec![
        ("12", text("12")),
        ("'a,b'", text("a,b")),
        ("\"x, y\"", text("x, y")),
        (r#"{"k":[1,2]}"#, text(r#"{"k":[1,2]}"#)),
        (r#"{"a":{"b":1,"c":2}}"#, text(r#"{"a":{"b":1,"c":2}}"#)),
        ("NULL", Value::Null),
        ("  spaced out  ", text("spaced out")),
        (r"'it\'s, ok'", text(r"it\'s, ok")),
        (r#"'{\"days\":7}'"#, text(r#"{\"days\":7}"#)),
        ("''", text("")),
        ("", text("")),
    ]
}

/// All sequences of up to three atoms.
fn combinations() -> Vec<Vec<(&'static str, Value)>> {
    let atoms = atoms();
    let mut combinations: Vec<Vec<(&str, Value)>> = vec![vec![]];
    let mut previous = combinations.clone();
    for _ in 0..3 {
        let mut next = Vec::new();
        for prefix in &previous {
            for atom in &atoms {
                let mut combination = prefix.clone();
                combination.push(atom.clone());
                next.push(combination);
            }
        }
        combinations.extend(next.iter().cloned());
        previous = next;
    }
    combinations
}

#[test]
fn test_one_value_per_top_level_segment() {
    for combination in combinations() {
        let input = combination
            .iter()
            .map(|(raw, _)| *raw)
            .collect::<Vec<_>>()
            .join(",");
        let mut expected: Vec<Value> = combination.into_iter().map(|(_, v)| v).collect();
        if expected.last() == Some(&text("")) {
            expected.pop();
        }

        let mut tokenizer = ValueTokenizer::new(&input);
        let values: Vec<Value> = tokenizer.by_ref().collect();
        assert_eq!(values, expected, "input {input:?}");
        assert!(tokenizer.is_balanced(), "input {input:?}");
    }
}

#[test]
fn test_trailing_comma_adds_no_value() {
    for combination in combinations().into_iter().filter(|c| !c.is_empty()) {
        let input = combination
            .iter()
            .map(|(raw, _)| format!("{raw},"))
            .collect::<String>();
        let expected: Vec<Value> = combination.into_iter().map(|(_, v)| v).collect();
        assert_eq!(parse_values(&input), expected, "input {input:?}");
    }
}

#[test]
fn test_statement_to_values() {
    let line = r#"INSERT INTO strains VALUES(1,'hello, world',{"days":7},NULL);"#;
    let statement = parse_statement(line).unwrap();
    assert_eq!(statement.table, "strains");
    assert_eq!(
        parse_values(statement.values),
        vec![
            text("1"),
            text("hello, world"),
            text(r#"{"days":7}"#),
            Value::Null
        ]
    );
}

#[test]
fn test_closing_parenthesis_inside_value() {
    let line = "INSERT INTO breeders VALUES(1,'Smile :-);',2);";
    let statement = parse_statement(line).unwrap();
    assert_eq!(
        parse_values(statement.values),
        vec![text("1"), text("Smile :-);"), text("2")]
    );
}
