mod common;

use common::{ids, producto, productos, productos_schema};
use odata_filter::{filter_records, parse, Condition, Evaluator, Operator, Value};

fn run(filter: &str) -> Vec<i64> {
    let records = productos();
    ids(&filter_records(&records, filter, &productos_schema()))
}

#[test]
fn test_precio_gt_100() {
    assert_eq!(run("Precio gt 100"), vec![1, 2, 3]);
}

#[test]
fn test_open_interval() {
    assert_eq!(run("Precio gt 100 Precio lt 200"), vec![1, 3]);
}

#[test]
fn test_nombre_eq() {
    assert_eq!(run("Nombre eq 'Producto B'"), vec![2]);
}

#[test]
fn test_nombre_contains_ignores_case() {
    assert_eq!(run("Nombre contains('producto')"), vec![1, 2, 3]);
}

#[test]
fn test_unknown_field_returns_everything() {
    assert_eq!(run("Inexistente eq 5"), vec![1, 2, 3]);
    assert_eq!(run("Precio gt 150 Inexistente eq 5"), vec![1, 2, 3]);
}

#[test]
fn test_empty_filter_returns_everything() {
    assert_eq!(run(""), vec![1, 2, 3]);
}

#[test]
fn test_unrecognizable_filter_returns_everything() {
    assert_eq!(run("Precio > 100"), vec![1, 2, 3]);
    assert_eq!(run("Nombre eq Producto"), vec![1, 2, 3]);
}

#[test]
fn test_malformed_fragment_does_not_drop_the_rest() {
    assert_eq!(run("Precio gt 150 Nombre eq 'oops"), vec![2, 3]);
    assert_eq!(run("Precio gt100 ID le 2"), vec![1, 2]);
}

#[test]
fn test_url_encoded_filter() {
    assert_eq!(run("Precio%20gt%20100%20Precio%20lt%20200"), vec![1, 3]);
    assert_eq!(run("Nombre%20eq%20%27Producto%20C%27"), vec![3]);
}

#[test]
fn test_plus_in_literal_is_kept() {
    let records = vec![producto(1, "C++", 10.0), producto(2, "Rust", 20.0)];
    let schema = productos_schema();

    let conditions = parse("Nombre eq 'C++'", &schema).unwrap();
    assert_eq!(conditions[0].literal, Value::from("C++"));
    assert_eq!(ids(&filter_records(&records, "Nombre eq 'C++'", &schema)), vec![1]);
    assert_eq!(
        ids(&filter_records(&records, "Nombre%20eq%20%27C%2B%2B%27", &schema)),
        vec![1]
    );
}

#[test]
fn test_explicit_and_keyword_is_tolerated() {
    assert_eq!(run("Precio gt 100 and Precio lt 200"), vec![1, 3]);
}

#[test]
fn test_integer_field() {
    assert_eq!(run("ID ge 2"), vec![2, 3]);
    assert_eq!(run("ID ne 2"), vec![1, 3]);
    assert_eq!(run("ID lt 2.5"), vec![1, 2]);
}

#[test]
fn test_quoted_number_on_numeric_field() {
    assert_eq!(run("Precio eq '200'"), vec![2]);
}

#[test]
fn test_type_mismatch_yields_nothing() {
    assert!(run("Precio eq 'barato'").is_empty());
    assert!(run("ID eq 'uno' Precio gt 0").is_empty());
}

#[test]
fn test_contains_on_numeric_field_is_dropped() {
    assert_eq!(run("Precio contains('100')"), vec![1, 2, 3]);
    assert_eq!(run("Precio contains('100') ID eq 3"), vec![3]);
}

#[test]
fn test_parse_then_evaluate_matches_filter_records() {
    let schema = productos_schema();
    let records = productos();
    let conditions = parse("Nombre contains('B') Precio ge 200", &schema).unwrap();
    assert_eq!(
        conditions,
        vec![
            Condition::new("Nombre", Operator::Contains, "B"),
            Condition::new("Precio", Operator::GreaterOrEqual, 200.0),
        ]
    );
    let evaluated = Evaluator::new(&schema).evaluate(&records, &conditions);
    assert_eq!(evaluated, filter_records(&records, "Nombre contains('B') Precio ge 200", &schema));
    assert_eq!(ids(&evaluated), vec![2]);
}
