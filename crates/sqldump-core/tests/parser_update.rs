mod common;

use common::{parse_update, update_err};

#[test]
fn test_update_single_assignment() {
    let stmt = parse_update("UPDATE Customers SET City='Hamburg' WHERE CustomerID=1");
    assert_eq!(stmt.fields, vec!["City", "Hamburg", "CustomerID"]);
    assert_eq!(stmt.table_name, "Customers");
}

#[test]
fn test_update_lowercase_identifiers() {
    let stmt = parse_update("UPDATE customers SET city='Hamburg' WHERE customerId=1");
    assert_eq!(stmt.fields, vec!["city", "Hamburg", "customerId"]);
    assert_eq!(stmt.table_name, "customers");
}

#[test]
fn test_update_multiple_assignments() {
    let stmt = parse_update("UPDATE t SET a='1', b='2' WHERE id=3");
    assert_eq!(stmt.fields, vec!["a", "1", "b", "2", "id"]);
    assert_eq!(stmt.table_name, "t");
}

#[test]
fn test_update_where_value_not_retained() {
    // the where-value is consumed and validated but never appended
    let stmt = parse_update("UPDATE t SET a='x' WHERE id=12345");
    assert_eq!(stmt.fields.last().map(String::as_str), Some("id"));
}

#[test]
fn test_update_missing_set() {
    let err = update_err("UPDATE t a='x' WHERE id=1");
    assert_eq!(err.to_string(), "found \"a\", expected SET");
}

#[test]
fn test_update_non_string_assignment_value() {
    let err = update_err("UPDATE t SET a=1 WHERE id=1");
    assert_eq!(err.to_string(), "found \"1\", expected value");
}

#[test]
fn test_update_missing_where() {
    let err = update_err("UPDATE t SET a='x'");
    assert_eq!(err.to_string(), "found \"EOF\", expected WHERE");
}

#[test]
fn test_update_where_value_must_be_integer() {
    let err = update_err("UPDATE t SET a='x' WHERE id='y'");
    assert_eq!(err.to_string(), "found \"y\", expected integer");
}
