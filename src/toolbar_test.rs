use super::*;
use serde_json::json;

fn input(value: Value) -> ToolbarInput {
    serde_json::from_value(value).expect("toolbar input should deserialize")
}

#[test]
fn numbers_and_numeric_strings_are_counts() {
    let shape = input(json!({
        "text_columns": 3,
        "template_button_columns": "2",
        "component_button_columns": " 1 ",
        "component_combo_box_columns": 4
    }))
    .shape();
    assert_eq!(shape, GridShape::new(3, 2, 1, 4));
}

#[test]
fn missing_fields_are_zero() {
    assert_eq!(input(json!({})).shape(), GridShape::default());
}

#[test]
fn blank_null_and_garbage_are_zero() {
    let shape = input(json!({
        "text_columns": "",
        "template_button_columns": null,
        "component_button_columns": "many",
        "component_combo_box_columns": [1, 2]
    }))
    .shape();
    assert_eq!(shape, GridShape::default());
}

#[test]
fn negative_counts_are_zero() {
    let shape = input(json!({ "text_columns": -5, "template_button_columns": "-1" })).shape();
    assert_eq!(shape.text, 0);
    assert_eq!(shape.template_button, 0);
}

#[test]
fn fractional_numbers_are_zero() {
    assert_eq!(count(Some(&json!(2.5))), 0);
}

#[test]
fn large_counts_are_not_capped() {
    assert_eq!(count(Some(&json!(250_000))), 250_000);
}
