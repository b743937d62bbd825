use super::*;

#[test]
fn page_embeds_view_id_and_assets() {
    let view_id = Uuid::new_v4();
    let html = render_page(view_id);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&view_id.to_string()), "{html}");
    assert!(html.contains("/assets/grid.js"));
    assert!(html.contains("/assets/grid.css"));
    assert!(html.contains(r#"id="grid-host""#));
}

#[test]
fn toolbar_has_four_numeric_inputs_and_render_button() {
    let html = render_page(Uuid::nil());

    assert_eq!(html.matches(r#"type="number""#).count(), 4, "{html}");
    for (label, name) in TOOLBAR_FIELDS {
        assert!(html.contains(label), "missing label {label}");
        assert!(html.contains(&format!(r#"name="{name}""#)), "missing field {name}");
    }
    assert!(html.contains("Render"));
}

#[test]
fn toolbar_field_names_match_toolbar_input() {
    let names: Vec<&str> = TOOLBAR_FIELDS.iter().map(|(_, name)| *name).collect();
    let mut json = serde_json::Map::new();
    for name in &names {
        json.insert((*name).to_owned(), serde_json::json!(1));
    }
    let input: crate::toolbar::ToolbarInput =
        serde_json::from_value(serde_json::Value::Object(json)).expect("toolbar input should deserialize");
    assert_eq!(input.shape().total(), 4);
}
