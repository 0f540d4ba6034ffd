use fuelcast_core::config::FormConfig;
use fuelcast_core::models::{FieldValue, FormSnapshot};
use fuelcast_form::{coerce, FormSchema};
use serde_json::json;

fn voyage() -> FormSnapshot {
    FormSnapshot::from_pairs([
        ("ship_type", "Container"),
        ("engine_power_kw", "18000"),
        ("sfoc", "175.5"),
        ("distance_nm", "250"),
        ("avg_speed_knots", "14"),
    ])
}

#[test]
fn voyage_form_becomes_json_payload() {
    let payload = coerce(&voyage().with_checked("monsoon_season"), &FormSchema::default());
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "ship_type": "Container",
            "engine_power_kw": 18000,
            "sfoc": 175.5,
            "distance_nm": 250,
            "avg_speed_knots": 14,
            "monsoon_season": 1,
        })
    );
}

#[test]
fn numeric_looking_category_stays_text() {
    let snapshot = FormSnapshot::from_pairs([("ship_type", "42")]);
    let payload = coerce(&snapshot, &FormSchema::default());
    assert_eq!(payload.get("ship_type"), Some(&FieldValue::Text("42".into())));
}

#[test]
fn empty_numeric_field_serializes_as_null() {
    let snapshot = FormSnapshot::from_pairs([("distance_nm", "")]);
    let payload = coerce(&snapshot, &FormSchema::default());
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value["distance_nm"].is_null());
}

#[test]
fn duplicate_fields_keep_last_value() {
    let snapshot = FormSnapshot::from_pairs([("sfoc", "170"), ("sfoc", "180")]);
    let payload = coerce(&snapshot, &FormSchema::default());
    assert_eq!(payload.get("sfoc"), Some(&FieldValue::Number(180.0)));
}

#[test]
fn schema_follows_config() {
    let config = FormConfig {
        categorical_field: Some("vessel_class".into()),
        toggle_field: Some("night_passage".into()),
    };
    let schema = FormSchema::from_config(&config);
    let snapshot = FormSnapshot::from_pairs([("vessel_class", "Bulk"), ("ship_type", "7")])
        .with_checked("night_passage");
    let payload = coerce(&snapshot, &schema);

    assert_eq!(payload.get("vessel_class"), Some(&FieldValue::Text("Bulk".into())));
    assert_eq!(payload.get("ship_type"), Some(&FieldValue::Number(7.0)));
    assert_eq!(payload.get("night_passage"), Some(&FieldValue::Flag(true)));
    assert!(payload.get("monsoon_season").is_none());
}
