use fuelcast_core::models::prediction_result::error_message;
use fuelcast_core::models::{FieldValue, FormPayload, PredictionResult};
use proptest::prelude::*;
use serde_json::{json, Value};

proptest! {
    #[test]
    fn finite_numbers_serialize_to_the_same_value(n in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        let mut payload = FormPayload::new();
        payload.insert("x", FieldValue::Number(n));
        let value = serde_json::to_value(&payload).unwrap();
        prop_assert_eq!(value["x"].as_f64(), Some(n));
    }

    #[test]
    fn whole_numbers_carry_no_fraction(n in -9_007_199_254_740_991i64..=9_007_199_254_740_991) {
        let mut payload = FormPayload::new();
        payload.insert("x", FieldValue::Number(n as f64));
        let text = serde_json::to_string(&payload).unwrap();
        prop_assert_eq!(text, format!("{{\"x\":{n}}}"));
    }

    #[test]
    fn flags_serialize_as_one_or_zero(b in any::<bool>()) {
        let mut payload = FormPayload::new();
        payload.insert("toggle", FieldValue::Flag(b));
        let value = serde_json::to_value(&payload).unwrap();
        prop_assert_eq!(&value["toggle"], &json!(u8::from(b)));
    }

    #[test]
    fn non_empty_error_strings_are_kept(message in ".{1,40}") {
        let body = json!({ "error": message.clone() });
        prop_assert_eq!(error_message(&body), Some(message));
    }

    #[test]
    fn falsy_errors_are_absent(body in prop_oneof![
        Just(json!({ "error": null })),
        Just(json!({ "error": false })),
        Just(json!({ "error": "" })),
        Just(json!({ "error": 0 })),
        Just(json!({ "error": 0.0 })),
        Just(json!({})),
    ]) {
        prop_assert_eq!(error_message(&body), None);
    }

    #[test]
    fn numeric_prediction_is_read_under_its_key(value in -1.0e9f64..1.0e9, other in "[a-z_]{1,12}") {
        let body = json!({ "predicted_fuel_tons": value });
        prop_assert_eq!(
            PredictionResult::from_body(&body, "predicted_fuel_tons"),
            PredictionResult::Prediction(value)
        );
        if other != "predicted_fuel_tons" {
            let misses = PredictionResult::from_body(&body, &other);
            prop_assert_eq!(misses, PredictionResult::Rejected(None));
        }
    }
}

#[test]
fn non_object_bodies_have_no_message() {
    for body in [json!([1, 2]), json!("error"), Value::Null] {
        assert_eq!(error_message(&body), None);
    }
}
