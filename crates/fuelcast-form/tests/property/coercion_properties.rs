use fuelcast_core::models::{FieldValue, FormSnapshot};
use fuelcast_form::{coerce, parse_float, FormSchema};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ship_type".to_string()),
        Just("monsoon_season".to_string()),
        "[a-z_]{1,16}",
    ]
}

proptest! {
    #[test]
    fn every_field_gets_its_designated_kind(
        entries in prop::collection::vec((field_name(), ".{0,12}"), 0..12),
        checked in any::<bool>(),
    ) {
        let schema = FormSchema::default();
        let mut snapshot = FormSnapshot::from_pairs(entries.clone());
        if checked {
            snapshot.check("monsoon_season");
        }
        let payload = coerce(&snapshot, &schema);

        for (name, value) in payload.iter() {
            match name {
                "ship_type" => prop_assert!(matches!(value, FieldValue::Text(_))),
                "monsoon_season" => prop_assert_eq!(value, &FieldValue::Flag(checked)),
                _ => prop_assert!(matches!(value, FieldValue::Number(_))),
            }
        }

        let json = serde_json::to_value(&payload).unwrap();
        let flag = json["monsoon_season"].as_u64();
        prop_assert!(flag == Some(0) || flag == Some(1));
    }

    #[test]
    fn categorical_value_is_verbatim(value in ".{0,24}") {
        let snapshot = FormSnapshot::from_pairs([("ship_type", value.clone())]);
        let payload = coerce(&snapshot, &FormSchema::default());
        prop_assert_eq!(payload.get("ship_type"), Some(&FieldValue::Text(value)));
    }

    #[test]
    fn finite_numbers_parse_back(n in -1.0e12f64..1.0e12) {
        let parsed = parse_float(&n.to_string());
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn trailing_text_does_not_change_the_number(n in 0u32..1_000_000, suffix in "[a-df-z ]{0,6}") {
        prop_assert_eq!(parse_float(&format!("{n}{suffix}")), n as f64);
    }
}
