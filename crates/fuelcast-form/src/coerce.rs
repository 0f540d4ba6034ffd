//! Snapshot → payload coercion.

use fuelcast_core::models::{FieldValue, FormPayload, FormSnapshot};

use crate::number::parse_float;
use crate::schema::FormSchema;

/// Coerce a form snapshot into the payload sent to the endpoint.
///
/// Entries are applied in document order, so a repeated name keeps its last
/// value. The toggle field is always present.
pub fn coerce(snapshot: &FormSnapshot, schema: &FormSchema) -> FormPayload {
    let mut payload = FormPayload::new();

    for (name, raw) in snapshot.entries() {
        if name == schema.categorical_field {
            payload.insert(name, FieldValue::Text(raw.to_string()));
        } else if name == schema.toggle_field {
            // Checkbox state is read from the control below.
        } else {
            let value = parse_float(raw);
            if value.is_nan() {
                tracing::debug!(field = %name, raw = %raw, "field is not numeric, sending null");
            }
            payload.insert(name, FieldValue::Number(value));
        }
    }

    payload.insert(
        schema.toggle_field.clone(),
        FieldValue::Flag(snapshot.is_checked(&schema.toggle_field)),
    );

    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FormSchema {
        FormSchema::new("ship_type", "monsoon_season")
    }

    #[test]
    fn toggle_defaults_to_zero_when_unchecked() {
        let snapshot = FormSnapshot::from_pairs([("distance_nm", "100")]);
        let payload = coerce(&snapshot, &schema());
        assert_eq!(payload.get("monsoon_season"), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn toggle_entry_value_is_ignored() {
        let snapshot = FormSnapshot::from_pairs([("monsoon_season", "on")]);
        let payload = coerce(&snapshot, &schema());
        assert_eq!(payload.get("monsoon_season"), Some(&FieldValue::Flag(false)));

        let payload = coerce(&snapshot.with_checked("monsoon_season"), &schema());
        assert_eq!(payload.get("monsoon_season"), Some(&FieldValue::Flag(true)));
    }
}
