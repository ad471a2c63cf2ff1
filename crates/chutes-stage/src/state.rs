//! Per-message game state persisted by the host between turns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::StageResult;

/// Board positions keyed by participant id.
pub type Positions = BTreeMap<String, i64>;

/// The game record the host stores alongside each message.
///
/// An empty `current_turn` means no game is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageState {
    /// Space each participant currently occupies.
    pub current_space: Positions,
    /// Positions before the last turn. Carried through unchanged.
    pub previous_space: Positions,
    /// Participant whose turn it is, or empty when idle.
    pub current_turn: String,
}

impl MessageState {
    /// Whether a game is in progress.
    pub fn is_active(&self) -> bool {
        !self.current_turn.is_empty()
    }

    /// Build a state from a host blob, substituting defaults for anything
    /// missing or malformed. Each field is read independently, and map
    /// entries that are not integers are dropped.
    pub fn from_value(value: Option<&Value>) -> Self {
        let Some(obj) = value.and_then(Value::as_object) else {
            return Self::default();
        };

        let current_turn = match obj.get("currentTurn") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                warn!(value = %other, "currentTurn is not a string; resetting");
                String::new()
            }
        };

        Self {
            current_space: read_positions(obj, "currentSpace"),
            previous_space: read_positions(obj, "previousSpace"),
            current_turn,
        }
    }

    /// Serialize into the host blob shape.
    pub fn to_value(&self) -> Value {
        // String keys and integer values cannot fail to serialize.
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Parse a host blob from JSON text. Only invalid JSON is an error;
    /// odd shapes are normalized as in [`MessageState::from_value`].
    pub fn from_json(json: &str) -> StageResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(Some(&value)))
    }

    /// Render as JSON text.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

fn read_positions(obj: &Map<String, Value>, field: &str) -> Positions {
    let entries = match obj.get(field) {
        None | Some(Value::Null) => return Positions::new(),
        Some(Value::Object(entries)) => entries,
        Some(other) => {
            warn!(field, value = %other, "position map is not an object; resetting");
            return Positions::new();
        }
    };

    let mut positions = Positions::new();
    for (id, space) in entries {
        match as_space(space) {
            Some(n) => {
                positions.insert(id.clone(), n);
            }
            None => warn!(field, id = %id, value = %space, "dropping non-integer position"),
        }
    }
    positions
}

fn as_space(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_idle() {
        let s = MessageState::default();
        assert!(!s.is_active());
        assert!(s.current_space.is_empty());
        assert!(s.previous_space.is_empty());
    }

    #[test]
    fn absent_blob_is_default() {
        assert_eq!(MessageState::from_value(None), MessageState::default());
        assert_eq!(
            MessageState::from_value(Some(&Value::Null)),
            MessageState::default()
        );
    }

    #[test]
    fn fields_default_independently() {
        let v = json!({"currentTurn": "u1"});
        let s = MessageState::from_value(Some(&v));
        assert_eq!(s.current_turn, "u1");
        assert!(s.current_space.is_empty());

        let v = json!({"currentSpace": {"u1": 4}});
        let s = MessageState::from_value(Some(&v));
        assert_eq!(s.current_space["u1"], 4);
        assert!(!s.is_active());
    }

    #[test]
    fn malformed_fields_are_normalized() {
        let v = json!({
            "currentSpace": {"u1": 4, "c1": "far", "c2": 7.0, "c3": 2.5},
            "previousSpace": [1, 2],
            "currentTurn": 9,
        });
        let s = MessageState::from_value(Some(&v));
        assert_eq!(s.current_space.len(), 2);
        assert_eq!(s.current_space["c2"], 7);
        assert!(s.previous_space.is_empty());
        assert_eq!(s.current_turn, "");
    }

    #[test]
    fn value_round_trip() {
        let v = json!({
            "currentSpace": {"u1": 12, "c1": 1},
            "previousSpace": {"u1": 3},
            "currentTurn": "u1",
        });
        let s = MessageState::from_value(Some(&v));
        assert_eq!(s.to_value(), v);
        assert_eq!(MessageState::from_value(Some(&s.to_value())), s);
    }

    #[test]
    fn serde_uses_host_field_names() {
        let s = MessageState {
            current_turn: "u1".into(),
            ..MessageState::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"currentTurn\":\"u1\""));
        assert!(json.contains("\"previousSpace\":{}"));
        let back: MessageState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn to_value_matches_serde() {
        let s = MessageState {
            current_space: [("u1".to_string(), 8)].into_iter().collect(),
            previous_space: Positions::new(),
            current_turn: "u1".into(),
        };
        assert_eq!(s.to_value(), serde_json::to_value(&s).unwrap());
        assert_eq!(
            s.to_value(),
            json!({"currentSpace": {"u1": 8}, "previousSpace": {}, "currentTurn": "u1"})
        );
    }

    #[test]
    fn json_text_entry_points() {
        let s = MessageState::from_json(r#"{"currentTurn":"u1"}"#).unwrap();
        assert!(s.is_active());
        assert_eq!(MessageState::from_json(&s.to_json()).unwrap(), s);
        assert!(MessageState::from_json("{").is_err());
    }
}
