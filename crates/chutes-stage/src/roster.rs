//! Session bundle and participant roster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StageError, StageResult};

/// Maximum number of characters that take a seat at the board.
pub const MAX_OPPONENTS: usize = 3;

/// A user or character as described by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    /// Stable anonymized identifier.
    pub anonymized_id: String,
    /// Display name.
    pub name: String,
}

impl Participant {
    /// Create a participant.
    pub fn new(anonymized_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            anonymized_id: anonymized_id.into(),
            name: name.into(),
        }
    }
}

/// Everything the host hands over when a session opens.
#[derive(Debug, Clone, Default)]
pub struct InitialData {
    /// Users in host order.
    pub users: Vec<Participant>,
    /// Characters in host order.
    pub characters: Vec<Participant>,
    /// Stage configuration object, if any.
    pub config: Option<Value>,
    /// Previously serialized message state, if any.
    pub message_state: Option<Value>,
}

impl InitialData {
    /// Parse the host's bundle. `users` and `characters` may be maps keyed
    /// by id (host order is kept) or plain arrays.
    pub fn from_json(json: &str) -> StageResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(obj) = value else {
            return Err(StageError::InvalidBundle(
                "expected a JSON object".to_string(),
            ));
        };

        Ok(Self {
            users: read_participants(obj.get("users"))?,
            characters: read_participants(obj.get("characters"))?,
            config: obj.get("config").filter(|v| !v.is_null()).cloned(),
            message_state: obj.get("messageState").filter(|v| !v.is_null()).cloned(),
        })
    }
}

fn read_participants(value: Option<&Value>) -> StageResult<Vec<Participant>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, v)| -> StageResult<Participant> {
                let mut p: Participant = serde_json::from_value(v.clone())?;
                if p.anonymized_id.is_empty() {
                    p.anonymized_id = key.clone();
                }
                Ok(p)
            })
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| serde_json::from_value(v.clone()).map_err(StageError::from))
            .collect(),
        Some(other) => Err(StageError::InvalidBundle(format!(
            "participants must be an object or array, got {other}"
        ))),
    }
}

/// The seats at the board, fixed for the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    /// The controlling user's id. Empty if the host sent no users.
    pub user_id: String,
    /// The controlling user's display name.
    pub user_name: String,
    /// Up to [`MAX_OPPONENTS`] character ids, in host order.
    pub characters: Vec<String>,
    /// Display names of the seated characters, keyed by id.
    pub character_names: BTreeMap<String, String>,
}

impl Roster {
    /// Seat the first user and the first few characters.
    pub fn from_initial(data: &InitialData) -> Self {
        let (user_id, user_name) = data
            .users
            .first()
            .map(|u| (u.anonymized_id.clone(), u.name.clone()))
            .unwrap_or_default();

        let seated = data.characters.iter().take(MAX_OPPONENTS);
        Self {
            user_id,
            user_name,
            characters: seated.clone().map(|c| c.anonymized_id.clone()).collect(),
            character_names: seated
                .map(|c| (c.anonymized_id.clone(), c.name.clone()))
                .collect(),
        }
    }

    /// Name of the character a reply is for, falling back to the first
    /// seated character.
    pub fn character_name(&self, id: Option<&str>) -> &str {
        id.and_then(|id| self.character_names.get(id))
            .or_else(|| {
                self.characters
                    .first()
                    .and_then(|id| self.character_names.get(id))
            })
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_user_controls() {
        let data = InitialData {
            users: vec![Participant::new("u1", "Ann"), Participant::new("u2", "Bo")],
            ..InitialData::default()
        };
        let r = Roster::from_initial(&data);
        assert_eq!(r.user_id, "u1");
        assert_eq!(r.user_name, "Ann");
    }

    #[test]
    fn at_most_three_characters() {
        let data = InitialData {
            users: vec![Participant::new("u1", "Ann")],
            characters: (1..=5)
                .map(|i| Participant::new(format!("c{i}"), format!("Char {i}")))
                .collect(),
            ..InitialData::default()
        };
        let r = Roster::from_initial(&data);
        assert_eq!(r.characters, vec!["c1", "c2", "c3"]);
        assert_eq!(r.character_names.len(), 3);
        assert!(!r.character_names.contains_key("c4"));
    }

    #[test]
    fn character_name_lookup() {
        let data = InitialData {
            characters: vec![Participant::new("c1", "Rex"), Participant::new("c2", "Ivy")],
            ..InitialData::default()
        };
        let r = Roster::from_initial(&data);
        assert_eq!(r.character_name(Some("c2")), "Ivy");
        assert_eq!(r.character_name(Some("zz")), "Rex");
        assert_eq!(r.character_name(None), "Rex");
        assert_eq!(Roster::default().character_name(None), "");
    }

    #[test]
    fn empty_bundle_gives_empty_roster() {
        assert_eq!(Roster::from_initial(&InitialData::default()), Roster::default());
    }

    #[test]
    fn from_json_keeps_host_order() {
        let json = r#"{
            "users": {"zz": {"anonymizedId": "zz", "name": "Ann"}},
            "characters": {
                "c9": {"anonymizedId": "c9", "name": "Nine"},
                "c1": {"name": "One"}
            },
            "config": {"boardScale": 50},
            "messageState": null
        }"#;
        let data = InitialData::from_json(json).unwrap();
        assert_eq!(data.users[0].anonymized_id, "zz");
        assert_eq!(data.characters[0].anonymized_id, "c9");
        assert_eq!(data.characters[1].anonymized_id, "c1");
        assert!(data.config.is_some());
        assert!(data.message_state.is_none());
    }

    #[test]
    fn from_json_accepts_arrays() {
        let json = r#"{"users": [{"anonymizedId": "u1"}], "characters": []}"#;
        let data = InitialData::from_json(json).unwrap();
        assert_eq!(data.users.len(), 1);
        assert!(data.characters.is_empty());
    }

    #[test]
    fn from_json_rejects_bad_shapes() {
        assert!(matches!(
            InitialData::from_json("[]"),
            Err(StageError::InvalidBundle(_))
        ));
        assert!(matches!(
            InitialData::from_json(r#"{"users": "u1"}"#),
            Err(StageError::InvalidBundle(_))
        ));
        assert!(matches!(
            InitialData::from_json("nope"),
            Err(StageError::Json(_))
        ));
    }
}
