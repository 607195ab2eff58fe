use crate::document::{first_text, text};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub player_name: String,
    pub player_number: Option<String>,
    pub player_position: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl RosterEntry {
    pub fn new(id: impl Into<String>, player_name: impl Into<String>) -> RosterEntry {
        RosterEntry {
            id: id.into(),
            player_name: player_name.into(),
            player_number: None,
            player_position: None,
            photo_url: None,
        }
    }

    /// `None` for documents without an id; every other field has a fallback.
    pub fn from_document(doc: &Value) -> Option<RosterEntry> {
        Some(RosterEntry {
            id: doc.get("id").and_then(text)?,
            player_name: first_text(doc, &["playerName", "name"])
                .unwrap_or_else(|| "Unknown".to_owned()),
            player_number: first_text(doc, &["playerNumber", "number"]),
            player_position: first_text(doc, &["playerPosition", "position"]),
            photo_url: first_text(doc, &["photoURL", "profilePicture", "photoUrl"]),
        })
    }
}

pub fn parse_roster(docs: &[Value]) -> Vec<RosterEntry> {
    docs.iter()
        .filter_map(|doc| {
            let entry = RosterEntry::from_document(doc);
            if entry.is_none() {
                log::debug!("skipping roster entry without an id");
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallbacks() {
        let entry = RosterEntry::from_document(&json!({
            "id": "p1",
            "name": "Ana Ruiz",
            "number": 12,
            "position": "SS",
            "photoUrl": "https://example.invalid/p1.png",
        }))
        .unwrap();
        assert_eq!(entry.player_name, "Ana Ruiz");
        assert_eq!(entry.player_number.as_deref(), Some("12"));
        assert_eq!(entry.player_position.as_deref(), Some("SS"));
        assert_eq!(
            entry.photo_url.as_deref(),
            Some("https://example.invalid/p1.png")
        );
    }

    #[test]
    fn preferred_fields_win() {
        let entry = RosterEntry::from_document(&json!({
            "id": "p1",
            "playerName": "Ana",
            "name": "ignored",
            "photoURL": "a",
            "profilePicture": "b",
        }))
        .unwrap();
        assert_eq!(entry.player_name, "Ana");
        assert_eq!(entry.photo_url.as_deref(), Some("a"));
    }

    #[test]
    fn missing_name_and_id() {
        let entry = RosterEntry::from_document(&json!({"id": 9})).unwrap();
        assert_eq!(entry, RosterEntry::new("9", "Unknown"));
        let roster = parse_roster(&[json!({"playerName": "nobody"}), json!({"id": "x"})]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "x");
    }
}
