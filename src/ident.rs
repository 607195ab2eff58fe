use crate::document;
use derive_more::Display;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A team reference in canonical string form.
///
/// Older records store team ids as numbers, newer ones as strings, so joins across collections go
/// through [`TeamId::matches`] rather than `==`. `PartialEq` is exact equality of the canonical
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl AsRef<str>) -> TeamId {
        TeamId(id.as_ref().trim().to_owned())
    }

    /// Accepts a string or a number; anything else is not a team reference.
    pub fn from_value(value: &Value) -> Option<TeamId> {
        match value {
            Value::Number(n) => Some(TeamId(match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
                _ => n.to_string(),
            })),
            _ => document::text(value).map(TeamId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Weak equivalence: equal canonical strings, or both sides numeric and numerically equal.
    pub fn matches(&self, other: &TeamId) -> bool {
        self.0 == other.0
            || matches!((self.numeric(), other.numeric()), (Some(a), Some(b)) if a == b)
    }

    fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> TeamId {
        TeamId::new(id)
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D>(deserializer: D) -> Result<TeamId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TeamId::from_value(&value)
            .ok_or_else(|| D::Error::custom("team id must be a non-empty string or a number"))
    }
}

#[cfg(test)]
mod tests {
    use super::TeamId;
    use serde_json::json;

    #[test]
    fn canonical_forms() {
        assert_eq!(TeamId::from_value(&json!(42)), Some(TeamId::new("42")));
        assert_eq!(TeamId::from_value(&json!(42.0)), Some(TeamId::new("42")));
        assert_eq!(TeamId::from_value(&json!(" abc ")), Some(TeamId::new("abc")));
        assert_eq!(TeamId::from_value(&json!("")), None);
        assert_eq!(TeamId::from_value(&json!(null)), None);
        assert_eq!(TeamId::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn weak_equivalence() {
        let a = TeamId::new("7");
        assert!(a.matches(&TeamId::from_value(&json!(7)).unwrap()));
        assert!(a.matches(&TeamId::new("07")));
        assert!(a.matches(&TeamId::new("7.0")));
        assert!(!a.matches(&TeamId::new("8")));
        assert!(TeamId::new("tigers").matches(&TeamId::new("tigers")));
        assert!(!TeamId::new("tigers").matches(&TeamId::new("Tigers")));
        assert!(!TeamId::new("NaN").matches(&TeamId::new("nan")));
    }

    #[test]
    fn deserialize() {
        let ids: Vec<TeamId> = serde_json::from_value(json!(["a", 3])).unwrap();
        assert_eq!(ids, [TeamId::new("a"), TeamId::new("3")]);
        assert!(serde_json::from_value::<TeamId>(json!(true)).is_err());
    }
}
