use serde::{Deserialize, Serialize};

/// User record persisted in the document store
///
/// The id is assigned by the caller and may be absent; a record without an
/// id never matches an id lookup. The password is stored in plaintext,
/// which is what the store currently persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned identifier, omitted from JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Whether this record matches the given lookup id
    pub fn matches_id(&self, id: i64) -> bool {
        self.id == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: Option<i64>) -> User {
        User {
            id,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        }
    }

    #[test]
    fn test_matches_id() {
        assert!(sample(Some(1)).matches_id(1));
        assert!(!sample(Some(1)).matches_id(2));
    }

    #[test]
    fn test_absent_id_matches_nothing() {
        assert!(!sample(None).matches_id(0));
        assert!(!sample(None).matches_id(1));
    }

    #[test]
    fn test_id_omitted_when_absent() {
        let value = serde_json::to_value(sample(None)).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Ann");
    }

    #[test]
    fn test_deserialize_without_id() {
        let user: User =
            serde_json::from_str(r#"{"name":"Ann","email":"a@x.com","password":"p"}"#).unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn test_id_round_trips() {
        let json = serde_json::to_string(&sample(Some(7))).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample(Some(7)));
    }
}
