use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::User;

/// Entire persisted state: named tables, each an ordered run of records
///
/// A sorted map keeps the serialized table order stable across rewrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub tables: BTreeMap<String, Vec<User>>,
}

impl Document {
    /// Records of the named table, if the table exists
    pub fn table(&self, name: &str) -> Option<&Vec<User>> {
        self.tables.get(name)
    }

    /// Mutable records of the named table, if the table exists
    pub fn table_mut(&mut self, name: &str) -> Option<&mut Vec<User>> {
        self.tables.get_mut(name)
    }

    /// Mutable records of the named table, creating an empty table if absent
    pub fn table_or_default(&mut self, name: &str) -> &mut Vec<User> {
        self.tables.entry(name.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_or_default_creates_table() {
        let mut document = Document::default();
        assert!(document.table("user").is_none());

        document.table_or_default("user").push(User {
            id: Some(1),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
        });

        assert_eq!(document.table("user").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_document_serializes_to_empty_tables() {
        let json = serde_json::to_string(&Document::default()).unwrap();
        assert_eq!(json, r#"{"tables":{}}"#);
    }
}
