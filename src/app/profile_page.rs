// SPDX-License-Identifier: GPL-3.0-only

//! Profile page: a person record kept in local storage

use crate::constants::PROFILE_STORAGE_KEY;
use crate::storage::{KeyValueStore, StorageResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Record stored whole under [`PROFILE_STORAGE_KEY`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// "First Last", skipping missing parts
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Consumer of the storage collaborator
pub struct ProfilePage {
    storage: Arc<dyn KeyValueStore>,
    pub person: Person,
}

impl ProfilePage {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            person: Person::default(),
        }
    }

    /// Replace the current person with the stored one, or an empty one
    ///
    /// A stored value that is not a person record is an error and leaves the
    /// current person unchanged.
    pub async fn load(&mut self) -> StorageResult<&Person> {
        self.person = match self.storage.get(PROFILE_STORAGE_KEY).await? {
            Some(value) => serde_json::from_value(value)
                .inspect_err(|e| warn!(error = %e, "Stored profile unreadable"))?,
            None => Person::default(),
        };
        Ok(&self.person)
    }

    /// Write the current person as a whole
    pub async fn save(&self) -> StorageResult<()> {
        let value = serde_json::to_value(&self.person)?;
        self.storage.set(PROFILE_STORAGE_KEY, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use async_trait::async_trait;
    use serde_json::Value;

    /// Store holding one fixed value under every key
    struct Fixed(Value);

    #[async_trait]
    impl KeyValueStore for Fixed {
        async fn get(&self, _key: &str) -> StorageResult<Option<Value>> {
            Ok(Some(self.0.clone()))
        }

        async fn set(&self, _key: &str, _value: Value) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Person::new("Ali", "Saleh").display_name(), "Ali Saleh");
        assert_eq!(
            Person {
                first_name: Some("Ali".into()),
                last_name: None
            }
            .display_name(),
            "Ali"
        );
        assert_eq!(Person::default().display_name(), "");
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(Person::new("Ali", "Saleh")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"firstName": "Ali", "lastName": "Saleh"})
        );
    }

    #[tokio::test]
    async fn test_corrupt_record_is_an_error() {
        let mut page = ProfilePage::new(Arc::new(Fixed(serde_json::json!({"firstName": 7}))));
        page.person = Person::new("Ali", "Saleh");

        let err = page.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
        assert_eq!(page.person, Person::new("Ali", "Saleh"));
    }
}
