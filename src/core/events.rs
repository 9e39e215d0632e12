use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Removed,
    Borrowed,
    Returned,
}

// DomainEvent abstracts domain event for catalog changes
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub branch_id: String,
    pub key: String,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(branch_id: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_added", branch_id, key, DomainEventType::Added, data)
    }

    pub fn removed<T: Serialize>(branch_id: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_removed", branch_id, key, DomainEventType::Removed, data)
    }

    pub fn borrowed<T: Serialize>(branch_id: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_borrowed", branch_id, key, DomainEventType::Borrowed, data)
    }

    pub fn returned<T: Serialize>(branch_id: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_returned", branch_id, key, DomainEventType::Returned, data)
    }

    fn build<T: Serialize>(name: &str, branch_id: &str, key: &str, kind: DomainEventType, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            branch_id: branch_id.to_string(),
            key: key.to_string(),
            kind,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}
