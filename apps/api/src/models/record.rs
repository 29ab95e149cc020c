use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored record: the envelope the store owns plus the kind-specific body.
///
/// The body is flattened on the wire, so a timeline serializes as
/// `{id, ownerId, title, createdAt, personalInfo, goals, habits, prediction}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    pub id: u64,
    pub owner_id: Option<u64>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: T,
}

/// Everything a caller supplies to create a record. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord<T> {
    pub owner_id: Option<u64>,
    pub title: String,
    pub body: T,
}
