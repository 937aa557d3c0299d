use serde::Deserialize;

/// Snapshot of a restaurant owned by the restaurant service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
}
