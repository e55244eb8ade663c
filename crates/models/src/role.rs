use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role attached to an employee. Roles only travel inside `Employee`; they
/// are not stored on their own.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}
