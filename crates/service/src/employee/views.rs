use models::{Employee, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Abbreviated projection used by list, get-short and create responses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShort {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleItem {
    pub name: String,
    pub description: String,
}

/// Full projection, including roles and the applied promo-code count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<RoleItem>,
    pub applied_promocodes_count: i32,
}

/// Create/update body. Id and roles are never taken from the client.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub applied_promocodes_count: i32,
}

impl EmployeeInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        Employee::validate_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.applied_promocodes_count,
        )
        .map_err(ServiceError::from)
    }
}

impl From<&Employee> for EmployeeShort {
    fn from(e: &Employee) -> Self {
        Self { id: e.id, email: e.email.clone(), full_name: e.full_name() }
    }
}

impl From<&Role> for RoleItem {
    fn from(r: &Role) -> Self {
        Self { name: r.name.clone(), description: r.description.clone() }
    }
}

impl From<&Employee> for EmployeeDetails {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            email: e.email.clone(),
            full_name: e.full_name(),
            roles: e.roles.iter().map(RoleItem::from).collect(),
            applied_promocodes_count: e.applied_promocodes_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_uses_camel_case_on_the_wire() {
        let input: EmployeeInput = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.applied_promocodes_count, 0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn details_projection_carries_roles() {
        let emp = &models::seed::employees()[0];
        let details = EmployeeDetails::from(emp);
        assert_eq!(details.full_name, emp.full_name());
        assert_eq!(details.roles, vec![RoleItem { name: "Admin".into(), description: "Administrator".into() }]);
        let v = serde_json::to_value(&details).unwrap();
        assert!(v.get("appliedPromocodesCount").is_some());
    }
}
