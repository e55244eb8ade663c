use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::Entity;
use crate::errors::ModelError;
use crate::role::Role;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub applied_promocodes_count: i32,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Field-level checks shared by create and update paths.
    pub fn validate_fields(
        first_name: &str,
        last_name: &str,
        email: &str,
        applied_promocodes_count: i32,
    ) -> Result<(), ModelError> {
        if first_name.trim().is_empty() {
            return Err(ModelError::Validation("first_name must not be empty".into()));
        }
        if last_name.trim().is_empty() {
            return Err(ModelError::Validation("last_name must not be empty".into()));
        }
        let email = email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(ModelError::Validation("email must look like user@domain".into())),
        }
        if applied_promocodes_count < 0 {
            return Err(ModelError::Validation("applied_promocodes_count must be >= 0".into()));
        }
        Ok(())
    }
}

impl Entity for Employee {
    type Id = Uuid;

    fn id(&self) -> &Uuid { &self.id }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            roles: vec![],
            applied_promocodes_count: 0,
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(sample().full_name(), "Ada Lovelace");
    }

    #[test]
    fn entity_id_is_the_uuid_field() {
        let e = sample();
        assert_eq!(*Entity::id(&e), e.id);
    }

    #[test]
    fn validate_fields_rules() {
        assert!(Employee::validate_fields("A", "B", "a@b.c", 0).is_ok());
        assert!(Employee::validate_fields(" ", "B", "a@b.c", 0).is_err());
        assert!(Employee::validate_fields("A", "", "a@b.c", 0).is_err());
        assert!(Employee::validate_fields("A", "B", "no-at-sign", 0).is_err());
        assert!(Employee::validate_fields("A", "B", "@b.c", 0).is_err());
        assert!(Employee::validate_fields("A", "B", "a@b.c", -1).is_err());
    }
}
