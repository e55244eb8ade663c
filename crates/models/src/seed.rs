//! Fixed demo data loaded into the in-memory store at startup.

use uuid::Uuid;

use crate::{Employee, Role};

pub const ADMIN_ROLE_ID: Uuid = Uuid::from_u128(0x53729686_a368_4eeb_8bfa_cc69b6050d02);
pub const PARTNER_MANAGER_ROLE_ID: Uuid = Uuid::from_u128(0xb0ae7aac_5493_45cd_ad16_87426a5e7665);

pub const OWNER_EMPLOYEE_ID: Uuid = Uuid::from_u128(0x451533d5_d8d5_4a11_9c7b_eb9f14e1a32f);
pub const PARTNER_EMPLOYEE_ID: Uuid = Uuid::from_u128(0xf766e2bf_340a_46ea_bff3_f1700b435895);

pub fn roles() -> Vec<Role> {
    vec![
        Role {
            id: ADMIN_ROLE_ID,
            name: "Admin".into(),
            description: "Administrator".into(),
        },
        Role {
            id: PARTNER_MANAGER_ROLE_ID,
            name: "PartnerManager".into(),
            description: "Partner manager".into(),
        },
    ]
}

pub fn employees() -> Vec<Employee> {
    let roles = roles();
    let role = |id: Uuid| roles.iter().filter(|r| r.id == id).cloned().collect::<Vec<_>>();
    vec![
        Employee {
            id: OWNER_EMPLOYEE_ID,
            first_name: "Ivan".into(),
            last_name: "Sergeev".into(),
            email: "owner@somemail.ru".into(),
            roles: role(ADMIN_ROLE_ID),
            applied_promocodes_count: 5,
        },
        Employee {
            id: PARTNER_EMPLOYEE_ID,
            first_name: "Petr".into(),
            last_name: "Andreev".into(),
            email: "andreev@somemail.ru".into(),
            roles: role(PARTNER_MANAGER_ROLE_ID),
            applied_promocodes_count: 10,
        },
    ]
}
