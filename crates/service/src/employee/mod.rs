//! Employee records: request inputs, response projections and the
//! service that maps one onto the other through a `Repository`.

pub mod views;
pub mod service;

pub use service::EmployeeService;
pub use views::{EmployeeDetails, EmployeeInput, EmployeeShort, RoleItem};
