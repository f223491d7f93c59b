//! Payroll domain module: net salary computation.

pub mod salary;

pub use salary::{PayrollComponents, PayrollResult, net_salary, net_salary_from};
