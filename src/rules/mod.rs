//! Rule implementations for gqlvars.
//!
//! ## Module Structure
//!
//! - `missing_variables_type`: hook calls whose variables type argument is
//!   missing or does not match the generated name

pub mod missing_variables_type;

pub use missing_variables_type::{FileCheckResult, check_file};
