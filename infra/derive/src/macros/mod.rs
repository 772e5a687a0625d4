pub mod administration;
pub mod error;
