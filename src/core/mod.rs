pub mod diagnostic;
pub mod macros;
pub mod suite;

pub use suite::{ContractViolation, Suite};
