//! Utility modules for common operations

pub mod validation;

pub use validation::InputValidator;
