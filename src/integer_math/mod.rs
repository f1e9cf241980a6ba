// src/integer_math/mod.rs

pub mod factored_number;
pub mod legendre;
pub mod modular;
pub mod trial_division;

pub use factored_number::FactoredNumber;
