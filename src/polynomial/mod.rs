// src/polynomial/mod.rs

pub mod ideal;
pub mod monomial;
pub mod polynomial;

pub use ideal::Ideal;
pub use monomial::ExponentVector;
pub use polynomial::Polynomial;
