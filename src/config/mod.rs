// src/config/mod.rs

pub mod vanishing_config;

// Re-export main types for convenience
pub use vanishing_config::{OutputFormat, VanishingConfig};
