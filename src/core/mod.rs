// src/core/mod.rs

pub mod count_dictionary;
pub mod operation_counter;
pub mod report;
pub mod ring_context;
pub mod static_random;

pub use operation_counter::{Operation, OperationCounter};
pub use ring_context::RingContext;
