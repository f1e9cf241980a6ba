// src/lib.rs

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod core;
pub mod integer_math;
pub mod polynomial;

pub use algorithms::{
    build_vanishing_basis_direct, build_vanishing_basis_recursive, find_nonzero_tuple, first_nonzero_tuple,
    is_zero_function, normal_form, smarandache,
};
