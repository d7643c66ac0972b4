//! A small dense linear-algebra library built around two types: [`Vector`],
//! an ordered sequence of `f64`, and [`Matrix`], a rectangular row-major
//! grid whose rows are owned `Vector`s.
//!
//! Matrices support elementwise arithmetic, structural manipulation
//! (transpose, augment, row swap), matrix multiplication, trace/diagonal
//! extraction, and row reduction to reduced row-echelon form
//! ([`Matrix::gauss`]) with partial pivoting.
//!
//! Everything runs synchronously to completion. Derived-result operations
//! (`add`, `multiply`, `transpose`, `gauss`, ...) never mutate their
//! operands, so a shared instance can back any number of concurrent reads;
//! the in-place operations (`set`, `swap`) take `&mut self` and need
//! external synchronization if an instance is shared across threads.

#[macro_use] extern crate error_chain;
extern crate rand;

pub mod errors;

#[macro_use] mod macro_def;

pub mod vector;
pub use vector::Vector;

pub mod core;
pub use core::Matrix;

mod ops;
mod map;
mod reduce;
pub use reduce::EPSILON;
