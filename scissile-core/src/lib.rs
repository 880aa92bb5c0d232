//! Shared primitives for the Scissile protease cleavage prediction crates.
//!
//! `scissile-core` provides the foundation the other Scissile crates build on:
//!
//! - **Error types** — [`ScissileError`] and [`Result`] for structured error
//!   handling across the corpus, profile, and scanning layers

pub mod error;

pub use error::{Result, ScissileError};
