//! Derivative-free minimizers built on the `conjugate-core` traits.
//!
//! - [`optimization::golden_section`]: bracketed search for a single variable
//! - [`optimization::powell`]: Powell's conjugate-direction method for many
//!   variables, with optional box bounds

pub mod optimization;
