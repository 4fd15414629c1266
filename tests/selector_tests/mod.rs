//! Selector integration tests
//!
//! ## Structure
//! - `test_utils` - Shared state types and call recorders


pub mod composition;
pub mod extra_args;
