//! Request middleware.
//!
//! Purpose: request lifecycle concerns that apply to every route, such as
//! trace correlation. The authorization gate lives with the HTTP adapter
//! because it depends on adapter state.

pub mod trace;

pub use trace::Trace;
