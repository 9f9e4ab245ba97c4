//! Text metrics collaborator
//!
//! Layout asks a `TextMetrics` implementation for the box of an annotation's
//! text. Rendering hosts with real font data supply their own; the
//! approximation here is good enough for headless layout and tests.

pub mod metrics;

pub use metrics::{ApproximateMetrics, TextMetrics};
