//! Skylines for collision avoidance
//!
//! Each staff of a system owns one `Skyline` (a north and a south line).
//! Skylines are rebuilt for every layout pass and grow as elements are
//! placed left to right; later elements query what earlier ones committed.

pub mod line;
pub mod staff;

pub use line::{SkylineLine, SkylineSpan};
pub use staff::{Skyline, SystemSkylines};
