//! Annotation layout
//!
//! `placement` decides the side, `fingering` positions one annotation against
//! the skyline, `rebase` reconciles user moves with autoplace, and `system`
//! drives a whole system in document order.

pub mod display_list;
pub mod fingering;
pub mod placement;
pub mod rebase;
pub mod system;

pub use display_list::RenderFingering;
pub use fingering::FingeringLayout;
pub use placement::{calculate_placement, PlacementContext};
pub use rebase::{rebase_min_distance, rebase_offset, MinDistanceRebase, MIN_DISTANCE_DISABLED};
pub use system::SystemLayout;
