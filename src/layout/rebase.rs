//! Offset rebase
//!
//! When the user moves an annotation, the move is recorded as `changed_pos`
//! and the next layout has to reconcile it with whatever autoplace now
//! computes. The move is re-expressed relative to the fresh automatic
//! position, and the instance minimum distance is adjusted so later passes
//! keep the element where the user left it instead of pushing it back out.

use crate::models::{Fingering, OffsetChange, RectF};

/// Minimum distance (staff spaces) that switches the clearance floor off
pub const MIN_DISTANCE_DISABLED: f32 = -999.0;

/// Positions closer than this count as equal
const POSITION_EPSILON: f32 = 1e-3;

/// Fold a pending move into the offset, after the automatic position was reset
///
/// Returns the vertical part of the previous automatic position that the
/// caller still has to account for. A drag is absorbed completely into the
/// offset (returns 0); a nudge restores the styled minimum distance and
/// returns the previous automatic delta. The horizontal component is only
/// folded when `include_x` is set.
pub fn rebase_offset(fingering: &mut Fingering, include_x: bool) -> f32 {
    let mut p = fingering.changed_pos - fingering.pos();
    if !include_x {
        p.x = 0.0;
    }

    match fingering.offset_change {
        OffsetChange::Absolute => {
            fingering.offset += p;
            0.0
        }
        _ => {
            fingering.min_distance = None;
            p.y
        }
    }
}

/// Inputs for `rebase_min_distance`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinDistanceRebase {
    /// Effective minimum distance in absolute units
    pub min_distance: f32,

    /// Vertical delta autoplace computed in this pass
    pub yd: f32,

    pub spatium: f32,

    pub above: bool,

    /// The moved box still reaches into the staff
    pub in_staff: bool,
}

/// Reconcile a moved element with this pass's autoplace delta
///
/// Returns the vertical delta to apply instead of `req.yd`. Whenever the
/// element would not land on `changed_pos`, the difference is folded into
/// the offset and the minimum distance is overridden so that later passes
/// reproduce the same position without a pending move.
pub fn rebase_min_distance(fingering: &mut Fingering, req: MinDistanceRebase) -> f32 {
    let MinDistanceRebase { min_distance: md, yd, spatium: sp, above, in_staff } = req;
    let diff = fingering.changed_pos.y - (fingering.pos().y + yd);

    if in_staff {
        // moved into the staff on purpose: no floor from now on
        fingering.min_distance = Some(MIN_DISTANCE_DISABLED);
        fingering.offset.y += diff + yd;
        return 0.0;
    }

    // a nudge autoplace already honours needs nothing
    if fingering.is_min_distance_styled()
        && fingering.offset_change == OffsetChange::Relative
        && diff.abs() <= POSITION_EPSILON
    {
        return yd;
    }

    fingering.min_distance = Some(absorb(md, yd, above) / sp);
    fingering.offset.y += diff + yd;
    0.0
}

/// Minimum distance that makes `yd` unnecessary
fn absorb(md: f32, yd: f32, above: bool) -> f32 {
    if above {
        md + yd
    } else {
        md - yd
    }
}

/// Whether a box shifted by `rebase` still overlaps the staff on its side
pub fn in_staff(r: &RectF, rebase: f32, above: bool, staff_height: f32) -> bool {
    if above {
        r.bottom() + rebase > 0.0
    } else {
        r.top() + rebase < staff_height
    }
}
