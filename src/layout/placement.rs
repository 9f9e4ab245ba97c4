//! Placement policy
//!
//! Picks the default side for a fingering from its chord and staff context.
//! Pure: never looks at skylines or positions.

use crate::models::{NoteId, Placement, Score};

/// Inputs of the placement policy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementContext {
    /// Stem direction of the owning chord
    pub stem_up: bool,

    /// Another voice sounds on the staff during the chord
    pub has_voices: bool,

    /// Staves in the owning part
    pub staff_count: usize,

    /// Index of the chord's staff within the part, 0 = top
    pub staff_index: usize,
}

impl PlacementContext {
    /// Gather the context for a note; `None` if any link is missing
    pub fn for_note(score: &Score, note: NoteId) -> Option<Self> {
        let chord = score.chord(score.note(note)?.chord)?;
        let staff_index = score.staff_index_in_part(chord.staff)?;
        Some(Self {
            stem_up: chord.up,
            has_voices: score.has_voices(chord.staff, chord.tick, chord.duration),
            staff_count: score.part_staff_count(chord.staff),
            staff_index,
        })
    }
}

/// Default side for a fingering
///
/// With several voices the fingering goes opposite the stem: below a stem-up
/// chord, above a stem-down chord. With a single voice it goes below only on
/// the bottom staff of a multi-staff part.
pub fn calculate_placement(ctx: &PlacementContext) -> Placement {
    let below = if ctx.has_voices {
        ctx.stem_up
    } else {
        ctx.staff_count > 1 && ctx.staff_index + 1 == ctx.staff_count
    };

    if below {
        Placement::Below
    } else {
        Placement::Above
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(stem_up: bool, has_voices: bool, staff_count: usize, staff_index: usize) -> PlacementContext {
        PlacementContext { stem_up, has_voices, staff_count, staff_index }
    }

    #[test]
    fn test_single_voice_single_staff_above() {
        assert_eq!(calculate_placement(&ctx(true, false, 1, 0)), Placement::Above);
        assert_eq!(calculate_placement(&ctx(false, false, 1, 0)), Placement::Above);
    }

    #[test]
    fn test_single_voice_last_staff_below() {
        assert_eq!(calculate_placement(&ctx(true, false, 2, 1)), Placement::Below);
        assert_eq!(calculate_placement(&ctx(true, false, 2, 0)), Placement::Above);
        assert_eq!(calculate_placement(&ctx(false, false, 3, 1)), Placement::Above);
        assert_eq!(calculate_placement(&ctx(false, false, 3, 2)), Placement::Below);
    }

    #[test]
    fn test_multi_voice_follows_stem_only() {
        for staff_count in 1..4 {
            for staff_index in 0..staff_count {
                assert_eq!(
                    calculate_placement(&ctx(true, true, staff_count, staff_index)),
                    Placement::Below
                );
                assert_eq!(
                    calculate_placement(&ctx(false, true, staff_count, staff_index)),
                    Placement::Above
                );
            }
        }
    }
}
