//! Fingering layout engine
//!
//! Positions one fingering relative to its note and commits its box to the
//! staff skyline. Annotations must go through here in document order: every
//! call reads what earlier calls committed.
//!
//! Nothing in here fails. Missing links (note, chord, staff) fall back to a
//! plain text layout without collision avoidance.

use super::rebase::{in_staff, rebase_min_distance, rebase_offset, MinDistanceRebase};
use crate::models::{
    Chord, Fingering, LayoutTarget, Note, NoteId, OffsetChange, PointF, RectF, Score, Staff,
};
use crate::skyline::{Skyline, SkylineLine, SystemSkylines};
use crate::style::StyleConfig;
use crate::text::TextMetrics;

/// Horizontal shift away from the stem in tight mode, in staff spaces
pub const TIGHT_STEM_SHIFT: f32 = 0.5;

/// Vertical distance from the note in tight mode, in staff spaces
pub const TIGHT_VERTICAL_SHIFT: f32 = 1.5;

/// Extra push past a skyline collision, as a fraction of the text height
const SKYLINE_PADDING_RATIO: f32 = 0.25;

/// Note, chord and staff an attached fingering hangs off
struct Anchor<'s> {
    note: &'s Note,
    chord: &'s Chord,
    staff: &'s Staff,
}

impl Anchor<'_> {
    /// Origin of the note in system coordinates
    fn note_origin(&self) -> PointF {
        self.chord.pos + self.note.pos
    }
}

pub struct FingeringLayout<'a> {
    score: &'a Score,
    style: &'a StyleConfig,
    metrics: &'a dyn TextMetrics,
}

impl<'a> FingeringLayout<'a> {
    pub fn new(score: &'a Score, style: &'a StyleConfig, metrics: &'a dyn TextMetrics) -> Self {
        Self { score, style, metrics }
    }

    fn resolve(&self, id: NoteId) -> Option<Anchor<'a>> {
        let note = self.score.note(id)?;
        let chord = self.score.chord(note.chord)?;
        let staff = self.score.staff(chord.staff)?;
        Some(Anchor { note, chord, staff })
    }

    /// Lay out `fingering` and add it to its staff's skyline
    pub fn layout(&self, fingering: &mut Fingering, skylines: &mut SystemSkylines) {
        let anchor = fingering.note.and_then(|id| self.resolve(id));
        if anchor.is_none() {
            if let Some(id) = fingering.note {
                log::warn!("Fingering '{}' references unresolvable note {:?}", fingering.text, id);
            }
        }

        if let Some(anchor) = &anchor {
            if anchor.staff.staff_type.suppresses_fingering() {
                log::debug!("Fingering '{}' hidden by staff type", fingering.text);
                fingering.bbox = RectF::default();
                return;
            }
        }

        fingering.bbox = self.metrics.bbox(&fingering.text, fingering.kind, self.style);
        fingering.ipos = PointF::default();

        let anchor = match anchor {
            Some(anchor) if fingering.autoplace => anchor,
            _ => {
                if fingering.offset_change.is_pending() {
                    // autoplace may have moved it horizontally before
                    rebase_offset(fingering, true);
                }
                fingering.offset_change = OffsetChange::None;
                return;
            }
        };

        let tight = self.is_tight(fingering, &anchor);
        let rebase = if fingering.offset_change.is_pending() && !tight {
            rebase_offset(fingering, false)
        } else {
            0.0
        };

        match fingering.kind.layout_target() {
            LayoutTarget::Chord => self.layout_against_chord(fingering, &anchor, tight, rebase, skylines),
            LayoutTarget::Note => place_left_of_note(fingering, anchor.note),
        }

        self.commit(fingering, &anchor, skylines);
        fingering.offset_change = OffsetChange::None;
    }

    /// Cramped multi-voice writing: single unbeamed note with another voice around
    fn is_tight(&self, fingering: &Fingering, anchor: &Anchor) -> bool {
        let chord = anchor.chord;
        fingering.kind.allows_tight()
            && chord.notes.len() == 1
            && !chord.beamed
            && self.score.has_voices(chord.staff, chord.tick, chord.duration)
    }

    fn layout_against_chord(
        &self,
        fingering: &mut Fingering,
        anchor: &Anchor,
        tight: bool,
        rebase: f32,
        skylines: &SystemSkylines,
    ) {
        let above = fingering.place_above(self.score, self.style);
        let sp = self.style.spatium;
        let md = fingering.min_distance(self.style) * sp;
        let note = anchor.note;

        // centre on the notehead
        if note.mirror {
            fingering.ipos.x -= note.pos.x;
        }
        fingering.ipos.x += note.bbox.right() * 0.5;

        if tight {
            let shift = if anchor.chord.stem.is_some() { TIGHT_STEM_SHIFT * sp } else { 0.0 };
            if above {
                fingering.ipos.x -= shift;
                fingering.ipos.y -= TIGHT_VERTICAL_SHIFT * sp;
            } else {
                fingering.ipos.x += shift;
                fingering.ipos.y += TIGHT_VERTICAL_SHIFT * sp;
            }
            log::debug!("Fingering '{}' tight, above={}", fingering.text, above);
            return;
        }

        let r = fingering.bbox.translated(anchor.note_origin() + fingering.pos());
        let mut yd = 0.0;

        let overlap = skyline_overlap(&r, above, skylines.staff(anchor.chord.staff));
        if let Some(overlap) = overlap {
            if overlap > 0.0 && fingering.is_min_distance_styled() {
                let push = overlap + fingering.height() * SKYLINE_PADDING_RATIO;
                yd = if above { -push } else { push };
            }
        }

        // keep clear of staff and chord (other annotations only via the skyline)
        if above {
            let top = self.chord_top(anchor) - md;
            let diff = (fingering.bbox.bottom() + fingering.ipos.y + yd + note.pos.y) - top;
            if diff > 0.0 {
                yd -= diff;
            }
        } else {
            let bottom = self.chord_bottom(anchor) + md;
            let diff = bottom - (fingering.bbox.top() + fingering.ipos.y + yd + note.pos.y);
            if diff > 0.0 {
                yd += diff;
            }
        }

        if fingering.offset_change.is_pending() {
            let req = MinDistanceRebase {
                min_distance: md,
                yd,
                spatium: sp,
                above,
                in_staff: in_staff(&r, rebase, above, anchor.staff.height),
            };
            yd = rebase_min_distance(fingering, req);
        }

        log::debug!(
            "Fingering '{}' above={} overlap={:?} yd={}",
            fingering.text,
            above,
            overlap,
            yd
        );
        fingering.ipos.y += yd;
    }

    /// Highest fixed edge above the chord, relative to the chord
    fn chord_top(&self, anchor: &Anchor) -> f32 {
        let chord = anchor.chord;
        match &chord.stem {
            Some(stem) if chord.up && chord.beamed => stem.pos.y + stem.bbox.top(),
            _ => {
                let up = self.score.up_note(chord).unwrap_or(anchor.note);
                (up.pos.y + up.bbox.top()).min(0.0)
            }
        }
    }

    /// Lowest fixed edge below the chord, relative to the chord
    fn chord_bottom(&self, anchor: &Anchor) -> f32 {
        let chord = anchor.chord;
        match &chord.stem {
            Some(stem) if !chord.up && chord.beamed => stem.pos.y + stem.bbox.bottom(),
            _ => {
                let down = self.score.down_note(chord).unwrap_or(anchor.note);
                (down.pos.y + down.bbox.bottom()).max(anchor.staff.height)
            }
        }
    }

    fn commit(&self, fingering: &Fingering, anchor: &Anchor, skylines: &mut SystemSkylines) {
        let r = fingering.bbox.translated(anchor.note_origin() + fingering.pos());
        if let Some(skyline) = skylines.staff_mut(anchor.chord.staff) {
            skyline.add_rect(&r);
        }
    }
}

/// How far `r` reaches into the skyline on its side; `None` when nothing is below/above it
fn skyline_overlap(r: &RectF, above: bool, skyline: Option<&Skyline>) -> Option<f32> {
    let skyline = skyline?;
    let clearance = if above {
        let mut own = SkylineLine::south();
        own.add(r.x, r.bottom(), r.width);
        own.min_distance(skyline.north())
    } else {
        let mut own = SkylineLine::north();
        own.add(r.x, r.top(), r.width);
        skyline.south().min_distance(&own)
    }?;

    log::trace!("skyline clearance {} for {:?}", clearance, r);
    Some(-clearance)
}

/// Left-hand guitar fingering sits left of the note's visible outline
fn place_left_of_note(fingering: &mut Fingering, note: &Note) {
    let left = note.shape_left();
    if left - note.pos.x > 0.0 {
        fingering.ipos.x -= left;
    } else {
        fingering.ipos.x -= note.pos.x;
    }
}
