//! System layout pass
//!
//! Rebuilds the staff skylines from the score, then lays out every fingering
//! in document order (left to right, top to bottom) so each one sees what the
//! earlier ones committed.

use std::cmp::Ordering;

use super::display_list::RenderFingering;
use super::fingering::FingeringLayout;
use crate::models::{Fingering, PointF, RectF, Score, StaffId};
use crate::skyline::SystemSkylines;
use crate::style::StyleConfig;
use crate::text::TextMetrics;

/// Sort key of one annotation; unresolved anchors sort last
#[derive(Clone, Copy, Debug)]
struct OrderKey {
    unresolved: bool,
    tick: u32,
    staff: usize,
    x: f32,
    y: f32,
    index: usize,
}

impl OrderKey {
    fn compare(&self, other: &Self) -> Ordering {
        self.unresolved
            .cmp(&other.unresolved)
            .then(self.tick.cmp(&other.tick))
            .then(self.staff.cmp(&other.staff))
            .then(self.x.total_cmp(&other.x))
            .then(self.y.total_cmp(&other.y))
            .then(self.index.cmp(&other.index))
    }
}

pub struct SystemLayout<'a> {
    score: &'a Score,
    style: &'a StyleConfig,
    metrics: &'a dyn TextMetrics,
}

impl<'a> SystemLayout<'a> {
    pub fn new(score: &'a Score, style: &'a StyleConfig, metrics: &'a dyn TextMetrics) -> Self {
        Self { score, style, metrics }
    }

    /// Fresh skylines holding staff lines and chord outlines
    pub fn build_skylines(&self) -> SystemSkylines {
        let mut skylines = SystemSkylines::new(self.score.staves.len());

        for (idx, staff) in self.score.staves.iter().enumerate() {
            if let Some(skyline) = skylines.staff_mut(StaffId(idx)) {
                skyline.add_rect(&RectF::new(0.0, 0.0, self.score.width, staff.height));
            }
        }

        for chord in &self.score.chords {
            let shape = self.score.chord_shape(chord);
            if let Some(skyline) = skylines.staff_mut(chord.staff) {
                skyline.add_shape(&shape);
            }
        }

        skylines
    }

    /// Indices of `fingerings` in layout order
    pub fn document_order(&self, fingerings: &[Fingering]) -> Vec<usize> {
        let mut keys: Vec<OrderKey> = fingerings
            .iter()
            .enumerate()
            .map(|(index, f)| self.order_key(index, f))
            .collect();
        keys.sort_by(OrderKey::compare);
        keys.into_iter().map(|k| k.index).collect()
    }

    fn order_key(&self, index: usize, fingering: &Fingering) -> OrderKey {
        let resolved = fingering.note.and_then(|id| {
            let note = self.score.note(id)?;
            let chord = self.score.chord(note.chord)?;
            Some((note, chord))
        });

        match resolved {
            Some((note, chord)) => OrderKey {
                unresolved: false,
                tick: chord.tick,
                staff: chord.staff.0,
                x: chord.pos.x,
                y: chord.pos.y + note.pos.y,
                index,
            },
            None => OrderKey { unresolved: true, tick: 0, staff: 0, x: 0.0, y: 0.0, index },
        }
    }

    /// Lay out all fingerings of the system; returns the final skylines
    pub fn run(&self, fingerings: &mut [Fingering]) -> SystemSkylines {
        let mut skylines = self.build_skylines();
        let engine = FingeringLayout::new(self.score, self.style, self.metrics);

        let order = self.document_order(fingerings);
        log::debug!("Laying out {} fingerings on {} staves", order.len(), skylines.len());

        for index in order {
            engine.layout(&mut fingerings[index], &mut skylines);
        }
        skylines
    }

    /// Visible, anchored fingerings in system coordinates
    pub fn display_list(&self, fingerings: &[Fingering]) -> Vec<RenderFingering> {
        fingerings
            .iter()
            .enumerate()
            .filter_map(|(index, f)| {
                if f.bbox.is_empty() {
                    return None;
                }
                let note = self.score.note(f.note?)?;
                let chord = self.score.chord(note.chord)?;
                let origin: PointF = chord.pos + note.pos + f.pos();
                let r = f.bbox.translated(origin);

                Some(RenderFingering {
                    index,
                    text: f.text.clone(),
                    kind: f.kind,
                    x: origin.x,
                    y: origin.y,
                    left: r.left(),
                    top: r.top(),
                    width: r.width,
                    height: r.height,
                    placement: f.placement(self.score, self.style),
                    accessible: f.accessible_info(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chord, ChordId, Note, NoteId, Part, PartId, Staff, StaffType, TextStyleKind};
    use crate::text::ApproximateMetrics;

    fn note(chord: usize, y: f32) -> Note {
        Note {
            chord: ChordId(chord),
            pos: PointF::new(0.0, y),
            bbox: RectF::new(0.0, -5.0, 12.0, 10.0),
            accidental: None,
            mirror: false,
        }
    }

    fn chord(staff: usize, tick: u32, x: f32, notes: Vec<usize>) -> Chord {
        Chord {
            staff: StaffId(staff),
            voice: 0,
            tick,
            duration: 480,
            pos: PointF::new(x, 0.0),
            up: true,
            stem: None,
            beamed: false,
            notes: notes.into_iter().map(NoteId).collect(),
        }
    }

    fn two_staff_score() -> Score {
        Score {
            width: 300.0,
            parts: vec![
                Part { name: "Violin".into(), staves: vec![StaffId(0)] },
                Part { name: "Cello".into(), staves: vec![StaffId(1)] },
            ],
            staves: vec![
                Staff { part: PartId(0), height: 40.0, staff_type: StaffType::default() },
                Staff { part: PartId(1), height: 40.0, staff_type: StaffType::default() },
            ],
            chords: vec![chord(0, 480, 150.0, vec![0]), chord(0, 0, 50.0, vec![1, 2]), chord(1, 0, 50.0, vec![3])],
            notes: vec![note(0, 20.0), note(1, 30.0), note(1, 10.0), note(2, 20.0)],
        }
    }

    #[test]
    fn test_build_skylines_covers_staff_lines() {
        let score = two_staff_score();
        let style = StyleConfig::default();
        let layout = SystemLayout::new(&score, &style, &ApproximateMetrics);

        let skylines = layout.build_skylines();
        assert_eq!(skylines.len(), 2);
        let top = skylines.staff(StaffId(0)).unwrap();
        assert_eq!(top.north().max(), Some(0.0));
        assert_eq!(top.south().max(), Some(40.0));
    }

    #[test]
    fn test_document_order() {
        let score = two_staff_score();
        let style = StyleConfig::default();
        let layout = SystemLayout::new(&score, &style, &ApproximateMetrics);
        let fingerings = vec![
            Fingering::new(Some(NoteId(0)), TextStyleKind::Fingering, "a"),
            Fingering::new(None, TextStyleKind::Fingering, "b"),
            Fingering::new(Some(NoteId(3)), TextStyleKind::Fingering, "c"),
            Fingering::new(Some(NoteId(1)), TextStyleKind::Fingering, "d"),
            Fingering::new(Some(NoteId(2)), TextStyleKind::Fingering, "e"),
        ];

        // tick 0: staff 0 top note, staff 0 lower note, staff 1; then tick 480; then unattached
        assert_eq!(layout.document_order(&fingerings), vec![4, 3, 2, 0, 1]);
    }

    #[test]
    fn test_display_list_skips_unanchored() {
        let score = two_staff_score();
        let style = StyleConfig::default();
        let layout = SystemLayout::new(&score, &style, &ApproximateMetrics);
        let mut fingerings = vec![
            Fingering::new(Some(NoteId(0)), TextStyleKind::Fingering, "3"),
            Fingering::new(None, TextStyleKind::Fingering, "4"),
        ];

        layout.run(&mut fingerings);
        let display = layout.display_list(&fingerings);

        assert_eq!(display.len(), 1);
        assert_eq!(display[0].index, 0);
        assert_eq!(display[0].accessible, "Fingering: 3");
        assert!(display[0].top + display[0].height <= 0.0);
    }
}
