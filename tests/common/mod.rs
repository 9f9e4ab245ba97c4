// Shared fixtures for layout integration tests
#![allow(dead_code)]

use engraving_autoplace::{
    Chord, ChordId, Note, NoteId, Part, PartId, PointF, RectF, Score, Staff, StaffId, StaffType,
    StyleConfig, Stem, TextMetrics, TextStyleKind,
};

/// Every text is a 10 x 12 box centred on the origin
pub struct FixedMetrics;

impl TextMetrics for FixedMetrics {
    fn bbox(&self, _text: &str, _kind: TextStyleKind, _style: &StyleConfig) -> RectF {
        RectF::new(-5.0, -6.0, 10.0, 12.0)
    }
}

/// Spatium 10, minimum distance 0.5sp
pub fn style() -> StyleConfig {
    StyleConfig { spatium: 10.0, fingering_min_distance: 0.5, ..Default::default() }
}

pub const STAFF_HEIGHT: f32 = 40.0;

/// Builds a one-system score; every notehead is 12 x 10 with its origin on the left edge
pub struct ScoreBuilder {
    score: Score,
}

impl ScoreBuilder {
    pub fn new() -> Self {
        Self { score: Score { width: 400.0, ..Default::default() } }
    }

    /// Add a part with `staves` staves below the existing ones
    pub fn part(mut self, name: &str, staves: usize) -> Self {
        let part = PartId(self.score.parts.len());
        let mut ids = Vec::new();
        for _ in 0..staves {
            ids.push(StaffId(self.score.staves.len()));
            self.score.staves.push(Staff { part, height: STAFF_HEIGHT, staff_type: StaffType::default() });
        }
        self.score.parts.push(Part { name: name.into(), staves: ids });
        self
    }

    pub fn staff_type(mut self, staff: usize, staff_type: StaffType) -> Self {
        self.score.staves[staff].staff_type = staff_type;
        self
    }

    /// Add a chord at x = 100 + tick / 4; returns the note ids top to bottom as given
    pub fn chord(&mut self, staff: usize, voice: u8, tick: u32, up: bool, note_ys: &[f32]) -> Vec<NoteId> {
        let chord_id = ChordId(self.score.chords.len());
        let mut notes = Vec::new();
        for y in note_ys {
            notes.push(NoteId(self.score.notes.len()));
            self.score.notes.push(Note {
                chord: chord_id,
                pos: PointF::new(0.0, *y),
                bbox: RectF::new(0.0, -5.0, 12.0, 10.0),
                accidental: None,
                mirror: false,
            });
        }
        self.score.chords.push(Chord {
            staff: StaffId(staff),
            voice,
            tick,
            duration: 480,
            pos: PointF::new(100.0 + tick as f32 / 4.0, 0.0),
            up,
            stem: None,
            beamed: false,
            notes: notes.clone(),
        });
        notes
    }

    /// Give the last chord an up stem from its notehead's right edge
    pub fn with_stem(&mut self) {
        if let Some(chord) = self.score.chords.last_mut() {
            chord.stem = Some(Stem { pos: PointF::new(11.0, 0.0), bbox: RectF::new(0.0, -15.0, 1.0, 35.0) });
        }
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn build(self) -> Score {
        self.score
    }
}

impl Default for ScoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Box of a laid out fingering in system coordinates
pub fn system_rect(score: &Score, f: &engraving_autoplace::Fingering) -> RectF {
    let note = score.note(f.note.unwrap()).unwrap();
    let chord = score.chord(note.chord).unwrap();
    f.bbox.translated(chord.pos + note.pos + f.pos())
}

pub fn assert_near(a: PointF, b: PointF) {
    assert!(
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
        "expected {:?}, got {:?}",
        b,
        a
    );
}
