//! Read-only score geometry for one system
//!
//! The document model proper (measures, voices, editing) lives outside this
//! crate. Layout only needs the slice described here: parts and their staves,
//! chords with stems and beams, and notes with their notehead boxes. Elements
//! refer to each other through typed indices, so a stale id simply resolves
//! to `None` instead of dangling.

use serde::{Deserialize, Serialize};

use super::elements::StaffType;
use super::geometry::{PointF, RectF};

macro_rules! index_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub usize);
    };
}

index_id!(
    /// Index into `Score::parts`
    PartId
);
index_id!(
    /// Index into `Score::staves`; also the staff's top-to-bottom order in the system
    StaffId
);
index_id!(
    /// Index into `Score::chords`
    ChordId
);
index_id!(
    /// Index into `Score::notes`
    NoteId
);

/// An instrument; owns one or more consecutive staves
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub name: String,

    /// Staves of this part, top to bottom
    pub staves: Vec<StaffId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Staff {
    pub part: PartId,

    /// Distance from top to bottom staff line
    pub height: f32,

    #[serde(default)]
    pub staff_type: StaffType,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Stem {
    /// Position relative to the chord
    pub pos: PointF,

    /// Stem box relative to `pos`
    pub bbox: RectF,
}

impl Stem {
    /// Stem box relative to the chord
    pub fn rect(&self) -> RectF {
        self.bbox.translated(self.pos)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Chord {
    pub staff: StaffId,

    /// Voice within the staff, 0 is the first voice
    #[serde(default)]
    pub voice: u8,

    /// Start time in ticks
    pub tick: u32,

    /// Actual duration in ticks
    pub duration: u32,

    /// Position in system coordinates (x from the system start, y from the staff top)
    pub pos: PointF,

    /// Stem direction: true when the stem points up
    pub up: bool,

    #[serde(default)]
    pub stem: Option<Stem>,

    #[serde(default)]
    pub beamed: bool,

    pub notes: Vec<NoteId>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    pub chord: ChordId,

    /// Position relative to the chord
    pub pos: PointF,

    /// Notehead box relative to `pos`
    pub bbox: RectF,

    /// Accidental box relative to `pos`
    #[serde(default)]
    pub accidental: Option<RectF>,

    /// Notehead flipped to the other side of the stem
    #[serde(default)]
    pub mirror: bool,
}

impl Note {
    /// Visible outline of the note relative to its position
    pub fn shape(&self) -> Vec<RectF> {
        let mut shape = vec![self.bbox];
        if let Some(acc) = self.accidental {
            shape.push(acc);
        }
        shape
    }

    /// How far the note's outline extends left of its origin (never negative)
    pub fn shape_left(&self) -> f32 {
        let leftmost = self
            .shape()
            .iter()
            .map(RectF::left)
            .fold(0.0_f32, f32::min);
        -leftmost
    }
}

/// The staves, chords and notes of one system
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Score {
    /// System width, used for the staff line extent in skylines
    #[serde(default)]
    pub width: f32,

    #[serde(default)]
    pub parts: Vec<Part>,

    #[serde(default)]
    pub staves: Vec<Staff>,

    #[serde(default)]
    pub chords: Vec<Chord>,

    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Score {
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id.0)
    }

    pub fn staff(&self, id: StaffId) -> Option<&Staff> {
        self.staves.get(id.0)
    }

    pub fn chord(&self, id: ChordId) -> Option<&Chord> {
        self.chords.get(id.0)
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(id.0)
    }

    /// Position of the staff within its part (0 = top staff)
    pub fn staff_index_in_part(&self, id: StaffId) -> Option<usize> {
        let staff = self.staff(id)?;
        let part = self.part(staff.part)?;
        part.staves.iter().position(|s| *s == id)
    }

    /// Number of staves of the part owning this staff
    pub fn part_staff_count(&self, id: StaffId) -> usize {
        self.staff(id)
            .and_then(|staff| self.part(staff.part))
            .map_or(1, |part| part.staves.len())
    }

    /// Whether content in a voice other than the first sounds on `staff`
    /// anywhere in `[tick, tick + len)`
    pub fn has_voices(&self, staff: StaffId, tick: u32, len: u32) -> bool {
        let end = tick.saturating_add(len.max(1));
        self.chords.iter().any(|c| {
            c.staff == staff
                && c.voice > 0
                && c.tick < end
                && c.tick.saturating_add(c.duration.max(1)) > tick
        })
    }

    /// Highest note of the chord (smallest y)
    pub fn up_note(&self, chord: &Chord) -> Option<&Note> {
        chord
            .notes
            .iter()
            .filter_map(|id| self.note(*id))
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    /// Lowest note of the chord (largest y)
    pub fn down_note(&self, chord: &Chord) -> Option<&Note> {
        chord
            .notes
            .iter()
            .filter_map(|id| self.note(*id))
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    /// Outline of a chord (noteheads, accidentals, stem) in system coordinates
    pub fn chord_shape(&self, chord: &Chord) -> Vec<RectF> {
        let mut shape = Vec::new();
        for note in chord.notes.iter().filter_map(|id| self.note(*id)) {
            let origin = chord.pos + note.pos;
            shape.extend(note.shape().iter().map(|r| r.translated(origin)));
        }
        if let Some(stem) = &chord.stem {
            shape.push(stem.rect().translated(chord.pos));
        }
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(staff: usize, voice: u8, tick: u32, duration: u32) -> Chord {
        Chord {
            staff: StaffId(staff),
            voice,
            tick,
            duration,
            pos: PointF::default(),
            up: true,
            stem: None,
            beamed: false,
            notes: Vec::new(),
        }
    }

    fn note(y: f32) -> Note {
        Note {
            chord: ChordId(0),
            pos: PointF::new(0.0, y),
            bbox: RectF::new(0.0, -2.5, 12.0, 5.0),
            accidental: None,
            mirror: false,
        }
    }

    #[test]
    fn test_has_voices_overlap() {
        let score = Score {
            chords: vec![chord(0, 0, 0, 480), chord(0, 1, 480, 480), chord(1, 1, 0, 960)],
            ..Default::default()
        };

        assert!(!score.has_voices(StaffId(0), 0, 480));
        assert!(score.has_voices(StaffId(0), 480, 480));
        assert!(score.has_voices(StaffId(0), 0, 960));
        assert!(score.has_voices(StaffId(1), 0, 480));
    }

    #[test]
    fn test_staff_position_in_part() {
        let score = Score {
            parts: vec![Part { name: "Piano".into(), staves: vec![StaffId(0), StaffId(1)] }],
            staves: vec![
                Staff { part: PartId(0), height: 40.0, staff_type: StaffType::default() },
                Staff { part: PartId(0), height: 40.0, staff_type: StaffType::default() },
            ],
            ..Default::default()
        };

        assert_eq!(score.staff_index_in_part(StaffId(1)), Some(1));
        assert_eq!(score.part_staff_count(StaffId(1)), 2);
        assert_eq!(score.staff_index_in_part(StaffId(7)), None);
        assert_eq!(score.part_staff_count(StaffId(7)), 1);
    }

    #[test]
    fn test_up_and_down_note() {
        let mut c = chord(0, 0, 0, 480);
        c.notes = vec![NoteId(0), NoteId(1), NoteId(2)];
        let score = Score {
            notes: vec![note(20.0), note(5.0), note(35.0)],
            chords: vec![c.clone()],
            ..Default::default()
        };

        assert_eq!(score.up_note(&c).map(|n| n.pos.y), Some(5.0));
        assert_eq!(score.down_note(&c).map(|n| n.pos.y), Some(35.0));
    }

    #[test]
    fn test_shape_left_counts_accidental() {
        let mut n = note(0.0);
        assert_eq!(n.shape_left(), 0.0);
        n.accidental = Some(RectF::new(-9.0, -6.0, 7.0, 12.0));
        assert_eq!(n.shape_left(), 9.0);
    }
}
