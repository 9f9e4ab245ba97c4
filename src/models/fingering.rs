//! Fingering annotation
//!
//! A fingering (or string number, or guitar fingering mark) hangs off a
//! note. It does not own the note: the anchor is a `NoteId` that layout
//! resolves against the current `Score` and must tolerate being absent.

use serde::{Deserialize, Serialize};

use super::elements::{OffsetChange, Placement, TextStyleKind};
use super::geometry::{PointF, RectF};
use super::score::{NoteId, Score};
use crate::layout::placement::{calculate_placement, PlacementContext};
use crate::style::StyleConfig;

/// Properties with a style-driven or computed default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyId {
    Placement,
    MinDistance,
    TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Placement(Placement),
    /// Distance in staff spaces
    Spatium(f32),
    TextStyle(TextStyleKind),
}

fn default_autoplace() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Fingering {
    /// Plain text content ("1", "p", "3" ...)
    pub text: String,

    #[serde(default)]
    pub kind: TextStyleKind,

    /// Annotated note, if attached
    #[serde(default)]
    pub note: Option<NoteId>,

    /// Instance placement; `None` follows style, then the placement policy
    #[serde(default)]
    pub placement: Option<Placement>,

    /// Instance minimum distance in staff spaces; `None` follows style
    #[serde(default)]
    pub min_distance: Option<f32>,

    /// User displacement on top of the automatic position
    #[serde(default)]
    pub offset: PointF,

    #[serde(default)]
    pub offset_change: OffsetChange,

    /// Where the user left the element (`ipos + offset` at move time)
    #[serde(default)]
    pub changed_pos: PointF,

    #[serde(default = "default_autoplace")]
    pub autoplace: bool,

    /// Automatic position relative to the note, recomputed every layout
    #[serde(default)]
    pub ipos: PointF,

    /// Text box relative to `pos()`, recomputed every layout
    #[serde(default)]
    pub bbox: RectF,
}

impl Fingering {
    pub fn new(note: Option<NoteId>, kind: TextStyleKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            note,
            placement: None,
            min_distance: None,
            offset: PointF::default(),
            offset_change: OffsetChange::None,
            changed_pos: PointF::default(),
            autoplace: true,
            ipos: PointF::default(),
            bbox: RectF::default(),
        }
    }

    /// Final position relative to the note
    pub fn pos(&self) -> PointF {
        self.ipos + self.offset
    }

    pub fn height(&self) -> f32 {
        self.bbox.height
    }

    /// Placement the policy picks for the anchor's context; Above when unattached
    pub fn calculate_placement(&self, score: &Score) -> Placement {
        self.note
            .and_then(|id| PlacementContext::for_note(score, id))
            .map_or(Placement::Above, |ctx| calculate_placement(&ctx))
    }

    /// Effective placement: instance value, then style value, then policy
    pub fn placement(&self, score: &Score, style: &StyleConfig) -> Placement {
        self.placement
            .or(style.fingering_placement)
            .unwrap_or_else(|| self.calculate_placement(score))
    }

    pub fn place_above(&self, score: &Score, style: &StyleConfig) -> bool {
        self.placement(score, style).is_above()
    }

    pub fn set_placement(&mut self, placement: Option<Placement>) {
        self.placement = placement;
    }

    /// Effective minimum distance in staff spaces
    pub fn min_distance(&self, style: &StyleConfig) -> f32 {
        self.min_distance.unwrap_or(style.fingering_min_distance)
    }

    pub fn is_min_distance_styled(&self) -> bool {
        self.min_distance.is_none()
    }

    pub fn set_min_distance(&mut self, min_distance: Option<f32>) {
        self.min_distance = min_distance;
    }

    pub fn property_default(&self, id: PropertyId, score: &Score, style: &StyleConfig) -> PropertyValue {
        match id {
            PropertyId::Placement => PropertyValue::Placement(
                style
                    .fingering_placement
                    .unwrap_or_else(|| self.calculate_placement(score)),
            ),
            PropertyId::MinDistance => PropertyValue::Spatium(style.fingering_min_distance),
            PropertyId::TextStyle => PropertyValue::TextStyle(TextStyleKind::Fingering),
        }
    }

    /// Drop an instance override so the property follows its default again
    pub fn reset_property(&mut self, id: PropertyId) {
        match id {
            PropertyId::Placement => self.placement = None,
            PropertyId::MinDistance => self.min_distance = None,
            PropertyId::TextStyle => self.kind = TextStyleKind::Fingering,
        }
    }

    /// Apply a user move; the next layout rebases it against autoplace
    pub fn move_by(&mut self, delta: PointF, change: OffsetChange) {
        self.offset += delta;
        self.offset_change = change;
        self.changed_pos = self.pos();
    }

    pub fn accessible_info(&self) -> String {
        let mut name = String::from("Fingering");
        if self.kind == TextStyleKind::StringNumber {
            name.push_str(" String number");
        }
        format!("{}: {}", name, self.text)
    }
}
