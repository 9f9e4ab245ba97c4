//! Text box measurement

use crate::models::{RectF, TextStyleKind};
use crate::style::StyleConfig;

/// Measures annotation text
pub trait TextMetrics {
    /// Box of `text` centred on the origin, in absolute units
    fn bbox(&self, text: &str, kind: TextStyleKind, style: &StyleConfig) -> RectF;
}

/// Font-free estimate: every glyph advances 0.6 of the text size
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    const CHAR_WIDTH_RATIO: f32 = 0.6;
}

impl TextMetrics for ApproximateMetrics {
    fn bbox(&self, text: &str, kind: TextStyleKind, style: &StyleConfig) -> RectF {
        let chars = text.chars().count();
        if chars == 0 {
            return RectF::default();
        }

        let size = match kind {
            TextStyleKind::StringNumber => style.sp(style.string_number_text_size),
            _ => style.sp(style.fingering_text_size),
        };
        let mut width = chars as f32 * size * Self::CHAR_WIDTH_RATIO;
        let mut height = size;

        // circle frame: square, padded on every side
        if kind == TextStyleKind::StringNumber {
            let side = width.max(height) + 2.0 * style.sp(style.string_number_frame_padding);
            width = side;
            height = side;
        }

        RectF::new(-width / 2.0, -height / 2.0, width, height)
    }
}
