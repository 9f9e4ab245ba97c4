//! Skyline line: one stepped elevation profile
//!
//! A north line records the topmost extent of placed content at each x, a
//! south line the bottommost. Spans are kept sorted by x, never overlap, and
//! may leave gaps where nothing has been placed yet.

use serde::{Deserialize, Serialize};

use crate::models::RectF;

/// Horizontal run `[x, x + width)` at height `y`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SkylineSpan {
    pub x: f32,
    pub width: f32,
    pub y: f32,
}

impl SkylineSpan {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SkylineLine {
    north: bool,
    spans: Vec<SkylineSpan>,
}

impl SkylineLine {
    /// Upper profile: smaller y wins
    pub fn north() -> Self {
        Self { north: true, spans: Vec::new() }
    }

    /// Lower profile: larger y wins
    pub fn south() -> Self {
        Self { north: false, spans: Vec::new() }
    }

    pub fn is_north(&self) -> bool {
        self.north
    }

    pub fn spans(&self) -> &[SkylineSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Whether height `a` lies further out than `b` for this line
    fn dominates(&self, a: f32, b: f32) -> bool {
        if self.north {
            a < b
        } else {
            a > b
        }
    }

    /// Merge the edge `[x, x + width)` at height `y` into the profile
    pub fn add(&mut self, x: f32, y: f32, width: f32) {
        if !(width > 0.0) || !x.is_finite() || !y.is_finite() {
            return;
        }

        let right = x + width;
        let old = std::mem::take(&mut self.spans);
        let mut spans = Vec::with_capacity(old.len() + 2);
        let mut cursor = x;

        for s in old {
            if s.right() <= x {
                push_span(&mut spans, s.x, s.right(), s.y);
                continue;
            }
            if s.x >= right {
                if cursor < right {
                    push_span(&mut spans, cursor, right, y);
                    cursor = right;
                }
                push_span(&mut spans, s.x, s.right(), s.y);
                continue;
            }

            if s.x < x {
                push_span(&mut spans, s.x, x, s.y);
            }
            if s.x > cursor {
                push_span(&mut spans, cursor, s.x, y);
            }
            let start = s.x.max(x);
            let end = s.right().min(right);
            let edge = if self.dominates(y, s.y) { y } else { s.y };
            push_span(&mut spans, start, end, edge);
            cursor = end;
            if s.right() > right {
                push_span(&mut spans, right, s.right(), s.y);
            }
        }

        if cursor < right {
            push_span(&mut spans, cursor, right, y);
        }
        self.spans = spans;
    }

    /// Add the edge of `r` facing this line's direction
    pub fn add_rect(&mut self, r: &RectF) {
        if r.is_empty() {
            return;
        }
        let y = if self.north { r.top() } else { r.bottom() };
        self.add(r.x, y, r.width);
    }

    /// Outermost extent (minimum y for north, maximum y for south)
    pub fn max(&self) -> Option<f32> {
        let ys = self.spans.iter().map(|s| s.y);
        if self.north {
            ys.reduce(f32::min)
        } else {
            ys.reduce(f32::max)
        }
    }

    /// Smallest vertical clearance from this line down to `below`
    ///
    /// `self` is the lower edge of content above, `below` the upper edge of
    /// content underneath. Only x ranges covered by both lines count. A
    /// positive result is free space; zero or negative means the two overlap
    /// by that much. `None` when the lines share no x range.
    pub fn min_distance(&self, below: &SkylineLine) -> Option<f32> {
        let mut dist: Option<f32> = None;
        let (mut i, mut k) = (0, 0);

        while i < self.spans.len() && k < below.spans.len() {
            let a = &self.spans[i];
            let b = &below.spans[k];
            if a.x < b.right() && b.x < a.right() {
                let gap = b.y - a.y;
                dist = Some(dist.map_or(gap, |d| d.min(gap)));
            }
            if a.right() < b.right() {
                i += 1;
            } else {
                k += 1;
            }
        }

        dist
    }
}

/// Append a span, joining it to the previous one when they continue each other
fn push_span(spans: &mut Vec<SkylineSpan>, x: f32, right: f32, y: f32) {
    let width = right - x;
    if width <= 0.0 {
        return;
    }
    if let Some(last) = spans.last_mut() {
        if last.y == y && last.right() == x {
            last.width += width;
            return;
        }
    }
    spans.push(SkylineSpan { x, width, y });
}
