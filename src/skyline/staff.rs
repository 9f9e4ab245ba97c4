//! Per-staff skyline and the per-system collection

use serde::{Deserialize, Serialize};

use super::line::SkylineLine;
use crate::models::{RectF, StaffId};

/// Upper and lower profile of everything placed on one staff
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Skyline {
    north: SkylineLine,
    south: SkylineLine,
}

impl Default for Skyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Skyline {
    pub fn new() -> Self {
        Self {
            north: SkylineLine::north(),
            south: SkylineLine::south(),
        }
    }

    pub fn north(&self) -> &SkylineLine {
        &self.north
    }

    pub fn south(&self) -> &SkylineLine {
        &self.south
    }

    pub fn add_rect(&mut self, r: &RectF) {
        self.north.add_rect(r);
        self.south.add_rect(r);
    }

    pub fn add_shape(&mut self, shape: &[RectF]) {
        for r in shape {
            self.add_rect(r);
        }
    }

    pub fn clear(&mut self) {
        self.north.clear();
        self.south.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.north.is_empty() && self.south.is_empty()
    }

    /// Clearance between this staff's bottom and `below`'s top
    pub fn min_distance(&self, below: &Skyline) -> Option<f32> {
        self.south.min_distance(&below.north)
    }
}

/// One skyline per staff of a system, indexed by `StaffId`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SystemSkylines {
    staves: Vec<Skyline>,
}

impl SystemSkylines {
    pub fn new(staff_count: usize) -> Self {
        Self {
            staves: vec![Skyline::new(); staff_count],
        }
    }

    pub fn staff(&self, id: StaffId) -> Option<&Skyline> {
        self.staves.get(id.0)
    }

    pub fn staff_mut(&mut self, id: StaffId) -> Option<&mut Skyline> {
        self.staves.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.staves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skyline> {
        self.staves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_feeds_both_lines() {
        let mut sky = Skyline::new();
        sky.add_rect(&RectF::new(0.0, -5.0, 10.0, 20.0));

        assert_eq!(sky.north().max(), Some(-5.0));
        assert_eq!(sky.south().max(), Some(15.0));
    }

    #[test]
    fn test_staff_to_staff_distance() {
        let mut upper = Skyline::new();
        upper.add_rect(&RectF::new(0.0, 0.0, 100.0, 40.0));
        let mut lower = Skyline::new();
        lower.add_rect(&RectF::new(0.0, 70.0, 100.0, 40.0));
        lower.add_rect(&RectF::new(30.0, 55.0, 10.0, 20.0));

        assert_eq!(upper.min_distance(&lower), Some(15.0));
    }

    #[test]
    fn test_clear_empties() {
        let mut sky = Skyline::new();
        sky.add_rect(&RectF::new(0.0, 0.0, 1.0, 1.0));
        sky.clear();
        assert!(sky.is_empty());
    }

    #[test]
    fn test_system_lookup() {
        let mut skylines = SystemSkylines::new(2);
        assert!(skylines.staff_mut(StaffId(1)).is_some());
        assert!(skylines.staff(StaffId(2)).is_none());
        assert_eq!(skylines.len(), 2);
    }
}
