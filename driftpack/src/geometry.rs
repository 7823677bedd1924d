/// Axis-aligned box in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl Aabb {
    pub fn from_center(center: (f64, f64), size: (u32, u32)) -> Self {
        let half = (f64::from(size.0) / 2.0, f64::from(size.1) / 2.0);

        Self {
            min: (center.0 - half.0, center.1 - half.1),
            max: (center.0 + half.0, center.1 + half.1),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> f64 {
        self.max.1 - self.min.1
    }

    /// Whether the two boxes come within `margin` of each other. Touching
    /// boxes count as overlapping.
    pub fn overlaps(&self, other: &Aabb, margin: f64) -> bool {
        !(self.max.0 + margin < other.min.0
            || other.max.0 + margin < self.min.0
            || self.max.1 + margin < other.min.1
            || other.max.1 + margin < self.min.1)
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: (self.min.0.min(other.min.0), self.min.1.min(other.min.1)),
            max: (self.max.0.max(other.max.0), self.max.1.max(other.max.1)),
        }
    }
}
