use glam::IVec2;

/// Axis-aligned bounding box in integer pixels, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    /// Integer center (halves truncate)
    pub fn center(&self) -> IVec2 {
        self.min + self.size() / 2
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Both corners of `other` lie inside this box
    pub fn contains_box(&self, other: &Aabb) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }
}

/// Hit zone geometry, used by the judge and drawn by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Rect(Aabb),
    Circle { center: IVec2, radius: i32 },
}
