//! Drawing surface interface
//!
//! The simulation issues draw commands through [`Surface`] and keeps its own
//! geometry. A surface is a side-effect sink: it is never asked which entity a
//! shape belongs to.

use glam::Vec2;

/// RGBA color, components in 0-1
pub type Rgba = [f32; 4];

/// Handle to a shape drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u32);

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    /// Inclusive overlap test: boxes that share an edge overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Drawable primitive in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { min: Vec2, max: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Polygon(Vec<Vec2>),
    Text { anchor: Vec2, text: String, size: f32 },
}

impl Shape {
    /// Rectangle of the given size centered on `center`
    pub fn rect_centered(center: Vec2, size: Vec2) -> Self {
        let aabb = Aabb::from_center(center, size);
        Shape::Rect {
            min: aabb.min,
            max: aabb.max,
        }
    }

    pub fn text(anchor: Vec2, text: impl Into<String>, size: f32) -> Self {
        Shape::Text {
            anchor,
            text: text.into(),
            size,
        }
    }

    /// Bounding box (text is a point at its anchor)
    pub fn bounds(&self) -> Aabb {
        match self {
            Shape::Rect { min, max } => Aabb::new(*min, *max),
            Shape::Circle { center, radius } => {
                Aabb::from_center(*center, Vec2::splat(radius * 2.0))
            }
            Shape::Polygon(points) => {
                let first = points.first().copied().unwrap_or(Vec2::ZERO);
                let (min, max) = points
                    .iter()
                    .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
                Aabb::new(min, max)
            }
            Shape::Text { anchor, .. } => Aabb::new(*anchor, *anchor),
        }
    }

    /// Move every point of the shape
    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rect { min, max } => {
                *min += delta;
                *max += delta;
            }
            Shape::Circle { center, .. } => *center += delta,
            Shape::Polygon(points) => points.iter_mut().for_each(|p| *p += delta),
            Shape::Text { anchor, .. } => *anchor += delta,
        }
    }
}

/// Fill and optional outline color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Rgba,
    pub outline: Option<Rgba>,
}

impl Style {
    pub const fn fill(fill: Rgba) -> Self {
        Self {
            fill,
            outline: None,
        }
    }

    pub const fn outlined(fill: Rgba, outline: Rgba) -> Self {
        Self {
            fill,
            outline: Some(outline),
        }
    }
}

/// A retained-mode drawing surface.
///
/// Operations on handles the surface does not know are no-ops.
pub trait Surface {
    /// Logical size of the drawing area
    fn size(&self) -> Vec2;

    fn draw(&mut self, shape: Shape, style: Style) -> ShapeId;

    fn translate(&mut self, id: ShapeId, delta: Vec2);

    fn set_fill(&mut self, id: ShapeId, fill: Rgba);

    /// Replace the string of a text shape
    fn set_text(&mut self, id: ShapeId, text: &str);

    fn delete(&mut self, id: ShapeId);

    /// Current bounding box of a drawn shape
    fn bounds(&self, id: ShapeId) -> Option<Aabb>;
}

/// Convert 0xRRGGBB to an opaque color
pub const fn hex(rgb: u32) -> Rgba {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::{Rgba, hex};

    pub const BACKGROUND: Rgba = hex(0xC9E6F0);
    pub const PADDLE: Rgba = hex(0xF96E2A);
    pub const BALL: Rgba = hex(0xFFFFFF);
    pub const BALL_LOST: Rgba = hex(0xFF0000);
    pub const TEXT: Rgba = hex(0x000000);
    pub const SPIKE: Rgba = hex(0x000000);
    pub const PARTICLE: Rgba = hex(0xFFFF00);
    pub const PARTICLE_OUTLINE: Rgba = hex(0xFFA500);

    /// Brick colors indexed by remaining hits - 1
    pub const BRICK_TIERS: [Rgba; 4] = [
        hex(0xF95454), // 1 hit
        hex(0x0D92F4), // 2 hits
        hex(0x00FF9C), // 3 hits
        hex(0x117554), // 4 hits
    ];
}
