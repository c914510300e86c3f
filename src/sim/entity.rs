//! Drawable game objects
//!
//! An [`Entity`] pairs the simulation's own bounding box with the handle of
//! the shape that shows it. Geometry is tracked here; the surface only
//! mirrors it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::surface::{Aabb, Rgba, Shape, ShapeId, Style, Surface};

/// Stable identifier for entities tracked by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// A shape on the surface plus its logical bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    shape: ShapeId,
    bounds: Aabb,
}

impl Entity {
    /// Draw `shape` and track it
    pub fn spawn(surface: &mut dyn Surface, shape: Shape, style: Style) -> Self {
        let bounds = shape.bounds();
        let shape = surface.draw(shape, style);
        Self { shape, bounds }
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn move_by(&mut self, surface: &mut dyn Surface, delta: Vec2) {
        self.bounds.translate(delta);
        surface.translate(self.shape, delta);
    }

    pub fn recolor(&self, surface: &mut dyn Surface, fill: Rgba) {
        surface.set_fill(self.shape, fill);
    }

    /// Remove the shape from the surface; the owner drops the entity
    pub fn delete(&self, surface: &mut dyn Surface) {
        surface.delete(self.shape);
    }
}
