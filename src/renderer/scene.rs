//! Retained display list
//!
//! [`Scene`] implements [`Surface`] by remembering every shape in draw order.
//! The host tessellates it once per frame; tests inspect it directly.

use std::collections::BTreeMap;

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::surface::{Aabb, Rgba, Shape, ShapeId, Style, Surface};

/// Circle tessellation quality
const CIRCLE_SEGMENTS: u32 = 24;

/// A drawn shape and its style
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub shape: Shape,
    pub style: Style,
}

/// A text item, for hosts that render text outside the triangle pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextItem<'a> {
    pub id: ShapeId,
    pub anchor: Vec2,
    pub text: &'a str,
    pub size: f32,
    pub color: Rgba,
}

/// Retained-mode surface
#[derive(Debug, Clone)]
pub struct Scene {
    size: Vec2,
    /// Sorted by id, which is also draw order
    items: BTreeMap<ShapeId, Item>,
    next_id: u32,
}

impl Scene {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn item(&self, id: ShapeId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = (ShapeId, &Item)> {
        self.items.iter().map(|(id, item)| (*id, item))
    }

    /// All text items in draw order
    pub fn texts(&self) -> impl Iterator<Item = TextItem<'_>> {
        self.items.iter().filter_map(|(id, item)| match &item.shape {
            Shape::Text { anchor, text, size } => Some(TextItem {
                id: *id,
                anchor: *anchor,
                text: text.as_str(),
                size: *size,
                color: item.style.fill,
            }),
            _ => None,
        })
    }

    /// Whether some text item currently reads exactly `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }

    /// Triangle list for every non-text shape, in draw order
    pub fn tessellate(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();

        for item in self.items.values() {
            let Style { fill, outline } = item.style;
            match &item.shape {
                Shape::Rect { min, max } => {
                    vertices.extend(shapes::rect(*min, *max, fill));
                    if let Some(color) = outline {
                        let corners = shapes::rect_corners(*min, *max);
                        vertices.extend(shapes::outline(&corners, shapes::OUTLINE_WIDTH, color));
                    }
                }
                Shape::Circle { center, radius } => {
                    vertices.extend(shapes::circle(*center, *radius, fill, CIRCLE_SEGMENTS));
                    if let Some(color) = outline {
                        let half = shapes::OUTLINE_WIDTH * 0.5;
                        vertices.extend(shapes::ring(
                            *center,
                            radius - half,
                            radius + half,
                            color,
                            CIRCLE_SEGMENTS,
                        ));
                    }
                }
                Shape::Polygon(points) => {
                    vertices.extend(shapes::polygon(points, fill));
                    if let Some(color) = outline {
                        vertices.extend(shapes::outline(points, shapes::OUTLINE_WIDTH, color));
                    }
                }
                Shape::Text { .. } => {}
            }
        }

        vertices
    }
}

impl Surface for Scene {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, shape: Shape, style: Style) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.items.insert(id, Item { shape, style });
        id
    }

    fn translate(&mut self, id: ShapeId, delta: Vec2) {
        if let Some(item) = self.items.get_mut(&id) {
            item.shape.translate(delta);
        }
    }

    fn set_fill(&mut self, id: ShapeId, fill: Rgba) {
        if let Some(item) = self.items.get_mut(&id) {
            item.style.fill = fill;
        }
    }

    fn set_text(&mut self, id: ShapeId, new_text: &str) {
        if let Some(Item {
            shape: Shape::Text { text, .. },
            ..
        }) = self.items.get_mut(&id)
        {
            new_text.clone_into(text);
        }
    }

    fn delete(&mut self, id: ShapeId) {
        self.items.remove(&id);
    }

    fn bounds(&self, id: ShapeId) -> Option<Aabb> {
        self.items.get(&id).map(|item| item.shape.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::colors;

    fn scene() -> Scene {
        Scene::new(Vec2::new(610.0, 400.0))
    }

    #[test]
    fn test_draw_assigns_increasing_ids() {
        let mut scene = scene();
        let a = scene.draw(
            Shape::rect_centered(Vec2::splat(50.0), Vec2::splat(10.0)),
            Style::fill(colors::PADDLE),
        );
        let b = scene.draw(Shape::text(Vec2::ZERO, "hi", 15.0), Style::fill(colors::TEXT));
        assert!(a < b);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_unknown_handles_are_ignored() {
        let mut scene = scene();
        scene.translate(ShapeId(99), Vec2::ONE);
        scene.set_fill(ShapeId(99), colors::BALL);
        scene.set_text(ShapeId(99), "nothing");
        scene.delete(ShapeId(99));
        assert!(scene.is_empty());
        assert!(scene.bounds(ShapeId(99)).is_none());
    }

    #[test]
    fn test_set_text_only_touches_text() {
        let mut scene = scene();
        let label = scene.draw(Shape::text(Vec2::new(50.0, 20.0), "Lives: 3", 15.0), Style::fill(colors::TEXT));
        let rect = scene.draw(
            Shape::rect_centered(Vec2::splat(50.0), Vec2::splat(10.0)),
            Style::fill(colors::PADDLE),
        );
        scene.set_text(label, "Lives: 2");
        scene.set_text(rect, "ignored");
        assert!(scene.has_text("Lives: 2"));
        assert!(!scene.has_text("Lives: 3"));
        assert!(matches!(scene.item(rect).unwrap().shape, Shape::Rect { .. }));
    }

    #[test]
    fn test_translate_updates_bounds() {
        let mut scene = scene();
        let id = scene.draw(
            Shape::Circle {
                center: Vec2::new(305.0, 310.0),
                radius: 10.0,
            },
            Style::fill(colors::BALL),
        );
        scene.translate(id, Vec2::new(5.0, -5.0));
        assert_eq!(scene.bounds(id).unwrap().center(), Vec2::new(310.0, 305.0));
    }

    #[test]
    fn test_tessellate_skips_text_and_adds_outlines() {
        let mut scene = scene();
        scene.draw(Shape::text(Vec2::ZERO, "Score: 0", 15.0), Style::fill(colors::TEXT));
        assert!(scene.tessellate().is_empty());

        scene.draw(
            Shape::rect_centered(Vec2::splat(50.0), Vec2::splat(10.0)),
            Style::fill(colors::PADDLE),
        );
        assert_eq!(scene.tessellate().len(), 6);

        scene.draw(
            Shape::rect_centered(Vec2::splat(80.0), Vec2::splat(10.0)),
            Style::outlined(colors::PARTICLE, colors::PARTICLE_OUTLINE),
        );
        assert_eq!(scene.tessellate().len(), 6 + 6 + 24);
    }
}
