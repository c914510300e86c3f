//! Multi-hit bricks

use glam::Vec2;

use super::effects::Effects;
use super::entity::Entity;
use crate::consts::*;
use crate::error::GameError;
use crate::surface::{Rgba, Shape, Style, Surface, colors};

/// What a single hit did to a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickHit {
    /// Still standing with this many hits left
    Damaged { remaining: u8 },
    /// Exploded and removed from the surface
    Destroyed,
}

/// A brick that takes 1-4 hits
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    entity: Entity,
    hits: u8,
}

impl Brick {
    /// Tier color for a hit count, `None` outside 1..=4
    pub fn tier_color(hits: u8) -> Option<Rgba> {
        match hits {
            1..=BRICK_MAX_HITS => Some(colors::BRICK_TIERS[hits as usize - 1]),
            _ => None,
        }
    }

    /// Build a brick centered on `center`
    pub fn spawn(surface: &mut dyn Surface, center: Vec2, hits: u8) -> Result<Self, GameError> {
        let color = Self::tier_color(hits).ok_or(GameError::InvalidHits { hits })?;
        let entity = Entity::spawn(
            surface,
            Shape::rect_centered(center, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)),
            Style::fill(color),
        );
        Ok(Self { entity, hits })
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    pub fn is_destroyed(&self) -> bool {
        self.hits == 0
    }

    /// Take one hit. At zero the brick bursts into particles and its shape is
    /// deleted right away; the owner must drop it.
    pub fn hit(&mut self, surface: &mut dyn Surface, effects: &mut Effects) -> BrickHit {
        if self.is_destroyed() {
            return BrickHit::Destroyed;
        }

        self.hits -= 1;
        match Self::tier_color(self.hits) {
            Some(color) => {
                self.entity.recolor(surface, color);
                BrickHit::Damaged {
                    remaining: self.hits,
                }
            }
            None => {
                effects.burst(surface, self.entity.center());
                self.entity.delete(surface);
                BrickHit::Destroyed
            }
        }
    }
}
