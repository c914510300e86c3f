//! The ball: movement, wall bounces and collision response

use glam::Vec2;

use super::brick::{Brick, BrickHit};
use super::effects::Effects;
use super::entity::Entity;
use super::paddle::Paddle;
use crate::consts::*;
use crate::surface::{Rgba, Shape, Style, Surface, colors};

/// Something the ball can overlap in a tick
#[derive(Debug)]
pub enum Collider<'a> {
    Brick(&'a mut Brick),
    Paddle(&'a Paddle),
}

/// Outcome of resolving one candidate batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collision {
    /// One entry per brick hit this tick
    pub brick_hits: Vec<BrickHit>,
    /// The ball bounced off the paddle
    pub paddle: bool,
}

impl Collision {
    /// Score earned by this batch
    pub fn points(&self) -> u32 {
        self.brick_hits.len() as u32 * BRICK_POINTS
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    entity: Entity,
    /// Per-axis multipliers against `speed`. Not normalized: after an
    /// off-center paddle hit `x` can exceed 1 in magnitude.
    pub direction: Vec2,
    pub speed: f32,
}

impl Ball {
    pub fn spawn(surface: &mut dyn Surface, center: Vec2) -> Self {
        Self {
            entity: Entity::spawn(
                surface,
                Shape::Circle {
                    center,
                    radius: BALL_RADIUS,
                },
                Style::fill(colors::BALL),
            ),
            direction: Vec2::new(1.0, -1.0),
            speed: BALL_START_SPEED,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn move_by(&mut self, surface: &mut dyn Surface, delta: Vec2) {
        self.entity.move_by(surface, delta);
    }

    pub fn recolor(&self, surface: &mut dyn Surface, fill: Rgba) {
        self.entity.recolor(surface, fill);
    }

    /// Stop the ball where it is
    pub fn freeze(&mut self) {
        self.speed = 0.0;
    }

    /// Bounce off the side and top walls, then advance one step.
    ///
    /// The bottom edge is open; falling past it is the session's business.
    pub fn update(&mut self, surface: &mut dyn Surface) {
        let bounds = self.entity.bounds();
        let width = surface.size().x;
        if bounds.min.x <= 0.0 || bounds.max.x >= width {
            self.direction.x = -self.direction.x;
        }
        if bounds.min.y <= 0.0 {
            self.direction.y = -self.direction.y;
        }
        let step = self.direction * self.speed;
        self.move_by(surface, step);
    }

    /// Resolve every entity the ball overlaps this tick.
    ///
    /// Bricks win: each brick in the batch takes one hit, the ball turns
    /// vertically once and speeds up. The paddle only deflects the ball when
    /// it is the sole candidate.
    pub fn collide(
        &mut self,
        candidates: &mut [Collider<'_>],
        surface: &mut dyn Surface,
        effects: &mut Effects,
    ) -> Collision {
        let mut collision = Collision::default();

        for candidate in candidates.iter_mut() {
            if let Collider::Brick(brick) = candidate {
                collision.brick_hits.push(brick.hit(surface, effects));
            }
        }

        if !collision.brick_hits.is_empty() {
            self.direction.y = -self.direction.y;
            self.speed += BALL_SPEED_STEP;
            return collision;
        }

        if let [Collider::Paddle(paddle)] = candidates {
            let offset = self.center().x - paddle.center().x;
            self.direction.x = offset / (paddle.width() / 2.0);
            self.direction.y = -self.direction.y;
            collision.paddle = true;
        }

        collision
    }
}
