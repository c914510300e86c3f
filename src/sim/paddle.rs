//! The player's paddle

use glam::Vec2;

use super::ball::Ball;
use super::entity::Entity;
use crate::consts::*;
use crate::surface::{Shape, Style, Surface, colors};

/// Horizontal paddle near the bottom of the surface
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    entity: Entity,
    width: f32,
    /// A ball rests on the paddle and follows it until launch
    carrying: bool,
}

impl Paddle {
    pub fn spawn(surface: &mut dyn Surface, center: Vec2) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        Self {
            entity: Entity::spawn(surface, Shape::rect_centered(center, size), Style::fill(colors::PADDLE)),
            width: size.x,
            carrying: false,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    /// Set or clear the carried ball
    pub fn set_carrying(&mut self, carrying: bool) {
        self.carrying = carrying;
    }

    /// Shift horizontally by `offset` if both edges stay on the surface.
    ///
    /// Out-of-range moves are rejected whole. A carried ball moves with the
    /// paddle. Returns whether the move happened.
    pub fn move_by(&mut self, surface: &mut dyn Surface, ball: &mut Ball, offset: f32) -> bool {
        let bounds = self.entity.bounds();
        let width = surface.size().x;
        if bounds.min.x + offset < 0.0 || bounds.max.x + offset > width {
            return false;
        }

        let delta = Vec2::new(offset, 0.0);
        self.entity.move_by(surface, delta);
        if self.carrying {
            ball.move_by(surface, delta);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Scene;
    use proptest::prelude::*;

    fn setup() -> (Scene, Paddle, Ball) {
        let mut scene = Scene::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
        let paddle = Paddle::spawn(&mut scene, Vec2::new(SURFACE_WIDTH / 2.0, PADDLE_Y));
        let ball = Ball::spawn(&mut scene, Vec2::new(SURFACE_WIDTH / 2.0, BALL_SPAWN_Y));
        (scene, paddle, ball)
    }

    #[test]
    fn test_carried_ball_follows() {
        let (mut scene, mut paddle, mut ball) = setup();
        paddle.set_carrying(true);

        assert!(paddle.move_by(&mut scene, &mut ball, -10.0));
        assert_eq!(paddle.center().x, 295.0);
        assert_eq!(ball.center().x, 295.0);
        assert_eq!(scene.bounds(ball.entity().shape()), Some(ball.entity().bounds()));
    }

    #[test]
    fn test_released_ball_stays() {
        let (mut scene, mut paddle, mut ball) = setup();
        paddle.set_carrying(false);

        assert!(paddle.move_by(&mut scene, &mut ball, 10.0));
        assert_eq!(paddle.center().x, 315.0);
        assert_eq!(ball.center().x, 305.0);
    }

    #[test]
    fn test_edges_may_touch_walls() {
        let (mut scene, mut paddle, mut ball) = setup();
        // Left edge at 265
        assert!(paddle.move_by(&mut scene, &mut ball, -265.0));
        assert_eq!(paddle.entity().bounds().min.x, 0.0);
        assert!(!paddle.move_by(&mut scene, &mut ball, -1.0));
        assert!(paddle.move_by(&mut scene, &mut ball, 530.0));
        assert_eq!(paddle.entity().bounds().max.x, SURFACE_WIDTH);
    }

    proptest! {
        #[test]
        fn prop_move_is_all_or_nothing(start in -265.0f32..265.0, offset in -700.0f32..700.0) {
            let (mut scene, mut paddle, mut ball) = setup();
            paddle.move_by(&mut scene, &mut ball, start);
            let before = paddle.center().x;

            let moved = paddle.move_by(&mut scene, &mut ball, offset);

            let after = paddle.center().x;
            if moved {
                prop_assert!((after - (before + offset)).abs() < 1e-3);
            } else {
                prop_assert_eq!(after, before);
            }
            let bounds = paddle.entity().bounds();
            prop_assert!(bounds.min.x >= 0.0);
            prop_assert!(bounds.max.x <= SURFACE_WIDTH);
        }
    }
}
