//! Game session: owns every entity and runs the state machine
//!
//! The session is driven from outside by two calls on one thread:
//! [`GameSession::handle_input`] for key/pointer events and
//! [`GameSession::advance`] for elapsed time. Physics ticks are a chain of
//! one-shot scheduled tasks, so a tick only gets scheduled after the previous
//! one has finished.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, Collider};
use super::brick::{Brick, BrickHit};
use super::effects::Effects;
use super::entity::EntityId;
use super::paddle::Paddle;
use super::schedule::Scheduler;
use crate::consts::*;
use crate::error::GameError;
use crate::settings::Settings;
use crate::surface::{Shape, ShapeId, Style, Surface, colors};

const PROMPT_TEXT: &str = "Press Space to start";
const WIN_TEXT: &str = "You win! You the Breaker of Bricks.";
const LOSE_TEXT: &str = "You Lose! Game Over!";

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rests on the paddle, waiting for launch input
    AwaitingLaunch,
    /// Ball in flight, ticks running
    Playing,
    /// Ball fell out; the next serve is scheduled
    LifeLostPause,
    /// Every brick destroyed
    Won,
    /// Out of lives
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Player input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space
    Launch,
    /// Pointer moved to this surface x coordinate
    PointerMoved { x: f32 },
}

/// Something the host may want to react to (logging, sound, tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    BrickDamaged { remaining: u8 },
    BrickDestroyed,
    LifeLost { lives_left: i32 },
    Respawned,
    Won { score: u32 },
    Lost { score: u32 },
}

/// Deferred work on the session clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Task {
    Tick,
    Respawn,
}

/// Text shapes owned by the session
#[derive(Debug, Clone)]
struct Hud {
    score: ShapeId,
    lives: Option<ShapeId>,
    status: Option<ShapeId>,
}

/// One game from first serve to win or loss
#[derive(Debug)]
pub struct GameSession {
    settings: Settings,
    /// Surface size at construction
    size: Vec2,
    phase: GamePhase,
    /// -1 means the game is lost
    lives: i32,
    score: u32,
    paddle: Paddle,
    ball: Ball,
    /// Live bricks (sorted by id for deterministic iteration)
    bricks: BTreeMap<EntityId, Brick>,
    effects: Effects,
    scheduler: Scheduler<Task>,
    hud: Hud,
    events: Vec<GameEvent>,
    /// Physics ticks run so far
    ticks: u64,
}

impl GameSession {
    /// Lay out the board on `surface` and wait for the first launch
    pub fn new(surface: &mut dyn Surface, settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let size = surface.size();

        let paddle = Paddle::spawn(surface, Vec2::new(size.x / 2.0, PADDLE_Y));

        let mut bricks = BTreeMap::new();
        let mut next_id = 1;
        let columns = (0..)
            .map(|i| BRICK_MARGIN + i as f32 * BRICK_WIDTH)
            .take_while(|x| *x < size.x - BRICK_MARGIN);
        for x in columns {
            for (y, hits) in BRICK_ROWS {
                let brick = Brick::spawn(surface, Vec2::new(x + BRICK_WIDTH / 2.0, y), hits)?;
                bricks.insert(EntityId(next_id), brick);
                next_id += 1;
            }
        }

        let score = surface.draw(
            Shape::text(Vec2::new(size.x - 50.0, 20.0), "Score: 0", HUD_TEXT_SIZE),
            Style::fill(colors::TEXT),
        );

        let ball = Ball::spawn(surface, Vec2::new(paddle.center().x, BALL_SPAWN_Y));

        let effects = Effects::new(
            settings.seed,
            settings.burst_size(),
            settings.particle_lifetime_ms,
        );

        let mut session = Self {
            phase: GamePhase::AwaitingLaunch,
            lives: settings.starting_lives,
            score: 0,
            paddle,
            ball,
            bricks,
            effects,
            scheduler: Scheduler::new(),
            hud: Hud {
                score,
                lives: None,
                status: None,
            },
            events: Vec::new(),
            ticks: 0,
            settings,
            size,
        };
        session.serve(surface);
        draw_spikes(surface);

        log::info!(
            "Session ready: {} bricks, {} lives",
            session.bricks.len(),
            session.lives
        );
        Ok(session)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> impl Iterator<Item = (EntityId, &Brick)> {
        self.bricks.iter().map(|(id, brick)| (*id, brick))
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Playfield size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Session clock (ms since construction)
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of scheduled tasks (0 once the game is over)
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Take every event queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one input event
    pub fn handle_input(&mut self, surface: &mut dyn Surface, input: InputEvent) {
        match input {
            InputEvent::Left => self.move_paddle(surface, -self.settings.paddle_step),
            InputEvent::Right => self.move_paddle(surface, self.settings.paddle_step),
            InputEvent::PointerMoved { x } => {
                let half = self.paddle.width() / 2.0;
                if x >= half && x <= self.size.x - half {
                    let offset = x - self.paddle.center().x;
                    self.move_paddle(surface, offset);
                }
            }
            InputEvent::Launch => {
                if self.phase == GamePhase::AwaitingLaunch {
                    self.launch(surface);
                }
            }
        }
    }

    /// Run every task that falls due within the next `elapsed_ms`
    pub fn advance(&mut self, surface: &mut dyn Surface, elapsed_ms: u64) {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((due, task)) = self.scheduler.pop_due(target) {
            self.effects.prune(surface, due);
            match task {
                Task::Tick => self.tick(surface),
                Task::Respawn => self.respawn(surface),
            }
        }
        self.scheduler.advance_to(target);
        self.effects.prune(surface, target);
    }

    fn move_paddle(&mut self, surface: &mut dyn Surface, offset: f32) {
        self.paddle.move_by(surface, &mut self.ball, offset);
    }

    fn launch(&mut self, surface: &mut dyn Surface) {
        self.clear_status(surface);
        self.paddle.set_carrying(false);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Launched);
        log::info!("Ball launched ({} lives left)", self.lives);
        self.tick(surface);
    }

    /// One physics step: collide, check for game end, then move
    fn tick(&mut self, surface: &mut dyn Surface) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.ticks += 1;

        self.check_collisions(surface);

        if self.bricks.is_empty() {
            self.ball.freeze();
            self.show_status(surface, WIN_TEXT);
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::Won { score: self.score });
            log::info!("All bricks destroyed, final score {}", self.score);
        } else if self.ball.entity().bounds().max.y >= self.size.y {
            self.ball.freeze();
            self.ball.recolor(surface, colors::BALL_LOST);
            self.lives -= 1;
            self.events.push(GameEvent::LifeLost {
                lives_left: self.lives,
            });

            if self.lives < 0 {
                self.show_status(surface, LOSE_TEXT);
                self.phase = GamePhase::Lost;
                self.events.push(GameEvent::Lost { score: self.score });
                log::info!("Out of lives, final score {}", self.score);
            } else {
                self.phase = GamePhase::LifeLostPause;
                self.scheduler
                    .schedule(self.settings.respawn_delay_ms, Task::Respawn);
                log::info!("Life lost, {} left", self.lives);
            }
        } else {
            self.ball.update(surface);
            self.scheduler
                .schedule(self.settings.tick_interval_ms, Task::Tick);
        }
    }

    /// Gather everything overlapping the ball and let the ball resolve it
    fn check_collisions(&mut self, surface: &mut dyn Surface) {
        let ball_box = self.ball.entity().bounds();

        let mut candidates: Vec<Collider<'_>> = Vec::new();
        if self.paddle.entity().bounds().overlaps(&ball_box) {
            candidates.push(Collider::Paddle(&self.paddle));
        }
        candidates.extend(
            self.bricks
                .values_mut()
                .filter(|brick| brick.entity().bounds().overlaps(&ball_box))
                .map(Collider::Brick),
        );
        if candidates.is_empty() {
            return;
        }

        let collision = self
            .ball
            .collide(&mut candidates, surface, &mut self.effects);
        drop(candidates);

        for hit in &collision.brick_hits {
            self.events.push(match *hit {
                BrickHit::Damaged { remaining } => GameEvent::BrickDamaged { remaining },
                BrickHit::Destroyed => GameEvent::BrickDestroyed,
            });
        }

        let before = self.bricks.len();
        self.bricks.retain(|_, brick| !brick.is_destroyed());
        if self.bricks.len() < before {
            log::debug!(
                "{} brick(s) destroyed, {} left",
                before - self.bricks.len(),
                self.bricks.len()
            );
        }

        let points = collision.points();
        if points > 0 {
            self.add_score(surface, points);
        }
    }

    fn add_score(&mut self, surface: &mut dyn Surface, points: u32) {
        self.score += points;
        surface.set_text(self.hud.score, &format!("Score: {}", self.score));
    }

    /// Rebuild the ball on the paddle after a lost life
    fn respawn(&mut self, surface: &mut dyn Surface) {
        if self.phase != GamePhase::LifeLostPause {
            return;
        }
        self.ball.entity().delete(surface);
        self.ball = Ball::spawn(surface, Vec2::new(self.paddle.center().x, BALL_SPAWN_Y));
        self.events.push(GameEvent::Respawned);
        log::info!("New ball served");
        self.serve(surface);
    }

    /// Put the session into the waiting-for-launch state
    fn serve(&mut self, surface: &mut dyn Surface) {
        self.paddle.set_carrying(true);
        self.update_lives_text(surface);
        self.show_status(surface, PROMPT_TEXT);
        self.phase = GamePhase::AwaitingLaunch;
    }

    fn update_lives_text(&mut self, surface: &mut dyn Surface) {
        let text = format!("Lives: {}", self.lives);
        match self.hud.lives {
            Some(id) => surface.set_text(id, &text),
            None => {
                let id = surface.draw(
                    Shape::text(Vec2::new(50.0, 20.0), text, HUD_TEXT_SIZE),
                    Style::fill(colors::TEXT),
                );
                self.hud.lives = Some(id);
            }
        }
    }

    fn show_status(&mut self, surface: &mut dyn Surface, text: &str) {
        self.clear_status(surface);
        let id = surface.draw(
            Shape::text(Vec2::new(300.0, 200.0), text, STATUS_TEXT_SIZE),
            Style::fill(colors::TEXT),
        );
        self.hud.status = Some(id);
    }

    fn clear_status(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.hud.status.take() {
            surface.delete(id);
        }
    }
}

/// Row of decorative spikes along the bottom edge
fn draw_spikes(surface: &mut dyn Surface) {
    let size = surface.size();
    for x in (0..size.x as usize).step_by(SPIKE_SPACING) {
        let x = x as f32;
        let base_y = size.y + SPIKE_HEIGHT - 10.0;
        surface.draw(
            Shape::Polygon(vec![
                Vec2::new(x, size.y - 12.0),
                Vec2::new(x - SPIKE_HALF_WIDTH, base_y),
                Vec2::new(x + SPIKE_HALF_WIDTH, base_y),
            ]),
            Style::outlined(colors::SPIKE, colors::SPIKE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Scene;

    fn setup_with(settings: Settings) -> (Scene, GameSession) {
        let mut scene = Scene::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
        let session = GameSession::new(&mut scene, settings).unwrap();
        (scene, session)
    }

    fn setup() -> (Scene, GameSession) {
        setup_with(Settings::default())
    }

    /// Teleport the ball so its center sits at `center`
    fn place_ball(scene: &mut Scene, session: &mut GameSession, center: Vec2) {
        let delta = center - session.ball.center();
        session.ball.move_by(scene, delta);
    }

    /// Keep only the brick nearest `near`
    fn keep_one_brick(scene: &mut Scene, session: &mut GameSession, near: Vec2) {
        let keep = session
            .bricks
            .iter()
            .min_by(|(_, a), (_, b)| {
                let da = a.entity().center().distance(near);
                let db = b.entity().center().distance(near);
                da.total_cmp(&db)
            })
            .map(|(id, _)| *id)
            .unwrap();
        session.bricks.retain(|id, brick| {
            if *id != keep {
                brick.entity().delete(scene);
            }
            *id == keep
        });
    }

    #[test]
    fn test_initial_layout() {
        let (scene, session) = setup();
        assert_eq!(session.phase(), GamePhase::AwaitingLaunch);
        assert_eq!(session.brick_count(), 32);
        assert_eq!(session.lives(), 3);
        assert_eq!(session.score(), 0);
        assert!(session.paddle().is_carrying());
        assert_eq!(session.ball().center(), Vec2::new(305.0, 310.0));
        assert!(scene.has_text("Press Space to start"));
        assert!(scene.has_text("Lives: 3"));
        assert!(scene.has_text("Score: 0"));
        assert_eq!(session.pending_tasks(), 0);

        let top_row = session
            .bricks()
            .filter(|(_, b)| b.entity().center().y == 50.0)
            .count();
        assert_eq!(top_row, 8);
        assert!(session.bricks().all(|(_, b)| {
            let expected = BRICK_ROWS
                .iter()
                .find(|(y, _)| *y == b.entity().center().y)
                .map(|(_, hits)| *hits);
            expected == Some(b.hits())
        }));

        let spikes = scene
            .items()
            .filter(|(_, item)| matches!(item.shape, Shape::Polygon(_)))
            .count();
        assert_eq!(spikes, 51);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut scene = Scene::new(Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
        let settings = Settings {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(GameSession::new(&mut scene, settings).is_err());
    }

    #[test]
    fn test_arrows_move_paddle_and_carried_ball() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Left);
        session.handle_input(&mut scene, InputEvent::Left);
        session.handle_input(&mut scene, InputEvent::Right);
        assert_eq!(session.paddle().center().x, 295.0);
        assert_eq!(session.ball().center().x, 295.0);
    }

    #[test]
    fn test_pointer_tracks_within_margins() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::PointerMoved { x: 100.0 });
        assert_eq!(session.paddle().center().x, 100.0);
        assert_eq!(session.ball().center().x, 100.0);

        session.handle_input(&mut scene, InputEvent::PointerMoved { x: 39.0 });
        assert_eq!(session.paddle().center().x, 100.0);

        session.handle_input(&mut scene, InputEvent::PointerMoved { x: 570.0 });
        assert_eq!(session.paddle().entity().bounds().max.x, SURFACE_WIDTH);
    }

    #[test]
    fn test_launch_starts_tick_chain() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);

        assert_eq!(session.phase(), GamePhase::Playing);
        assert!(!session.paddle().is_carrying());
        assert!(!scene.has_text("Press Space to start"));
        // First tick runs right away
        assert_eq!(session.ticks(), 1);
        assert_eq!(session.ball().center(), Vec2::new(310.0, 305.0));
        assert_eq!(session.pending_tasks(), 1);
        assert_eq!(session.drain_events(), vec![GameEvent::Launched]);

        session.advance(&mut scene, 49);
        assert_eq!(session.ticks(), 1);
        session.advance(&mut scene, 1);
        assert_eq!(session.ticks(), 2);
        assert_eq!(session.pending_tasks(), 1);

        // Paddle no longer drags the ball
        session.handle_input(&mut scene, InputEvent::Left);
        assert_eq!(session.ball().center().x, 315.0);
    }

    #[test]
    fn test_launch_ignored_while_playing() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);
        session.handle_input(&mut scene, InputEvent::Launch);
        assert_eq!(session.ticks(), 1);
        assert_eq!(session.pending_tasks(), 1);
    }

    #[test]
    fn test_multi_brick_hit_scores_twice_flips_once() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);

        // Straddle the two leftmost bricks of the bottom (1-hit) row
        place_ball(&mut scene, &mut session, Vec2::new(80.0, 125.0));
        session.advance(&mut scene, 50);

        assert_eq!(session.score(), 20);
        assert_eq!(session.brick_count(), 30);
        assert_eq!(session.ball().direction.y, 1.0);
        assert!((session.ball().speed - 5.1).abs() < 1e-5);
        assert!(scene.has_text("Score: 20"));
        let events = session.drain_events();
        let destroyed = events
            .iter()
            .filter(|e| **e == GameEvent::BrickDestroyed)
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_particles_cleared_after_lifetime() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);
        place_ball(&mut scene, &mut session, Vec2::new(80.0, 125.0));

        session.advance(&mut scene, 50);
        assert_eq!(session.effects().particles().len(), 2 * PARTICLE_COUNT);

        session.advance(&mut scene, 99);
        assert_eq!(session.effects().particles().len(), 2 * PARTICLE_COUNT);
        session.advance(&mut scene, 1);
        assert!(session.effects().particles().is_empty());
    }

    #[test]
    fn test_damaged_brick_recolors() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);
        keep_one_brick(&mut scene, &mut session, Vec2::new(42.5, 50.0));
        let (_, brick) = session.bricks().next().unwrap();
        let shape = brick.entity().shape();

        place_ball(&mut scene, &mut session, Vec2::new(42.5, 65.0));
        session.advance(&mut scene, 50);

        let (_, brick) = session.bricks().next().unwrap();
        assert_eq!(brick.hits(), 3);
        assert_eq!(scene.item(shape).unwrap().style.fill, colors::BRICK_TIERS[2]);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_paddle_bounce_in_session() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);
        session.ball.direction = Vec2::new(1.0, 1.0);
        place_ball(&mut scene, &mut session, Vec2::new(305.0, 312.0));

        session.advance(&mut scene, 50);

        assert_eq!(session.ball().direction, Vec2::new(0.0, -1.0));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_last_brick_wins() {
        let (mut scene, mut session) = setup();
        session.handle_input(&mut scene, InputEvent::Launch);
        keep_one_brick(&mut scene, &mut session, Vec2::new(567.5, 110.0));

        place_ball(&mut scene, &mut session, Vec2::new(567.5, 125.0));
        session.advance(&mut scene, 50);

        assert_eq!(session.phase(), GamePhase::Won);
        assert_eq!(session.brick_count(), 0);
        assert_eq!(session.score(), 10);
        assert_eq!(session.ball().speed, 0.0);
        assert_eq!(session.pending_tasks(), 0);
        assert!(scene.has_text("You win! You the Breaker of Bricks."));

        let ticks = session.ticks();
        session.advance(&mut scene, 10_000);
        assert_eq!(session.ticks(), ticks);
        assert_eq!(session.phase(), GamePhase::Won);
    }

    #[test]
    fn test_life_lost_then_respawn() {
        let (mut scene, mut session) = setup_with(Settings {
            starting_lives: 1,
            ..Default::default()
        });
        session.handle_input(&mut scene, InputEvent::Launch);
        let old_ball = session.ball().entity().shape();
        place_ball(&mut scene, &mut session, Vec2::new(200.0, 395.0));

        session.advance(&mut scene, 50);

        assert_eq!(session.lives(), 0);
        assert_eq!(session.phase(), GamePhase::LifeLostPause);
        assert_eq!(scene.item(old_ball).unwrap().style.fill, colors::BALL_LOST);
        assert_eq!(session.pending_tasks(), 1);
        // Display refreshes with the new ball
        assert!(scene.has_text("Lives: 1"));

        session.advance(&mut scene, 999);
        assert_eq!(session.phase(), GamePhase::LifeLostPause);
        session.advance(&mut scene, 1);

        assert_eq!(session.phase(), GamePhase::AwaitingLaunch);
        assert!(scene.item(old_ball).is_none());
        assert!(session.paddle().is_carrying());
        assert_eq!(session.ball().speed, BALL_START_SPEED);
        assert_eq!(session.ball().center(), Vec2::new(305.0, 310.0));
        assert!(scene.has_text("Lives: 0"));
        assert!(scene.has_text("Press Space to start"));
        assert_eq!(session.pending_tasks(), 0);

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::LifeLost { lives_left: 0 }));
        assert_eq!(events.last(), Some(&GameEvent::Respawned));
    }

    #[test]
    fn test_unbounded_respawn_delay_waits_forever() {
        let settings =
            Settings::from_json(r#"{ "respawn_delay_ms": 18446744073709551615, "starting_lives": 1 }"#)
                .unwrap();
        let (mut scene, mut session) = setup_with(settings);
        session.handle_input(&mut scene, InputEvent::Launch);
        place_ball(&mut scene, &mut session, Vec2::new(200.0, 395.0));

        session.advance(&mut scene, 50);
        assert_eq!(session.phase(), GamePhase::LifeLostPause);
        assert_eq!(session.pending_tasks(), 1);

        session.advance(&mut scene, u64::MAX / 2);
        assert_eq!(session.now(), 50 + u64::MAX / 2);
        assert_eq!(session.phase(), GamePhase::LifeLostPause);
        assert_eq!(session.pending_tasks(), 1);
    }

    #[test]
    fn test_last_life_lost_ends_game() {
        let (mut scene, mut session) = setup_with(Settings {
            starting_lives: 0,
            ..Default::default()
        });
        session.handle_input(&mut scene, InputEvent::Launch);
        place_ball(&mut scene, &mut session, Vec2::new(200.0, 395.0));

        session.advance(&mut scene, 50);

        assert_eq!(session.lives(), -1);
        assert_eq!(session.phase(), GamePhase::Lost);
        assert_eq!(session.pending_tasks(), 0);
        assert!(scene.has_text("You Lose! Game Over!"));
        assert!(scene.has_text("Lives: 0"));

        session.handle_input(&mut scene, InputEvent::Launch);
        assert_eq!(session.phase(), GamePhase::Lost);
    }
}
