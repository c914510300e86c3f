//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed-interval ticks driven by an explicit scheduler
//! - Seeded RNG only (particle bursts)
//! - Stable iteration order (bricks keyed by entity ID)
//! - Draw commands go out through `Surface`; geometry is never read back

pub mod autopilot;
pub mod ball;
pub mod brick;
pub mod effects;
pub mod entity;
pub mod paddle;
pub mod schedule;
pub mod session;

pub use ball::{Ball, Collider, Collision};
pub use brick::{Brick, BrickHit};
pub use effects::{Effects, Particle};
pub use entity::{Entity, EntityId};
pub use paddle::Paddle;
pub use schedule::Scheduler;
pub use session::{GameEvent, GamePhase, GameSession, InputEvent};
