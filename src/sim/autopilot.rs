//! Idle/demo mode: a player that never looks away from the ball

use super::session::{GamePhase, GameSession, InputEvent};

/// Largest horizontal lead the paddle takes on the ball (surface pixels)
const MAX_LEAD: f32 = 28.0;

/// Pick the next input for the demo player, if any.
///
/// Serves immediately, then keeps the paddle under the ball with a slowly
/// varying lead so returns come off at an angle.
pub fn steer(session: &GameSession) -> Option<InputEvent> {
    match session.phase() {
        GamePhase::AwaitingLaunch => Some(InputEvent::Launch),
        GamePhase::Playing => {
            // Oscillating offset based on time to create variety
            let t = session.now() as f32 * 0.001;
            let lead = (t * 0.9).sin() * 0.7 + (t * 2.3).sin() * 0.3;

            let half = session.paddle().width() / 2.0;
            let width = session.size().x;
            let x = (session.ball().center().x + lead * MAX_LEAD).clamp(half, width - half);
            Some(InputEvent::PointerMoved { x })
        }
        GamePhase::LifeLostPause | GamePhase::Won | GamePhase::Lost => None,
    }
}
