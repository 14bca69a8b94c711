//! Per-frame simulation step
//!
//! One call to [`run_frame`] advances the game by exactly one frame. Speeds
//! are in pixels per frame, so there is no timestep parameter: the host
//! decides how often frames happen.

use rand::Rng;

use super::collision::{crosses_left_paddle, crosses_right_paddle, hits_wall, rebound_dy};
use super::input::InputEvent;
use super::state::{GameEvent, GameState, KeyState, Paddle, Phase, Side};
use crate::consts::BALL_SPEED_INCREMENT;

/// Apply queued input, then advance the simulation if the game is running.
///
/// Returns the phase the frame was run in. Paddles only move while
/// running; keys held during the Idle prompt are remembered but have no
/// effect until the round starts.
pub fn run_frame<R: Rng>(state: &mut GameState, input: &[InputEvent], rng: &mut R) -> Phase {
    for event in input {
        state.apply_input(event);
    }

    state.events.clear();
    let phase = state.phase();
    if phase == Phase::Running {
        update_ball(state, rng);
        update_paddles(state);
    }
    phase
}

/// Advance the ball by one step: wall bounce, goals, paddle hits, then
/// motion. The order matters, every check uses the pre-step position.
///
/// A goal ends the step with the ball seated at the serve point.
pub fn update_ball<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.events.clear();

    if hits_wall(&state.ball, state.height()) {
        state.ball.dir.y = -state.ball.dir.y;
        state.events.push(GameEvent::WallBounce);
        log::debug!("Wall bounce at y {}", state.ball.pos.y);
    }

    // Left goal line: point to the right player
    if state.ball.pos.x <= 0.0 {
        score_goal(state, Side::Right, rng);
        return;
    }

    // Right goal line: point to the left player
    if state.ball.pos.x >= state.width() {
        score_goal(state, Side::Left, rng);
        return;
    }

    if crosses_left_paddle(&state.ball, &state.p1) {
        let dy = rebound_dy(&state.ball, &state.p1);
        return_ball(state, Side::Left, dy);
    }

    if crosses_right_paddle(&state.ball, &state.p2) {
        let dy = rebound_dy(&state.ball, &state.p2);
        return_ball(state, Side::Right, dy);
    }

    let step = state.ball.step();
    state.ball.pos += step;
}

/// Flip horizontal direction, aim by hit position and speed the ball up.
/// Speed is never capped.
fn return_ball(state: &mut GameState, side: Side, dy: f32) {
    let ball = &mut state.ball;
    ball.dir.x = -ball.dir.x;
    ball.dir.y = dy;
    ball.speed += BALL_SPEED_INCREMENT;
    state.events.push(GameEvent::PaddleHit(side));
    log::debug!("Paddle hit ({:?}), ball speed {}", side, ball.speed);
}

/// Award the point, reset the round and go back to Idle. The ball is
/// served toward the side that conceded.
fn score_goal<R: Rng>(state: &mut GameState, scorer: Side, rng: &mut R) {
    state.events.push(GameEvent::Goal { scorer });
    if state.score.award(scorer) {
        state.events.push(GameEvent::MatchWon { winner: scorer });
        log::info!("{:?} player wins the match", scorer);
    } else {
        log::info!(
            "Goal for {:?}: {} : {}",
            scorer,
            state.score.p1,
            state.score.p2
        );
    }

    state.reset_round(scorer.opponent(), rng);
    state.running = false;
}

/// Move both paddles from held keys, keeping them inside the surface
pub fn update_paddles(state: &mut GameState) {
    let height = state.height();
    let GameState { p1, p2, keys, .. } = state;
    move_paddle(p1, keys, height);
    move_paddle(p2, keys, height);
}

/// Up wins over down when both are held
pub fn move_paddle(paddle: &mut Paddle, keys: &KeyState, height: f32) {
    if keys.is_held(&paddle.up) {
        paddle.pos.y -= paddle.speed;
        if paddle.pos.y < 0.0 {
            paddle.pos.y = 0.0;
        }
    } else if keys.is_held(&paddle.down) {
        paddle.pos.y += paddle.speed;
        if paddle.bottom() > height {
            paddle.pos.y = height - paddle.height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::KEY_ESCAPE;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state(rng: &mut Pcg32) -> GameState {
        let mut state = GameState::new(GameConfig::default(), rng);
        state.running = true;
        state
    }

    #[test]
    fn test_wall_bounce_flips_dy() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(512.0, 5.0);
        state.ball.size = 20.0;
        state.ball.dir = Vec2::new(1.0, -1.0);
        state.ball.speed = 10.0;

        update_ball(&mut state, &mut rng);
        assert_eq!(state.ball.dir.y, 1.0);
        assert_eq!(state.ball.pos, Vec2::new(522.0, 15.0));
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_left_goal_at_match_point_resets_everything() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = running_state(&mut rng);
        state.score.p2 = state.score.max_score - 1;
        state.score.p1 = 2;
        state.ball.pos = Vec2::new(-1.0, 100.0);
        state.ball.speed = 8.5;
        state.p1.pos.y = 0.0;

        update_ball(&mut state, &mut rng);
        assert_eq!(state.score.p2, 0);
        assert_eq!(state.score.p1, 0);
        assert_eq!(state.ball.pos, Vec2::new(512.0, 320.0));
        assert_eq!(state.ball.dir.x, -1.0);
        assert!(state.ball.dir.y >= -0.5 && state.ball.dir.y < 0.5);
        assert_eq!(state.ball.speed, 2.5);
        assert_eq!(state.p1.pos, Vec2::new(50.0, 240.0));
        assert!(!state.running);
        assert_eq!(
            state.events,
            vec![
                GameEvent::Goal { scorer: Side::Right },
                GameEvent::MatchWon { winner: Side::Right }
            ]
        );
    }

    #[test]
    fn test_left_goal_increments_opponent() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(0.0, 320.0);

        update_ball(&mut state, &mut rng);
        assert_eq!((state.score.p1, state.score.p2), (0, 1));
        assert_eq!(state.ball.dir.x, -1.0);
        assert!(!state.running);
    }

    #[test]
    fn test_right_goal_increments_left_player() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(1024.0, 320.0);

        update_ball(&mut state, &mut rng);
        assert_eq!((state.score.p1, state.score.p2), (1, 0));
        assert_eq!(state.ball.pos, Vec2::new(512.0, 320.0));
        assert_eq!(state.ball.dir.x, 1.0);
        assert!(!state.running);
    }

    #[test]
    fn test_left_paddle_hit_speeds_up_ball() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(80.0, 320.0);
        state.ball.dir = Vec2::new(-1.0, 0.0);
        let speed = state.ball.speed;

        update_ball(&mut state, &mut rng);
        assert_eq!(state.ball.speed, speed + 1.0);
        assert_eq!(state.ball.dir.x, 1.0);
        assert_eq!(state.ball.dir.y, -0.5 / 160.0);
        assert_eq!(state.ball.pos.x, 80.0 + speed + 1.0);
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Left)]);
    }

    #[test]
    fn test_right_paddle_hit_above_center_sends_ball_up() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(944.0, 260.0);
        state.ball.dir = Vec2::new(1.0, 0.0);

        update_ball(&mut state, &mut rng);
        assert_eq!(state.ball.dir.x, -1.0);
        assert!(state.ball.dir.y < 0.0);
        assert_eq!(state.ball.speed, 3.5);
    }

    #[test]
    fn test_events_only_cover_latest_step() {
        let mut rng = Pcg32::seed_from_u64(16);
        let mut state = running_state(&mut rng);
        state.score.p1 = state.score.max_score - 1;
        state.ball.pos.x = 1025.0;
        update_ball(&mut state, &mut rng);
        assert!(state.events.contains(&GameEvent::MatchWon { winner: Side::Left }));

        state.running = true;
        state.ball.pos.x = 1025.0;
        update_ball(&mut state, &mut rng);
        assert_eq!(state.events, vec![GameEvent::Goal { scorer: Side::Left }]);
        assert_eq!((state.score.p1, state.score.p2), (1, 0));

        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.dir = Vec2::new(1.0, 0.0);
        update_ball(&mut state, &mut rng);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_free_flight_integrates() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = running_state(&mut rng);
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.dir = Vec2::new(1.0, 0.25);
        state.ball.speed = 4.0;

        update_ball(&mut state, &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(404.0, 301.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_speed_grows_without_cap() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut state = running_state(&mut rng);
        for _ in 0..50 {
            // Left edge half a step in front of the paddle face
            state.ball.pos = Vec2::new(78.0 + state.ball.speed / 2.0, 320.0);
            state.ball.dir = Vec2::new(-1.0, 0.0);
            update_ball(&mut state, &mut rng);
        }
        assert_eq!(state.ball.speed, 2.5 + 50.0);
    }

    #[test]
    fn test_paddle_up_clamps_at_top() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = running_state(&mut rng);
        state.p1.pos.y = 4.0;
        state.keys.press("KeyW");
        update_paddles(&mut state);
        assert_eq!(state.p1.pos.y, 0.0);
        assert_eq!(state.p2.pos.y, 240.0);
    }

    #[test]
    fn test_paddle_down_clamps_at_bottom() {
        let mut rng = Pcg32::seed_from_u64(10);
        let mut state = running_state(&mut rng);
        state.p2.pos.y = 475.0;
        state.keys.press("ArrowDown");
        update_paddles(&mut state);
        assert_eq!(state.p2.pos.y, 480.0);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut state = running_state(&mut rng);
        state.keys.press("KeyW");
        state.keys.press("KeyS");
        update_paddles(&mut state);
        assert_eq!(state.p1.pos.y, 230.0);
    }

    #[test]
    fn test_run_frame_idle_does_nothing() {
        let mut rng = Pcg32::seed_from_u64(12);
        let mut state = GameState::new(GameConfig::default(), &mut rng);
        state.keys.press("KeyW");
        let ball = state.ball.clone();

        let phase = run_frame(&mut state, &[], &mut rng);
        assert_eq!(phase, Phase::Idle);
        assert_eq!(state.ball, ball);
        assert_eq!(state.p1.pos.y, 240.0);
    }

    #[test]
    fn test_run_frame_key_starts_and_moves_same_frame() {
        let mut rng = Pcg32::seed_from_u64(13);
        let mut state = GameState::new(GameConfig::default(), &mut rng);
        let start = state.ball.pos;

        let phase = run_frame(&mut state, &[InputEvent::KeyDown("KeyS".into())], &mut rng);
        assert_eq!(phase, Phase::Running);
        assert_eq!(state.p1.pos.y, 250.0);
        assert_ne!(state.ball.pos, start);
    }

    #[test]
    fn test_run_frame_paused_freezes() {
        let mut rng = Pcg32::seed_from_u64(14);
        let mut state = GameState::new(GameConfig::default(), &mut rng);
        let ball = state.ball.clone();

        let phase = run_frame(
            &mut state,
            &[InputEvent::KeyDown(KEY_ESCAPE.into())],
            &mut rng,
        );
        assert_eq!(phase, Phase::Paused);
        assert!(state.running);
        assert_eq!(state.ball, ball);

        let phase = run_frame(
            &mut state,
            &[InputEvent::KeyDown(KEY_ESCAPE.into())],
            &mut rng,
        );
        assert_eq!(phase, Phase::Running);
    }

    #[test]
    fn test_run_frame_goal_returns_to_idle() {
        let mut rng = Pcg32::seed_from_u64(15);
        let mut state = running_state(&mut rng);
        state.ball.pos.x = -5.0;

        assert_eq!(run_frame(&mut state, &[], &mut rng), Phase::Running);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(run_frame(&mut state, &[], &mut rng), Phase::Idle);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_on_surface(
            start in 0.0f32..480.0,
            speed in 0.5f32..200.0,
            holds in prop::collection::vec((any::<bool>(), any::<bool>()), 0..300),
        ) {
            let mut rng = Pcg32::seed_from_u64(99);
            let mut state = running_state(&mut rng);
            state.p1.pos.y = start;
            state.p1.speed = speed;

            for (up, down) in holds {
                if up { state.keys.press("KeyW") } else { state.keys.release("KeyW") }
                if down { state.keys.press("KeyS") } else { state.keys.release("KeyS") }
                update_paddles(&mut state);
                prop_assert!(state.p1.pos.y >= 0.0);
                prop_assert!(state.p1.pos.y + state.p1.height <= state.height());
            }
        }

        #[test]
        fn prop_score_monotonic_until_match_won(
            seed in any::<u64>(),
            goals in prop::collection::vec(any::<bool>(), 0..40),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = running_state(&mut rng);
            let max = state.score.max_score;

            for left_goal in goals {
                let before = state.score.clone();
                state.ball.pos.x = if left_goal { -1.0 } else { 1025.0 };
                update_ball(&mut state, &mut rng);

                let won = state.events.iter().any(|e| matches!(e, GameEvent::MatchWon { .. }));
                if won {
                    prop_assert_eq!((state.score.p1, state.score.p2), (0, 0));
                } else {
                    prop_assert!(state.score.p1 >= before.p1);
                    prop_assert!(state.score.p2 >= before.p2);
                    prop_assert_eq!(state.score.p1 + state.score.p2, before.p1 + before.p2 + 1);
                }
                prop_assert!(state.score.p1 < max && state.score.p2 < max);
            }
        }
    }
}
