//! Game state and core simulation types

use std::collections::HashMap;

use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::config::{BallConfig, GameConfig, PaddleConfig, ScoreConfig};
use crate::consts::DEFAULT_BALL_SPEED;

/// One of the two players / surface edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction pointing toward this side
    pub fn dir(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Top-level state derived from the `running` / `paused` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for any key to start the round
    Idle,
    /// Active gameplay
    Running,
    /// Paused (orthogonal to running)
    Paused,
}

/// Something that happened during a physics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// Ball crossed a goal line; `scorer` gets the point
    Goal { scorer: Side },
    /// `winner` reached the max score, both counters went back to 0
    MatchWon { winner: Side },
}

/// Match score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
    pub max_score: u32,
}

impl Score {
    pub fn new(config: &ScoreConfig) -> Self {
        Self {
            p1: config.p1,
            p2: config.p2,
            max_score: config.max_score,
        }
    }

    pub fn reset(&mut self) {
        self.p1 = 0;
        self.p2 = 0;
    }

    /// Give `side` a point. Returns true if that won the match, in which
    /// case both counters are already back at 0.
    pub fn award(&mut self, side: Side) -> bool {
        let points = match side {
            Side::Left => &mut self.p1,
            Side::Right => &mut self.p2,
        };
        *points += 1;
        if *points >= self.max_score {
            self.reset();
            return true;
        }
        false
    }
}

/// A player's paddle (axis-aligned rectangle, top-left origin)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Key identifiers moving the paddle
    pub up: String,
    pub down: String,
    pub color: Color,
    /// Pixels per frame
    pub speed: f32,
}

impl Paddle {
    /// Build from `config`, falling back to `seat` for an unset position
    pub fn new(config: &PaddleConfig, seat: Vec2) -> Self {
        Self {
            pos: Vec2::new(config.x.unwrap_or(seat.x), config.y.unwrap_or(seat.y)),
            width: config.width,
            height: config.height,
            up: config.up.clone(),
            down: config.down.clone(),
            color: config.color,
            speed: config.speed,
        }
    }

    /// Re-seat vertically for a new round. `x` never changes, so the paddle
    /// stays on the edge it was built on.
    pub fn reset(&mut self, y: f32) {
        self.pos.y = y;
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Direction components, not normalized; scaled by `speed` each step
    pub dir: Vec2,
    /// Diameter
    pub size: f32,
    /// Pixels per frame per unit of `dir`
    pub speed: f32,
    pub color: Color,
}

impl Ball {
    /// Build from `config`, falling back to `serve` for an unset position
    pub fn new(config: &BallConfig, serve: Vec2) -> Self {
        Self {
            pos: Vec2::new(config.x.unwrap_or(serve.x), config.y.unwrap_or(serve.y)),
            dir: Vec2::new(config.dx, config.dy),
            size: config.size,
            speed: config.speed,
            color: config.color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Displacement over one step
    pub fn step(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Return to the serve point, heading toward `side` with a random
    /// vertical component in [-0.5, 0.5). Speed and color go back to the
    /// defaults whatever the ball was configured with.
    pub fn reset<R: Rng>(&mut self, side: Side, serve: Vec2, rng: &mut R) {
        self.pos = serve;
        self.dir = Vec2::new(side.dir(), random_dy(rng));
        self.speed = DEFAULT_BALL_SPEED;
        self.color = Color::default();
    }
}

/// Vertical serve component, uniform in [-0.5, 0.5)
pub fn random_dy<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(-0.5..0.5)
}

/// Which input keys are currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashMap<String, bool>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string(), true);
    }

    pub fn release(&mut self, key: &str) {
        self.held.insert(key.to_string(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub score: Score,
    /// Left paddle
    pub p1: Paddle,
    /// Right paddle
    pub p2: Paddle,
    pub ball: Ball,
    pub keys: KeyState,
    pub running: bool,
    pub paused: bool,
    /// Events of the most recent physics step, cleared at the start of each
    /// frame and of each ball update
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game in the Idle state with a randomly directed opening serve
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let (x, y) = config.serve_point();
        let mut ball = Ball::new(&config.ball, Vec2::new(x, y));
        ball.dir.x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        ball.dir.y = random_dy(rng);

        let (x, y) = config.left_seat(config.left.height);
        let left_seat = Vec2::new(x, y);
        let (x, y) = config.right_seat(config.right.width, config.right.height);
        let right_seat = Vec2::new(x, y);

        Self {
            score: Score::new(&config.score),
            p1: Paddle::new(&config.left, left_seat),
            p2: Paddle::new(&config.right, right_seat),
            ball,
            keys: KeyState::new(),
            running: false,
            paused: false,
            events: Vec::new(),
            config,
        }
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    pub fn phase(&self) -> Phase {
        if self.paused {
            Phase::Paused
        } else if self.running {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    /// Put both paddles and the ball back at their round-start positions.
    /// The ball is served toward `serve_toward`.
    pub fn reset_round<R: Rng>(&mut self, serve_toward: Side, rng: &mut R) {
        let (_, y) = self.config.left_seat(self.p1.height);
        self.p1.reset(y);
        let (_, y) = self.config.right_seat(self.p2.width, self.p2.height);
        self.p2.reset(y);

        let (x, y) = self.config.serve_point();
        self.ball.reset(serve_toward, Vec2::new(x, y), rng);
    }
}
