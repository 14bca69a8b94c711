//! Collision tests for the ball against walls and paddles
//!
//! All tests are predictive: they compare where the ball will be after one
//! step of motion with where it is now, and fire on the single step in which
//! a boundary is crossed. A ball that is already overlapping a paddle never
//! triggers a hit. There is no continuous collision detection: vertical
//! overlap is judged at the current position only, so a fast, steep ball can
//! slip past a paddle corner or be returned by one it never touches.

use super::state::{Ball, Paddle};

/// True if the ball's next-step top or bottom edge reaches the top (0) or
/// bottom (`height`) wall
pub fn hits_wall(ball: &Ball, height: f32) -> bool {
    let next_dy = ball.dir.y * ball.speed;
    ball.pos.y - ball.radius() + next_dy <= 0.0 || ball.pos.y + ball.radius() + next_dy >= height
}

/// Vertical overlap between ball and paddle. Uses the full ball size as
/// slop on each side, not the radius.
fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.size >= paddle.top() && ball.pos.y - ball.size <= paddle.bottom()
}

/// The ball's left edge crosses the left paddle's right edge this step
pub fn crosses_left_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let edge = ball.pos.x - ball.radius();
    let face = paddle.right_edge();
    edge + ball.dir.x * ball.speed <= face && edge > face && overlaps_vertically(ball, paddle)
}

/// The ball's right edge crosses the right paddle's left edge this step
pub fn crosses_right_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let edge = ball.pos.x + ball.radius();
    let face = paddle.left_edge();
    edge + ball.dir.x * ball.speed >= face && edge < face && overlaps_vertically(ball, paddle)
}

/// Vertical direction after a paddle hit. Hitting above the paddle's center
/// sends the ball up, below sends it down; taller paddles give flatter
/// rebounds.
pub fn rebound_dy(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.pos.y - paddle.center_y() - 0.5) / paddle.height
}
