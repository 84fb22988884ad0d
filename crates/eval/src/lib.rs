//! Stacker eval crate - heuristic scoring of post-placement states.

mod weights;

pub use weights::Weights;

use stacker_core::{Board, SpinType};
use stacker_engine::Game;

/// Penalty for a state whose next piece cannot spawn.
pub const TOP_OUT_PENALTY: f32 = 1_000_000.0;

/// Rows above this height eat into the spawn buffer.
pub const SAFE_HEIGHT: u32 = (Board::HEIGHT - Board::BUFFER) as u32;

/// Linear score of `game` after a branch that sent `lines_sent` and cleared
/// with the spins in `clears`. Higher is better.
pub fn evaluate(game: &Game, weights: &Weights, lines_sent: u16, clears: &[SpinType]) -> f32 {
    let board = &game.board;
    let max_height = board.max_height();
    let mut score = 0.0;

    score += max_height as f32 * weights.height;
    score += board.upper_half_height() as f32 * weights.upper_half_height;
    score += board.upper_quarter_height() as f32 * weights.upper_quarter_height;
    score += board.center_height() as f32 * weights.center_height;

    score += board.wells().saturating_sub(1) as f32 * weights.extra_wells;

    for clear in clears {
        score += match clear {
            SpinType::None => weights.clear_none,
            SpinType::Mini => weights.clear_mini,
            SpinType::Full => weights.clear_normal,
        };
    }

    score += lines_sent as f32 * weights.sent;

    score += game.b2b as f32 * weights.b2b;
    score += game.combo as f32 * weights.combo;

    score += board.count_holes() as f32 * weights.holes;
    score += board.covered_holes() as f32 * weights.covered_holes;
    score += board.overstacked_holes() as f32 * weights.overstacked_holes;

    score += board.unevenness() as f32 * weights.unevenness;

    if game.topped_out() {
        score -= TOP_OUT_PENALTY;
    }

    if max_height > SAFE_HEIGHT {
        score -= ((max_height - SAFE_HEIGHT) as f32).powi(3) * 10.0;
    }

    score
}
