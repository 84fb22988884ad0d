//! Back-to-back bonus and charging.

use serde::{Deserialize, Serialize};

const BACK_TO_BACK_BONUS: f32 = 1.0;
const BACK_TO_BACK_BONUS_LOG: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingConfig {
    pub at: u8,
    pub base: u8,
}

impl ChargingConfig {
    pub fn new(at: u8, base: u8) -> Self {
        Self { at, base }
    }

    /// QUICK PLAY default: surge starts at 1 line
    // B2B Charging: tetris.wiki/TETR.IO - Beta 1.0.0 (Jul 26, 2024)
    pub fn quick_play() -> Self {
        Self { at: 4, base: 1 }
    }

    /// TETRA LEAGUE / Custom default: surge starts at 4 lines
    // B2B Charging: tetris.wiki/TETR.IO - Beta 1.0.0 (Jul 26, 2024)
    pub fn tetra_league() -> Self {
        Self { at: 4, base: 4 }
    }

    /// Extra lines released when a streak of `broken` is broken.
    pub fn release(&self, broken: i16, multiplier: f32) -> u16 {
        if broken + 1 <= self.at as i16 {
            return 0;
        }
        let total = broken - self.at as i16 + self.base as i16 + 1;
        (total as f32 * multiplier).floor().max(0.0) as u16
    }
}

/// Bonus added to a clear while a streak of `level` is active.
#[inline]
pub fn b2b_bonus(level: i16, chaining: bool) -> f32 {
    if level <= 0 {
        return 0.0;
    }
    if chaining {
        chaining_bonus(level)
    } else {
        BACK_TO_BACK_BONUS
    }
}

fn chaining_bonus(level: i16) -> f32 {
    let log_value = (level as f32 * BACK_TO_BACK_BONUS_LOG).ln_1p();
    let base = (1.0 + log_value).floor();
    let fraction = if level == 1 {
        0.0
    } else {
        (1.0 + log_value.fract()) / 3.0
    };
    BACK_TO_BACK_BONUS * (base + fraction)
}
