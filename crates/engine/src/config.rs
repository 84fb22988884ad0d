//! Game rule configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::b2b::ChargingConfig;
use crate::kicks::KickTable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub spins: SpinRule,
    pub kicks: KickTable,
    pub b2b_charging: bool,
    pub b2b_charge_at: u8,
    pub b2b_charge_base: u8,
    pub b2b_chaining: bool,
    pub combo_table: ComboTable,
    pub garbage_multiplier: f32,
    pub pc_b2b: u8,
    pub pc_send: u16,
    pub garbage_special_bonus: bool,
}

/// Which placements may earn spin credit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinRule {
    /// Spin detection off.
    #[serde(rename = "none")]
    None,
    /// T only, graded full or mini by corners.
    #[serde(rename = "T")]
    T,
    /// T only, every T-spin credited as mini.
    #[serde(rename = "T-mini", alias = "mini")]
    TMini,
    /// T only, minis earn nothing.
    #[serde(rename = "T-full")]
    TFull,
    /// T graded by corners, other shapes (except I) get mini when immobile.
    #[serde(rename = "all", alias = "mini+")]
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComboTable {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "classic-guideline")]
    Classic,
    #[serde(rename = "modern-guideline")]
    Modern,
    #[serde(rename = "multiplier")]
    Multiplier,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("garbage multiplier must be finite, got {0}")]
    NonFiniteMultiplier(f32),
    #[error("garbage multiplier must not be negative, got {0}")]
    NegativeMultiplier(f32),
    #[error("perfect clear send {0} exceeds board height")]
    PcSendTooLarge(u16),
    #[error("b2b charging needs 1 <= base <= at, got at {at} base {base}")]
    ChargingOutOfRange { at: u8, base: u8 },
}

impl GameConfig {
    pub fn tetra_league() -> Self {
        Self {
            spins: SpinRule::All,
            kicks: KickTable::SrsPlus,
            b2b_charging: true,
            b2b_charge_at: ChargingConfig::tetra_league().at,
            b2b_charge_base: ChargingConfig::tetra_league().base,
            b2b_chaining: false,
            combo_table: ComboTable::Multiplier,
            garbage_multiplier: 1.0,
            pc_b2b: 2,
            pc_send: 5,
            garbage_special_bonus: true,
        }
    }

    pub fn quick_play() -> Self {
        Self {
            b2b_charge_at: ChargingConfig::quick_play().at,
            b2b_charge_base: ChargingConfig::quick_play().base,
            pc_send: 3,
            ..Self::tetra_league()
        }
    }

    /// Every bonus disabled: raw line-clear damage only.
    pub fn none() -> Self {
        Self {
            spins: SpinRule::None,
            kicks: KickTable::SrsPlus,
            b2b_charging: false,
            b2b_charge_at: 0,
            b2b_charge_base: 0,
            b2b_chaining: false,
            combo_table: ComboTable::None,
            garbage_multiplier: 1.0,
            pc_b2b: 0,
            pc_send: 0,
            garbage_special_bonus: false,
        }
    }

    pub fn charging(&self) -> Option<ChargingConfig> {
        self.b2b_charging
            .then(|| ChargingConfig::new(self.b2b_charge_at, self.b2b_charge_base))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.garbage_multiplier.is_finite() {
            return Err(ConfigError::NonFiniteMultiplier(self.garbage_multiplier));
        }
        if self.garbage_multiplier < 0.0 {
            return Err(ConfigError::NegativeMultiplier(self.garbage_multiplier));
        }
        if self.pc_send as usize > stacker_core::Board::HEIGHT {
            return Err(ConfigError::PcSendTooLarge(self.pc_send));
        }
        if let Some(charging) = self.charging() {
            if charging.at == 0 || charging.base == 0 || charging.base > charging.at {
                return Err(ConfigError::ChargingOutOfRange {
                    at: charging.at,
                    base: charging.base,
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::tetra_league()
    }
}

impl ComboTable {
    /// Lookup table for the additive modes; empty for `Multiplier`.
    pub fn table(self) -> &'static [u8] {
        match self {
            ComboTable::None => &[0],
            ComboTable::Classic => &[0, 1, 1, 2, 2, 3, 3, 4, 4, 4, 5],
            ComboTable::Modern => &[0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4],
            ComboTable::Multiplier => &[],
        }
    }
}
