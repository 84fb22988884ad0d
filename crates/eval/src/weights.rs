use serde::{Deserialize, Serialize};

/// Coefficients for each board and event feature.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub height: f32,
    pub upper_half_height: f32,
    pub upper_quarter_height: f32,
    pub center_height: f32,

    pub extra_wells: f32,

    pub clear_none: f32,
    pub clear_mini: f32,
    pub clear_normal: f32,

    pub sent: f32,

    pub b2b: f32,
    pub combo: f32,

    pub holes: f32,
    pub covered_holes: f32,
    pub overstacked_holes: f32,

    pub unevenness: f32,
}

impl Weights {
    /// General purpose stacking and attack weights.
    pub const fn handtuned() -> Self {
        Self {
            height: -51.0,
            upper_half_height: -25.0,
            upper_quarter_height: -34.0,
            center_height: -100.0,
            extra_wells: -100.0,
            clear_none: 0.0,
            clear_mini: 100.0,
            clear_normal: 0.0,
            sent: 324.0,
            b2b: 164.0,
            combo: 191.0,
            holes: -472.0,
            covered_holes: -361.0,
            overstacked_holes: -81.0,
            unevenness: -184.0,
        }
    }

    /// Favour keeping a combo alive over everything but survival.
    pub const fn four_wide() -> Self {
        Self {
            clear_none: 70.0,
            clear_mini: 140.0,
            clear_normal: 140.0,
            sent: 0.0,
            b2b: 0.0,
            combo: 10_000.0,
            holes: 0.0,
            ..Self::handtuned()
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::handtuned()
    }
}
