use crate::b2b::b2b_bonus;
use crate::combo::apply_combo;
use crate::config::ComboTable;
use stacker_core::SpinType;

pub const SINGLE: u8 = 0;
pub const DOUBLE: u8 = 1;
pub const TRIPLE: u8 = 2;
pub const QUAD: u8 = 4;

pub const TSPIN_SINGLE: u8 = 2;
pub const TSPIN_DOUBLE: u8 = 4;
pub const TSPIN_TRIPLE: u8 = 6;
pub const TSPIN_QUAD: u8 = 10;

/// Raw damage for a clear before streak bonuses. Minis count as plain clears.
fn base_attack(lines: u8, spin: SpinType) -> f32 {
    let full = spin == SpinType::Full;
    let attack = match lines {
        0 => 0,
        1 if full => TSPIN_SINGLE,
        1 => SINGLE,
        2 if full => TSPIN_DOUBLE,
        2 => DOUBLE,
        3 if full => TSPIN_TRIPLE,
        3 => TRIPLE,
        // a four-line clear with any spin credit is only reachable by a real spin
        4 if spin != SpinType::None => TSPIN_QUAD,
        4 => QUAD,
        _ => unreachable!("a placement clears at most 4 lines, got {lines}"),
    };
    attack as f32
}

/// Unscaled damage for a clear given the streak counters (-1 = no streak).
/// Panics when `lines > 4`.
pub fn damage_calc(
    lines: u8,
    spin: SpinType,
    b2b: i16,
    combo: i16,
    combo_table: ComboTable,
    b2b_chaining: bool,
) -> f32 {
    assert!(lines <= 4, "lines must be between 0 and 4, got {lines}");

    if lines == 0 {
        return 0.0;
    }
    let damage = base_attack(lines, spin) + b2b_bonus(b2b, b2b_chaining);
    apply_combo(damage, combo, combo_table)
}
