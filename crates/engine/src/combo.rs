use crate::config::ComboTable;

pub const COMBO_BONUS: f32 = 0.25;
const COMBO_MINIFIER_LOG: f32 = 1.25;

/// Apply the combo bonus for a streak of `combo` to `damage`.
pub fn apply_combo(damage: f32, combo: i16, table: ComboTable) -> f32 {
    if combo <= 0 {
        return damage;
    }

    if table == ComboTable::Multiplier {
        let multiplied = damage * (1.0 + COMBO_BONUS * combo as f32);
        if combo > 1 {
            (combo as f32 * COMBO_MINIFIER_LOG).ln_1p().max(multiplied)
        } else {
            multiplied
        }
    } else {
        let values = table.table();
        match values.len() {
            0 => damage,
            len => damage + values[(combo as usize - 1).min(len - 1)] as f32,
        }
    }
}
