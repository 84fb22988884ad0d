//! stacker-engine - game rules, placement expansion and key finding.
//!
//! Provides SRS/SRS+ rotation with kicks, spin detection, attack and garbage
//! settlement, the seeded bag randomizer and the placement expander.

pub mod attack;
pub mod b2b;
pub mod bag;
pub mod collision;
pub mod collision_map;
pub mod combo;
pub mod config;
pub mod game;
pub mod garbage;
pub mod keyfinder;
pub mod kicks;
pub mod move_list;
pub mod movegen;
pub mod movement;
pub mod rng;
mod spin;

pub use attack::damage_calc;
pub use b2b::{b2b_bonus, ChargingConfig};
pub use bag::{Bag, PieceQueue, QueueError, PREVIEW};
pub use collision::{can_place, collides};
pub use collision_map::CollisionMap;
pub use combo::{apply_combo, COMBO_BONUS};
pub use config::{ComboTable, ConfigError, GameConfig, SpinRule};
pub use game::{Game, HardDropResult};
pub use garbage::GarbageEntry;
pub use keyfinder::{find_keys, KeySequence};
pub use kicks::{get_kicks, KickTable};
pub use move_list::MoveList;
pub use movegen::Expander;
pub use movement::{apply_key, PieceControl, RotationResult};
pub use rng::Rng;
