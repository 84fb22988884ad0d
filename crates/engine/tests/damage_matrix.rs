use stacker_core::{Board, Falling, Piece, Rotation, SpinType};
use stacker_engine::{damage_calc, ComboTable, Game, GameConfig, SpinRule, PREVIEW};

fn assert_damage(lines: u8, spin: SpinType, b2b: i16, combo: i16, table: ComboTable, expected: u16) {
    let damage = damage_calc(lines, spin, b2b, combo, table, false);
    assert_eq!(damage.floor() as u16, expected, "{lines} lines {spin:?} b2b {b2b} combo {combo}");
}

/// Board filled everywhere except the listed cells.
fn caged_board(open: &[(i8, i8)]) -> Board {
    let mut board = Board::new();
    for y in 0..Board::HEIGHT {
        for x in 0..Board::WIDTH {
            if !open.contains(&(x as i8, y as i8)) {
                board.set(x, y);
            }
        }
    }
    board
}

fn game_with(piece: Falling, board: Board) -> Game {
    let mut game = Game::new(piece.piece, [Piece::T; PREVIEW]).with_board(board);
    game.piece = piece;
    game
}

mod basic_clears {
    use super::*;

    #[test]
    fn test_single_double_triple_quad() {
        assert_damage(1, SpinType::None, -1, 0, ComboTable::Multiplier, 0);
        assert_damage(2, SpinType::None, -1, 0, ComboTable::Multiplier, 1);
        assert_damage(3, SpinType::None, -1, 0, ComboTable::Multiplier, 2);
        assert_damage(4, SpinType::None, 0, 0, ComboTable::Multiplier, 4);
    }
}

mod tspin_clears {
    use super::*;

    #[test]
    fn test_full_spins() {
        assert_damage(1, SpinType::Full, 0, 0, ComboTable::Multiplier, 2);
        assert_damage(2, SpinType::Full, 0, 0, ComboTable::Multiplier, 4);
        assert_damage(3, SpinType::Full, 0, 0, ComboTable::Multiplier, 6);
    }

    #[test]
    fn test_minis_send_like_plain_clears() {
        assert_damage(1, SpinType::Mini, 0, 0, ComboTable::Multiplier, 0);
        assert_damage(2, SpinType::Mini, 0, 0, ComboTable::Multiplier, 1);
    }
}

mod back_to_back {
    use super::*;

    #[test]
    fn test_flat_bonus() {
        assert_damage(4, SpinType::None, 1, 0, ComboTable::Multiplier, 5);
        assert_damage(2, SpinType::Full, 1, 0, ComboTable::Multiplier, 5);
        assert_damage(4, SpinType::None, 9, 0, ComboTable::Multiplier, 5);
    }

    #[test]
    fn test_chaining_grows_with_level() {
        let low = damage_calc(4, SpinType::None, 1, 0, ComboTable::None, true);
        let high = damage_calc(4, SpinType::None, 8, 0, ComboTable::None, true);
        assert!((low - 5.0).abs() < 0.0001);
        assert!(high > 6.0);
    }
}

mod combos {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        // 1 * 1.25
        assert_damage(2, SpinType::None, -1, 1, ComboTable::Multiplier, 1);
        // 4 * 1.75
        assert_damage(4, SpinType::None, 0, 3, ComboTable::Multiplier, 7);
        // singles fall back to ln(1 + 1.25 * combo)
        assert_damage(1, SpinType::None, -1, 4, ComboTable::Multiplier, 1);
        assert_damage(1, SpinType::None, -1, 12, ComboTable::Multiplier, 2);
    }

    #[test]
    fn test_additive_tables() {
        assert_damage(2, SpinType::None, -1, 2, ComboTable::Classic, 2);
        assert_damage(1, SpinType::None, -1, 20, ComboTable::Classic, 5);
        assert_damage(1, SpinType::None, -1, 20, ComboTable::Modern, 4);
        assert_damage(2, SpinType::None, -1, 20, ComboTable::None, 1);
    }
}

mod hard_drop {
    use super::*;

    /// T facing north at (5, 10) whose only way out is the last
    /// counter-clockwise kick, landing west at (6, 8).
    fn tst_cage() -> Game {
        let north = Falling {
            piece: Piece::T,
            x: 5,
            y: 10,
            rotation: Rotation::North,
        };
        let west = Falling {
            x: 6,
            y: 8,
            rotation: Rotation::West,
            ..north
        };
        let mut open = north.cells().to_vec();
        open.extend(west.cells());
        game_with(north, caged_board(&open))
    }

    #[test]
    fn test_difficult_kick_is_full_spin() {
        let mut config = GameConfig::none();
        config.spins = SpinRule::T;
        let mut game = tst_cage();
        let result = game.try_rotate(3, &config).expect("fifth kick fits");
        assert_eq!(result.kick_index, 5);
        assert!(result.difficult);
        assert_eq!(result.spin_type, SpinType::Full);
        assert_eq!((game.piece.x, game.piece.y), (6, 8));
    }

    #[test]
    fn test_tst_sends_six() {
        let mut config = GameConfig::none();
        config.spins = SpinRule::T;
        let mut game = tst_cage();
        game.try_rotate(3, &config);
        let result = game.hard_drop(&config);
        assert_eq!(result.lines, 3);
        assert_eq!(result.clear, Some(SpinType::Full));
        assert_eq!(result.sent, 6);
        assert_eq!(game.b2b, 0);
    }

    #[test]
    fn test_mini_rule_downgrades() {
        let mut config = GameConfig::none();
        config.spins = SpinRule::TMini;
        let mut game = tst_cage();
        game.try_rotate(3, &config);
        let result = game.hard_drop(&config);
        assert_eq!(result.clear, Some(SpinType::Mini));
        assert_eq!(result.sent, 2);
    }

    #[test]
    fn test_b2b_streak_across_drops() {
        let config = GameConfig::tetra_league();
        let mut board = Board::new();
        for y in 0..8 {
            for x in 0..Board::WIDTH - 1 {
                board.set(x, y);
            }
        }
        let mut game = Game::new(Piece::I, [Piece::I; PREVIEW]).with_board(board);
        // second quad: (4 + 1) * 1.25 plus the perfect clear bonus
        for (expected, perfect) in [(4, false), (6 + 5, true)] {
            game.try_rotate(1, &config);
            game.das_right();
            let result = game.hard_drop(&config);
            game.regen_collision_map();
            assert_eq!(result.lines, 4);
            assert_eq!(result.sent, expected);
            assert_eq!(result.perfect_clear, perfect);
        }
        assert_eq!(game.b2b, 1 + config.pc_b2b as i16);
        assert_eq!(game.combo, 1);
    }
}
