use stacker_core::{Board, Key, Piece};
use stacker_engine::{apply_key, find_keys, Game, GameConfig, PieceQueue, PREVIEW};
use stacker_eval::Weights;
use stacker_search::TreeSearch;

/// Four full rows with column 9 left open.
fn quad_well() -> Board {
    let mut board = Board::new();
    for y in 0..4 {
        for x in 0..Board::WIDTH - 1 {
            board.set(x, y);
        }
    }
    board
}

/// Play `keys` on a copy of `game` and lock the piece.
fn replay(game: &Game, keys: &[Key], config: &GameConfig) -> Game {
    let mut game = game.clone();
    for &key in keys {
        match key {
            Key::HardDrop => {
                game.hard_drop(config);
                game.regen_collision_map();
            }
            _ => {
                apply_key(&mut game, key, config);
            }
        }
    }
    game
}

#[test]
fn test_takes_the_quad() {
    let config = GameConfig::tetra_league();
    let game = Game::new(Piece::I, [Piece::T; PREVIEW]).with_board(quad_well());
    let result = TreeSearch::new(1, Weights::handtuned())
        .search(&game, &config)
        .expect("moves");
    assert_eq!(result.first_move.piece, Piece::I);
    assert!(!result.first_move.hold_used);
    assert!(result.game.board.is_pc());
}

#[test]
fn test_holds_into_the_quad() {
    let config = GameConfig::tetra_league();
    let mut queue = [Piece::T; PREVIEW];
    queue[0] = Piece::I;
    let game = Game::new(Piece::S, queue).with_board(quad_well());
    let result = TreeSearch::new(1, Weights::handtuned())
        .search(&game, &config)
        .expect("moves");
    assert!(result.first_move.hold_used);
    assert_eq!(result.first_move.piece, Piece::I);
    assert_eq!(result.game.hold, Some(Piece::S));
}

#[test]
fn test_topped_out_has_no_move() {
    let mut board = Board::new();
    for y in 0..Board::HEIGHT {
        board.set(4, y);
        board.set(5, y);
    }
    let game = Game::new(Piece::O, [Piece::O; PREVIEW]).with_board(board);
    let search = TreeSearch::default();
    assert!(search.search(&game, &GameConfig::default()).is_none());
    assert!(search.search_parallel(&game, &GameConfig::default()).is_none());
}

#[test]
fn test_found_keys_replay_the_chosen_move() {
    let config = GameConfig::tetra_league();
    let mut queue = [Piece::T; PREVIEW];
    queue[0] = Piece::I;
    let game = Game::new(Piece::S, queue).with_board(quad_well());
    let result = TreeSearch::new(1, Weights::handtuned())
        .search(&game, &config)
        .expect("moves");

    let keys = find_keys(&game, &result.first_move, &config);
    assert_eq!(keys.first(), Some(&Key::Hold));
    assert_eq!(keys.last(), Some(&Key::HardDrop));
    let played = replay(&game, &keys, &config);
    assert_eq!(played.board, result.game.board);
}

#[test]
fn test_plays_a_seeded_game() {
    let config = GameConfig::tetra_league();
    let search = TreeSearch::new(1, Weights::handtuned());
    let mut pieces = PieceQueue::bag7(2024);
    let mut game = Game::from_queue(&mut pieces);

    for turn in 0..30 {
        let result = search
            .search(&game, &config)
            .unwrap_or_else(|| panic!("no move on turn {turn}"));
        let keys = find_keys(&game, &result.first_move, &config);
        assert!(!keys.is_empty(), "unreachable move on turn {turn}");

        game = replay(&game, &keys, &config);
        assert_eq!(game.board, result.game.board, "turn {turn}");

        // slide the preview window forward
        for _ in 0..game.queue_ptr {
            pieces.shift();
        }
        game.queue = pieces.front16();
        game.queue_ptr = 0;

        assert!(!game.topped_out(), "topped out on turn {turn}");
    }
    assert!(game.board.max_height() <= Board::VISIBLE_HEIGHT as u32);
}
