//! Game state: board, active piece, queue, hold and streak counters.

use std::collections::VecDeque;
use std::fmt;

use stacker_core::{render, Board, Falling, Piece, SpinType};

use crate::attack::damage_calc;
use crate::bag::{PieceQueue, PREVIEW};
use crate::collision_map::CollisionMap;
use crate::config::GameConfig;
use crate::garbage::{self, GarbageEntry};

/// Outcome of locking the active piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HardDropResult {
    pub lines: u8,
    /// Lines sent after cancelling incoming garbage.
    pub sent: u16,
    /// Attack before cancelling.
    pub attack: u16,
    /// Spin category of the clear; four-line clears count as full. `None` when nothing cleared.
    pub clear: Option<SpinType>,
    pub perfect_clear: bool,
    /// Garbage rows that landed because nothing was cleared.
    pub garbage_inserted: u16,
}

/// Owned game state. Counters use -1 for "no streak".
///
/// The collision map is a snapshot for the active piece. It is NOT refreshed by
/// `hard_drop`; call `regen_collision_map` before any further movement.
#[derive(Debug)]
pub struct Game {
    pub board: Board,
    pub piece: Falling,
    pub queue: [Piece; PREVIEW],
    pub queue_ptr: usize,
    pub hold: Option<Piece>,
    pub b2b: i16,
    pub combo: i16,
    pub garbage: VecDeque<GarbageEntry>,
    pub spin: SpinType,
    pub(crate) collision_map: CollisionMap,
}

impl Game {
    pub fn new(piece: Piece, queue: [Piece; PREVIEW]) -> Self {
        let board = Board::new();
        let collision_map = CollisionMap::new(&board, piece);
        Self {
            board,
            piece: Falling::spawn(piece),
            queue,
            queue_ptr: 0,
            hold: None,
            b2b: -1,
            combo: -1,
            garbage: VecDeque::new(),
            spin: SpinType::None,
            collision_map,
        }
    }

    /// Draw the active piece and the preview from a randomizer.
    pub fn from_queue(queue: &mut PieceQueue) -> Self {
        let piece = queue.shift();
        Self::new(piece, queue.front16())
    }

    /// Replace the board, keeping everything else.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self.regen_collision_map();
        self
    }

    #[inline]
    pub fn collision_map(&self) -> &CollisionMap {
        &self.collision_map
    }

    pub fn regen_collision_map(&mut self) {
        self.collision_map = CollisionMap::new(&self.board, self.piece.piece);
    }

    /// Active piece overlaps the stack at its current position.
    #[inline]
    pub fn topped_out(&self) -> bool {
        self.collision_map
            .test(self.piece.x, self.piece.y, self.piece.rotation)
    }

    /// Preview pieces not yet drawn.
    #[inline]
    pub fn queue_remaining(&self) -> usize {
        PREVIEW - self.queue_ptr
    }

    /// Spawn the next preview piece. Panics when the preview is exhausted.
    pub fn next_piece(&mut self) {
        assert!(self.queue_ptr < PREVIEW, "piece queue exhausted");
        self.piece = Falling::spawn(self.queue[self.queue_ptr]);
        self.queue_ptr += 1;
        self.spin = SpinType::None;
    }

    /// Swap with the hold slot, or stash and draw when it is empty.
    /// The incoming piece respawns. Returns false when nothing can be drawn.
    pub fn hold(&mut self) -> bool {
        let current = self.piece.piece;
        match self.hold {
            Some(held) => {
                self.piece = Falling::spawn(held);
                self.spin = SpinType::None;
            }
            None if self.queue_ptr < PREVIEW => self.next_piece(),
            None => return false,
        }
        self.hold = Some(current);
        self.regen_collision_map();
        true
    }

    /// Drop, lock, clear lines and settle damage and garbage.
    pub fn hard_drop(&mut self, config: &GameConfig) -> HardDropResult {
        self.soft_drop();

        for (x, y) in self.piece.cells() {
            self.board.set(x as usize, y as usize);
        }

        let (min_by, max_by) = self.piece.piece.row_span(self.piece.rotation);
        let (lines, garbage_cleared) = self.board.clear(
            (self.piece.y - max_by as i8) as usize,
            (self.piece.y - min_by as i8) as usize,
        );
        let perfect_clear = self.board.is_pc();

        let mut broken = Some(self.b2b);
        if lines > 0 {
            if lines >= 4 || self.spin != SpinType::None {
                self.b2b += 1;
                broken = None;
            } else {
                self.b2b = -1;
            }
            self.combo += 1;
        } else {
            self.combo = -1;
            broken = None;
        }

        let special_bonus = if config.garbage_special_bonus && garbage_cleared {
            1.0
        } else {
            0.0
        };
        let damage = damage_calc(
            lines,
            self.spin,
            self.b2b,
            self.combo,
            config.combo_table,
            config.b2b_chaining,
        );
        let mut attack = (damage * config.garbage_multiplier + special_bonus).floor() as u16;

        if perfect_clear {
            attack += config.pc_send;
            self.b2b += config.pc_b2b as i16;
        }

        if let (Some(level), Some(charging)) = (broken, config.charging()) {
            attack += charging.release(level, config.garbage_multiplier);
        }

        let mut sent = attack;
        let mut garbage_inserted = 0;
        if lines > 0 {
            sent = garbage::cancel(&mut self.garbage, attack);
        } else {
            garbage_inserted = garbage::materialize(&mut self.garbage, &mut self.board);
        }
        garbage::tick(&mut self.garbage);

        let clear = match lines {
            0 => None,
            4.. => Some(SpinType::Full),
            _ => Some(self.spin),
        };

        self.spin = SpinType::None;
        self.next_piece();

        HardDropResult {
            lines,
            sent,
            attack,
            clear,
            perfect_clear,
            garbage_inserted,
        }
    }
}

impl Clone for Game {
    /// Deep copy; the collision map is rebuilt from the copied board.
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            piece: self.piece,
            queue: self.queue,
            queue_ptr: self.queue_ptr,
            hold: self.hold,
            b2b: self.b2b,
            combo: self.combo,
            garbage: self.garbage.clone(),
            spin: self.spin,
            collision_map: CollisionMap::new(&self.board, self.piece.piece),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.piece.cells();
        f.write_str(&render::render(
            self.board.columns(),
            self.board.garbage(),
            Some((self.piece.piece, &cells)),
        ))?;
        writeln!(
            f,
            "hold: {} b2b: {} combo: {} garbage: {}",
            self.hold.map_or('-', Piece::name),
            self.b2b,
            self.combo,
            self.garbage.iter().map(|g| g.amount as u32).sum::<u32>()
        )
    }
}
