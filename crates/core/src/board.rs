//! board representation - column-major u64s for fast bitwise ops
//! row 0 is the bottom; the top `BUFFER` rows are the spawn buffer

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mask covering every row of a column.
const COLUMN_MASK: u64 = (1u64 << Board::HEIGHT) - 1;

/// 10x40 board using column-major u64 bitfields.
/// `garbage` counts the contiguous bottom rows that came from received garbage.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board {
    cols: [u64; Board::WIDTH],
    garbage: u8,
}

impl Board {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 40;
    pub const BUFFER: usize = 20;
    pub const VISIBLE_HEIGHT: usize = Self::HEIGHT - Self::BUFFER;

    /// Thresholds for the upper-half/upper-quarter height metrics, measured
    /// against the full height including the buffer.
    pub const UPPER_HALF: u32 = Self::HEIGHT as u32 / 2;
    pub const UPPER_QUARTER: u32 = Self::HEIGHT as u32 * 3 / 4;

    /// Middle four columns, used by `center_height`.
    pub const CENTER: std::ops::Range<usize> = 3..7;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(mut cols: [u64; Board::WIDTH], garbage: u8) -> Self {
        for col in &mut cols {
            *col &= COLUMN_MASK;
        }
        Self {
            cols,
            garbage: garbage.min(Self::HEIGHT as u8),
        }
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        (self.cols[x] >> y) & 1 == 1
    }

    /// Fill a cell. Panics when out of bounds.
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize) {
        assert!(
            x < Self::WIDTH && y < Self::HEIGHT,
            "cell ({x}, {y}) out of bounds"
        );
        self.cols[x] |= 1u64 << y;
    }

    /// Out-of-bounds cells count as occupied.
    #[inline(always)]
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || y < 0 || x as usize >= Self::WIDTH || y as usize >= Self::HEIGHT {
            return true;
        }
        self.get(x as usize, y as usize)
    }

    #[inline(always)]
    pub fn garbage(&self) -> u8 {
        self.garbage
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.cols.iter().all(|col| (col >> y) & 1 == 1)
    }

    /// Remove every full row in `from..=to`, scanning top-down.
    /// Returns the number of rows removed and whether any was a garbage row.
    pub fn clear(&mut self, from: usize, to: usize) -> (u8, bool) {
        let to = to.min(Self::HEIGHT - 1);
        let mut cleared = 0u8;
        let mut garbage_cleared = false;

        for y in (from..=to).rev() {
            if !self.is_row_full(y) {
                continue;
            }
            cleared += 1;
            if y < self.garbage as usize {
                garbage_cleared = true;
                self.garbage -= 1;
            }

            let lower_mask = (1u64 << y) - 1;
            for col in &mut self.cols {
                let lower = *col & lower_mask;
                let upper = *col >> (y + 1);
                *col = lower | (upper << y);
            }
        }

        (cleared, garbage_cleared)
    }

    /// Push `amount` solid rows in from the bottom, leaving `hole` open.
    pub fn insert_garbage(&mut self, amount: u8, hole: usize) {
        assert!(hole < Self::WIDTH, "garbage hole {hole} out of bounds");
        if amount == 0 {
            return;
        }
        let amount = amount.min(Self::HEIGHT as u8);
        self.garbage = (self.garbage + amount).min(Self::HEIGHT as u8);

        let fill = (1u64 << amount) - 1;
        for (x, col) in self.cols.iter_mut().enumerate() {
            *col = (*col << amount) & COLUMN_MASK;
            if x != hole {
                *col |= fill;
            }
        }
    }

    /// True when no cell is occupied.
    pub fn is_pc(&self) -> bool {
        self.cols.iter().all(|&col| col == 0)
    }

    #[inline]
    pub fn column(&self, x: usize) -> u64 {
        self.cols[x]
    }

    #[inline]
    pub fn columns(&self) -> &[u64; Board::WIDTH] {
        &self.cols
    }

    /// Raw row bits, bit x set for column x
    pub fn row(&self, y: usize) -> u16 {
        self.cols
            .iter()
            .enumerate()
            .fold(0u16, |acc, (x, col)| acc | ((((col >> y) & 1) as u16) << x))
    }

    // Terrain metrics

    #[inline(always)]
    pub fn column_height(&self, x: usize) -> u32 {
        64 - self.cols[x].leading_zeros()
    }

    pub fn heights(&self) -> [u32; Board::WIDTH] {
        std::array::from_fn(|x| self.column_height(x))
    }

    pub fn max_height(&self) -> u32 {
        (0..Self::WIDTH)
            .map(|x| self.column_height(x))
            .max()
            .unwrap_or(0)
    }

    pub fn upper_half_height(&self) -> u32 {
        self.max_height().saturating_sub(Self::UPPER_HALF)
    }

    pub fn upper_quarter_height(&self) -> u32 {
        self.max_height().saturating_sub(Self::UPPER_QUARTER)
    }

    pub fn center_height(&self) -> u32 {
        Self::CENTER
            .map(|x| self.column_height(x))
            .max()
            .unwrap_or(0)
    }

    /// Empty cells below each column's highest filled cell.
    pub fn count_holes(&self) -> u32 {
        (0..Self::WIDTH).map(|x| self.hole_mask(x).count_ones()).sum()
    }

    /// Holes whose left and right neighbours are filled on the same row.
    /// Walls count as filled.
    pub fn covered_holes(&self) -> u32 {
        (0..Self::WIDTH)
            .map(|x| (self.hole_mask(x) & self.neighbour(x, -1) & self.neighbour(x, 1)).count_ones())
            .sum()
    }

    /// Filled cells stacked above a column's lowest covered hole, beyond the first layer.
    pub fn overstacked_holes(&self) -> u32 {
        let mut total = 0;
        for &col in &self.cols {
            let covered = !col & (col >> 1) & COLUMN_MASK;
            if covered == 0 {
                continue;
            }
            let top = 63 - col.leading_zeros() as i32;
            let lowest = covered.trailing_zeros() as i32;
            total += (top - lowest - 1).max(0) as u32;
        }
        total
    }

    /// Sum of absolute height differences between adjacent columns.
    pub fn unevenness(&self) -> u32 {
        let heights = self.heights();
        heights.windows(2).map(|w| w[0].abs_diff(w[1])).sum()
    }

    /// Empty cells with filled cells (or walls) on both sides.
    pub fn wells(&self) -> u32 {
        (0..Self::WIDTH)
            .map(|x| {
                (self.neighbour(x, -1) & self.neighbour(x, 1) & !self.cols[x] & COLUMN_MASK)
                    .count_ones()
            })
            .sum()
    }

    #[inline(always)]
    fn hole_mask(&self, x: usize) -> u64 {
        let below_top = (1u64 << self.column_height(x)) - 1;
        !self.cols[x] & below_top
    }

    #[inline(always)]
    fn neighbour(&self, x: usize, dx: isize) -> u64 {
        match x.checked_add_signed(dx) {
            Some(nx) if nx < Self::WIDTH => self.cols[nx],
            _ => COLUMN_MASK,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    rows: Vec<u16>,
    garbage: u8,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows = (0..Board::HEIGHT).map(|y| self.row(y)).collect();
        BoardRepr {
            rows,
            garbage: self.garbage,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = BoardRepr::deserialize(deserializer)?;
        if repr.rows.len() != Board::HEIGHT {
            return Err(serde::de::Error::custom("expected 40 rows"));
        }
        let mut cols = [0u64; Board::WIDTH];
        for (y, &value) in repr.rows.iter().enumerate() {
            for (x, col) in cols.iter_mut().enumerate() {
                if (value >> x) & 1 == 1 {
                    *col |= 1u64 << y;
                }
            }
        }
        Ok(Board::from_columns(cols, repr.garbage))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::render::render(&self.cols, self.garbage, None))
    }
}
