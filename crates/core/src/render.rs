//! Plain-text board rendering.

use crate::{Board, Piece};

/// Render the visible rows, top first.
///
/// Filled cells are `[]`, garbage rows `##`, and highlighted cells show the
/// piece letter twice. Highlight coordinates outside the visible area are skipped.
pub fn render(
    cols: &[u64; Board::WIDTH],
    garbage: u8,
    highlight: Option<(Piece, &[(i8, i8)])>,
) -> String {
    let mut out = String::with_capacity((Board::WIDTH * 2 + 3) * Board::VISIBLE_HEIGHT);

    for y in (0..Board::VISIBLE_HEIGHT).rev() {
        out.push('|');
        for (x, col) in cols.iter().enumerate() {
            let lit = highlight.and_then(|(piece, cells)| {
                cells
                    .iter()
                    .any(|&(cx, cy)| cx as isize == x as isize && cy as isize == y as isize)
                    .then_some(piece)
            });
            match lit {
                Some(piece) => {
                    out.push(piece.name());
                    out.push(piece.name());
                }
                None if (col >> y) & 1 == 1 && y < garbage as usize => out.push_str("##"),
                None if (col >> y) & 1 == 1 => out.push_str("[]"),
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(Board::WIDTH * 2));
    out.push_str("+\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dimensions() {
        let text = render(&[0; Board::WIDTH], 0, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), Board::VISIBLE_HEIGHT + 1);
        assert!(lines.iter().all(|l| l.len() == Board::WIDTH * 2 + 2));
    }

    #[test]
    fn test_render_garbage_and_highlight() {
        let mut board = Board::new();
        board.insert_garbage(1, 0);
        board.set(0, 1);
        let cells = [(5, 3)];
        let text = render(board.columns(), board.garbage(), Some((Piece::T, &cells)));
        let lines: Vec<&str> = text.lines().collect();
        let bottom = lines[Board::VISIBLE_HEIGHT - 1];
        assert_eq!(bottom, "|  ##################|");
        assert!(lines[Board::VISIBLE_HEIGHT - 2].starts_with("|[]"));
        assert_eq!(&lines[Board::VISIBLE_HEIGHT - 4][11..13], "TT");
    }
}
