use anyhow::{anyhow, bail, ensure, Context, Result};

use crate::core::{game::validate_dimensions, side::Player};

use super::{Board, Cell};

const EMPTY_CHAR: char = '.';

fn cell_char(cell: Cell) -> char {
    match cell {
        None => EMPTY_CHAR,
        Some(Player::One) => '1',
        Some(Player::Two) => '2',
    }
}

fn fen_char(player: Player) -> char {
    match player {
        Player::One => 'x',
        Player::Two => 'o',
    }
}

impl Board {
    /// Row-major textual snapshot, top row first, one line per row
    pub fn snapshot(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns * 2 + 1));
        for row in (0..self.rows).rev() {
            let line = (0..self.columns)
                .map(|column| cell_char(self.get(column, row)).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Parse a snapshot as produced by [`Board::snapshot`]. Blank lines are
    /// ignored; whitespace between cells is optional.
    pub fn from_snapshot(snapshot: &str) -> Result<Self> {
        let grid = snapshot
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect::<Vec<_>>();

        ensure!(!grid.is_empty(), "Empty board snapshot");
        let columns = grid[0].len();
        ensure!(
            grid.iter().all(|row| row.len() == columns),
            "Ragged board snapshot"
        );

        let rows = grid
            .iter()
            .rev()
            .map(|line| {
                line.iter()
                    .map(|&c| match c {
                        EMPTY_CHAR => Ok(None),
                        '1' | '2' => Player::from_number(c as u8 - b'0').map(Some),
                        _ => Err(anyhow!("Invalid cell character: {}", c)),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(&rows)
    }

    /// One-line notation: `<columns>x<rows>` then rows top first joined by
    /// '/', with `x`/`o` for players one/two and digits for runs of empties
    pub fn to_fen(&self) -> String {
        let mut fen = format!("{}x{} ", self.columns, self.rows);

        for row in (0..self.rows).rev() {
            let mut empty_count = 0;
            for column in 0..self.columns {
                match self.get(column, row) {
                    Some(player) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(fen_char(player));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row > 0 {
                fen.push('/');
            }
        }

        fen
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut parts = fen.split_whitespace();

        let shape = parts.next().context("Missing board shape")?;
        let (columns, rows) = shape
            .split_once('x')
            .ok_or_else(|| anyhow!("Invalid board shape: {}", shape))?;
        let columns = columns.parse::<usize>().context("Invalid column count")?;
        let rows = rows.parse::<usize>().context("Invalid row count")?;
        validate_dimensions(columns, rows)?;

        let body = parts.next().context("Missing board rows")?;
        ensure!(parts.next().is_none(), "Trailing data after board rows");

        let lines = body.split('/').collect::<Vec<_>>();
        ensure!(
            lines.len() == rows,
            "Expected {} rows, found {}",
            rows,
            lines.len()
        );

        let mut grid = Vec::with_capacity(rows);
        for line in lines.iter().rev() {
            let mut cells = Vec::with_capacity(columns);
            let mut chars = line.chars().peekable();

            while let Some(c) = chars.next() {
                let remaining = columns - cells.len();
                match c {
                    'x' | 'o' => {
                        ensure!(remaining > 0, "Row longer than {} columns: {}", columns, line);
                        cells.push(Some(if c == 'x' { Player::One } else { Player::Two }));
                    }
                    d if d.is_ascii_digit() => {
                        let mut run = d.to_digit(10).unwrap_or(0) as usize;
                        while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                            run = run
                                .checked_mul(10)
                                .and_then(|run| run.checked_add(next as usize))
                                .filter(|&run| run <= remaining)
                                .with_context(|| format!("Row longer than {} columns: {}", columns, line))?;
                            chars.next();
                        }
                        ensure!(run <= remaining, "Row longer than {} columns: {}", columns, line);
                        cells.extend(std::iter::repeat(None).take(run));
                    }
                    _ => bail!("Invalid character in board rows: {}", c),
                }
            }

            ensure!(
                cells.len() == columns,
                "Invalid row length: expected {}, found {}",
                columns,
                cells.len()
            );
            grid.push(cells);
        }

        Self::from_rows(&grid)
    }

    /// Build from rows listed bottom first, checking the gravity invariant
    fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let num_rows = rows.len();
        let columns = rows.first().map_or(0, |row| row.len());
        let mut board = Board::new(columns, num_rows)?;

        for column in 0..columns {
            let mut floor_reached = false;
            for (row, cells) in rows.iter().enumerate() {
                match cells[column] {
                    Some(player) => {
                        ensure!(
                            !floor_reached,
                            "Floating piece at column {}, row {}",
                            column,
                            row
                        );
                        board.play(player, column)?;
                    }
                    None => floor_reached = true,
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_snapshot_layout() {
        let board = Board::new(4, 3).unwrap();
        let board = board.apply_move(Player::One, 1).unwrap();
        let board = board.apply_move(Player::Two, 1).unwrap();
        let board = board.apply_move(Player::One, 3).unwrap();

        assert_eq!(
            board.snapshot(),
            indoc! {"
                . . . .
                . 2 . .
                . 1 . 1
            "}
        );
    }

    #[test]
    fn test_snapshot_parse_matches_moves() {
        let parsed = Board::from_snapshot(indoc! {"
            . . .
            2 . .
            1 . 1
        "})
        .unwrap();

        let mut board = Board::new(3, 3).unwrap();
        board.play(Player::One, 0).unwrap();
        board.play(Player::Two, 0).unwrap();
        board.play(Player::One, 2).unwrap();

        assert_eq!(parsed, board);
    }

    #[test]
    fn test_floating_piece_rejected() {
        let result = Board::from_snapshot(indoc! {"
            . 1 .
            . . .
        "});
        assert!(result.is_err());
    }

    #[test]
    fn test_fen_empty_board() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(board.to_fen(), "7x6 7/7/7/7/7/7");
    }

    #[test]
    fn test_fen_pieces() {
        let board = Board::from_snapshot(indoc! {"
            . . . . . . .
            . . . 2 . . .
            . . 1 1 . . .
        "})
        .unwrap();

        assert_eq!(board.to_fen(), "7x3 7/3o3/2xx3");
        assert_eq!(Board::from_fen("7x3 7/3o3/2xx3").unwrap(), board);
    }

    #[test]
    fn test_fen_wide_rows() {
        let mut board = Board::new(12, 2).unwrap();
        board.play(Player::Two, 11).unwrap();

        let fen = board.to_fen();
        assert_eq!(fen, "12x2 12/11o");
        assert_eq!(Board::from_fen(&fen).unwrap(), board);
    }

    #[test]
    fn test_fen_errors() {
        assert!(Board::from_fen("").is_err());
        assert!(Board::from_fen("7by6 7/7").is_err());
        assert!(Board::from_fen("3x2 3").is_err());
        assert!(Board::from_fen("3x2 3/4").is_err());
        assert!(Board::from_fen("3x2 3/q2").is_err());
        assert!(Board::from_fen("3x2 x2/3").is_err());
        assert!(Board::from_fen("3x1 xxxx").is_err());
    }

    #[test]
    fn test_fen_rejects_oversized_input() {
        assert!(Board::from_fen("18446744073709551615x1 x").is_err());
        assert!(Board::from_fen("100000x100000 1").is_err());
        assert!(Board::from_fen("3x1 99999999999999999999").is_err());
        assert!(Board::from_fen("3x1 4").is_err());
    }
}
