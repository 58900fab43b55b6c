use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Placement, Square};

/// The standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 0 1";

fn parse_placement(field: &str) -> Result<Placement, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidRankCount { found: rows.len() });
    }

    let mut placement = Placement::empty();
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = 7 - row_idx;
        let mut file = 0;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
                continue;
            }
            let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let square = Square::new(rank, file).ok_or(FenError::InvalidRankWidth {
                rank: rank + 1,
                files: file + 1,
            })?;
            placement.set(square, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::InvalidRankWidth {
                rank: rank + 1,
                files: file,
            });
        }
    }

    for color in Color::BOTH {
        let kings = placement.count(color, PieceKind::King);
        if kings != 1 {
            return Err(FenError::InvalidKingCount {
                color,
                found: kings,
            });
        }
    }
    Ok(placement)
}

fn parse_side(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

fn parse_clock(field: Option<&str>, default: u32, min: u32) -> Result<u32, FenError> {
    let Some(field) = field else {
        return Ok(default);
    };
    match field.parse::<u32>() {
        Ok(value) if value >= min => Ok(value),
        _ => Err(FenError::InvalidClock {
            found: field.to_string(),
        }),
    }
}

// Castling and en passant are not played, but a standard FEN carrying them
// must still be well formed. Each castling right appears at most once.
fn check_castling(field: &str) -> Result<(), FenError> {
    let mut seen = [false; 4];
    let valid = field == "-"
        || (!field.is_empty()
            && field.chars().all(|c| match "KQkq".find(c) {
                Some(i) => !std::mem::replace(&mut seen[i], true),
                None => false,
            }));
    if valid {
        Ok(())
    } else {
        Err(FenError::InvalidCastling {
            found: field.to_string(),
        })
    }
}

fn check_en_passant(field: &str) -> Result<(), FenError> {
    if field == "-" || field.parse::<Square>().is_ok() {
        Ok(())
    } else {
        Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        })
    }
}

impl Board {
    /// Parse a position string.
    ///
    /// The native form is `<placement> <turn> <halfmove> <fullmove>`; the
    /// counters are optional and default to `0` and `1`. Standard six-field
    /// FEN is accepted too, with its castling and en passant fields checked
    /// for shape and otherwise ignored.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::{Board, Color};
    ///
    /// let board = Board::try_from_fen("4k3/8/8/8/8/8/4P3/4K3 b 3 12").unwrap();
    /// assert_eq!(board.side_to_move(), Color::Black);
    /// assert_eq!(board.fullmove_number(), 12);
    /// ```
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let placement = parse_placement(parts[0])?;
        let side_to_move = parse_side(parts[1])?;

        let clocks = if parts.len() >= 5 {
            check_castling(parts[2])?;
            check_en_passant(parts[3])?;
            &parts[4..]
        } else {
            &parts[2..]
        };
        let halfmove_clock = parse_clock(clocks.first().copied(), 0, 0)?;
        let fullmove_number = parse_clock(clocks.get(1).copied(), 1, 1)?;

        Ok(Board {
            placement,
            side_to_move,
            halfmove_clock,
            fullmove_number,
            ..Board::empty()
        })
    }

    /// Parse a position string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace the whole game state with the given position.
    ///
    /// History and captured pieces are cleared. On error the board is left
    /// untouched.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// The piece placement field only, rank 8 first.
    #[must_use]
    pub fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Serialize to the native `<placement> <turn> <halfmove> <fullmove>` form.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {}",
            self.placement_fen(),
            self.side_to_move.fen_char(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
