use crate::engine::{Board, Cell, BOARD_SIZE};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents a row, starting from row 0. If fewer than
/// `BOARD_SIZE` rows are provided, the remaining rows are empty; likewise a
/// short row leaves the rest of that row empty.
///
/// Valid characters:
/// - 'B': a Black stone
/// - 'W': a White stone
/// - '.': an empty intersection
///
/// Any other character results in an error.
///
/// # Returns
/// * `Ok(Board)` on success.
/// * `Err(String)` if the input has more than `BOARD_SIZE` rows, a row
///   longer than `BOARD_SIZE` characters, or an unrecognized character.
///
/// # Examples
/// ```
/// use goban::utils::board_from_str_array;
/// use goban::engine::Cell;
///
/// let board = board_from_str_array(&[
///     "B.W",
///     ".B.",
/// ]).unwrap();
/// assert_eq!(board.get(0, 0), Cell::Black);
/// assert_eq!(board.get(0, 2), Cell::White);
/// assert_eq!(board.get(1, 0), Cell::Empty);
///
/// assert!(board_from_str_array(&["BXW"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, String> {
    if s.len() > BOARD_SIZE {
        return Err(format!(
            "Invalid number of rows. Expected at most {}, found {}",
            BOARD_SIZE,
            s.len()
        ));
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > BOARD_SIZE {
            return Err(format!(
                "Row {} is too long. Expected at most {} characters, found {}",
                r,
                BOARD_SIZE,
                row_str.chars().count()
            ));
        }

        for (c, ch) in row_str.chars().enumerate() {
            grid[r][c] = match ch {
                'B' => Cell::Black,
                'W' => Cell::White,
                '.' => Cell::Empty,
                _ => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        ch, r, c
                    ))
                }
            };
        }
    }

    Ok(Board::from_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&[
            "B.W.B.W.B",
            ".........",
            "W...B...W",
        ])
        .unwrap();
        assert_eq!(board.get(0, 0), Cell::Black);
        assert_eq!(board.get(0, 2), Cell::White);
        assert_eq!(board.get(1, 0), Cell::Empty);
        assert_eq!(board.get(2, 4), Cell::Black);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["B.W.X...."]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized character 'X'"));
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let too_long = "B".repeat(BOARD_SIZE + 1);
        let result = board_from_str_array(&[too_long.as_str()]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Row 0 is too long"));
    }

    #[test]
    fn test_board_from_str_array_too_many_rows() {
        let rows = vec!["B........"; BOARD_SIZE + 1];
        let result = board_from_str_array(&rows);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid number of rows"));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board = board_from_str_array(&[]).unwrap();
        assert_eq!(board, Board::new_empty());
    }

    #[test]
    fn test_board_from_str_array_partial_rows_and_cols() {
        let board = board_from_str_array(&["BW", "B"]).unwrap();
        assert_eq!(board.get(0, 0), Cell::Black);
        assert_eq!(board.get(0, 1), Cell::White);
        assert_eq!(board.get(0, 2), Cell::Empty);
        assert_eq!(board.get(1, 0), Cell::Black);
        assert_eq!(board.get(1, 1), Cell::Empty);
        assert_eq!(board.get(2, 0), Cell::Empty);
    }
}
