//! Text rendering for the console.

use strictly_match::{Board, Position};

/// Draws the board in the large 3x3 layout, blanks for open squares.
pub fn draw_board(board: &Board) -> String {
    let spacer = "     |     |";
    let divider = "-----+-----+-----";
    let rows: Vec<String> = Position::ALL
        .chunks(3)
        .map(|row| {
            let [a, b, c] = [row[0], row[1], row[2]].map(|pos| board.get(pos));
            format!("{spacer}\n  {a}  |  {b}  |  {c}\n{spacer}")
        })
        .collect();
    rows.join(&format!("\n{divider}\n"))
}

/// Joins items for a prompt: "1", "1 or 2", "1, 2, or 3".
pub fn joinor<T: ToString>(values: &[T], separator: &str, final_word: &str) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    match items.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {final_word} {second}"),
        [init @ .., last] => format!(
            "{}{separator} {final_word} {last}",
            init.join(&format!("{separator} "))
        ),
    }
}
