//! Box-drawing rectangle rendering.

extern crate alloc;

use alloc::string::String;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Renders a `width` by `height` rectangle with box-drawing characters.
///
/// Corners use `┌ ┐ └ ┘`, edges `─` and `│`, and the interior is filled
/// with spaces; every row ends with a newline. On degenerate sizes where a
/// cell is both a corner and an edge, the corner wins and the top-left
/// corner wins over all, so `rectangle(1, 1)` is `"┌\n"`.
///
/// # Example
///
/// ```
/// assert_eq!(cardtext::rectangle(2, 2), "┌┐\n└┘\n");
/// assert_eq!(
///     cardtext::rectangle(6, 4),
///     "┌────┐\n\
///      │    │\n\
///      │    │\n\
///      └────┘\n",
/// );
/// ```
#[must_use]
pub fn rectangle(width: usize, height: usize) -> String {
    // Box-drawing characters are 3 bytes each in UTF-8.
    let mut out = String::with_capacity(height * (width * 3 + 1));

    for row in 0..height {
        for col in 0..width {
            let top = row == 0;
            let bottom = row == height - 1;
            let left = col == 0;
            let right = col == width - 1;

            let cell = if top && left {
                TOP_LEFT
            } else if top && right {
                TOP_RIGHT
            } else if bottom && left {
                BOTTOM_LEFT
            } else if bottom && right {
                BOTTOM_RIGHT
            } else if top || bottom {
                HORIZONTAL
            } else if left || right {
                VERTICAL
            } else {
                ' '
            };
            out.push(cell);
        }
        out.push('\n');
    }

    out
}
