use crate::Position;
use crate::width::{display_width, pad_right};

/// Place a (possibly multi-line) block horizontally inside `width` cells.
///
/// Lines are first padded to the block's widest line so the block keeps its
/// shape; the block is then shifted according to `position`. A block wider than
/// `width` is returned with its lines equalized but otherwise untouched.
pub fn place_horizontal(width: u16, position: Position, text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let block = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let gap = (width as usize).saturating_sub(block);
    let (left, right) = match position {
        Position::Left => (0, gap),
        Position::Center => (gap / 2, gap - gap / 2),
        Position::Right => (gap, 0),
    };
    lines
        .iter()
        .map(|line| {
            let mut out = " ".repeat(left);
            out.push_str(&pad_right(line, block));
            out.push_str(&" ".repeat(right));
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_center_right() {
        assert_eq!(place_horizontal(6, Position::Left, "ab"), "ab    ");
        assert_eq!(place_horizontal(6, Position::Right, "ab"), "    ab");
        assert_eq!(place_horizontal(7, Position::Center, "ab"), "  ab   ");
    }

    #[test]
    fn keeps_block_shape() {
        let placed = place_horizontal(6, Position::Right, "abc\na");
        assert_eq!(placed, "   abc\n   a  ");
    }

    #[test]
    fn wider_block_is_not_cut() {
        assert_eq!(place_horizontal(2, Position::Center, "abcd"), "abcd");
    }
}
