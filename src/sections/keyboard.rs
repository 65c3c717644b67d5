//! Keyboard-walk detection on a staggered US QWERTY layout.
//!
//! Keys sit on a half-key grid: column `2 * index + row`, so each row is
//! shifted half a key right of the one above. A key's neighbours are the
//! keys two columns away on its row and one column away on the rows above
//! and below.

use super::patterns::{collect_runs, MIN_RUN_LENGTH};

/// (unshifted, shifted) characters per row, top to bottom.
const ROWS: [(&str, &str); 4] = [
    ("1234567890-=", "!@#$%^&*()_+"),
    ("qwertyuiop[]", "QWERTYUIOP{}"),
    ("asdfghjkl;'", "ASDFGHJKL:\""),
    ("zxcvbnm,./", "ZXCVBNM<>?"),
];

const DIRECTIONS: [(i32, i32); 6] = [(2, 0), (-2, 0), (1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Grid position of a key, shifted symbols sharing their key's slot.
fn key_position(c: char) -> Option<(i32, i32)> {
    ROWS.iter().enumerate().find_map(|(row, (plain, shifted))| {
        plain
            .chars()
            .position(|k| k == c)
            .or_else(|| shifted.chars().position(|k| k == c))
            .map(|index| (2 * index as i32 + row as i32, row as i32))
    })
}

fn direction(from: Option<(i32, i32)>, to: Option<(i32, i32)>) -> Option<(i32, i32)> {
    let (from, to) = (from?, to?);
    let delta = (to.0 - from.0, to.1 - from.1);
    DIRECTIONS.contains(&delta).then_some(delta)
}

/// Returns maximal straight-line walks of at least three adjacent keys,
/// as written in the password.
pub fn find_keyboard_patterns(password: &str) -> Vec<String> {
    let chars: Vec<char> = password.chars().collect();
    let positions: Vec<Option<(i32, i32)>> = chars.iter().map(|&c| key_position(c)).collect();
    collect_runs(&chars, &positions, MIN_RUN_LENGTH, |a, b| direction(*a, *b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_positions_are_staggered() {
        assert_eq!(key_position('1'), Some((0, 0)));
        assert_eq!(key_position('q'), Some((1, 1)));
        assert_eq!(key_position('a'), Some((2, 2)));
        assert_eq!(key_position('z'), Some((3, 3)));
        assert_eq!(key_position('Z'), key_position('z'));
        assert_eq!(key_position('!'), key_position('1'));
        assert_eq!(key_position('é'), None);
    }

    #[test]
    fn test_horizontal_walks() {
        assert_eq!(find_keyboard_patterns("qwerty"), vec!["qwerty"]);
        assert_eq!(find_keyboard_patterns("xxASDFxx"), vec!["ASDF"]);
        assert_eq!(find_keyboard_patterns("!@#$"), vec!["!@#$"]);
    }

    #[test]
    fn test_reversed_walks() {
        assert_eq!(find_keyboard_patterns("poiuy"), vec!["poiuy"]);
        assert_eq!(find_keyboard_patterns("mnbvc"), vec!["mnbvc"]);
    }

    #[test]
    fn test_diagonal_walks() {
        assert_eq!(find_keyboard_patterns("1qaz"), vec!["1qaz"]);
        assert_eq!(find_keyboard_patterns("qazwsx"), vec!["qaz", "wsx"]);
        assert_eq!(find_keyboard_patterns("zaq1"), vec!["zaq1"]);
    }

    #[test]
    fn test_direction_changes_break_walks() {
        // w -> a is diagonal, a -> s is horizontal
        assert!(find_keyboard_patterns("was").is_empty());
        assert!(find_keyboard_patterns("Password1!").is_empty());
        assert!(find_keyboard_patterns("qw").is_empty());
        assert!(find_keyboard_patterns("").is_empty());
    }
}
