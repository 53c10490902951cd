//! ShiftCodec: the Caesar substitution transform.
//!
//! Every symbol of `A..=Z` is moved `shift` places along the alphabet with
//! wrap-around; anything else passes through untouched. Input is uppercased
//! before the transform, so `decode(encode(t, k), k) == t.to_uppercase()`.

use crate::alphabet::{self, ALPHABET_SIZE};

/// Direction of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// Shifts a single symbol by `shift` places.
///
/// Symbols outside `A..=Z` are returned unchanged. Negative and
/// out-of-range shifts are reduced modulo 26 with a non-negative result.
///
/// # Examples
///
/// ```
/// use caesarbreak::shift_codec::shift_symbol;
///
/// assert_eq!(shift_symbol('A', 3), 'D');
/// assert_eq!(shift_symbol('Z', 1), 'A');
/// assert_eq!(shift_symbol('A', -1), 'Z');
/// assert_eq!(shift_symbol('!', 7), '!');
/// ```
pub fn shift_symbol(symbol: char, shift: i64) -> char {
    match alphabet::index_of(symbol) {
        Some(index) => {
            let offset = shift.rem_euclid(ALPHABET_SIZE as i64) as usize;
            alphabet::symbol_at(index + offset)
        }
        None => symbol,
    }
}

fn transform(text: &str, shift: i64, direction: Direction) -> String {
    let offset = match direction {
        Direction::Encode => shift,
        // Reduced before negation; `-i64::MIN` overflows.
        Direction::Decode => -shift.rem_euclid(ALPHABET_SIZE as i64),
    };
    text.to_uppercase()
        .chars()
        .map(|c| shift_symbol(c, offset))
        .collect()
}

/// Encodes `text` with key `shift`.
///
/// # Parameters
/// - `text`: Any Unicode text. It is uppercased before ciphering.
/// - `shift`: The key. Any integer; it is reduced modulo 26.
///
/// # Returns
/// The uppercased text with every `A..=Z` symbol moved forward by `shift`.
///
/// # Examples
///
/// ```
/// use caesarbreak::shift_codec::encode;
///
/// assert_eq!(encode("Hello, World!", 3), "KHOOR, ZRUOG!");
/// ```
pub fn encode(text: &str, shift: i64) -> String {
    transform(text, shift, Direction::Encode)
}

/// Decodes `text` that was encoded with key `shift`.
///
/// Exact inverse of [`encode`] up to case folding.
///
/// # Examples
///
/// ```
/// use caesarbreak::shift_codec::decode;
///
/// assert_eq!(decode("KHOOR, ZRUOG!", 3), "HELLO, WORLD!");
/// ```
pub fn decode(text: &str, shift: i64) -> String {
    transform(text, shift, Direction::Decode)
}
