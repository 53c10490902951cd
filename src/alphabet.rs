//! The fixed 26-symbol alphabet `A..=Z`.
//!
//! Provides the bijection between symbols and indices `0..26` used by the
//! shift cipher and the frequency scorer.

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Symbols in index order.
pub const SYMBOLS: [char; ALPHABET_SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the index of `symbol` in the alphabet, or `None` if it is not
/// one of `A..=Z`.
///
/// Lowercase letters are not members; callers uppercase first.
///
/// # Examples
///
/// ```
/// use caesarbreak::alphabet::index_of;
///
/// assert_eq!(index_of('A'), Some(0));
/// assert_eq!(index_of('Z'), Some(25));
/// assert_eq!(index_of('a'), None);
/// assert_eq!(index_of('Ñ'), None);
/// ```
pub fn index_of(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some((symbol as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Returns the symbol at `index`, reduced modulo the alphabet size.
pub fn symbol_at(index: usize) -> char {
    SYMBOLS[index % ALPHABET_SIZE]
}

/// Returns `true` if `symbol` belongs to the alphabet.
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bijection() {
        for (i, &symbol) in SYMBOLS.iter().enumerate() {
            assert_eq!(index_of(symbol), Some(i));
            assert_eq!(symbol_at(i), symbol);
        }
    }

    #[test]
    fn test_symbol_at_wraps() {
        assert_eq!(symbol_at(26), 'A');
        assert_eq!(symbol_at(27), 'B');
    }

    #[test]
    fn test_non_members() {
        for c in ['a', 'z', '0', ' ', '@', '[', 'É', 'ß'] {
            assert!(!contains(c), "{:?} should not be in the alphabet", c);
        }
    }
}
