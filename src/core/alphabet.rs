//! Letters accepted from the keyboard

/// The 26 letters a player can type
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Lowercase a key press, returning `None` if it is not one of [`ALPHABET`]
#[inline]
#[must_use]
pub fn normalize_letter(key: char) -> Option<char> {
    let letter = key.to_ascii_lowercase();
    ALPHABET.contains(&letter).then_some(letter)
}
