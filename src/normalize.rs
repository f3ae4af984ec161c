/// Decode Latin-1 bytes. Every byte value maps to the code point of the
/// same value, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Lowercase the text and delete every ASCII punctuation character.
/// Deletion is character-level: whitespace is untouched, so adjacent words
/// are neither joined nor split by the removal.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
