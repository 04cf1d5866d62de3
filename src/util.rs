/// Finds the length of the common prefix between a key and a node's label.
///
/// Comparison is byte-exact; no case folding or normalization happens here.
pub fn prefix_match(key: &[u8], label: &[u8]) -> usize {
    key.iter()
        .zip(label.iter())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Renders raw key bytes for log output.
pub fn display_key(key: &[u8]) -> std::borrow::Cow<'_, str> {
    String::from_utf8_lossy(key)
}
