/// Lowercases and collapses whitespace runs so matching is insensitive to
/// case and spacing.
pub fn normalize(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Substring match of any keyword against the text, after normalizing both.
/// Not word-boundary aware: short keywords such as `tm` also hit inside
/// longer tokens.
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let haystack = normalize(text);
    keywords
        .iter()
        .any(|keyword| haystack.contains(normalize(keyword.as_ref()).as_str()))
}
