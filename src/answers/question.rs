/// Reduce a spoken or tapped question to its keyword: the last
/// whitespace-delimited token, lowercased. `None` for blank input.
///
/// Purely positional, so multi-word concepts are never produced.
pub fn extract_keyword(question: &str) -> Option<String> {
    question.split_whitespace().last().map(str::to_lowercase)
}

/// Cut an encyclopedia extract down to its first sentence.
///
/// Ends at the first `.` (inclusive). No period keeps the whole text;
/// an empty or missing extract yields `None`.
pub fn simplify_extract(extract: Option<&str>) -> Option<String> {
    let extract = extract?;
    if extract.is_empty() {
        return None;
    }
    match extract.find('.') {
        Some(end) => Some(extract[..=end].to_string()),
        None => Some(extract.to_string()),
    }
}

/// Question asked when a suggestion or autoplay item is picked
pub fn question_for(item: &str) -> String {
    format!("what is {}", item)
}
