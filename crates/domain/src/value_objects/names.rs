//! Display-name helpers for keys coming out of the character builder
//!
//! Exported skill and condition keys are camel-case identifiers
//! (`fieldMedicine`, `lossofconfidence`). Sheets show them as
//! space-separated, title-cased words.

/// Uppercase the first character, leave the rest untouched.
///
/// `"marine"` becomes `"Marine"`, `"mcDonald"` becomes `"McDonald"`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a camel-case key into a human-readable name.
///
/// Splits before every ASCII uppercase letter and at whitespace, drops empty
/// words, capitalizes each word and joins them with single spaces. Feeding
/// the output back in returns it unchanged.
pub fn display_name(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in key.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| capitalize_first(word))
        .collect::<Vec<_>>()
        .join(" ")
}
