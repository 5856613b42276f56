use std::borrow::Cow;

/// Descriptions longer than this are collapsed by default.
pub const TRUNCATE_CHARACTER_COUNT: usize = 400;

pub const ELLIPSIS: &str = "...";

/// Result of [`truncate`]: the text to display and whether it was cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation<'a> {
    pub text: Cow<'a, str>,
    pub truncated: bool,
}

/// True when `text` has more than `limit` characters.
pub fn should_truncate(text: &str, limit: usize) -> bool {
    text.chars().nth(limit).is_some()
}

/// Cut `desc` to at most `limit` characters, backing up to the last space so
/// no word is split, then append `...`.
///
/// Callers check [`should_truncate`] first; this always cuts. When the prefix
/// holds no space the cut falls one character short of the prefix end.
pub fn truncate_description(desc: &str, limit: usize) -> String {
    let prefix_end = desc
        .char_indices()
        .nth(limit)
        .map(|(idx, _)| idx)
        .unwrap_or(desc.len());
    let prefix = &desc[..prefix_end];

    let cut = match prefix.rfind(' ') {
        Some(space) => space,
        None => prefix.char_indices().last().map(|(idx, _)| idx).unwrap_or(0),
    };

    format!("{}{}", &prefix[..cut], ELLIPSIS)
}

/// Length check plus cut in one step.
pub fn truncate(text: &str, limit: usize) -> Truncation<'_> {
    if should_truncate(text, limit) {
        Truncation {
            text: Cow::Owned(truncate_description(text, limit)),
            truncated: true,
        }
    } else {
        Truncation {
            text: Cow::Borrowed(text),
            truncated: false,
        }
    }
}
