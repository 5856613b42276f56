use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fit `s` into `max_width` terminal cells, ending in "…" when clipped.
pub fn fit_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Shorten an address to `0x1f98…F984`.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    } else {
        address.to_string()
    }
}

/// Rows `text` occupies when word-wrapped into `width` cells.
pub fn wrapped_line_count(text: &str, width: u16) -> usize {
    let width = usize::from(width.max(1));
    let mut rows = 0;

    for line in text.split('\n') {
        rows += 1;
        let mut used = 0;
        for word in line.split(' ') {
            let w = word.width();
            if used > 0 && used + 1 + w <= width {
                used += 1 + w;
                continue;
            }
            if used > 0 {
                rows += 1;
            }
            // words longer than a row break mid-word
            rows += w.saturating_sub(1) / width;
            used = if w == 0 { 0 } else { (w - 1) % width + 1 };
        }
    }
    rows
}
