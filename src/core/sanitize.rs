// src/core/sanitize.rs

/// Collapse runs of whitespace (incl. NBSP) into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop every occurrence of `label` and trim what is left.
/// Empty remainder → None.
pub fn strip_label(text: &str, label: &str) -> Option<String> {
    let rest = normalize_ws(&text.replace(label, ""));
    if rest.is_empty() { None } else { Some(rest) }
}

/// Empty / whitespace-only → None, otherwise the normalized text.
pub fn non_empty(text: &str) -> Option<String> {
    let t = normalize_ws(text);
    if t.is_empty() { None } else { Some(t) }
}
