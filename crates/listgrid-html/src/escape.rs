//! HTML escaping and the column cleaning policy.

/// How a column's value is cleaned before it reaches the page.
///
/// `Escape` replaces markup-significant characters with entities and is the
/// default (and only implemented) policy. `Sanitize` is the place a
/// strip-scripts-keep-markup mode would plug in for columns holding valid
/// HTML; no column configuration selects it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanPolicy {
    /// Escape all markup-significant characters.
    #[default]
    Escape,
}

/// Escape a string for safe inclusion in HTML text or attribute content.
///
/// # Examples
///
/// ```
/// use listgrid_html::escape;
///
/// assert_eq!(escape("Jane <script>"), "Jane &lt;script&gt;");
/// assert_eq!(escape("a & b"), "a &amp; b");
/// ```
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Clean a column value according to a policy.
#[must_use]
pub fn clean(input: &str, policy: CleanPolicy) -> String {
    match policy {
        CleanPolicy::Escape => escape(input),
    }
}

/// Truncate to at most `length` characters, appending an ellipsis when
/// something was cut. Operates on characters, not bytes, so multi-byte
/// text never splits mid-codepoint.
#[must_use]
pub fn truncate_text(input: &str, length: usize) -> String {
    if input.chars().count() <= length {
        return input.to_string();
    }
    let kept = length.saturating_sub(1);
    let mut out: String = input.chars().take(kept).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("<b>&\"'</b>"), "&lt;b&gt;&amp;&quot;&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("plain text"), "plain text");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_unicode_preserved() {
        assert_eq!(escape("naïve…"), "naïve…");
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_text("short", 50), "short");
        assert_eq!(truncate_text("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_appends_ellipsis() {
        assert_eq!(truncate_text("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate_text("ééééé", 3), "éé…");
    }

    #[test]
    fn test_clean_default_policy_escapes() {
        assert_eq!(clean("<i>", CleanPolicy::default()), "&lt;i&gt;");
    }
}
