// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTML escaping for text interpolated into markup.

use std::borrow::Cow;

/// Replace `&`, `<`, `>` and `"` with their entity references.
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_four_characters() {
        assert_eq!(escape_html(r#"A & B <x> "q""#), "A &amp; B &lt;x&gt; &quot;q&quot;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("Griha Pravesh"), Cow::Borrowed(_)));
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        // Text that looks like an entity is still literal text.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn single_quote_and_unicode_pass_through() {
        assert_eq!(escape_html("Naamkaran's पूजा"), "Naamkaran's पूजा");
    }
}
