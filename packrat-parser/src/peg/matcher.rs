//! Terminal atom matching
//!
//! A terminal is matched by an anchored regex of the form
//! `\A(?:<whitespace>)(<pattern>)`: the grammar's whitespace-skip pattern is
//! consumed first, then the terminal itself is captured as group 1. The match
//! is anchored at the start of the remaining input, never a search.

use regex::Regex;

/// Match one terminal against the head of `text`.
///
/// On success returns `(leaf, remainder)`: the captured terminal text
/// (whitespace excluded) and the input after the full match (whitespace
/// included). A zero-width match is a success with an empty leaf, distinct
/// from `None`.
pub fn match_terminal<'t>(re: &Regex, text: &'t str) -> Option<(&'t str, &'t str)> {
    let caps = re.captures(text)?;
    let full = caps.get(0).unwrap();
    let leaf = caps.get(1).map_or("", |m| m.as_str());
    Some((leaf, &text[full.end()..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peg::grammar::compile_terminal;

    fn matcher(atom: &str, whitespace: &str) -> Regex {
        compile_terminal(atom, whitespace).unwrap()
    }

    #[test]
    fn test_match_at_start() {
        let re = matcher(r"[a-z]+", r"\s*");
        assert_eq!(match_terminal(&re, "abc def"), Some(("abc", " def")));
    }

    #[test]
    fn test_leading_whitespace_is_consumed_but_not_captured() {
        let re = matcher(r"[a-z]+", r"\s*");
        assert_eq!(match_terminal(&re, "   abc"), Some(("abc", "")));
    }

    #[test]
    fn test_anchored_no_mid_string_search() {
        let re = matcher(r"[0-9]+", r"\s*");
        assert_eq!(match_terminal(&re, "x42"), None);
    }

    #[test]
    fn test_zero_width_match_is_a_success() {
        let re = matcher(r"[0-9]*", r"\s*");
        assert_eq!(match_terminal(&re, "abc"), Some(("", "abc")));
    }

    #[test]
    fn test_whitespace_pattern_is_configurable() {
        // A space-only skip pattern must not consume newlines.
        let re = matcher(r"[a-z]+", r"[ ]*");
        assert_eq!(match_terminal(&re, "  abc"), Some(("abc", "")));
        assert_eq!(match_terminal(&re, "\nabc"), None);
    }

    #[test]
    fn test_no_match_is_none() {
        let re = matcher(r"[0-9]+", r"\s*");
        assert_eq!(match_terminal(&re, "abc"), None);
    }
}
