/// One entry per character; spaces turn into no-break spaces so the
/// inline-block spans keep their width.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{00A0}' } else { c })
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_characters() {
        assert_eq!(split_chars("Go!"), vec!["G", "o", "!"]);
    }

    #[test]
    fn spaces_become_no_break_spaces() {
        let chars = split_chars("a b");
        assert_eq!(chars.len(), 3);
        assert_eq!(chars[1], "\u{00A0}");
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(split_chars("héllo").len(), 5);
        assert!(split_chars("").is_empty());
    }
}
