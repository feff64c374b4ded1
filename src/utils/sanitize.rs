//! Text cleaning for catalog fields.
//!
//! Removes punctuation and symbols from free-text fields (title, author,
//! publisher) when the import runs with `--sanitize-text`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is not a word character or whitespace.
///
/// Word characters are Unicode letters, digits and the underscore, so accented
/// names survive cleaning.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("NON_WORD pattern is valid"));

/// Strips every character that is not a letter, digit, underscore or whitespace.
///
/// # Examples
///
/// ```
/// use book_import::utils::sanitize::clean_text;
///
/// assert_eq!(clean_text("Harry Potter & the Sorcerer's Stone"), "Harry Potter  the Sorcerers Stone");
/// ```
pub fn clean_text(input: &str) -> String {
    NON_WORD.replace_all(input, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_removes_punctuation() {
        assert_eq!(clean_text("Dr. Seuss!"), "Dr Seuss");
        assert_eq!(clean_text("O'Reilly & Associates"), "OReilly  Associates");
    }

    #[test]
    fn test_clean_text_keeps_word_chars_and_whitespace() {
        assert_eq!(clean_text("snake_case 42\tTabbed"), "snake_case 42\tTabbed");
    }

    #[test]
    fn test_clean_text_keeps_unicode_letters() {
        assert_eq!(clean_text("Gabriel García Márquez"), "Gabriel García Márquez");
        assert_eq!(clean_text("Émile Zola — L'Œuvre"), "Émile Zola  LŒuvre");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("?!.,"), "");
    }
}
