pub type Token = String;

pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits on runs of whitespace and lowercases each fragment.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text)
    }
}

/// Materializes every lowercased whitespace-delimited token of `text`, in order.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split(is_separator)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// Unicode White_Space plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(tokenize("Hello, world!"), vec!["hello,", "world!"]);
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(tokenize("ÉLAN Straße"), vec!["élan", "straße"]);
    }

    #[test]
    fn information_separators_split_tokens() {
        assert_eq!(
            tokenize("a\u{1c}b\u{1d}\u{1e}C\u{1f} d"),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn unicode_spaces_split_tokens() {
        assert_eq!(
            tokenize("one\u{a0}two\u{2028}three\u{3000}four"),
            vec!["one", "two", "three", "four"]
        );
    }
}
