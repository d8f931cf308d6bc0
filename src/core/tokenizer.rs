use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-zA-Z]+").unwrap())
}

/// 將一行文字轉小寫後，逐一取出連續的 ASCII 字母
///
/// The iterator owns the lowercased line, so it can outlive the input slice.
/// It is single pass; call [`tokenize`] again to restart.
#[derive(Debug, Clone)]
pub struct Tokens {
    line: String,
    pos: usize,
}

impl Iterator for Tokens {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.line.len() {
            return None;
        }
        let found = word_pattern().find_at(&self.line, self.pos)?;
        self.pos = found.end();
        Some(found.as_str().to_string())
    }
}

pub fn tokenize(line: &str) -> Tokens {
    Tokens {
        line: line.to_lowercase(),
        pos: 0,
    }
}

/// Splits a raw file body into lines.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line, and a trailing
/// terminator does not produce an extra empty line. Bytes that are not valid
/// UTF-8 are replaced, which never affects tokens since only ASCII letters are
/// kept.
pub fn lines_of(data: &[u8]) -> impl Iterator<Item = Cow<'_, str>> {
    let mut rest = data;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        let (line, next) = match current.iter().position(|b| *b == b'\n' || *b == b'\r') {
            Some(end) => {
                let crlf = current[end] == b'\r' && current.get(end + 1) == Some(&b'\n');
                let skip = if crlf { 2 } else { 1 };
                (&current[..end], &current[end + skip..])
            }
            None => (current, &current[current.len()..]),
        };
        rest = next;
        Some(String::from_utf8_lossy(line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<String> {
        tokenize(line).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_non_letters() {
        assert_eq!(
            collect("The cat sat on the mat."),
            vec!["the", "cat", "sat", "on", "the", "mat"]
        );
        assert_eq!(collect("Go go GO!"), vec!["go", "go", "go"]);
    }

    #[test]
    fn test_tokenize_drops_digits_hyphens_and_accents() {
        assert_eq!(collect("abc123def"), vec!["abc", "def"]);
        assert_eq!(collect("well-known"), vec!["well", "known"]);
        assert_eq!(collect("café naïve"), vec!["caf", "na", "ve"]);
        assert_eq!(collect("don't"), vec!["don", "t"]);
    }

    #[test]
    fn test_tokenize_empty_and_letterless_lines() {
        assert!(collect("").is_empty());
        assert!(collect("  42 -- !? \t").is_empty());
    }

    #[test]
    fn test_tokens_are_never_empty_and_only_lowercase_letters() {
        for token in tokenize("MiXeD_case,Words;and 99 Numbers\u{00C9}") {
            assert!(!token.is_empty());
            assert!(token.chars().all(|c| c.is_ascii_lowercase()), "{token}");
        }
    }

    #[test]
    fn test_tokens_outlive_input() {
        let tokens = {
            let owned = String::from("Hello World");
            tokenize(&owned)
        };
        assert_eq!(tokens.collect::<Vec<_>>(), vec!["hello", "world"]);
    }

    #[test]
    fn test_lines_of_handles_terminators() {
        let lines: Vec<_> = lines_of(b"one\r\ntwo\n\nthree\n").collect();
        assert_eq!(lines, vec!["one", "two", "", "three"]);

        let lines: Vec<_> = lines_of(b"no newline").collect();
        assert_eq!(lines, vec!["no newline"]);

        assert_eq!(lines_of(b"").count(), 0);
        assert_eq!(lines_of(b"\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn test_lines_of_splits_on_bare_carriage_return() {
        let lines: Vec<_> = lines_of(b"the\ron\r").collect();
        assert_eq!(lines, vec!["the", "on"]);

        let lines: Vec<_> = lines_of(b"a\r\rb\r\nc\nd").collect();
        assert_eq!(lines, vec!["a", "", "b", "c", "d"]);
    }

    #[test]
    fn test_lines_of_tolerates_single_byte_encodings() {
        // Latin-1 "café" followed by a plain word
        let lines: Vec<_> = lines_of(b"caf\xe9 Latin\n").collect();
        assert_eq!(lines.len(), 1);
        let tokens: Vec<_> = tokenize(&lines[0]).collect();
        assert_eq!(tokens, vec!["caf", "latin"]);
    }
}
