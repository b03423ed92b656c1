//! Splitting session input into words
//!
//! Words are separated by whitespace. Single or double quotes group words,
//! and a backslash escapes the next character outside single quotes.

use crate::error::{WarikanError, WarikanResult};

pub fn split_words(line: &str) -> WarikanResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err(WarikanError::Session("trailing backslash".into())),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(WarikanError::Session("unterminated quote".into()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
