//! src/domain/name.rs
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter your name.")]
    Empty,
    #[error("A name must not be more than 256 characters long.")]
    TooLong,
    #[error("A name must not contain any of the following characters: '/' '(' ')' '\"' '<' '>' '\\' '{{' '}}'")]
    InvalidCharacters,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Name(String);

impl Name {
    pub fn parse(s: String) -> Result<Self, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Empty);
        }

        // Length is counted in extended graphemes so that `å` written as
        // `a` + combining ring counts once.
        if s.graphemes(true).count() > 256 {
            return Err(Error::TooLong);
        }

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        if s.chars().any(|c| forbidden_characters.contains(&c)) {
            return Err(Error::InvalidCharacters);
        }

        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
