//! The fixed character classes, and the alphabets built from them.

use std::fmt;

use crate::GenerationConfig;

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static NUMBERS: &str = "0123456789";
static SYMBOLS: &str = "~!@#$%^&*-_:;,.?";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order their characters are concatenated into an alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Numbers,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters",
            CharacterClass::Lowercase => "Lowercase letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A non-empty set of characters to sample passwords from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Returns `None` if `chars` is empty.
    pub fn new(chars: Vec<char>) -> Option<Alphabet> {
        if chars.is_empty() {
            None
        } else {
            Some(Alphabet(chars))
        }
    }

    /// Concatenate the characters of every class enabled in `config`.
    ///
    /// Returns `None` if no class is enabled.
    pub fn from_config(config: &GenerationConfig) -> Option<Alphabet> {
        let mut chars = Vec::new();
        for class in config.enabled_classes() {
            chars.extend(class.characters().chars());
        }
        let alphabet = Alphabet::new(chars)?;
        log::debug!("built an alphabet of {} characters", alphabet.len());
        Some(alphabet)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }
}
