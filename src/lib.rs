//! Random password generation from a chosen set of character classes.

pub mod charset;
pub mod config;
pub mod password_generation;
mod session;

pub use charset::{Alphabet, CharacterClass};
pub use config::{ConfigError, GenerationConfig};
pub use session::{Session, SessionError};

/// Something that can show a transient message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str, is_error: bool);
}

/// Write access to the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Default, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Secret;

    #[test]
    fn secret_debug_hides_contents() {
        let secret = Secret::from("hunter2".to_owned());
        assert!(!format!("{:?}", secret).contains("hunter2"));
        assert_eq!(secret.as_str(), "hunter2");
    }
}
