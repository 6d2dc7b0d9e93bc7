use rand::{CryptoRng, Rng};

use crate::password_generation::generate_random_password;
use crate::{Alphabet, Clipboard, GenerationConfig, Notifier, Secret};

pub(crate) static NO_CLASS_SELECTED: &str =
    "To generate a password you must select at least one character type";
pub(crate) static GENERATED: &str = "Password generated successfully";
pub(crate) static NOTHING_TO_COPY: &str = "Nothing to copy yet; generate a password first";
pub(crate) static COPIED: &str = "Password copied to the clipboard";

/// The generator's state: the current settings, and the most recently generated password.
///
/// The password starts out empty, and every successful generation replaces it.
#[derive(Debug, Default)]
pub struct Session {
    config: GenerationConfig,
    password: Secret,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Session {
        Session {
            config,
            password: Secret::default(),
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GenerationConfig {
        &mut self.config
    }

    pub fn password(&self) -> &Secret {
        &self.password
    }

    /// Generate a new password from the current settings, replacing the stored one.
    ///
    /// If no character class is enabled, or the length is over
    /// [`GenerationConfig::LENGTH_LIMIT`], nothing is generated and the stored password is left
    /// alone.
    pub fn generate<R, N>(&mut self, rng: &mut R, notifier: &mut N) -> Result<&Secret, SessionError>
    where
        R: Rng + CryptoRng,
        N: Notifier + ?Sized,
    {
        let alphabet = match Alphabet::from_config(&self.config) {
            Some(a) => a,
            None => {
                notifier.notify(NO_CLASS_SELECTED, true);
                return Err(SessionError::NoCharacterClassSelected);
            }
        };
        if !self.config.length_within_limit() {
            notifier.notify(
                &format!(
                    "A password can be at most {} characters long",
                    GenerationConfig::LENGTH_LIMIT
                ),
                true,
            );
            return Err(SessionError::LengthTooLong(self.config.length));
        }
        if !self.config.length_in_recommended_range() {
            log::warn!(
                "generating a password of length {}, outside the recommended {}..={}",
                self.config.length,
                GenerationConfig::MIN_LENGTH,
                GenerationConfig::MAX_LENGTH,
            );
        }
        log::debug!(
            "generating {} characters from an alphabet of {}",
            self.config.length,
            alphabet.len()
        );
        self.password = generate_random_password(rng, &alphabet, self.config.length);
        notifier.notify(GENERATED, false);
        Ok(&self.password)
    }

    /// Copy the stored password to the clipboard.
    ///
    /// Refuses, without touching the clipboard, if nothing has been generated yet.
    pub fn copy_to_clipboard<C, N>(
        &self,
        clipboard: &mut C,
        notifier: &mut N,
    ) -> Result<(), SessionError>
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.password.is_empty() {
            notifier.notify(NOTHING_TO_COPY, true);
            return Err(SessionError::NothingToCopy);
        }
        if let Err(err) = clipboard.write_text(self.password.as_str()) {
            notifier.notify(&format!("Failed to copy to the clipboard: {err:#}"), true);
            return Err(SessionError::Clipboard(err));
        }
        notifier.notify(COPIED, false);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no character class was selected")]
    NoCharacterClassSelected,
    #[error("a length of {0} is over the limit")]
    LengthTooLong(usize),
    #[error("no password has been generated yet")]
    NothingToCopy,
    #[error("failed to write to the clipboard")]
    Clipboard(#[source] anyhow::Error),
}
