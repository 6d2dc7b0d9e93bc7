use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;

use passgen::{CharacterClass, GenerationConfig, Session};

mod clipboard;
mod interactive;
mod notify;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords from selected character classes")]
enum Args {
    /// Generate one password and print it to stdout.
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        options: GenerateOptions,
        /// Also copy the password to the clipboard.
        #[arg(short, long)]
        copy: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Fill in the generator form interactively: toggle character classes, set the length, then
    /// generate and copy passwords.
    Interactive {
        #[command(flatten)]
        options: GenerateOptions,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the character classes and the characters each one contributes.
    Classes,
}

/// Settings given on the command line; these override the config file.
#[derive(clap::Args, Debug, Default)]
struct GenerateOptions {
    /// Number of characters in the password (8 to 26 recommended).
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u64).range(1..=GenerationConfig::LENGTH_LIMIT as u64)
    )]
    length: Option<u64>,
    /// Include uppercase letters.
    #[arg(short = 'U', long)]
    uppercase: bool,
    /// Include lowercase letters.
    #[arg(short = 'L', long)]
    lowercase: bool,
    /// Include numbers.
    #[arg(short = 'N', long)]
    numbers: bool,
    /// Include symbols.
    #[arg(short = 'S', long)]
    symbols: bool,
}

impl GenerateOptions {
    /// Apply these options on top of `config`.
    ///
    /// If any class flag is given, exactly the flagged classes are enabled; otherwise the
    /// config's own selection stands.
    fn apply_to(&self, config: &mut GenerationConfig) -> anyhow::Result<()> {
        if let Some(length) = self.length {
            config.length = usize::try_from(length)
                .with_context(|| format!("a length of {length} does not fit this platform"))?;
        }
        let flags = [
            (CharacterClass::Uppercase, self.uppercase),
            (CharacterClass::Lowercase, self.lowercase),
            (CharacterClass::Numbers, self.numbers),
            (CharacterClass::Symbols, self.symbols),
        ];
        if flags.iter().any(|(_, set)| *set) {
            for (class, set) in flags {
                config.set_class(class, set);
            }
        }
        Ok(())
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate {
            options,
            copy,
            config,
        } => {
            let mut session = Session::new(load_config(config.as_deref(), &options)?);
            let mut notifier = notify::TerminalNotifier;
            let mut rng = rand::thread_rng();
            let password = session.generate(&mut rng, &mut notifier)?;
            println!("{}", password.as_str());
            if copy {
                session.copy_to_clipboard(&mut clipboard::SystemClipboard, &mut notifier)?;
            }
        }
        Args::Interactive { options, config } => {
            let session = Session::new(load_config(config.as_deref(), &options)?);
            interactive::run_form(session)?;
        }
        Args::Classes => {
            table::display_classes(std::io::stdout()).context("failed to output table")?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        log::debug!("exiting with {err:?}");
        if let Some(message) = error_message(&err) {
            eprintln!("{message}");
        }
        process::exit(1);
    }
}

/// The message to print on exit, if the user hasn't already been told through the notifier.
fn error_message(err: &ProgError) -> Option<String> {
    match err {
        ProgError::Session(_) => None,
        _ => Some(err.to_string()),
    }
}

fn load_config(
    config_path: Option<&Path>,
    options: &GenerateOptions,
) -> Result<GenerationConfig, ProgError> {
    let mut config = match config_path {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::load_or_default(&default_config()?)?,
    };
    options.apply_to(&mut config)?;
    Ok(config)
}

fn default_config() -> anyhow::Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot find home directory of user"))?;
    let default_path = {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("passgen");
        p.push("config.yaml");
        p
    };
    Ok(default_path)
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}.")]
    Session(#[from] passgen::SessionError),
    #[error("Config error: {0}")]
    Config(#[from] passgen::ConfigError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
