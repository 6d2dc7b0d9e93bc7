//! The interactive generator form.

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;

use passgen::{CharacterClass, GenerationConfig, Session};

use crate::clipboard::SystemClipboard;
use crate::notify::TerminalNotifier;
use crate::ProgError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Generate,
    Copy,
    ChooseClasses,
    SetLength,
    Quit,
}

impl Action {
    const MENU: [Action; 5] = [
        Action::Generate,
        Action::Copy,
        Action::ChooseClasses,
        Action::SetLength,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Generate => "Generate password",
            Action::Copy => "Copy password to clipboard",
            Action::ChooseClasses => "Choose character types",
            Action::SetLength => "Set password length",
            Action::Quit => "Quit",
        }
    }
}

pub(crate) fn run_form(mut session: Session) -> Result<(), ProgError> {
    let theme = ColorfulTheme::default();
    let mut rng = rand::thread_rng();
    let mut notifier = TerminalNotifier;
    let mut clipboard = SystemClipboard;

    loop {
        show_state(&session);
        let labels = Action::MENU.map(Action::label);
        let selection = dialoguer::Select::with_theme(&theme)
            .items(&labels[..])
            .default(0)
            .interact_opt()
            .context("failed to query your selection")?;
        let action = match selection {
            Some(idx) => Action::MENU[idx],
            None => Action::Quit,
        };

        // Refusals have already been shown through the notifier, so the form carries on.
        match action {
            Action::Generate => {
                let _ = session.generate(&mut rng, &mut notifier);
            }
            Action::Copy => {
                let _ = session.copy_to_clipboard(&mut clipboard, &mut notifier);
            }
            Action::ChooseClasses => choose_classes(&theme, session.config_mut())?,
            Action::SetLength => set_length(&theme, session.config_mut())?,
            Action::Quit => return Ok(()),
        }
    }
}

fn show_state(session: &Session) {
    let config = session.config();
    let classes = config
        .enabled_classes()
        .map(CharacterClass::label)
        .collect::<Vec<_>>();
    eprintln!();
    eprintln!(
        "Password: {}",
        console::style(session.password().as_str()).bold()
    );
    eprintln!(
        "Length: {}   Character types: {}",
        config.length,
        if classes.is_empty() {
            "(none)".to_owned()
        } else {
            classes.join(", ")
        }
    );
}

fn choose_classes(theme: &ColorfulTheme, config: &mut GenerationConfig) -> Result<(), ProgError> {
    let labels = CharacterClass::ALL.map(CharacterClass::label);
    let defaults = CharacterClass::ALL.map(|class| config.is_enabled(class));
    let chosen = dialoguer::MultiSelect::with_theme(theme)
        .with_prompt("Character types (space to toggle, enter to confirm)")
        .items(&labels[..])
        .defaults(&defaults[..])
        .interact_opt()
        .context("failed to query your selection")?;
    if let Some(chosen) = chosen {
        apply_class_selection(config, &chosen);
    }
    Ok(())
}

/// Enable exactly the classes at the given indices of [`CharacterClass::ALL`].
fn apply_class_selection(config: &mut GenerationConfig, chosen: &[usize]) {
    for (idx, class) in CharacterClass::ALL.into_iter().enumerate() {
        config.set_class(class, chosen.contains(&idx));
    }
}

fn set_length(theme: &ColorfulTheme, config: &mut GenerationConfig) -> Result<(), ProgError> {
    let length = dialoguer::Input::<usize>::with_theme(theme)
        .with_prompt(format!(
            "Password length ({}-{} recommended)",
            GenerationConfig::MIN_LENGTH,
            GenerationConfig::MAX_LENGTH
        ))
        .default(config.length)
        .validate_with(|len: &usize| -> Result<(), &str> {
            if *len == 0 {
                Err("the length must be at least 1")
            } else if *len > GenerationConfig::LENGTH_LIMIT {
                Err("the length is over the limit")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("failed to read the password length")?;
    config.length = length;
    Ok(())
}
