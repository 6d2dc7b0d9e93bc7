/// Shows notifications on stderr, so that stdout only ever carries the password.
pub(crate) struct TerminalNotifier;

impl passgen::Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("{}", console::style(message).red().bold());
        } else {
            eprintln!("{}", console::style(message).green());
        }
    }
}
