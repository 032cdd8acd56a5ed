use std::io::{self, BufRead, Write};

/// Two-step gate for destructive actions: the caller requests confirmation,
/// and only an explicit grant lets the mutation run. Declining leaves state
/// untouched.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive y/N prompt on stdin.
pub struct TerminalGate;

impl ConfirmationGate for TerminalGate {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Fixed answer, used for `--yes` flags and tests.
pub struct PresetGate(pub bool);

impl ConfirmationGate for PresetGate {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
