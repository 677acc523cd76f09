/// A yes/no gate asked before destructive operations.
///
/// Commands take this as a parameter rather than reading stdin themselves so
/// that tests can answer the prompt.
pub(crate) trait Confirmation {
    fn confirm(&self, question: &str) -> bool;
}

/// Asks on the terminal and reads the reply from stdin.
///
/// Anything other than `y` or `yes` is a refusal.
pub(crate) struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    fn confirm(&self, question: &str) -> bool {
        println!("{question} [y/n]");

        let mut reply = String::new();
        if std::io::stdin().read_line(&mut reply).is_err() {
            return false;
        }

        matches!(reply.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
