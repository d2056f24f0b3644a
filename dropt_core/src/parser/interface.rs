/// Behaviour to show parse outcomes to the user.
///
/// The engine itself never prints; only [`ParseContext::parse_or_report`](./struct.ParseContext.html#method.parse_or_report) reports through this trait.
pub trait UserInterface {
    /// Show a regular message (ex: the help text).
    fn print(&self, message: String);

    /// Show an error message.
    fn print_error(&self, message: String);
}

/// The `UserInterface` which writes to stdout/stderr.
pub struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}
