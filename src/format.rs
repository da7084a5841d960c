use colored::Colorize;
use std::fmt::Display;

// This trait renders a value as inline code for inclusion in a message to the
// user, e.g., an error message.
pub trait CodeStr {
    fn code_str(&self) -> String;
}

impl<T: Display> CodeStr for T {
    fn code_str(&self) -> String {
        format!("`{}`", self).magenta().to_string()
    }
}
