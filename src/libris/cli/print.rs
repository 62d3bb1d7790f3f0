use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use colored::Colorize;

/// Prints a command's output lines to stdout, then routes its messages.
pub fn print_result(result: &CmdResult) {
    for line in &result.lines {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

/// Info goes to stdout dimmed; warnings and errors go to stderr colored.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}
