//! Interactive assistant over the contact book.
//!
//! Reads one command per line, replies on the output stream. Logging goes
//! through `tracing`, so it never mixes with replies.

pub mod handlers;
pub mod parser;

pub use handlers::{error_message, Assistant, Reply};
pub use parser::parse_input;

use std::io::{BufRead, Write};
use tracing::info;

/// Drive `assistant` with lines from `input` until `exit`, `close` or EOF.
pub fn run<R, W>(
    assistant: &mut Assistant,
    prompt: &str,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("input closed");
            writeln!(output, "Good bye!")?;
            return Ok(());
        };

        let reply = match parse_input(&line) {
            Some((command, args)) => assistant.handle(&command, &args),
            None => Reply::Continue("Invalid command.".to_string()),
        };

        match reply {
            Reply::Continue(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }
}
