//! Input helpers for the interactive menu.
//!
//! On a TTY the prompts go through `dialoguer`; when stdin is piped
//! (scripts, tests) lines are read directly so whole sessions can be driven
//! end to end.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

/// Prompt for one line of input.
///
/// Returns `Ok(None)` at end of input (EOF), which the menu treats as exit.
pub fn prompt_line(prompt: &str) -> anyhow::Result<Option<String>> {
    if io::stdin().is_terminal() {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        return Ok(Some(value.trim().to_string()));
    }

    print!("{}: ", prompt);
    io::stdout()
        .flush()
        .map_err(|e| anyhow::anyhow!("Failed to flush prompt: {}", e))?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
