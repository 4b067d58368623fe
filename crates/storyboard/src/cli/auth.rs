//! Credential entry command handler.

use std::io::{BufRead, Write};
use storyboard::CredentialStore;
use tracing::info;

/// Store the Gemini credential.
///
/// When `key` is omitted it is read from stdin, keeping it out of shell
/// history and the process list.
pub fn save_credential(key: Option<&str>) -> anyhow::Result<()> {
    let key = match key {
        Some(key) => key.trim().to_string(),
        None => {
            eprint!("Gemini API key: ");
            std::io::stderr().flush().ok();
            read_key(std::io::stdin().lock())?
        }
    };
    if key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }

    let mut store = CredentialStore::load();
    store.save(key)?;
    match store.path() {
        Some(path) => {
            info!(path = %path.display(), "Credential saved");
            println!("Credential saved to {}", path.display());
        }
        None => println!("Credential saved"),
    }
    Ok(())
}

/// First line of `input`, trimmed.
fn read_key(mut input: impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read API key from stdin: {e}"))?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_key_takes_first_trimmed_line() {
        let key = read_key(Cursor::new("  AIza-secret \nignored\n")).unwrap();
        assert_eq!(key, "AIza-secret");
    }

    #[test]
    fn test_read_key_from_empty_input() {
        assert_eq!(read_key(Cursor::new("")).unwrap(), "");
    }
}
