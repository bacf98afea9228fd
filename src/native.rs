//! Desktop integration
//!
//! Opens source links in the system browser. Links come from the QA service,
//! so only http(s) urls are handed to the opener.

use std::process::Command;

/// Open `url` with the desktop's default handler
pub fn open_link(url: &str) -> Result<(), String> {
    browser_command(url)?
        .spawn()
        .map_err(|e| format!("Failed to open {}: {}", url, e))?;
    tracing::info!("Opened source link {}", url);
    Ok(())
}

fn browser_command(url: &str) -> Result<Command, String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(format!("Refusing to open non-web link: {}", url));
    }

    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        Command::new("explorer")
    } else {
        Command::new("xdg-open")
    };
    command.arg(url);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_links_are_opened() {
        let command = browser_command(" https://example.com/guide ").unwrap();
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["https://example.com/guide"]);
    }

    #[test]
    fn test_other_links_are_refused() {
        assert!(browser_command("file:///etc/passwd").is_err());
        assert!(browser_command("javascript:alert(1)").is_err());
        assert!(browser_command("--help").is_err());
        assert!(open_link("").is_err());
    }
}
