//! Command-line plumbing: flag overrides on top of the config file, and
//! reading the text to check.

use std::io::{self, Read};
use std::path::Path;

use crate::config::CheckerConfig;

/// Values given on the command line. Each one that is set wins over the
/// config file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub key: Option<String>,
    pub no_color: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut CheckerConfig) {
        if let Some(url) = &self.backend_url {
            config.backend_url = url.clone();
        }
        if let Some(provider) = &self.provider {
            config.provider = provider.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(key) = &self.key {
            config.api_key = Some(key.clone());
        }
        if self.no_color {
            config.color = false;
        }
    }
}

/// Drop one trailing `\n` (or `\r\n`), as left by `echo` or an editor.
pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Text to check: the argument verbatim, else the file verbatim, else
/// `stdin` without its trailing newline.
pub fn read_input<R: Read>(
    text: Option<&str>,
    file: Option<&Path>,
    mut stdin: R,
) -> io::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path);
    }
    let mut text = String::new();
    stdin.read_to_string(&mut text)?;
    Ok(strip_trailing_newline(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_flag_wins_over_config_file() {
        let mut config = CheckerConfig::from_toml_str(
            r#"
            model = "file-model"
            provider = "Anthropic"
            "#,
        )
        .unwrap();
        let overrides = ConfigOverrides {
            model: Some("flag-model".into()),
            ..Default::default()
        };
        overrides.apply(&mut config);

        assert_eq!(config.model, "flag-model");
        // unset flags leave the file value alone
        assert_eq!(config.provider, "Anthropic");
        assert!(config.color);
    }

    #[test]
    fn test_key_and_no_color() {
        let mut config = CheckerConfig::default();
        let overrides = ConfigOverrides {
            key: Some("sk-flag".into()),
            no_color: true,
            ..Default::default()
        };
        overrides.apply(&mut config);
        assert_eq!(config.api_key.as_deref(), Some("sk-flag"));
        assert!(!config.color);
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("text\r\n".into()), "text");
        assert_eq!(strip_trailing_newline("text\n\n".into()), "text\n");
        assert_eq!(strip_trailing_newline("text".into()), "text");
        assert_eq!(strip_trailing_newline("text\r".into()), "text\r");
        assert_eq!(strip_trailing_newline(String::new()), "");
    }

    #[test]
    fn test_stdin_loses_one_newline() {
        let text = read_input(None, None, Cursor::new("The dog run fast\n")).unwrap();
        assert_eq!(text, "The dog run fast");
    }

    #[test]
    fn test_argument_is_verbatim() {
        let text = read_input(Some("two  spaces\n"), None, Cursor::new("ignored")).unwrap();
        assert_eq!(text, "two  spaces\n");
    }

    #[test]
    fn test_file_is_verbatim() {
        let path = std::env::temp_dir()
            .join(format!("grammarcheck-input-{}.txt", std::process::id()));
        std::fs::write(&path, "from file\n").unwrap();
        let text = read_input(None, Some(path.as_path()), Cursor::new("ignored")).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "from file\n");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/grammarcheck/input.txt");
        assert!(read_input(None, Some(path), Cursor::new("")).is_err());
    }
}
