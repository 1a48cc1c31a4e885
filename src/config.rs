use crate::error::{AppError, Result};
use crate::state::form::FormState;
use crate::terminal::RenderMode;
use crate::ui::theme::Theme;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const KEY_HINT: &str = "Tab/Shift-Tab move, Enter submits, Esc quits";

/// Optional YAML settings. Every key may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub render_mode: RenderMode,
    pub show_hints: bool,
    pub monochrome: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::AltScreen,
            show_hints: true,
            monochrome: false,
        }
    }
}

impl FormConfig {
    pub fn from_yaml_str(src: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if src.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(src)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&src).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn theme(&self) -> Theme {
        if self.monochrome {
            Theme::monochrome()
        } else {
            Theme::default()
        }
    }

    pub fn build_form(&self) -> FormState {
        let form = FormState::new();
        if self.show_hints {
            form.with_hint(KEY_HINT)
        } else {
            form
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FormConfig;
    use crate::error::AppError;
    use crate::terminal::RenderMode;
    use std::path::Path;

    #[test]
    fn empty_document_uses_defaults() {
        let config = FormConfig::from_yaml_str("").expect("empty config");
        assert_eq!(config, FormConfig::default());
        assert!(config.show_hints);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = FormConfig::from_yaml_str("render_mode: inline\n").expect("config");
        assert_eq!(config.render_mode, RenderMode::Inline);
        assert!(config.show_hints);
        assert!(!config.monochrome);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FormConfig::from_yaml_str("colour: blue\n").is_err());
    }

    #[test]
    fn bad_render_mode_is_rejected() {
        assert!(FormConfig::from_yaml_str("render_mode: fullscreen\n").is_err());
    }

    #[test]
    fn hints_can_be_disabled() {
        let config = FormConfig::from_yaml_str("show_hints: false\n").expect("config");
        assert_eq!(config.build_form().hint(), None);
        assert!(FormConfig::default().build_form().hint().is_some());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FormConfig::load(Path::new("/nonexistent/contact-form.yaml"))
            .expect_err("missing file");
        assert!(matches!(err, AppError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/contact-form.yaml"));
    }

    #[test]
    fn malformed_file_reports_config_error() {
        let path = std::env::temp_dir().join(format!(
            "contact-form-config-{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "show_hints: [").expect("write temp config");
        let err = FormConfig::load(&path).expect_err("malformed");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, AppError::Config { .. }));
    }
}
