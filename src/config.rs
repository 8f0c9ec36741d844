use crate::arith::NativeWidth;
use crate::error::{Error, Result};
use crate::output::Format;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    /// Bit width of the native unsigned integer, 32 or 64.
    #[serde(default)]
    pub native_width: NativeWidth,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Format,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse config: {e}")))
    }

    /// Apply CLI overrides on top of file values.
    pub fn with_overrides(
        mut self,
        native_width: Option<NativeWidth>,
        format: Option<Format>,
    ) -> Self {
        if let Some(width) = native_width {
            self.demo.native_width = width;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let toml = r#"
[demo]
native_width = 32

[output]
format = "json"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.demo.native_width, NativeWidth::W32);
        assert_eq!(config.output.format, Format::Json);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.demo.native_width, NativeWidth::W64);
        assert_eq!(config.output.format, Format::Text);
    }

    #[test]
    fn partial_section_uses_defaults() {
        let config = Config::parse("[demo]\n").unwrap();
        assert_eq!(config.demo.native_width, NativeWidth::W64);
    }

    #[test]
    fn rejects_unsupported_width() {
        let err = Config::parse("[demo]\nnative_width = 16\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("unsupported native width 16"));
    }

    #[test]
    fn overrides_beat_file_values() {
        let config = Config::parse("[demo]\nnative_width = 32\n")
            .unwrap()
            .with_overrides(Some(NativeWidth::W64), Some(Format::Json));
        assert_eq!(config.demo.native_width, NativeWidth::W64);
        assert_eq!(config.output.format, Format::Json);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Config::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to read config"));
    }
}
