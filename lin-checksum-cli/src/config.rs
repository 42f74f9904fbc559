//! Configuration loading and parsing
//!
//! Every section is optional; command-line flags override whatever the file
//! provides.

use anyhow::{Context, Result};
use lin_frame_codec::{ChecksumMode, CodecConfig, DEFAULT_MAX_BYTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input file used when neither the command line nor the config names one
pub const DEFAULT_INPUT: &str = "inputs.txt";

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub checksum: ChecksumConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChecksumConfig {
    #[serde(default = "default_mode")]
    pub mode: ChecksumMode,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_mode() -> ChecksumMode {
    ChecksumMode::Classic
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write results to a file in addition to stdout
    #[serde(default)]
    pub write: bool,
    /// Output file (default: `<input stem>_checksums.txt` next to the input)
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Txt,
    Json,
}

impl AppConfig {
    /// Codec settings derived from the `[checksum]` section
    pub fn codec_config(&self) -> CodecConfig {
        CodecConfig::new()
            .with_mode(self.checksum.mode)
            .with_max_bytes(self.checksum.max_bytes)
    }

    /// Input path, falling back to `inputs.txt`
    pub fn input_path(&self) -> PathBuf {
        self.input
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    /// Output path, derived from the input path when not configured
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output.path {
            return path.clone();
        }
        let input = self.input_path();
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frames".to_string());
        input.with_file_name(format!("{}_checksums.txt", stem))
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.checksum.max_bytes < 2 {
        anyhow::bail!(
            "Invalid config {:?}: max_bytes must be at least 2 (PID and length), got {}",
            path,
            config.checksum.max_bytes
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [input]
            file = "frames.txt"

            [checksum]
            mode = "enhanced"
            max_bytes = 16

            [output]
            write = true
            format = "json"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input_path(), PathBuf::from("frames.txt"));
        assert_eq!(config.checksum.mode, ChecksumMode::Enhanced);
        assert_eq!(config.checksum.max_bytes, 16);
        assert!(config.output.write);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output_path(), PathBuf::from("frames_checksums.txt"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.input_path(), PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.codec_config(), CodecConfig::default());
        assert!(!config.output.write);
        assert_eq!(config.output.format, OutputFormat::Txt);
    }

    #[test]
    fn test_output_path_beside_input() {
        let mut config = AppConfig::default();
        config.input.file = Some(PathBuf::from("logs/bus.txt"));
        assert_eq!(config.output_path(), PathBuf::from("logs/bus_checksums.txt"));

        config.output.path = Some(PathBuf::from("out.txt"));
        assert_eq!(config.output_path(), PathBuf::from("out.txt"));
    }

    #[test]
    fn test_load_config_rejects_tiny_capacity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[checksum]\nmax_bytes = 1").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_rejects_unknown_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[checksum]\nmode = \"lin1\"").unwrap();
        assert!(load_config(file.path()).is_err());
    }
}
