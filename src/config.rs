//! Runtime configuration from environment variables.
//!
//! The binary takes no arguments. Every setting has a default, and a value
//! that does not parse falls back to that default.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

pub const SEED_VAR: &str = "TERM_BLOCKS_SEED";
pub const COLOR_VAR: &str = "TERM_BLOCKS_COLOR";
pub const DISPLAY_VAR: &str = "TERM_BLOCKS_DISPLAY";
pub const LOG_VAR: &str = "TERM_BLOCKS_LOG";
pub const LOG_FILE_VAR: &str = "TERM_BLOCKS_LOG_FILE";

pub const DEFAULT_LOG_FILE: &str = "log/term-blocks.log";

/// Palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Rgb,
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" | "16" => Ok(Self::Ansi),
            "rgb" | "truecolor" | "24bit" => Ok(Self::Rgb),
            _ => Err(()),
        }
    }
}

/// Where frames are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Terminal,
    Headless,
}

impl FromStr for DisplayMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "tty" => Ok(Self::Terminal),
            "headless" | "none" => Ok(Self::Headless),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` means derive a seed from the clock at startup
    pub seed: Option<u32>,
    pub color: ColorMode,
    pub display: DisplayMode,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            color: ColorMode::Ansi,
            display: DisplayMode::Terminal,
            log_level: LevelFilter::Info,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let detected_color = match lookup("COLORTERM").as_deref().map(str::trim) {
            Some("truecolor") | Some("24bit") => ColorMode::Rgb,
            _ => defaults.color,
        };
        let color = lookup(COLOR_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(detected_color);

        let display = lookup(DISPLAY_VAR)
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.display);

        let log_level = lookup(LOG_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        let log_file = lookup(LOG_FILE_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file);

        Self {
            seed,
            color,
            display,
            log_level,
            log_file,
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
