// src/config/tone.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};
use tracing::{info, warn};

use crate::analyze::keywords::MAX_KEYWORDS;
use crate::analyze::KeywordOptions;
use crate::history::{DEFAULT_HISTORY_CAP, MAX_HISTORY_CAP};

pub const DEFAULT_TONE_CONFIG_PATH: &str = "config/tone.toml";

pub const ENV_TONE_CONFIG_PATH: &str = "TONE_CONFIG_PATH";
pub const ENV_HISTORY_CAPACITY: &str = "TONE_HISTORY_CAPACITY";
pub const ENV_MAX_CHARS: &str = "TONE_MAX_CHARS";

fn default_capacity() -> usize {
    DEFAULT_HISTORY_CAP
}
fn default_top_n() -> usize {
    MAX_KEYWORDS
}
fn default_max_chars() -> usize {
    10_000
}
fn default_max_batch() -> usize {
    50
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySection {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSection {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub pos_boost: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsSection {
    /// Longest email (in characters) the HTTP API accepts.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for KeywordSection {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            pos_boost: false,
        }
    }
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            max_batch: default_max_batch(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneConfig {
    #[serde(default)]
    pub history: HistorySection,
    #[serde(default)]
    pub keywords: KeywordSection,
    #[serde(default)]
    pub limits: LimitsSection,
}

impl ToneConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: ToneConfig = toml::from_str(s).context("parsing tone config")?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading tone config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Resolution order:
    /// 1) $TONE_CONFIG_PATH (must exist)
    /// 2) config/tone.toml
    /// 3) built-in defaults
    ///
    /// Env overrides (`TONE_HISTORY_CAPACITY`, `TONE_MAX_CHARS`) apply last.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = env::var(ENV_TONE_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                anyhow::bail!("{ENV_TONE_CONFIG_PATH} points to non-existent path {}", pb.display());
            }
            Self::load_from_file(&pb)?
        } else {
            let pb = PathBuf::from(DEFAULT_TONE_CONFIG_PATH);
            if pb.exists() {
                Self::load_from_file(&pb)?
            } else {
                info!(target: "tone", "no tone config found, using defaults");
                Self::default()
            }
        };
        cfg.apply_env_overrides();
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_usize_env(ENV_HISTORY_CAPACITY) {
            self.history.capacity = v;
        }
        if let Some(v) = parse_usize_env(ENV_MAX_CHARS) {
            self.limits.max_chars = v;
        }
    }

    /// Pull out-of-range values back to something usable.
    pub fn sanitize(&mut self) {
        if self.history.capacity == 0 {
            self.history.capacity = 1;
        }
        if self.history.capacity > MAX_HISTORY_CAP {
            warn!(
                target: "tone",
                requested = self.history.capacity,
                max = MAX_HISTORY_CAP,
                "history capacity clamped"
            );
            self.history.capacity = MAX_HISTORY_CAP;
        }
        if !(1..=MAX_KEYWORDS).contains(&self.keywords.top_n) {
            warn!(
                target: "tone",
                requested = self.keywords.top_n,
                max = MAX_KEYWORDS,
                "keywords.top_n clamped"
            );
            self.keywords.top_n = self.keywords.top_n.clamp(1, MAX_KEYWORDS);
        }
        if self.limits.max_chars == 0 {
            self.limits.max_chars = default_max_chars();
        }
        if self.limits.max_batch == 0 {
            self.limits.max_batch = default_max_batch();
        }
    }

    pub fn keyword_options(&self) -> KeywordOptions {
        KeywordOptions {
            top_n: self.keywords.top_n,
            pos_boost: self.keywords.pos_boost,
        }
    }
}

fn parse_usize_env(name: &str) -> Option<usize> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(target: "tone", var = name, value = %raw, "ignoring non-numeric env override");
            None
        }
    }
}
