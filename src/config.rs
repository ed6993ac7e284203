//! Autoplay configuration: defaults, then `ISLANDS_*` environment variables, then
//! command-line flags.
//!
//! Environment values that fail to parse are ignored and the previous layer's value is
//! kept. Command-line values that fail to parse are errors.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use crate::core::EngineConfig;

/// How the autoplay driver chooses the next island to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Largest removable island, lowest seed index on ties.
    #[default]
    Largest,
    /// Smallest removable island, lowest seed index on ties.
    Smallest,
    /// Removable island with the lowest seed index.
    First,
}

impl Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Largest => "largest",
            Policy::Smallest => "smallest",
            Policy::First => "first",
        }
    }
}

impl FromStr for Policy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "largest" => Ok(Policy::Largest),
            "smallest" => Ok(Policy::Smallest),
            "first" => Ok(Policy::First),
            other => Err(anyhow!("unknown policy: {} (expected largest, smallest or first)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub engine: EngineConfig,
    pub policy: Policy,
    /// Stop after this many removals even if moves remain.
    pub max_moves: Option<u32>,
    /// JSON-lines event log destination.
    pub log_path: Option<String>,
    /// Suppress progress lines on stderr.
    pub quiet: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            policy: Policy::default(),
            max_moves: None,
            log_path: None,
            quiet: false,
        }
    }
}

impl AutoplayConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `var` returns for the `ISLANDS_*` keys.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
            var(key).and_then(|s| s.trim().parse().ok())
        }

        let mut config = Self::default();
        if let Some(width) = parsed(&var, "ISLANDS_WIDTH") {
            config.engine.width = width;
        }
        if let Some(height) = parsed(&var, "ISLANDS_HEIGHT") {
            config.engine.height = height;
        }
        if let Some(colors) = parsed(&var, "ISLANDS_COLORS") {
            config.engine.color_count = colors;
        }
        if let Some(seed) = parsed(&var, "ISLANDS_SEED") {
            config.engine.seed = seed;
        }
        if let Some(policy) = parsed(&var, "ISLANDS_POLICY") {
            config.policy = policy;
        }
        if let Some(max_moves) = parsed(&var, "ISLANDS_MAX_MOVES") {
            config.max_moves = Some(max_moves);
        }
        config.log_path = var("ISLANDS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        config
    }

    /// Apply command-line flags on top of this configuration.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--quiet" | "-q" => self.quiet = true,
                "--width" | "--height" | "--colors" | "--seed" | "--policy" | "--max-moves"
                | "--log" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    self.apply_flag(flag, value)?;
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }
        Ok(self)
    }

    fn apply_flag(&mut self, flag: &str, value: &str) -> Result<()> {
        fn parse<T: FromStr>(flag: &str, value: &str) -> Result<T> {
            value
                .parse()
                .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
        }

        match flag {
            "--width" => self.engine.width = parse(flag, value)?,
            "--height" => self.engine.height = parse(flag, value)?,
            "--colors" => self.engine.color_count = parse(flag, value)?,
            "--seed" => self.engine.seed = parse(flag, value)?,
            "--policy" => self.policy = value.parse()?,
            "--max-moves" => self.max_moves = Some(parse(flag, value)?),
            "--log" => self.log_path = Some(value.to_string()).filter(|s| !s.is_empty()),
            other => bail!("unknown argument: {}", other),
        }
        Ok(())
    }
}
