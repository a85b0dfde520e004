use kems_engine::engine::Pacing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;

/// Longest delay any pacing setting may ask for.
pub const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub ai: String,
    pub ai_turn_delay_ms: u64,
    pub swap_delay_ms: u64,
    pub reveal_delay_ms: u64,
}

impl Config {
    pub fn pacing(&self) -> Pacing {
        Pacing {
            ai_turn: Duration::from_millis(self.ai_turn_delay_ms),
            swap: Duration::from_millis(self.swap_delay_ms),
            ai_win_reveal: Duration::from_millis(self.reveal_delay_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub ai: ValueSource,
    pub ai_turn_delay_ms: ValueSource,
    pub swap_delay_ms: ValueSource,
    pub reveal_delay_ms: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            ai: ValueSource::Default,
            ai_turn_delay_ms: ValueSource::Default,
            swap_delay_ms: ValueSource::Default,
            reveal_delay_ms: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let pacing = Pacing::default();
        Self {
            seed: None,
            ai: "baseline".into(),
            ai_turn_delay_ms: pacing.ai_turn.as_millis() as u64,
            swap_delay_ms: pacing.swap.as_millis() as u64,
            reveal_delay_ms: pacing.ai_win_reveal.as_millis() as u64,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Resolve configuration: defaults, then the TOML file named by
/// `KEMS_CONFIG`, then `KEMS_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("KEMS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.ai_turn_delay_ms {
            cfg.ai_turn_delay_ms = v;
            sources.ai_turn_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.swap_delay_ms {
            cfg.swap_delay_ms = v;
            sources.swap_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.reveal_delay_ms {
            cfg.reveal_delay_ms = v;
            sources.reveal_delay_ms = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("KEMS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("KEMS_AI")
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Some(v) = env_millis("KEMS_AI_TURN_MS")? {
        cfg.ai_turn_delay_ms = v;
        sources.ai_turn_delay_ms = ValueSource::Env;
    }
    if let Some(v) = env_millis("KEMS_SWAP_MS")? {
        cfg.swap_delay_ms = v;
        sources.swap_delay_ms = ValueSource::Env;
    }
    if let Some(v) = env_millis("KEMS_REVEAL_MS")? {
        cfg.reveal_delay_ms = v;
        sources.reveal_delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_millis(key: &str) -> Result<Option<u64>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    ai_turn_delay_ms: Option<u64>,
    #[serde(default)]
    swap_delay_ms: Option<u64>,
    #[serde(default)]
    reveal_delay_ms: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !kems_ai::AI_TYPES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of: {})",
            cfg.ai,
            kems_ai::AI_TYPES.join(", ")
        )));
    }
    for (name, v) in [
        ("ai_turn_delay_ms", cfg.ai_turn_delay_ms),
        ("swap_delay_ms", cfg.swap_delay_ms),
        ("reveal_delay_ms", cfg.reveal_delay_ms),
    ] {
        if v > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "Invalid configuration: {} must be <= {}",
                name, MAX_DELAY_MS
            )));
        }
    }
    Ok(())
}
