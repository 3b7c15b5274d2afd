use chipledger_engine::attribution::RakeRounding;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub rake_rounding: RakeRounding,
    pub parallel: bool,
    pub summary_prefix: String,
    pub pocket_card_prefix: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub rake_rounding: ValueSource,
    pub parallel: ValueSource,
    pub summary_prefix: ValueSource,
    pub pocket_card_prefix: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rake_rounding: ValueSource::Default,
            parallel: ValueSource::Default,
            summary_prefix: ValueSource::Default,
            pocket_card_prefix: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line overrides, which win over file and environment.
    pub fn with_flags(mut self, rake_rounding: Option<RakeRounding>, sequential: bool) -> Self {
        if let Some(v) = rake_rounding {
            self.config.rake_rounding = v;
            self.sources.rake_rounding = ValueSource::Flag;
        }
        if sequential {
            self.config.parallel = false;
            self.sources.parallel = ValueSource::Flag;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rake_rounding: RakeRounding::Exact,
            parallel: true,
            summary_prefix: "summary_".into(),
            pocket_card_prefix: "Dealt ".into(),
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
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CHIPLEDGER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.rake_rounding {
            cfg.rake_rounding = v;
            sources.rake_rounding = ValueSource::File;
        }
        if let Some(v) = f.parallel {
            cfg.parallel = v;
            sources.parallel = ValueSource::File;
        }
        if let Some(v) = f.summary_prefix {
            cfg.summary_prefix = v;
            sources.summary_prefix = ValueSource::File;
        }
        if let Some(v) = f.pocket_card_prefix {
            cfg.pocket_card_prefix = v;
            sources.pocket_card_prefix = ValueSource::File;
        }
    }

    if let Ok(rounding) = std::env::var("CHIPLEDGER_RAKE_ROUNDING")
        && !rounding.is_empty()
    {
        cfg.rake_rounding = rounding.parse().map_err(ConfigError::Invalid)?;
        sources.rake_rounding = ValueSource::Env;
    }
    if let Ok(par) = std::env::var("CHIPLEDGER_PARALLEL")
        && !par.is_empty()
    {
        cfg.parallel =
            parse_bool(&par).ok_or_else(|| ConfigError::Invalid("Invalid parallel".into()))?;
        sources.parallel = ValueSource::Env;
    }
    if let Ok(prefix) = std::env::var("CHIPLEDGER_SUMMARY_PREFIX")
        && !prefix.is_empty()
    {
        cfg.summary_prefix = prefix;
        sources.summary_prefix = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    rake_rounding: Option<RakeRounding>,
    #[serde(default)]
    parallel: Option<bool>,
    #[serde(default)]
    summary_prefix: Option<String>,
    #[serde(default)]
    pocket_card_prefix: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.summary_prefix.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: summary_prefix must not be empty".into(),
        ));
    }
    if cfg.pocket_card_prefix.is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: pocket_card_prefix must not be empty".into(),
        ));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
