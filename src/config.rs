use serde::Deserialize;
use std::collections::HashSet;
use log::error;
use std::fs;
use std::path::Path;

pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const DEFAULT_PAYLOAD_BYTES: usize = 100_000;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub bench: BenchSettings,
    #[serde(default)]
    pub scenario: Vec<ScenarioConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BenchSettings {
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_payload_bytes")]
    pub payload_bytes: usize,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            payload_bytes: DEFAULT_PAYLOAD_BYTES,
            show_progress: true,
        }
    }
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

fn default_payload_bytes() -> usize {
    DEFAULT_PAYLOAD_BYTES
}

fn default_show_progress() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub id: String,
    pub kind: ScenarioKind,
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// insert_copy vs insert_move
    Insert,
    /// extract_copy vs extract_move
    Extract,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchPlan {
    pub settings: BenchSettings,
    pub scenarios: Vec<(String, ScenarioKind)>,
}

pub fn default_config_path() -> String {
    if let Ok(home) = std::env::var("HOME") {
        format!("{}/.config/ringbench/config.toml", home)
    } else {
        "/etc/ringbench/config.toml".to_string()
    }
}

pub fn load_config(path: &str) -> Result<BenchPlan, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Err(format!("Config file not found: {}", path).into());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;

    let plan = parse_config(&content)
        .map_err(|e| format!("Failed to parse TOML config {}: {}", path, e))?;

    log::info!("Config loaded from: {}", path);
    Ok(plan)
}

pub fn parse_config(content: &str) -> Result<BenchPlan, toml::de::Error> {
    let cfg: Config = toml::from_str(content)?;

    log::info!("Found {} scenarios in config", cfg.scenario.len());

    let mut scenarios = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for s in cfg.scenario.into_iter().filter(|s| s.enabled) {
        if !is_valid_id(&s.id) {
            error!("Invalid scenario id '{}'. Use [a-z0-9][a-z0-9_-]*", s.id);
            continue;
        }
        if !seen_ids.insert(s.id.clone()) {
            error!("Duplicate scenario id '{}' - skipping", s.id);
            continue;
        }
        scenarios.push((s.id, s.kind));
    }

    log::info!("Enabled scenarios: {}", scenarios.len());
    if scenarios.is_empty() {
        log::warn!("No enabled scenarios found in config - the default set will run");
    }
    if cfg.bench.iterations == 0 {
        log::warn!("iterations = 0 - scenarios will not execute");
    }

    Ok(BenchPlan {
        settings: cfg.bench,
        scenarios,
    })
}

fn is_valid_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_lc_alnum(c) => {}
        _ => return false,
    }
    for c in chars {
        if !(is_lc_alnum(c) || c == '-' || c == '_') {
            return false;
        }
    }
    true
}

fn is_lc_alnum(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9')
}
