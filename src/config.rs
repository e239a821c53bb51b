use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub debug_artifacts: PatternConfig,
    #[serde(default)]
    pub sensitive_files: PatternConfig,
    #[serde(default)]
    pub large_files: LargeFilesConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_true")]
    pub log_decisions: bool,
    /// Decision log location. A leading `~` is expanded against `$HOME`.
    #[serde(default)]
    pub log_file: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_decisions: true,
            log_file: String::new(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Parsed `log_level`; unknown values fall back to `info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// `log_file` with `~` expanded. `None` when unset.
    pub fn log_path(&self) -> Option<std::path::PathBuf> {
        if self.log_file.is_empty() {
            return None;
        }
        Some(shellexpand::tilde(&self.log_file).into_owned().into())
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".into()
}

/// Ordered basename glob list. The first matching pattern is reported.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PatternConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LargeFilesConfig {
    /// Files of at least this many bytes are refused.
    #[serde(default = "default_threshold")]
    pub threshold_bytes: u64,
}

impl Default for LargeFilesConfig {
    fn default() -> Self {
        Self {
            threshold_bytes: default_threshold(),
        }
    }
}

/// 5 MiB.
pub const DEFAULT_THRESHOLD_BYTES: u64 = 5 * 1024 * 1024;

fn default_threshold() -> u64 {
    DEFAULT_THRESHOLD_BYTES
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    debug_artifacts: PatternOverlay,
    #[serde(default)]
    sensitive_files: PatternOverlay,
    #[serde(default)]
    large_files: LargeFilesOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_decisions: Option<bool>,
    log_file: Option<String>,
    log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PatternOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    patterns: Vec<String>,
    #[serde(default)]
    remove_patterns: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LargeFilesOverlay {
    threshold_bytes: Option<u64>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-stagegate/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend, scalars override.
    /// Set `replace = true` in a pattern section to replace its defaults entirely.
    /// Use `remove_patterns` to subtract specific patterns from defaults.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/cc-stagegate/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/cc-stagegate/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                eprintln!("cc-stagegate: config parse error: {e}");
                None
            }
        }
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        let s = overlay.settings;
        if let Some(v) = s.log_decisions {
            self.settings.log_decisions = v;
        }
        if let Some(v) = s.log_file {
            self.settings.log_file = v;
        }
        if let Some(v) = s.log_level {
            self.settings.log_level = v;
        }

        let d = overlay.debug_artifacts;
        merge_list(
            &mut self.debug_artifacts.patterns,
            d.patterns,
            &d.remove_patterns,
            d.replace,
        );

        let sf = overlay.sensitive_files;
        merge_list(
            &mut self.sensitive_files.patterns,
            sf.patterns,
            &sf.remove_patterns,
            sf.replace,
        );

        if let Some(v) = overlay.large_files.threshold_bytes {
            self.large_files.threshold_bytes = v;
        }
    }

    /// Render the effective configuration (for `--dump-config`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
