//! User configuration for clistart.
//! This module provides the persisted settings record and a declarative field
//! table that drives `get`, `set`, `describe` and the YAML (de)serialization,
//! so every field is declared exactly once.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "CLISTART_CONFIG";

/// Directory (under the home directory) holding the config file.
pub const CONFIG_DIR: &str = ".clistart";

/// Config file name.
pub const CONFIG_FILE: &str = "config.yaml";

/// User-facing settings persisted in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base directory for storing data
    pub home: String,
    /// Default author name written into generated projects
    pub author: String,
    /// Default log format of generated projects
    pub log_fmt: String,
}

/// How a field value is normalized before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Filesystem path, made absolute on `set`.
    Path,
}

/// Declarative description of one settings field.
pub struct ConfigField {
    /// Key used in the YAML file and on the command line.
    pub key: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
    default: fn() -> String,
    get: fn(&Settings) -> &str,
    set: fn(&mut Settings, String),
}

impl ConfigField {
    /// Returns the default value of this field.
    pub fn default_value(&self) -> String {
        (self.default)()
    }

    pub fn get<'a>(&self, settings: &'a Settings) -> &'a str {
        (self.get)(settings)
    }

    pub fn set(&self, settings: &mut Settings, value: String) {
        (self.set)(settings, value)
    }
}

impl std::fmt::Debug for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigField")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .finish()
    }
}

/// All settings fields, in declaration order.
pub static FIELDS: [ConfigField; 3] = [
    ConfigField {
        key: "home",
        description: "Base directory for storing data",
        kind: FieldKind::Path,
        default: || "~/clistart".to_string(),
        get: |s| s.home.as_str(),
        set: |s, v| s.home = v,
    },
    ConfigField {
        key: "author",
        description: "Default author name for new items",
        kind: FieldKind::Text,
        default: fallback_author,
        get: |s| s.author.as_str(),
        set: |s, v| s.author = v,
    },
    ConfigField {
        key: "log_fmt",
        description: "Log output format (json, formatted, text)",
        kind: FieldKind::Text,
        default: || "json".to_string(),
        get: |s| s.log_fmt.as_str(),
        set: |s, v| s.log_fmt = v,
    },
];

/// Looks up a field descriptor by key.
pub fn find_field(key: &str) -> Option<&'static ConfigField> {
    FIELDS.iter().find(|field| field.key == key)
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings =
            Settings { home: String::new(), author: String::new(), log_fmt: String::new() };
        for field in FIELDS.iter() {
            field.set(&mut settings, field.default_value());
        }
        settings
    }
}

/// One row of `describe` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescription {
    pub key: &'static str,
    /// Current value, or the default when the current value is blank.
    pub value: String,
    pub description: &'static str,
}

#[derive(Serialize)]
struct FieldMeta {
    value: String,
    desc: &'static str,
    default: String,
}

/// Returns the user's home directory, if one is known.
///
/// `$HOME` wins when set; otherwise the OS user database is asked.
pub fn home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME").filter(|home| !home.is_empty()) {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir()
}

static FALLBACK_AUTHOR: LazyLock<String> = LazyLock::new(lookup_author);

/// Best-effort author name, looked up once per process.
///
/// Tries the global git `user.name`, then the login name from the
/// environment, then the final component of the home directory. Never fails:
/// the last resort is the literal `unknown`.
pub fn fallback_author() -> String {
    FALLBACK_AUTHOR.clone()
}

fn lookup_author() -> String {
    if let Some(name) = git2::Config::open_default()
        .and_then(|config| config.get_string("user.name"))
        .ok()
        .filter(|name| !name.trim().is_empty())
    {
        return name;
    }

    for var in ["USER", "USERNAME"] {
        if let Ok(name) = std::env::var(var) {
            if !name.trim().is_empty() {
                return name;
            }
        }
    }

    home_dir()
        .and_then(|home| home.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Makes a path value absolute relative to the current directory.
/// Values starting with `~` are kept as typed.
fn normalize_path(value: String) -> String {
    if value.starts_with('~') || value.trim().is_empty() {
        return value;
    }
    match std::path::absolute(&value) {
        Ok(path) => path.display().to_string(),
        Err(_) => value,
    }
}

/// Reads and writes [`Settings`] at a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the given file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the canonical location.
    ///
    /// Uses `$CLISTART_CONFIG` when set, otherwise `~/.clistart/config.yaml`,
    /// or `.clistart/config.yaml` when no home directory is known.
    pub fn from_env() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Self::new(path);
        }
        match home_dir() {
            Some(home) => Self::new(home.join(CONFIG_DIR).join(CONFIG_FILE)),
            None => Self::new(Path::new(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings, overlaying the file contents on the defaults.
    ///
    /// # Errors
    /// * `Error::IoError` if the file exists but cannot be read
    /// * `Error::ConfigParseError` if the contents are not a mapping of strings
    pub fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        debug!("Loading configuration from {}", self.path.display());
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config file at {}, using defaults", self.path.display());
                return Ok(settings);
            }
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        if content.trim().is_empty() {
            return Ok(settings);
        }

        let parse_error = |source: serde_yaml::Error| Error::ConfigParseError {
            path: self.path.display().to_string(),
            source,
        };

        let raw: IndexMap<String, serde_yaml::Value> =
            serde_yaml::from_str(&content).map_err(parse_error)?;

        for field in FIELDS.iter() {
            match raw.get(field.key) {
                None | Some(serde_yaml::Value::Null) => {}
                Some(value) => {
                    let value: String =
                        serde_yaml::from_value(value.clone()).map_err(parse_error)?;
                    field.set(&mut settings, value);
                }
            }
        }

        Ok(settings)
    }

    /// Writes every field of `settings` to the config file.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let record: IndexMap<&str, &str> =
            FIELDS.iter().map(|field| (field.key, field.get(settings))).collect();
        let out = serde_yaml::to_string(&record).map_err(Error::ConfigSerializeError)?;

        debug!("Writing configuration to {}", self.path.display());
        std::fs::write(&self.path, out).map_err(|e| Error::io(&self.path, e))
    }

    /// Returns the current value of `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        let field =
            find_field(key).ok_or_else(|| Error::UnknownKeyError { key: key.to_string() })?;
        let settings = self.load()?;
        Ok(field.get(&settings).to_string())
    }

    /// Updates `key` and saves the whole record. Returns the stored value.
    ///
    /// Nothing is written when the key is unknown.
    pub fn set(&self, key: &str, value: &str) -> Result<String> {
        let field =
            find_field(key).ok_or_else(|| Error::UnknownKeyError { key: key.to_string() })?;
        let mut settings = self.load()?;

        let value = match field.kind {
            FieldKind::Path => normalize_path(value.to_string()),
            FieldKind::Text => value.to_string(),
        };
        field.set(&mut settings, value.clone());
        self.save(&settings)?;
        Ok(value)
    }

    /// Lists every field with its effective value and description.
    pub fn describe(&self) -> Result<Vec<FieldDescription>> {
        let settings = self.load()?;
        Ok(FIELDS
            .iter()
            .map(|field| {
                let current = field.get(&settings);
                let value = if current.trim().is_empty() {
                    field.default_value()
                } else {
                    current.to_string()
                };
                FieldDescription { key: field.key, value, description: field.description }
            })
            .collect())
    }

    /// Same as [`ConfigStore::describe`] but as a JSON object keyed by field.
    pub fn describe_json(&self) -> Result<String> {
        let described = self.describe()?;
        let meta: IndexMap<&str, FieldMeta> = described
            .into_iter()
            .zip(FIELDS.iter())
            .map(|(row, field)| {
                (
                    row.key,
                    FieldMeta {
                        value: row.value,
                        desc: row.description,
                        default: field.default_value(),
                    },
                )
            })
            .collect();
        Ok(serde_json::to_string_pretty(&meta)?)
    }
}
