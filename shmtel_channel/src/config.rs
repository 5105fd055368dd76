//! Channel table loaded from TOML.
//!
//! Each channel is a table keyed by its shared-memory name. Names start
//! with `/`, so they are written quoted:
//!
//! ```toml
//! ["/procstat"]
//! size = 1540
//! role = 1            # 1 = platform owned, 2 = user owned
//!
//! ["/mavlink_send"]
//! size = 20
//! kind = 2            # accepted alias of `role`
//! path = "/var/log/mavlink_send.bin"
//! ```
//!
//! Only whole-file problems (missing file, bad TOML) fail loading.
//! Malformed entries are kept and reported when a channel asks for them, so
//! one bad entry never hides the others.
//!
//! # Example
//!
//! ```rust
//! use shmtel_channel::{ChannelTable, Role};
//!
//! let table = ChannelTable::from_toml(r#"
//!     ["/procstat"]
//!     size = 1540
//!     role = 1
//! "#)?;
//! let spec = table.spec("/procstat")?;
//! assert_eq!(spec.size, 1540);
//! assert_eq!(spec.role, Role::PlatformOwned);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::{ChannelError, ChannelResult};
use crate::role::Role;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for loading the channel table.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// File could not be read or is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// `reload` on a table that was not built from a file.
    #[error("Channel table has no source file to reload")]
    NoSource,
}

/// Validated description of one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSpec {
    /// Shared-memory object name
    pub name: String,
    /// Declared region size in bytes
    pub size: usize,
    /// Configured owner
    pub role: Role,
    /// Producer-side dump file, carried as metadata only
    pub path: Option<PathBuf>,
}

/// Mapping of channel name to its raw configuration entry.
#[derive(Debug, Clone, Default)]
pub struct ChannelTable {
    entries: BTreeMap<String, toml::Table>,
    source: Option<PathBuf>,
}

impl ChannelTable {
    /// Load the table from a TOML file.
    ///
    /// # Errors
    ///
    /// * `ConfigError::FileNotFound` if the file does not exist
    /// * `ConfigError::ParseError` if it cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        let mut table = Self::from_toml(&content)?;
        table.source = Some(path.to_path_buf());
        debug!(path = %path.display(), channels = table.len(), "Loaded channel table");
        Ok(table)
    }

    /// Build the table from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let root: toml::Table =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut entries = BTreeMap::new();
        for (name, value) in root {
            match value {
                toml::Value::Table(entry) => {
                    entries.insert(name, entry);
                }
                other => {
                    warn!(
                        key = %name,
                        kind = other.type_str(),
                        "Ignoring non-table entry in channel table"
                    );
                }
            }
        }

        if entries.is_empty() {
            warn!("Channel table has no channel sections");
        }

        Ok(Self {
            entries,
            source: None,
        })
    }

    /// Re-read the file this table was loaded from.
    ///
    /// On failure the current contents are kept.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let path = self.source.clone().ok_or(ConfigError::NoSource)?;
        *self = Self::load(&path)?;
        Ok(())
    }

    /// File the table was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of channel sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no channel sections were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured channel names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// True if a section exists for `name`, valid or not.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Validate and return the entry for `name`.
    ///
    /// # Errors
    ///
    /// * `ConfigMissing` if there is no section for `name`
    /// * `SizeMissing` / `SizeInvalid` if `size` is absent or not a positive integer
    /// * `RoleMissing` if neither `role` nor `kind` holds an integer
    pub fn spec(&self, name: &str) -> ChannelResult<ChannelSpec> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| ChannelError::ConfigMissing {
                name: name.to_string(),
            })?;

        let size = match entry.get("size") {
            None => {
                return Err(ChannelError::SizeMissing {
                    name: name.to_string(),
                });
            }
            Some(toml::Value::Integer(n)) if *n > 0 => {
                usize::try_from(*n).map_err(|_| ChannelError::SizeInvalid {
                    name: name.to_string(),
                    value: n.to_string(),
                })?
            }
            Some(other) => {
                return Err(ChannelError::SizeInvalid {
                    name: name.to_string(),
                    value: other.to_string(),
                });
            }
        };

        let role = match entry.get("role").or_else(|| entry.get("kind")) {
            Some(toml::Value::Integer(n)) => Role::from_raw(*n),
            _ => {
                return Err(ChannelError::RoleMissing {
                    name: name.to_string(),
                });
            }
        };

        let path = entry
            .get("path")
            .and_then(toml::Value::as_str)
            .map(PathBuf::from);

        Ok(ChannelSpec {
            name: name.to_string(),
            size,
            role,
            path,
        })
    }

    /// Every section with its validation result.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ChannelResult<ChannelSpec>)> {
        self.names().map(|name| (name, self.spec(name)))
    }
}
