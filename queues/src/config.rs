use serde::{Deserialize, Serialize};

use crate::config_option::ConfigOption;
use crate::error::QueuesError;

pub const XS_BUFFER_SIZE_KEY: &str = "NEXUS_QUEUES_BUFFER_SIZE_XS";
pub const SMALL_BUFFER_SIZE_KEY: &str = "NEXUS_QUEUES_BUFFER_SIZE_SMALL";

pub const DEFAULT_XS_BUFFER_SIZE: usize = 32;
pub const DEFAULT_SMALL_BUFFER_SIZE: usize = 256;
pub const MIN_XS_BUFFER_SIZE: usize = 8;
pub const MIN_SMALL_BUFFER_SIZE: usize = 16;

/// The two buffer sizes every supplier factory is built around.<br/>
/// Values below [`MIN_XS_BUFFER_SIZE`] / [`MIN_SMALL_BUFFER_SIZE`] are raised to the minimum on
/// every construction path, deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawQueuesConfig")]
pub struct QueuesConfig {
  xs_buffer_size: usize,
  small_buffer_size: usize,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawQueuesConfig {
  xs_buffer_size: usize,
  small_buffer_size: usize,
}

impl Default for RawQueuesConfig {
  fn default() -> Self {
    RawQueuesConfig {
      xs_buffer_size: DEFAULT_XS_BUFFER_SIZE,
      small_buffer_size: DEFAULT_SMALL_BUFFER_SIZE,
    }
  }
}

impl From<RawQueuesConfig> for QueuesConfig {
  fn from(raw: RawQueuesConfig) -> Self {
    QueuesConfig::new(raw.xs_buffer_size, raw.small_buffer_size)
  }
}

impl Default for QueuesConfig {
  fn default() -> Self {
    QueuesConfig::new(DEFAULT_XS_BUFFER_SIZE, DEFAULT_SMALL_BUFFER_SIZE)
  }
}

impl QueuesConfig {
  pub fn new(xs_buffer_size: usize, small_buffer_size: usize) -> Self {
    QueuesConfig {
      xs_buffer_size: xs_buffer_size.max(MIN_XS_BUFFER_SIZE),
      small_buffer_size: small_buffer_size.max(MIN_SMALL_BUFFER_SIZE),
    }
  }

  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> QueuesConfig {
    let mut config = QueuesConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Reads both sizes from the process environment, keeping the default for unset keys.
  pub fn from_env() -> Result<QueuesConfig, QueuesError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds a configuration from an arbitrary key lookup.
  ///
  /// # Errors
  /// - `QueuesError::InvalidConfig` - If a present value is not an unsigned integer.
  pub fn from_lookup<F>(lookup: F) -> Result<QueuesConfig, QueuesError>
  where
    F: Fn(&str) -> Option<String>, {
    let xs_buffer_size = parse_size(&lookup, XS_BUFFER_SIZE_KEY)?.unwrap_or(DEFAULT_XS_BUFFER_SIZE);
    let small_buffer_size = parse_size(&lookup, SMALL_BUFFER_SIZE_KEY)?.unwrap_or(DEFAULT_SMALL_BUFFER_SIZE);
    Ok(QueuesConfig::new(xs_buffer_size, small_buffer_size))
  }

  /// The "extra small" size: an allocation friendly default for slow publishers or few subscribers.
  pub fn xs_buffer_size(&self) -> usize {
    self.xs_buffer_size
  }

  /// The "small" size: a compromise between intensive pipelines and memory use.
  pub fn small_buffer_size(&self) -> usize {
    self.small_buffer_size
  }

  pub(crate) fn set_xs_buffer_size(&mut self, size: usize) {
    self.xs_buffer_size = size.max(MIN_XS_BUFFER_SIZE);
  }

  pub(crate) fn set_small_buffer_size(&mut self, size: usize) {
    self.small_buffer_size = size.max(MIN_SMALL_BUFFER_SIZE);
  }
}

fn parse_size<F>(lookup: &F, key: &str) -> Result<Option<usize>, QueuesError>
where
  F: Fn(&str) -> Option<String>, {
  match lookup(key) {
    None => Ok(None),
    Some(value) => value
      .trim()
      .parse::<usize>()
      .map(Some)
      .map_err(|_| QueuesError::InvalidConfig {
        key: key.to_string(),
        value,
      }),
  }
}
