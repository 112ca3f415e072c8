use std::fs::read_to_string;
use std::num::NonZeroU32;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fpview_footprint::FootprintMatrixBuilder;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

fn default_bin_width() -> u32 {
    1
}

///
/// Options for one render call, usually read from a TOML file:
///
/// ```toml
/// bin_width = 5
/// radius_range = [2, 100]
/// score_cap = 5.0
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_bin_width")]
    pub bin_width: u32,
    pub radius_range: Option<[u32; 2]>,
    pub score_cap: Option<f64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            bin_width: default_bin_width(),
            radius_range: None,
            score_cap: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.bin_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "bin_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some([min, max]) = self.radius_range {
            if min > max {
                return Err(ConfigError::InvalidValue {
                    key: "radius_range",
                    reason: format!("minimum {min} exceeds maximum {max}"),
                });
            }
        }
        if let Some(cap) = self.score_cap {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: "score_cap",
                    reason: format!("{cap} is not a positive finite number"),
                });
            }
        }
        Ok(())
    }

    ///
    /// A matrix builder carrying this configuration's bin width and radius
    /// range.
    ///
    pub fn matrix_builder(&self) -> ConfigResult<FootprintMatrixBuilder> {
        self.validate()?;
        let bin_width = NonZeroU32::new(self.bin_width).ok_or(ConfigError::InvalidValue {
            key: "bin_width",
            reason: "must be at least 1".to_string(),
        })?;

        let builder = FootprintMatrixBuilder::new().with_bin_width(bin_width);
        Ok(match self.radius_range {
            Some([min, max]) => builder.with_radius_range(min, max),
            None => builder,
        })
    }
}

impl TryFrom<&Path> for RenderConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
