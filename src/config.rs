//! Engine configuration.
//!
//! Bundles the sheet geometry, the spiral search tunables, and the guard
//! offset. Defaults reproduce the standard sheet; `setoption` can override
//! individual values through [`EngineConfig::apply_option`].

use crate::search::free_spot::SpotSearchParams;
use crate::sheet::SheetGeometry;

/// Distance beyond the house edge at which guards are placed.
pub const DEFAULT_GUARD_OFFSET: f64 = 20.0;

/// Errors raised when an option name or value is rejected.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' requires a value")]
    MissingValue(String),

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },

    #[error("{name} must be {expected}, got {value}")]
    OutOfRange {
        name: String,
        expected: &'static str,
        value: String,
    },
}

/// Advertised option: name, type, and default, as listed in the handshake.
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: &'static str,
    pub default: &'static str,
}

/// Options accepted by `setoption`.
pub const OPTIONS: [OptionSpec; 6] = [
    OptionSpec {
        name: "StoneRadius",
        kind: "float",
        default: "14",
    },
    OptionSpec {
        name: "HouseRadius",
        kind: "float",
        default: "100",
    },
    OptionSpec {
        name: "MaxAttempts",
        kind: "spin",
        default: "100",
    },
    OptionSpec {
        name: "AngleStep",
        kind: "spin",
        default: "30",
    },
    OptionSpec {
        name: "ClearanceBuffer",
        kind: "float",
        default: "2",
    },
    OptionSpec {
        name: "GuardOffset",
        kind: "float",
        default: "20",
    },
];

/// Everything the recommender needs besides the stones themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub geometry: SheetGeometry,
    pub search: SpotSearchParams,
    pub guard_offset: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            geometry: SheetGeometry::default(),
            search: SpotSearchParams::default(),
            guard_offset: DEFAULT_GUARD_OFFSET,
        }
    }
}

impl EngineConfig {
    /// Applies a single named option. On error the config is left unchanged.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        if !OPTIONS.iter().any(|o| o.name.eq_ignore_ascii_case(name)) {
            return Err(ConfigError::UnknownOption(name.to_string()));
        }
        let value = value.ok_or_else(|| ConfigError::MissingValue(name.to_string()))?;

        match name.to_ascii_lowercase().as_str() {
            "stoneradius" => {
                self.geometry.stone_radius = parse_positive(name, value)?;
            }
            "houseradius" => {
                self.geometry.house_radius = parse_positive(name, value)?;
            }
            "maxattempts" => {
                let n: usize = parse_value(name, value)?;
                if n == 0 {
                    return Err(out_of_range(name, "at least 1", value));
                }
                self.search.max_attempts = n;
            }
            "anglestep" => {
                let deg: u32 = parse_value(name, value)?;
                if deg == 0 || deg > 360 || 360 % deg != 0 {
                    return Err(out_of_range(name, "a divisor of 360", value));
                }
                self.search.angle_step_deg = deg;
            }
            "clearancebuffer" => {
                self.search.clearance_buffer = parse_non_negative(name, value)?;
            }
            "guardoffset" => {
                self.guard_offset = parse_non_negative(name, value)?;
            }
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_positive(name: &str, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = parse_value(name, value)?;
    if !v.is_finite() || v <= 0.0 {
        return Err(out_of_range(name, "a positive number", value));
    }
    Ok(v)
}

fn parse_non_negative(name: &str, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = parse_value(name, value)?;
    if !v.is_finite() || v < 0.0 {
        return Err(out_of_range(name, "a non-negative number", value));
    }
    Ok(v)
}

fn out_of_range(name: &str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::OutOfRange {
        name: name.to_string(),
        expected,
        value: value.to_string(),
    }
}
