//! Resolution of the separator set used by the CLI.

use anyhow::{Context, Result};

use crate::separators::{Platform, SeparatorSet};

/// Environment variable naming the platform whose separators apply.
pub const PLATFORM_ENV: &str = "SNAPGUARD_PLATFORM";

/// Settings resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub platform: Platform,
    pub separators: SeparatorSet,
}

impl Config {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            separators: platform.separators(),
        }
    }

    /// Flag beats environment, environment beats the host default.
    pub fn resolve(flag: Option<Platform>) -> Result<Self> {
        let env_value = std::env::var(PLATFORM_ENV).ok();
        Self::resolve_from(flag, env_value.as_deref())
    }

    pub(crate) fn resolve_from(flag: Option<Platform>, env_value: Option<&str>) -> Result<Self> {
        if let Some(platform) = flag {
            return Ok(Self::for_platform(platform));
        }
        match env_value.filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                let platform = value
                    .parse::<Platform>()
                    .with_context(|| format!("parse {PLATFORM_ENV}"))?;
                Ok(Self::for_platform(platform))
            }
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_platform(Platform::Host)
    }
}
