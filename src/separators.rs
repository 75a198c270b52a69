//! Path-separator conventions used to judge snapshot names.
//!
//! The validator never queries the host ad hoc; callers resolve a
//! [`SeparatorSet`] once (usually [`SeparatorSet::host`]) and pass it in, which
//! also lets tests simulate a platform other than the one they run on.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Primary separator, optional alternate, and drive-prefix handling for a platform.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorSet {
    primary: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    alternate: Option<char>,
    drive_prefixes: bool,
}

impl SeparatorSet {
    /// Build a set; an alternate equal to the primary is dropped.
    pub fn new(primary: char, alternate: Option<char>, drive_prefixes: bool) -> Self {
        Self {
            primary,
            alternate: alternate.filter(|alt| *alt != primary),
            drive_prefixes,
        }
    }

    /// Forward slash only.
    pub fn posix() -> Self {
        Self::new('/', None, false)
    }

    /// Backslash with `/` accepted as an alternate, and `C:` style roots.
    pub fn windows() -> Self {
        Self::new('\\', Some('/'), true)
    }

    /// Conventions of the platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::new(std::path::MAIN_SEPARATOR, None, false)
        }
    }

    pub fn primary(&self) -> char {
        self.primary
    }

    pub fn alternate(&self) -> Option<char> {
        self.alternate
    }

    /// Whether a leading `X:` marks a volume root.
    pub fn drive_prefixes(&self) -> bool {
        self.drive_prefixes
    }

    pub fn is_separator(&self, ch: char) -> bool {
        ch == self.primary || self.alternate == Some(ch)
    }

    /// Iterate over every separator character in the set.
    pub fn separators(&self) -> impl Iterator<Item = char> {
        std::iter::once(self.primary).chain(self.alternate)
    }
}

/// Named platform whose separator set the CLI should apply.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Host,
    Posix,
    Windows,
}

impl Platform {
    pub fn separators(self) -> SeparatorSet {
        match self {
            Platform::Host => SeparatorSet::host(),
            Platform::Posix => SeparatorSet::posix(),
            Platform::Windows => SeparatorSet::windows(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Host => "host",
            Platform::Posix => "posix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform {0:?} (expected host, posix, or windows)")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "host" => Ok(Platform::Host),
            "posix" | "unix" => Ok(Platform::Posix),
            "windows" | "win" => Ok(Platform::Windows),
            _ => Err(UnknownPlatform(value.to_string())),
        }
    }
}
