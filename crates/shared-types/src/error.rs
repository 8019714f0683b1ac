use std::fmt;

/// Categorization of configuration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Parse,
    InvalidTiming,
    InvalidFixture,
    Io,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::Parse => write!(f, "Parse"),
            ConfigErrorKind::InvalidTiming => write!(f, "InvalidTiming"),
            ConfigErrorKind::InvalidFixture => write!(f, "InvalidFixture"),
            ConfigErrorKind::Io => write!(f, "Io"),
        }
    }
}

/// Error raised while loading or validating `config.toml`.
///
/// Never surfaced to the user: the app logs it and falls back to the
/// embedded defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::Parse,
            message: message.into(),
        }
    }

    pub fn invalid_timing(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::InvalidTiming,
            message: message.into(),
        }
    }

    pub fn invalid_fixture(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::InvalidFixture,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::Io,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse(err.to_string())
    }
}
