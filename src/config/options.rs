// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Invalid timeout (seconds): {0}")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KioskOptions {
    pub ledger: LedgerOptions,
    pub fetch: FetchOptions,
    pub clock: ClockOptions,
    pub credentials_path: PathBuf,
}

impl Default for KioskOptions {
    fn default() -> Self {
        Self {
            ledger: LedgerOptions::default(),
            fetch: FetchOptions::default(),
            clock: ClockOptions::default(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
        }
    }
}

impl KioskOptions {
    /// Defaults, then `KIOSK_*` environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut opts = Self::default();

        if let Ok(p) = std::env::var(ENV_LEDGER) {
            if !p.trim().is_empty() { opts.ledger.set_path(p.trim()); }
        }
        if let Ok(p) = std::env::var(ENV_CREDENTIALS) {
            if !p.trim().is_empty() { opts.credentials_path = PathBuf::from(p.trim()); }
        }
        if let Ok(tz) = std::env::var(ENV_TIMEZONE) {
            if !tz.trim().is_empty() { opts.clock.set_timezone(tz.trim())?; }
        }
        if let Ok(t) = std::env::var(ENV_TIMEOUT) {
            opts.fetch.set_timeout_secs(&t)?;
        }
        Ok(opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerOptions {
    path: PathBuf,
    pub export_path: PathBuf,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEDGER_FILE),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl LedgerOptions {
    pub fn path(&self) -> &Path { &self.path }

    /// Accepts a file path; a trailing separator means "directory", and the
    /// default file name is appended.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.path = if s.ends_with('/') || s.ends_with('\\') {
            PathBuf::from(s).join(DEFAULT_LEDGER_FILE)
        } else {
            PathBuf::from(s)
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl FetchOptions {
    pub fn set_timeout_secs(&mut self, text: &str) -> Result<(), ConfigError> {
        let secs: u64 = text
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout(s!(text)))?;
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout(s!(text)));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(())
    }
}

/// Where registration timestamps come from.
/// `None` → the machine's local time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClockOptions {
    timezone: Option<Tz>,
}

impl ClockOptions {
    pub fn with_timezone(name: &str) -> Result<Self, ConfigError> {
        let mut c = Self::default();
        c.set_timezone(name)?;
        Ok(c)
    }

    pub fn set_timezone(&mut self, name: &str) -> Result<(), ConfigError> {
        let tz: Tz = name
            .parse()
            .map_err(|_| ConfigError::UnknownTimezone(s!(name)))?;
        self.timezone = Some(tz);
        Ok(())
    }

    pub fn timezone_name(&self) -> Option<&'static str> {
        self.timezone.map(|tz| tz.name())
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).fixed_offset(),
            None => Local::now().fixed_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_dir_hint_appends_default_file() {
        let mut l = LedgerOptions::default();
        l.set_path("out/");
        assert_eq!(l.path(), Path::new("out").join(DEFAULT_LEDGER_FILE));
        l.set_path("  other.xlsx ");
        assert_eq!(l.path(), Path::new("other.xlsx"));
    }

    #[test]
    fn timeout_must_be_positive_integer() {
        let mut f = FetchOptions::default();
        assert_eq!(f.timeout, Duration::from_secs(10));
        assert!(f.set_timeout_secs("0").is_err());
        assert!(f.set_timeout_secs("ten").is_err());
        f.set_timeout_secs(" 3 ").unwrap();
        assert_eq!(f.timeout, Duration::from_secs(3));
    }

    #[test]
    fn named_timezone_resolves() {
        let c = ClockOptions::with_timezone("America/Bogota").unwrap();
        assert_eq!(c.timezone_name(), Some("America/Bogota"));
        // Bogota has no DST: always UTC-5
        assert_eq!(c.now().offset().local_minus_utc(), -5 * 3600);
        assert_eq!(
            ClockOptions::with_timezone("Mars/Olympus"),
            Err(ConfigError::UnknownTimezone(s!("Mars/Olympus")))
        );
    }
}
