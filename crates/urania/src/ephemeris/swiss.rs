//! Swiss Ephemeris backend.
//!
//! The C library keeps its data path and caches in process-global state, so
//! every call goes through [`SWISS_STATE`].

use crate::ephemeris::adapter::{Ephemeris, EphemerisError};
use crate::ephemeris::types::Body;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use swisseph::swe::{calc_ut, julday, set_ephe_path, sidtime};

/// SEFLG_SWIEPH: read the compressed Swiss Ephemeris data files
const FLG_SWIEPH: u32 = 2;

/// SEFLG_MOSEPH: built-in Moshier analytical theory, no data files
const FLG_MOSEPH: u32 = 4;

/// SE_GREG_CAL
const GREGORIAN_CALENDAR: u32 = 1;

pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

lazy_static::lazy_static! {
    /// Data path most recently handed to the library.
    static ref SWISS_STATE: Mutex<Option<String>> = Mutex::new(None);
}

/// Swiss Ephemeris adapter implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwissEphemerisAdapter {
    /// Data directory; `None` in Moshier mode
    ephemeris_path: Option<String>,
    flags: u32,
}

impl SwissEphemerisAdapter {
    /// Adapter reading data files from `ephemeris_path`, else from
    /// `SWISS_EPHEMERIS_PATH`, else from the default install location.
    /// The directory must exist.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var(EPHEMERIS_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.is_dir() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist; install the Swiss Ephemeris data files"
                    .to_string(),
            });
        }
        let path_str = match path.to_str() {
            Some(s) if !s.contains('\0') => s.to_string(),
            _ => {
                return Err(EphemerisError::FileNotFound {
                    path: path.display().to_string(),
                    message: "Ephemeris path must be valid UTF-8 without NUL bytes".to_string(),
                })
            }
        };

        log::debug!("Swiss Ephemeris data directory: {path_str}");
        Ok(Self {
            ephemeris_path: Some(path_str),
            flags: FLG_SWIEPH,
        })
    }

    /// Adapter on the library's built-in Moshier theory; needs no files.
    pub fn moshier() -> Self {
        Self {
            ephemeris_path: None,
            flags: FLG_MOSEPH,
        }
    }

    /// Data files when a directory is configured or discoverable, Moshier
    /// otherwise. An explicitly given directory must exist.
    pub fn locate(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        if ephemeris_path.is_some() || env::var_os(EPHEMERIS_PATH_ENV).is_some() {
            return Self::new(ephemeris_path);
        }
        if Path::new(DEFAULT_EPHEMERIS_PATH).is_dir() {
            return Self::new(Some(PathBuf::from(DEFAULT_EPHEMERIS_PATH)));
        }
        log::debug!("No Swiss Ephemeris data directory found; using Moshier mode");
        Ok(Self::moshier())
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref().map(Path::new)
    }

    pub fn is_moshier(&self) -> bool {
        self.flags == FLG_MOSEPH
    }

    fn with_library<T>(&self, call: impl FnOnce() -> T) -> T {
        let mut current = SWISS_STATE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = &self.ephemeris_path {
            if current.as_deref() != Some(path.as_str()) {
                set_ephe_path(path);
                *current = Some(path.clone());
            }
        }
        call()
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn longitude_of(&self, body: Body, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = swiss_julian_day(instant);
        let result = self
            .with_library(|| calc_ut(jd, body.swiss_id() as u32, self.flags))
            .map_err(|e| EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            })?;
        Ok(result.out[0])
    }

    fn sidereal_time_at(&self, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let jd = swiss_julian_day(instant);
        Ok(self.with_library(|| sidtime(jd)))
    }
}

/// Julian day (UT) through the library's own calendar routine
pub(crate) fn swiss_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    julday(
        dt.year(),
        dt.month() as i32,
        dt.day() as i32,
        hour_decimal,
        GREGORIAN_CALENDAR,
    )
}
