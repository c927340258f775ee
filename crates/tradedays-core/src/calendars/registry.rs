//! Process-wide registry of holiday profiles.
//!
//! Profiles are immutable, so one shared instance per market is enough.
//! The global registry is built on first access and lives for the rest of
//! the program.
//!
//! # Example
//!
//! ```rust
//! use tradedays_core::calendars::{BusinessCalendar, ProfileRegistry};
//! use tradedays_core::Date;
//!
//! let lse = ProfileRegistry::global().resolve("lse").unwrap();
//! assert!(lse.is_holiday(Date::from_ymd(2012, 6, 5).unwrap()));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Asx, Bovespa, Fse, HolidayProfile, Lme, Lse, Mil, Nyse, Tse, Tsx};
use crate::error::{CalendarError, CalendarResult};

/// Exchanges with a built-in holiday profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    /// New York Stock Exchange
    #[default]
    Nyse,
    /// London Stock Exchange
    Lse,
    /// London Metal Exchange
    Lme,
    /// Sao Paulo stock exchange
    Bovespa,
    /// Australian Securities Exchange
    Asx,
    /// Toronto Stock Exchange
    Tsx,
    /// Frankfurt Stock Exchange
    Fse,
    /// Borsa Italiana (Milan)
    Mil,
    /// Tokyo Stock Exchange
    Tse,
}

impl Market {
    /// All markets, in registration order.
    pub const ALL: [Market; 9] = [
        Market::Nyse,
        Market::Lse,
        Market::Lme,
        Market::Bovespa,
        Market::Asx,
        Market::Tsx,
        Market::Fse,
        Market::Mil,
        Market::Tse,
    ];

    /// Returns the market code used to look the profile up.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Market::Nyse => "NYSE",
            Market::Lse => "LSE",
            Market::Lme => "LME",
            Market::Bovespa => "BOVESPA",
            Market::Asx => "ASX",
            Market::Tsx => "TSX",
            Market::Fse => "FSE",
            Market::Mil => "MIL",
            Market::Tse => "TSE",
        }
    }

    /// Returns the exchange's full name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Market::Nyse => "New York Stock Exchange",
            Market::Lse => "London Stock Exchange",
            Market::Lme => "London Metal Exchange",
            Market::Bovespa => "Sao Paulo Stock Exchange",
            Market::Asx => "Australian Securities Exchange",
            Market::Tsx => "Toronto Stock Exchange",
            Market::Fse => "Frankfurt Stock Exchange",
            Market::Mil => "Borsa Italiana",
            Market::Tse => "Tokyo Stock Exchange",
        }
    }

    /// Returns the shared profile for this market.
    #[must_use]
    pub fn profile(self) -> Arc<dyn HolidayProfile> {
        ProfileRegistry::global()
            .get(self)
            .unwrap_or_else(|| self.build())
    }

    fn build(self) -> Arc<dyn HolidayProfile> {
        match self {
            Market::Nyse => Arc::new(Nyse),
            Market::Lse => Arc::new(Lse),
            Market::Lme => Arc::new(Lme),
            Market::Bovespa => Arc::new(Bovespa),
            Market::Asx => Arc::new(Asx),
            Market::Tsx => Arc::new(Tsx),
            Market::Fse => Arc::new(Fse),
            Market::Mil => Arc::new(Mil),
            Market::Tse => Arc::new(Tse),
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Market {
    type Err = CalendarError;

    /// Parses a market code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Market::ALL
            .into_iter()
            .find(|market| market.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CalendarError::unknown_profile(code))
    }
}

/// Registry mapping market names to shared holiday profiles.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, Arc<dyn HolidayProfile>>,
}

/// Global registry instance.
static GLOBAL_REGISTRY: OnceLock<ProfileRegistry> = OnceLock::new();

impl ProfileRegistry {
    /// Returns the global profile registry.
    ///
    /// The registry is lazily initialized on first access; concurrent first
    /// callers all observe the same instance.
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::new)
    }

    /// Creates a new registry with every built-in market profile.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for market in Market::ALL {
            registry.register(market.build());
        }
        debug!("holiday profile registry created with {} profiles", registry.len());
        registry
    }

    /// Creates a registry with no profiles.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Registers a profile under its own name, replacing any profile
    /// already registered under that name.
    pub fn register(&mut self, profile: Arc<dyn HolidayProfile>) {
        debug!("registering holiday profile {}", profile.name());
        self.profiles
            .insert(profile.name().to_ascii_uppercase(), profile);
    }

    /// Returns the profile for a built-in market, if registered.
    #[must_use]
    pub fn get(&self, market: Market) -> Option<Arc<dyn HolidayProfile>> {
        self.profiles.get(market.code()).cloned()
    }

    /// Resolves a profile by market name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownProfile` if no profile has that name.
    pub fn resolve(&self, name: &str) -> CalendarResult<Arc<dyn HolidayProfile>> {
        let key = name.trim().to_ascii_uppercase();
        self.profiles
            .get(&key)
            .cloned()
            .ok_or_else(|| CalendarError::unknown_profile(name.trim()))
    }

    /// Returns the registered profile names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.profiles.values().map(|p| p.name()).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profiles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a profile by market name from the global registry.
///
/// # Errors
///
/// Returns `CalendarError::UnknownProfile` if no profile has that name.
pub fn profile(name: &str) -> CalendarResult<Arc<dyn HolidayProfile>> {
    ProfileRegistry::global().resolve(name)
}
