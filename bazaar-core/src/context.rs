//! Situational context attributes consumed by context-aware scoring.
//!
//! The enums offer compile-time safety for rule lookups; the descriptor
//! groups the attributes a caller knows about, leaving the rest unset.
//!
//! # Examples
//! ```
//! use bazaar_core::{ContextDescriptor, Device, Season};
//!
//! let context = ContextDescriptor::new()
//!     .with_device(Device::Mobile)
//!     .with_season(Season::Winter);
//! assert_eq!(context.device, Some(Device::Mobile));
//! assert!(context.time_of_day.is_none());
//! ```

/// Device class the user is browsing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    /// Phones and other small-screen devices.
    Mobile,
    /// Desktop and laptop browsers.
    Desktop,
    /// Tablets and other mid-size touch devices.
    Tablet,
}

impl Device {
    /// Return the device class as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Tablet => "tablet",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Device {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            "tablet" => Ok(Self::Tablet),
            _ => Err(format!("unknown device '{s}'")),
        }
    }
}

/// Coarse time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeOfDay {
    /// Early hours up to midday.
    Morning,
    /// Midday to early evening.
    Afternoon,
    /// Evening and night.
    Evening,
}

impl TimeOfDay {
    /// Return the bucket as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(format!("unknown time of day '{s}'")),
        }
    }
}

/// Season of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// December to February.
    Winter,
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Autumn,
}

impl Season {
    /// Return the season as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" | "fall" => Ok(Self::Autumn),
            _ => Err(format!("unknown season '{s}'")),
        }
    }
}

/// Situational attributes known for a scoring request.
///
/// Every attribute is optional; unset attributes contribute nothing to a
/// context score. Unrecognised attributes supplied by upstream callers are
/// dropped before they reach this type (see [`ContextDescriptor::from_pairs`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContextDescriptor {
    /// Device class, when known.
    pub device: Option<Device>,
    /// Free-form location label (for example `"urban"`), when known.
    pub location: Option<String>,
    /// Time-of-day bucket, when known.
    pub time_of_day: Option<TimeOfDay>,
    /// Season, when known.
    pub season: Option<Season>,
}

impl ContextDescriptor {
    /// Construct a descriptor with every attribute unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            device: None,
            location: None,
            time_of_day: None,
            season: None,
        }
    }

    /// Set the device class while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    /// Set the location label while consuming `self`, enabling chaining.
    ///
    /// Labels are lowercased so that rule lookups are case-insensitive.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into().to_lowercase());
        self
    }

    /// Set the time-of-day bucket while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    /// Set the season while consuming `self`, enabling chaining.
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// True when no attribute is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.device.is_none()
            && self.location.is_none()
            && self.time_of_day.is_none()
            && self.season.is_none()
    }

    /// Build a descriptor from loosely typed key/value pairs.
    ///
    /// Recognised keys are `device`, `location`, `time_of_day`, and `season`
    /// (case-insensitive). Unrecognised keys and unparseable values are
    /// logged at `warn` level and skipped; they never fail the call. When a
    /// key repeats, the last parseable value wins.
    ///
    /// # Examples
    /// ```
    /// use bazaar_core::{ContextDescriptor, Device, Season};
    ///
    /// let context = ContextDescriptor::from_pairs([
    ///     ("device", "mobile"),
    ///     ("season", "winter"),
    ///     ("loyalty_tier", "gold"),
    /// ]);
    /// assert_eq!(context.device, Some(Device::Mobile));
    /// assert_eq!(context.season, Some(Season::Winter));
    /// assert!(context.location.is_none());
    /// ```
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut descriptor = Self::new();
        for (key, value) in pairs {
            match key.to_lowercase().as_str() {
                "device" => match value.parse() {
                    Ok(device) => descriptor.device = Some(device),
                    Err(reason) => log::warn!("ignoring context value: {reason}"),
                },
                "location" => descriptor.location = Some(value.to_lowercase()),
                "time_of_day" => match value.parse() {
                    Ok(time_of_day) => descriptor.time_of_day = Some(time_of_day),
                    Err(reason) => log::warn!("ignoring context value: {reason}"),
                },
                "season" => match value.parse() {
                    Ok(season) => descriptor.season = Some(season),
                    Err(reason) => log::warn!("ignoring context value: {reason}"),
                },
                other => log::warn!("ignoring unrecognised context key '{other}'"),
            }
        }
        descriptor
    }
}
