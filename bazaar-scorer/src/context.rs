//! Context-aware scoring from configurable rule tables.
//!
//! A [`ContextModel`] holds the rule tables: device and location affinities
//! plus the category sets eligible for each time-of-day bucket and season.
//! [`ContextScorer`] applies the tables to one item category at a time under
//! caller-supplied [`ContextWeights`]. Scores are additive and carry no
//! normalisation, so they are only comparable within a single call.

use std::collections::{BTreeSet, HashMap};

use bazaar_core::{Category, ContextDescriptor, Device, Season, TimeOfDay};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by context scoring configuration.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A scoring weight was negative or non-finite.
    #[error("context weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending weight field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A context model document failed to parse.
    #[error("context model JSON is invalid")]
    InvalidModel {
        /// The underlying parse failure.
        #[from]
        source: serde_json::Error,
    },
}

/// Relative importance of each context attribute.
///
/// The defaults sum to 1 so that a fully matching item scores close to a
/// fixed ceiling; callers supplying their own weights usually keep that
/// convention, though [`ContextWeights::validate`] enforces only finiteness
/// and non-negativity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextWeights {
    /// Weight applied to the device affinity rule.
    pub device: f32,
    /// Weight applied to the location affinity rule.
    pub location: f32,
    /// Weight granted when the time-of-day category set matches.
    pub time_of_day: f32,
    /// Weight granted when the season category set matches.
    pub season: f32,
}

impl Default for ContextWeights {
    fn default() -> Self {
        Self {
            device: 0.2,
            location: 0.2,
            time_of_day: 0.3,
            season: 0.3,
        }
    }
}

impl ContextWeights {
    /// Construct weights from explicit values.
    #[must_use]
    pub const fn new(device: f32, location: f32, time_of_day: f32, season: f32) -> Self {
        Self {
            device,
            location,
            time_of_day,
            season,
        }
    }

    /// Check every weight for finiteness and non-negativity.
    ///
    /// # Errors
    /// Returns [`ContextError::InvalidWeight`] naming the first offending
    /// field.
    pub fn validate(self) -> Result<Self, ContextError> {
        let fields = [
            ("device", self.device),
            ("location", self.location),
            ("time_of_day", self.time_of_day),
            ("season", self.season),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ContextError::InvalidWeight { name, value });
            }
        }
        Ok(self)
    }
}

/// Rule tables consulted by [`ContextScorer`].
///
/// The tables are configuration data, not algorithmic logic; the default
/// model ships the built-in demo tables (mobile affinity 0.8, urban affinity
/// 0.7, and the morning/afternoon/evening and winter/summer category sets),
/// and deployments replace them via the builders or [`ContextModel::from_json`].
///
/// # Examples
/// ```
/// use bazaar_scorer::ContextModel;
///
/// let model = ContextModel::from_json(
///     r#"{
///         "device_affinity": {"Desktop": 0.5},
///         "season": {"Summer": ["Beach Wear"]}
///     }"#,
/// )?;
/// assert_ne!(model, ContextModel::default());
/// # Ok::<(), bazaar_scorer::ContextError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextModel {
    device_affinity: HashMap<Device, f32>,
    location_affinity: HashMap<String, f32>,
    time_of_day: HashMap<TimeOfDay, BTreeSet<Category>>,
    season: HashMap<Season, BTreeSet<Category>>,
}

fn category_set(names: &[&str]) -> BTreeSet<Category> {
    names.iter().copied().map(Category::from).collect()
}

impl Default for ContextModel {
    fn default() -> Self {
        Self {
            device_affinity: HashMap::from([(Device::Mobile, 0.8)]),
            location_affinity: HashMap::from([("urban".to_owned(), 0.7)]),
            time_of_day: HashMap::from([
                (
                    TimeOfDay::Morning,
                    category_set(&["Breakfast Items", "Fitness Products"]),
                ),
                (
                    TimeOfDay::Afternoon,
                    category_set(&["Lunch Accessories", "Work Gear"]),
                ),
                (
                    TimeOfDay::Evening,
                    category_set(&["Dinner Products", "Relaxation Items"]),
                ),
            ]),
            season: HashMap::from([
                (
                    Season::Winter,
                    category_set(&["Warm Clothing", "Indoor Accessories"]),
                ),
                (
                    Season::Summer,
                    category_set(&["Beach Wear", "Cooling Products"]),
                ),
            ]),
        }
    }
}

impl ContextModel {
    /// A model with no rules at all; every score is zero until tables are
    /// added through the builders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            device_affinity: HashMap::new(),
            location_affinity: HashMap::new(),
            time_of_day: HashMap::new(),
            season: HashMap::new(),
        }
    }

    /// Set the affinity for a device class while consuming `self`, enabling
    /// chaining.
    #[must_use]
    pub fn with_device_affinity(mut self, device: Device, affinity: f32) -> Self {
        self.device_affinity.insert(device, affinity);
        self
    }

    /// Set the affinity for a location label while consuming `self`, enabling
    /// chaining.
    ///
    /// Labels are lowercased so that lookups match [`ContextDescriptor`]
    /// locations case-insensitively.
    #[must_use]
    pub fn with_location_affinity(mut self, location: impl Into<String>, affinity: f32) -> Self {
        self.location_affinity
            .insert(location.into().to_lowercase(), affinity);
        self
    }

    /// Replace the eligible categories for a time-of-day bucket while
    /// consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_time_of_day_categories<C>(
        mut self,
        time_of_day: TimeOfDay,
        categories: impl IntoIterator<Item = C>,
    ) -> Self
    where
        C: Into<Category>,
    {
        self.time_of_day
            .insert(time_of_day, categories.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the eligible categories for a season while consuming `self`,
    /// enabling chaining.
    #[must_use]
    pub fn with_season_categories<C>(
        mut self,
        season: Season,
        categories: impl IntoIterator<Item = C>,
    ) -> Self
    where
        C: Into<Category>,
    {
        self.season
            .insert(season, categories.into_iter().map(Into::into).collect());
        self
    }

    /// Parse a model from a JSON document.
    ///
    /// Sections present in the document replace the corresponding built-in
    /// table wholesale; absent sections keep their defaults. Location labels
    /// are lowercased after parsing so lookups stay case-insensitive.
    ///
    /// # Errors
    /// Returns [`ContextError::InvalidModel`] when the document does not
    /// parse.
    pub fn from_json(json: &str) -> Result<Self, ContextError> {
        let Self {
            device_affinity,
            location_affinity,
            time_of_day,
            season,
        } = serde_json::from_str(json)?;
        Ok(Self {
            device_affinity,
            location_affinity: location_affinity
                .into_iter()
                .map(|(label, affinity)| (label.to_lowercase(), affinity))
                .collect(),
            time_of_day,
            season,
        })
    }
}

/// Score item categories against a context under a set of weights.
///
/// Each rule that fires adds its weighted contribution; rules whose context
/// attribute is unset, or whose table has no entry, add nothing. The default
/// scorer carries [`ContextModel::default`].
///
/// # Examples
/// ```
/// use bazaar_core::{Category, ContextDescriptor, Season};
/// use bazaar_scorer::{ContextScorer, ContextWeights};
///
/// let scorer = ContextScorer::default();
/// let context = ContextDescriptor::new().with_season(Season::Winter);
///
/// let score = scorer.score(
///     &Category::from("Warm Clothing"),
///     &context,
///     &ContextWeights::default(),
/// );
/// assert!((score - 0.3).abs() < 0.000_1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContextScorer {
    model: ContextModel,
}

impl ContextScorer {
    /// Build a scorer around a rule model.
    #[must_use]
    pub const fn new(model: ContextModel) -> Self {
        Self { model }
    }

    /// The rule model this scorer consults.
    #[must_use]
    pub const fn model(&self) -> &ContextModel {
        &self.model
    }

    /// Score one item category against `context`.
    ///
    /// The result is non-negative whenever the model affinities and weights
    /// are, and never decreases as further context attributes are set.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "additive rule scoring is inherently floating point"
    )]
    pub fn score(
        &self,
        category: &Category,
        context: &ContextDescriptor,
        weights: &ContextWeights,
    ) -> f32 {
        let device = context
            .device
            .and_then(|device| self.model.device_affinity.get(&device))
            .map_or(0.0_f32, |affinity| weights.device * affinity);
        let location = context
            .location
            .as_deref()
            .and_then(|label| self.model.location_affinity.get(label))
            .map_or(0.0_f32, |affinity| weights.location * affinity);
        let time_of_day = if self.matches_time_of_day(category, context) {
            weights.time_of_day
        } else {
            0.0_f32
        };
        let season = if self.matches_season(category, context) {
            weights.season
        } else {
            0.0_f32
        };
        device + location + time_of_day + season
    }

    fn matches_time_of_day(&self, category: &Category, context: &ContextDescriptor) -> bool {
        context.time_of_day.is_some_and(|time_of_day| {
            self.model
                .time_of_day
                .get(&time_of_day)
                .is_some_and(|eligible| eligible.contains(category))
        })
    }

    fn matches_season(&self, category: &Category, context: &ContextDescriptor) -> bool {
        context.season.is_some_and(|season| {
            self.model
                .season
                .get(&season)
                .is_some_and(|eligible| eligible.contains(category))
        })
    }
}
