//! Revenue values and the data shared by every revenue center (city, town,
//! offboard).

use core::str::FromStr;

/// Game phase a revenue value applies to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RevenuePhase {
    Yellow,
    Green,
    Brown,
    Gray,
    Diesel,
}

/// Revenue of a stop: one flat value, or one value per phase.
///
/// Written in tile codes as `30` or `yellow_30|brown_60|diesel_90`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revenue {
    Flat(u32),
    Phased(Vec<(RevenuePhase, u32)>),
}

impl Default for Revenue {
    fn default() -> Self {
        Self::Flat(0)
    }
}

impl Revenue {
    /// Highest value across phases.
    pub fn max(&self) -> u32 {
        match self {
            Self::Flat(value) => *value,
            Self::Phased(values) => values.iter().map(|(_, v)| *v).max().unwrap_or(0),
        }
    }

    /// Value during `phase`, or `None` if a phased revenue omits it.
    pub fn for_phase(&self, phase: RevenuePhase) -> Option<u32> {
        match self {
            Self::Flat(value) => Some(*value),
            Self::Phased(values) => values.iter().find(|(p, _)| *p == phase).map(|(_, v)| *v),
        }
    }

    /// What a renderer should show: a single number whenever every phase agrees.
    pub fn to_render(&self) -> Revenue {
        match self {
            Self::Flat(value) => Self::Flat(*value),
            Self::Phased(values) => match values.split_first() {
                Some(((_, first), rest)) if rest.iter().all(|(_, v)| v == first) => {
                    Self::Flat(*first)
                }
                _ => self.clone(),
            },
        }
    }
}

/// Error returned for revenue tokens that are neither `N` nor `phase_N|...`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid revenue '{0}'")]
pub struct InvalidRevenue(pub String);

impl FromStr for Revenue {
    type Err = InvalidRevenue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidRevenue(s.to_string());

        if !s.contains('_') {
            return s.parse().map(Self::Flat).map_err(|_| invalid());
        }

        let mut values = Vec::new();
        for entry in s.split('|') {
            let (phase, value) = entry.split_once('_').ok_or_else(invalid)?;
            let phase = phase.parse::<RevenuePhase>().map_err(|_| invalid())?;
            let value = value.parse::<u32>().map_err(|_| invalid())?;
            values.push((phase, value));
        }
        Ok(Self::Phased(values))
    }
}

/// Whether routes must, may, or may not count a stop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RouteEligibility {
    #[default]
    Mandatory,
    Optional,
    Never,
}

/// Attributes common to cities, towns and offboards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevenueCenter {
    pub revenue: Revenue,
    /// Grouping keys, e.g. offboards that count as one destination.
    pub groups: Vec<String>,
    pub hidden: bool,
    /// Number of route steps a visit consumes.
    pub visit_cost: u32,
    pub route: RouteEligibility,
    /// Render format for the revenue, e.g. `%d+`.
    pub format: Option<String>,
}

impl RevenueCenter {
    pub const DEFAULT_VISIT_COST: u32 = 1;

    pub fn new(revenue: Revenue) -> Self {
        Self {
            revenue,
            groups: Vec::new(),
            hidden: false,
            visit_cost: Self::DEFAULT_VISIT_COST,
            route: RouteEligibility::default(),
            format: None,
        }
    }
}

impl Default for RevenueCenter {
    fn default() -> Self {
        Self::new(Revenue::default())
    }
}
