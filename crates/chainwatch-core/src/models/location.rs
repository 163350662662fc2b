use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Optional sign, ASCII digits, optional decimal part. No exponent, no
/// thousands separators, no surrounding whitespace.
static COORDINATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+(\.[0-9]+)?$").ok());

/// A latitude or longitude as it arrives from the inventory feed.
///
/// Feeds mix JSON numbers and numeric strings, and sometimes omit the
/// value entirely. All three shapes are accepted at ingestion; whether the
/// value is usable is decided by [`Coordinate::is_valid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl Coordinate {
    /// Build a textual coordinate.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The coordinate rule shared by the validator and the corrector.
    ///
    /// Numbers must be finite. Strings must match the plain decimal pattern
    /// and parse to a finite value.
    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// The numeric value, if the coordinate satisfies the coordinate rule.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(s) => {
                let matches = COORDINATE_PATTERN
                    .as_ref()
                    .map(|re| re.is_match(s))
                    .unwrap_or(false);
                if !matches {
                    return None;
                }
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            Self::Missing => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "<missing>"),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Which kind of site a record describes, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    Store,
    DistributionCenter,
}

/// Site-specific payload. Stores track stock, distribution centers track capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Site {
    Store {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stock: Option<i64>,
    },
    DistributionCenter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        capacity: Option<i64>,
    },
}

impl Site {
    pub fn kind(&self) -> SiteKind {
        match self {
            Self::Store { .. } => SiteKind::Store,
            Self::DistributionCenter { .. } => SiteKind::DistributionCenter,
        }
    }
}

/// A store or distribution-center entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Coordinate,
    #[serde(default)]
    pub longitude: Coordinate,
    #[serde(flatten)]
    pub site: Site,
}

impl LocationRecord {
    /// A retail store record.
    pub fn store(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: impl Into<Coordinate>,
        longitude: impl Into<Coordinate>,
        stock: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            latitude: latitude.into(),
            longitude: longitude.into(),
            site: Site::Store { stock },
        }
    }

    /// A distribution-center record.
    pub fn distribution_center(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: impl Into<Coordinate>,
        longitude: impl Into<Coordinate>,
        capacity: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            latitude: latitude.into(),
            longitude: longitude.into(),
            site: Site::DistributionCenter { capacity },
        }
    }

    pub fn kind(&self) -> SiteKind {
        self.site.kind()
    }

    /// Stock level, for stores that report one.
    pub fn stock(&self) -> Option<i64> {
        match self.site {
            Site::Store { stock } => stock,
            Site::DistributionCenter { .. } => None,
        }
    }

    /// Capacity, for distribution centers that report one.
    pub fn capacity(&self) -> Option<i64> {
        match self.site {
            Site::DistributionCenter { capacity } => capacity,
            Site::Store { .. } => None,
        }
    }
}

/// The inventory feed as the state container holds it: stores and
/// distribution centers in separate lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordBatch {
    #[serde(default)]
    pub stores: Vec<LocationRecord>,
    #[serde(default)]
    pub distribution_centers: Vec<LocationRecord>,
}

impl RecordBatch {
    /// One batch for validation: stores first, then distribution centers.
    /// Issue indices run across the combined sequence.
    pub fn combined(&self) -> Vec<LocationRecord> {
        self.stores
            .iter()
            .chain(self.distribution_centers.iter())
            .cloned()
            .collect()
    }

    /// Split a combined batch back into the two lists, by site kind.
    pub fn from_combined(records: Vec<LocationRecord>) -> Self {
        let (stores, distribution_centers) = records
            .into_iter()
            .partition(|r| r.kind() == SiteKind::Store);
        Self {
            stores,
            distribution_centers,
        }
    }

    pub fn len(&self) -> usize {
        self.stores.len() + self.distribution_centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
