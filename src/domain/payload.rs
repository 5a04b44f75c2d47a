// Dashboard payload domain model
use serde::de::{DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Deserialize a field, treating `null` or a value of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list, dropping entries that do not fit the element type
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Snapshot of every dashboard section as served by the backend.
///
/// Every endpoint returns a subset of this object, so the same type is used
/// for the aggregate payload and for the per-section responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub company: Option<Company>,
    #[serde(default, deserialize_with = "lenient")]
    pub app: Option<AppData>,
    #[serde(default, deserialize_with = "lenient")]
    pub competitors: Option<Competitors>,
    #[serde(default, deserialize_with = "lenient")]
    pub trends: Option<Trends>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub news: Option<Vec<NewsArticle>>,
    #[serde(default)]
    pub traffic: Option<Value>,
    #[serde(default)]
    pub youtube: Option<Value>,
    #[serde(default)]
    pub source_status: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub fetched_at: Option<String>,
}

impl DashboardPayload {
    /// Own Google Play rating, if the payload carries one
    pub fn play_store_rating(&self) -> Option<f64> {
        self.app
            .as_ref()
            .and_then(|app| app.play_store.as_ref())
            .and_then(|store| store.rating)
    }

    pub fn countries(&self) -> Option<&[String]> {
        self.company
            .as_ref()
            .and_then(|company| company.countries.as_deref())
    }

    pub fn timeseries(&self) -> &[TrendPoint] {
        self.trends
            .as_ref()
            .and_then(|trends| trends.timeseries.as_deref())
            .unwrap_or_default()
    }

    pub fn interest_by_country(&self) -> &[CountryInterest] {
        self.trends
            .as_ref()
            .and_then(|trends| trends.by_country.as_deref())
            .unwrap_or_default()
    }

    pub fn articles(&self) -> &[NewsArticle] {
        self.news.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub gmv: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub active_users: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub countries: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub funding_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub founded: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub hq: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub revenue_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub estimation_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default, deserialize_with = "lenient")]
    pub play_store: Option<StoreListing>,
    #[serde(default, deserialize_with = "lenient")]
    pub app_store: Option<StoreListing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreListing {
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub reviews: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ratings_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub installs: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompetitorMetrics {
    #[serde(default, deserialize_with = "lenient")]
    pub app_rating: Option<f64>,
}

/// Competitor mapping, kept in the order the keys arrived in the payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Competitors(Vec<(String, CompetitorMetrics)>);

impl Competitors {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompetitorMetrics)> {
        self.0.iter().map(|(name, metrics)| (name.as_str(), metrics))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for Competitors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, metrics) in &self.0 {
            map.serialize_entry(name, metrics)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Competitors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CompetitorsVisitor;

        impl<'de> Visitor<'de> for CompetitorsVisitor {
            type Value = Competitors;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of competitor name to metrics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    let metrics = serde_json::from_value(value).unwrap_or_default();
                    entries.push((name, metrics));
                }
                Ok(Competitors(entries))
            }
        }

        deserializer.deserialize_map(CompetitorsVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    #[serde(default, deserialize_with = "lenient_list")]
    pub timeseries: Option<Vec<TrendPoint>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub by_country: Option<Vec<CountryInterest>>,
}

/// One time bucket: a `date` plus one value per tracked search term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendPoint(Map<String, Value>);

impl TrendPoint {
    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    /// Interest for a named series; a missing or non-numeric value reads as zero
    pub fn value(&self, series: &str) -> f64 {
        self.0.get(series).and_then(Value::as_f64).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryInterest {
    #[serde(default, deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub interest: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(default, rename = "publishedAt", deserialize_with = "lenient")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// Response of the backend refresh trigger
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshReport {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub output: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
}
