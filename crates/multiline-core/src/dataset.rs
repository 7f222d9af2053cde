// File: crates/multiline-core/src/dataset.rs
// Summary: Input model (categories carrying parallel label/value arrays) and its JSON form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, Result};

/// Whole chart input. Replaced wholesale on every update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(rename = "values", alias = "categories", default)]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_title: Option<String>,
}

/// One x-axis bucket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub title: String,
    /// Only the first group is plotted; later groups still count towards the y extent.
    #[serde(rename = "points", alias = "seriesGroups", default)]
    pub series_groups: Vec<SeriesGroup>,
}

/// Parallel arrays: `labels[i]` names `values[i]`, which belongs to series `i`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "coerce_numbers")]
    pub values: Vec<f64>,
}

impl ChartDataset {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories, y_axis_title: None }
    }

    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ChartError::from)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// A y title that is present and non-empty.
    pub fn y_title(&self) -> Option<&str> {
        self.y_axis_title.as_deref().filter(|t| !t.is_empty())
    }

    /// True when at least one category carries a non-empty title.
    pub fn has_category_titles(&self) -> bool {
        self.categories.iter().any(|c| !c.title.is_empty())
    }

    /// Every value of every group, in dataset order, tagged with (category, group, index).
    pub fn all_values(&self) -> impl Iterator<Item = (usize, usize, usize, f64)> + '_ {
        self.categories.iter().enumerate().flat_map(|(c, cat)| {
            cat.series_groups.iter().enumerate().flat_map(move |(g, group)| {
                group.values.iter().enumerate().map(move |(i, &v)| (c, g, i, v))
            })
        })
    }
}

impl Category {
    pub fn new(title: impl Into<String>, group: SeriesGroup) -> Self {
        Self { title: title.into(), series_groups: vec![group] }
    }

    /// The group that is actually plotted.
    pub fn primary(&self) -> Option<&SeriesGroup> {
        self.series_groups.first()
    }
}

impl SeriesGroup {
    pub fn new<L, S>(labels: L, values: Vec<f64>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { labels: labels.into_iter().map(Into::into).collect(), values }
    }

    /// Values without labels.
    pub fn unlabeled(values: Vec<f64>) -> Self {
        Self { labels: Vec::new(), values }
    }

    /// Label for series `i`; missing or empty labels read as `None`.
    pub fn label(&self, i: usize) -> Option<&str> {
        self.labels.get(i).map(String::as_str).filter(|l| !l.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Null(()),
}

/// Accepts numbers and numeric strings; anything else becomes NaN so that
/// layout reports it as a non-numeric value instead of failing the parse.
fn coerce_numbers<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<LooseNumber>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| match v {
            LooseNumber::Number(n) => n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            LooseNumber::Null(()) => f64::NAN,
        })
        .collect())
}
