//! Derived strain fields computed from single source values.

use serde_json::Value as Json;

/// Markers for strains with little or no CBD.
const LOW_CBD_MARKERS: &[&str] = &["KAUM/KEIN CBD", "< 2% CBD"];

/// Markers for strains with little or no THC.
const LOW_THC_MARKERS: &[&str] = &["NUR CBD", "< 2% THC"];

/// Marker for strains with comparable amounts of THC and CBD.
const BALANCED_MARKER: &str = "CBD ≈ THC";

/// Coarse THC/CBD classification of a strain.
///
/// The numbers are qualitative flags, not lab values: `1` marks the dominant
/// compound of a one-sided strain and `10`/`10` marks a balanced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Potency {
    /// THC flag.
    pub thc: Option<u32>,
    /// CBD flag.
    pub cbd: Option<u32>,
}

impl Potency {
    /// Classify the free-text CBD category of a strain.
    ///
    /// Rules are checked in order and the first match wins:
    ///
    /// | Category contains              | THC  | CBD  |
    /// |--------------------------------|------|------|
    /// | `KAUM/KEIN CBD` or `< 2% CBD`  |      | 1    |
    /// | `NUR CBD` or `< 2% THC`        | 1    |      |
    /// | `CBD ≈ THC`                    | 10   | 10   |
    ///
    /// Anything else, including a missing category, yields no flags.
    #[must_use]
    pub fn classify(category: Option<&str>) -> Self {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return Self::default();
        };
        let contains_any = |markers: &[&str]| markers.iter().any(|m| category.contains(m));

        if contains_any(LOW_CBD_MARKERS) {
            Self {
                thc: None,
                cbd: Some(1),
            }
        } else if contains_any(LOW_THC_MARKERS) {
            Self {
                thc: Some(1),
                cbd: None,
            }
        } else if category.contains(BALANCED_MARKER) {
            Self {
                thc: Some(10),
                cbd: Some(10),
            }
        } else {
            Self::default()
        }
    }
}

/// Read the `days` member of a JSON flowering description.
///
/// The dump keeps the JSON with backslash-escaped quotes, so `\"` is turned
/// back into `"` before decoding. A `days` member that is falsy in the JSON
/// sense (`0`, `0.0`, `""`, `false`, `null`, an empty array or object) yields
/// `None`. Otherwise integers are kept, floats are truncated, numeric strings
/// are parsed and `true` counts as `1`. Anything else, or text that is not a
/// JSON object, yields `None`.
///
/// # Example
///
/// ```
/// use strain_dump_extract::extract::flowering_days;
///
/// assert_eq!(flowering_days(Some(r#"{\"days\":55,\"info\":\"indoor\"}"#)), Some(55));
/// assert_eq!(flowering_days(Some("{}")), None);
/// ```
#[must_use]
pub fn flowering_days(value: Option<&str>) -> Option<i64> {
    let value = value.filter(|v| !v.is_empty())?;
    let json: Json = serde_json::from_str(&value.replace("\\\"", "\"")).ok()?;
    let days = json.as_object()?.get("days")?;
    days_from_json(days)
}

#[allow(clippy::cast_possible_truncation)]
fn days_from_json(days: &Json) -> Option<i64> {
    match days {
        Json::Number(number) => match number.as_i64() {
            Some(0) => None,
            Some(days) => Some(days),
            None => number
                .as_f64()
                .filter(|f| f.is_finite() && *f != 0.0)
                .map(|f| f.trunc() as i64),
        },
        Json::String(text) if !text.is_empty() => text.trim().parse().ok(),
        Json::Bool(true) => Some(1),
        Json::Null | Json::Bool(false) | Json::String(_) | Json::Array(_) | Json::Object(_) => {
            None
        }
    }
}
