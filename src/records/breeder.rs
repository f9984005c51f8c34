//! `breeders` rows.

use serde::Serialize;

use super::{SourceTable, text_at};
use crate::datetime::Timestamp;
use crate::sql::Value;

// Source columns: id, name, slug, lang, imported_from, description,
// licence_id, url, created_at, updated_at
const ID: usize = 0;
const NAME: usize = 1;
const CREATED_AT: usize = 8;
const UPDATED_AT: usize = 9;

/// A seed breeder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreederRecord {
    /// Source primary key.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last update time.
    pub updated_at: Timestamp,
}

impl SourceTable for BreederRecord {
    const TABLE: &'static str = "breeders";
    const MIN_VALUES: usize = 10;
    const COLUMNS: &'static [&'static str] = &["id", "name", "created_at", "updated_at"];

    fn from_values(values: &[Value]) -> Self {
        Self {
            id: text_at(values, ID),
            name: text_at(values, NAME),
            created_at: Timestamp::normalize(values[CREATED_AT].as_text()),
            updated_at: Timestamp::normalize(values[UPDATED_AT].as_text()),
        }
    }

    fn timestamps(&self) -> [Timestamp; 2] {
        [self.created_at, self.updated_at]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RowSkip;
    use crate::sql::parse_values;

    const ROW: &str = "12,'Dutch Passion','dutch-passion','de','seedfinder',\
                       'Seit 1987, Amsterdam',3,'https://example.org',\
                       '2024-09-28 23:47:24','2024-10-01 08:00:00'";

    #[test]
    fn test_maps_positional_fields() {
        let breeder = BreederRecord::from_row(&parse_values(ROW)).unwrap();
        assert_eq!(breeder.id.as_deref(), Some("12"));
        assert_eq!(breeder.name.as_deref(), Some("Dutch Passion"));
        assert_eq!(breeder.created_at.to_string(), "2024-09-28T23:47:24");
        assert_eq!(breeder.updated_at.to_string(), "2024-10-01T08:00:00");
    }

    #[test]
    fn test_exactly_ten_values_is_enough() {
        let values = parse_values(ROW);
        assert_eq!(values.len(), 10);
        assert!(BreederRecord::from_row(&values).is_ok());
    }

    #[test]
    fn test_nine_values_are_skipped() {
        let values = parse_values("1,a,b,c,d,e,f,g,2024-01-01 00:00:00");
        assert_eq!(
            BreederRecord::from_row(&values),
            Err(RowSkip::TooFewValues {
                table: "breeders",
                found: 9,
                required: 10
            })
        );
    }

    #[test]
    fn test_extra_values_are_ignored() {
        let values = parse_values(&format!("{ROW},'extra',NULL"));
        let breeder = BreederRecord::from_row(&values).unwrap();
        assert_eq!(breeder.updated_at.to_string(), "2024-10-01T08:00:00");
    }

    #[test]
    fn test_null_fields() {
        let values = parse_values("NULL,NULL,b,c,d,e,f,g,NULL,NULL");
        let breeder = BreederRecord::from_row(&values).unwrap();
        assert_eq!(breeder.id, None);
        assert_eq!(breeder.name, None);
        assert!(breeder.created_at.is_fallback());
        assert!(breeder.updated_at.is_fallback());
    }
}
