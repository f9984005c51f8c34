//! `strains` rows.

use serde::Serialize;

use super::{SourceTable, text_at};
use crate::datetime::Timestamp;
use crate::extract::{Potency, flowering_days};
use crate::sql::Value;

// Source columns: id, name, slug, lang, breeder_id, licence_id, type, cbd,
// link, pic, flowering, description, created_at, updated_at
const ID: usize = 0;
const NAME: usize = 1;
const BREEDER_ID: usize = 4;
const TYPE: usize = 6;
const CBD: usize = 7;
const FLOWERING: usize = 10;
const CREATED_AT: usize = 12;
const UPDATED_AT: usize = 13;

/// A cannabis strain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrainRecord {
    /// Source primary key.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Key of the breeder, not resolved.
    pub breeder_id: Option<String>,
    /// THC flag, see [`Potency`].
    pub thc_content: Option<u32>,
    /// CBD flag, see [`Potency`].
    pub cbd_content: Option<u32>,
    /// Strain type, e.g. `Indica`.
    pub strain_type: Option<String>,
    /// Currently a copy of `strain_type`.
    pub genetics_type: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last update time.
    pub updated_at: Timestamp,
    /// Flowering time in days. Not part of the CSV output.
    #[serde(skip)]
    pub flowering_days: Option<i64>,
}

impl SourceTable for StrainRecord {
    const TABLE: &'static str = "strains";
    const MIN_VALUES: usize = 14;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "breeder_id",
        "thc_content",
        "cbd_content",
        "strain_type",
        "genetics_type",
        "created_at",
        "updated_at",
    ];

    fn from_values(values: &[Value]) -> Self {
        let potency = Potency::classify(values[CBD].as_text());
        let strain_type = values[TYPE].non_empty().map(String::from);

        Self {
            id: text_at(values, ID),
            name: text_at(values, NAME),
            breeder_id: text_at(values, BREEDER_ID),
            thc_content: potency.thc,
            cbd_content: potency.cbd,
            genetics_type: strain_type.clone(),
            strain_type,
            created_at: Timestamp::normalize(values[CREATED_AT].as_text()),
            updated_at: Timestamp::normalize(values[UPDATED_AT].as_text()),
            flowering_days: flowering_days(values[FLOWERING].as_text()),
        }
    }

    fn timestamps(&self) -> [Timestamp; 2] {
        [self.created_at, self.updated_at]
    }
}
