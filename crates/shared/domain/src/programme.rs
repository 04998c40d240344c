use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One row of a route/station announcement schedule.
///
/// Every column is present and holds free-form text; an empty string is a valid value.
/// What a column means (e.g. `on_approach` is the text played while the train approaches
/// the station) is a convention between the producer and the consumer of the row.
///
/// Serialized keys are the schedule's column headers (see [`crate::constants`]). Unknown
/// keys are ignored on decode, missing ones are rejected.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Programme {
    #[serde(rename = "Route")]
    pub route: String,
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "On Approach")]
    pub on_approach: String,
    #[serde(rename = "At Station")]
    pub at_station: String,
    #[serde(rename = "Terminating")]
    pub terminating: String,
    #[serde(rename = "Transfer 1")]
    pub transfer_1: String,
    #[serde(rename = "Transfer 2")]
    pub transfer_2: String,
    #[serde(rename = "Transfer 3")]
    pub transfer_3: String,
    #[serde(rename = "Root")]
    pub root: String,
}

/// A column of [`Programme`], displayed and parsed by its header text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
pub enum ProgrammeField {
    #[strum(serialize = "Route")]
    Route,
    #[strum(serialize = "Station")]
    Station,
    #[strum(serialize = "On Approach")]
    OnApproach,
    #[strum(serialize = "At Station")]
    AtStation,
    #[strum(serialize = "Terminating")]
    Terminating,
    #[strum(serialize = "Transfer 1")]
    Transfer1,
    #[strum(serialize = "Transfer 2")]
    Transfer2,
    #[strum(serialize = "Transfer 3")]
    Transfer3,
    #[strum(serialize = "Root")]
    Root,
}

impl ProgrammeField {
    /// The column header, identical to the serialized key.
    #[must_use]
    pub fn header(self) -> &'static str {
        self.into()
    }
}

impl Programme {
    /// Returns the text of a single column.
    #[must_use]
    pub fn get(&self, field: ProgrammeField) -> &str {
        match field {
            ProgrammeField::Route => &self.route,
            ProgrammeField::Station => &self.station,
            ProgrammeField::OnApproach => &self.on_approach,
            ProgrammeField::AtStation => &self.at_station,
            ProgrammeField::Terminating => &self.terminating,
            ProgrammeField::Transfer1 => &self.transfer_1,
            ProgrammeField::Transfer2 => &self.transfer_2,
            ProgrammeField::Transfer3 => &self.transfer_3,
            ProgrammeField::Root => &self.root,
        }
    }

    pub const fn get_mut(&mut self, field: ProgrammeField) -> &mut String {
        match field {
            ProgrammeField::Route => &mut self.route,
            ProgrammeField::Station => &mut self.station,
            ProgrammeField::OnApproach => &mut self.on_approach,
            ProgrammeField::AtStation => &mut self.at_station,
            ProgrammeField::Terminating => &mut self.terminating,
            ProgrammeField::Transfer1 => &mut self.transfer_1,
            ProgrammeField::Transfer2 => &mut self.transfer_2,
            ProgrammeField::Transfer3 => &mut self.transfer_3,
            ProgrammeField::Root => &mut self.root,
        }
    }

    /// Transfer texts in column order, empty ones included.
    #[must_use]
    pub fn transfers(&self) -> [&str; 3] {
        [&self.transfer_1, &self.transfer_2, &self.transfer_3]
    }

    /// `true` when every column is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.empty_fields() == ProgrammeField::COUNT
    }

    /// Number of columns whose text is empty.
    #[must_use]
    pub fn empty_fields(&self) -> usize {
        ProgrammeField::iter().filter(|field| self.get(*field).is_empty()).count()
    }
}
