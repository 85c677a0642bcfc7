//! Reference data backing the select fields

use super::forms::OptionSource;
use chrono::{Datelike, Local};

/// Number of years offered on either side of the current year
pub const YEAR_SPAN: i32 = 10;

/// The three remotely fetched option lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Degrees,
    DegreeLevels,
    Interests,
}

impl OptionKind {
    pub const ALL: [OptionKind; 3] = [Self::Degrees, Self::DegreeLevels, Self::Interests];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::DegreeLevels => "degree levels",
            Self::Interests => "interests",
        }
    }
}

/// A selectable `(id, display name)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub id: String,
    pub name: String,
}

impl OptionEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Load progress of a single list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// One reference list; empty until its fetch completes
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    entries: Vec<OptionEntry>,
    status: LoadStatus,
}

impl OptionList {
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }
}

/// Degrees, degree levels and interests for one form instance
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    degrees: OptionList,
    degree_levels: OptionList,
    interests: OptionList,
}

impl ReferenceData {
    pub fn list(&self, kind: OptionKind) -> &OptionList {
        match kind {
            OptionKind::Degrees => &self.degrees,
            OptionKind::DegreeLevels => &self.degree_levels,
            OptionKind::Interests => &self.interests,
        }
    }

    fn list_mut(&mut self, kind: OptionKind) -> &mut OptionList {
        match kind {
            OptionKind::Degrees => &mut self.degrees,
            OptionKind::DegreeLevels => &mut self.degree_levels,
            OptionKind::Interests => &mut self.interests,
        }
    }

    /// Fill a pending list. Returns false if the list already settled.
    pub fn populate(&mut self, kind: OptionKind, entries: Vec<OptionEntry>) -> bool {
        let list = self.list_mut(kind);
        if list.status != LoadStatus::Pending {
            tracing::warn!("Ignoring repeated load of {}", kind.label());
            return false;
        }
        list.entries = entries;
        list.status = LoadStatus::Loaded;
        true
    }

    /// Mark a pending list as failed; it stays empty for this session.
    pub fn mark_failed(&mut self, kind: OptionKind) {
        let list = self.list_mut(kind);
        if list.status == LoadStatus::Pending {
            list.status = LoadStatus::Failed;
        }
    }
}

/// Year choices for the start and end selectors
#[derive(Debug, Clone)]
pub struct YearOptions {
    pub start: Vec<OptionEntry>,
    pub end: Vec<OptionEntry>,
}

impl YearOptions {
    pub fn for_year(current: i32) -> Self {
        let to_entries = |years: std::ops::RangeInclusive<i32>| {
            years
                .map(|y| OptionEntry::new(y.to_string(), y.to_string()))
                .collect()
        };
        Self {
            start: to_entries(current - YEAR_SPAN..=current),
            end: to_entries(current..=current + YEAR_SPAN),
        }
    }

    pub fn current() -> Self {
        Self::for_year(Local::now().year())
    }
}

impl Default for YearOptions {
    fn default() -> Self {
        Self::current()
    }
}

/// Options a select field offers right now
pub fn options_for<'a>(
    source: OptionSource,
    reference: &'a ReferenceData,
    years: &'a YearOptions,
) -> &'a [OptionEntry] {
    match source {
        OptionSource::Remote(kind) => reference.list(kind).entries(),
        OptionSource::StartYears => &years.start,
        OptionSource::EndYears => &years.end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// Id of the option after (or before) `current`, wrapping around.
///
/// An empty `current` starts at the first (or last) option. Returns `None`
/// when there is nothing to pick from.
pub fn cycle_option(
    entries: &[OptionEntry],
    current: &str,
    direction: CycleDirection,
) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let len = entries.len();
    let position = entries.iter().position(|e| e.id == current);
    let index = match (position, direction) {
        (None, CycleDirection::Forward) => 0,
        (None, CycleDirection::Backward) => len - 1,
        (Some(i), CycleDirection::Forward) => (i + 1) % len,
        (Some(i), CycleDirection::Backward) => (i + len - 1) % len,
    };
    Some(entries[index].id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees() -> Vec<OptionEntry> {
        vec![
            OptionEntry::new("1", "Biology"),
            OptionEntry::new("4", "Computer Science"),
            OptionEntry::new("10", "Physics"),
        ]
    }

    #[test]
    fn test_lists_start_pending_and_empty() {
        let data = ReferenceData::default();
        for kind in OptionKind::ALL {
            assert_eq!(data.list(kind).status(), LoadStatus::Pending);
            assert!(data.list(kind).entries().is_empty());
        }
    }

    #[test]
    fn test_populate_is_once_only() {
        let mut data = ReferenceData::default();
        assert!(data.populate(OptionKind::Degrees, degrees()));
        assert!(!data.populate(OptionKind::Degrees, vec![OptionEntry::new("99", "Other")]));
        assert_eq!(data.list(OptionKind::Degrees).entries().len(), 3);
        assert!(data
            .list(OptionKind::Degrees)
            .entries()
            .iter()
            .all(|e| e.id != "99"));
    }

    #[test]
    fn test_failure_is_isolated_per_list() {
        let mut data = ReferenceData::default();
        data.mark_failed(OptionKind::Interests);
        data.populate(OptionKind::Degrees, degrees());
        assert_eq!(data.list(OptionKind::Interests).status(), LoadStatus::Failed);
        assert_eq!(data.list(OptionKind::Degrees).status(), LoadStatus::Loaded);
        assert_eq!(data.list(OptionKind::DegreeLevels).status(), LoadStatus::Pending);
    }

    #[test]
    fn test_failed_list_is_not_populated_later() {
        let mut data = ReferenceData::default();
        data.mark_failed(OptionKind::Degrees);
        assert!(!data.populate(OptionKind::Degrees, degrees()));
        assert!(data.list(OptionKind::Degrees).entries().is_empty());
    }

    #[test]
    fn test_year_ranges() {
        let years = YearOptions::for_year(2024);
        assert_eq!(years.start.len(), 11);
        assert_eq!(years.start.first().unwrap().id, "2014");
        assert_eq!(years.start.last().unwrap().id, "2024");
        assert_eq!(years.end.len(), 11);
        assert_eq!(years.end.first().unwrap().id, "2024");
        assert_eq!(years.end.last().unwrap().id, "2034");
    }

    #[test]
    fn test_cycle_from_empty() {
        let entries = degrees();
        assert_eq!(
            cycle_option(&entries, "", CycleDirection::Forward),
            Some("1".to_string())
        );
        assert_eq!(
            cycle_option(&entries, "", CycleDirection::Backward),
            Some("10".to_string())
        );
    }

    #[test]
    fn test_cycle_wraps() {
        let entries = degrees();
        assert_eq!(
            cycle_option(&entries, "10", CycleDirection::Forward),
            Some("1".to_string())
        );
        assert_eq!(
            cycle_option(&entries, "1", CycleDirection::Backward),
            Some("10".to_string())
        );
    }

    #[test]
    fn test_cycle_on_empty_list() {
        assert_eq!(cycle_option(&[], "", CycleDirection::Forward), None);
    }

    #[test]
    fn test_options_for_sources() {
        let mut data = ReferenceData::default();
        data.populate(OptionKind::Degrees, degrees());
        let years = YearOptions::for_year(2020);
        let degree_opts = options_for(OptionSource::Remote(OptionKind::Degrees), &data, &years);
        assert_eq!(degree_opts.len(), 3);
        let end = options_for(OptionSource::EndYears, &data, &years);
        assert_eq!(end[0].id, "2020");
        let interests = options_for(OptionSource::Remote(OptionKind::Interests), &data, &years);
        assert!(interests.is_empty());
    }
}
