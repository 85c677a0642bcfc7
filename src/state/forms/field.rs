//! Form field descriptors
//!
//! Every field the signup form knows about is declared here once, together
//! with its wire key, its label and the kind of input it takes. Validation,
//! rendering and focus order all iterate [`FieldName::ALL`].

use crate::state::OptionKind;

/// Where a select field takes its options from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionSource {
    /// A reference list fetched from the service
    Remote(OptionKind),
    /// Ten years back up to the current year
    StartYears,
    /// The current year up to ten years ahead
    EndYears,
}

/// The kind of input a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, shown as typed
    Text,
    /// Free text, masked on screen
    Secret,
    /// A single id chosen from a list of options
    Select(OptionSource),
    /// A checked/unchecked flag
    Toggle,
    /// Any number of ids chosen from a list of options
    MultiSelect(OptionSource),
}

impl FieldKind {
    /// Whether the field holds a single string value
    pub fn is_string(&self) -> bool {
        matches!(self, Self::Text | Self::Secret | Self::Select(_))
    }
}

/// Identifies a field of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Username,
    FirstName,
    LastName,
    Email,
    Password,
    RePassword,
    DegreeId,
    DegreeLevelId,
    International,
    StartYear,
    EndYear,
    InterestIds,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 12] = [
        Self::Username,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::RePassword,
        Self::DegreeId,
        Self::DegreeLevelId,
        Self::International,
        Self::StartYear,
        Self::EndYear,
        Self::InterestIds,
    ];

    /// Key used on the wire and in error maps
    pub fn key(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::RePassword => "rePassword",
            Self::DegreeId => "degreeId",
            Self::DegreeLevelId => "degreeLevelId",
            Self::International => "international",
            Self::StartYear => "startYear",
            Self::EndYear => "endYear",
            Self::InterestIds => "interestIds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "University Email",
            Self::Password => "Password",
            Self::RePassword => "Re-enter your password",
            Self::DegreeId => "Degree",
            Self::DegreeLevelId => "Degree Level",
            Self::International => "International student",
            Self::StartYear => "Start Year",
            Self::EndYear => "End Year",
            Self::InterestIds => "Interests",
        }
    }

    /// Text shown in an empty select
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::DegreeId => "Select a degree",
            Self::DegreeLevelId => "Select a degree level",
            Self::StartYear | Self::EndYear => "Select a year",
            _ => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Username | Self::FirstName | Self::LastName | Self::Email => FieldKind::Text,
            Self::Password | Self::RePassword => FieldKind::Secret,
            Self::DegreeId => FieldKind::Select(OptionSource::Remote(OptionKind::Degrees)),
            Self::DegreeLevelId => {
                FieldKind::Select(OptionSource::Remote(OptionKind::DegreeLevels))
            }
            Self::International => FieldKind::Toggle,
            Self::StartYear => FieldKind::Select(OptionSource::StartYears),
            Self::EndYear => FieldKind::Select(OptionSource::EndYears),
            Self::InterestIds => {
                FieldKind::MultiSelect(OptionSource::Remote(OptionKind::Interests))
            }
        }
    }

    /// Look up a field by its wire key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}
