//! Search filter model

use serde::{Deserialize, Serialize};

/// Form fields that feed into a directory search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Enabled,
}

impl FilterField {
    /// The form control name, also used as the query parameter key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Enabled => "enabled",
        }
    }
}

/// Options offered by the "Enabled" select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnabledFilter {
    /// Sentinel meaning "do not filter on enabled".
    #[default]
    NoneSelected,
    True,
    False,
}

impl EnabledFilter {
    pub const ALL: [Self; 3] = [Self::NoneSelected, Self::True, Self::False];

    /// Wire value sent to the backend. The backend expects a capitalised `False`.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::NoneSelected => FilterState::ENABLED_SENTINEL,
            Self::True => "true",
            Self::False => "False",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoneSelected => "None Selected",
            Self::True => "True",
            Self::False => "False",
        }
    }
}

/// In-progress, not-yet-submitted search criteria.
///
/// Values are stored exactly as typed; nothing is trimmed or validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<String>,
}

impl FilterState {
    pub const ENABLED_SENTINEL: &'static str = "none";

    /// Record the latest value of a single field.
    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            FilterField::Name => self.name = value,
            FilterField::Enabled => self.enabled = value,
        }
    }

    /// Name value if it should take part in a query.
    #[must_use]
    pub fn name_param(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Enabled value unless absent or the `"none"` sentinel.
    #[must_use]
    pub fn enabled_param(&self) -> Option<&str> {
        self.enabled
            .as_deref()
            .filter(|enabled| *enabled != Self::ENABLED_SENTINEL)
    }
}
