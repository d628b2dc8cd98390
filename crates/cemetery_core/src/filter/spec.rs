use crate::model::space::{BurialSpace, Category, Priority, UnknownPriority};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ALL: &str = "all";

/// Active-state criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => active,
            Self::Inactive => !active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            ALL => Ok(Self::All),
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(FilterParseError::Status(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    Status(String),
    Priority(UnknownPriority),
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(value) => write!(
                f,
                "unsupported status filter `{value}`; expected all|active|inactive"
            ),
            Self::Priority(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FilterParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Status(_) => None,
            Self::Priority(err) => Some(err),
        }
    }
}

impl From<UnknownPriority> for FilterParseError {
    fn from(value: UnknownPriority) -> Self {
        Self::Priority(value)
    }
}

/// Criteria for [`apply_filters`]. `Default` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: StatusFilter,
    /// `None` means any category.
    pub category: Option<Category>,
    /// `None` means any priority.
    pub priority: Option<Priority>,
    /// Case-insensitive substring matched against name or description.
    /// Matched as typed: whitespace is significant, only `""` is unconstrained.
    pub search_text: String,
}

impl FilterSpec {
    /// Builds a spec from raw form values where `"all"` means unconstrained.
    pub fn from_form(
        status: &str,
        category: &str,
        priority: &str,
        search_text: &str,
    ) -> Result<Self, FilterParseError> {
        let category = match category.trim() {
            value if value.is_empty() || value.eq_ignore_ascii_case(ALL) => None,
            value => Some(Category::new(value)),
        };
        let priority = match priority.trim() {
            value if value.is_empty() || value.eq_ignore_ascii_case(ALL) => None,
            value => Some(value.parse::<Priority>()?),
        };

        Ok(Self {
            status: status.parse()?,
            category,
            priority,
            search_text: search_text.to_string(),
        })
    }

    /// Returns whether one record passes every criterion.
    pub fn matches(&self, record: &BurialSpace) -> bool {
        self.matcher().matches(record)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            spec: self,
            needle: (!self.search_text.is_empty()).then(|| self.search_text.to_lowercase()),
        }
    }
}

/// Spec with the search needle lowercased once per pipeline run.
struct Matcher<'a> {
    spec: &'a FilterSpec,
    needle: Option<String>,
}

impl Matcher<'_> {
    fn matches(&self, record: &BurialSpace) -> bool {
        self.spec.status.matches(record.active)
            && self
                .spec
                .category
                .as_ref()
                .map_or(true, |category| &record.category == category)
            && self
                .spec
                .priority
                .map_or(true, |priority| record.priority == priority)
            && self.needle.as_deref().map_or(true, |needle| {
                record.name.to_lowercase().contains(needle)
                    || record.description.to_lowercase().contains(needle)
            })
    }
}

/// Returns the records passing `spec`, in input order.
pub fn apply_filters(records: &[BurialSpace], spec: &FilterSpec) -> Vec<BurialSpace> {
    let matcher = spec.matcher();
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FilterSpec, StatusFilter};
    use crate::model::space::{Category, Priority};

    #[test]
    fn from_form_maps_all_to_unconstrained() {
        let spec = FilterSpec::from_form("all", "all", "ALL", "").unwrap();
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn from_form_parses_concrete_values() {
        let spec = FilterSpec::from_form("inactive", "Premium", "high", "plot").unwrap();
        assert_eq!(spec.status, StatusFilter::Inactive);
        assert_eq!(spec.category, Some(Category::new("premium")));
        assert_eq!(spec.priority, Some(Priority::High));
        assert_eq!(spec.search_text, "plot");
    }

    #[test]
    fn from_form_rejects_unknown_values() {
        assert!(FilterSpec::from_form("archived", "all", "all", "").is_err());
        assert!(FilterSpec::from_form("all", "all", "urgent", "").is_err());
    }
}
