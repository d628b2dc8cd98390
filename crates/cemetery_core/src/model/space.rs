//! Burial space domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by graves, mausoleums and columbaria.
//! - Provide creation/patch inputs and caller-side validation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another space.
//! - `updated_at`, when set, is strictly greater than `created_at`.
//! - `active` is independent of deletion.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for every burial space.
pub type SpaceId = Uuid;

/// Classification tag, normalized to trimmed lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Builds a tag from free text (`" Premium "` -> `premium`).
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// Operator-assigned priority for a burial space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a priority literal is not one of `low|medium|high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPriority(pub String);

impl Display for UnknownPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported priority `{}`; expected low|medium|high",
            self.0
        )
    }
}

impl Error for UnknownPriority {}

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(UnknownPriority(other.to_string())),
        }
    }
}

/// Variant-specific attributes of a burial space.
///
/// Serialized internally tagged by `type` so the persisted payload stays flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum BurialSpaceKind {
    /// In-ground grave.
    Grave { capacity: u32, material: String },
    /// Family building above ground.
    Mausoleum { family_name: String, levels: u32 },
    /// Wall or room of urn niches.
    Columbarium { niche_count: u32, indoor: bool },
}

impl BurialSpaceKind {
    /// Display name of the variant, stable across releases.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Grave { .. } => "Grave",
            Self::Mausoleum { .. } => "Mausoleum",
            Self::Columbarium { .. } => "Columbarium",
        }
    }
}

/// Canonical catalog record for one burial space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurialSpace {
    /// Assigned by the store at creation, never changed afterwards.
    pub id: SpaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub category: Category,
    pub priority: Priority,
    /// Soft-state flag. `false` means unavailable, not deleted.
    pub active: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds of the last mutation; `None` until first change.
    pub updated_at: Option<i64>,
    pub kind: BurialSpaceKind,
}

/// Flat read projection of a burial space for list/detail rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceSummary {
    pub id: SpaceId,
    pub name: String,
    pub location: String,
    pub active: bool,
    pub type_name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
}

impl BurialSpace {
    /// Builds a fresh record from caller input.
    ///
    /// # Invariants
    /// - `active` starts as `true`.
    /// - `updated_at` starts as `None`.
    pub fn from_input(id: SpaceId, input: NewBurialSpace, created_at: i64) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            location: input.location,
            category: input.category,
            priority: input.priority,
            active: true,
            created_at,
            updated_at: None,
            kind: input.kind,
        }
    }

    /// Merges every `Some` field of `patch` into this record.
    ///
    /// Does not touch `id`, `created_at` or `updated_at`.
    pub fn apply_patch(&mut self, patch: BurialSpacePatch) {
        let BurialSpacePatch {
            name,
            description,
            location,
            category,
            priority,
            active,
            kind,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(active) = active {
            self.active = active;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
    }

    /// Timestamp of the most recent change (creation counts as a change).
    pub fn last_modified(&self) -> i64 {
        self.updated_at.unwrap_or(self.created_at)
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Returns a flat projection including variant attributes.
    pub fn summary(&self) -> SpaceSummary {
        let attributes = match &self.kind {
            BurialSpaceKind::Grave { capacity, material } => vec![
                ("capacity", capacity.to_string()),
                ("material", material.clone()),
            ],
            BurialSpaceKind::Mausoleum {
                family_name,
                levels,
            } => vec![
                ("familyName", family_name.clone()),
                ("levels", levels.to_string()),
            ],
            BurialSpaceKind::Columbarium {
                niche_count,
                indoor,
            } => vec![
                ("nicheCount", niche_count.to_string()),
                ("indoor", indoor.to_string()),
            ],
        };

        SpaceSummary {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
            active: self.active,
            type_name: self.type_name(),
            attributes,
        }
    }
}

/// Creation input for a burial space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBurialSpace {
    pub name: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub priority: Priority,
    pub kind: BurialSpaceKind,
}

impl NewBurialSpace {
    /// Creates input with empty description/location.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<Category>,
        priority: Priority,
        kind: BurialSpaceKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            location: String::new(),
            category: category.into(),
            priority,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Checks required fields before handing input to the store.
    ///
    /// The store itself never calls this; validation belongs to callers.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        if self.name.trim().is_empty() {
            return Err(InputValidationError::EmptyField("name"));
        }
        if self.category.is_empty() {
            return Err(InputValidationError::EmptyField("category"));
        }
        Ok(())
    }
}

/// Partial update for a burial space. `None` leaves the field unchanged.
///
/// There is no `id` field: identity cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BurialSpacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub active: Option<bool>,
    pub kind: Option<BurialSpaceKind>,
}

/// Caller-side input validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    /// Required text field is empty after trimming.
    EmptyField(&'static str),
    /// Email does not look like `local@domain.tld`.
    InvalidEmail(String),
}

impl Display for InputValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
        }
    }
}

impl Error for InputValidationError {}
