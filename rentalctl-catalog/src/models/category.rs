//! Category selectors
//!
//! A category is addressed either by its integer id or by its name.
//! Names can be matched exactly or ignoring case.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Validated category id (fits the `integer` primary key column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Create a category id, rejecting values outside the `i32` range.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        i32::try_from(id)
            .map(Self)
            .map_err(|_| ValidationError::OutOfRange {
                field: "category id",
                value: id,
            })
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for CategoryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for CategoryId {
    type Error = ValidationError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    /// Parse an id from text. `"12"` is accepted, `"abc"` and `"1.5"` are not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotAnInteger {
                field: "category id",
                value: s.to_owned(),
            })?;
        Self::new(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which category a film query targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    Id(CategoryId),
    Name(String),
}

impl CategorySelector {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl From<CategoryId> for CategorySelector {
    fn from(id: CategoryId) -> Self {
        Self::Id(id)
    }
}

impl From<i32> for CategorySelector {
    fn from(id: i32) -> Self {
        Self::Id(CategoryId::from(id))
    }
}

/// Always selects by name, even for integer text: `CategorySelector::from("7")`
/// targets the category named "7". Use [`str::parse`] for the id-or-name
/// reading the CLI applies.
impl From<&str> for CategorySelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for CategorySelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl FromStr for CategorySelector {
    type Err = ValidationError;

    /// Integer text selects by id, anything else selects by name.
    ///
    /// Integer text that does not fit an id is rejected rather than
    /// silently treated as a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) => CategoryId::new(id).map(Self::Id),
            Err(_) => Ok(Self::Name(s.to_owned())),
        }
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// How a category name is compared. Ids always match exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Exact,
    CaseInsensitive,
}
