//! Category axis shared by timeline and gallery records.

use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Primary classification for timeline and gallery records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Project,
    Activity,
    Writing,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 3] = [Category::Project, Category::Activity, Category::Writing];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Activity => "activity",
            Self::Writing => "writing",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selector driven by the owning UI surface.
///
/// `All` is the identity filter: it returns the unfiltered sorted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns whether a record with `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for a category selector string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected all|project|activity|writing",
            self.0
        )
    }
}

impl Error for UnknownCategory {}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "project" => Ok(Self::Only(Category::Project)),
            "activity" => Ok(Self::Only(Category::Activity)),
            "writing" => Ok(Self::Only(Category::Writing)),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// Per-category badge counts.
///
/// Always computed over the unfiltered collection so badges stay stable while
/// the active filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub project: usize,
    pub activity: usize,
    pub writing: usize,
}

impl CategoryCounts {
    /// Counts categories over any iterator of category values.
    pub fn tally(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut counts = Self::default();
        for category in categories {
            counts.all += 1;
            match category {
                Category::Project => counts.project += 1,
                Category::Activity => counts.activity += 1,
                Category::Writing => counts.writing += 1,
            }
        }
        counts
    }

    /// Returns the badge value for one filter selection.
    pub fn get(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.all,
            CategoryFilter::Only(Category::Project) => self.project,
            CategoryFilter::Only(Category::Activity) => self.activity,
            CategoryFilter::Only(Category::Writing) => self.writing,
        }
    }
}
