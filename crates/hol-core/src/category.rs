//! `Category` — the kinds of holidays an entity may recognize.

/// A named subset of holidays a country or market recognizes.
///
/// Every entity declares its supported categories; `Public` is the default
/// requested category unless the entity says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Statutory public holidays (the default).
    Public,
    /// Bank closing days beyond the public set.
    Bank,
    /// School holidays.
    School,
    /// Commemorative days that remain working days.
    Workday,
    /// Half-day holidays (work ends early).
    HalfDay,
    /// Widely celebrated days with no legal status.
    Unofficial,
}

impl Category {
    /// All categories, in the fixed order used for populate passes.
    pub const ALL: [Category; 6] = [
        Category::Public,
        Category::Bank,
        Category::School,
        Category::Workday,
        Category::HalfDay,
        Category::Unofficial,
    ];

    /// Lower-case label, as used in configuration and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Bank => "bank",
            Category::School => "school",
            Category::Workday => "workday",
            Category::HalfDay => "half_day",
            Category::Unofficial => "unofficial",
        }
    }

    /// Parse a lower-case label back into a category.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("nonsense"), None);
    }
}
