//! Multi-select filters and the date range applied to the sales query.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{ModelError, Result};

/// Date format used on the wire and in date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ModelError::InvalidDate(value.to_string()))
}

/// One of the multi-select filter groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterGroup {
    /// Customer region.
    Region,
    /// Customer gender.
    Gender,
    /// Product category.
    Category,
    /// Payment method.
    PaymentMethod,
    /// Transaction tags.
    Tag,
}

impl FilterGroup {
    /// All groups in panel order.
    pub const ALL: [FilterGroup; 5] = [
        FilterGroup::Region,
        FilterGroup::Gender,
        FilterGroup::Category,
        FilterGroup::Tag,
        FilterGroup::PaymentMethod,
    ];

    /// Query parameter carrying this group's selections.
    pub fn param(&self) -> &'static str {
        match self {
            FilterGroup::Region => "regions",
            FilterGroup::Gender => "gender",
            FilterGroup::Category => "categories",
            FilterGroup::PaymentMethod => "payment_methods",
            FilterGroup::Tag => "tags",
        }
    }

    /// Panel heading.
    pub fn label(&self) -> &'static str {
        match self {
            FilterGroup::Region => "Region",
            FilterGroup::Gender => "Gender",
            FilterGroup::Category => "Product Category",
            FilterGroup::PaymentMethod => "Payment Method",
            FilterGroup::Tag => "Tags",
        }
    }

    /// Values offered as checkboxes for this group.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterGroup::Region => &["North", "South", "East", "West", "Central"],
            FilterGroup::Gender => &["Male", "Female", "Other"],
            FilterGroup::Category => &[
                "Electronics",
                "Clothing",
                "Groceries",
                "Home & Kitchen",
                "Other",
            ],
            FilterGroup::PaymentMethod => &["Cash", "Credit Card", "UPI", "Net Banking", "Wallet"],
            FilterGroup::Tag => &["Discounted", "Loyal Customer", "New Customer", "Bulk Order"],
        }
    }

    /// Finds the catalog spelling of `value`, ignoring case.
    pub fn canonical_option(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        self.options()
            .iter()
            .copied()
            .find(|opt| opt.eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FilterGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "region" | "regions" => Ok(FilterGroup::Region),
            "gender" | "genders" => Ok(FilterGroup::Gender),
            "category" | "categories" => Ok(FilterGroup::Category),
            "payment" | "payment_method" | "payment_methods" => Ok(FilterGroup::PaymentMethod),
            "tag" | "tags" => Ok(FilterGroup::Tag),
            _ => Err(ModelError::UnknownFilterGroup(s.to_string())),
        }
    }
}

/// Inclusive date range; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First day included, if bounded.
    pub start: Option<NaiveDate>,
    /// Last day included, if bounded.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Returns true when neither end is bounded.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Committed filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SalesFilters {
    /// Selected customer regions.
    pub regions: BTreeSet<String>,
    /// Selected genders.
    pub genders: BTreeSet<String>,
    /// Selected product categories.
    pub categories: BTreeSet<String>,
    /// Selected payment methods.
    pub payment_methods: BTreeSet<String>,
    /// Selected tags.
    pub tags: BTreeSet<String>,
    /// Date range.
    pub date_range: DateRange,
}

impl SalesFilters {
    /// Returns the selection set for `group`.
    pub fn group(&self, group: FilterGroup) -> &BTreeSet<String> {
        match group {
            FilterGroup::Region => &self.regions,
            FilterGroup::Gender => &self.genders,
            FilterGroup::Category => &self.categories,
            FilterGroup::PaymentMethod => &self.payment_methods,
            FilterGroup::Tag => &self.tags,
        }
    }

    /// Returns the mutable selection set for `group`.
    pub fn group_mut(&mut self, group: FilterGroup) -> &mut BTreeSet<String> {
        match group {
            FilterGroup::Region => &mut self.regions,
            FilterGroup::Gender => &mut self.genders,
            FilterGroup::Category => &mut self.categories,
            FilterGroup::PaymentMethod => &mut self.payment_methods,
            FilterGroup::Tag => &mut self.tags,
        }
    }

    /// Builder-style helper that selects `values` in `group`.
    #[must_use]
    pub fn with<I, V>(mut self, group: FilterGroup, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.group_mut(group)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Returns true when nothing is selected and the date range is open.
    pub fn is_empty(&self) -> bool {
        FilterGroup::ALL.iter().all(|g| self.group(*g).is_empty())
            && self.date_range.is_unbounded()
    }

    /// Number of active selections, counting each bounded date once.
    pub fn active_count(&self) -> usize {
        let selected: usize = FilterGroup::ALL.iter().map(|g| self.group(*g).len()).sum();
        selected
            + usize::from(self.date_range.start.is_some())
            + usize::from(self.date_range.end.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_round_trip() {
        for group in FilterGroup::ALL {
            assert_eq!(group.param().parse::<FilterGroup>(), Ok(group));
        }
        assert_eq!("payment".parse(), Ok(FilterGroup::PaymentMethod));
        assert!("colour".parse::<FilterGroup>().is_err());
    }

    #[test]
    fn canonical_option_ignores_case() {
        assert_eq!(
            FilterGroup::Category.canonical_option("home & kitchen"),
            Some("Home & Kitchen")
        );
        assert_eq!(FilterGroup::Region.canonical_option("Atlantis"), None);
    }

    #[test]
    fn active_count_includes_dates() {
        let mut filters = SalesFilters::default()
            .with(FilterGroup::Region, ["North", "South"])
            .with(FilterGroup::Tag, ["Bulk Order"]);
        assert_eq!(filters.active_count(), 3);
        filters.date_range.start = Some(parse_date("2023-01-01").unwrap());
        assert_eq!(filters.active_count(), 4);
        assert!(!filters.is_empty());
        assert!(SalesFilters::default().is_empty());
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("01/02/2023").is_err());
        assert_eq!(
            parse_date(" 2023-02-03 ").unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 3).unwrap()
        );
    }
}
