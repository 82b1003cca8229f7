//! Uncommitted user edits.
//!
//! The draft is only copied into the query on an explicit search or apply,
//! and only refreshed from the query on "clear all".

use std::collections::BTreeSet;

use truestate_model::{DATE_FORMAT, DateRange, FilterGroup, SalesFilters, parse_date};

/// Filter panel selections before they are applied.
///
/// Dates are kept as the raw strings the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFilters {
    /// Region checkboxes.
    pub regions: BTreeSet<String>,
    /// Gender checkboxes.
    pub genders: BTreeSet<String>,
    /// Category checkboxes.
    pub categories: BTreeSet<String>,
    /// Payment method checkboxes.
    pub payment_methods: BTreeSet<String>,
    /// Tag checkboxes.
    pub tags: BTreeSet<String>,
    /// "From" date input.
    pub start_date: String,
    /// "To" date input.
    pub end_date: String,
}

impl DraftFilters {
    /// Draft mirroring already committed filters.
    pub fn from_filters(filters: &SalesFilters) -> Self {
        let format = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default()
        };
        Self {
            regions: filters.regions.clone(),
            genders: filters.genders.clone(),
            categories: filters.categories.clone(),
            payment_methods: filters.payment_methods.clone(),
            tags: filters.tags.clone(),
            start_date: format(filters.date_range.start),
            end_date: format(filters.date_range.end),
        }
    }

    /// Selections for `group`.
    pub fn group(&self, group: FilterGroup) -> &BTreeSet<String> {
        match group {
            FilterGroup::Region => &self.regions,
            FilterGroup::Gender => &self.genders,
            FilterGroup::Category => &self.categories,
            FilterGroup::PaymentMethod => &self.payment_methods,
            FilterGroup::Tag => &self.tags,
        }
    }

    fn group_mut(&mut self, group: FilterGroup) -> &mut BTreeSet<String> {
        match group {
            FilterGroup::Region => &mut self.regions,
            FilterGroup::Gender => &mut self.genders,
            FilterGroup::Category => &mut self.categories,
            FilterGroup::PaymentMethod => &mut self.payment_methods,
            FilterGroup::Tag => &mut self.tags,
        }
    }

    /// Flips a checkbox. Returns whether the value is now selected.
    pub fn toggle(&mut self, group: FilterGroup, value: &str) -> bool {
        let set = self.group_mut(group);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Sets the raw "from" date.
    pub fn set_start_date(&mut self, raw: impl Into<String>) {
        self.start_date = raw.into();
    }

    /// Sets the raw "to" date.
    pub fn set_end_date(&mut self, raw: impl Into<String>) {
        self.end_date = raw.into();
    }

    /// Filters to commit. Blank dates leave the bound open; dates that do
    /// not parse are dropped with a warning.
    pub fn to_filters(&self) -> SalesFilters {
        SalesFilters {
            regions: self.regions.clone(),
            genders: self.genders.clone(),
            categories: self.categories.clone(),
            payment_methods: self.payment_methods.clone(),
            tags: self.tags.clone(),
            date_range: DateRange {
                start: draft_date(&self.start_date),
                end: draft_date(&self.end_date),
            },
        }
    }
}

fn draft_date(raw: &str) -> Option<chrono::NaiveDate> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(error) => {
            tracing::warn!(%error, "ignoring draft date");
            None
        }
    }
}

/// Everything the user has typed or ticked but not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Search box contents.
    pub search: String,
    /// Filter panel contents.
    pub filters: DraftFilters,
}
