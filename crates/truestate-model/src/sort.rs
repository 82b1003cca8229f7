//! Sort columns and directions accepted by the sales endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Column the sales table can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Transaction date.
    #[default]
    Date,
    /// Customer display name.
    CustomerName,
    /// Amount after discounts.
    FinalAmount,
    /// Units sold.
    Quantity,
}

impl SortField {
    /// All sortable columns in selector order.
    pub const ALL: [SortField; 4] = [
        SortField::Date,
        SortField::CustomerName,
        SortField::FinalAmount,
        SortField::Quantity,
    ];

    /// Returns the wire value used for the `sort_field` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::CustomerName => "customer_name",
            SortField::FinalAmount => "final_amount",
            SortField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "date" => Ok(SortField::Date),
            "customer_name" | "customer" | "name" => Ok(SortField::CustomerName),
            "final_amount" | "amount" => Ok(SortField::FinalAmount),
            "quantity" | "qty" => Ok(SortField::Quantity),
            _ => Err(ModelError::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest (or newest) first.
    #[default]
    Desc,
}

impl SortOrder {
    /// Returns the wire value used for the `sort_order` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// A sort field paired with its direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to order by.
    pub field: SortField,
    /// Direction of the ordering.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a sort specification.
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Returns the labelled preset matching this specification.
    pub fn option(&self) -> Option<&'static SortOption> {
        SORT_OPTIONS.iter().find(|opt| opt.spec == *self)
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.option() {
            Some(opt) => write!(f, "{}", opt.label),
            None => write!(f, "{} {}", self.field, self.order),
        }
    }
}

/// A labelled sort choice offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    /// Human-readable label.
    pub label: &'static str,
    /// Sort applied when the option is chosen.
    pub spec: SortSpec,
}

/// Sort presets in the order the selector lists them.
pub const SORT_OPTIONS: [SortOption; 8] = [
    SortOption {
        label: "Date · Newest first",
        spec: SortSpec::new(SortField::Date, SortOrder::Desc),
    },
    SortOption {
        label: "Date · Oldest first",
        spec: SortSpec::new(SortField::Date, SortOrder::Asc),
    },
    SortOption {
        label: "Customer name · A → Z",
        spec: SortSpec::new(SortField::CustomerName, SortOrder::Asc),
    },
    SortOption {
        label: "Customer name · Z → A",
        spec: SortSpec::new(SortField::CustomerName, SortOrder::Desc),
    },
    SortOption {
        label: "Final Amount · High → Low",
        spec: SortSpec::new(SortField::FinalAmount, SortOrder::Desc),
    },
    SortOption {
        label: "Final Amount · Low → High",
        spec: SortSpec::new(SortField::FinalAmount, SortOrder::Asc),
    },
    SortOption {
        label: "Quantity · High → Low",
        spec: SortSpec::new(SortField::Quantity, SortOrder::Desc),
    },
    SortOption {
        label: "Quantity · Low → High",
        spec: SortSpec::new(SortField::Quantity, SortOrder::Asc),
    },
];
