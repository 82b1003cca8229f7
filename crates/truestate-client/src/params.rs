//! Encoding of a [`SalesQuery`] into request parameters.

use truestate_model::{DATE_FORMAT, FilterGroup, SalesQuery};

/// Filter groups in the order their parameters are emitted.
const FILTER_PARAM_ORDER: [FilterGroup; 5] = [
    FilterGroup::Region,
    FilterGroup::Gender,
    FilterGroup::Category,
    FilterGroup::PaymentMethod,
    FilterGroup::Tag,
];

/// Returns the query-string pairs for `query`.
///
/// Empty search text, empty selections and open date bounds are omitted.
/// Multi-select values are comma-joined in sorted order.
pub fn query_pairs(query: &SalesQuery) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("page", query.page().to_string()),
        ("limit", query.limit().to_string()),
    ];

    if !query.search().is_empty() {
        pairs.push(("search", query.search().to_string()));
    }

    let sort = query.sort();
    pairs.push(("sort_field", sort.field.as_str().to_string()));
    pairs.push(("sort_order", sort.order.as_str().to_string()));

    let filters = query.filters();
    for group in FILTER_PARAM_ORDER {
        let values = filters.group(group);
        if !values.is_empty() {
            let joined = values.iter().map(String::as_str).collect::<Vec<_>>().join(",");
            pairs.push((group.param(), joined));
        }
    }

    if let Some(start) = filters.date_range.start {
        pairs.push(("start_date", start.format(DATE_FORMAT).to_string()));
    }
    if let Some(end) = filters.date_range.end {
        pairs.push(("end_date", end.format(DATE_FORMAT).to_string()));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use truestate_model::{SalesFilters, SortField, SortOrder, parse_date};

    fn keys(pairs: &[(&'static str, String)]) -> Vec<&'static str> {
        pairs.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn default_query_has_only_paging_and_sort() {
        let pairs = query_pairs(&SalesQuery::default());
        assert_eq!(keys(&pairs), ["page", "limit", "sort_field", "sort_order"]);
        assert_eq!(pairs[2].1, "date");
        assert_eq!(pairs[3].1, "desc");
    }

    #[test]
    fn full_query() {
        let mut filters = SalesFilters::default()
            .with(FilterGroup::Region, ["West", "East"])
            .with(FilterGroup::Gender, ["Female"])
            .with(FilterGroup::PaymentMethod, ["UPI"]);
        filters.date_range.end = Some(parse_date("2023-12-31").unwrap());
        let query = SalesQuery::default()
            .apply_filters(filters)
            .submit_search("Neha")
            .change_sort(SortField::FinalAmount, SortOrder::Asc)
            .change_page(2);

        let pairs = query_pairs(&query);
        assert_eq!(
            keys(&pairs),
            [
                "page",
                "limit",
                "search",
                "sort_field",
                "sort_order",
                "regions",
                "gender",
                "payment_methods",
                "end_date"
            ]
        );
        assert_eq!(pairs[5].1, "East,West");
        assert_eq!(pairs[8].1, "2023-12-31");
    }
}
