//! Terminal rendering of the dashboard state.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use truestate_core::{Draft, EMPTY_TEXT, LOADING_TEXT, ResultView, ViewStatus};
use truestate_model::{
    FilterGroup, Pagination, SORT_OPTIONS, SalesQuery, TransactionRecord,
    record::display_or_blank,
};

const TABLE_WIDTH: u16 = 140;

/// Results table, placeholder or error, followed by the footer.
pub fn render_results(view: &ResultView<'_>) -> String {
    let mut out = String::new();
    match view.status() {
        ViewStatus::Loading => out.push_str(LOADING_TEXT),
        ViewStatus::Failed(message) => {
            let _ = write!(out, "Error: {message}");
        }
        ViewStatus::Empty => out.push_str(EMPTY_TEXT),
        ViewStatus::Rows(rows) => {
            let _ = write!(out, "{}", transactions_table(rows));
        }
    }
    out.push('\n');
    out.push_str(&footer(view.total(), view.pagination()));
    out
}

/// `Total: n  ·  Page X of Y` with rows shown and page controls.
pub fn footer(total: u64, pagination: Pagination) -> String {
    let mut line = format!("Total: {}  ·  {}", format_count(total), pagination.label());
    if let Some((first, last)) = pagination.row_range() {
        let _ = write!(
            line,
            "  ·  rows {}-{}",
            format_count(first),
            format_count(last)
        );
    }
    let controls: Vec<&str> = [
        pagination.has_previous().then_some("prev"),
        pagination.has_next().then_some("next"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !controls.is_empty() {
        let _ = write!(line, "  [{}]", controls.join(" | "));
    }
    line
}

/// Numbered suggestion list, or `None` when there is nothing to show.
pub fn render_suggestions(suggestions: &[String]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    let mut out = String::from("Suggestions:");
    for (index, name) in suggestions.iter().enumerate() {
        let _ = write!(out, "\n  {}. {name}", index + 1);
    }
    Some(out)
}

/// Committed query next to the pending draft.
pub fn render_state(query: &SalesQuery, draft: &Draft) -> String {
    let mut out = String::new();
    let search = if query.search().is_empty() {
        "(none)"
    } else {
        query.search()
    };
    let _ = writeln!(out, "Search: {search}");
    let _ = writeln!(out, "Sort: {}", query.sort());
    let _ = write!(out, "Filters ({})", query.filters().active_count());
    for group in FilterGroup::ALL {
        let selected = query.filters().group(group);
        if !selected.is_empty() {
            let values: Vec<&str> = selected.iter().map(String::as_str).collect();
            let _ = write!(out, "\n  {}: {}", group.label(), values.join(", "));
        }
    }
    let range = &query.filters().date_range;
    if !range.is_unbounded() {
        let _ = write!(
            out,
            "\n  Date: {} to {}",
            display_or_blank(range.start.as_ref()),
            display_or_blank(range.end.as_ref())
        );
    }

    let pending = draft.filters.to_filters();
    if &pending != query.filters() {
        let _ = write!(
            out,
            "\nDraft filters ({}) not applied; type `apply`",
            pending.active_count()
        );
    }
    if draft.search.trim() != query.search() {
        let _ = write!(out, "\nDraft search `{}` not submitted", draft.search);
    }
    out
}

/// Table of the current page, one column per transaction field.
pub fn transactions_table(rows: &[TransactionRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Transaction ID"),
        header_cell("Date"),
        header_cell("Customer ID"),
        header_cell("Customer"),
        header_cell("Phone"),
        header_cell("Gender"),
        header_cell("Age"),
        header_cell("Category"),
        header_cell("Qty"),
        header_cell("Total Amount"),
        header_cell("Final Amount"),
        header_cell("Region"),
        header_cell("Product ID"),
        header_cell("Employee"),
    ]);
    apply_results_table_style(&mut table);
    for index in [6, 8, 9, 10] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            text_cell(row.display_transaction_id()),
            text_cell(row.date.as_deref().unwrap_or_default()),
            text_cell(row.customer_id.as_deref().unwrap_or_default()),
            text_cell(row.customer_name().unwrap_or_default()),
            text_cell(row.phone_number.as_deref().unwrap_or_default()),
            text_cell(row.gender.as_deref().unwrap_or_default()),
            text_cell(&display_or_blank(row.age.as_ref())),
            text_cell(row.product_category.as_deref().unwrap_or_default()),
            text_cell(&display_or_blank(row.quantity.as_ref())),
            text_cell(&row.display_total_amount()),
            text_cell(&row.display_final_amount()),
            text_cell(row.customer_region.as_deref().unwrap_or_default()),
            text_cell(row.product_id.as_deref().unwrap_or_default()),
            text_cell(row.employee_name.as_deref().unwrap_or_default()),
        ]);
    }
    table
}

/// Filter values per group, in panel order.
pub fn filter_options_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Keyword"),
        header_cell("Values"),
    ]);
    apply_catalog_table_style(&mut table);
    for group in FilterGroup::ALL {
        table.add_row(vec![
            Cell::new(group.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            dim_cell(keyword(group)),
            Cell::new(group.options().join(", ")),
        ]);
    }
    table
}

/// Sort presets and the `sort` arguments that select them.
pub fn sort_options_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Sort"), header_cell("Command")]);
    apply_catalog_table_style(&mut table);
    for option in &SORT_OPTIONS {
        table.add_row(vec![
            Cell::new(option.label),
            dim_cell(format!("sort {} {}", option.spec.field, option.spec.order)),
        ]);
    }
    table
}

/// Thousands-separated integer, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn keyword(group: FilterGroup) -> &'static str {
    match group {
        FilterGroup::Region => "region",
        FilterGroup::Gender => "gender",
        FilterGroup::Category => "category",
        FilterGroup::PaymentMethod => "payment",
        FilterGroup::Tag => "tag",
    }
}

fn apply_results_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
}

fn apply_catalog_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
