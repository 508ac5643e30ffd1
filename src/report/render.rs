//! Plain-text rendering of a [`Report`]

use arrow::datatypes::{DataType, Field, Schema};
use arrow::util::pretty::pretty_format_batches;

use crate::algorithm::policy::{CategoryRollup, DoiGapSku, LocationDoi, OrderShiftSummary};
use crate::error::Result;
use crate::models::ArrowSchema;
use crate::report::Report;

impl ArrowSchema for CategoryRollup {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("category", DataType::Utf8, false),
            Field::new("sku_count", DataType::UInt64, false),
            Field::new("quantity", DataType::Float64, false),
            Field::new("mode_reason", DataType::Utf8, true),
        ])
    }
}

impl ArrowSchema for DoiGapSku {
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("product_id", DataType::Utf8, false),
            Field::new("product_name", DataType::Utf8, false),
            Field::new("location_id", DataType::Utf8, false),
            Field::new("landed_doi_old", DataType::Float64, false),
            Field::new("landed_doi_new", DataType::Float64, false),
        ])
    }
}

fn opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn table<T: ArrowSchema>(rows: &[T]) -> Result<String> {
    if rows.is_empty() {
        return Ok("(none)".to_string());
    }
    let batch = T::to_record_batch(rows)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

fn order_shift(
    out: &mut String,
    title: &str,
    summary: &OrderShiftSummary,
    rollups: &[CategoryRollup],
) -> Result<()> {
    out.push_str(&format!("\n== {title} ==\n"));
    out.push_str(&format!("{}\n", table(rollups)?));
    out.push_str(&format!("SKUs: {}\n", summary.sku_count));
    out.push_str(&format!("Quantity: {:.0}\n", summary.quantity));
    out.push_str(&format!("Mean landed DOI new: {}\n", opt(summary.mean_doi_new)));
    Ok(())
}

fn locations(out: &mut String, rows: &[LocationDoi]) {
    out.push_str("\n== Landed DOI by location ==\n");
    if rows.is_empty() {
        out.push_str("(none)\n");
    }
    for row in rows {
        out.push_str(&format!(
            "{}: old {} / new {}\n",
            row.location_id,
            opt(row.means.old),
            opt(row.means.new)
        ));
    }
}

/// Render the report as pretty tables and summary lines
pub fn render_text(report: &Report) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "== Inbound vs out-of-stock (lag {} days) ==\n",
        report.lag_days
    ));
    out.push_str(&format!("{}\n", table(&report.joined)?));

    let inbound = &report.inbound_summary;
    let fill_rate = inbound
        .fill_rate
        .map_or_else(|| "n/a".to_string(), |r| format!("{:.1}%", r * 100.0));
    out.push_str(&format!(
        "Inbound over {} days: actual {:.0}, max projected {:.0}, fill rate {fill_rate}\n",
        inbound.days, inbound.total_actual, inbound.total_max_projected
    ));

    let policy = &report.policy;
    order_shift(
        &mut out,
        "Newly ordered under the new policy",
        &policy.newly_ordered,
        &policy.newly_ordered_by_category,
    )?;
    order_shift(
        &mut out,
        "No longer ordered under the new policy",
        &policy.no_longer_ordered,
        &policy.no_longer_ordered_by_category,
    )?;

    out.push_str(&format!("\n== Landed DOI comparison ({} rows) ==\n", policy.rows));
    out.push_str(&format!("Average Landed DOI Old: {}\n", opt(policy.doi_means.old)));
    out.push_str(&format!("Average Landed DOI New: {}\n", opt(policy.doi_means.new)));

    let adjusted = &policy.adjusted_doi;
    out.push_str(&format!("Adjusted ({} rows):\n", adjusted.rows));
    out.push_str(&format!("  Average Landed DOI Old: {}\n", opt(adjusted.mean_old)));
    out.push_str(&format!(
        "  Average Landed DOI New (adjusted): {}\n",
        opt(adjusted.mean_adjusted_new)
    ));

    out.push_str(&format!(
        "\nSKUs where Landed DOI New >= Old + gap: {}\n",
        policy.doi_gap_skus.len()
    ));
    out.push_str(&format!("{}\n", table(&policy.doi_gap_skus)?));
    out.push_str(&format!(
        "SKUs where adjusted Landed DOI New >= Old + gap: {}\n",
        adjusted.gap_skus.len()
    ));
    out.push_str(&format!("{}\n", table(&adjusted.gap_skus)?));

    locations(&mut out, &policy.doi_by_location);

    if let Some(view) = &policy.sku_view {
        out.push_str(&format!(
            "\n== SKU {} - {} ==\n",
            view.product_id, view.product_name
        ));
        out.push_str(&format!("Rows: {}\n", view.rows));
        out.push_str(&format!(
            "Landed DOI: old {:.2} / new {:.2}\n",
            view.mean_doi_old, view.mean_doi_new
        ));
        out.push_str(&format!(
            "RL Qty: actual {:.2} / new {:.2}\n",
            view.mean_rl_qty_actual, view.mean_rl_qty_new
        ));
    }

    Ok(out)
}
