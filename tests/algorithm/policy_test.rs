use doi_analysis::algorithm::policy::{
    OrderShift, PolicyAggregationConfig, adjusted_doi_comparison, category_rollups,
    doi_by_location, doi_gap_skus, doi_means, order_shift_summary, sku_view,
};
use doi_analysis::load_inputs;

use crate::utils::{policy_record, standard_fixture};

#[test]
fn test_newly_ordered_count_and_sum() {
    let rows: Vec<_> = [(0.0, 5.0), (0.0, 0.0), (3.0, 4.0)]
        .into_iter()
        .enumerate()
        .map(|(i, (actual, new))| {
            let mut r = policy_record(&i.to_string(), "Dairy");
            r.rl_qty_actual = actual;
            r.rl_qty_new = new;
            r
        })
        .collect();

    let summary = order_shift_summary(&rows, OrderShift::NewlyOrdered);
    assert_eq!(summary.sku_count, 1);
    assert_eq!(summary.quantity, 5.0);
}

#[test]
fn test_outlier_bound_mean() {
    let rows: Vec<_> = [5.0, 10.0, 25.0]
        .into_iter()
        .map(|doi| {
            let mut r = policy_record("1", "Dairy");
            r.landed_doi_old = doi;
            r
        })
        .collect();

    let means = doi_means(&rows, &PolicyAggregationConfig::default());
    assert_eq!(means.old, Some(7.5));

    let wide = PolicyAggregationConfig {
        doi_upper_bound: 100.0,
        ..PolicyAggregationConfig::default()
    };
    assert_eq!(doi_means(&rows, &wide).old, Some(40.0 / 3.0));
}

#[test]
fn test_aggregations_over_loaded_table() {
    let fx = standard_fixture();
    let records = load_inputs(&fx.config).unwrap().policy.records().unwrap();
    let config = PolicyAggregationConfig::default();

    let means = doi_means(&records, &config);
    assert_eq!(means.old, Some(6.0));
    assert!((means.new.unwrap() - 22.0 / 3.0).abs() < 1e-9);
    assert_eq!(means.new_rows, 3);

    let newly = order_shift_summary(&records, OrderShift::NewlyOrdered);
    assert_eq!(newly.sku_count, 2);
    assert_eq!(newly.quantity, 17.0);

    let dropped = order_shift_summary(&records, OrderShift::NoLongerOrdered);
    assert_eq!(dropped.sku_count, 1);
    assert_eq!(dropped.quantity, 1200.0);
    assert_eq!(dropped.mean_doi_new, Some(30.0));

    let by_category = category_rollups(&records, OrderShift::NewlyOrdered);
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].category, "Dairy");
    assert_eq!(by_category[0].quantity, 17.0);
    // One vote each; the smaller reason wins the tie
    assert_eq!(
        by_category[0].mode_reason.as_deref(),
        Some("Harus order, OOS WH")
    );

    let gap = doi_gap_skus(&records, config.doi_gap);
    let ids: Vec<&str> = gap.iter().map(|g| g.product_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4", "5"]);

    let adjusted = adjusted_doi_comparison(&records, &config);
    assert_eq!(adjusted.rows, 3);
    assert_eq!(adjusted.mean_old, Some(4.0));
    assert_eq!(adjusted.gap_skus.len(), 2);

    let locations = doi_by_location(&records, &config);
    assert_eq!(locations[0].location_id, "WH1");
    assert_eq!(locations[0].means.old, Some(5.0));
    assert_eq!(locations[0].means.new, Some(7.5));
    // Location means keep the 25 and 30 day rows by default
    assert!((locations[1].means.new.unwrap() - 62.0 / 3.0).abs() < 1e-9);

    let bounded = PolicyAggregationConfig {
        bound_location_doi: true,
        ..config
    };
    let locations = doi_by_location(&records, &bounded);
    assert_eq!(locations[1].means.new, Some(7.0));
    assert_eq!(locations[1].means.new_rows, 1);

    let view = sku_view(&records, "4").unwrap();
    assert_eq!(view.product_name, "Crackers");
    assert_eq!(view.mean_rl_qty_actual, 1200.0);
    assert!(sku_view(&records, "99").is_none());
}

#[test]
fn test_scaled_new_mean() {
    let fx = standard_fixture();
    let records = load_inputs(&fx.config).unwrap().policy.records().unwrap();
    let scaled = PolicyAggregationConfig {
        doi_upper_bound: 100.0,
        new_doi_scale: 0.8,
        ..PolicyAggregationConfig::default()
    };

    let means = doi_means(&records, &scaled);
    // (9 + 6 + 25 + 30 + 7) / 5 * 0.8
    assert!((means.new.unwrap() - 12.32).abs() < 1e-9);
}
