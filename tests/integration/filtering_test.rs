use doi_analysis::algorithm::policy::PolicyScope;
use doi_analysis::filter_expression::{Expr, col};
use doi_analysis::schema::columns;
use doi_analysis::{ReportConfig, ReportError, load_inputs, run_report};

use crate::utils::{INBOUND_HEADER, POLICY_HEADER, TOTAL_HEADER, fixture, standard_fixture};

#[test]
fn test_filter_policy_table_by_location_and_category() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();
    assert_eq!(inputs.policy.len(), 5);

    let wh2_dairy = inputs
        .policy
        .filter(&col(columns::LOCATION_ID).eq("WH2").and(col(columns::CATEGORY).eq("Dairy")))
        .unwrap();
    let records = wh2_dairy.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].product_name, "Yogurt");
}

#[test]
fn test_filter_by_reason_list_and_negation() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();

    let safe = col(columns::REASON).in_list(vec!["Landed DOI aman tanpa order".to_string()]);
    assert_eq!(inputs.policy.filter(&safe).unwrap().len(), 2);
    assert_eq!(inputs.policy.filter(&safe.not()).unwrap().len(), 3);
    assert_eq!(inputs.policy.filter(&Expr::always_true()).unwrap().len(), 5);
}

#[test]
fn test_filter_on_unknown_column_fails() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();

    let err = inputs
        .policy
        .filter(&col("warehouse_zone").eq("A"))
        .unwrap_err();
    assert!(matches!(err, ReportError::Arrow(_)));
}

#[test]
fn test_scope_drives_policy_report() {
    let fx = standard_fixture();

    let dairy = ReportConfig {
        scope: PolicyScope {
            category: Some("Dairy".to_string()),
            ..PolicyScope::default()
        },
        ..fx.config.clone()
    };
    let report = run_report(&dairy).unwrap();
    assert_eq!(report.policy.rows, 3);
    assert_eq!(report.policy.newly_ordered.sku_count, 2);
    assert_eq!(report.policy.no_longer_ordered.sku_count, 0);
    // Location view ignores the scope
    assert_eq!(report.policy.doi_by_location.len(), 2);

    let reasons = ReportConfig {
        scope: PolicyScope {
            reasons: vec!["Landed DOI aman tanpa order".to_string()],
            ..PolicyScope::default()
        },
        ..fx.config.clone()
    };
    let report = run_report(&reasons).unwrap();
    assert_eq!(report.policy.rows, 2);
    assert_eq!(report.policy.no_longer_ordered.sku_count, 1);
    assert_eq!(report.policy.no_longer_ordered.quantity, 1200.0);
}

#[test]
fn test_empty_scope_gives_absent_means() {
    let fx = standard_fixture();
    let config = ReportConfig {
        scope: PolicyScope {
            location: Some("WH1".to_string()),
            category: Some("Snacks".to_string()),
            reasons: Vec::new(),
        },
        ..fx.config.clone()
    };

    let report = run_report(&config).unwrap();
    assert_eq!(report.policy.rows, 0);
    assert_eq!(report.policy.doi_means.old, None);
    assert_eq!(report.policy.doi_means.new, None);
    assert_eq!(report.policy.newly_ordered.quantity, 0.0);
    assert!(report.policy.newly_ordered_by_category.is_empty());
}

#[test]
fn test_padded_text_cells_match_scope() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,10\n"),
        &format!(
            "{POLICY_HEADER}\n\
             1,Milk, WH1 , Dairy,0,5,4,9,Harus order,OK\n\
             2,Chips,WH2,Snacks ,3,4,10,25,Landed DOI aman tanpa order ,OK\n"
        ),
    );

    let dairy = ReportConfig {
        scope: PolicyScope {
            location: Some("WH1".to_string()),
            category: Some("Dairy".to_string()),
            reasons: Vec::new(),
        },
        ..fx.config.clone()
    };
    let report = run_report(&dairy).unwrap();
    assert_eq!(report.policy.rows, 1);
    assert_eq!(report.policy.newly_ordered.sku_count, 1);

    let safe = ReportConfig {
        scope: PolicyScope {
            reasons: vec!["Landed DOI aman tanpa order".to_string()],
            ..PolicyScope::default()
        },
        ..fx.config.clone()
    };
    assert_eq!(run_report(&safe).unwrap().policy.rows, 1);
}
