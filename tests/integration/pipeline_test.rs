use chrono::NaiveDate;
use doi_analysis::{
    OutputFormat, Projection, ReportConfig, ReportError, load_inputs, render_text, run_report,
};

use crate::utils::{INBOUND_HEADER, POLICY_HEADER, TOTAL_HEADER, fixture, standard_fixture};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, day).unwrap()
}

#[test]
fn test_projection_scenario() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,10\n"),
        &format!("{POLICY_HEADER}\n"),
    );

    let report = run_report(&fx.config).unwrap();
    assert_eq!(report.joined.len(), 1);

    let row = &report.joined[0];
    assert_eq!(row.date, date(12));
    assert_eq!(row.inbound_date, Some(date(10)));
    assert_eq!(row.actual_quantity, Some(100.0));
    assert_eq!(row.max_projected_quantity, Some(120.0));
    let projected = row.projected_oos_pct.unwrap();
    assert!((projected - 8.333_333_333_333_334).abs() < 1e-9);
}

#[test]
fn test_joined_series_follows_lag() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();
    let report = run_report(&fx.config).unwrap();

    // Every inbound day reappears lag days later with identical values
    for inbound in &inputs.inbound {
        let target = inbound.date + chrono::Days::new(2);
        let row = report
            .joined
            .iter()
            .find(|r| r.date == target)
            .expect("total row for lagged date");
        assert_eq!(row.inbound_date, Some(inbound.date));
        assert_eq!(row.actual_quantity, Some(inbound.actual_quantity));
        assert_eq!(row.max_projected_quantity, Some(inbound.max_projected_quantity));
    }

    let statuses: Vec<&str> = report
        .joined
        .iter()
        .map(|r| r.projection_status.as_str())
        .collect();
    assert_eq!(
        statuses,
        vec![
            "computed",
            "computed",
            "not_computable",
            "computed",
            "no_inbound_match"
        ]
    );

    for row in &report.joined {
        match (row.actual_quantity, row.max_projected_quantity) {
            (Some(actual), Some(max)) if max > 0.0 => {
                let expected = row.oos_contribution_pct * actual / max;
                assert!((row.projected_oos_pct.unwrap() - expected).abs() < 1e-9);
            }
            _ => assert_eq!(row.projected_oos_pct, None),
        }
    }
}

#[test]
fn test_records_keep_projection_enum() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();
    let aligned = doi_analysis::join_with_lag(&inputs.inbound, &inputs.totals, 2).unwrap();
    let joined = doi_analysis::project(aligned);

    assert_eq!(joined[2].projection, Projection::NotComputable);
    assert_eq!(joined[4].projection, Projection::NoInboundMatch);
    assert!(joined[4].inbound.is_none());
}

#[test]
fn test_thousands_separator_is_coerced() {
    let fx = standard_fixture();
    let inputs = load_inputs(&fx.config).unwrap();
    assert_eq!(inputs.inbound[1].actual_quantity, 1234.0);

    let policy = inputs.policy.records().unwrap();
    assert_eq!(policy[3].rl_qty_actual, 1200.0);
    assert_eq!(policy[1].verdict, None);
    assert_eq!(policy[3].verdict.as_deref(), Some("Review"));
}

#[test]
fn test_unparsable_numbers_become_zero() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,abc,\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,n/a\n"),
        &format!("{POLICY_HEADER}\n"),
    );
    let inputs = load_inputs(&fx.config).unwrap();
    assert_eq!(inputs.inbound[0].actual_quantity, 0.0);
    assert_eq!(inputs.inbound[0].max_projected_quantity, 0.0);
    assert_eq!(inputs.totals[0].oos_contribution_pct, 0.0);

    let report = run_report(&fx.config).unwrap();
    assert_eq!(report.joined[0].projection_status, "not_computable");
}

#[test]
fn test_timestamps_normalize_to_dates() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10 13:45:00,50,100\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12T08:00:00,20\n"),
        &format!("{POLICY_HEADER}\n"),
    );

    let report = run_report(&fx.config).unwrap();
    assert_eq!(report.joined[0].date, date(12));
    assert_eq!(report.joined[0].inbound_date, Some(date(10)));
    assert_eq!(report.joined[0].projected_oos_pct, Some(10.0));
}

#[test]
fn test_runs_are_idempotent() {
    let fx = standard_fixture();
    let first = run_report(&fx.config).unwrap().to_json().unwrap();
    let second = run_report(&fx.config).unwrap().to_json().unwrap();
    assert_eq!(first, second);
    assert!(!first.contains("NaN"));
}

#[test]
fn test_missing_file_names_path() {
    let fx = standard_fixture();
    let config = ReportConfig {
        total_path: fx.path("missing_total.csv"),
        ..fx.config.clone()
    };

    let err = run_report(&config).unwrap_err();
    assert!(matches!(err, ReportError::File { .. }));
    assert!(err.to_string().contains("missing_total.csv"));
}

#[test]
fn test_missing_column_names_column() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\n"),
        "Date,OOS\n2025-02-12,10\n",
        &format!("{POLICY_HEADER}\n"),
    );

    let err = run_report(&fx.config).unwrap_err();
    match &err {
        ReportError::MissingColumn { table, column } => {
            assert_eq!(table, "total");
            assert_eq!(column, "% OOS Contribution");
        }
        other => panic!("expected missing column, got {other:?}"),
    }
    assert!(err.to_string().contains("% OOS Contribution"));
}

#[test]
fn test_invalid_date_is_fatal() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\nnot a date,1,1\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,10\n"),
        &format!("{POLICY_HEADER}\n"),
    );

    let err = run_report(&fx.config).unwrap_err();
    assert!(matches!(err, ReportError::InvalidDate { .. }));
    assert!(err.to_string().contains("not a date"));
}

#[test]
fn test_ambiguous_join_is_fatal() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\n2025-02-10,1,2\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,10\n"),
        &format!("{POLICY_HEADER}\n"),
    );

    let err = run_report(&fx.config).unwrap_err();
    assert!(matches!(
        err,
        ReportError::AmbiguousJoin { candidates: 2, .. }
    ));
}

#[test]
fn test_custom_headers_and_lag() {
    let fx = fixture(
        "Tanggal,Aktual,Proyeksi\n2025-02-10,60,120\n",
        "Tanggal,OOS %\n2025-02-13,10\n",
        &format!("{POLICY_HEADER}\n"),
    );
    let mut config = fx.config.clone();
    config.lag_days = 3;
    config.columns.inbound.date = "Tanggal".to_string();
    config.columns.inbound.actual = "Aktual".to_string();
    config.columns.inbound.max_projected = "Proyeksi".to_string();
    config.columns.total.date = "Tanggal".to_string();
    config.columns.total.oos_contribution_pct = "OOS %".to_string();

    let report = run_report(&config).unwrap();
    assert_eq!(report.lag_days, 3);
    assert_eq!(report.joined[0].projected_oos_pct, Some(5.0));
}

#[test]
fn test_text_and_json_output() {
    let fx = standard_fixture();
    let config = ReportConfig {
        sku: Some("1".to_string()),
        output: OutputFormat::Json,
        ..fx.config.clone()
    };
    let report = run_report(&config).unwrap();

    let text = render_text(&report).unwrap();
    assert!(text.contains("projected_oos_pct"));
    assert!(text.contains("Average Landed DOI Old: 6.00"));
    assert!(text.contains("SKU 1 - Milk"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["joined"][0]["date"], "2025-02-12");
    assert_eq!(json["joined"][4]["projected_oos_pct"], serde_json::Value::Null);
    assert_eq!(json["policy"]["newly_ordered"]["sku_count"], 2);
}

#[test]
fn test_short_policy_row_is_padded() {
    let fx = fixture(
        &format!("{INBOUND_HEADER}\n2025-02-10,100,120\n"),
        &format!("{TOTAL_HEADER}\n2025-02-12,10\n"),
        &format!(
            "{POLICY_HEADER}\n\
             1,Milk,WH1,Dairy,0,5,4,9,Harus order,OK\n\
             2,Cheese,WH1,Dairy,0,3,6,8,Harus order\n"
        ),
    );

    let inputs = load_inputs(&fx.config).unwrap();
    let policy = inputs.policy.records().unwrap();
    assert_eq!(policy.len(), 2);
    assert_eq!(policy[0].verdict.as_deref(), Some("OK"));
    assert_eq!(policy[1].verdict, None);
    assert_eq!(policy[1].reason, "Harus order");

    let report = run_report(&fx.config).unwrap();
    assert_eq!(report.policy.newly_ordered.sku_count, 2);
    assert_eq!(report.policy.newly_ordered.quantity, 8.0);
}
