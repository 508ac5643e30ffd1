use std::fs;
use std::path::{Path, PathBuf};

use doi_analysis::{PolicyComparisonRecord, ReportConfig};
use tempfile::TempDir;

pub const INBOUND_HEADER: &str = "Date,Actual,Max Projected";
pub const TOTAL_HEADER: &str = "Date,% OOS Contribution";
pub const POLICY_HEADER: &str = "product_id,product_name,location_id,l1_category_name,\
RL Qty Actual,RL Qty NEW after MIN QTY WH,Landed DOI OLD,Landed DOI New,\
Why Increase/Decrease?,Verdict";

/// Input files written to a temporary directory
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    pub dir: TempDir,
    pub config: ReportConfig,
}

impl Fixture {
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Write `content` to `dir/name`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture file");
    path
}

/// Write the three inputs and point a default config at them
pub fn fixture(inbound: &str, total: &str, policy: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = ReportConfig {
        inbound_path: write_file(dir.path(), "inb.csv", inbound),
        total_path: write_file(dir.path(), "total.csv", total),
        policy_path: write_file(dir.path(), "analisa.csv", policy),
        ..ReportConfig::default()
    };
    Fixture { dir, config }
}

/// Inbound and total files for the 10-15 Feb cycle, with a small policy table
pub fn standard_fixture() -> Fixture {
    fixture(
        &format!(
            "{INBOUND_HEADER}\n\
             2025-02-10,100,120\n\
             2025-02-11,\"1,234\",1500\n\
             2025-02-12,80,0\n\
             2025-02-13,90,90\n"
        ),
        &format!(
            "{TOTAL_HEADER}\n\
             2025-02-12,10\n\
             2025-02-13,4\n\
             2025-02-14,6\n\
             2025-02-15,3\n\
             2025-02-16,2\n"
        ),
        &format!("{POLICY_HEADER}\n{}", policy_rows()),
    )
}

/// Policy rows covering both ordering shifts, two locations and two categories
pub fn policy_rows() -> String {
    [
        "1,Milk,WH1,Dairy,0,5,4,9,\"Harus order, OOS WH\",OK",
        "2,Cheese,WH1,Dairy,0,0,6,6,Landed DOI aman tanpa order,",
        "3,Chips,WH2,Snacks,3,4,10,25,Jadi order karena min qty WH dan multiplier,OK",
        "4,Crackers,WH2,Snacks,\"1,200\",0,8,30,Landed DOI aman tanpa order,Review",
        "5,Yogurt,WH2,Dairy,0,12,2,7,Jadi order karena min qty WH dan multiplier,OK",
    ]
    .join("\n")
        + "\n"
}

/// An in-memory policy record with zeroed quantities
pub fn policy_record(id: &str, category: &str) -> PolicyComparisonRecord {
    PolicyComparisonRecord {
        product_id: id.to_string(),
        product_name: format!("Product {id}"),
        location_id: "WH1".to_string(),
        category: category.to_string(),
        rl_qty_actual: 0.0,
        rl_qty_new: 0.0,
        landed_doi_old: 0.0,
        landed_doi_new: 0.0,
        reason: String::new(),
        verdict: None,
    }
}
