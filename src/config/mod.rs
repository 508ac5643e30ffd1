//! Configuration for a report run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::algorithm::DEFAULT_LAG_DAYS;
use crate::algorithm::policy::{PolicyAggregationConfig, PolicyScope};
use crate::error::util::safe_read_to_string;
use crate::error::{ReportError, Result};
use crate::schema::{DateFormatConfig, InboundColumns, PolicyColumns, TotalColumns};

/// How the binary renders the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Arrow pretty tables plus summary lines
    #[default]
    Text,
    /// The serialized `Report`
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Source header names for every input table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub inbound: InboundColumns,
    pub total: TotalColumns,
    pub policy: PolicyColumns,
}

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Daily inbound quantities
    pub inbound_path: PathBuf,
    /// Daily out-of-stock contribution
    pub total_path: PathBuf,
    /// Per-SKU policy comparison
    pub policy_path: PathBuf,
    /// Days between an inbound shipment and the out-of-stock day it affects
    pub lag_days: i64,
    pub columns: ColumnConfig,
    /// Date format configuration for string-to-date conversions
    pub date_format_config: DateFormatConfig,
    pub policy: PolicyAggregationConfig,
    /// Restriction applied to the policy table before aggregation
    pub scope: PolicyScope,
    /// Product id for the single-SKU view
    pub sku: Option<String>,
    pub output: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            inbound_path: PathBuf::from("inb.csv"),
            total_path: PathBuf::from("total.csv"),
            policy_path: PathBuf::from("analisa.csv"),
            lag_days: DEFAULT_LAG_DAYS,
            columns: ColumnConfig::default(),
            date_format_config: DateFormatConfig::default(),
            policy: PolicyAggregationConfig::default(),
            scope: PolicyScope::default(),
            sku: None,
            output: OutputFormat::default(),
        }
    }
}

impl ReportConfig {
    /// Load a configuration from a JSON file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = safe_read_to_string(path, "report configuration")?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ReportError::Config(format!("{}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce a meaningful report
    pub fn validate(&self) -> Result<()> {
        let policy = &self.policy;
        for (name, value) in [
            ("doi_upper_bound", policy.doi_upper_bound),
            ("new_doi_scale", policy.new_doi_scale),
            ("doi_gap", policy.doi_gap),
        ] {
            if !value.is_finite() {
                return Err(ReportError::Config(format!(
                    "policy.{name} must be a finite number, got {value}"
                )));
            }
        }
        if self.date_format_config.date_formats.is_empty()
            && self.date_format_config.datetime_formats.is_empty()
            && !self.date_format_config.enable_format_detection
        {
            return Err(ReportError::Config(
                "no date formats configured and format detection is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Configuration:")?;
        writeln!(f, "  Inbound File: {}", self.inbound_path.display())?;
        writeln!(f, "  Total File: {}", self.total_path.display())?;
        writeln!(f, "  Policy File: {}", self.policy_path.display())?;
        writeln!(f, "  Lag Days: {}", self.lag_days)?;
        if let Some(sku) = &self.sku {
            writeln!(f, "  SKU: {sku}")?;
        }
        writeln!(f, "  Output: {}", self.output)?;
        write!(f, "{}", self.policy)?;
        write!(f, "{}", self.scope)
    }
}
