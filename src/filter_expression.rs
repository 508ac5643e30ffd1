//! A reusable Arrow `RecordBatch` filter engine
//! Supports composable, expression-based row filters over text columns.

use arrow::array::{Array, BooleanArray, StringArray};
use arrow::compute::kernels::cmp::eq;
use arrow::compute::{and, filter_record_batch as apply_mask, not};
use arrow::error::{ArrowError, Result};
use arrow::record_batch::RecordBatch;
use rustc_hash::FxHashSet;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFilter {
    Eq(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Filter {
        column: String,
        filter: StringFilter,
    },
    And(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    In(String, Vec<String>), // Check if column value is in set of values
    AlwaysTrue,
}

impl Expr {
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::AlwaysTrue, e) | (e, Self::AlwaysTrue) => e,
            (lhs, rhs) => Self::And(Box::new(lhs), Box::new(rhs)),
        }
    }

    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    #[must_use]
    pub const fn always_true() -> Self {
        Self::AlwaysTrue
    }

    #[must_use]
    pub fn required_columns(&self) -> HashSet<String> {
        let mut set = HashSet::new();
        self.collect_columns(&mut set);
        set
    }

    fn collect_columns(&self, set: &mut HashSet<String>) {
        match self {
            Self::Filter { column, .. } | Self::In(column, _) => {
                set.insert(column.clone());
            }
            Self::And(lhs, rhs) => {
                lhs.collect_columns(set);
                rhs.collect_columns(set);
            }
            Self::Not(inner) => inner.collect_columns(set),
            Self::AlwaysTrue => {}
        }
    }
}

#[must_use]
pub fn col(name: &str) -> ColumnBuilder {
    ColumnBuilder {
        name: name.to_string(),
    }
}

pub struct ColumnBuilder {
    name: String,
}

impl ColumnBuilder {
    #[must_use]
    pub fn eq(self, val: &str) -> Expr {
        Expr::Filter {
            column: self.name,
            filter: StringFilter::Eq(val.to_string()),
        }
    }

    #[must_use]
    pub fn in_list(self, values: Vec<String>) -> Expr {
        Expr::In(self.name, values)
    }
}

pub fn evaluate_expr(batch: &RecordBatch, expr: &Expr) -> Result<BooleanArray> {
    match expr {
        Expr::Filter { column, filter } => string_mask_from_filter(batch, column, filter),
        Expr::And(lhs, rhs) => and(&evaluate_expr(batch, lhs)?, &evaluate_expr(batch, rhs)?),
        Expr::Not(inner) => not(&evaluate_expr(batch, inner)?),
        Expr::In(column, values) => evaluate_in_expr(batch, column, values),
        Expr::AlwaysTrue => Ok(BooleanArray::from(vec![true; batch.num_rows()])),
    }
}

fn string_column<'a>(batch: &'a RecordBatch, column: &str) -> Result<&'a StringArray> {
    let index = batch.schema().index_of(column)?;
    batch
        .column(index)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            ArrowError::ComputeError(format!("Column '{column}' is not a StringArray"))
        })
}

pub fn evaluate_in_expr(batch: &RecordBatch, column: &str, values: &[String]) -> Result<BooleanArray> {
    let str_array = string_column(batch, column)?;
    let value_set: FxHashSet<&str> = values.iter().map(String::as_str).collect();

    Ok(str_array
        .iter()
        .map(|opt_str| opt_str.map(|s| value_set.contains(s)))
        .collect())
}

pub fn string_mask_from_filter(
    batch: &RecordBatch,
    column: &str,
    filter: &StringFilter,
) -> Result<BooleanArray> {
    let str_array = string_column(batch, column)?;

    match filter {
        StringFilter::Eq(val) => {
            let scalar = StringArray::new_scalar(val.clone());
            eq(str_array, &scalar)
        }
    }
}

/// Keep the rows of `batch` for which `expr` is true; nulls count as false
pub fn filter_record_batch(batch: &RecordBatch, expr: &Expr) -> Result<RecordBatch> {
    if matches!(expr, Expr::AlwaysTrue) {
        return Ok(batch.clone());
    }
    let mask = evaluate_expr(batch, expr)?;
    apply_mask(batch, &mask)
}
