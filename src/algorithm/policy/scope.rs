//! Row scope applied to the policy table before aggregation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter_expression::{Expr, col};
use crate::schema::columns;

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Location, category and reason restrictions on the policy table
///
/// Every restriction is optional. An empty reason list keeps all reasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyScope {
    pub location: Option<String>,
    pub category: Option<String>,
    pub reasons: Vec<String>,
}

impl PolicyScope {
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.to_expr() == Expr::AlwaysTrue
    }

    /// Build the filter expression for this scope
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        let mut expr = Expr::always_true();
        if let Some(location) = &self.location {
            expr = expr.and(col(columns::LOCATION_ID).eq(location));
        }
        if let Some(category) = self.category.as_deref().filter(|c| *c != ALL_CATEGORIES) {
            expr = expr.and(col(columns::CATEGORY).eq(category));
        }
        if !self.reasons.is_empty() {
            expr = expr.and(col(columns::REASON).in_list(self.reasons.clone()));
        }
        expr
    }
}

impl fmt::Display for PolicyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Policy Scope:")?;
        writeln!(
            f,
            "  Location: {}",
            self.location.as_deref().unwrap_or("all")
        )?;
        writeln!(
            f,
            "  Category: {}",
            self.category.as_deref().unwrap_or(ALL_CATEGORIES)
        )?;
        if self.reasons.is_empty() {
            writeln!(f, "  Reasons: all")
        } else {
            writeln!(f, "  Reasons: {}", self.reasons.join(", "))
        }
    }
}
