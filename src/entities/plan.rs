// 📋 Business Plan - Monthly P&L projection model
// A plan is a set of named assumptions plus sectioned account-line rows.
// Cells are a small tagged variant rather than free-form expressions, so
// a missing assumption reference is detectable before any month runs.

use serde::{Deserialize, Serialize};

// ============================================================================
// ASSUMPTIONS
// ============================================================================

/// Named input parameter driving formula-derived rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    /// Reference name used by Formula/Ramp cells (e.g. "unit_price")
    pub name: String,

    /// Display label for sliders and tables
    pub label: String,

    pub value: f64,
}

// ============================================================================
// PLAN CELLS AND ROWS
// ============================================================================

/// One month's value specification for a plan row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanCell {
    /// Fixed monthly figure
    Literal { value: f64 },

    /// The named assumption's value, as-is
    Formula { assumption: String },

    /// Base assumption scaled by this month's multiplier.
    /// A ramp row is the ordered sequence of these multipliers.
    Ramp { base: String, multiplier: f64 },
}

/// Which summary bucket an account line feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Revenue,
    CostOfGoods,
    Sga,
    /// Reference rows (headcount, occupancy) excluded from summary math
    Memo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    pub label: String,
    pub kind: RowKind,

    /// One cell per month, same axis as the plan's `months`
    pub cells: Vec<PlanCell>,

    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSection {
    pub title: String,
    pub rows: Vec<PlanRow>,
}

// ============================================================================
// BUSINESS PLAN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub company_id: String,
    pub title: String,

    /// Ordered assumption set; order drives sensitivity output
    pub assumptions: Vec<Assumption>,

    /// Cash on hand before the first month
    #[serde(default)]
    pub opening_cash: f64,

    /// Ordered month labels, "YYYY-MM"
    pub months: Vec<String>,

    pub sections: Vec<PlanSection>,
}

impl BusinessPlan {
    /// All rows across sections, in declaration order.
    pub fn rows(&self) -> impl Iterator<Item = &PlanRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    /// Base value for a named assumption, before any overrides.
    pub fn assumption(&self, name: &str) -> Option<f64> {
        self.assumptions.iter().find(|a| a.name == name).map(|a| a.value)
    }
}
