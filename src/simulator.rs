// 🎛️ Plan Simulator - Monthly P&L projection engine
// A pure function of (plan, overrides): identical inputs always produce
// an identical projection series, because the same plan feeds multiple
// chart views that must stay mutually consistent. Months are evaluated
// strictly left-to-right; cumulative cash depends on the prior month.

use crate::entities::{BusinessPlan, PlanCell, RowKind};
use crate::error::{CoreError, CoreResult};
use crate::fiscal::calc_yoy;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// PROJECTION OUTPUT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedLine {
    pub label: String,
    pub kind: RowKind,
    pub value: f64,
}

/// One month of the computed projection. Recomputed on every read,
/// never cached across assumption changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyProjection {
    pub month: String,

    /// Every plan row's resolved value, in declaration order
    pub line_items: Vec<ProjectedLine>,

    pub revenue: f64,
    pub cost_of_goods: f64,
    pub sga: f64,

    /// revenue - cost of goods
    pub gross_profit: f64,

    /// gross profit - SG&A
    pub operating_profit: f64,

    /// prior cumulative + this month's operating profit
    pub cumulative_cash: f64,

    /// Revenue growth vs the same calendar month one year earlier in
    /// this series; None when that month is absent or its revenue is zero
    pub yoy_revenue: Option<f64>,
}

// ============================================================================
// VALIDATION
// ============================================================================

/// "YYYY-MM" month label as a comparable (year, month) pair.
fn parse_month(label: &str) -> CoreResult<(i32, u32)> {
    let (year, month) = label
        .split_once('-')
        .ok_or_else(|| CoreError::Validation(format!("bad month label: {}", label)))?;

    let year: i32 = year
        .parse()
        .map_err(|_| CoreError::Validation(format!("bad month label: {}", label)))?;
    let month: u32 = month
        .parse()
        .map_err(|_| CoreError::Validation(format!("bad month label: {}", label)))?;

    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!("bad month label: {}", label)));
    }
    Ok((year, month))
}

/// Full up-front validation so no month is computed from a broken plan:
/// month axis strictly ascending, every row on the same axis, every
/// assumption reference resolvable.
fn validate(plan: &BusinessPlan, overrides: &HashMap<String, f64>) -> CoreResult<Vec<(i32, u32)>> {
    if plan.months.is_empty() {
        return Err(CoreError::Validation("plan has no months".to_string()));
    }

    let axis: Vec<(i32, u32)> =
        plan.months.iter().map(|m| parse_month(m)).collect::<CoreResult<_>>()?;

    for pair in axis.windows(2) {
        if pair[0] >= pair[1] {
            return Err(CoreError::Validation(
                "month labels are not strictly ascending".to_string(),
            ));
        }
    }

    for row in plan.rows() {
        if row.cells.len() != plan.months.len() {
            return Err(CoreError::Validation(format!(
                "row '{}' has {} cells for {} months",
                row.label,
                row.cells.len(),
                plan.months.len()
            )));
        }

        for cell in &row.cells {
            let reference = match cell {
                PlanCell::Literal { .. } => continue,
                PlanCell::Formula { assumption } => assumption,
                PlanCell::Ramp { base, .. } => base,
            };
            if plan.assumption(reference).is_none() {
                return Err(CoreError::MissingAssumption(reference.clone()));
            }
        }
    }

    // Overrides must target real assumptions; sorted so the reported
    // name is deterministic
    let mut override_names: Vec<&String> = overrides.keys().collect();
    override_names.sort();
    for name in override_names {
        if plan.assumption(name).is_none() {
            return Err(CoreError::MissingAssumption(name.clone()));
        }
    }

    Ok(axis)
}

// ============================================================================
// SIMULATION
// ============================================================================

/// Run a plan against its assumptions. Overrides replace base assumption
/// values for the whole simulation; ramps stay ramps because the
/// per-month multipliers live in the cells.
pub fn simulate(
    plan: &BusinessPlan,
    overrides: &HashMap<String, f64>,
) -> CoreResult<Vec<MonthlyProjection>> {
    let axis = validate(plan, overrides)?;

    let mut assumptions: HashMap<&str, f64> = plan
        .assumptions
        .iter()
        .map(|a| (a.name.as_str(), a.value))
        .collect();
    for (name, value) in overrides {
        assumptions.insert(name.as_str(), *value);
    }

    let month_index: HashMap<(i32, u32), usize> =
        axis.iter().enumerate().map(|(i, m)| (*m, i)).collect();

    let mut projections: Vec<MonthlyProjection> = Vec::with_capacity(plan.months.len());
    let mut cumulative_cash = plan.opening_cash;

    for (month_idx, label) in plan.months.iter().enumerate() {
        let mut line_items = Vec::new();
        let mut revenue = 0.0;
        let mut cost_of_goods = 0.0;
        let mut sga = 0.0;

        for row in plan.rows() {
            // References were checked in validate; missing lookups
            // cannot occur past this point
            let value = match &row.cells[month_idx] {
                PlanCell::Literal { value } => *value,
                PlanCell::Formula { assumption } => {
                    assumptions.get(assumption.as_str()).copied().unwrap_or(0.0)
                }
                PlanCell::Ramp { base, multiplier } => {
                    assumptions.get(base.as_str()).copied().unwrap_or(0.0) * multiplier
                }
            };

            match row.kind {
                RowKind::Revenue => revenue += value,
                RowKind::CostOfGoods => cost_of_goods += value,
                RowKind::Sga => sga += value,
                RowKind::Memo => {}
            }

            line_items.push(ProjectedLine { label: row.label.clone(), kind: row.kind, value });
        }

        let gross_profit = revenue - cost_of_goods;
        let operating_profit = gross_profit - sga;
        cumulative_cash += operating_profit;

        let (year, month) = axis[month_idx];
        let yoy_revenue = month_index
            .get(&(year - 1, month))
            .and_then(|prior_idx| calc_yoy(revenue, projections[*prior_idx].revenue));

        projections.push(MonthlyProjection {
            month: label.clone(),
            line_items,
            revenue,
            cost_of_goods,
            sga,
            gross_profit,
            operating_profit,
            cumulative_cash,
            yoy_revenue,
        });
    }

    Ok(projections)
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub total_revenue: f64,
    pub total_operating_profit: f64,

    /// Operating profit over revenue in percent; None on zero revenue
    pub operating_margin: Option<f64>,

    /// Cumulative cash after the final month
    pub ending_cash: f64,
}

pub fn summarize(projections: &[MonthlyProjection]) -> PlanSummary {
    let total_revenue: f64 = projections.iter().map(|p| p.revenue).sum();
    let total_operating_profit: f64 = projections.iter().map(|p| p.operating_profit).sum();

    let operating_margin = if total_revenue > 0.0 {
        Some(total_operating_profit / total_revenue * 100.0)
    } else {
        None
    };

    PlanSummary {
        total_revenue,
        total_operating_profit,
        operating_margin,
        ending_cash: projections.last().map(|p| p.cumulative_cash).unwrap_or(0.0),
    }
}

// ============================================================================
// SENSITIVITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityImpact {
    pub assumption: String,
    pub label: String,

    /// Change in total operating profit when the assumption moves +10%
    pub impact: f64,
}

/// Impact of a +10% move in each assumption on total operating profit,
/// sorted by absolute impact descending.
pub fn sensitivity(
    plan: &BusinessPlan,
    overrides: &HashMap<String, f64>,
) -> CoreResult<Vec<SensitivityImpact>> {
    let baseline = summarize(&simulate(plan, overrides)?).total_operating_profit;

    let mut impacts = Vec::with_capacity(plan.assumptions.len());
    for assumption in &plan.assumptions {
        let base_value = overrides
            .get(&assumption.name)
            .copied()
            .unwrap_or(assumption.value);

        let mut bumped = overrides.clone();
        bumped.insert(assumption.name.clone(), base_value * 1.1);

        let bumped_total = summarize(&simulate(plan, &bumped)?).total_operating_profit;
        impacts.push(SensitivityImpact {
            assumption: assumption.name.clone(),
            label: assumption.label.clone(),
            impact: bumped_total - baseline,
        });
    }

    impacts.sort_by(|a, b| {
        b.impact
            .abs()
            .partial_cmp(&a.impact.abs())
            .unwrap_or(Ordering::Equal)
    });
    Ok(impacts)
}

// ============================================================================
// TESTS
// ============================================================================
