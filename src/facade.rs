// 🪟 Aggregation Facade - Read views for the presentation boundary
// Pure composition over the store, resolver, classifier, and simulator.
// Every view is an independent Result; one failing view never aborts
// its siblings in the same render pass.

use crate::config::{quadrant_for_slug, QuadrantConfig};
use crate::entities::{Company, FiscalYear};
use crate::error::{CoreError, CoreResult};
use crate::fiscal::{calc_yoy, FiscalResolver};
use crate::quadrant::QuadrantClassifier;
use crate::simulator::{self, MonthlyProjection, PlanSummary};
use crate::store::EntityStore;
use std::collections::HashMap;

/// Upper bound on the comparison view, enforced before any computation.
pub const MAX_COMPARE_COMPANIES: usize = 4;

// ============================================================================
// VIEW RECORDS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMetrics {
    pub year: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub operating_margin: Option<f64>,

    /// Revenue growth vs the previous fiscal year, in percent
    pub revenue_yoy: Option<f64>,

    pub employees: Option<u32>,
    pub facilities: Option<u32>,
}

#[derive(Debug)]
pub struct ComparisonEntry<'a> {
    pub company: &'a Company,

    /// None when the company has no fiscal records; the table renders
    /// blanks rather than dropping the column
    pub latest: Option<ComparisonMetrics>,
}

pub struct QuadrantView<'a> {
    pub config: &'static QuadrantConfig,
    pub companies: Vec<&'a Company>,
}

// ============================================================================
// DASHBOARD
// ============================================================================

pub struct Dashboard<'a> {
    store: &'a EntityStore,
}

impl<'a> Dashboard<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Dashboard { store }
    }

    /// All companies with financial data joined to their latest fiscal
    /// year, ordered by display name.
    pub fn latest_financials(&self) -> Vec<(&'a Company, &'a FiscalYear)> {
        FiscalResolver::new(self.store).all_financials()
    }

    /// KPI comparison matrix for a selected company subset. The
    /// selection limit is checked before any lookup or computation runs.
    pub fn compare(&self, company_ids: &[&str]) -> CoreResult<Vec<ComparisonEntry<'a>>> {
        if company_ids.len() > MAX_COMPARE_COMPANIES {
            return Err(CoreError::SelectionLimitExceeded {
                selected: company_ids.len(),
                max: MAX_COMPARE_COMPANIES,
            });
        }

        let resolver = FiscalResolver::new(self.store);
        let mut entries = Vec::with_capacity(company_ids.len());

        for id in company_ids {
            let company = self.store.company(id)?;
            let series = resolver.series(id)?;

            let latest = series.last().map(|fy| {
                let previous = series.len().checked_sub(2).map(|i| series[i]);
                ComparisonMetrics {
                    year: fy.year.clone(),
                    revenue: fy.revenue,
                    operating_profit: fy.operating_profit,
                    operating_margin: fy.margin(),
                    revenue_yoy: previous.and_then(|p| calc_yoy(fy.revenue, p.revenue)),
                    employees: fy.employees,
                    facilities: fy.facilities,
                }
            });

            entries.push(ComparisonEntry { company, latest });
        }

        Ok(entries)
    }

    /// Quadrant landing view resolved from its URL slug. None for an
    /// unknown slug (a 404 upstream, never a crash).
    pub fn quadrant_view(&self, slug: &str) -> Option<QuadrantView<'a>> {
        let quadrant = quadrant_for_slug(slug)?;
        let classifier = QuadrantClassifier::new(self.store);

        Some(QuadrantView {
            config: crate::config::quadrant_config(quadrant),
            companies: classifier.companies_in_quadrant(quadrant),
        })
    }

    /// The company's business plan run through the simulator.
    pub fn simulate_plan(
        &self,
        company_id: &str,
        overrides: &HashMap<String, f64>,
    ) -> CoreResult<Vec<MonthlyProjection>> {
        self.store.company(company_id)?;
        simulator::simulate(self.store.plan(company_id)?, overrides)
    }

    /// Plan totals for the summary cards.
    pub fn plan_summary(
        &self,
        company_id: &str,
        overrides: &HashMap<String, f64>,
    ) -> CoreResult<PlanSummary> {
        Ok(simulator::summarize(&self.simulate_plan(company_id, overrides)?))
    }
}

// ============================================================================
// TESTS
// ============================================================================
