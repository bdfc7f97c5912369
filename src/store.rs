// 🗄️ Entity Store - Read-only snapshot of all tracked records
// Loaded once per session from a JSON snapshot; handed out by shared
// reference only. Data-integrity findings at load time are warnings,
// never fatal.

use crate::entities::{BusinessPlan, Company, CompanyFinancials, FiscalYear};
use crate::error::{CoreError, CoreResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Wire shape of the versioned snapshot supplied by the external loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub companies: Vec<Company>,

    #[serde(default)]
    pub financials: Vec<CompanyFinancials>,

    #[serde(default)]
    pub plans: Vec<BusinessPlan>,
}

// ============================================================================
// ENTITY STORE
// ============================================================================

pub struct EntityStore {
    companies: Vec<Company>,

    /// Fiscal years per company, kept in snapshot load order
    financials: HashMap<String, Vec<FiscalYear>>,

    /// At most one plan per company; a later snapshot entry wins
    plans: HashMap<String, BusinessPlan>,

    warnings: Vec<String>,
}

impl EntityStore {
    /// Load a snapshot file. I/O and parse failures surface with context;
    /// data-integrity findings inside a well-formed snapshot do not.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read snapshot file: {:?}", path.as_ref()))?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).context("Failed to parse snapshot JSON")?;

        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut warnings = Vec::new();
        let known_ids: HashSet<&str> =
            snapshot.companies.iter().map(|c| c.id.as_str()).collect();

        let mut financials: HashMap<String, Vec<FiscalYear>> = HashMap::new();
        for group in snapshot.financials {
            if !known_ids.contains(group.company_id.as_str()) {
                warnings.push(format!(
                    "financials reference unknown company: {}",
                    group.company_id
                ));
                continue;
            }

            let records = financials.entry(group.company_id.clone()).or_default();
            for fiscal_year in group.fiscal_years {
                // Duplicate (company, year) violates the snapshot invariant;
                // query-time tie-break lets the later record win.
                if records.iter().any(|r| r.year == fiscal_year.year) {
                    warnings.push(format!(
                        "duplicate fiscal year {} for company {}",
                        fiscal_year.year, group.company_id
                    ));
                }
                records.push(fiscal_year);
            }
        }

        let mut plans: HashMap<String, BusinessPlan> = HashMap::new();
        for plan in snapshot.plans {
            if !known_ids.contains(plan.company_id.as_str()) {
                warnings.push(format!(
                    "business plan references unknown company: {}",
                    plan.company_id
                ));
                continue;
            }
            if plans.insert(plan.company_id.clone(), plan).is_some() {
                warnings.push("multiple business plans for one company".to_string());
            }
        }

        EntityStore { companies: snapshot.companies, financials, plans, warnings }
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn company(&self, id: &str) -> CoreResult<&Company> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::NotFound { kind: "company", id: id.to_string() })
    }

    /// Fiscal records in load order; empty for a company with no data.
    /// Callers that must distinguish "unknown company" check `company` first.
    pub fn fiscal_years(&self, company_id: &str) -> &[FiscalYear] {
        self.financials.get(company_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn plan(&self, company_id: &str) -> CoreResult<&BusinessPlan> {
        self.plans
            .get(company_id)
            .ok_or_else(|| CoreError::NotFound { kind: "business plan", id: company_id.to_string() })
    }

    /// Data-integrity findings collected while loading the snapshot.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Category, Quadrant};
    use chrono::NaiveDate;

    fn company(id: &str, name: &str, quadrant: Quadrant) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::A,
            quadrant,
            threat_level: 3,
            brand_color: "#00A5E3".to_string(),
            has_full_data: true,
            last_updated: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        }
    }

    fn fiscal_year(year: &str, revenue: f64, operating_profit: f64) -> FiscalYear {
        FiscalYear {
            year: year.to_string(),
            revenue,
            operating_profit,
            net_income: None,
            operating_margin: None,
            employees: None,
            facilities: None,
            users: None,
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            companies: vec![
                company("litalico", "LITALICO", Quadrant::Q1),
                company("welbe", "Welbe", Quadrant::Q1),
            ],
            financials: vec![CompanyFinancials {
                company_id: "litalico".to_string(),
                fiscal_years: vec![
                    fiscal_year("2023", 20000.0, 2000.0),
                    fiscal_year("2024", 25000.0, 2600.0),
                ],
            }],
            plans: vec![],
        }
    }

    #[test]
    fn test_lookup_known_company() {
        let store = EntityStore::from_snapshot(snapshot());
        assert_eq!(store.company("welbe").unwrap().name, "Welbe");
        assert_eq!(store.companies().len(), 2);
    }

    #[test]
    fn test_unknown_company_is_not_found() {
        let store = EntityStore::from_snapshot(snapshot());
        let err = store.company("nonexistent").unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound { kind: "company", id: "nonexistent".to_string() }
        );
    }

    #[test]
    fn test_fiscal_years_empty_without_data() {
        let store = EntityStore::from_snapshot(snapshot());
        assert_eq!(store.fiscal_years("litalico").len(), 2);
        assert!(store.fiscal_years("welbe").is_empty());
    }

    #[test]
    fn test_clean_snapshot_has_no_warnings() {
        let store = EntityStore::from_snapshot(snapshot());
        assert!(store.warnings().is_empty());
    }

    #[test]
    fn test_duplicate_year_warns_and_keeps_both() {
        let mut snap = snapshot();
        snap.financials[0]
            .fiscal_years
            .push(fiscal_year("2024", 26000.0, 2800.0));

        let store = EntityStore::from_snapshot(snap);
        assert_eq!(store.warnings().len(), 1);
        assert!(store.warnings()[0].contains("duplicate fiscal year 2024"));
        // Both records survive; the resolver tie-break decides which wins
        assert_eq!(store.fiscal_years("litalico").len(), 3);
    }

    #[test]
    fn test_orphan_financials_warn_and_drop() {
        let mut snap = snapshot();
        snap.financials.push(CompanyFinancials {
            company_id: "ghost".to_string(),
            fiscal_years: vec![fiscal_year("2024", 100.0, 10.0)],
        });

        let store = EntityStore::from_snapshot(snap);
        assert_eq!(store.warnings().len(), 1);
        assert!(store.warnings()[0].contains("unknown company: ghost"));
        assert!(store.fiscal_years("ghost").is_empty());
    }

    #[test]
    fn test_missing_plan_is_not_found() {
        let store = EntityStore::from_snapshot(snapshot());
        let err = store.plan("litalico").unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound { kind: "business plan", id: "litalico".to_string() }
        );
    }
}
