// 📊 Fiscal Year Records - Annual financial snapshots per company
// Year labels are totally ordered strings ("2022", "2023", ...), so the
// latest record is simply the maximum label.

use serde::{Deserialize, Serialize};

/// One company's financial snapshot for a single fiscal year.
/// Amounts are JPY millions; named KPIs may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalYear {
    /// Fiscal-year label, comparable as a plain string (e.g. "2024")
    pub year: String,

    pub revenue: f64,
    pub operating_profit: f64,

    #[serde(default)]
    pub net_income: Option<f64>,

    /// Operating margin in percent; derived from revenue when absent
    #[serde(default)]
    pub operating_margin: Option<f64>,

    #[serde(default)]
    pub employees: Option<u32>,

    #[serde(default)]
    pub facilities: Option<u32>,

    #[serde(default)]
    pub users: Option<u32>,
}

impl FiscalYear {
    /// Operating margin in percent, computed when the KPI was not reported.
    pub fn margin(&self) -> Option<f64> {
        self.operating_margin.or_else(|| {
            if self.revenue > 0.0 {
                Some(self.operating_profit / self.revenue * 100.0)
            } else {
                None
            }
        })
    }
}

/// Snapshot grouping: all fiscal years reported by one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyFinancials {
    pub company_id: String,
    pub fiscal_years: Vec<FiscalYear>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fy(year: &str, revenue: f64, operating_profit: f64) -> FiscalYear {
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

    #[test]
    fn test_margin_derived_from_revenue() {
        let record = fy("2024", 20000.0, 3000.0);
        assert_eq!(record.margin(), Some(15.0));
    }

    #[test]
    fn test_margin_prefers_reported_kpi() {
        let mut record = fy("2024", 20000.0, 3000.0);
        record.operating_margin = Some(14.2);
        assert_eq!(record.margin(), Some(14.2));
    }

    #[test]
    fn test_margin_absent_on_zero_revenue() {
        let record = fy("2024", 0.0, -500.0);
        assert_eq!(record.margin(), None);
    }
}
