// 📈 Fiscal Resolver - "latest by year, else omit"
// All latest-record selection goes through one utility so the tie-break
// rule (later load order wins a duplicate year label) is uniform.

use crate::entities::{Company, FiscalYear};
use crate::error::CoreResult;
use crate::store::EntityStore;

// ============================================================================
// SHARED SELECTION UTILITY
// ============================================================================

/// Record with the maximum year label, or None when there are no records.
/// `max_by` keeps the last of equal elements, which is exactly the
/// "later load order wins" tie-break for a duplicate year.
pub fn latest_by_year(records: &[FiscalYear]) -> Option<&FiscalYear> {
    records.iter().max_by(|a, b| a.year.cmp(&b.year))
}

/// Year-over-year growth in percent. No comparison when the previous
/// value is zero.
pub fn calc_yoy(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

// ============================================================================
// FISCAL RESOLVER
// ============================================================================

pub struct FiscalResolver<'a> {
    store: &'a EntityStore,
}

impl<'a> FiscalResolver<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        FiscalResolver { store }
    }

    /// Latest fiscal year for a known company; None when the company has
    /// no fiscal records, NotFound when the identifier itself is unknown.
    pub fn latest_fiscal_year(&self, company_id: &str) -> CoreResult<Option<&'a FiscalYear>> {
        self.store.company(company_id)?;
        Ok(latest_by_year(self.store.fiscal_years(company_id)))
    }

    /// Every company with at least one fiscal record, joined with its
    /// latest record and ordered by display name. Dataless companies are
    /// silently omitted.
    pub fn all_financials(&self) -> Vec<(&'a Company, &'a FiscalYear)> {
        let mut joined: Vec<(&Company, &FiscalYear)> = self
            .store
            .companies()
            .iter()
            .filter_map(|company| {
                latest_by_year(self.store.fiscal_years(&company.id))
                    .map(|latest| (company, latest))
            })
            .collect();

        joined.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        joined
    }

    /// Full ordered-by-year series for comparison charts. Empty (not an
    /// error) when the company has no records.
    pub fn series(&self, company_id: &str) -> CoreResult<Vec<&'a FiscalYear>> {
        self.store.company(company_id)?;

        let mut records: Vec<&FiscalYear> = self.store.fiscal_years(company_id).iter().collect();
        // Stable sort: a duplicate year keeps load order, so the later
        // record still comes last
        records.sort_by(|a, b| a.year.cmp(&b.year));
        Ok(records)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Category, CompanyFinancials, Quadrant};
    use crate::error::CoreError;
    use crate::store::Snapshot;
    use chrono::NaiveDate;

    fn company(id: &str, name: &str) -> Company {
        Company {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::A,
            quadrant: Quadrant::Q1,
            threat_level: 3,
            brand_color: "#00A5E3".to_string(),
            has_full_data: true,
            last_updated: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        }
    }

    fn fiscal_year(year: &str, revenue: f64) -> FiscalYear {
        FiscalYear {
            year: year.to_string(),
            revenue,
            operating_profit: revenue * 0.1,
            net_income: None,
            operating_margin: None,
            employees: None,
            facilities: None,
            users: None,
        }
    }

    fn store() -> EntityStore {
        EntityStore::from_snapshot(Snapshot {
            companies: vec![
                company("welbe", "Welbe"),
                company("litalico", "LITALICO"),
                company("kaien", "Kaien"),
            ],
            financials: vec![
                CompanyFinancials {
                    company_id: "litalico".to_string(),
                    fiscal_years: vec![
                        fiscal_year("2022", 18000.0),
                        fiscal_year("2024", 25000.0),
                        fiscal_year("2023", 20000.0),
                    ],
                },
                CompanyFinancials {
                    company_id: "welbe".to_string(),
                    fiscal_years: vec![fiscal_year("2024", 9000.0)],
                },
            ],
            plans: vec![],
        })
    }

    #[test]
    fn test_latest_is_maximum_year() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        let latest = resolver.latest_fiscal_year("litalico").unwrap().unwrap();
        assert_eq!(latest.year, "2024");
        assert_eq!(latest.revenue, 25000.0);
    }

    #[test]
    fn test_known_company_without_records_is_none() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        assert!(resolver.latest_fiscal_year("kaien").unwrap().is_none());
    }

    #[test]
    fn test_unknown_company_is_not_found() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        let err = resolver.latest_fiscal_year("unknown-id").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { kind: "company", .. }));
    }

    #[test]
    fn test_duplicate_year_later_record_wins() {
        let store = EntityStore::from_snapshot(Snapshot {
            companies: vec![company("welbe", "Welbe")],
            financials: vec![CompanyFinancials {
                company_id: "welbe".to_string(),
                fiscal_years: vec![fiscal_year("2024", 9000.0), fiscal_year("2024", 9500.0)],
            }],
            plans: vec![],
        });
        assert!(!store.warnings().is_empty());

        let resolver = FiscalResolver::new(&store);
        let latest = resolver.latest_fiscal_year("welbe").unwrap().unwrap();
        assert_eq!(latest.revenue, 9500.0);
    }

    #[test]
    fn test_all_financials_sorted_and_omits_dataless() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        let all = resolver.all_financials();
        // kaien has no records and is omitted; order is by display name
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0.name, "LITALICO");
        assert_eq!(all[1].0.name, "Welbe");
        assert_eq!(all[0].1.year, "2024");
    }

    #[test]
    fn test_series_ordered_by_year() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        let series = resolver.series("litalico").unwrap();
        let years: Vec<&str> = series.iter().map(|f| f.year.as_str()).collect();
        assert_eq!(years, vec!["2022", "2023", "2024"]);
    }

    #[test]
    fn test_series_empty_without_records() {
        let store = store();
        let resolver = FiscalResolver::new(&store);

        assert!(resolver.series("kaien").unwrap().is_empty());
        assert!(resolver.series("ghost").is_err());
    }

    #[test]
    fn test_calc_yoy() {
        assert!((calc_yoy(110.0, 100.0).unwrap() - 10.0).abs() < 1e-9);
        assert!((calc_yoy(90.0, 100.0).unwrap() + 10.0).abs() < 1e-9);
        assert_eq!(calc_yoy(50.0, 0.0), None);
    }
}
