// Snapshot inspector: load a snapshot file and print the dashboard's
// core read views. The library is the real surface; this binary exists
// for eyeballing a snapshot before it ships.

use anyhow::Result;
use std::env;

use market_lens::{
    format::{format_amount, format_percent, format_yoy},
    quadrant_config, calc_yoy, Dashboard, EntityStore, FiscalResolver, Quadrant,
    QuadrantClassifier,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: market-lens <snapshot.json>");
        std::process::exit(2);
    };

    let store = EntityStore::from_file(path)?;

    println!("📊 Market Lens - snapshot overview");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Companies tracked: {}", store.companies().len());

    for warning in store.warnings() {
        println!("⚠ {}", warning);
    }

    // Quadrant breakdown
    let classifier = QuadrantClassifier::new(&store);
    println!("\n🧭 Quadrants");
    for quadrant in Quadrant::ALL {
        let config = quadrant_config(quadrant);
        let members = classifier.companies_in_quadrant(quadrant);
        println!("  {} {} ({} companies)", quadrant.as_str(), config.label, members.len());
    }

    // Latest financials per company
    let dashboard = Dashboard::new(&store);
    println!("\n📈 Latest financials");
    let resolver = FiscalResolver::new(&store);
    for (company, latest) in dashboard.latest_financials() {
        let previous_revenue = resolver
            .series(&company.id)?
            .iter()
            .rev()
            .nth(1)
            .map(|f| f.revenue);
        let yoy = previous_revenue.and_then(|p| calc_yoy(latest.revenue, p));

        println!(
            "  {:<20} FY{}  revenue {:>8}  op profit {:>8}  margin {:>6}  yoy {}",
            company.name,
            latest.year,
            format_amount(latest.revenue),
            format_amount(latest.operating_profit),
            latest.margin().map(format_percent).unwrap_or_else(|| "-".to_string()),
            format_yoy(yoy),
        );
    }

    Ok(())
}
