use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use spaguide_catalog::{facets, query, Catalog};
use spaguide_core::{QueryParams, SortKey};

#[derive(Debug, Parser)]
#[command(name = "spaguide-cli")]
#[command(about = "Bali Spa Guide operator toolkit")]
struct Cli {
    /// Path to the spa catalog file.
    #[arg(long, global = true, default_value = "./config/spas.yaml")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load and validate the catalog file.
    Validate,
    /// Run a listing query against the catalog.
    Query(QueryArgs),
    /// Print the distinct filter options.
    Facets {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct QueryArgs {
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    treatment: Option<String>,
    #[arg(long)]
    budget: Option<u8>,
    #[arg(long)]
    search: Option<String>,
    /// One of rating_desc, rating_asc, budget_asc, budget_desc.
    #[arg(long, default_value = "rating_desc")]
    sort: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 20)]
    page_size: u32,
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog_file = spaguide_core::load_catalog_file(&cli.catalog)
        .with_context(|| format!("loading catalog from {}", cli.catalog.display()))?;
    let catalog = Catalog::from(catalog_file);

    match cli.command {
        Commands::Validate => {
            let options = facets(&catalog);
            println!("catalog OK: {} spas", catalog.len());
            println!(
                "  {} locations, {} treatments, {} budget tiers",
                options.locations.len(),
                options.treatments.len(),
                options.budgets.len()
            );
        }
        Commands::Query(args) => run_query(&catalog, args)?,
        Commands::Facets { json } => {
            let options = facets(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                println!("locations:  {}", options.locations.join(", "));
                println!("treatments: {}", options.treatments.join(", "));
                let tiers: Vec<String> =
                    options.budgets.iter().map(ToString::to_string).collect();
                println!("budgets:    {}", tiers.join(", "));
            }
        }
    }

    Ok(())
}

fn build_params(args: &QueryArgs) -> QueryParams {
    QueryParams {
        page: args.page.max(1),
        page_size: args.page_size.max(1),
        location: args.location.clone(),
        treatment: args.treatment.clone(),
        budget: args.budget.filter(|&b| b > 0),
        search: args.search.clone(),
        sort: SortKey::parse(&args.sort),
    }
}

fn run_query(catalog: &Catalog, args: QueryArgs) -> anyhow::Result<()> {
    let params = build_params(&args);
    let page = query(catalog, &params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "page {}/{}: showing {} of {} spas",
        page.page,
        page.page_count,
        page.items.len(),
        page.total
    );
    for spa in &page.items {
        let rating = spa
            .rating
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        let budget = spa
            .budget
            .map_or_else(|| "-".to_string(), |b| "$".repeat(usize::from(b)));
        let location = spa.location.as_deref().unwrap_or("-");
        println!(
            "{:>4}  {:<4} {:<6} {:<12} {}",
            spa.id, rating, budget, location, spa.title
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_params_maps_cli_args() {
        let args = QueryArgs {
            location: Some("Ubud".to_string()),
            treatment: None,
            budget: Some(0),
            search: Some("spa".to_string()),
            sort: "budget_asc".to_string(),
            page: 0,
            page_size: 10,
            json: false,
        };
        let params = build_params(&args);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert_eq!(params.location.as_deref(), Some("Ubud"));
        assert_eq!(params.budget, None);
        assert_eq!(params.sort, SortKey::BudgetAsc);
    }

    #[test]
    fn build_params_falls_back_on_unknown_sort() {
        let args = QueryArgs {
            location: None,
            treatment: None,
            budget: None,
            search: None,
            sort: "newest".to_string(),
            page: 1,
            page_size: 20,
            json: false,
        };
        assert_eq!(build_params(&args).sort, SortKey::RatingDesc);
    }
}
