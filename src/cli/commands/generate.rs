//! `hangar` default command - Load a parts file and assemble a vehicle

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::catalog::{Catalog, LoadOutcome, DEFAULT_PARTS_FILE};
use crate::core::classify::{Buckets, Category, MatchPolicy, WingSize};
use crate::core::config::GeneratorConfig;
use crate::core::generate::assemble;
use crate::core::select::Selector;
use crate::core::vehicle::Vehicle;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Parts file, one record per line with the category first
    #[arg(default_value = DEFAULT_PARTS_FILE)]
    pub parts_file: PathBuf,

    /// How part records are matched to categories
    #[arg(long = "match", value_name = "POLICY", default_value = "leading-token")]
    pub match_policy: MatchPolicy,
}

impl GenerateArgs {
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new().with_policy(self.match_policy)
    }
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    if !global.quiet {
        println!("parts loaded from: {}", args.parts_file.display());
    }

    let catalog = match Catalog::load(&args.parts_file) {
        LoadOutcome::Loaded(catalog) => catalog,
        LoadOutcome::Unavailable { catalog, reason } => {
            eprintln!(
                "{} Could not open {}: {}",
                style("Warning:").yellow().bold(),
                args.parts_file.display(),
                reason
            );
            catalog
        }
    };

    let config = args.config();
    let buckets = Buckets::classify(&catalog, config.match_policy);
    if global.verbose {
        print_summary(&catalog, &buckets);
    }

    let mut selector = Selector::new(config.seed);
    let vehicle = assemble(&buckets, &mut selector)?;

    print_vehicle(&vehicle, global.format)
}

fn print_summary(catalog: &Catalog, buckets: &Buckets<'_>) {
    eprintln!(
        "{} {} records",
        style("Catalog:").bold(),
        catalog.len()
    );
    for &category in Category::all() {
        let count = buckets.bucket(category).len();
        let label = format!("{:<9}", category);
        if count == 0 && category.is_mandatory() {
            eprintln!("  {} {}", style(label).red(), style(count).red());
        } else {
            eprintln!("  {} {}", label, count);
        }
    }
    eprintln!(
        "  {:<9} large {}, small {}",
        "",
        buckets.wings_of(WingSize::Large).len(),
        buckets.wings_of(WingSize::Small).len()
    );
}

/// Rendered vehicle and the stream it belongs on
#[derive(Debug, PartialEq, Eq)]
enum Rendered {
    Stdout(String),
    Stderr(String),
}

fn render_vehicle(vehicle: &Vehicle, format: OutputFormat) -> Result<Rendered> {
    let rendered = match format {
        OutputFormat::Json => {
            Rendered::Stdout(serde_json::to_string_pretty(vehicle).into_diagnostic()?)
        }
        OutputFormat::Styled => Rendered::Stderr(vehicle.render_styled()),
        OutputFormat::Auto | OutputFormat::Text => Rendered::Stderr(format!("{}\n", vehicle)),
    };
    Ok(rendered)
}

fn print_vehicle(vehicle: &Vehicle, format: OutputFormat) -> Result<()> {
    match render_vehicle(vehicle, format)? {
        Rendered::Stdout(json) => println!("{}", json),
        Rendered::Stderr(text) => eprint!("{}", text),
    }
    Ok(())
}
