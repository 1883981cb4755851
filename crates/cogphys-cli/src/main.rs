mod report;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use cogphys_core::{Catalog, Category, MetaLawSynthesis, PredictParams};

#[derive(Parser)]
#[command(name = "cogphys", about = "Cognitive physics: S x D x M emergence predictions")]
struct Cli {
    /// TOML catalog replacing the built-in example networks
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the example networks through the model and report agreement
    Demo {
        /// Also print full reports for Human Brain vs Simple MLP
        #[arg(long)]
        detailed: bool,
    },

    /// Predict cognitive emergence for one (S, D, M) triple
    Predict {
        /// Structural differentiation S (default 0.5)
        #[arg(short = 's', long = "structure", alias = "s")]
        s: Option<f64>,

        /// Causal density D (default 0.3)
        #[arg(short = 'd', long = "density", alias = "d")]
        d: Option<f64>,

        /// Memory persistence M (default 0.05)
        #[arg(short = 'm', long = "memory", alias = "m")]
        m: Option<f64>,

        /// Take S, D and M from a catalog network; explicit flags still win
        #[arg(long)]
        network: Option<String>,

        /// Print the prediction record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the example networks
    Networks {
        /// Only list one category (biological, artificial, social, infrastructure, ecosystem)
        #[arg(long)]
        category: Option<String>,
    },

    /// Build a random network, run it, and predict from its live state
    Simulate(simulate::SimulateArgs),
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let path = cli.catalog.clone().or_else(|| {
        std::env::var("COGPHYS_CATALOG")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    });

    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_toml_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::info!(
        "loaded {} networks from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Demo { detailed } => cmd_demo(&cli, *detailed),
        Commands::Predict {
            s,
            d,
            m,
            network,
            json,
        } => cmd_predict(&cli, *s, *d, *m, network.as_deref(), *json),
        Commands::Networks { category } => cmd_networks(&cli, category.as_deref()),
        Commands::Simulate(args) => simulate::run(args),
    }
}

fn parse_category(name: &str) -> Result<Category> {
    match Category::parse(name) {
        Some(category) => Ok(category),
        None => bail!(
            "unknown category '{name}' (expected one of: biological, artificial, social, infrastructure, ecosystem)"
        ),
    }
}

fn cmd_demo(cli: &Cli, detailed: bool) -> Result<()> {
    let catalog = load_catalog(cli)?;
    let mut synthesis = MetaLawSynthesis::new();

    println!("Structural-Dynamical Equivalence Law:");
    println!("Phi(N) = 1  iff  S x D x M >= C_critical(class)");

    let mut total_correct = 0;
    let mut total_networks = 0;

    for (category, title) in [
        (Category::Biological, "Biological Networks"),
        (Category::Artificial, "Artificial Networks"),
        (Category::Social, "Social Networks"),
    ] {
        println!("\n{}", report::section(title));

        let networks = catalog.by_category(category);
        let mut correct = 0;
        for network in &networks {
            let state = synthesis.predict(network.params());
            if state.is_cognitive() == network.expected_cognitive {
                correct += 1;
            }
            println!("{}", report::network_line(network, &state));
        }
        println!("\n{}", report::accuracy(correct, networks.len()));

        total_correct += correct;
        total_networks += networks.len();
    }

    let summary = synthesis.get_summary();
    println!(
        "\n{}",
        report::summary(&summary, total_correct, total_networks)
    );
    println!("\n{}", report::class_counts(&synthesis.class_counts()));
    println!("\n{}", report::core_equation());

    if detailed {
        let mut synthesis = MetaLawSynthesis::new();
        println!("\n{}", report::rule('=', 70));
        println!("  DETAILED EXAMPLE: Human Brain vs Simple MLP");
        println!("{}", report::rule('=', 70));

        println!("\nHuman Brain:");
        let state = synthesis.predict(PredictParams::new(0.85, 0.70, 0.60));
        println!("{}", report::prediction(&state));

        println!("\nSimple MLP:");
        let state = synthesis.predict(PredictParams::new(0.20, 0.30, 0.01));
        println!("{}", report::prediction(&state));
    }

    Ok(())
}

fn cmd_predict(
    cli: &Cli,
    s: Option<f64>,
    d: Option<f64>,
    m: Option<f64>,
    network: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut params = PredictParams {
        s,
        d,
        m,
        ..PredictParams::default()
    };

    if let Some(name) = network {
        let catalog = load_catalog(cli)?;
        let Some(example) = catalog.find(name) else {
            bail!("no network named '{name}' in catalog");
        };
        params.structural_differentiation = Some(example.s);
        params.causal_density = Some(example.d);
        params.memory_persistence = Some(example.m);
    }

    let mut synthesis = MetaLawSynthesis::new();
    let state = synthesis.predict(params);

    if json {
        let out = serde_json::to_string_pretty(&state).context("failed to serialize prediction")?;
        println!("{out}");
    } else {
        println!("{}", report::prediction(&state));
    }
    Ok(())
}

fn cmd_networks(cli: &Cli, category: Option<&str>) -> Result<()> {
    let catalog = load_catalog(cli)?;

    let categories = match category {
        Some(name) => vec![parse_category(name)?],
        None => Category::ALL.to_vec(),
    };

    for category in categories {
        let networks = catalog.by_category(category);
        println!(
            "\n{} ({} networks):",
            category.as_str().to_uppercase(),
            networks.len()
        );
        println!("{}", report::rule('-', 40));
        for net in networks {
            let mark = if net.expected_cognitive { "+" } else { "-" };
            println!("  {mark} {}", net.name);
            println!("     S={:.2}, D={:.2}, M={:.2}", net.s, net.d, net.m);
            println!("     Capacity: {:.4}", net.capacity());
        }
    }

    println!("\nSUMMARY:");
    println!("  Total networks:         {}", catalog.len());
    println!("  Expected cognitive:     {}", catalog.cognitive().len());
    println!("  Expected non-cognitive: {}", catalog.non_cognitive().len());
    Ok(())
}
