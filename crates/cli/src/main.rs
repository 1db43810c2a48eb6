use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contract_analysis::{
    AnalysisOptions, ContractAnalyzer, SemanticScanConfig, DEFAULT_THRESHOLD,
};
use contract_retrieval::{KeywordIndex, PlainTextFile, TextSource};
use contract_segmenter::segment;
use contract_taxonomy::RiskTaxonomy;
use std::fs;
use std::path::{Path, PathBuf};

mod report;

#[derive(Parser)]
#[command(name = "contract-risk")]
#[command(about = "Score contract text against a weighted clause-risk taxonomy", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a contract document and write a risk report
    Analyze(AnalyzeArgs),

    /// Print the active risk taxonomy
    Taxonomy(TaxonomyArgs),
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Contract document (plain UTF-8 text)
    path: PathBuf,

    /// Weight threshold at which signing is discouraged
    #[arg(long, short = 't', default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Custom risk taxonomy (TOML); defaults to the built-in taxonomy
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Report output path
    #[arg(long, default_value = "contract_risk_report.txt")]
    out: PathBuf,

    /// Skip the semantic retrieval pass (lexical matching only)
    #[arg(long)]
    lexical_only: bool,

    /// Replace the negative markers that reject a semantic answer
    /// (comma-separated)
    #[arg(long = "negative-marker", value_delimiter = ',')]
    negative_markers: Vec<String>,

    /// Output the report payload as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TaxonomyArgs {
    /// Custom risk taxonomy (TOML); defaults to the built-in taxonomy
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Output TOML (round-trips through `analyze --taxonomy`)
    #[arg(long)]
    toml: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for JSON consumers, as with any machine output.
    let json_output = match &cli.command {
        Commands::Analyze(args) => args.json,
        Commands::Taxonomy(args) => args.json || args.toml,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Analyze(args) => run_analyze(args).await,
        Commands::Taxonomy(args) => run_taxonomy(args),
    }
}

async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let taxonomy = load_taxonomy(args.taxonomy.as_deref())?;

    let mut semantic = SemanticScanConfig::default();
    if !args.negative_markers.is_empty() {
        semantic.negative_markers = args.negative_markers.clone();
    }
    let analyzer = ContractAnalyzer::new(
        taxonomy,
        AnalysisOptions {
            threshold: args.threshold,
            semantic,
        },
    );

    let source = PlainTextFile::new(&args.path);
    let text = source
        .extract()
        .with_context(|| format!("Failed to extract text from {}", args.path.display()))?;

    let report = if args.lexical_only {
        analyzer.analyze_lexical(&text)
    } else {
        let paragraphs = segment(&text);
        let index = KeywordIndex::from_paragraphs(&paragraphs);
        analyzer.analyze_paragraphs(&paragraphs, &index).await
    };

    let rendered = report::render_text_report(&report);
    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.out, rendered)
        .with_context(|| format!("Failed to write report to {}", args.out.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!(
            "Total risk weight: {} (threshold {})",
            report.score.total_weight, report.score.threshold
        );
        eprintln!(
            "Recommendation: {}",
            report::recommendation_label(report.score.recommendation)
        );
        eprintln!("Report written to {}", args.out.display());
    }

    Ok(())
}

fn run_taxonomy(args: TaxonomyArgs) -> Result<()> {
    let taxonomy = load_taxonomy(args.taxonomy.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&taxonomy)?);
    } else if args.toml {
        print!("{}", taxonomy.to_toml()?);
    } else {
        for factor in &taxonomy.factors {
            println!("{} (weight {})", factor.name, factor.weight);
            println!("    {}", factor.description);
            for subtype in &factor.subtypes {
                println!("  - {} (weight {})", subtype.name, subtype.weight);
                println!("      {}", subtype.description);
            }
        }
    }

    Ok(())
}

fn load_taxonomy(path: Option<&Path>) -> Result<RiskTaxonomy> {
    match path {
        Some(path) => RiskTaxonomy::from_toml_file(path)
            .with_context(|| format!("Failed to load taxonomy from {}", path.display())),
        None => Ok(RiskTaxonomy::builtin().clone()),
    }
}
