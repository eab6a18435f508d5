// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docsearch::utils::logging::{
    format_error, format_heading, format_info, format_success, format_warning,
};
use docsearch::{
    Config, ExportFormat, IndexExporter, IndexLoader, IndexScanner, IndexValidator,
    OperationTimer, SearchIndex, Searcher, ValidationStatus, Validator,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Inspect, validate and query generated documentation search indexes", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Search index to operate on; overrides `index.path` from the config
    #[arg(short, long, value_name = "FILE", env = "DOCSEARCH_INDEX")]
    index: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document, term and object counts
    Stats,

    /// Check index invariants
    Validate {
        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,
    },

    /// Search objects and page text the way the docs site does
    Search {
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,

        /// Print hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the pages listed for a single index token
    Lookup {
        token: String,

        /// Use title terms instead of body terms
        #[arg(long)]
        titles: bool,
    },

    /// List documented API objects
    Objects {
        /// Only objects whose full name starts with this prefix
        #[arg(short, long)]
        prefix: Option<String>,

        /// Only objects of this kind, e.g. `py:method` or `class`
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Write the index back out
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long)]
        format: Option<String>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Find and check every search index under a build directory
    Discover { root: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docsearch::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    if let Some(index) = cli.index {
        config.index.path = index;
    }

    match cli.command {
        Commands::Stats => cmd_stats(&config).await?,
        Commands::Validate { strict } => cmd_validate(&config, strict).await?,
        Commands::Search { query, limit, json } => {
            cmd_search(&config, &query, limit, json).await?
        }
        Commands::Lookup { token, titles } => cmd_lookup(&config, &token, titles).await?,
        Commands::Objects { prefix, kind } => {
            cmd_objects(&config, prefix.as_deref(), kind.as_deref()).await?
        }
        Commands::Export {
            output,
            format,
            pretty,
        } => cmd_export(&config, output, format, pretty).await?,
        Commands::Discover { root } => cmd_discover(&config, &root).await?,
    }

    Ok(())
}

async fn load_index(path: &Path) -> Result<SearchIndex> {
    Validator::validate_index_file(path)?;

    let timer = OperationTimer::new("load index");
    let index = IndexLoader::load(path)
        .await
        .with_context(|| format!("Failed to load search index {}", path.display()))?;
    timer.warn_if_slow(Duration::from_secs(2));
    timer.finish();

    Ok(index)
}

async fn cmd_stats(config: &Config) -> Result<()> {
    let index = load_index(&config.index.path).await?;

    println!("{}", format_heading(&config.index.path.display().to_string()));
    println!("{}", index.stats().format());

    let kinds = index.object_kinds();
    if !kinds.is_empty() {
        println!("\nObject kinds:");
        for kind in kinds {
            let count = index.objects().filter(|o| o.kind_code == kind.code).count();
            println!("  {:>3}  {:<20} {}", kind.code, kind.qualified, count);
        }
    }

    Ok(())
}

async fn cmd_validate(config: &Config, strict: bool) -> Result<()> {
    let index = load_index(&config.index.path).await?;
    let strict = strict || config.index.strict;

    let report = IndexValidator::new().validate(&index);
    print!("{}", report.format());

    let summary = format!(
        "{} errors, {} warnings",
        report.errors().count(),
        report.warnings().count()
    );

    match report.status {
        ValidationStatus::Valid => println!("{}", format_success("Index is valid")),
        ValidationStatus::Warnings => println!("{}", format_warning(&summary)),
        ValidationStatus::Invalid => println!("{}", format_error(&summary)),
    }

    if !report.passes(strict) {
        return Err(anyhow::anyhow!(
            "Validation failed for {}",
            config.index.path.display()
        ));
    }

    Ok(())
}

async fn cmd_search(config: &Config, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let limit = limit.unwrap_or(config.search.default_limit);
    Validator::validate_limit(limit)?;

    let index = load_index(&config.index.path).await?;

    info!("Searching for: {}", query);
    let timer = OperationTimer::new("search");
    let hits = Searcher::new(&index, &config.search).search(query, limit);
    timer.finish_with_count(hits.len());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&hits).context("Failed to serialize hits")?
        );
        return Ok(());
    }

    if hits.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("Found {} result(s)\n", hits.len());
    println!("{}", "=".repeat(80));

    for (idx, hit) in hits.iter().enumerate() {
        println!(
            "\n{}. {}",
            idx + 1,
            Validator::truncate_text(&hit.format_summary(), 200)
        );
    }

    println!("\n{}", "=".repeat(80));
    Ok(())
}

async fn cmd_lookup(config: &Config, token: &str, titles: bool) -> Result<()> {
    let index = load_index(&config.index.path).await?;

    let docs = if titles {
        index.lookup_title_term(token)
    } else {
        index.lookup_term(token)
    };

    if docs.is_empty() {
        println!("{}", format_info(&format!("No pages contain \"{}\"", token)));
        return Ok(());
    }

    for doc in docs.into_iter().filter_map(|i| index.document(i)) {
        println!("{:>4}  {:<50} {}", doc.index, doc.html_path(), doc.display_title());
    }

    Ok(())
}

async fn cmd_objects(config: &Config, prefix: Option<&str>, kind: Option<&str>) -> Result<()> {
    let index = load_index(&config.index.path).await?;
    let mut shown = 0;

    for entry in index.objects() {
        let fullname = entry.fullname();
        if let Some(prefix) = prefix
            && !fullname.starts_with(prefix)
        {
            continue;
        }

        let object_kind = index.object_kind(entry.kind_code);
        if let Some(filter) = kind
            && !object_kind.as_ref().is_some_and(|k| k.matches(filter))
        {
            continue;
        }

        let docname = index
            .document(entry.doc)
            .map(|d| d.docname)
            .unwrap_or_else(|| format!("<missing document {}>", entry.doc));

        println!(
            "{:<60} {:<14} {:<11} {}.html#{}",
            fullname,
            object_kind
                .as_ref()
                .map(|k| k.qualified.as_str())
                .unwrap_or("?"),
            entry.priority().as_str(),
            docname,
            entry.resolve_anchor(object_kind.as_ref())
        );
        shown += 1;
    }

    info!("{} objects listed", shown);
    Ok(())
}

async fn cmd_export(
    config: &Config,
    output: Option<PathBuf>,
    format: Option<String>,
    pretty: bool,
) -> Result<()> {
    let index = load_index(&config.index.path).await?;

    let format: ExportFormat = format
        .as_deref()
        .unwrap_or(&config.export.format)
        .parse()?;
    let output = output.unwrap_or_else(|| config.export.output_dir.clone());

    let exporter = IndexExporter::new(&output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    let manifest = exporter.export(&index, format, pretty || config.export.pretty)?;

    println!(
        "{}",
        format_success(&format!(
            "Wrote {} ({} documents, sha256 {})",
            output.join(&manifest.file).display(),
            manifest.documents,
            manifest.sha256
        ))
    );

    Ok(())
}

async fn cmd_discover(config: &Config, root: &Path) -> Result<()> {
    let scanner = IndexScanner::new(config.discovery.clone());
    let found = scanner.scan(root).context("Failed to scan directory")?;

    if found.is_empty() {
        println!("{}", format_info("No search indexes found"));
        return Ok(());
    }

    let validator = IndexValidator::new();

    for discovered in found {
        match IndexLoader::load(&discovered.path).await {
            Ok(index) => {
                let report = validator.validate(&index);
                let line = format!(
                    "{} ({} documents, {} bytes): {:?}",
                    discovered.relative_path,
                    index.len(),
                    discovered.size,
                    report.status
                );
                match report.status {
                    ValidationStatus::Valid => println!("{}", format_success(&line)),
                    ValidationStatus::Warnings => println!("{}", format_warning(&line)),
                    ValidationStatus::Invalid => println!("{}", format_error(&line)),
                }
            }
            Err(e) => {
                println!(
                    "{}",
                    format_error(&format!("{}: {}", discovered.relative_path, e))
                );
            }
        }
    }

    Ok(())
}
