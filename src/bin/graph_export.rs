use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use graphql_vis::graph::{self, analysis};
use graphql_vis::{ExportFormat, IntrospectionDocument, VisConfig};

#[derive(Parser)]
#[command(name = "graph-export")]
#[command(about = "Build a force-graph model from a GraphQL introspection document")]
struct Cli {
    /// Path to the introspection JSON document
    schema: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: json or dot (overrides config)
    #[arg(short, long)]
    format: Option<String>,

    /// Materialize field nodes (overrides config)
    #[arg(long)]
    show_fields: bool,

    /// Materialize interface nodes (overrides config)
    #[arg(long)]
    show_interfaces: bool,

    /// Path to a graphvis.toml config file
    #[arg(short, long)]
    config: Option<String>,

    /// Print reference statistics for the most-referenced types
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = VisConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    let mut options = config.build_options();
    options.show_fields |= cli.show_fields;
    options.show_interfaces |= cli.show_interfaces;

    let format = match cli.format.as_deref() {
        Some("json") => ExportFormat::Json,
        Some("dot") => ExportFormat::Dot,
        Some(other) => anyhow::bail!("unknown format: {other} (expected json or dot)"),
        None => config.export.format,
    };

    let doc = IntrospectionDocument::from_path(&cli.schema)
        .with_context(|| format!("reading {}", cli.schema.display()))?;

    let graph = graph::build(&doc, &options, &config.group_table())?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        hash = %graph.schema_hash,
        "graph built"
    );

    if cli.stats {
        let stats = analysis::ReferenceStats::compute(&graph);
        eprintln!("Most referenced types:");
        for (id, count) in stats.most_referenced(10) {
            eprintln!("  {count:>4}  {id}");
        }
    }

    let rendered = match format {
        ExportFormat::Json => {
            if config.export.pretty {
                graph.to_json()?
            } else {
                serde_json::to_string(&graph)?
            }
        }
        ExportFormat::Dot => analysis::to_dot(&graph),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "graph exported");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
