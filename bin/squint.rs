use anyhow::Result;
use clap::Parser;
use std::io::Read;
use tracing::debug;

#[derive(Parser)]
#[command(name = "squint")]
#[command(version = squint::VERSION)]
#[command(about = "Parse a free-text search query into a structured query tree", long_about = None)]
struct Args {
    /// Query to parse; read from stdin when omitted
    query: Option<String>,

    /// Print the tree as a single line instead of indented JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let input = match args.query {
        Some(query) => query,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let ast = squint::parse(input.trim_end_matches(['\r', '\n']));
    debug!(nodes = ast.len(), "parsed query");

    let rendered = if args.compact {
        ast.to_json()?
    } else {
        ast.to_json_pretty()?
    };
    println!("{rendered}");

    Ok(())
}
