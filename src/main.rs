use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tagsim_core::{RelatedConfig, RelatedSelector, DEFAULT_TOP_N};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find the most tag-similar posts for every post in a corpus
#[derive(Parser, Debug)]
#[command(name = "tagsim")]
#[command(about = "Related posts by shared tag count", long_about = None)]
struct Args {
    /// Path to the input posts document
    #[arg(short, long, default_value = "../posts.json")]
    input: PathBuf,

    /// Path to write the related posts document
    #[arg(short, long, default_value = "../related_posts_rust.json")]
    output: PathBuf,

    /// Related posts per subject
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Worker threads for the selection phase (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Process posts on the calling thread only
    #[arg(long)]
    sequential: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting tagsim v{}", env!("CARGO_PKG_VERSION"));
    info!("Input: {:?}", args.input);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let posts = tagsim_io::read_posts(&args.input)
        .with_context(|| format!("failed to read posts from {:?}", args.input))?;
    info!("Loaded {} posts", posts.len());

    let config = RelatedConfig {
        top_n: args.top_n,
        parallel: !args.sequential,
    };

    let started = Instant::now();
    let selector = RelatedSelector::new(&posts, config)?;
    let related = selector.run();
    let elapsed = started.elapsed();

    info!("Indexed {} distinct tags", selector.index().len());
    info!("Processing time (w/o IO): {}ms", elapsed.as_secs_f64() * 1000.0);

    tagsim_io::write_related(&args.output, &related)
        .with_context(|| format!("failed to write results to {:?}", args.output))?;
    info!("Wrote {} records to {:?}", related.len(), args.output);

    Ok(())
}
