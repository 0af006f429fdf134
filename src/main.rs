use clap::{Parser, Subcommand};
use simple_posts::{config, output, scan};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "simple-posts")]
#[command(about = "Ingest a directory of blog posts")]
#[command(long_about = "\
Ingest a directory of blog posts

Your filesystem is the data source. Every directory under posts/ holding
both a metadata file and a content file is a post; its path is its slug.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── meta/
  │   └── links.yaml               # Site links (optional)
  └── posts/
      ├── hello-world/             # slug: hello-world
      │   ├── meta.yaml            # title, created, modified, tags, ...
      │   └── content.html         # body
      └── 2023/
          └── recap/               # slug: 2023/recap
              ├── meta.yaml
              └── content.html

Publication order:
  order: top      first
  (default)       newest created first
  order: last     at the end
  draft: true     skipped without validation

Run 'simple-posts gen-config' to generate a documented config.toml.

Set RUST_LOG (e.g. RUST_LOG=simple_posts=debug) for more detail.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-posts-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Validate content directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_posts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    install_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            let manifest = scan::scan_with_config(&cli.source, site_config)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            debug!(path = %manifest_path.display(), "wrote manifest");
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            init_thread_pool(&site_config.processing);
            let manifest = scan::scan_with_config(&cli.source, site_config)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    debug!(threads, "initializing loader pool");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
