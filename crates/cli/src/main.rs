mod commands;
mod project;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use portfolio_kit_core::Locale;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-kit")]
#[command(version, about = "Feeds, sitemap and routes for a bilingual portfolio blog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write RSS, Atom and JSON feeds plus sitemap.xml
    Build {
        /// Path to site directory
        path: PathBuf,

        /// Output directory (defaults to feeds.output in site.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the sitemap, legacy redirects and built files
    Serve {
        /// Path to site directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Validate site.toml and content
    Validate {
        /// Path to site directory
        path: PathBuf,
    },

    /// Print route parameters as JSON
    Routes {
        /// Path to site directory
        path: PathBuf,
    },

    /// Show previous/next navigation for a post
    Nav {
        /// Path to site directory
        path: PathBuf,

        /// Post language (en, fr)
        #[arg(short, long)]
        locale: Locale,

        /// Post slug
        slug: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Serve { path, port } => commands::serve::run(path, port).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Routes { path } => commands::routes::run(path).await,
        Command::Nav { path, locale, slug } => commands::nav::run(path, locale, slug).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "portfolio-kit", &mut io::stdout());
            Ok(())
        }
    }
}
