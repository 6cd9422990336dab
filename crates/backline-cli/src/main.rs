//! backline - authoring CLI for product content documents.

mod render;

use std::path::PathBuf;

use backline_config::{FileStore, Loader, ProductConfig, ProductInfo, Saver};
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(version, about = "backline - product content authoring tools", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a product document for structural problems
    Validate {
        /// Path to the document (.json or .toml)
        config: PathBuf,
    },
    /// Render a product document to a static HTML preview
    Render {
        /// Path to the document (.json or .toml)
        config: PathBuf,

        /// Output HTML file
        out: PathBuf,
    },
    /// Transcode a rich-text fragment between markup and HTML
    Convert {
        /// Target form
        #[arg(long, value_enum)]
        to: Form,

        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },
    /// Write a starter product document
    Init {
        /// Path for the new document (.json or .toml)
        path: PathBuf,

        /// Product display name
        #[arg(long, default_value = "New Product")]
        name: String,

        /// Brand key
        #[arg(long, default_value = "audient")]
        brand: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Form {
    Html,
    Markup,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_miette();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(config).await,
        Commands::Render { config, out } => render(config, out).await,
        Commands::Convert { to, input } => convert(to, input).await,
        Commands::Init { path, name, brand } => init(path, name, brand).await,
    }
}

async fn validate(path: PathBuf) -> Result<()> {
    let config = load(&path).await?;
    match config.validate() {
        Ok(()) => {
            println!("✓ {} is valid", path.display());
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("✗ {issue}");
            }
            Err(miette::miette!(
                "{} issue(s) found in {}",
                issues.len(),
                path.display()
            ))
        }
    }
}

async fn render(config_path: PathBuf, out: PathBuf) -> Result<()> {
    let config = load(&config_path).await?;

    let html = render::render_page(&config);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await.into_diagnostic()?;
        }
    }
    tokio::fs::write(&out, html).await.into_diagnostic()?;

    println!("✓ Rendered {} -> {}", config_path.display(), out.display());
    Ok(())
}

async fn convert(to: Form, input: Option<PathBuf>) -> Result<()> {
    let text = match input {
        Some(path) => tokio::fs::read_to_string(&path).await.into_diagnostic()?,
        None => {
            use tokio::io::AsyncReadExt;
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .into_diagnostic()?;
            buf
        }
    };

    let output = match to {
        Form::Html => backline_markup::markup_to_html(&text),
        Form::Markup => backline_markup::html_to_markup(&text),
    };
    println!("{output}");
    Ok(())
}

async fn init(path: PathBuf, name: String, brand: String) -> Result<()> {
    if path.exists() {
        return Err(miette::miette!("{} already exists", path.display()));
    }

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(slugify)
        .unwrap_or_else(|| "new-product".to_string());

    let config = ProductConfig {
        info: ProductInfo {
            name,
            slug,
            brand,
            ..Default::default()
        },
        ..Default::default()
    };

    FileStore::new(&path).save(&config).await?;
    println!("✓ Wrote starter document to {}", path.display());
    Ok(())
}

async fn load(path: &std::path::Path) -> Result<ProductConfig> {
    if !path.exists() {
        return Err(miette::miette!("document not found: {}", path.display()));
    }
    let config = FileStore::new(path).load().await?;
    tracing::debug!(path = %path.display(), "document loaded");
    Ok(config)
}

/// Lowercase alphanumerics and hyphens, collapsing everything else.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_hyphen = true;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("iD14 MKII"), "id14-mkii");
        assert_eq!(slugify("Ampero II Stage"), "ampero-ii-stage");
        assert_eq!(slugify("--weird--"), "weird");
    }
}
