use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::info;
use pagebuilder::web::{AppState, serve};
use pagecraft::{
    build::config::SiteConfig,
    ctx::AppContext,
    sections::{SectionsAction, SectionsHandler},
};
use seohead::{PageType, SeoDefaults, SeoOptions, generate_head};
use url::Url;

#[derive(Parser)]
#[command(version, about = "Build, preview and publish landing pages")]
struct Cli {
    /// Workspace directory, defaults to the current directory
    #[arg(short, long)]
    workspace: Option<PathBuf>,

    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Subcommand)]
enum SubCommands {
    /// Build the page into the output directory
    Build {
        /// Site configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Show or toggle page sections
    Sections {
        #[command(subcommand)]
        action: Option<SectionsAction>,
        /// Section list file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Site configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the SEO head fragment of a page
    Seo(SeoArgs),
    /// Run the preview and editing server
    Serve {
        /// Site configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Listen address
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        /// Keep edits in memory instead of saving them
        #[arg(long)]
        no_save: bool,
    },
    /// Print the JSON Schema of the site configuration
    Schema,
}

#[derive(Args)]
struct SeoArgs {
    /// Canonical page URL
    #[arg(long)]
    url: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: String,
    /// home, product, pricing, about, blog-post or contact
    #[arg(long, default_value = "home")]
    page_type: PageType,
    /// Site name, defaults to the URL host
    #[arg(long)]
    brand: Option<String>,
    /// Open Graph image, absolute or relative to the site origin
    #[arg(long)]
    og_image: Option<String>,
}

fn print_seo(args: SeoArgs) -> Result<()> {
    let brand = match args.brand {
        Some(brand) => brand,
        None => Url::parse(&args.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default(),
    };
    let mut options = SeoOptions::new(args.url, args.title, args.description, brand)
        .with_page_type(args.page_type);
    if let Some(image) = args.og_image {
        options = options.with_og_image(image);
    }

    let head = generate_head(&options, &SeoDefaults::default())?;
    println!("{}", head.render()?);
    Ok(())
}

async fn run_server(
    ctx: &mut AppContext,
    config: Option<PathBuf>,
    addr: SocketAddr,
    no_save: bool,
) -> Result<()> {
    ctx.prepare_site_config(config).await?;
    let ws = ctx.load_workspace()?;
    let head = ctx.site_head(&ws.config)?.render()?;

    println!(
        "{}",
        format!("Preview: http://{addr}/").bold().purple()
    );
    let state = AppState::new(ws).with_head(head).with_persist(!no_save);
    serve(state, addr).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let workspace = match cli.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    info!("workspace: {}", workspace.display());
    let mut ctx = AppContext::new(workspace);

    match cli.command {
        SubCommands::Build { config, out } => {
            ctx.build(config, out).await?;
        }
        SubCommands::Sections {
            action,
            file,
            config,
        } => {
            ctx.prepare_site_config(config).await?;
            SectionsHandler::handle_sections(&ctx, action, file)?;
        }
        SubCommands::Seo(args) => print_seo(args)?,
        SubCommands::Serve {
            config,
            addr,
            no_save,
        } => run_server(&mut ctx, config, addr, no_save).await?,
        SubCommands::Schema => {
            let schema = schemars::schema_for!(SiteConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}
