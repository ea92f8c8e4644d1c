mod i18n;
mod pages;

use clap::{Parser, Subcommand};
use falah_content::{team::MEMBERS, ApiClient, ContentStore, TeamDirectory, TeamI18nTable};
use falah_core::{
    config::{self, ContentSourceKind},
    events::SiteContext,
    slug::slugify,
    traits::{ProjectSource, TeamSource, TranslationSource},
    Locale,
};
use pages::{PortfolioPage, PortfolioSources, TeamPage};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "falah",
    version,
    about = "Al Falah site engine — localized portfolio and team pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "FALAH_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a portfolio detail page.
    Portfolio {
        /// Project id from the route (`/portfolio/<id>`).
        id: String,
        /// Locale to render in (en, ru, kz). Defaults to site.default_locale.
        #[arg(short, long)]
        lang: Option<Locale>,
    },
    /// Render a team member page.
    Team {
        /// Member slug from the route (`/team/<slug>`).
        slug: String,
        /// Locale to render in (en, ru, kz). Defaults to site.default_locale.
        #[arg(short, long)]
        lang: Option<Locale>,
    },
    /// Print the URL slug for a full name.
    Slug {
        /// The full name.
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Show configuration and content summary.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.site.log_level)),
        )
        .init();

    match cli.command {
        Commands::Portfolio { id, lang } => {
            let ctx = Arc::new(SiteContext::new(lang.unwrap_or(cfg.site.default_locale)));
            let sources = build_sources(&cfg, &ctx)?;
            let page = PortfolioPage::mount(
                ctx,
                PortfolioSources {
                    projects: sources.projects,
                    translations: sources.translations,
                },
                &id,
            )
            .await;
            println!("{}", page.render());
        }
        Commands::Team { slug, lang } => {
            let ctx = Arc::new(SiteContext::new(lang.unwrap_or(cfg.site.default_locale)));
            let sources = build_sources(&cfg, &ctx)?;
            let directory = TeamDirectory::new(Arc::new(TeamI18nTable::builtin()));
            let page = TeamPage::mount(ctx, sources.team, directory, &slug).await;
            println!("{}", page.render());
        }
        Commands::Slug { name } => {
            if name.is_empty() {
                anyhow::bail!("no name provided. Usage: falah slug <first> <last>");
            }
            println!("{}", slugify(&name.join(" ")));
        }
        Commands::Status => {
            println!("{} — Status\n", cfg.site.name);
            println!("Config: {}", cli.config);
            println!("Default locale: {}", cfg.site.default_locale);
            match cfg.content.source {
                ContentSourceKind::Static => {
                    let store = open_store(cfg.content.content_file.as_deref())?;
                    let (projects, overlays, team) = store.counts();
                    println!(
                        "Content: static ({})",
                        cfg.content.content_file.as_deref().unwrap_or("no content file")
                    );
                    println!("  projects: {projects}\n  overlays: {overlays}\n  team records: {team}");
                }
                ContentSourceKind::Api => println!("Content: api ({})", cfg.api.base_url),
            }
            println!();
            println!("Compiled team:");
            for member in MEMBERS {
                println!("  /team/{}  {} — {}", member.slug(), member.full_name(), member.role);
            }
            println!(
                "Team translations: {}",
                TeamI18nTable::builtin().slugs().join(", ")
            );
        }
    }

    Ok(())
}

/// Content sources for the configured backend.
struct Sources {
    projects: Arc<dyn ProjectSource>,
    translations: Arc<dyn TranslationSource>,
    team: Arc<dyn TeamSource>,
}

fn open_store(content_file: Option<&str>) -> anyhow::Result<ContentStore> {
    match content_file {
        Some(path) => Ok(ContentStore::from_file(path)?),
        None => Ok(ContentStore::new()),
    }
}

/// Build the configured content sources.
fn build_sources(cfg: &config::Config, ctx: &Arc<SiteContext>) -> anyhow::Result<Sources> {
    match cfg.content.source {
        ContentSourceKind::Static => {
            let store = Arc::new(
                open_store(cfg.content.content_file.as_deref())?.with_events(ctx.clone()),
            );
            info!("Serving content from the in-process store");
            Ok(Sources {
                projects: store.clone(),
                translations: store.clone(),
                team: store,
            })
        }
        ContentSourceKind::Api => {
            let client = Arc::new(ApiClient::new(cfg.api.base_url.clone()));
            info!("Serving content from {}", client.base_url());
            Ok(Sources {
                projects: client.clone(),
                translations: client.clone(),
                team: client,
            })
        }
    }
}
