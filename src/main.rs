use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use content_generator::{ConfiguredProvider, ContentGenerationService};
use daily_service::DailyService;
use dailyconcept_core::{
    today_key, AppConfig, Category, CoreError, Depth, ErrorExt, ErrorReporter, TopicEntry,
};
use recommender::{Catalog, Recommender};
use std::path::PathBuf;
use std::sync::Arc;
use storage::{FileBackend, TopicStore};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "dailyconcept.toml";
const DEFAULT_LOG_FILTER: &str =
    "dailyconcept=info,recommender=info,content_generator=info,storage=info,daily_service=info";

#[derive(Parser)]
#[command(name = "dailyconcept")]
#[command(about = "One concept a day, explained simply", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save at least three interests
    Onboard {
        #[arg(value_delimiter = ',', required = true)]
        interests: Vec<Category>,
    },
    /// Show today's topic
    Today,
    /// Suggest other topics for today
    Alternatives,
    /// Replace today's topic with a catalog topic, e.g. one of the suggestions
    Select { topic: String },
    /// Explain today's topic
    Teach,
    /// Explain any topic
    Ask { query: String },
    /// List or search past explanations
    History { query: Option<String> },
    /// Toggle the favourite flag on an entry
    Favorite { id: String },
    /// Change depth and audio settings
    Settings {
        #[arg(long)]
        depth: Option<Depth>,
        #[arg(long)]
        audio: Option<bool>,
    },
    /// Delete all stored data
    Clear,
}

type App = DailyService<FileBackend, ConfiguredProvider>;

#[tokio::main]
async fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = AppConfig::load(Some(cli.config.as_path())).map_err(|e| {
        e.log_error();
        anyhow::anyhow!(e.user_friendly_message())
    })?;
    tracing::info!("Starting dailyconcept (data in {})", config.data_dir.display());

    let mut app = build_app(&config)?;
    let command = cli.command.unwrap_or(Commands::Today);
    if let Err(e) = run(&mut app, command).await {
        ErrorReporter::new().report_error(&e);
        anyhow::bail!(e.user_friendly_message());
    }
    Ok(())
}

fn build_app(config: &AppConfig) -> Result<App> {
    let catalog = Arc::new(Catalog::builtin().context("built-in catalog is malformed")?);
    let provider = ConfiguredProvider::from_config(config)?;
    let generator = ContentGenerationService::from_config(provider, config);
    Ok(DailyService::new(
        TopicStore::open(&config.data_dir),
        Recommender::new(catalog),
        generator,
        config.locale.clone(),
    ))
}

async fn run(app: &mut App, command: Commands) -> Result<(), CoreError> {
    let date_key = today_key();

    let allowed_before_onboarding = matches!(command, Commands::Onboard { .. } | Commands::Clear);
    if !allowed_before_onboarding && app.needs_onboarding().await {
        println!("Pick your interests first: dailyconcept onboard <a,b,c>");
        println!("Available: {}", available_categories());
        return Ok(());
    }

    match command {
        Commands::Onboard { interests } => {
            let prefs = app.complete_onboarding(&interests).await?;
            let names: Vec<&str> = prefs.selected_interests.iter().map(|c| c.as_str()).collect();
            println!("Interests saved: {}", names.join(", "));
        }
        Commands::Today => {
            let topic = app.load_today_topic(&date_key).await?;
            println!("{} [{}]", topic.topic, topic.category);
            println!("{}", topic.teaser);
        }
        Commands::Alternatives => {
            for alt in app.pick_another(&date_key).await? {
                println!("{} [{}] - {}", alt.topic, alt.category, alt.teaser);
            }
        }
        Commands::Select { topic } => {
            let choice = app.find_topic(&topic).ok_or_else(|| CoreError::NotFound {
                resource: format!("topic '{topic}'"),
            })?;
            let topic = app.select_alternative(&date_key, choice).await?;
            println!("Today's topic is now {}", topic.topic);
        }
        Commands::Teach => print_entry(&app.teach_me_today(&date_key).await?),
        Commands::Ask { query } => print_entry(&app.teach_me_query(&query).await?),
        Commands::History { query } => {
            for entry in app.history(query.as_deref().unwrap_or("")).await {
                let star = if entry.is_favorite { "*" } else { " " };
                println!("{star} {}  {}  {}", entry.id, entry.date, entry.topic);
            }
        }
        Commands::Favorite { id } => {
            let state = if app.toggle_favorite(&id).await? {
                "added to"
            } else {
                "removed from"
            };
            println!("Entry {id} {state} favourites");
        }
        Commands::Settings { depth, audio } => {
            let current = app.store().get_preferences().await;
            let prefs = app
                .update_settings(
                    depth.unwrap_or(current.depth),
                    audio.unwrap_or(current.audio_enabled),
                )
                .await?;
            println!("Depth: {}, audio: {}", prefs.depth, prefs.audio_enabled);
        }
        Commands::Clear => {
            app.clear_all().await?;
            println!("All data cleared");
        }
    }
    Ok(())
}

fn available_categories() -> String {
    Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_entry(entry: &TopicEntry) {
    println!("# {}", entry.topic);
    println!("{}\n", entry.teaser);
    println!("Like you're seven:\n{}\n", entry.eli7);
    println!("Going deeper:\n{}\n", entry.deeper);
    println!("Example:\n{}\n", entry.example);
    println!("Why it matters:\n{}\n", entry.why_it_matters);
    println!("Think about it: {}", entry.reflection_question);
}
