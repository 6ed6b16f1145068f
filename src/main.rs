#[macro_use]
mod wrapper;
pub use wrapper::*;

mod console;
mod domain;
mod infra;
mod initializer;
mod repository;
mod schema;
mod settings;
mod ui;

use crate::domain::model::{Sentiment, TweetId};
use crate::error::*;
use crate::settings::Settings;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "airmood",
    version,
    about = "Terminal dashboard for exploring airline tweet sentiment"
)]
struct Cli {
    /// Path to the tweets CSV (overrides AIRMOOD_DATA and the config file)
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard (the default)
    Dash,
    /// Print sentiment, airline and negative-reason counts
    Summary {
        /// Emit JSON instead of a colored report
        #[arg(long)]
        json: bool,
    },
    /// Print random tweets of one sentiment
    Sample {
        /// positive, neutral or negative
        #[arg(long, default_value = "positive")]
        sentiment: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Search tweet bodies for a substring
    Search { query: String },
    /// Show one tweet by id
    Show { id: String },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("airmood=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(err.exit_code() as i32);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let env_path = std::env::var(settings::DATA_ENV_VAR)
        .ok()
        .map(PathBuf::from);
    let data_path = settings.resolve_data_path(cli.data, env_path);

    let app = initializer::new(initializer::Config { data_path }).await;
    app.infras.ensure_initialized().await?;

    match cli.command.unwrap_or(Command::Dash) {
        Command::Dash => {
            let analytics = app.services.tweet.analytics().await?;
            ui::run_dashboard(analytics, &settings.dashboard)
        }
        Command::Summary { json } => {
            let analytics = match app.services.tweet.analytics().await {
                Ok(analytics) => analytics,
                Err(err) if json => {
                    // scripted consumers still get parseable output
                    println!("{}", err.to_json());
                    return Err(err);
                }
                Err(err) => return Err(err),
            };
            if json {
                console::print_summary_json(&analytics)
            } else {
                console::print_summary(&analytics);
                Ok(())
            }
        }
        Command::Sample { sentiment, count } => {
            let sentiment = sentiment
                .parse::<Sentiment>()
                .map_err(GeneralError::invalid_config)?;
            let tweets = app.services.tweet.sample(sentiment, count).await?;
            console::print_tweets(&tweets);
            Ok(())
        }
        Command::Search { query } => {
            let tweets = app.services.tweet.search(&query).await?;
            console::print_tweets(&tweets);
            Ok(())
        }
        Command::Show { id } => {
            let tweet = app.services.tweet.find_by_id(&TweetId(id)).await?;
            console::print_tweet(&tweet);
            Ok(())
        }
    }
}
