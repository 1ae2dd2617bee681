use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use yatra_agents::{ChatbotService, ChoiceSource, SeededChoice, ThreadRngChoice};
use yatra_core::{ChatRole, ChatTurn, DestinationType, ResponseData};
use yatra_observability::{init_tracing, AppMetrics};
use yatra_storage::{DestinationRepository, Store, Weather};

#[derive(Debug, Parser)]
#[command(name = "guide")]
#[command(about = "Yatra Guide tourism assistant CLI")]
struct Cli {
    /// SQLite database with the destination catalog; the built-in catalog is used when unset.
    #[arg(long, env = "YATRA_DATABASE_URL")]
    database_url: Option<String>,

    /// Enables live weather readings; canned readings are used when unset.
    #[arg(long, env = "YATRA_WEATHER_API_KEY", hide_env_values = true)]
    weather_api_key: Option<String>,

    #[arg(long, env = "YATRA_WEATHER_BASE_URL")]
    weather_base_url: Option<String>,

    /// Seed for reproducible greeting choices.
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive conversation.
    Chat {
        #[arg(long, default_value = "cli-user")]
        user: String,
    },
    /// Print the intent and sub-type of a message.
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List active destinations by rating.
    Destinations {
        #[arg(long = "type")]
        destination_type: Option<String>,
        #[arg(long, default_value_t = 6)]
        limit: usize,
    },
}

type Chatbot = ChatbotService<Store, Weather>;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("yatra_cli");
    let cli = Cli::parse();

    let chatbot = build_chatbot(&cli).await?;

    match cli.command {
        Command::Chat { user } => run_chat(&chatbot, &user).await?,
        Command::Classify { text } => {
            let result = chatbot.classify(&text.join(" "));
            let payload = serde_json::json!({
                "intent": result.intent,
                "subType": result.sub_type.as_ref().map(|sub_type| sub_type.label()),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Command::Destinations {
            destination_type,
            limit,
        } => {
            let type_filter = match destination_type.as_deref() {
                None => None,
                Some(raw) => Some(
                    DestinationType::parse(raw)
                        .with_context(|| format!("invalid --type value `{raw}`"))?,
                ),
            };
            if limit == 0 {
                bail!("--limit must be at least 1");
            }

            let destinations = chatbot
                .destinations()
                .find_active_destinations(type_filter, limit, true)
                .await
                .context("failed to read destination catalog")?;
            println!("{}", serde_json::to_string_pretty(&destinations)?);
        }
    }

    Ok(())
}

async fn run_chat(chatbot: &Chatbot, user: &str) -> Result<()> {
    let mut history: Vec<ChatTurn> = Vec::new();

    println!("Yatra Guide chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let reply = chatbot
            .classify_and_respond(message, user, &history)
            .await;

        println!("\n{}\n", reply.message);

        if let Some(ResponseData::Destinations(destinations)) = reply.data.as_ref() {
            for destination in destinations {
                println!(
                    "- {} ({}, {:.1}/5)",
                    destination.name,
                    destination.location.district,
                    destination.rating
                );
            }
            println!();
        }

        if !reply.suggestions.is_empty() {
            println!("Try: {}", reply.suggestions.join(" | "));
            println!();
        }

        history.push(ChatTurn {
            role: ChatRole::User,
            content: message.to_string(),
        });
        history.push(ChatTurn {
            role: ChatRole::Bot,
            content: reply.message,
        });
    }

    Ok(())
}

async fn build_chatbot(cli: &Cli) -> Result<Chatbot> {
    let metrics = AppMetrics::shared();

    let store = match cli.database_url.as_deref() {
        Some(database_url) => Store::sqlite(database_url)
            .await
            .with_context(|| format!("failed to open destination store at {database_url}"))?,
        None => Store::memory(),
    };
    let weather = match cli.weather_api_key.clone() {
        Some(api_key) => Weather::http(api_key, cli.weather_base_url.clone())?,
        None => Weather::mock(),
    };

    let choice: Arc<dyn ChoiceSource> = match cli.seed {
        Some(seed) => Arc::new(SeededChoice::new(seed)),
        None => Arc::new(ThreadRngChoice),
    };

    Ok(ChatbotService::new(Arc::new(store), Arc::new(weather), metrics).with_choice_source(choice))
}
