//! Homework Notifier CLI
//!
//! Forwards homework review status changes to a Telegram chat.
//! Supports a continuous worker mode and a one-shot status command.

use anyhow::Result;
use clap::{Parser, Subcommand};
use homework_notifier::worker::{setup_signal_handler, Poller, WorkerConfig};
use homework_notifier::{check_response, BotError, Config, HomeworkRecord, StatusClient, TelegramBot};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "homework-notifier")]
#[command(about = "Forward homework review status changes to Telegram")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the status API and forward changes to Telegram
    Run {
        /// Poll interval in seconds (default: 600)
        #[arg(short, long, default_value = "600")]
        poll_interval: u64,

        /// Run a single iteration and exit (for testing)
        #[arg(long)]
        once: bool,
    },

    /// Fetch current homework statuses and print them without notifying
    Status {
        /// Unix timestamp to query from (0 selects the full history)
        #[arg(short, long, default_value = "0")]
        from_date: i64,

        /// Output the raw API payload as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Missing credentials are fatal before anything else runs
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run {
            poll_interval,
            once,
        } => {
            info!("Initializing watcher...");

            let worker_config = WorkerConfig::builder()
                .poll_interval_secs(poll_interval)
                .build();

            let api = StatusClient::new(&config.practicum_token)?;
            let bot = TelegramBot::new(&config.telegram_token, &config.chat_id);
            let mut poller = Poller::new(api, bot, worker_config);

            if once {
                info!("Running in single-iteration mode...");
                match poller.run_once().await {
                    Ok(Some(message)) => {
                        println!("Notification sent: {}", message);
                    }
                    Ok(None) => {
                        println!("No status change");
                    }
                    Err(e) => {
                        eprintln!("Error during poll: {}", e);
                        return Err(e.into());
                    }
                }
            } else {
                // Setup graceful shutdown
                let shutdown = poller.shutdown_handle();
                setup_signal_handler(shutdown);

                // Run continuous polling loop
                poller.run().await?;
            }
        }

        Commands::Status { from_date, json } => {
            info!("Fetching statuses, from_date={}", from_date);

            let api = StatusClient::new(&config.practicum_token)?;
            let payload = api.get_api_answer(from_date).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                match check_response(&payload) {
                    Ok(homeworks) => {
                        println!("=== Homework statuses ===\n");
                        for record in homeworks {
                            match HomeworkRecord::from_value(record) {
                                Ok(homework) => {
                                    println!("  - {} [{}]", homework.name, homework.status.as_str());
                                }
                                Err(e) => {
                                    println!("  - <unparsed record: {}>", e);
                                }
                            }
                        }
                    }
                    Err(BotError::EmptyHomeworks) => {
                        println!("No homeworks in the selected window");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Ok(())
}
