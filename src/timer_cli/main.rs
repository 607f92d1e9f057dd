use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::time::{MissedTickBehavior, interval};
use tracing_subscriber::{EnvFilter, fmt};

use timetrack::client::http::HttpTimerApi;
use timetrack::client::timer_hook::TimerHook;
use timetrack::client::widget::{TimerWidget, format_elapsed};

const DEFAULT_LOG_FILTER: &str = "timetrack=warn";

#[derive(Parser, Debug)]
#[command(name = "timetrack", version, long_about = None)]
#[command(about = "Drive the server side timer from a terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        env = "TIMETRACK_API_URL",
        default_value = "http://127.0.0.1:8000/api/v1",
        help = "Base URL of the API, prefix included"
    )]
    api_url: String,
    #[arg(long, env = "TIMETRACK_API_TOKEN", help = "Bearer token for the API")]
    token: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show the running timer, if any")]
    Status,
    #[command(about = "Show today's tracked total")]
    Stats,
    #[command(about = "Start a timer on a task, closing any running one")]
    Start {
        #[arg(long)]
        task: String,
        #[arg(long)]
        description: Option<String>,
    },
    #[command(about = "Pause the running timer")]
    Pause,
    #[command(about = "Stop the running timer")]
    Stop {
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    #[command(about = "Change the running timer's description")]
    Update {
        #[arg(long)]
        description: Option<String>,
    },
    #[command(about = "Close the running timer and start one on another task")]
    Switch {
        #[arg(long)]
        task: String,
        #[arg(long)]
        description: Option<String>,
    },
    #[command(about = "Follow the timer live until interrupted")]
    Watch {
        #[arg(long, default_value_t = 30, help = "Seconds between server re-syncs")]
        sync_secs: u64,
        #[arg(long, help = "Task the start control would use")]
        task: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    let api = HttpTimerApi::new(&args.api_url, args.token)?;
    let hook = TimerHook::new(api);

    match args.commands {
        Commands::Status => {
            hook.fetch_timer_status().await?;
            println!("{}", TimerWidget::new(&hook, None).render());
        }
        Commands::Stats => {
            let stats = hook.get_timer_stats().await?;
            println!(
                "today {} ({:.2}h){}",
                format_elapsed(stats.today_total),
                stats.today_hours,
                if stats.is_running { ", timer running" } else { "" }
            );
        }
        Commands::Start { task, description } => {
            hook.start_timer(&task, description.as_deref()).await?;
            println!("{}", TimerWidget::new(&hook, Some(task)).render());
        }
        Commands::Pause => {
            hook.pause_timer().await?;
            println!("paused");
        }
        Commands::Stop { description, notes } => {
            hook.stop_timer(description.as_deref(), notes.as_deref())
                .await?;
            println!("stopped");
        }
        Commands::Update { description } => {
            hook.fetch_timer_status().await?;
            hook.update_timer(description.as_deref()).await?;
            println!("{}", TimerWidget::new(&hook, None).render());
        }
        Commands::Switch { task, description } => {
            hook.switch_task(&task, description.as_deref()).await?;
            println!("{}", TimerWidget::new(&hook, Some(task)).render());
        }
        Commands::Watch { sync_secs, task } => watch(&hook, sync_secs, task).await?,
    }
    Ok(())
}

async fn watch(hook: &TimerHook<HttpTimerApi>, sync_secs: u64, task: Option<String>) -> Result<()> {
    hook.fetch_timer_status().await?;
    let widget = TimerWidget::new(hook, task);
    let mut changes = hook.subscribe();
    let mut sync = interval(Duration::from_secs(sync_secs.max(1)));
    sync.set_missed_tick_behavior(MissedTickBehavior::Skip);
    sync.tick().await;

    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    println!("{}", widget.render());
    loop {
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", widget.render());
            }
            _ = sync.tick() => {
                if let Err(error) = hook.fetch_timer_status().await {
                    tracing::warn!(%error, "re-sync failed, keeping local clock");
                }
            }
            _ = &mut interrupted => {
                tracing::info!("watch interrupted");
                break;
            }
        }
    }
    Ok(())
}
