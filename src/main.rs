use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use cycles_autopilot::bots;
use cycles_autopilot::runner::run_agent;
use cycles_autopilot::session::{TcpSession, DEFAULT_SERVER_ADDR};

#[derive(Parser, Debug)]
#[command(name = "cycles-autopilot")]
#[command(about = "Autonomous agent for the cycles grid arena")]
struct Cli {
    /// Display name this agent joins the arena under
    name: String,
    /// Strategy piloting the agent
    #[arg(long, default_value = bots::DEFAULT_BOT_ID)]
    bot: String,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(mut bot) = bots::create_bot(&cli.bot) else {
        error!("unknown bot '{}'. available:", cli.bot);
        for (id, description) in bots::describe_bots() {
            eprintln!("  {id:10} {description}");
        }
        return ExitCode::FAILURE;
    };

    let mut session = match TcpSession::connect(DEFAULT_SERVER_ADDR, &cli.name) {
        Ok(session) => session,
        Err(err) => {
            error!("{}: connection failed: {err:#}", cli.name);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "{}: joined {DEFAULT_SERVER_ADDR} piloting '{}'",
        cli.name,
        bot.id()
    );

    match run_agent(&mut session, bot.as_mut(), &cli.name) {
        Ok(outcome) => {
            info!("{}: session over ({outcome:?})", cli.name);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}: {err:#}", cli.name);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
