use clap::{Parser, Subcommand, ValueEnum};
use migration::MigrationCommand;
use serde::Serialize;
use tennis::adapters::{PlayerRepoSea, TournamentRepoSea};
use tennis::config::db::{DbOwner, DbProfile};
use tennis::infra::connect_db;
use tennis::{AppError, PlayerService, TournamentService};
use uuid::Uuid;

mod telemetry;

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Prod,
    Test,
}

#[derive(Clone, Copy, ValueEnum)]
enum Migrate {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

#[derive(Subcommand)]
enum Read {
    /// List every record
    List,
    /// Fetch one record by identifier
    Get { identifier: Uuid },
}

#[derive(Subcommand)]
enum Command {
    /// Run schema migrations (owner credentials)
    Migrate {
        #[arg(value_enum)]
        command: Migrate,
    },
    /// Player ranking queries
    Players {
        #[command(subcommand)]
        read: Read,
    },
    /// Tournament queries
    Tournaments {
        #[command(subcommand)]
        read: Read,
    },
}

#[derive(Parser)]
#[command(name = "tennis")]
#[command(about = "Tennis players and tournaments")]
struct Cli {
    /// Database profile
    #[arg(short, long, value_enum, default_value = "prod")]
    profile: Profile,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let profile = match cli.profile {
        Profile::Prod => DbProfile::Prod,
        Profile::Test => DbProfile::Test,
    };

    match cli.command {
        Command::Migrate { command } => {
            let command = match command {
                Migrate::Up => MigrationCommand::Up,
                Migrate::Down => MigrationCommand::Down,
                Migrate::Fresh => MigrationCommand::Fresh,
                Migrate::Reset => MigrationCommand::Reset,
                Migrate::Refresh => MigrationCommand::Refresh,
                Migrate::Status => MigrationCommand::Status,
            };
            let db = connect_db(profile, DbOwner::Owner).await?;
            migration::migrate(&db, command).await?;
        }
        Command::Players { read } => {
            let db = connect_db(profile, DbOwner::App).await?;
            let service = PlayerService::new(PlayerRepoSea::new(db));
            match read {
                Read::List => print_json(&service.get_all_players().await?)?,
                Read::Get { identifier } => {
                    print_json(&service.get_by_identifier(identifier).await?)?
                }
            }
        }
        Command::Tournaments { read } => {
            let db = connect_db(profile, DbOwner::App).await?;
            let service = TournamentService::new(TournamentRepoSea::new(db));
            match read {
                Read::List => print_json(&service.get_all_tournaments().await?)?,
                Read::Get { identifier } => {
                    print_json(&service.get_by_identifier(identifier).await?)?
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
