//! Spelltogether - CLI
//!
//! Cooperative spelling-bee with TUI and line modes. Share a session id and
//! everyone's words count toward one score.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelltogether::{
    catalog::Catalog,
    commands::{check_word, level_table, list_sessions, run_audit, run_simple},
    config::Settings,
    output::{
        formatters::hive_banner, print_audit_report, print_check_result, print_level_table,
        print_sessions,
    },
    session::{FileStore, Game, SessionId, Sessions},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelltogether",
    about = "Cooperative spelling-bee: find words from seven letters, together",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Catalog: 'embedded' (default) or path to a JSON puzzle file
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    /// Your name, shown to other players
    #[arg(short, long, global = true, env = "SPELL_NAME")]
    name: Option<String>,

    /// Where sessions and config.toml live
    #[arg(long, global = true, env = "SPELL_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Join an existing session instead of starting a new one
    #[arg(short, long, global = true)]
    session: Option<String>,

    /// Seed for picking the puzzle of a new session
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Start a new session and print its id
    New,

    /// Check a single word against a puzzle
    Check {
        /// The word to check
        word: String,

        /// Puzzle number in the catalog
        #[arg(short, long, default_value = "0")]
        game: usize,
    },

    /// Show the level thresholds of a puzzle
    Levels {
        /// Puzzle number in the catalog
        #[arg(short, long, default_value = "0")]
        game: usize,
    },

    /// Verify every puzzle in the catalog
    Audit {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// List sessions you have played
    Games,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = Settings::resolve(cli.name, cli.data_dir, cli.catalog);
    let catalog = Catalog::open(&settings.catalog)
        .with_context(|| format!("Failed to load catalog {:?}", settings.catalog))?;
    let sessions = Sessions::new(&settings.data_dir);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let (id, store) = join_or_create(&sessions, &catalog, cli.session.as_deref(), cli.seed)?;
            let name = settings.player_name().context("Failed to read player name")?;
            run_play_command(&catalog, store, id, name)
        }
        Commands::Simple => {
            let (id, store) = join_or_create(&sessions, &catalog, cli.session.as_deref(), cli.seed)?;
            let name = settings.player_name().context("Failed to read player name")?;
            run_simple_command(&catalog, store, &id, &name)
        }
        Commands::New => {
            let (id, _) = join_or_create(&sessions, &catalog, None, cli.seed)?;
            println!("{id}");
            Ok(())
        }
        Commands::Check { word, game } => {
            let result = check_word(&catalog, game, &word).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Levels { game } => {
            let puzzle = catalog
                .get(game)
                .with_context(|| format!("Puzzle #{game} not in catalog"))?;
            print_level_table(&hive_banner(puzzle), puzzle.high(), &level_table(puzzle));
            Ok(())
        }
        Commands::Audit { quiet } => {
            let report = run_audit(&catalog, quiet);
            print_audit_report(&report);
            if report.is_clean() {
                Ok(())
            } else {
                anyhow::bail!("{} puzzles failed the audit", report.failures())
            }
        }
        Commands::Games => {
            let summaries = list_sessions(&sessions, &catalog)
                .with_context(|| format!("Failed to read sessions in {}", sessions.root().display()))?;
            print_sessions(&summaries);
            Ok(())
        }
    }
}

/// Open the named session, or start a new one, and remember it
fn join_or_create(
    sessions: &Sessions,
    catalog: &Catalog,
    session: Option<&str>,
    seed: Option<u64>,
) -> Result<(SessionId, FileStore)> {
    let (id, store) = if let Some(session) = session {
        let id = SessionId::parse(session).context("Invalid session id")?;
        let store = sessions
            .open(&id)
            .with_context(|| format!("Failed to join session {id}"))?;
        (id, store)
    } else {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        sessions
            .create(catalog, &mut rng)
            .context("Failed to start a new session")?
    };

    let mut seen = sessions.seen().context("Failed to read seen sessions")?;
    seen.record(&id)
        .with_context(|| format!("Failed to write {}", seen.path().display()))?;

    Ok((id, store))
}

fn run_simple_command(catalog: &Catalog, store: FileStore, id: &SessionId, name: &str) -> Result<()> {
    let mut game = Game::open(catalog, store).context("Failed to open game")?;
    run_simple(&mut game, name, id).map_err(|e| anyhow::anyhow!(e))?;
    println!("rejoin with: spelltogether --session {id}");
    Ok(())
}

fn run_play_command(catalog: &Catalog, store: FileStore, id: SessionId, name: String) -> Result<()> {
    use spelltogether::interactive::{App, run_tui};

    let game = Game::open(catalog, store).context("Failed to open game")?;
    let app = App::new(game, id.clone(), name).context("Failed to read session")?;
    run_tui(app)?;
    println!("rejoin with: spelltogether --session {id}");
    Ok(())
}
