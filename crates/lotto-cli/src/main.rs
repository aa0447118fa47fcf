mod actions;
mod logging;
mod render;
mod store;
mod workspace;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lotto_core::Theme;
use thiserror::Error;

use actions::{ActionError, App, CheckInput, GenerateInput};
use logging::init_logging;
use render::Renderer;
use store::{FileStore, LottoState};
use workspace::{WorkspaceError, WorkspacePaths, load_or_create_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("{0}")]
    Action(#[from] ActionError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Action(err) if err.is_user_error() => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lotto", version, about = "Lotto number picker")]
struct Cli {
    /// Directory holding settings, saved state and logs.
    #[arg(long, global = true, default_value = ".lotto")]
    workspace: PathBuf,
    /// Print numbers without colours; also implied by `NO_COLOR`.
    #[arg(long, global = true, default_value_t = false)]
    plain: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw one or more tickets.
    Generate(GenerateArgs),
    /// Print the last tickets as clipboard text.
    Copy,
    /// Manage saved tickets.
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// Check a ticket against the winning numbers.
    Check(CheckArgs),
    /// Chance of winning with several tickets.
    Odds(OddsArgs),
    /// Show or change the colour theme.
    #[command(subcommand)]
    Theme(ThemeCommand),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Generate(_) => "generate",
            Command::Copy => "copy",
            Command::Favorites(_) => "favorites",
            Command::Check(_) => "check",
            Command::Odds(_) => "odds",
            Command::Theme(_) => "theme",
        }
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of tickets (1-10); defaults to the workspace setting.
    #[arg(long, short = 'n')]
    sets: Option<u8>,
    /// Numbers every ticket must contain.
    #[arg(long, value_delimiter = ',')]
    include: Vec<u8>,
    /// Numbers no ticket may contain.
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<u8>,
    /// Seed for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum FavoritesCommand {
    /// Save the last tickets.
    Save {
        #[arg(long, default_value = "")]
        note: String,
    },
    /// List saved tickets, newest first.
    List,
    /// Delete one saved ticket by its listed position.
    Delete { position: usize },
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Winning numbers; reuses the last ones when omitted.
    #[arg(long, value_delimiter = ',', conflicts_with = "reset")]
    winning: Option<Vec<u8>>,
    /// Bonus number; reuses the last one when omitted.
    #[arg(long, conflicts_with = "reset")]
    bonus: Option<u8>,
    /// Ticket to check; reuses the last one when omitted.
    #[arg(long, value_delimiter = ',', conflicts_with = "reset")]
    mine: Option<Vec<u8>>,
    /// Forget the saved checker inputs.
    #[arg(long, default_value_t = false)]
    reset: bool,
}

#[derive(Args, Debug)]
struct OddsArgs {
    /// Tickets bought for one draw (1-100).
    #[arg(long, short = 't', default_value_t = 1)]
    tickets: u32,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// Print the current theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Pick a theme explicitly.
    Set { theme: ThemeArg },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::warn!(event = "command_failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let paths = WorkspacePaths::new(cli.workspace);
    paths.ensure_dirs()?;

    if let Err(err) = init_logging(&paths.cli_log_path()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let settings = load_or_create_settings(&paths)?;
    let store = FileStore::new(paths.store_dir.clone());
    let mut app = App::new(LottoState::new(store, settings.keys.clone()), settings);
    let plain = cli.plain || std::env::var_os("NO_COLOR").is_some();
    let renderer = Renderer::new(app.theme(), plain);

    tracing::info!(event = "command_started", command = cli.command.name());

    match cli.command {
        Command::Generate(args) => {
            let results = app.generate(&GenerateInput {
                include: args.include,
                exclude: args.exclude,
                sets: args.sets,
                seed: args.seed,
            })?;
            println!("{}", renderer.sets(&results.sets));
        }
        Command::Copy => {
            println!("{}", app.copy_text()?);
        }
        Command::Favorites(FavoritesCommand::Save { note }) => {
            let evicted = app.save_favorites(&note)?;
            let mut message = format!("Saved. {} favorites stored.", app.favorites().len());
            if evicted > 0 {
                message.push_str(&format!(" {evicted} oldest removed."));
            }
            println!("{}", renderer.message(&message));
        }
        Command::Favorites(FavoritesCommand::List) => {
            println!("{}", renderer.favorites(&app.favorites()));
        }
        Command::Favorites(FavoritesCommand::Delete { position }) => {
            let removed = app.delete_favorite(position)?;
            let message = format!("Deleted favorite {position}: {}", removed.numbers);
            println!("{}", renderer.message(&message));
        }
        Command::Check(args) if args.reset => {
            app.reset_checker()?;
            println!("{}", renderer.message("Checker inputs cleared."));
        }
        Command::Check(args) => {
            let (inputs, result) = app.check(&CheckInput {
                winning: args.winning,
                bonus: args.bonus,
                mine: args.mine,
            })?;
            println!("{}", renderer.check(&inputs, &result));
        }
        Command::Odds(args) => {
            let odds = app.odds(args.tickets)?;
            println!("{}", renderer.odds(&odds));
        }
        Command::Theme(ThemeCommand::Show) => {
            println!("{}", renderer.message(app.theme().as_str()));
        }
        Command::Theme(ThemeCommand::Toggle) => {
            let theme = app.toggle_theme()?;
            println!("{}", renderer.with_theme(theme).message(theme.as_str()));
        }
        Command::Theme(ThemeCommand::Set { theme }) => {
            let theme = app.set_theme(theme.into())?;
            println!("{}", renderer.with_theme(theme).message(theme.as_str()));
        }
    }

    tracing::info!(event = "command_finished", status = "success");
    Ok(())
}
