use super::print::{print_error, print_messages};
use super::repl;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{CmdResult, ConfigAction, RolodexApi};
use rolodex::config::{ConfigKey, RolodexConfig};
use rolodex::dispatch::describe_error;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ROLODEX_HOME";
const LOG_ENV: &str = "ROLODEX_LOG";

struct AppContext {
    api: RolodexApi<FileStore>,
}

/// Runs the binary. Setup failures come back as `Err`; a failed command is
/// reported here and turns into a failing exit code.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Repl) => repl::run(&mut ctx.api).map(|()| ExitCode::SUCCESS),
        Some(Commands::Add { name, phone }) => emit(ctx.api.add_contact(&name, &phone)),
        Some(Commands::Change {
            name,
            old_phone,
            new_phone,
        }) => emit(ctx.api.change_phone(&name, &old_phone, &new_phone)),
        Some(Commands::Phone { phone }) => emit(ctx.api.find_phone_owner(&phone)),
        Some(Commands::All) => emit(ctx.api.all_contacts()),
        Some(Commands::AddBirthday { name, date }) => emit(ctx.api.add_birthday(&name, &date)),
        Some(Commands::ShowBirthday { name }) => emit(ctx.api.show_birthday(&name)),
        Some(Commands::Birthdays { days }) => handle_birthdays(&ctx, days),
        Some(Commands::Delete { name }) => emit(ctx.api.delete_contact(&name)),
        Some(Commands::AddPhone { name, phone }) => emit(ctx.api.add_phone(&name, &phone)),
        Some(Commands::RemovePhone { name, phone }) => emit(ctx.api.remove_phone(&name, &phone)),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so command output on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = RolodexConfig::load(&data_dir)?;
    let book_path = cli
        .book
        .clone()
        .unwrap_or_else(|| config.book_path(&data_dir));
    debug!(book = %book_path.display(), data_dir = %data_dir.display(), "using address book");

    let store = FileStore::new(book_path);
    let api = RolodexApi::open(store, data_dir, config.upcoming_days);
    Ok(AppContext { api })
}

fn emit(result: Result<CmdResult>) -> Result<ExitCode> {
    match result {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_error(&describe_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_birthdays(ctx: &AppContext, days: Option<u32>) -> Result<ExitCode> {
    match days {
        Some(days) => emit(ctx.api.birthdays_on(chrono::Local::now().date_naive(), days)),
        None => emit(ctx.api.birthdays()),
    }
}

fn handle_config(
    ctx: &AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<ExitCode> {
    let action = match key.as_deref() {
        None => ConfigAction::ShowAll,
        Some(name) => {
            let Some(key) = ConfigKey::parse(name) else {
                return emit(Err(RolodexError::Config(format!(
                    "Unknown config key: {}",
                    name
                ))));
            };
            match value {
                Some(v) => ConfigAction::Set(key, v),
                None => ConfigAction::ShowKey(key),
            }
        }
    };
    emit(ctx.api.config(action))
}
