use anyhow::{Context, Result, bail};
use bug_api_client::HttpClient;
use bug_tracker_config::AppConfig;
use bug_tracker_store::{
    AppState, Bug, BugId, BugStore, NewBug, UserId, add_bug, assign_bug_to_user, configure_store,
    load_bugs, resolve_bug, selectors,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

mod logger;

#[derive(Parser)]
#[command(name = "bug-tracker", version, about = "Track bugs against a REST bug tracker API")]
struct Cli {
    /// API base URL (overrides config file and BUG_TRACKER_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Explicit config file instead of the default search path
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all bugs
    List {
        /// Only bugs assigned to this user
        #[arg(long)]
        user: Option<UserId>,
    },
    /// List bugs that are not resolved yet
    Unresolved,
    /// Report a new bug
    Add {
        description: String,
        /// Assign the bug right away
        #[arg(long)]
        user: Option<UserId>,
    },
    /// Mark a bug as resolved
    Resolve { id: String },
    /// Assign a bug to a user
    Assign { id: String, user: UserId },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting bug-tracker");

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let client = HttpClient::with_timeout(&config.base_url, config.request_timeout())
        .with_context(|| format!("Invalid base URL {}", config.base_url))?;
    let store = configure_store(Arc::new(client), &config);

    {
        let handle = store.clone();
        store.subscribe(move || {
            let state = handle.get_state();
            log::trace!(
                "State: {} bugs, loading={}",
                state.entities.bugs.list.len(),
                state.entities.bugs.loading
            );
        });
    }

    store.dispatch(load_bugs()).await;

    let result = run(&store, cli.command).await;
    if result.is_err() {
        eprintln!("See {} for details", log_file.display());
    }

    log::info!("Exiting bug-tracker");
    result
}

async fn run(store: &BugStore, command: Command) -> Result<()> {
    match command {
        Command::List { user } => {
            let state = store.get_state();
            ensure_loaded(&state)?;
            let bugs: Vec<&Bug> = match user {
                Some(user_id) => selectors::get_bugs_by_user(&state, user_id),
                None => selectors::get_bugs(&state).iter().collect(),
            };
            print_bugs(&bugs);
        }

        Command::Unresolved => {
            let state = store.get_state();
            ensure_loaded(&state)?;
            print_bugs(&selectors::get_unresolved_bugs(&state));
        }

        Command::Add { description, user } => {
            let before = store.get_state();
            store
                .dispatch(add_bug(NewBug {
                    description,
                    user_id: user,
                }))
                .await;

            let after = store.get_state();
            match added_bug(selectors::get_bugs(&before), selectors::get_bugs(&after)) {
                Some(bug) => println!("Added {}", format_bug(bug)),
                None => bail!("The server did not save the bug"),
            }
        }

        Command::Resolve { id } => {
            let id = parse_bug_id(&id);
            store.dispatch(resolve_bug(id.clone())).await;

            match selectors::get_bug(&store.get_state(), &id) {
                Some(bug) if bug.resolved => println!("Resolved {}", format_bug(bug)),
                _ => bail!("Bug {} was not resolved", id),
            }
        }

        Command::Assign { id, user } => {
            let id = parse_bug_id(&id);
            store.dispatch(assign_bug_to_user(id.clone(), user)).await;

            match selectors::get_bug(&store.get_state(), &id) {
                Some(bug) if bug.user_id == Some(user) => println!("Assigned {}", format_bug(bug)),
                _ => bail!("Bug {} was not assigned to user {}", id, user),
            }
        }
    }

    Ok(())
}

/// A list is only trustworthy once a fetch succeeded
fn ensure_loaded(state: &AppState) -> Result<()> {
    if state.entities.bugs.last_fetch.is_none() {
        bail!("Could not load bugs");
    }
    Ok(())
}

/// The entry the create call inserted or replaced
///
/// A confirmed bug whose id is already known replaces that entry in place,
/// so it is not necessarily the last one.
fn added_bug<'a>(before: &[Bug], after: &'a [Bug]) -> Option<&'a Bug> {
    after.iter().find(|bug| !before.contains(bug))
}

/// Numeric ids stay numeric so they match what the server sends back
fn parse_bug_id(raw: &str) -> BugId {
    raw.parse::<u64>()
        .map(BugId::from)
        .unwrap_or_else(|_| BugId::from(raw))
}

fn format_bug(bug: &Bug) -> String {
    let id = bug
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "?".to_string());
    let status = if bug.resolved { "x" } else { " " };
    match bug.user_id {
        Some(user_id) => format!("#{} [{}] {} (user {})", id, status, bug.description, user_id),
        None => format!("#{} [{}] {}", id, status, bug.description),
    }
}

fn print_bugs(bugs: &[&Bug]) {
    if bugs.is_empty() {
        println!("No bugs");
        return;
    }
    for bug in bugs {
        println!("{}", format_bug(bug));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bug_id() {
        assert_eq!(parse_bug_id("42"), BugId::Number(42));
        assert_eq!(parse_bug_id("abc"), BugId::Text("abc".to_string()));
    }

    #[test]
    fn test_format_bug() {
        let bug = Bug {
            id: Some(BugId::Number(1)),
            description: "crash on start".to_string(),
            resolved: true,
            user_id: Some(2),
        };
        assert_eq!(format_bug(&bug), "#1 [x] crash on start (user 2)");

        let bug = Bug {
            description: "typo".to_string(),
            ..Bug::default()
        };
        assert_eq!(format_bug(&bug), "#? [ ] typo");
    }

    #[test]
    fn test_added_bug_replacing_known_id() {
        let bug = |id: u64, description: &str| Bug {
            id: Some(BugId::Number(id)),
            description: description.to_string(),
            ..Bug::default()
        };
        let before = vec![bug(1, "a"), bug(2, "b")];
        let after = vec![bug(1, "changed"), bug(2, "b")];

        assert_eq!(added_bug(&before, &after), Some(&after[0]));
        assert_eq!(added_bug(&before, &before), None);

        let appended = vec![bug(1, "a"), bug(2, "b"), bug(3, "c")];
        assert_eq!(added_bug(&before, &appended), Some(&appended[2]));
    }

    #[test]
    fn test_cli_parses_assign() {
        let cli = Cli::try_parse_from(["bug-tracker", "assign", "3", "7"]).unwrap();
        match cli.command {
            Command::Assign { id, user } => {
                assert_eq!(id, "3");
                assert_eq!(user, 7);
            }
            _ => panic!("expected assign"),
        }
    }
}
