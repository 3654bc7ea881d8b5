use clap::{Parser, Subcommand};
use std::path::PathBuf;

use acctnav::browser::SystemBrowser;
use acctnav::navigate::{append_account_param, Navigator};
use acctnav::session::{self, ResolvedAccount};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NAVIGATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_SESSION: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open a URL (or a configured alias) in the browser
    Open {
        /// URL or alias name to open
        target: String,

        /// Account id to use for this navigation, overriding env and stored state
        #[arg(short, long)]
        account: Option<String>,

        /// Print the final URL instead of opening the browser
        #[arg(long)]
        print: bool,
    },
    /// Manage the stored account id
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
}

#[derive(Subcommand, Debug)]
enum AccountCommands {
    /// Show the stored account id
    Show,
    /// Store an account id for future navigations
    Set {
        /// Account id to store
        id: String,
    },
    /// Remove the stored account id
    Clear,
}

#[derive(Parser, Debug)]
#[command(name = "acctnav")]
#[command(about = "Open app URLs in your browser with your account id attached", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/acctnav/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            target,
            account,
            print,
        } => {
            // Load config (aliases are optional; a missing file is fine)
            let config_path = cli.config.map(PathBuf::from);
            let config = match acctnav::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            let url = config.resolve_target(&target);
            if cli.verbose && url != target {
                eprintln!("Alias '{}' resolved to {}", target, url);
            }

            // Load session state; a broken state file shouldn't silently
            // drop the account id from the navigation
            let session_path = session::storage::get_session_path();
            let state = match session::storage::load_session_state(&session_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Session state error: {}", e);
                    std::process::exit(EXIT_SESSION);
                }
            };

            let account_id = session::resolve_account(account, &state);
            if cli.verbose {
                match &account_id {
                    Some(id) => eprintln!("Using account id {}", id),
                    None => eprintln!("No account id available"),
                }
            }

            if print {
                println!("{}", append_account_param(&url, account_id.as_deref()));
                std::process::exit(EXIT_SUCCESS);
            }

            let session_source = ResolvedAccount(account_id);
            let browser = SystemBrowser;
            let navigator = Navigator::new(&session_source, &browser);

            // Navigation failures are already reported on stderr by the
            // navigator; only the exit code is decided here
            if !navigator.navigate(&url) {
                std::process::exit(EXIT_NAVIGATION);
            }

            println!("Opening {}", url);
        }
        Commands::Account { command } => {
            let session_path = session::storage::get_session_path();
            let mut state = match session::storage::load_session_state(&session_path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Session state error: {}", e);
                    std::process::exit(EXIT_SESSION);
                }
            };

            match command {
                AccountCommands::Show => match &state.account_id {
                    Some(id) => println!("{}", id),
                    None => {
                        println!("No account id stored.");
                        println!("Set one with `acctnav account set <id>`.");
                    }
                },
                AccountCommands::Set { id } => {
                    state.set_account(id.clone());
                    if let Err(e) = session::storage::save_session_state(&session_path, &state) {
                        eprintln!("Session state error: {}", e);
                        std::process::exit(EXIT_SESSION);
                    }
                    println!("Stored account id {}", id);
                }
                AccountCommands::Clear => {
                    state.clear_account();
                    if let Err(e) = session::storage::save_session_state(&session_path, &state) {
                        eprintln!("Session state error: {}", e);
                        std::process::exit(EXIT_SESSION);
                    }
                    println!("Cleared stored account id");
                }
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
