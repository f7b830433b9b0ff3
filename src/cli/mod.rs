mod connect;
pub use connect::*;

mod topics;
pub use topics::*;

use clap::{Args, Parser, Subcommand};

use crate::client::{self, CredentialArgs, Credentials};
use crate::error::AggregatorError;

/// Aggregate hot, new, top, and rising topics from multiple subreddits.
#[derive(Parser, Debug)]
#[command(name = "reddit-topics-aggregator", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to Reddit and display username, user id, and karma of the
    /// authenticated user
    Connect(ConnectArgs),
    /// Retrieve subreddit topic submissions (hottest, newest, top, rising)
    Topics(TopicsArgs),
}

/// Credential flags shared by every subcommand. Resolution falls back to
/// the matching REDDIT_* environment variable for each one.
#[derive(Args, Clone, Debug, Default)]
pub struct AuthArgs {
    /// Reddit API client ID
    #[arg(long)]
    pub client_id: Option<String>,
    /// Reddit API client secret
    #[arg(long)]
    pub client_secret: Option<String>,
    /// Reddit username
    #[arg(long)]
    pub username: Option<String>,
    /// Reddit password
    #[arg(long)]
    pub password: Option<String>,
    /// Custom user agent
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl AuthArgs {
    /// Resolve flags against the real process environment.
    pub fn resolve(&self) -> Credentials {
        let explicit = CredentialArgs {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            user_agent: self.user_agent.clone(),
        };
        client::resolve(&explicit, |var| std::env::var(var).ok())
    }
}

/// Parse arguments, run the selected command, and report any error.
/// Returns the process exit code.
pub fn run() -> i32 {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    let result = match cli.command {
        Command::Connect(args) => connect(&args, &mut stdout),
        Command::Topics(args) => topics(&args, &mut stdout),
    };

    match result {
        Ok(()) => 0,
        Err(err) => report(&err),
    }
}

/// Print an error on stderr with its presentation prefix and remediation
/// hint. Message formatting for missing credentials happens only here;
/// the error itself carries the field names structurally.
pub fn report(err: &AggregatorError) -> i32 {
    match err {
        AggregatorError::MissingFields(fields) => {
            let flags: Vec<String> = fields
                .iter()
                .map(|field| format!("--{}", field.replace('_', "-")))
                .collect();
            eprintln!("Configuration Error: Missing arguments: {}", flags.join(", "));
            eprintln!("Help: Specify the arguments above and try again");
        }
        AggregatorError::Config(message) => {
            eprintln!("Configuration Error: {message}");
            eprintln!("Help: Correct the issue above and try again");
        }
        AggregatorError::Client(message) => {
            eprintln!("Reddit Client Error: {message}");
        }
        AggregatorError::Io(err) => {
            eprintln!("Error: {err}");
        }
        AggregatorError::Other(message) => {
            eprintln!("Error: {message}");
        }
    }
    1
}
