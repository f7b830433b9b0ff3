use std::io::Write;

use clap::Args;

use super::AuthArgs;
use crate::error::AggregatorError;
use crate::reddit::RedditApi;

#[derive(Args, Debug, Default)]
pub struct ConnectArgs {
    #[command(flatten)]
    pub auth: AuthArgs,
}

/// Authenticate and display the user's identity and karma.
pub fn connect(args: &ConnectArgs, out: &mut impl Write) -> Result<(), AggregatorError> {
    let credentials = args.auth.resolve();
    credentials.validate()?;
    let client = credentials.build()?;
    print_account(&client, out)
}

/// Fetch and print the authenticated user. Split from [`connect`] so tests
/// can drive it with a canned session.
pub fn print_account(client: &impl RedditApi, out: &mut impl Write) -> Result<(), AggregatorError> {
    let account = client.me()?;
    writeln!(out, "Authenticated as: {}", account.name)?;
    writeln!(out, "User ID: {}", account.id)?;
    writeln!(
        out,
        "Karma: {} link karma, {} comment karma",
        account.link_karma, account.comment_karma
    )?;
    Ok(())
}
