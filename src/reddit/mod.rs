use roux::{Reddit, Subreddit};
use serde::{Deserialize, Serialize};

use crate::client::Credentials;
use crate::error::AggregatorError;

/// The account the session authenticated as.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Account {
    /// The account's name, such as "spez".
    pub name: String,
    /// Reddit's opaque account ID.
    pub id: String,
    /// Karma earned from link submissions.
    pub link_karma: i64,
    /// Karma earned from comments.
    pub comment_karma: i64,
}

/// Identity of a subreddit as reported by its about endpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SubredditInfo {
    /// The short name used in "r/<name>" form.
    pub display_name: String,
    /// The human-readable title set by the moderators.
    pub title: String,
}

/// A single submission returned from a subreddit listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Submission {
    /// The title of the submission.
    pub title: String,
    /// The submission's link, or the permalink for self posts.
    pub url: String,
    /// The submission's body text. Empty for link posts.
    pub selftext: String,
}

/// Ranked listings available from a single subreddit.
pub trait TopicFeed {
    fn about(&self) -> Result<SubredditInfo, AggregatorError>;
    fn hot(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError>;
    fn latest(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError>;
    fn rising(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError>;
    fn top(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError>;
}

/// An authenticated Reddit session. The CLI commands are written against
/// this trait so tests can drive them with a canned implementation.
pub trait RedditApi {
    type Feed: TopicFeed;

    fn me(&self) -> Result<Account, AggregatorError>;
    fn subreddit(&self, name: &str) -> Self::Feed;
}

/// roux-backed session. All OAuth and HTTP handling lives inside roux;
/// this wrapper only maps its responses onto the plain data types above.
pub struct RouxClient {
    me: roux::Me,
}

impl RouxClient {
    /// Authenticate with a resolved credential set.
    ///
    /// Re-validates so a set with absent mandatory fields fails here
    /// rather than reaching the external constructor.
    pub fn login(credentials: &Credentials) -> Result<Self, AggregatorError> {
        credentials.validate()?;
        log::debug!(
            "logging in as u/{} with user agent {:?}",
            credentials.username.as_deref().unwrap_or_default(),
            credentials.user_agent
        );
        let me = Reddit::new(
            &credentials.user_agent,
            credentials.client_id.as_deref().unwrap_or_default(),
            credentials.client_secret.as_deref().unwrap_or_default(),
        )
        .username(credentials.username.as_deref().unwrap_or_default())
        .password(credentials.password.as_deref().unwrap_or_default())
        .login()?;
        Ok(Self { me })
    }
}

impl RedditApi for RouxClient {
    type Feed = RouxFeed;

    fn me(&self) -> Result<Account, AggregatorError> {
        let data = self.me.me()?;
        Ok(Account {
            name: data.name,
            id: data.id,
            link_karma: data.link_karma as i64,
            comment_karma: data.comment_karma as i64,
        })
    }

    fn subreddit(&self, name: &str) -> RouxFeed {
        RouxFeed {
            name: name.to_string(),
            inner: Subreddit::new_oauth(name, &self.me.client),
        }
    }
}

/// Listings of one subreddit, fetched with the session's OAuth client.
pub struct RouxFeed {
    name: String,
    inner: Subreddit,
}

fn flatten(posts: impl IntoIterator<Item = roux::submission::SubmissionData>) -> Vec<Submission> {
    posts
        .into_iter()
        .map(|post| Submission {
            title: post.title,
            url: post.url.unwrap_or_default(),
            selftext: post.selftext,
        })
        .collect()
}

impl TopicFeed for RouxFeed {
    fn about(&self) -> Result<SubredditInfo, AggregatorError> {
        let about = self.inner.about()?;
        Ok(SubredditInfo {
            display_name: about.display_name.unwrap_or_else(|| self.name.clone()),
            title: about.title.unwrap_or_default(),
        })
    }

    fn hot(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError> {
        let listing = self.inner.hot(limit, None)?;
        Ok(flatten(listing.data.children.into_iter().map(|c| c.data)))
    }

    fn latest(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError> {
        let listing = self.inner.latest(limit, None)?;
        Ok(flatten(listing.data.children.into_iter().map(|c| c.data)))
    }

    fn rising(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError> {
        let listing = self.inner.rising(limit, None)?;
        Ok(flatten(listing.data.children.into_iter().map(|c| c.data)))
    }

    fn top(&self, limit: u32) -> Result<Vec<Submission>, AggregatorError> {
        let listing = self.inner.top(limit, None)?;
        Ok(flatten(listing.data.children.into_iter().map(|c| c.data)))
    }
}
