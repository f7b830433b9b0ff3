use std::io::Write;

use clap::Args;

use super::AuthArgs;
use crate::error::AggregatorError;
use crate::reddit::{RedditApi, TopicFeed};

const SEPARATOR_WIDTH: usize = 50;

#[derive(Args, Debug)]
pub struct TopicsArgs {
    #[command(flatten)]
    pub auth: AuthArgs,

    /// The name of the subreddits to query. Must be specified without the
    /// "r/". e.g. programming or programminghumor
    #[arg(short, long = "subreddit", required = true)]
    pub subreddit: Vec<String>,

    /// Number of top submissions to retrieve from the subreddits
    #[arg(long, default_value_t = 10)]
    pub top: i64,

    /// Number of newest submissions to retrieve from the subreddits
    #[arg(long, default_value_t = 10)]
    pub new: i64,

    /// Number of hottest submissions to retrieve from the subreddits
    #[arg(long, default_value_t = 10)]
    pub hot: i64,

    /// Number of submissions rising in popularity to retrieve from the
    /// subreddits
    #[arg(long, default_value_t = 10)]
    pub rising: i64,
}

impl TopicsArgs {
    /// At least one listing has to be requested, otherwise the invocation
    /// would authenticate and then print nothing.
    fn check_counts(&self) -> Result<(), AggregatorError> {
        if self.hot < 1 && self.new < 1 && self.rising < 1 && self.top < 1 {
            return Err(AggregatorError::Config(
                "Must provide a positive value for one or more of: \
                 '--hot', '--new', '--rising', '--top'"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Authenticate and print the requested listings of every named subreddit.
pub fn topics(args: &TopicsArgs, out: &mut impl Write) -> Result<(), AggregatorError> {
    let credentials = args.auth.resolve();
    credentials.validate()?;
    args.check_counts()?;
    let client = credentials.build()?;
    print_topics(&client, args, out)
}

/// Fetch and print submissions for each subreddit in turn. An error on
/// one subreddit aborts the remaining ones.
pub fn print_topics(
    client: &impl RedditApi,
    args: &TopicsArgs,
    out: &mut impl Write,
) -> Result<(), AggregatorError> {
    for name in &args.subreddit {
        let feed = client.subreddit(name);
        let info = feed.about()?;

        let mut submissions = Vec::new();
        if args.hot > 0 {
            submissions.extend(feed.hot(args.hot as u32)?);
        }
        if args.new > 0 {
            submissions.extend(feed.latest(args.new as u32)?);
        }
        if args.rising > 0 {
            submissions.extend(feed.rising(args.rising as u32)?);
        }
        if args.top > 0 {
            submissions.extend(feed.top(args.top as u32)?);
        }

        for submission in submissions {
            writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
            writeln!(out, "Subreddit: r/{} ({})", info.display_name, info.title)?;
            writeln!(out, "Topic: {}", submission.title)?;
            writeln!(out, "Topic URL: {}", submission.url)?;
            writeln!(out, "Content: {}\n", submission.selftext)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::mock::{MockClient, MockFeed};
    use crate::reddit::{SubredditInfo, Submission};

    fn submission(n: usize) -> Submission {
        Submission {
            title: format!("Post {n}"),
            url: format!("https://example.com/{n}"),
            selftext: format!("Body {n}"),
        }
    }

    fn args(subreddits: &[&str], top: i64, new: i64, hot: i64, rising: i64) -> TopicsArgs {
        TopicsArgs {
            auth: AuthArgs::default(),
            subreddit: subreddits.iter().map(|s| s.to_string()).collect(),
            top,
            new,
            hot,
            rising,
        }
    }

    fn client_with_top(submissions: Vec<Submission>) -> MockClient {
        MockClient {
            feed: MockFeed {
                info: SubredditInfo {
                    display_name: "foo".to_string(),
                    title: "Foo Community".to_string(),
                },
                top: submissions,
                ..MockFeed::default()
            },
            ..MockClient::default()
        }
    }

    #[test]
    fn prints_one_block_per_submission() {
        let client = client_with_top(vec![submission(1), submission(2)]);
        let mut out = Vec::new();
        print_topics(&client, &args(&["foo"], 2, 0, 0, 0), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let separator = "=".repeat(50);
        assert_eq!(output.matches(&separator).count(), 2);
        assert_eq!(output.matches("Subreddit: r/foo (Foo Community)").count(), 2);
        assert!(output.contains("Topic: Post 1\n"));
        assert!(output.contains("Topic URL: https://example.com/1\n"));
        assert!(output.contains("Content: Body 1\n\n"));
        assert!(output.contains("Topic: Post 2\n"));
    }

    #[test]
    fn respects_the_requested_count() {
        let client = client_with_top(vec![submission(1), submission(2), submission(3)]);
        let mut out = Vec::new();
        print_topics(&client, &args(&["foo"], 2, 0, 0, 0), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Topic: ").count(), 2);
    }

    #[test]
    fn listings_print_in_hot_new_rising_top_order() {
        let client = MockClient {
            feed: MockFeed {
                info: SubredditInfo::default(),
                hot: vec![Submission {
                    title: "hot".to_string(),
                    ..Submission::default()
                }],
                latest: vec![Submission {
                    title: "new".to_string(),
                    ..Submission::default()
                }],
                rising: vec![Submission {
                    title: "rising".to_string(),
                    ..Submission::default()
                }],
                top: vec![Submission {
                    title: "top".to_string(),
                    ..Submission::default()
                }],
            },
            ..MockClient::default()
        };

        let mut out = Vec::new();
        print_topics(&client, &args(&["foo"], 1, 1, 1, 1), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let position = |title: &str| output.find(&format!("Topic: {title}\n")).unwrap();
        assert!(position("hot") < position("new"));
        assert!(position("new") < position("rising"));
        assert!(position("rising") < position("top"));
    }

    #[test]
    fn iterates_subreddits_sequentially() {
        let client = client_with_top(vec![submission(1)]);
        let mut out = Vec::new();
        print_topics(&client, &args(&["foo", "bar"], 1, 0, 0, 0), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Topic: Post 1\n").count(), 2);
    }

    #[test]
    fn all_counts_below_one_is_a_usage_error() {
        let err = args(&["foo"], 0, 0, -1, 0).check_counts().unwrap_err();
        match err {
            AggregatorError::Config(message) => {
                assert!(message.contains("'--hot', '--new', '--rising', '--top'"));
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn a_single_positive_count_passes() {
        assert!(args(&["foo"], 0, 0, 0, 1).check_counts().is_ok());
    }
}
