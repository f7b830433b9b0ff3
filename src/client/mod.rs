use crate::error::AggregatorError;
use crate::reddit::RouxClient;

/// User agent advertised when neither a flag nor the environment supplies one.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), " / ", env!("CARGO_PKG_VERSION"));

pub const ENV_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const ENV_USERNAME: &str = "REDDIT_USERNAME";
pub const ENV_PASSWORD: &str = "REDDIT_PASSWORD";
pub const ENV_USER_AGENT: &str = "REDDIT_USER_AGENT";

/// Explicit credential values, as taken from the command line.
/// Every field may be absent; resolution fills the gaps.
#[derive(Clone, Debug, Default)]
pub struct CredentialArgs {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_agent: Option<String>,
}

/// A resolved credential set. Immutable once produced by [`resolve`];
/// never persisted anywhere.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Always present. Defaults to [`DEFAULT_USER_AGENT`].
    pub user_agent: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Merge explicit values with environment fallbacks, explicit values
/// winning. Empty strings count as absent at every layer.
///
/// The environment is an injected lookup rather than a direct
/// `std::env::var` call so tests can supply a fixed mapping.
pub fn resolve<E>(explicit: &CredentialArgs, env: E) -> Credentials
where
    E: Fn(&str) -> Option<String>,
{
    let field = |value: &Option<String>, var: &str| {
        non_empty(value.clone()).or_else(|| non_empty(env(var)))
    };

    let user_agent = match field(&explicit.user_agent, ENV_USER_AGENT) {
        Some(agent) => agent,
        None => {
            log::debug!("no user agent supplied, using {DEFAULT_USER_AGENT:?}");
            DEFAULT_USER_AGENT.to_string()
        }
    };

    Credentials {
        client_id: field(&explicit.client_id, ENV_CLIENT_ID),
        client_secret: field(&explicit.client_secret, ENV_CLIENT_SECRET),
        username: field(&explicit.username, ENV_USERNAME),
        password: field(&explicit.password, ENV_PASSWORD),
        user_agent,
    }
}

impl Credentials {
    /// Check that every mandatory field is present, reporting the absent
    /// ones in canonical order.
    pub fn validate(&self) -> Result<(), AggregatorError> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push("client_id");
        }
        if self.client_secret.is_none() {
            missing.push("client_secret");
        }
        if self.username.is_none() {
            missing.push("username");
        }
        if self.password.is_none() {
            missing.push("password");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AggregatorError::MissingFields(missing))
        }
    }

    /// Validate and construct the authenticated client. An incomplete set
    /// never reaches the external constructor.
    pub fn build(&self) -> Result<RouxClient, AggregatorError> {
        self.validate()?;
        RouxClient::login(self)
    }
}
