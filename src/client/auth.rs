use base64::Engine;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};

/// Credentials sent with every cluster request
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Auth {
    /// Use an API key authentication via headers
    Apikey(String),
    /// Use username and password authentication via Basic Auth headers
    Basic(String, String),
    /// Don't use any authentication
    #[default]
    None,
}

impl Auth {
    /// Pick credentials from optional parts.
    ///
    /// An API key wins over a username/password pair; a username without a
    /// password (or the reverse) means no authentication.
    pub fn new(username: Option<String>, password: Option<String>, apikey: Option<String>) -> Self {
        match (username, password, apikey) {
            (_, _, Some(apikey)) => Self::Apikey(apikey),
            (Some(username), Some(password), None) => Self::Basic(username, password),
            _ => Self::None,
        }
    }

    /// Default headers carrying these credentials
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        match self {
            Self::Basic(username, password) => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                let mut value = HeaderValue::from_str(&format!("Basic {}", credentials))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Self::Apikey(apikey) => {
                let mut value = HeaderValue::from_str(&format!("ApiKey {}", apikey))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Self::None => {}
        }
        Ok(headers)
    }
}

impl std::fmt::Display for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apikey(_) => write!(f, "Apikey"),
            Self::Basic(_, _) => write!(f, "Basic"),
            Self::None => write!(f, "None"),
        }
    }
}

// Never print secrets
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Auth::{}", self)
    }
}
