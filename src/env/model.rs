use serde::Serialize;

pub const AUTH_KEY: &str = "AUTH";
pub const APIHOST_KEY: &str = "APIHOST";
pub const ALIAS_KEY: &str = "ALIAS";

/// Contents of a `.wskprops` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialRecord {
    pub api_host: String,
    #[serde(rename = "auth")]
    pub auth_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl CredentialRecord {
    pub fn new(api_host: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            auth_token: auth_token.into(),
            alias: None,
        }
    }

    /// Returns `None` when either `AUTH` or `APIHOST` is missing.
    pub fn parse(contents: &str) -> Option<Self> {
        let mut auth = None;
        let mut host = None;
        let mut alias = None;

        for line in contents.lines().map(str::trim_end) {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let value = Some(value.to_string());
            match key.trim() {
                AUTH_KEY => auth = value,
                APIHOST_KEY => host = value,
                ALIAS_KEY => alias = value,
                _ => {}
            }
        }

        Some(Self {
            api_host: host?,
            auth_token: auth?,
            alias,
        })
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{AUTH_KEY}={}\n{APIHOST_KEY}={}\n",
            self.auth_token, self.api_host
        );

        if let Some(alias) = &self.alias {
            out.push_str(&format!("{ALIAS_KEY}={alias}\n"));
        }

        out
    }
}
