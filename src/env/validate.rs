use regex::Regex;
use std::sync::LazyLock;

use super::{EnvError, EnvResult};

const KEY_LEN: usize = 64;

static HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:http|ftp)s?://)?",
        r"(?:(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:[a-z]{2,6}\.?|[a-z0-9-]{2,}\.?)",
        r"|localhost",
        r"|[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("host pattern is valid")
});

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

/// Scheme (`http`, `https`, `ftp`, `ftps`) is optional, as are port and path.
pub fn validate_host(host: &str) -> bool {
    HOST.is_match(host)
}

/// Expects `uuid:key` where the key is exactly 64 characters long.
pub fn validate_auth(auth: &str) -> bool {
    match auth.split_once(':') {
        Some((uuid, key)) if !key.contains(':') => {
            UUID.is_match(uuid) && key.chars().count() == KEY_LEN
        }
        _ => false,
    }
}

/// Names become directory names under the registry root.
pub fn validate_name(name: &str) -> EnvResult<()> {
    let invalid = name.trim().is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_whitespace);

    if invalid {
        return Err(EnvError::InvalidName(name.to_string()));
    }

    Ok(())
}
