use crate::env::{validate_auth, validate_host};
use inquire::{
    CustomUserError, Password, PasswordDisplayMode, Text,
    validator::Validation,
};

fn host_validator(input: &str) -> Result<Validation, CustomUserError> {
    match validate_host(input) {
        true => Ok(Validation::Valid),
        false => Ok(Validation::Invalid("Expected a URL, hostname or IPv4 address".into())),
    }
}

fn auth_validator(input: &str) -> Result<Validation, CustomUserError> {
    match validate_auth(input) {
        true => Ok(Validation::Valid),
        false => Ok(Validation::Invalid("Expected `uuid:key` with a 64 character key".into())),
    }
}

pub fn prompt_host() -> inquire::error::InquireResult<String> {
    Text::new("API host (e.g. https://openwhisk.example.com)")
        .with_validator(host_validator)
        .prompt()
}

pub fn prompt_auth() -> inquire::error::InquireResult<String> {
    Password::new("Auth (uuid:key)")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(auth_validator)
        .prompt()
}
