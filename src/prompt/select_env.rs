use inquire::Select;

/// Starts on `current` when it is one of `names`.
pub fn select_env(names: Vec<String>, current: &str) -> inquire::error::InquireResult<String> {
    let cursor = names.iter().position(|name| name == current).unwrap_or(0);

    Select::new("Environment to activate", names)
        .with_starting_cursor(cursor)
        .prompt()
}
