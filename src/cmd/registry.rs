use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use super::{CmdResult, OutputFormat, ok};
use crate::env::{ActivationController, CredentialRecord, EnvError};
use crate::prompt;

#[derive(Debug, Serialize)]
struct ActiveView {
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<String>,
    #[serde(flatten)]
    record: CredentialRecord,
}

#[derive(Debug, Tabled)]
struct EnvRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "APIHOST")]
    api_host: String,
    #[tabled(rename = "ACTIVE")]
    active: &'static str,
}

pub fn remove(ctl: &ActivationController, name: &str) -> CmdResult<()> {
    ctl.store().remove(name)?;
    ok(format!("{name} is removed"));

    if ctl.is_active(name) {
        log::warn!(
            "'{name}' was the selected environment, {} is left as is",
            ctl.wskprops().display()
        );
    }

    Ok(())
}

pub fn activate(ctl: &ActivationController, name: Option<String>) -> CmdResult<()> {
    let name = match name {
        Some(name) => name,
        None => prompt::select_env(ctl.store().list()?, &ctl.current_selection())?,
    };

    ctl.activate(&name)?;
    ok(format!("{name} is activated"));

    Ok(())
}

fn rows(ctl: &ActivationController, names: &[String]) -> Vec<EnvRow> {
    let current = ctl.current_selection();

    names
        .iter()
        .map(|name| {
            let api_host = ctl.store().get(name).map(|r| r.api_host).unwrap_or_else(|err| {
                log::warn!("unable to read '{name}': {err}");
                "?".to_string()
            });

            EnvRow {
                name: name.clone(),
                api_host,
                active: if *name == current { "*" } else { "" },
            }
        })
        .collect()
}

pub fn list(ctl: &ActivationController, long: bool) -> CmdResult<()> {
    let names = ctl.store().list()?;

    if names.is_empty() {
        eprintln!("No environments yet, add one with `wskenv create`.");
        return Ok(());
    }

    if long {
        let table = Table::new(rows(ctl, &names)).with(Style::blank()).to_string();
        println!("{table}");
        return Ok(());
    }

    let current = ctl.current_selection();
    for name in names {
        if name == current {
            println!("{}", format!("{name} (selected)").green());
        } else {
            println!("{name}");
        }
    }

    Ok(())
}

fn active_view(ctl: &ActivationController) -> CmdResult<ActiveView> {
    let selected = Some(ctl.current_selection()).filter(|name| !name.is_empty());
    let record = ctl.describe_active()?;

    Ok(ActiveView { selected, record })
}

pub fn show(ctl: &ActivationController, format: Option<OutputFormat>) -> CmdResult<()> {
    match format {
        Some(OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&active_view(ctl)?)?);
        }
        Some(OutputFormat::Yaml) => {
            print!("{}", serde_yaml::to_string(&active_view(ctl)?)?);
        }
        None => {
            let selected = ctl.current_selection();
            if !selected.is_empty() {
                println!("# {selected} #");
            }

            let record = ctl.describe_active()?;
            println!("[API_HOST] {}", record.api_host);
            println!("[AUTH] {}", record.auth_token);
            if let Some(alias) = record.alias {
                println!("[ALIAS] {alias}");
            }
        }
    }

    Ok(())
}

pub fn cd(ctl: &ActivationController) -> CmdResult<()> {
    let root = ctl.store().root();

    if !root.is_dir() {
        return Err(EnvError::RegistryUnavailable(root.to_path_buf()).into());
    }

    println!("{}", root.display());
    Ok(())
}
