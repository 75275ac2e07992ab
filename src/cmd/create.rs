use super::{CmdResult, ok};
use crate::{env::ActivationController, prompt};

pub fn handle(
    ctl: &ActivationController,
    name: &str,
    host: Option<String>,
    auth: Option<String>,
) -> CmdResult<()> {
    // Fail before prompting when the name is unusable.
    ctl.store().ensure_absent(name)?;

    let host = match host {
        Some(host) => host,
        None => prompt::prompt_host()?,
    };

    let auth = match auth {
        Some(auth) => auth,
        None => prompt::prompt_auth()?,
    };

    ctl.store().create(name, &host, &auth)?;
    ok(format!("{name} is created"));

    ctl.activate(name)?;
    ok(format!("{name} is activated"));

    Ok(())
}
