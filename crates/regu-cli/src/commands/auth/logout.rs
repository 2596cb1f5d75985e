use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    regu_auth::logout()?;
    output(&LogoutResponse { cleared: true }, flags.format)
}
