use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(profile) = ctx.service.get_profile().await? else {
        bail!("no profile saved yet; run `rnv profile set`");
    };
    output(&profile, flags.format)
}
