use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let alert = ctx.service.mark_alert_read(id).await?;
    output(&alert, flags.format)
}
