use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = regu_dash::load_dashboard(&ctx.service).await;
    output(&response, flags.format)
}
