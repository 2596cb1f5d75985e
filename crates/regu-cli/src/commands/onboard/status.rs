use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = regu_dash::onboarding_status(&ctx.service).await;
    output(&response, flags.format)
}
