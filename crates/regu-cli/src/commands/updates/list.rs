use regu_core::entities::RegulatoryUpdate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    updates: Vec<RegulatoryUpdate>,
    count: usize,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let updates = ctx.service.list_regulatory_updates(limit).await?;

    output(
        &ListResponse {
            count: updates.len(),
            updates,
        },
        flags.format,
    )
}
