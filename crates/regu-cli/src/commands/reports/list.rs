use regu_core::entities::Report;
use regu_dash::ReportFeed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    reports: Vec<Report>,
    pending: usize,
    count: usize,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let feed = ReportFeed::load(&ctx.service, limit).await?;

    output(
        &ListResponse {
            pending: feed.pending_count(),
            count: feed.reports().len(),
            reports: feed.reports().to_vec(),
        },
        flags.format,
    )
}
