use regu_core::entities::Alert;
use regu_dash::AlertFeed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    alerts: Vec<Alert>,
    unread: usize,
    count: usize,
}

pub async fn run(
    unread_only: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let feed = AlertFeed::load(&ctx.service, limit).await?;

    // The unread counter covers the whole feed even when listing unread only.
    let unread = feed.unread_count();
    let mut alerts = feed.alerts().to_vec();
    if unread_only {
        alerts.retain(|alert| !alert.is_read);
    }

    output(
        &ListResponse {
            count: alerts.len(),
            alerts,
            unread,
        },
        flags.format,
    )
}
