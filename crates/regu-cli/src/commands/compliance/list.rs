use regu_core::entities::ComplianceItem;
use regu_core::enums::ComplianceStatus;
use regu_core::responses::ComplianceOverview;
use regu_dash::ComplianceFeed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    items: Vec<ComplianceItem>,
    overview: ComplianceOverview,
    count: usize,
}

pub async fn run(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let feed = ComplianceFeed::load(&ctx.service, limit).await?;

    // The overview always reflects the full feed, not the filtered slice.
    let overview = feed.overview();
    let mut items = feed.items().to_vec();
    if let Some(raw) = status {
        let wanted = parse_enum::<ComplianceStatus>(raw, "status")?;
        items.retain(|item| item.status == wanted);
    }

    output(
        &ListResponse {
            count: items.len(),
            items,
            overview,
        },
        flags.format,
    )
}
