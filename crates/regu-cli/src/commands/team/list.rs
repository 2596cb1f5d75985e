use regu_core::entities::TeamMember;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct ListResponse {
    members: Vec<TeamMember>,
    count: usize,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let members = ctx.service.list_team_members(limit).await?;

    output(
        &ListResponse {
            count: members.len(),
            members,
        },
        flags.format,
    )
}
