use anyhow::bail;
use regu_core::enums::TeamRole;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    email: &str,
    role: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role = parse_enum::<TeamRole>(role, "role")?;
    if !email.contains('@') {
        bail!("invalid email '{email}': missing '@'");
    }

    let member = ctx.service.add_team_member(email.trim(), role).await?;
    output(&member, flags.format)
}
