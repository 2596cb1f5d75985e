use regu_core::enums::ComplianceStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<ComplianceStatus>(status, "status")?;
    let item = ctx.service.set_compliance_status(id, status).await?;
    output(&item, flags.format)
}
