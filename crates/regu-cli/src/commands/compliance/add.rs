use chrono::{TimeDelta, Utc};
use regu_core::enums::Category;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    category: &str,
    due_days: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = parse_enum::<Category>(category, "category")?;
    let due_date = due_days
        .map(|days| {
            TimeDelta::try_days(days)
                .and_then(|delta| Utc::now().checked_add_signed(delta))
                .ok_or_else(|| anyhow::anyhow!("invalid due days: {days}"))
        })
        .transpose()?;

    let item = ctx
        .service
        .create_compliance_item(title, description.unwrap_or(""), category, due_date)
        .await?;
    output(&item, flags.format)
}
