use std::sync::Arc;
use std::time::Duration;

use regu_core::responses::ReportGenerateResponse;
use tokio::sync::Notify;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

/// Kick off generation and wait for the finalize pass to land.
///
/// The wait is unconditional: the finalize task runs inside this process,
/// so exiting early would abandon the report in `pending`.
pub async fn run(title: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let delay = Duration::from_secs(ctx.config.general.report_delay_secs);
    let refresh = Arc::new(Notify::new());

    let pending =
        regu_dash::generate_report(Arc::clone(&ctx.service), title, delay, refresh).await?;
    let spinner = Spinner::start(&format!("generating '{}'", pending.report.title));

    match pending.wait().await {
        Ok(report) => {
            spinner.finish_clear();
            output(&ReportGenerateResponse { report }, flags.format)
        }
        Err(error) => {
            spinner.finish_err("report generation failed");
            Err(error.into())
        }
    }
}
