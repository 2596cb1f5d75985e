use regu_core::onboarding::StepForm;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Writes the profile through the same path as the onboarding wizard,
/// so validation and completion tracking stay in one place.
pub async fn run(
    company_name: &str,
    industry: &str,
    region: &str,
    size: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = StepForm::Profile {
        company_name: company_name.to_owned(),
        industry: industry.to_owned(),
        region: region.to_owned(),
        size: size.to_owned(),
    };

    let response = regu_dash::submit_step(&ctx.service, &form).await?;
    output(&response, flags.format)
}
