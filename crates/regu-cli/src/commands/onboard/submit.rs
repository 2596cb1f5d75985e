use regu_core::enums::{Regulation, TemplateKind};
use regu_core::onboarding::StepForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OnboardStepCommands;
use crate::commands::shared::parse::{parse_enum, parse_team_entry};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    step: &OnboardStepCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = build_form(step)?;
    let response = regu_dash::submit_step(&ctx.service, &form).await?;
    output(&response, flags.format)
}

/// Translate command-line arguments into a step draft.
fn build_form(step: &OnboardStepCommands) -> anyhow::Result<StepForm> {
    let form = match step {
        OnboardStepCommands::Profile {
            company_name,
            industry,
            region,
            size,
        } => StepForm::Profile {
            company_name: company_name.clone(),
            industry: industry.clone(),
            region: region.clone(),
            size: size.clone(),
        },
        OnboardStepCommands::Assessment { regulations } => StepForm::Assessment {
            regulations: regulations
                .iter()
                .map(|raw| parse_enum::<Regulation>(raw, "regulation"))
                .collect::<anyhow::Result<Vec<_>>>()?,
        },
        OnboardStepCommands::Templates { templates } => StepForm::Templates {
            templates: templates
                .iter()
                .map(|raw| parse_enum::<TemplateKind>(raw, "template"))
                .collect::<anyhow::Result<Vec<_>>>()?,
        },
        OnboardStepCommands::Team { members } => StepForm::Team {
            members: members
                .iter()
                .map(|raw| parse_team_entry(raw))
                .collect::<anyhow::Result<Vec<_>>>()?,
        },
    };
    Ok(form)
}
