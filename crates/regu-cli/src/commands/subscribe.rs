use anyhow::bail;
use regu_billing::{create_checkout_session, open_checkout};
use regu_core::responses::CheckoutResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubscribeArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

pub async fn handle(
    args: &SubscribeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let billing = &ctx.config.billing;
    if billing.checkout_url.is_empty() && !ctx.config.backend.is_configured() {
        bail!(
            "billing is not configured; set REGUNOVA_BILLING__CHECKOUT_URL or REGUNOVA_BACKEND__URL"
        );
    }

    let checkout_url = billing.resolve_checkout_url(ctx.config.backend.base_url());
    let price_id = args.price_id.as_deref().unwrap_or(&billing.price_id);

    let spinner = Spinner::start("creating checkout session");
    let session = create_checkout_session(&checkout_url, &ctx.claims.raw_jwt, price_id).await;
    spinner.finish_clear();
    let session = session?;

    let browser_opened = !args.no_browser && open_checkout(&session.url);
    if !browser_opened && !flags.quiet {
        eprintln!("open this url to finish checkout: {}", session.url);
    }

    output(
        &CheckoutResponse {
            session_id: session.session_id,
            url: session.url,
            browser_opened,
        },
        flags.format,
    )
}
