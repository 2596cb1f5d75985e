use std::path::Path;

use anyhow::Context as _;
use regu_core::responses::UpdateProcessResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

pub async fn run(
    text: Option<&str>,
    file: Option<&Path>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = resolve_text(text, file)?;

    let spinner = Spinner::start(&format!("summarizing with {}", ctx.config.ai.model));
    match regu_ai::process_update(&ctx.service, &ctx.config.ai, &text).await {
        Ok(update) => {
            spinner.finish_clear();
            output(&UpdateProcessResponse { update }, flags.format)
        }
        Err(error) => {
            spinner.finish_err("summarization failed");
            Err(error.into())
        }
    }
}

/// Inline text wins over `--file`; the parser already rejects passing both.
fn resolve_text(text: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    anyhow::bail!("provide the text inline or via --file");
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inline_text_is_used_as_is() {
        let text = resolve_text(Some("GDPR fine issued"), None).unwrap();
        assert_eq!(text, "GDPR fine issued");
    }

    #[test]
    fn file_contents_are_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "CCPA amendment passed").unwrap();

        let text = resolve_text(None, Some(file.path())).unwrap();
        assert_eq!(text, "CCPA amendment passed");
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = resolve_text(None, Some(Path::new("/no/such/update.txt"))).unwrap_err();
        assert!(error.to_string().contains("/no/such/update.txt"));
    }

    #[test]
    fn no_source_is_an_error() {
        let error = resolve_text(None, None).unwrap_err();
        assert!(error.to_string().contains("--file"));
    }
}
