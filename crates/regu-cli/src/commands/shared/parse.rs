use regu_core::enums::TeamRole;
use regu_core::onboarding::TeamMemberDraft;
use serde::de::DeserializeOwned;

/// Parse a vocabulary value through its serde form.
///
/// Input is lowercased and hyphens become underscores, so `GDPR` and
/// `privacy-policy` both parse. The serde error names the valid values.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a team entry of the form `email` or `email:role`.
pub fn parse_team_entry(raw: &str) -> anyhow::Result<TeamMemberDraft> {
    match raw.split_once(':') {
        Some((email, role)) => Ok(TeamMemberDraft {
            email: email.to_string(),
            role: parse_enum(role, "role")?,
        }),
        None => Ok(TeamMemberDraft {
            email: raw.to_string(),
            role: TeamRole::default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regu_core::enums::{Category, Regulation, TeamRole, TemplateKind};

    use super::{parse_enum, parse_team_entry};

    #[test]
    fn parses_snake_case_value() {
        let category: Category = parse_enum("gdpr", "category").expect("category should parse");
        assert_eq!(category, Category::Gdpr);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let regulation: Regulation =
            parse_enum("GDPR", "regulation").expect("regulation should parse");
        assert_eq!(regulation, Regulation::Gdpr);
    }

    #[test]
    fn hyphens_are_accepted_as_separators() {
        let template: TemplateKind =
            parse_enum("privacy-policy", "template").expect("template should parse");
        assert_eq!(template, TemplateKind::PrivacyPolicy);
    }

    #[test]
    fn errors_name_the_field_and_value() {
        let error = parse_enum::<Category>("pci", "category").expect_err("should fail");
        assert!(error.to_string().contains("invalid category 'pci'"));
    }

    #[test]
    fn team_entry_defaults_to_member() {
        let draft = parse_team_entry("dana@example.com").expect("entry should parse");
        assert_eq!(draft.email, "dana@example.com");
        assert_eq!(draft.role, TeamRole::Member);
    }

    #[test]
    fn team_entry_accepts_explicit_role() {
        let draft = parse_team_entry("lee@example.com:admin").expect("entry should parse");
        assert_eq!(draft.email, "lee@example.com");
        assert_eq!(draft.role, TeamRole::Admin);
    }

    #[test]
    fn team_entry_rejects_unknown_role() {
        let error = parse_team_entry("lee@example.com:owner").expect_err("should fail");
        assert!(error.to_string().contains("invalid role 'owner'"));
    }
}
