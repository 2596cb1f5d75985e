//! Shared command context: configuration, session claims, and the
//! user-scoped database service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use regu_auth::SessionClaims;
use regu_config::ReguConfig;
use regu_core::identity::AuthIdentity;
use regu_db::service::ReguService;

/// Resources every database-backed command needs, initialized once after
/// the session gate.
pub struct AppContext {
    pub config: ReguConfig,
    pub claims: SessionClaims,
    pub service: Arc<ReguService>,
}

impl AppContext {
    /// Resolve the stored session and open the database it scopes.
    ///
    /// Without a valid session this fails with a pointer to
    /// `rnv auth login`; only auth and theme commands run before this gate.
    pub async fn init(config: ReguConfig) -> anyhow::Result<Self> {
        let claims = regu_auth::resolve_session()
            .context("failed to read stored credentials")?
            .ok_or_else(|| anyhow::anyhow!("not signed in; run `rnv auth login`"))?;
        let identity = claims.to_identity();

        let service = if config.database.is_configured() {
            match ReguService::new_remote(
                &config.database.url,
                &config.database.auth_token,
                identity.clone(),
            )
            .await
            {
                Ok(service) => service,
                Err(error) => {
                    tracing::warn!(%error, "remote database unavailable; falling back to local");
                    open_local(&config, identity).await?
                }
            }
        } else {
            open_local(&config, identity).await?
        };

        Ok(Self {
            config,
            claims,
            service: Arc::new(service),
        })
    }
}

async fn open_local(config: &ReguConfig, identity: AuthIdentity) -> anyhow::Result<ReguService> {
    let path = if config.database.has_local_path() {
        PathBuf::from(&config.database.local_path)
    } else {
        default_db_path()?
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    ReguService::new_local(&path.to_string_lossy(), identity)
        .await
        .context("failed to open the local database")
}

fn default_db_path() -> anyhow::Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("regunova").join("regunova.db"))
        .context("cannot determine a data directory for the local database")
}
