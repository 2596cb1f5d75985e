//! Compliance checklist feed with a locally computed posture overview.

use regu_core::entities::ComplianceItem;
use regu_core::enums::ComplianceStatus;
use regu_core::responses::ComplianceOverview;
use regu_db::service::ReguService;

use crate::error::DashError;

/// Default number of compliance items fetched into the feed.
pub const DEFAULT_ITEM_LIMIT: u32 = 100;

/// A loaded compliance checklist, newest first.
///
/// Status changes persist first and then patch the one matching entry in
/// place, so the checklist keeps its order across edits.
#[derive(Debug)]
pub struct ComplianceFeed {
    items: Vec<ComplianceItem>,
}

impl ComplianceFeed {
    /// Load the signed-in user's compliance items.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the query fails.
    pub async fn load(service: &ReguService, limit: u32) -> Result<Self, DashError> {
        let items = service.list_compliance_items(limit).await?;
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[ComplianceItem] {
        &self.items
    }

    /// Posture summary over the loaded items.
    #[must_use]
    pub fn overview(&self) -> ComplianceOverview {
        let mut compliant = 0;
        let mut non_compliant = 0;
        let mut pending = 0;
        for item in &self.items {
            match item.status {
                ComplianceStatus::Compliant => compliant += 1,
                ComplianceStatus::NonCompliant => non_compliant += 1,
                ComplianceStatus::Pending => pending += 1,
            }
        }
        ComplianceOverview::from_counts(compliant, non_compliant, pending)
    }

    /// Move one item to a new status, in storage and in this feed's copy.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::Db`] if the item does not exist or the update
    /// fails. The feed is left unchanged in that case.
    pub async fn set_status(
        &mut self,
        service: &ReguService,
        id: &str,
        status: ComplianceStatus,
    ) -> Result<(), DashError> {
        let updated = service.set_compliance_status(id, status).await?;
        if let Some(entry) = self.items.iter_mut().find(|item| item.id == updated.id) {
            *entry = updated;
        }
        Ok(())
    }
}
