//! Plan import, lookup and status operations for the Agenda.

use jiff::Timestamp;
use log::debug;
use uuid::Uuid;

use super::{blocking, Agenda};
use crate::{
    display::PlanSummaries,
    error::{AgendaError, Result},
    models::{PlanFilter, PlanRecord, PlanStatus, PlanSummary},
    params::{ImportPlan, ListPlans, PlanId, SetStatus},
};

const DEFAULT_EVENT_TYPE: &str = "general";

impl Agenda {
    /// Stores a newly generated plan under a fresh ID with status
    /// `generated`.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::InvalidInput` if `user_request` is blank.
    pub async fn import_plan(&self, params: &ImportPlan) -> Result<PlanRecord> {
        let user_request = params.user_request.trim();
        if user_request.is_empty() {
            return Err(AgendaError::invalid_input("user_request")
                .with_reason("Request text cannot be empty"));
        }

        let now = Timestamp::now();
        let record = PlanRecord {
            plan_id: Uuid::new_v4().to_string(),
            event_type: params
                .event_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_EVENT_TYPE)
                .to_string(),
            user_request: user_request.to_string(),
            ai_response: params.content.clone(),
            event_details: params.event_details.clone(),
            user_id: params.user_id.clone(),
            channel_id: params.channel_id.clone(),
            status: PlanStatus::Generated,
            created_at: now,
            updated_at: now,
        };

        let store = self.store.clone();
        let stored = record.clone();
        blocking(move || store.put(stored)).await?;
        debug!("Imported plan {}", record.plan_id);
        Ok(record)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &PlanId) -> Result<Option<PlanRecord>> {
        let store = self.store.clone();
        let plan_id = params.plan_id.clone();
        blocking(move || store.get(&plan_id)).await
    }

    /// Lists plans matching the filter, newest first.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<PlanRecord>> {
        let store = self.store.clone();
        let filter = PlanFilter::from(params);
        blocking(move || store.list(&filter)).await
    }

    /// Lists plans as display-ready summaries.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let plans = self.list_plans(params).await?;
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Changes a plan's lifecycle status.
    ///
    /// # Errors
    ///
    /// * `AgendaError::InvalidInput` if the status is blank
    /// * `AgendaError::PlanNotFound` if no plan has the ID
    pub async fn set_status(&self, params: &SetStatus) -> Result<PlanRecord> {
        if params.status.trim().is_empty() {
            return Err(AgendaError::invalid_input("status").with_reason("Status cannot be empty"));
        }

        let store = self.store.clone();
        let plan_id = params.plan_id.clone();
        let status = PlanStatus::from(params.status.clone());
        let updated = blocking(move || store.set_status(&plan_id, status)).await?;

        let record = updated.ok_or_else(|| AgendaError::PlanNotFound {
            id: params.plan_id.clone(),
        })?;
        debug!("Plan {} is now {}", record.plan_id, record.status);
        Ok(record)
    }
}
