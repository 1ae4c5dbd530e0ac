//! Export and download operations for the Agenda.

use jiff::Zoned;
use log::debug;

use super::{blocking, Agenda};
use crate::{
    error::{AgendaError, Result},
    export::{read_export, write_export, ExportedFile},
    models::ExportFormat,
    params::{Download, ExportPlan},
};

impl Agenda {
    /// Renders a stored plan into the export directory.
    ///
    /// The format is checked before the plan is looked up. The stored record
    /// is only read, never modified.
    ///
    /// # Errors
    ///
    /// * `AgendaError::UnsupportedFormat` for an unknown format name
    /// * `AgendaError::PlanNotFound` if no plan has the ID
    /// * `AgendaError::RenderFailure` if the document cannot be built or
    ///   written; no file is left behind in that case
    pub async fn export_plan(&self, params: &ExportPlan) -> Result<ExportedFile> {
        let format: ExportFormat = params.format.parse()?;
        self.export_plan_at(&params.plan_id, format, Zoned::now()).await
    }

    /// Like [`Agenda::export_plan`] with an explicit generation time, which
    /// makes the output reproducible.
    pub async fn export_plan_at(
        &self,
        plan_id: &str,
        format: ExportFormat,
        generated_at: Zoned,
    ) -> Result<ExportedFile> {
        let store = self.store.clone();
        let export_dir = self.export_dir.clone();
        let plan_id = plan_id.to_string();

        debug!("Exporting plan {plan_id} as {format}");
        blocking(move || {
            let record = store
                .get(&plan_id)?
                .ok_or_else(|| AgendaError::PlanNotFound { id: plan_id.clone() })?;
            write_export(&record, format, &export_dir, &generated_at)
        })
        .await
    }

    /// Reads an exported document back by its bare file name.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::FileNotFound` for unknown or unsafe names.
    pub async fn download(&self, params: &Download) -> Result<Vec<u8>> {
        let export_dir = self.export_dir.clone();
        let file_name = params.file_name.clone();
        blocking(move || read_export(&export_dir, &file_name)).await
    }
}
