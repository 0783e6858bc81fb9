//! The session itself: state, transitions, and request descriptors.

use std::path::PathBuf;

use dcs_api::{ApiError, Preview, ProcessAck};
use dcs_model::{ColumnMap, Selection, SelectionError, UploadedFile, Variant, gate};

use crate::error::WorkflowError;
use crate::stage::Stage;

/// Monotonically increasing token tying an in-flight call to the session
/// generation that issued it. Bumped on reset.
pub type Generation = u64;

/// Descriptor for an upload call the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Generation that issued the call.
    pub generation: Generation,
    /// File to upload.
    pub path: PathBuf,
}

/// Descriptor for a preview call the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Generation that issued the call.
    pub generation: Generation,
    /// File to preview.
    pub file_id: i64,
}

/// Descriptor for a process call the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    /// Generation that issued the call.
    pub generation: Generation,
    /// File to clean.
    pub file_id: i64,
    /// Selected normalized keys, in export order.
    pub columns: Vec<String>,
    /// Whether the server should derive product image names.
    pub generate_image_names: bool,
}

/// Descriptor for a side-channel download.
///
/// Fire-and-forget: no completion is reported back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadRequest {
    /// File whose cleaned output to fetch.
    pub file_id: i64,
    /// Delimiter flavor.
    pub variant: Variant,
}

/// State machine for one cleaning session.
#[derive(Debug, Default)]
pub struct Session {
    stage: Stage,
    generation: Generation,
    loading: bool,
    error: Option<WorkflowError>,
    picked_file: Option<PathBuf>,
    file: Option<UploadedFile>,
    preview: Option<Preview>,
    selection: Selection,
    generate_names: bool,
    ack: Option<ProcessAck>,
}

impl Session {
    /// Fresh session in the Upload stage.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// True while a network call is outstanding. Triggering controls must be
    /// disabled while this holds.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error to surface, if any.
    pub fn error(&self) -> Option<&WorkflowError> {
        self.error.as_ref()
    }

    /// File chosen in the picker, not yet uploaded.
    pub fn picked_file(&self) -> Option<&PathBuf> {
        self.picked_file.as_ref()
    }

    /// Server identity of the uploaded file.
    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    /// Preview data, present from the Preview stage on.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Column map of the current file.
    pub fn columns(&self) -> Option<&ColumnMap> {
        self.preview.as_ref().map(|p| &p.columns)
    }

    /// Current column selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether image-name generation is requested.
    pub fn generate_names(&self) -> bool {
        self.generate_names
    }

    /// True when the selection contains every required column.
    pub fn can_generate_names(&self) -> bool {
        self.preview
            .as_ref()
            .is_some_and(|p| gate::can_generate_names(&p.columns, &self.selection))
    }

    /// Required columns still missing from the selection, as raw labels.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        match &self.preview {
            Some(p) => gate::missing_columns(&p.columns, &self.selection),
            None => gate::REQUIRED_COLUMNS.to_vec(),
        }
    }

    /// Row count of the cleaned output, when the server reported one.
    pub fn cleaned_rows(&self) -> Option<u64> {
        self.ack.as_ref().and_then(|ack| ack.rows)
    }

    // ========================================================================
    // Upload stage
    // ========================================================================

    /// Record the file chosen in the picker.
    pub fn pick_file(&mut self, path: PathBuf) {
        if self.stage != Stage::Upload {
            return;
        }
        tracing::debug!("File picked: {}", path.display());
        self.picked_file = Some(path);
        self.error = None;
    }

    /// Validate and arm the upload call.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::NoFileSelected`] when nothing was picked (surfaced,
    /// no call issued) or [`WorkflowError::Busy`] when a call is already
    /// outstanding.
    pub fn begin_upload(&mut self) -> Result<UploadRequest, WorkflowError> {
        if self.loading {
            return Err(self.surface(WorkflowError::Busy));
        }
        let Some(path) = self.picked_file.clone() else {
            return Err(self.surface(WorkflowError::NoFileSelected));
        };

        self.error = None;
        self.loading = true;
        Ok(UploadRequest {
            generation: self.generation,
            path,
        })
    }

    /// Start the workflow from a file that is already on the server.
    ///
    /// Behaves like a completed upload: captures the file identity and
    /// yields the follow-up preview call.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::Busy`] when a call is already outstanding.
    pub fn begin_existing(&mut self, file: UploadedFile) -> Result<PreviewRequest, WorkflowError> {
        if self.loading {
            return Err(self.surface(WorkflowError::Busy));
        }
        if self.stage != Stage::Upload {
            return Err(self.surface(WorkflowError::Internal(
                "existing file selected outside the Upload stage".to_string(),
            )));
        }

        tracing::info!("Reusing uploaded file {} ({})", file.id, file.original_filename);
        let file_id = file.id;
        self.picked_file = None;
        self.file = Some(file);
        self.error = None;
        self.loading = true;
        Ok(PreviewRequest {
            generation: self.generation,
            file_id,
        })
    }

    /// Apply the upload result.
    ///
    /// On success the file identity is captured and the preview call is
    /// yielded: upload completes strictly before preview is issued, and the
    /// in-flight guard stays armed across both. On failure the error is
    /// surfaced and the session stays in Upload for a manual retry.
    ///
    /// Returns `None` (and leaves the session untouched) for stale
    /// generations.
    pub fn upload_finished(
        &mut self,
        generation: Generation,
        result: Result<UploadedFile, ApiError>,
    ) -> Option<PreviewRequest> {
        if self.is_stale(generation) {
            return None;
        }

        match result {
            Ok(file) => {
                tracing::info!("Uploaded {} as file {}", file.original_filename, file.id);
                let file_id = file.id;
                self.file = Some(file);
                Some(PreviewRequest {
                    generation,
                    file_id,
                })
            }
            Err(err) => {
                tracing::warn!("Upload failed: {err}");
                self.loading = false;
                self.error = Some(err.into());
                None
            }
        }
    }

    /// Apply the preview result.
    ///
    /// On success the column map is seeded, the selection is emptied, and
    /// the session enters Preview. On failure (including the fatal ingestion
    /// mismatch) the session returns to a clean Upload stage: a Preview
    /// stage without columns is never entered.
    pub fn preview_finished(
        &mut self,
        generation: Generation,
        result: Result<Preview, ApiError>,
    ) {
        if self.is_stale(generation) {
            return;
        }

        self.loading = false;
        match result {
            Ok(preview) => {
                tracing::info!("Preview ready: {} column(s)", preview.columns.len());
                self.preview = Some(preview);
                self.selection.clear();
                self.generate_names = false;
                self.stage = Stage::Preview;
            }
            Err(err) => {
                tracing::warn!("Preview failed: {err}");
                self.file = None;
                self.error = Some(err.into());
            }
        }
    }

    // ========================================================================
    // Preview stage
    // ========================================================================

    /// Toggle a column in or out of the selection, by raw label.
    ///
    /// The label is resolved to its normalized key here, at selection time;
    /// the selection only ever stores keys. Recomputes the gate afterwards.
    pub fn toggle_column(&mut self, raw_label: &str) {
        if self.stage != Stage::Preview || self.loading {
            return;
        }
        let Some(preview) = &self.preview else {
            return;
        };

        let resolution = preview.columns.resolve(raw_label);
        if resolution.is_fallback() {
            tracing::debug!("Toggling column {raw_label} with no normalized key");
        }
        self.selection.toggle(resolution.into_key());
        self.enforce_gate();
    }

    /// Remove a column from the selection, by normalized key.
    pub fn remove_column(&mut self, key: &str) {
        if self.stage != Stage::Preview || self.loading {
            return;
        }
        self.selection.remove(key);
        self.enforce_gate();
    }

    /// Move a selected column from one position to another.
    ///
    /// # Errors
    ///
    /// [`SelectionError::IndexOutOfBounds`] when either index is invalid;
    /// the selection is left unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), SelectionError> {
        if self.stage != Stage::Preview || self.loading {
            return Ok(());
        }
        let result = self.selection.reorder(from, to);
        if let Err(err) = &result {
            tracing::debug!("Rejected reorder: {err}");
        }
        result
    }

    /// Set the generate-names flag.
    ///
    /// Enabling is ignored while the gate is closed; the flag can never be
    /// true without the full required-column set selected.
    pub fn set_generate_names(&mut self, enabled: bool) {
        if self.stage != Stage::Preview {
            return;
        }
        self.generate_names = enabled && self.can_generate_names();
    }

    /// Validate and arm the process call.
    ///
    /// # Errors
    ///
    /// [`WorkflowError::EmptySelection`] when no columns are selected
    /// (surfaced, no call issued) or [`WorkflowError::Busy`] when a call is
    /// already outstanding.
    pub fn begin_process(&mut self) -> Result<ProcessRequest, WorkflowError> {
        if self.loading {
            return Err(self.surface(WorkflowError::Busy));
        }
        if self.stage != Stage::Preview {
            return Err(self.surface(WorkflowError::Internal(
                "process triggered outside the Preview stage".to_string(),
            )));
        }
        let Some(file) = &self.file else {
            return Err(self.surface(WorkflowError::Internal(
                "no uploaded file in the Preview stage".to_string(),
            )));
        };
        if self.selection.is_empty() {
            return Err(self.surface(WorkflowError::EmptySelection));
        }

        self.error = None;
        self.loading = true;
        Ok(ProcessRequest {
            generation: self.generation,
            file_id: file.id,
            columns: self.selection.keys().to_vec(),
            generate_image_names: self.generate_names,
        })
    }

    /// Apply the process result.
    ///
    /// Success enters the Result stage. Failure surfaces the error and stays
    /// in Preview with the selection retained.
    pub fn process_finished(
        &mut self,
        generation: Generation,
        result: Result<ProcessAck, ApiError>,
    ) {
        if self.is_stale(generation) {
            return;
        }

        self.loading = false;
        match result {
            Ok(ack) => {
                tracing::info!("Processing acknowledged (rows: {:?})", ack.rows);
                self.ack = Some(ack);
                self.stage = Stage::Result;
            }
            Err(err) => {
                tracing::warn!("Processing failed: {err}");
                self.error = Some(err.into());
            }
        }
    }

    // ========================================================================
    // Result stage
    // ========================================================================

    /// Descriptor for downloading the cleaned CSV.
    ///
    /// Only available in the Result stage; not a state transition.
    pub fn download_request(&self, variant: Variant) -> Option<DownloadRequest> {
        if self.stage != Stage::Result {
            return None;
        }
        let file = self.file.as_ref()?;
        Some(DownloadRequest {
            file_id: file.id,
            variant,
        })
    }

    // ========================================================================
    // Reset
    // ========================================================================

    /// Discard everything and return to an empty Upload stage.
    ///
    /// In-flight calls are not aborted; bumping the generation token makes
    /// their responses stale so they are discarded on arrival.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.stage = Stage::Upload;
        self.loading = false;
        self.error = None;
        self.picked_file = None;
        self.file = None;
        self.preview = None;
        self.selection.clear();
        self.generate_names = false;
        self.ack = None;
        tracing::info!("Session reset (generation {})", self.generation);
    }

    /// Clear the error overlay.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn enforce_gate(&mut self) {
        if !self.can_generate_names() {
            self.generate_names = false;
        }
    }

    fn surface(&mut self, err: WorkflowError) -> WorkflowError {
        self.error = Some(err.clone());
        err
    }

    fn is_stale(&self, generation: Generation) -> bool {
        if generation == self.generation {
            return false;
        }
        tracing::debug!(
            "Discarding stale response (generation {} != {})",
            generation,
            self.generation
        );
        true
    }
}
