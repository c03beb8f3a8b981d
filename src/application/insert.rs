//! Insert-from-clipboard use case

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::config::PREFERRED_IMAGE_FORMAT_KEY;
use crate::domain::content::{allowed_types, select_type, ContentType, InsertMode, OutputFile};

use super::ports::{
    AttachmentError, AttachmentSink, ClipboardEntry, ClipboardError, ClipboardSource,
    ConversionError, FormatConverter, FormatSupport, PreferenceError, PreferenceStore,
};

/// Errors from the insert use case
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("Clipboard read failed: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Preference lookup failed: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Image conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Attachment failed: {0}")]
    Attachment(#[from] AttachmentError),
}

/// Input parameters for the insert use case
#[derive(Debug, Clone)]
pub struct InsertInput {
    /// Compose session receiving the attachments
    pub session_id: String,
    /// Legacy (as-is) or format-aware insert
    pub mode: InsertMode,
}

impl Default for InsertInput {
    fn default() -> Self {
        Self {
            session_id: "compose".to_string(),
            mode: InsertMode::default(),
        }
    }
}

/// One attachment produced from a clipboard entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    /// Name the sink stored the file under
    pub name: String,
    /// Declared type of the attached bytes
    pub content_type: ContentType,
    /// Attachment size in human-readable format
    pub size: String,
    /// Type the clipboard supplied, when the image was re-encoded
    pub converted_from: Option<ContentType>,
    /// Where the sink put the file, if on disk
    pub location: Option<PathBuf>,
}

/// Output from the insert use case
#[derive(Debug, Clone, Default)]
pub struct InsertOutput {
    /// Attachments in clipboard order
    pub attached: Vec<AttachedFile>,
    /// Entries that yielded nothing to attach
    pub skipped: usize,
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct InsertCallbacks {
    /// Called with (entry index, chosen type) once a type is selected
    pub on_type_selected: Option<Box<dyn Fn(usize, &ContentType) + Send + Sync>>,
    /// Called with (source type, target type) before an image is re-encoded
    pub on_converting: Option<Box<dyn Fn(&ContentType, &ContentType) + Send + Sync>>,
    /// Called after each attachment is added
    pub on_attached: Option<Box<dyn Fn(&AttachedFile) + Send + Sync>>,
}

/// Attach clipboard content to a compose session
pub struct InsertFromClipboardUseCase<C, F, P, V, A>
where
    C: ClipboardSource,
    F: FormatSupport,
    P: PreferenceStore,
    V: FormatConverter,
    A: AttachmentSink,
{
    clipboard: C,
    support: F,
    preferences: P,
    converter: V,
    sink: A,
}

impl<C, F, P, V, A> InsertFromClipboardUseCase<C, F, P, V, A>
where
    C: ClipboardSource,
    F: FormatSupport,
    P: PreferenceStore,
    V: FormatConverter,
    A: AttachmentSink,
{
    /// Create a new use case instance
    pub fn new(clipboard: C, support: F, preferences: P, converter: V, sink: A) -> Self {
        Self {
            clipboard,
            support,
            preferences,
            converter,
            sink,
        }
    }

    /// Execute the insert workflow.
    ///
    /// Entries are handled one after another in clipboard order. The first
    /// failure stops the run; attachments added before it stay added.
    pub async fn execute(
        &self,
        input: InsertInput,
        callbacks: InsertCallbacks,
    ) -> Result<InsertOutput, InsertError> {
        let accepted = input.mode.supported_types(|ct| self.support.supports(ct));
        let entries = self.clipboard.read(&accepted).await?;

        let mut output = InsertOutput::default();
        if entries.is_empty() {
            log::info!("clipboard is empty, nothing to attach");
            return Ok(output);
        }

        log::debug!("read {} clipboard entries", entries.len());

        for (index, entry) in entries.iter().enumerate() {
            match self
                .insert_entry(index, entry.as_ref(), &input, &callbacks)
                .await?
            {
                Some(attached) => output.attached.push(attached),
                None => output.skipped += 1,
            }
        }

        Ok(output)
    }

    async fn insert_entry(
        &self,
        index: usize,
        entry: &dyn ClipboardEntry,
        input: &InsertInput,
        callbacks: &InsertCallbacks,
    ) -> Result<Option<AttachedFile>, InsertError> {
        // Fetched per entry so a preference change applies to the next one.
        let preferred = if input.mode.honors_preference() {
            self.preferred_image_format().await?
        } else {
            None
        };

        let allowed = allowed_types(input.mode.priority(), preferred.as_ref(), |ct| {
            self.support.supports(ct)
        });

        let Some(chosen) = select_type(entry.types(), &allowed, preferred.as_ref()) else {
            log::debug!("entry {} offers no types, skipping", index);
            return Ok(None);
        };

        log::debug!(
            "entry {}: offered [{}], chose {}",
            index,
            join_types(entry.types()),
            chosen
        );
        if let Some(ref cb) = callbacks.on_type_selected {
            cb(index, &chosen);
        }

        let bytes = entry.fetch(&chosen).await?;
        if bytes.is_empty() {
            log::debug!("entry {}: {} is empty, nothing to attach", index, chosen);
            return Ok(None);
        }

        let (file, converted_from) = match preferred {
            Some(target) if chosen.is_image() && target != chosen => {
                if let Some(ref cb) = callbacks.on_converting {
                    cb(&chosen, &target);
                }
                let file = self.converter.convert(bytes, &chosen, &target).await?;
                (file, Some(chosen))
            }
            _ => (OutputFile::new(chosen, bytes), None),
        };

        let receipt = self.sink.add_attachment(&input.session_id, &file).await?;

        log::info!(
            "attached {} ({}, {}) to {}",
            receipt.stored_name,
            file.content_type(),
            file.human_readable_size(),
            input.session_id
        );

        let attached = AttachedFile {
            name: receipt.stored_name,
            content_type: file.content_type().clone(),
            size: file.human_readable_size(),
            converted_from,
            location: receipt.location,
        };

        if let Some(ref cb) = callbacks.on_attached {
            cb(&attached);
        }

        Ok(Some(attached))
    }

    async fn preferred_image_format(&self) -> Result<Option<ContentType>, PreferenceError> {
        let Some(raw) = self.preferences.get(PREFERRED_IMAGE_FORMAT_KEY).await? else {
            return Ok(None);
        };

        match ContentType::parse_preferred_image(&raw) {
            Ok(ct) => Ok(Some(ct)),
            Err(e) => {
                log::warn!("ignoring {}: {}", PREFERRED_IMAGE_FORMAT_KEY, e);
                Ok(None)
            }
        }
    }
}

fn join_types(types: &[ContentType]) -> String {
    types
        .iter()
        .map(ContentType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
