//! The Form State Holder.
//!
//! One instance per form session owns the record, the optionally attached
//! upload and the signature surface. It does no validation; that happens in
//! [`crate::submission`].
//!
//! The upload type is generic so the browser can store a `web_sys::File`
//! while tests use plain byte buffers.

use crate::model::record::{Field, FieldError, FieldValue, FormRecord};
use crate::signature::{SignatureSurface, Stroke};

/// Where the signature for the next submission will come from.
#[derive(Debug, PartialEq)]
pub enum SignatureSource<'a, F> {
    /// A user-selected image file. Wins over drawn strokes.
    Uploaded(&'a F),
    /// Strokes drawn on the surface.
    Drawn(Vec<&'a Stroke>),
    None,
}

#[derive(Debug, Clone)]
pub struct FormState<F> {
    record: FormRecord,
    upload: Option<F>,
    surface: SignatureSurface,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self::new(SignatureSurface::default())
    }
}

impl<F> FormState<F> {
    pub fn new(surface: SignatureSurface) -> Self {
        Self {
            record: FormRecord::default(),
            upload: None,
            surface,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn set_field(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        self.record.set(field, value)
    }

    pub fn upload(&self) -> Option<&F> {
        self.upload.as_ref()
    }

    /// Attaches a picked file, or detaches with `None`.
    pub fn attach_upload(&mut self, upload: Option<F>) {
        self.upload = upload;
    }

    pub fn surface(&self) -> &SignatureSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut SignatureSurface {
        &mut self.surface
    }

    /// Erases drawn strokes. An attached upload stays attached.
    pub fn clear_signature(&mut self) {
        self.surface.clear();
    }

    pub fn signature_source(&self) -> SignatureSource<'_, F> {
        if let Some(upload) = &self.upload {
            return SignatureSource::Uploaded(upload);
        }
        if self.surface.is_blank() {
            SignatureSource::None
        } else {
            SignatureSource::Drawn(self.surface.visible_strokes().collect())
        }
    }

    /// Back to an empty record, no upload and a clean surface.
    pub fn reset(&mut self) {
        self.record = FormRecord::default();
        self.upload = None;
        self.surface.clear();
    }
}
