//! The Submission Pipeline.
//!
//! `Idle → Validating → Encoding → Sending → {Succeeded, Failed} → Idle`
//!
//! The browser drives the pipeline from its message loop, so every step is a
//! synchronous transition and the two suspension points (reading an uploaded
//! file, posting the payload) happen between calls:
//!
//! 1. [`SubmissionPipeline::begin`] validates the record and resolves the
//!    signature. Drawn signatures are exported right away; uploads come back
//!    as [`PendingSignature::Upload`] for the caller to read.
//! 2. [`SubmissionPipeline::send`] builds the payload from the snapshot taken
//!    in step 1.
//! 3. [`SubmissionPipeline::finish`] reports the transport outcome and resets
//!    the form on success.
//!
//! Any error before step 3 leaves the form untouched and no request is made.

use std::fmt::Display;

use log::{debug, warn};
use thiserror::Error;

use crate::form::{FormState, SignatureSource};
use crate::model::payload::SubmissionPayload;
use crate::model::record::{Field, FormRecord};

pub const SUCCESS_MESSAGE: &str = "Data berhasil dikirim!";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Anda harus menyetujui pernyataan")]
    MissingConsent,
    #[error("Harap lengkapi semua field wajib ({})", .0.label())]
    MissingField(Field),
    #[error("Harap berikan tanda tangan")]
    MissingSignature,
}

/// The request never completed: network unreachable, blocked, aborted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Gagal memproses tanda tangan: {0}")]
    Encoding(String),
    #[error("Terjadi kesalahan: {0}")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Validation problems must be acknowledged before the user goes on; the
    /// rest are reported in passing.
    pub fn is_blocking(&self) -> bool {
        matches!(self, SubmitError::Validation(_))
    }
}

/// User-visible outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

impl From<&SubmitError> for Notification {
    fn from(error: &SubmitError) -> Self {
        Notification::Error(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Encoding,
    Sending,
    Succeeded,
    Failed,
}

/// Signature as resolved by [`SubmissionPipeline::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingSignature<F> {
    /// Uploaded file still to be read and encoded by the caller.
    Upload(F),
    /// Already encoded data URI.
    Ready(String),
}

/// A submit attempt that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted<F> {
    pub record: FormRecord,
    pub signature: PendingSignature<F>,
}

/// Consent first, then the text fields in form order.
pub fn validate(record: &FormRecord) -> Result<(), ValidationError> {
    if !record.persetujuan {
        return Err(ValidationError::MissingConsent);
    }
    match record.first_missing() {
        Some(field) => Err(ValidationError::MissingField(field)),
        None => Ok(()),
    }
}

#[derive(Debug, Default)]
pub struct SubmissionPipeline {
    phase: Phase,
    last_outcome: Option<Phase>,
}

impl SubmissionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Succeeded` or `Failed` for the most recent attempt that reached the
    /// network; `None` before the first one.
    pub fn last_outcome(&self) -> Option<Phase> {
        self.last_outcome
    }

    /// A request is being prepared or is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::Validating | Phase::Encoding | Phase::Sending
        )
    }

    /// Validates the form and resolves its signature.
    ///
    /// The record is snapshotted here; edits made while an upload is being
    /// read do not reach this attempt's payload.
    pub fn begin<F: Clone>(&mut self, form: &FormState<F>) -> Result<Accepted<F>, SubmitError> {
        self.transition(Phase::Validating);
        if let Err(error) = validate(form.record()) {
            return Err(self.abort(error.into()));
        }

        self.transition(Phase::Encoding);
        let signature = match form.signature_source() {
            SignatureSource::Uploaded(file) => PendingSignature::Upload(file.clone()),
            SignatureSource::Drawn(_) => match form.surface().export() {
                Ok(uri) => PendingSignature::Ready(uri),
                Err(error) => return Err(self.abort(SubmitError::Encoding(error.to_string()))),
            },
            SignatureSource::None => {
                return Err(self.abort(ValidationError::MissingSignature.into()));
            }
        };

        Ok(Accepted {
            record: form.record().clone(),
            signature,
        })
    }

    /// Reading or encoding the uploaded file failed.
    pub fn encoding_failed(&mut self, reason: impl Display) -> Notification {
        let error = self.abort(SubmitError::Encoding(reason.to_string()));
        Notification::from(&error)
    }

    /// Builds the payload for the single outbound request.
    pub fn send(
        &mut self,
        record: FormRecord,
        signature: String,
        timestamp: String,
    ) -> SubmissionPayload {
        self.transition(Phase::Sending);
        SubmissionPayload::new(record, signature, timestamp)
    }

    /// Applies the transport outcome. Success resets `form`; a failure leaves
    /// it exactly as it was so the user can resubmit. Either way the pipeline
    /// ends up back in `Idle`.
    pub fn finish<F>(
        &mut self,
        outcome: Result<(), TransportError>,
        form: &mut FormState<F>,
    ) -> Notification {
        let notification = match outcome {
            Ok(()) => {
                self.transition(Phase::Succeeded);
                form.reset();
                Notification::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(error) => {
                warn!("submission failed: {}", error);
                self.transition(Phase::Failed);
                Notification::from(&SubmitError::Transport(error))
            }
        };
        self.last_outcome = Some(self.phase);
        self.transition(Phase::Idle);
        notification
    }

    fn abort(&mut self, error: SubmitError) -> SubmitError {
        debug!("submission rejected: {}", error);
        self.transition(Phase::Idle);
        error
    }

    fn transition(&mut self, next: Phase) {
        debug!("submission phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::to_data_uri;
    use crate::model::record::{FieldValue, REQUIRED_TEXT_FIELDS};
    use crate::signature::{Point, SignatureSurface};

    /// Stand-in for the network: counts requests and answers with `outcome`.
    struct FakeTransport {
        requests: Vec<SubmissionPayload>,
        outcome: Result<(), TransportError>,
    }

    impl FakeTransport {
        fn reachable() -> Self {
            Self {
                requests: Vec::new(),
                outcome: Ok(()),
            }
        }

        fn unreachable() -> Self {
            Self {
                requests: Vec::new(),
                outcome: Err(TransportError("Failed to fetch".into())),
            }
        }

        fn post(&mut self, payload: SubmissionPayload) -> Result<(), TransportError> {
            self.requests.push(payload);
            self.outcome.clone()
        }
    }

    /// Drives one submit attempt the way the browser component does.
    fn submit(
        pipeline: &mut SubmissionPipeline,
        form: &mut FormState<(String, Vec<u8>)>,
        transport: &mut FakeTransport,
    ) -> Result<Notification, SubmitError> {
        let accepted = pipeline.begin(form)?;
        let signature = match accepted.signature {
            PendingSignature::Ready(uri) => uri,
            PendingSignature::Upload((mime, bytes)) => to_data_uri(&mime, &bytes),
        };
        let payload = pipeline.send(accepted.record, signature, "2024-05-02T03:04:05.000Z".into());
        let outcome = transport.post(payload);
        Ok(pipeline.finish(outcome, form))
    }

    fn filled_form() -> FormState<(String, Vec<u8>)> {
        let mut form = FormState::default();
        for (field, value) in [
            (Field::Nama, "Budi"),
            (Field::Nrp, "12345"),
            (Field::Materi, "Pilihan 3"),
            (Field::Instruktur, "Nama 7"),
            (Field::Tanggal, "2024-05-02"),
        ] {
            form.set_field(field, FieldValue::Text(value.into())).unwrap();
        }
        form.set_field(Field::Persetujuan, FieldValue::Flag(true)).unwrap();
        form
    }

    fn scribble(surface: &mut SignatureSurface) {
        surface.begin_stroke(Point::new(15.0, 50.0));
        surface.extend_stroke(Point::new(120.0, 30.0));
        surface.extend_stroke(Point::new(260.0, 70.0));
        surface.end_stroke();
    }

    #[test]
    fn drawn_signature_submits_and_resets_the_form() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        scribble(form.surface_mut());
        let expected_signature = form.surface().export().unwrap();
        let mut transport = FakeTransport::reachable();

        let notification = submit(&mut pipeline, &mut form, &mut transport).unwrap();

        assert_eq!(notification, Notification::Success(SUCCESS_MESSAGE.into()));
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert_eq!(pipeline.last_outcome(), Some(Phase::Succeeded));
        assert!(!pipeline.is_busy());
        assert_eq!(transport.requests.len(), 1);
        assert_eq!(transport.requests[0].signature(), expected_signature);
        assert_eq!(transport.requests[0].record().nama, "Budi");

        assert_eq!(form.record(), &FormRecord::default());
        assert!(form.upload().is_none());
        assert!(form.surface().is_blank());
        assert_eq!(form.signature_source(), SignatureSource::None);
    }

    #[test]
    fn missing_consent_blocks_before_any_request() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        form.set_field(Field::Persetujuan, FieldValue::Flag(false)).unwrap();
        scribble(form.surface_mut());
        let mut transport = FakeTransport::reachable();

        let error = submit(&mut pipeline, &mut form, &mut transport).unwrap_err();

        assert_eq!(error, SubmitError::Validation(ValidationError::MissingConsent));
        assert_eq!(error.to_string(), "Anda harus menyetujui pernyataan");
        assert!(transport.requests.is_empty());
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert!(!form.surface().is_blank());
    }

    #[test]
    fn consent_is_checked_even_when_everything_else_is_empty() {
        let form = FormState::<()>::default();
        let error = SubmissionPipeline::new().begin(&form).unwrap_err();
        assert_eq!(error, SubmitError::Validation(ValidationError::MissingConsent));
    }

    #[test]
    fn every_missing_field_is_rejected_before_any_request() {
        for missing in REQUIRED_TEXT_FIELDS {
            let mut pipeline = SubmissionPipeline::new();
            let mut form = filled_form();
            form.set_field(missing, FieldValue::Text(String::new())).unwrap();
            scribble(form.surface_mut());
            let snapshot = form.record().clone();
            let mut transport = FakeTransport::reachable();

            let error = submit(&mut pipeline, &mut form, &mut transport).unwrap_err();

            assert_eq!(
                error,
                SubmitError::Validation(ValidationError::MissingField(missing))
            );
            assert!(transport.requests.is_empty(), "{missing:?} reached the network");
            assert_eq!(form.record(), &snapshot);
        }
    }

    #[test]
    fn only_validation_errors_block() {
        for error in [
            ValidationError::MissingConsent,
            ValidationError::MissingField(Field::Tanggal),
            ValidationError::MissingSignature,
        ] {
            assert!(SubmitError::from(error).is_blocking());
        }
        assert!(!SubmitError::Encoding("bad file".into()).is_blocking());
        assert!(!SubmitError::from(TransportError("Failed to fetch".into())).is_blocking());
    }

    #[test]
    fn rejection_from_begin_is_blocking() {
        let error = SubmissionPipeline::new()
            .begin(&FormState::<()>::default())
            .unwrap_err();
        assert!(error.is_blocking());
    }

    #[test]
    fn blank_surface_without_upload_is_missing_signature() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        let mut transport = FakeTransport::reachable();

        let error = submit(&mut pipeline, &mut form, &mut transport).unwrap_err();

        assert_eq!(error, SubmitError::Validation(ValidationError::MissingSignature));
        assert!(transport.requests.is_empty());
        assert_eq!(pipeline.phase(), Phase::Idle);
    }

    #[test]
    fn upload_only_submits_the_file_encoding() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        form.attach_upload(Some(("image/jpeg".into(), vec![0xff, 0xd8, 0xff])));
        let mut transport = FakeTransport::reachable();

        submit(&mut pipeline, &mut form, &mut transport).unwrap();

        assert_eq!(transport.requests[0].signature(), "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn upload_wins_over_drawn_strokes() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        scribble(form.surface_mut());
        form.attach_upload(Some(("image/png".into(), vec![1, 2, 3])));

        let accepted = pipeline.begin(&form).unwrap();

        assert_eq!(
            accepted.signature,
            PendingSignature::Upload(("image/png".to_string(), vec![1, 2, 3]))
        );
        assert_eq!(pipeline.phase(), Phase::Encoding);
        assert!(pipeline.is_busy());
    }

    #[test]
    fn transport_failure_keeps_the_form_for_retry() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        scribble(form.surface_mut());
        form.attach_upload(Some(("image/png".into(), vec![9])));
        let record = form.record().clone();
        let surface = form.surface().clone();
        let mut transport = FakeTransport::unreachable();

        let notification = submit(&mut pipeline, &mut form, &mut transport).unwrap();

        assert_eq!(
            notification,
            Notification::Error("Terjadi kesalahan: Failed to fetch".into())
        );
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert_eq!(pipeline.last_outcome(), Some(Phase::Failed));
        assert_eq!(transport.requests.len(), 1);
        assert_eq!(form.record(), &record);
        assert_eq!(form.surface(), &surface);
        assert_eq!(form.upload(), Some(&("image/png".to_string(), vec![9])));

        let mut transport = FakeTransport::reachable();
        submit(&mut pipeline, &mut form, &mut transport).unwrap();
        assert_eq!(transport.requests.len(), 1);
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert_eq!(pipeline.last_outcome(), Some(Phase::Succeeded));
    }

    #[test]
    fn payload_uses_the_snapshot_taken_at_validation() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        form.attach_upload(Some(("image/png".into(), vec![1])));

        let accepted = pipeline.begin(&form).unwrap();
        form.set_field(Field::Nama, FieldValue::Text("Edited".into())).unwrap();
        let payload = pipeline.send(accepted.record, "data:image/png;base64,AQ==".into(), "t".into());

        assert_eq!(payload.record().nama, "Budi");
        assert_eq!(pipeline.phase(), Phase::Sending);
    }

    #[test]
    fn encoding_failure_returns_to_idle_with_form_intact() {
        let mut pipeline = SubmissionPipeline::new();
        let mut form = filled_form();
        form.attach_upload(Some(("image/png".into(), vec![1])));
        let record = form.record().clone();

        pipeline.begin(&form).unwrap();
        let notification = pipeline.encoding_failed("file unreadable");

        assert!(notification.is_error());
        assert_eq!(notification.message(), "Gagal memproses tanda tangan: file unreadable");
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert_eq!(form.record(), &record);
    }
}
