use common::model::record::{Field, FieldValue, FormRecord};
use common::signature::PointerInput;
use common::submission::TransportError;

pub enum Msg {
    UpdateField(Field, FieldValue),
    StrokeBegin(PointerInput),
    StrokeMove(PointerInput),
    StrokeEnd,
    ClearSignature,
    DownloadSignature,
    FileSelected(Option<web_sys::File>),
    Submit,
    /// The uploaded file has been read; carries the record snapshot taken when
    /// the submit was accepted.
    SignatureResolved { record: FormRecord, signature: String },
    SignatureFailed(String),
    Sent(Result<(), TransportError>),
}
