//! UI-independent core of the "Surat Pernyataan" form.
//!
//! Everything the browser component needs that does not touch the DOM lives
//! here so it can be exercised by plain `cargo test`:
//!
//! - [`model`]: the form record, its wire payload and the fixed option tables.
//! - [`signature`]: the freehand signature surface and its PNG export.
//! - [`form`]: the Form State Holder owning the record, upload and surface.
//! - [`submission`]: the validate → encode → send state machine.
//! - [`endpoint`]: resolution of the script URL (direct or through the relay).
//! - [`encoding`]: data-URI helpers shared by the upload and canvas paths.

pub mod encoding;
pub mod endpoint;
pub mod form;
pub mod model;
pub mod signature;
pub mod submission;
