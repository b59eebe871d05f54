//! Data carried by the form: the editable record, the JSON payload sent to
//! the script endpoint, and the fixed option tables for the dropdowns.

pub mod options;
pub mod payload;
pub mod record;
