//! Component state for the statement form.
//!
//! The form data itself lives in `common::form::FormState`; this struct adds
//! the pieces that only make sense in the browser: DOM refs and the resolved
//! endpoint.

use common::endpoint::Target;
use common::form::FormState;
use common::signature::SignatureSurface;
use common::submission::SubmissionPipeline;
use yew::prelude::*;

use super::props::StatementProps;
use crate::config::endpoint_config;

pub struct StatementForm {
    /// Record, attached upload and signature strokes.
    pub form: FormState<web_sys::File>,

    /// Submit state machine.
    pub pipeline: SubmissionPipeline,

    /// Reference to the live drawing `<canvas>`.
    pub canvas_ref: NodeRef,

    /// Reference to the signature file `<input>`, cleared after a successful submit.
    pub file_input_ref: NodeRef,

    /// Resolved submission target.
    pub target: Target,
}

impl StatementForm {
    pub fn new(props: &StatementProps) -> Self {
        let (width, height) = props.canvas_size;
        let endpoint = props.endpoint.clone().unwrap_or_else(endpoint_config);
        Self {
            form: FormState::new(SignatureSurface::new(width, height)),
            pipeline: SubmissionPipeline::new(),
            canvas_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            target: endpoint.resolve(),
        }
    }
}
