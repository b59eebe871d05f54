//! Defines the properties for the `StatementForm` component.

use common::endpoint::EndpointConfig;
use yew::prelude::*;

/// Properties for the `StatementForm` component.
#[derive(Properties, PartialEq, Clone)]
pub struct StatementProps {
    /// Where submissions go. `None` (the default) uses the build-time
    /// configuration from `crate::config`.
    #[prop_or_default]
    pub endpoint: Option<EndpointConfig>,

    /// Size of the signature canvas in pixels, `(width, height)`.
    #[prop_or((common::signature::DEFAULT_WIDTH, common::signature::DEFAULT_HEIGHT))]
    pub canvas_size: (u32, u32),
}
