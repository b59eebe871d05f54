//! "Surat Pernyataan" form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering and
//! browser helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `StatementProps`, `StatementForm`).
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.

use yew::prelude::*;

mod canvas;
mod helpers;
mod messages;
mod props;
mod state;
mod transport;
mod update;
mod view;

pub use messages::Msg;
pub use props::StatementProps;
pub use state::StatementForm;

impl Component for StatementForm {
    type Message = Msg;
    type Properties = StatementProps;

    fn create(ctx: &Context<Self>) -> Self {
        StatementForm::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
