//! View rendering for the statement form.
//!
//! All inputs are controlled: their value comes from `FormState` and every
//! change is sent back as `Msg::UpdateField`. The canvas is the exception;
//! its pixels are painted directly by `canvas.rs` as strokes come in.

use common::model::options::{
    SelectOption, INSTRUKTUR, INSTRUKTUR_PLACEHOLDER, MATERI, MATERI_PLACEHOLDER,
};
use common::model::record::Field;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::canvas::{mouse_input, touch_input};
use super::helpers::field_change;
use super::messages::Msg;
use super::state::StatementForm;

pub fn view(component: &StatementForm, ctx: &Context<StatementForm>) -> Html {
    let link = ctx.link();
    let record = component.form.record();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="statement-form" {onsubmit}>
            <h2>{"Surat Pernyataan"}</h2>

            { text_input(link, Field::Nama, "text", "Nama", &record.nama) }
            { text_input(link, Field::Nrp, "text", "NRP", &record.nrp) }
            { select_input(link, Field::Materi, MATERI_PLACEHOLDER, &MATERI, &record.materi) }
            { select_input(link, Field::Instruktur, INSTRUKTUR_PLACEHOLDER, &INSTRUKTUR, &record.instruktur) }
            { text_input(link, Field::Tanggal, "date", "", &record.tanggal) }

            <label class="field-label">{"Tanda Tangan:"}</label>
            { signature_canvas(component, link) }

            {
                if record.nama.is_empty() {
                    html! {}
                } else {
                    html! { <p class="signed-by">{ format!("Tertanda: {}", record.nama) }</p> }
                }
            }

            <input
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::FileSelected(input.files().and_then(|files| files.get(0)))
                })}
            />

            <div class="signature-actions">
                <button type="button" class="link-btn clear" onclick={link.callback(|_| Msg::ClearSignature)}>
                    {"Bersihkan Tanda Tangan"}
                </button>
                <button type="button" class="link-btn download" onclick={link.callback(|_| Msg::DownloadSignature)}>
                    {"Unduh Tanda Tangan"}
                </button>
            </div>

            <label class="consent">
                <input
                    type="checkbox"
                    name={Field::Persetujuan.name()}
                    checked={record.persetujuan}
                    required=true
                    onchange={on_field_change(link)}
                />
                {" Saya menyatakan telah menerima penjelasan materi pelatihan *"}
            </label>

            <button type="submit" class="submit-btn" disabled={component.pipeline.is_busy()}>
                { if component.pipeline.is_busy() { "Mengirim..." } else { "Kirim" } }
            </button>
        </form>
    }
}

fn on_field_change(link: &Scope<StatementForm>) -> Callback<Event> {
    link.batch_callback(|e: Event| {
        field_change(&e).map(|(field, value)| Msg::UpdateField(field, value))
    })
}

fn text_input(
    link: &Scope<StatementForm>,
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let oninput = link.batch_callback(|e: InputEvent| {
        field_change(&e).map(|(field, value)| Msg::UpdateField(field, value))
    });
    html! {
        <input
            class="field"
            type={input_type}
            name={field.name()}
            placeholder={placeholder}
            value={value.to_string()}
            required=true
            {oninput}
        />
    }
}

fn select_input(
    link: &Scope<StatementForm>,
    field: Field,
    placeholder: &'static str,
    options: &[SelectOption],
    selected: &str,
) -> Html {
    let options = options
        .iter()
        .map(|(value, label)| {
            html! { <option value={*value} selected={*value == selected}>{ *label }</option> }
        })
        .collect::<Html>();

    html! {
        <select class="field" name={field.name()} required=true onchange={on_field_change(link)}>
            <option value="" selected={selected.is_empty()}>{ placeholder }</option>
            { options }
        </select>
    }
}

/// The drawing surface. Leaving the canvas or lifting the pen/finger always
/// ends the stroke so drawing never gets stuck on.
fn signature_canvas(component: &StatementForm, link: &Scope<StatementForm>) -> Html {
    let surface = component.form.surface();

    let onmousedown = link.callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::StrokeBegin(mouse_input(&e))
    });
    let onmousemove = link.callback(|e: MouseEvent| Msg::StrokeMove(mouse_input(&e)));
    let onmouseup = link.callback(|_: MouseEvent| Msg::StrokeEnd);
    let onmouseleave = link.callback(|_: MouseEvent| Msg::StrokeEnd);

    let ontouchstart = {
        let canvas_ref = component.canvas_ref.clone();
        link.batch_callback(move |e: TouchEvent| touch_input(&e, &canvas_ref).map(Msg::StrokeBegin))
    };
    let ontouchmove = {
        let canvas_ref = component.canvas_ref.clone();
        link.batch_callback(move |e: TouchEvent| touch_input(&e, &canvas_ref).map(Msg::StrokeMove))
    };
    let ontouchend = link.callback(|_: TouchEvent| Msg::StrokeEnd);
    let ontouchcancel = link.callback(|_: TouchEvent| Msg::StrokeEnd);

    html! {
        <canvas
            class="signature-canvas"
            ref={component.canvas_ref.clone()}
            width={surface.width().to_string()}
            height={surface.height().to_string()}
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
            {ontouchstart}
            {ontouchmove}
            {ontouchend}
            {ontouchcancel}
        />
    }
}
