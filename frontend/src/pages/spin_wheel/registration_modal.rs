use shared::locale::SpinWheelText;
use shared::validation::{FieldErrors, RegistrationField, RegistrationForm};
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RegistrationModalProps {
    pub text: SpinWheelText,
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    pub submitted: bool,
    pub on_input: Callback<(RegistrationField, String)>,
    pub on_cancel: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(RegistrationModal)]
pub fn registration_modal(props: &RegistrationModalProps) -> Html {
    if props.submitted {
        return html! {
            <div class={styles::MODAL_BACKDROP}>
                <div class={styles::MODAL_CARD}>
                    <p class={styles::TEXT_SUCCESS}>{ props.text.success_message.clone() }</p>
                </div>
            </div>
        };
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let labels = &props.text.form;
    let fields = [
        (RegistrationField::Name, "text", labels.name.clone(), None),
        (RegistrationField::Email, "email", labels.email.clone(), None),
        (RegistrationField::Phone, "tel", labels.phone.clone(), Some("+96898765432")),
    ];

    let rows = fields.into_iter().map(|(field, input_type, label, placeholder)| {
        let error = props.errors.get(field.key()).cloned();
        let oninput = {
            let on_input = props.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            })
        };
        let class = if error.is_some() { styles::INPUT_ERROR } else { styles::INPUT };

        html! {
            <div class={styles::FORM_ROW} key={field.key()}>
                <label class={styles::TEXT_LABEL}>{ label }</label>
                <input
                    type={input_type}
                    name={field.key()}
                    value={props.form.get(field).to_string()}
                    placeholder={placeholder}
                    {oninput}
                    class={class}
                    required=true
                />
                if let Some(message) = error {
                    <p class={styles::TEXT_ERROR}>{ message }</p>
                }
            </div>
        }
    });

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_CARD}>
                <h3 class={styles::TEXT_H3}>{ props.text.register_prize.clone() }</h3>
                <p class={styles::TEXT_HINT}>{ props.text.register_message.clone() }</p>
                <form {onsubmit} novalidate=true>
                    { for rows }
                    <div class="flex justify-end gap-4">
                        <button type="button" onclick={oncancel} class={styles::BUTTON_SECONDARY}>
                            { labels.cancel.clone() }
                        </button>
                        <button type="submit" class={styles::BUTTON_PRIMARY}>
                            { labels.submit.clone() }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
