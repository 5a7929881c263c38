use shared::locale::{ChoiceOption, PreorderText};
use shared::preorder::{OrderForm, PaymentField, PaymentForm, PaymentMethod, PreorderState};
use shared::validation::FieldErrors;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::field_error;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PreorderModalProps {
    pub text: PreorderText,
    pub state: PreorderState,
    pub order: OrderForm,
    pub payment: PaymentForm,
    pub errors: FieldErrors,
    pub total: f64,
    pub on_close: Callback<()>,
    pub on_proceed: Callback<()>,
    pub on_payment_method: Callback<PaymentMethod>,
    pub on_payment_input: Callback<(PaymentField, String)>,
    pub on_submit_payment: Callback<()>,
}

#[function_component(PreorderModal)]
pub fn preorder_modal(props: &PreorderModalProps) -> Html {
    let text = &props.text;

    let title = match props.state {
        PreorderState::Editing => return html! {},
        PreorderState::Review => text.confirm_order.clone(),
        PreorderState::Payment => text.payment.clone(),
        PreorderState::Success { paid_online: true } => text.success.clone(),
        PreorderState::Success { paid_online: false } => text.success_in_branch.clone(),
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match props.state {
        PreorderState::Review => review(props, close.clone()),
        PreorderState::Payment => payment(props),
        PreorderState::Success { paid_online } => success(props, paid_online, close.clone()),
        PreorderState::Editing => html! {},
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_CARD}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class={styles::TEXT_H3}>{ title }</h3>
                    <button type="button" class="text-gray-500 hover:text-gray-800" onclick={close}>
                        { "✕" }
                    </button>
                </div>
                { body }
            </div>
        </div>
    }
}

fn summary_line(label: &str, value: String) -> Html {
    html! {
        <p class="mb-1">
            <strong>{ format!("{}: ", label) }</strong>
            { value }
        </p>
    }
}

fn review(props: &PreorderModalProps, on_edit: Callback<MouseEvent>) -> Html {
    let text = &props.text;
    let order = &props.order;
    let dash = || "-".to_string();

    let proceed = {
        let on_proceed = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| on_proceed.emit(()))
    };

    let instructions = if order.special_instructions.is_empty() {
        text.none.clone()
    } else {
        order.special_instructions.clone()
    };
    let delivery = if order.delivery {
        format!("{} ({})", text.yes, order.delivery_address)
    } else {
        text.no.clone()
    };

    html! {
        <div>
            <h4 class={styles::TEXT_SECTION}>{ text.order_summary.clone() }</h4>
            { summary_line(&text.meat_type, text.meat_label(&order.meat_type).map(str::to_string).unwrap_or_else(dash)) }
            { summary_line(&text.cut_type, ChoiceOption::find(&text.cut_options, &order.cut_type).map(str::to_string).unwrap_or_else(dash)) }
            { summary_line(&text.special_instructions, instructions) }
            { summary_line(&text.spice, text.spice_label(&order.spice).map(str::to_string).unwrap_or_else(dash)) }
            { summary_line(&text.udhiya_timing, ChoiceOption::find(&text.timing_options, &order.udhiya_timing).map(str::to_string).unwrap_or_else(dash)) }
            { summary_line(&text.delivery, delivery) }
            <p class={styles::TEXT_TOTAL}>
                { format!("{}: {:.2} {}", text.total, props.total, text.currency) }
            </p>
            <div class="flex justify-end gap-4 mt-4">
                <button type="button" class={styles::BUTTON_SECONDARY} onclick={on_edit}>
                    { text.edit.clone() }
                </button>
                <button type="button" class={styles::BUTTON_PRIMARY} onclick={proceed}>
                    { text.proceed_to_payment.clone() }
                </button>
            </div>
        </div>
    }
}

fn payment(props: &PreorderModalProps) -> Html {
    let text = &props.text;
    let form = &props.payment;

    let onsubmit = {
        let on_submit = props.on_submit_payment.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let input_row = |field: PaymentField, input_type: &'static str, label: String| {
        let error = props.errors.contains_key(field.key());
        let oninput = {
            let on_input = props.on_payment_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((field, input.value()));
            })
        };
        html! {
            <div class={styles::FORM_ROW} key={field.key()}>
                <label class={styles::TEXT_LABEL}>{ label }</label>
                <input
                    type={input_type}
                    name={field.key()}
                    value={form.get(field).to_string()}
                    class={if error { styles::INPUT_ERROR } else { styles::INPUT }}
                    {oninput}
                />
                { field_error(&props.errors, field.key()) }
            </div>
        }
    };

    let method_radio = |method: PaymentMethod, label: String| {
        let onclick = {
            let on_method = props.on_payment_method.clone();
            Callback::from(move |_: MouseEvent| on_method.emit(method))
        };
        html! {
            <label class="flex items-center gap-2">
                <input
                    type="radio"
                    name="paymentMethod"
                    checked={form.payment_method == Some(method)}
                    {onclick}
                />
                { label }
            </label>
        }
    };

    let on_branch = {
        let on_input = props.on_payment_input.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_input.emit((PaymentField::Branch, select.value()));
            }
        })
    };

    let method_details = match form.payment_method {
        Some(PaymentMethod::InBranch) => html! {
            <div class={styles::FORM_ROW}>
                <label class={styles::TEXT_LABEL}>{ text.branch.clone() }</label>
                <select class={styles::INPUT} onchange={on_branch}>
                    <option value="" selected={form.branch.is_empty()}>{ text.branch.clone() }</option>
                    { for text.locations.iter().map(|location| html! {
                        <option
                            key={location.name.clone()}
                            value={location.name.clone()}
                            selected={form.branch == location.name}
                        >
                            { location.name.clone() }
                        </option>
                    }) }
                </select>
                { field_error(&props.errors, PaymentField::Branch.key()) }
            </div>
        },
        Some(PaymentMethod::Online) => html! {
            <div>
                <h4 class={styles::TEXT_SECTION}>{ text.card_details.clone() }</h4>
                { input_row(PaymentField::CardHolder, "text", text.card_holder.clone()) }
                { input_row(PaymentField::CardNumber, "text", text.card_number.clone()) }
                <div class="grid grid-cols-2 gap-4">
                    { input_row(PaymentField::Expiry, "text", text.expiry.clone()) }
                    { input_row(PaymentField::Cvv, "text", text.cvv.clone()) }
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <form {onsubmit} novalidate=true>
            <h4 class={styles::TEXT_SECTION}>{ text.customer_info.clone() }</h4>
            { input_row(PaymentField::Name, "text", text.name.clone()) }
            { input_row(PaymentField::Email, "email", text.email.clone()) }
            { input_row(PaymentField::Phone, "tel", text.phone.clone()) }

            <h4 class={styles::TEXT_SECTION}>{ text.payment.clone() }</h4>
            <div class="flex flex-col gap-2 mb-4">
                { method_radio(PaymentMethod::Online, text.payment_options.online.clone()) }
                { method_radio(PaymentMethod::InBranch, text.payment_options.in_branch.clone()) }
                { field_error(&props.errors, "paymentMethod") }
            </div>
            { method_details }

            <p class={styles::TEXT_TOTAL}>
                { format!("{}: {:.2} {}", text.total, props.total, text.currency) }
            </p>
            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full", "mt-4")}>
                { text.confirm_payment.clone() }
            </button>
        </form>
    }
}

fn success(props: &PreorderModalProps, paid_online: bool, on_close: Callback<MouseEvent>) -> Html {
    let text = &props.text;
    let receipt = if paid_online {
        format!("{} {}", text.paid_with_card, props.payment.card_last_four())
    } else {
        format!("{} {}", text.pay_at_branch, props.payment.branch)
    };

    html! {
        <div class="text-center">
            <p class={styles::TEXT_SUCCESS}>{ text.success_desc.clone() }</p>
            <p class="text-sm text-gray-600 mt-2">{ receipt }</p>
            <button type="button" class={classes!(styles::BUTTON_PRIMARY, "mt-6")} onclick={on_close}>
                { text.close.clone() }
            </button>
        </div>
    }
}
