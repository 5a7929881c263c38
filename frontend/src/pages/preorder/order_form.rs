use shared::locale::PreorderText;
use shared::preorder::{OrderField, OrderForm};
use shared::validation::FieldErrors;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::field_error;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OrderFormProps {
    pub text: PreorderText,
    pub order: OrderForm,
    pub errors: FieldErrors,
    pub on_input: Callback<(OrderField, String)>,
    pub on_delivery: Callback<bool>,
    pub on_submit: Callback<()>,
}

#[function_component(OrderFormView)]
pub fn order_form_view(props: &OrderFormProps) -> Html {
    let text = &props.text;
    let order = &props.order;

    let choose = |field: OrderField, value: String| {
        let on_input = props.on_input.clone();
        Callback::from(move |_: MouseEvent| on_input.emit((field, value.clone())))
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let meat_cards = text.meat_options.iter().map(|meat| {
        let class = if order.meat_type == meat.value {
            styles::OPTION_CARD_SELECTED
        } else {
            styles::OPTION_CARD
        };
        html! {
            <div key={meat.value.clone()} {class} onclick={choose(OrderField::MeatType, meat.value.clone())}>
                <h4 class="text-lg font-semibold">{ meat.label.clone() }</h4>
                <p class="text-gray-700 mb-2">{ meat.desc.clone() }</p>
                <p class={styles::TEXT_PRICE}>{ format!("{} {}", meat.price, text.per_kg) }</p>
            </div>
        }
    });

    let cut_cards = text.cut_options.iter().map(|cut| {
        let class = if order.cut_type == cut.value {
            styles::OPTION_CARD_SELECTED
        } else {
            styles::OPTION_CARD
        };
        html! {
            <div key={cut.value.clone()} {class} onclick={choose(OrderField::CutType, cut.value.clone())}>
                <h4 class="text-lg font-semibold">{ cut.label.clone() }</h4>
                if let Some(desc) = cut.desc.clone() {
                    <p class="text-gray-700">{ desc }</p>
                }
            </div>
        }
    });

    let spice_radio = |value: &'static str, label: String| {
        html! {
            <label class="flex items-center gap-2">
                <input
                    type="radio"
                    name="spice"
                    value={value}
                    checked={order.spice == value}
                    onclick={choose(OrderField::Spice, value.to_string())}
                />
                { label }
            </label>
        }
    };

    let on_instructions = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit((OrderField::SpecialInstructions, input.value()));
        })
    };

    let on_timing = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                on_input.emit((OrderField::UdhiyaTiming, select.value()));
            }
        })
    };

    let on_delivery = {
        let on_delivery = props.on_delivery.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_delivery.emit(input.checked());
            }
        })
    };

    let on_address = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((OrderField::DeliveryAddress, input.value()));
        })
    };

    let address_class = if props.errors.contains_key(OrderField::DeliveryAddress.key()) {
        styles::INPUT_ERROR
    } else {
        styles::INPUT
    };

    html! {
        <form class={styles::PREORDER_FORM} {onsubmit} novalidate=true>
            <section class={styles::FORM_ROW}>
                <h3 class={styles::TEXT_SECTION}>{ text.meat_type.clone() }</h3>
                <div class="grid gap-4 sm:grid-cols-2">{ for meat_cards }</div>
                { field_error(&props.errors, OrderField::MeatType.key()) }
            </section>

            <section class={styles::FORM_ROW}>
                <h3 class={styles::TEXT_SECTION}>{ text.cut_type.clone() }</h3>
                <div class="grid gap-4 sm:grid-cols-2">{ for cut_cards }</div>
                { field_error(&props.errors, OrderField::CutType.key()) }
            </section>

            <div class={styles::FORM_ROW}>
                <label class={styles::TEXT_LABEL}>{ text.special_instructions.clone() }</label>
                <textarea
                    class={styles::INPUT}
                    rows="3"
                    value={order.special_instructions.clone()}
                    placeholder={text.special_instructions_placeholder.clone()}
                    oninput={on_instructions}
                />
            </div>

            <div class={styles::FORM_ROW}>
                <label class={styles::TEXT_LABEL}>{ text.spice.clone() }</label>
                <div class="flex flex-wrap gap-6 mt-2">
                    { spice_radio("spiced", text.spice_options.spiced.clone()) }
                    { spice_radio("unspiced", text.spice_options.unspiced.clone()) }
                </div>
                <p class="text-xs text-gray-600 mt-2">{ text.spice_options.spice_desc.clone() }</p>
                { field_error(&props.errors, OrderField::Spice.key()) }
            </div>

            <div class={styles::FORM_ROW}>
                <label class={styles::TEXT_LABEL}>{ text.udhiya_timing.clone() }</label>
                <select class={styles::INPUT} onchange={on_timing}>
                    <option value="" selected={order.udhiya_timing.is_empty()}>
                        { text.select_timing.clone() }
                    </option>
                    { for text.timing_options.iter().map(|timing| html! {
                        <option
                            key={timing.value.clone()}
                            value={timing.value.clone()}
                            selected={order.udhiya_timing == timing.value}
                        >
                            { timing.label.clone() }
                        </option>
                    }) }
                </select>
                { field_error(&props.errors, OrderField::UdhiyaTiming.key()) }
            </div>

            <div class={styles::FORM_ROW}>
                <label class="flex items-center gap-2">
                    <input type="checkbox" checked={order.delivery} onchange={on_delivery} />
                    <span class={styles::TEXT_LABEL}>{ text.delivery.clone() }</span>
                </label>
                if order.delivery {
                    <div class="mt-3">
                        <label class={styles::TEXT_LABEL}>{ text.delivery_address.clone() }</label>
                        <input
                            type="text"
                            class={address_class}
                            value={order.delivery_address.clone()}
                            oninput={on_address}
                        />
                        { field_error(&props.errors, OrderField::DeliveryAddress.key()) }
                    </div>
                }
            </div>

            <button type="submit" class={styles::BUTTON_PRIMARY}>
                { text.submit_order.clone() }
            </button>
        </form>
    }
}
