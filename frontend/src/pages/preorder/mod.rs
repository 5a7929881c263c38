mod order_form;
mod preorder_modal;

use shared::preorder::{OrderField, PaymentField, PaymentMethod, PreorderState};
use shared::validation::FieldErrors;
use yew::prelude::*;

use crate::hooks::{use_language, use_preorder};
use crate::styles;

use order_form::OrderFormView;
use preorder_modal::PreorderModal;

fn field_error(errors: &FieldErrors, key: &str) -> Html {
    match errors.get(key) {
        Some(message) => html! { <p class={styles::TEXT_ERROR}>{ message.clone() }</p> },
        None => html! {},
    }
}

#[function_component(Preorder)]
pub fn preorder() -> Html {
    let language = use_language();
    let preorder = use_preorder();
    let text = language.bundle().preorder.clone();

    let on_order_input = {
        let preorder = preorder.clone();
        Callback::from(move |(field, value): (OrderField, String)| {
            preorder.update_order_field(field, value)
        })
    };
    let on_delivery = {
        let preorder = preorder.clone();
        Callback::from(move |delivery: bool| preorder.set_delivery(delivery))
    };
    let on_submit_order = {
        let preorder = preorder.clone();
        let messages = text.errors.clone();
        Callback::from(move |_: ()| preorder.submit_order(&messages))
    };
    let on_proceed = {
        let preorder = preorder.clone();
        Callback::from(move |_: ()| preorder.proceed_to_payment())
    };
    let on_close = {
        let preorder = preorder.clone();
        Callback::from(move |_: ()| preorder.close())
    };
    let on_payment_method = {
        let preorder = preorder.clone();
        Callback::from(move |method: PaymentMethod| preorder.set_payment_method(method))
    };
    let on_payment_input = {
        let preorder = preorder.clone();
        Callback::from(move |(field, value): (PaymentField, String)| {
            preorder.update_payment_field(field, value)
        })
    };
    let on_submit_payment = {
        let preorder = preorder.clone();
        let messages = text.errors.clone();
        Callback::from(move |_: ()| preorder.submit_payment(&messages))
    };

    let wizard = preorder.wizard();
    let total = wizard.total(&text);

    let branches = text.locations.iter().map(|location| {
        html! {
            <div class={styles::BRANCH_CARD} key={location.name.clone()}>
                <h4 class="text-lg font-semibold text-[#8b1e2d]">{ location.name.clone() }</h4>
                <p class="text-sm text-gray-700">{ location.address.clone() }</p>
                <p class="text-sm text-gray-700" dir="ltr">{ location.contact.clone() }</p>
                <p class="text-xs text-gray-500 mt-1">{ location.hours.clone() }</p>
            </div>
        }
    });

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PREORDER_HERO}>
                <h1 class="text-3xl md:text-4xl font-bold mb-3">{ text.title.clone() }</h1>
                <p class="text-lg max-w-2xl mx-auto">{ text.subtitle.clone() }</p>
            </div>

            <section class="w-full max-w-4xl mt-8">
                <h2 class={styles::TEXT_SECTION}>{ text.how_to_buy.clone() }</h2>
                <div class="grid gap-4 md:grid-cols-3">
                    { for branches }
                </div>
            </section>

            <OrderFormView
                text={text.clone()}
                order={wizard.order().clone()}
                errors={wizard.errors().clone()}
                on_input={on_order_input}
                {on_delivery}
                on_submit={on_submit_order}
            />

            if wizard.state() != PreorderState::Editing {
                <PreorderModal
                    text={text.clone()}
                    state={wizard.state()}
                    order={wizard.order().clone()}
                    payment={wizard.payment().clone()}
                    errors={wizard.errors().clone()}
                    {total}
                    {on_close}
                    {on_proceed}
                    {on_payment_method}
                    {on_payment_input}
                    {on_submit_payment}
                />
            }
        </div>
    }
}
