mod registration_modal;
mod wheel_svg;
mod wheel_utils;

use shared::shared_wheel_game::WizardState;
use shared::validation::RegistrationField;
use yew::prelude::*;

use crate::hooks::{use_language, use_wheel_session};
use crate::styles;

use registration_modal::RegistrationModal;
use wheel_svg::WheelSvg;
use wheel_utils::{PrizeBanner, SpinButton};

// Gentle pulse for the prize banner
const CUSTOM_CSS: &str = r#"
@keyframes pulse-subtle {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
}

.animate-pulse-subtle {
    animation: pulse-subtle 1.5s infinite;
}
"#;

#[function_component(SpinWheel)]
pub fn spin_wheel() -> Html {
    use_effect_with((), |_| {
        let document = gloo::utils::document();
        let style = document.create_element("style").ok();
        if let (Some(style), Some(head)) = (&style, document.head()) {
            style.set_text_content(Some(CUSTOM_CSS));
            let _ = head.append_child(style);
        }

        move || {
            if let Some(style) = style {
                style.remove();
            }
        }
    });

    let language = use_language();
    let wheel = use_wheel_session(language.clone());
    let text = language.bundle().spin_wheel.clone();

    let on_spin = {
        let wheel = wheel.clone();
        Callback::from(move |_: MouseEvent| wheel.spin())
    };
    let on_open = {
        let wheel = wheel.clone();
        Callback::from(move |_: MouseEvent| wheel.open_form())
    };
    let on_input = {
        let wheel = wheel.clone();
        Callback::from(move |(field, value): (RegistrationField, String)| {
            wheel.update_field(field, value)
        })
    };
    let on_cancel = {
        let wheel = wheel.clone();
        Callback::from(move |_: ()| wheel.cancel())
    };
    let on_submit = {
        let wheel = wheel.clone();
        let messages = text.form.errors.clone();
        Callback::from(move |_: ()| wheel.submit(&messages))
    };

    let session = wheel.session();
    let session = match &*session {
        Ok(session) => session,
        Err(e) => {
            log::error!("Prize wheel disabled: {}", e);
            return html! {
                <div class={styles::PAGE}>
                    <div class={styles::CARD_ERROR}>{ text.config_error.clone() }</div>
                </div>
            };
        }
    };

    let spin = session.spin_state();
    // Render the in-flight target so the wheel eases toward it
    let rotation = spin.target_rotation.unwrap_or(spin.cumulative_rotation);
    let prize_name = session.prize().map(|p| p.name.clone());

    html! {
        <div class={styles::PAGE}>
            <WheelSvg
                config={session.config().clone()}
                rotation={rotation}
                is_spinning={spin.is_spinning}
            />

            <SpinButton
                is_spinning={spin.is_spinning}
                disabled={!session.can_spin()}
                idle_label={text.spin_now.clone()}
                spinning_label={text.spinning.clone()}
                onclick={on_spin}
            />

            if let Some(prize_name) = prize_name {
                <PrizeBanner
                    prize_name={prize_name}
                    headline={text.you_won.clone()}
                    suffix={text.won.clone()}
                    onclick={on_open}
                />
            }

            if session.is_panel_open() {
                <RegistrationModal
                    text={text.clone()}
                    form={session.form().clone()}
                    errors={session.errors().clone()}
                    submitted={session.state() == WizardState::Submitted}
                    {on_input}
                    {on_cancel}
                    {on_submit}
                />
            }
        </div>
    }
}
