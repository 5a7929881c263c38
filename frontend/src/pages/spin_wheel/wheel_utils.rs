use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub idle_label: String,
    pub spinning_label: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.is_spinning {
        props.spinning_label.clone()
    } else {
        props.idle_label.clone()
    };

    let class = if props.disabled {
        styles::BUTTON_SPIN_DISABLED
    } else {
        styles::BUTTON_SPIN
    };

    html! {
        <button onclick={props.onclick.clone()} disabled={props.disabled} class={class}>
            { label }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeBannerProps {
    pub prize_name: String,
    pub headline: String,
    pub suffix: String,
    pub onclick: Callback<MouseEvent>,
}

/// Announces the prize; clicking it opens the registration panel.
#[function_component(PrizeBanner)]
pub fn prize_banner(props: &PrizeBannerProps) -> Html {
    html! {
        <div class={styles::PRIZE_BANNER} onclick={props.onclick.clone()}>
            <div class="text-center">
                <h3 class="text-xl sm:text-2xl font-bold mb-2">{ props.headline.clone() }</h3>
                <p class="text-lg sm:text-xl font-semibold">
                    <span class="text-[#A5C93D]">{ props.prize_name.clone() }</span>
                    { " " }
                    { props.suffix.clone() }
                </p>
            </div>
        </div>
    }
}
