use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_language;
use crate::styles;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let language = use_language();
    let bundle = language.bundle();

    let on_toggle = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.toggle())
    };

    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                <div class={styles::NAV_CONTENT}>
                    <span class={styles::NAV_BRAND}>{ bundle.spin_wheel.title.clone() }</span>
                    <div class={styles::NAV_LINKS}>
                        <Link<Route> to={Route::SpinWheel} classes={styles::NAV_LINK}>
                            { bundle.nav.spin_wheel.clone() }
                        </Link<Route>>
                        <Link<Route> to={Route::Preorder} classes={styles::NAV_LINK}>
                            { bundle.nav.preorder.clone() }
                        </Link<Route>>
                    </div>
                    <button class={styles::BUTTON_LANGUAGE} onclick={on_toggle}>
                        { bundle.language_toggle.clone() }
                    </button>
                </div>
            </div>
        </nav>
    }
}
