pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use std::rc::Rc;

use shared::locale::Translations;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::hooks::LanguageProvider;
use crate::pages::preorder::Preorder;
use crate::pages::spin_wheel::SpinWheel;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    SpinWheel,
    #[at("/eid-al-adha")]
    Preorder,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    let translations = use_memo((), |_| Translations::load().map(Rc::new));

    let translations = match &*translations {
        Ok(translations) => translations.clone(),
        Err(e) => {
            log::error!("Failed to load translations: {}", e);
            return html! {
                <div class={styles::CONTAINER}>
                    <div class={styles::CARD_ERROR}>{ e.to_string() }</div>
                </div>
            };
        }
    };

    html! {
        <LanguageProvider translations={translations}>
            <BrowserRouter>
                <div class={styles::CONTAINER}>
                    <Header />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </LanguageProvider>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::SpinWheel | Route::NotFound => html! { <SpinWheel /> },
        Route::Preorder => html! { <Preorder /> },
    }
}
