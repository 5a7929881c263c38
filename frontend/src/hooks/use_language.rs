use std::rc::Rc;

use shared::locale::{Bundle, LanguageContext, Translations};
use yew::prelude::*;

use crate::config::initial_locale;

/// Language state shared with every component below `LanguageProvider`.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    pub context: LanguageContext,
    translations: Rc<Translations>,
    toggle: Callback<()>,
}

impl LanguageHandle {
    pub fn bundle(&self) -> &Bundle {
        self.context.bundle(&self.translations)
    }

    pub fn toggle(&self) {
        self.toggle.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub translations: Rc<Translations>,
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let context = use_state(|| LanguageContext::new(initial_locale()));

    // Mirror direction and language onto <html> so RTL layout applies page-wide
    use_effect_with(*context, |ctx| {
        if let Some(root) = gloo::utils::document().document_element() {
            let _ = root.set_attribute("dir", ctx.dir());
            let _ = root.set_attribute("lang", ctx.lang());
        }
        || ()
    });

    let toggle = {
        let context = context.clone();
        Callback::from(move |_| {
            let mut next = *context;
            next.toggle();
            log::debug!("Language switched to {}", next.lang());
            context.set(next);
        })
    };

    let handle = LanguageHandle {
        context: *context,
        translations: props.translations.clone(),
        toggle,
    };

    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<LanguageHandle>>
    }
}

#[hook]
pub fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>().expect("use_language must be used inside LanguageProvider")
}
