use shared::locale::Locale;
use web_sys::{window, UrlSearchParams};

/// Starting language for the session. Honors `?lang=ar` / `?lang=en` and
/// falls back to English.
pub fn initial_locale() -> Locale {
    window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("lang"))
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default()
}
