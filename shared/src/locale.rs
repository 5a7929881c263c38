use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const AR_BUNDLE: &str = include_str!("../locales/ar.json");

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

// === Bundle ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub language_toggle: String,
    pub nav: NavText,
    pub spin_wheel: SpinWheelText,
    pub preorder: PreorderText,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavText {
    pub spin_wheel: String,
    pub preorder: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpinWheelText {
    pub title: String,
    pub prizes: Vec<String>,
    pub spin_now: String,
    pub spinning: String,
    pub you_won: String,
    pub won: String,
    pub register_prize: String,
    pub register_message: String,
    pub success_message: String,
    pub config_error: String,
    pub form: RegistrationText,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationText {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cancel: String,
    pub submit: String,
    #[serde(default)]
    pub errors: RegistrationErrors,
}

/// Every message is optional; the validator falls back to the English
/// defaults in `constants` when a bundle leaves one out.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationErrors {
    pub name_required: Option<String>,
    pub email_required: Option<String>,
    pub email_invalid: Option<String>,
    pub phone_required: Option<String>,
    pub phone_invalid: Option<String>,
}

/// Copy and static catalogue for the seasonal pre-order page. Prices live
/// here with the rest of the page content.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreorderText {
    pub title: String,
    pub subtitle: String,
    pub how_to_buy: String,
    pub locations: Vec<BranchLocation>,
    pub meat_type: String,
    pub meat_options: Vec<MeatOption>,
    pub cut_type: String,
    pub cut_options: Vec<ChoiceOption>,
    pub special_instructions: String,
    pub special_instructions_placeholder: String,
    pub none: String,
    pub spice: String,
    pub spice_options: SpiceOptions,
    pub udhiya_timing: String,
    pub select_timing: String,
    pub timing_options: Vec<ChoiceOption>,
    pub delivery: String,
    pub delivery_address: String,
    pub yes: String,
    pub no: String,
    pub payment: String,
    pub payment_options: PaymentOptions,
    pub card_details: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub customer_info: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub order_summary: String,
    pub total: String,
    pub currency: String,
    pub per_kg: String,
    pub submit_order: String,
    pub proceed_to_payment: String,
    pub edit: String,
    pub confirm_order: String,
    pub confirm_payment: String,
    pub success: String,
    pub success_in_branch: String,
    pub success_desc: String,
    pub paid_with_card: String,
    pub pay_at_branch: String,
    pub close: String,
    pub errors: PreorderErrors,
}

impl PreorderText {
    /// Price per kilogram for a meat option, if the catalogue lists it.
    pub fn meat_price(&self, value: &str) -> Option<f64> {
        self.meat_options.iter().find(|m| m.value == value).map(|m| m.price)
    }

    pub fn meat_label(&self, value: &str) -> Option<&str> {
        self.meat_options.iter().find(|m| m.value == value).map(|m| m.label.as_str())
    }

    pub fn spice_label(&self, value: &str) -> Option<&str> {
        match value {
            "spiced" => Some(self.spice_options.spiced.as_str()),
            "unspiced" => Some(self.spice_options.unspiced.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BranchLocation {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub hours: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeatOption {
    pub value: String,
    pub label: String,
    pub price: f64,
    pub desc: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub desc: Option<String>,
}

impl ChoiceOption {
    pub fn find<'a>(options: &'a [ChoiceOption], value: &str) -> Option<&'a str> {
        options.iter().find(|o| o.value == value).map(|o| o.label.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpiceOptions {
    pub spiced: String,
    pub unspiced: String,
    pub spice_desc: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOptions {
    pub online: String,
    pub in_branch: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreorderErrors {
    pub required: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

// === Translations ===

/// Static locale bundles keyed by locale, looked up once per render.
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    bundles: HashMap<Locale, Bundle>,
}

impl Translations {
    /// Parses the bundles embedded in the crate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(&[(Locale::En, EN_BUNDLE), (Locale::Ar, AR_BUNDLE)])
    }

    /// Builds a translation map from raw JSON sources. Every locale in
    /// `Locale::ALL` must be present.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, ConfigError> {
        let mut bundles = HashMap::with_capacity(sources.len());
        for (locale, raw) in sources {
            let bundle: Bundle = serde_json::from_str(raw).map_err(|e| {
                log::error!("Locale bundle {} is malformed: {}", locale.code(), e);
                ConfigError::from(e)
            })?;
            bundles.insert(*locale, bundle);
        }

        for locale in Locale::ALL {
            if !bundles.contains_key(&locale) {
                log::error!("Locale bundle {} is missing", locale.code());
                return Err(ConfigError::MissingLocale(locale));
            }
        }

        Ok(Self { bundles })
    }

    pub fn bundle(&self, locale: Locale) -> &Bundle {
        // from_sources guarantees every locale is present
        &self.bundles[&locale]
    }
}

// === Session context ===

/// Per-session language state, passed explicitly to whatever needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageContext {
    pub locale: Locale,
}

impl LanguageContext {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn toggle(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn is_rtl(&self) -> bool {
        self.locale == Locale::Ar
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    pub fn lang(&self) -> &'static str {
        self.locale.code()
    }

    pub fn bundle<'a>(&self, translations: &'a Translations) -> &'a Bundle {
        translations.bundle(self.locale)
    }
}
