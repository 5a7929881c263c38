use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{DELIVERY_FEE, MIN_NAME_LENGTH};
use crate::locale::{PreorderErrors, PreorderText};
use crate::validation::{validate_email, validate_phone, FieldErrors};

static CARD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{16}$").unwrap());
static EXPIRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").unwrap());
static CVV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3}$").unwrap());

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    InBranch,
    Online,
}

/// First step of the seasonal pre-order: what to prepare and how to deliver it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct OrderForm {
    pub meat_type: String,
    pub cut_type: String,
    pub special_instructions: String,
    pub spice: String,
    pub udhiya_timing: String,
    pub delivery: bool,
    pub delivery_address: String,
}

/// Second step: who is ordering and how they pay.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PaymentForm {
    pub payment_method: Option<PaymentMethod>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub card_holder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    MeatType,
    CutType,
    SpecialInstructions,
    Spice,
    UdhiyaTiming,
    DeliveryAddress,
}

impl OrderField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::MeatType => "meatType",
            Self::CutType => "cutType",
            Self::SpecialInstructions => "specialInstructions",
            Self::Spice => "spice",
            Self::UdhiyaTiming => "udhiyaTiming",
            Self::DeliveryAddress => "deliveryAddress",
        }
    }
}

impl OrderForm {
    pub fn set(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::MeatType => self.meat_type = value,
            OrderField::CutType => self.cut_type = value,
            OrderField::SpecialInstructions => self.special_instructions = value,
            OrderField::Spice => self.spice = value,
            OrderField::UdhiyaTiming => self.udhiya_timing = value,
            OrderField::DeliveryAddress => self.delivery_address = value,
        }
    }

    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::MeatType => &self.meat_type,
            OrderField::CutType => &self.cut_type,
            OrderField::SpecialInstructions => &self.special_instructions,
            OrderField::Spice => &self.spice,
            OrderField::UdhiyaTiming => &self.udhiya_timing,
            OrderField::DeliveryAddress => &self.delivery_address,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    Name,
    Email,
    Phone,
    Branch,
    CardHolder,
    CardNumber,
    Expiry,
    Cvv,
}

impl PaymentField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Branch => "branch",
            Self::CardHolder => "cardHolder",
            Self::CardNumber => "cardNumber",
            Self::Expiry => "expiry",
            Self::Cvv => "cvv",
        }
    }
}

impl PaymentForm {
    pub fn set(&mut self, field: PaymentField, value: String) {
        match field {
            PaymentField::Name => self.name = value,
            PaymentField::Email => self.email = value,
            PaymentField::Phone => self.phone = value,
            PaymentField::Branch => self.branch = value,
            PaymentField::CardHolder => self.card_holder = value,
            PaymentField::CardNumber => self.card_number = value,
            PaymentField::Expiry => self.expiry = value,
            PaymentField::Cvv => self.cvv = value,
        }
    }

    pub fn get(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::Name => &self.name,
            PaymentField::Email => &self.email,
            PaymentField::Phone => &self.phone,
            PaymentField::Branch => &self.branch,
            PaymentField::CardHolder => &self.card_holder,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::Expiry => &self.expiry,
            PaymentField::Cvv => &self.cvv,
        }
    }

    /// Last four characters of the card number, for the receipt line.
    pub fn card_last_four(&self) -> &str {
        let count = self.card_number.chars().count();
        match self.card_number.char_indices().nth(count.saturating_sub(4)) {
            Some((i, _)) => &self.card_number[i..],
            None => "",
        }
    }
}

pub fn validate_order(form: &OrderForm, messages: &PreorderErrors) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let required = [
        ("meatType", &form.meat_type),
        ("cutType", &form.cut_type),
        ("spice", &form.spice),
        ("udhiyaTiming", &form.udhiya_timing),
    ];
    for (key, value) in required {
        if value.is_empty() {
            errors.insert(key, messages.required.clone());
        }
    }
    if form.delivery && form.delivery_address.trim().is_empty() {
        errors.insert("deliveryAddress", messages.required.clone());
    }
    errors
}

pub fn validate_payment(form: &PaymentForm, messages: &PreorderErrors) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.payment_method.is_none() {
        errors.insert("paymentMethod", messages.required.clone());
    }

    if form.name.is_empty() {
        errors.insert("name", messages.required.clone());
    } else if form.name.chars().count() < MIN_NAME_LENGTH {
        errors.insert("name", messages.name.clone());
    }

    if form.email.is_empty() {
        errors.insert("email", messages.required.clone());
    } else if validate_email(&form.email).is_err() {
        errors.insert("email", messages.email.clone());
    }

    if form.phone.is_empty() {
        errors.insert("phone", messages.required.clone());
    } else if validate_phone(&form.phone).is_err() {
        errors.insert("phone", messages.phone.clone());
    }

    match form.payment_method {
        Some(PaymentMethod::InBranch) => {
            if form.branch.is_empty() {
                errors.insert("branch", messages.required.clone());
            }
        }
        Some(PaymentMethod::Online) => {
            if form.card_holder.is_empty() {
                errors.insert("cardHolder", messages.required.clone());
            } else if form.card_holder.chars().count() < MIN_NAME_LENGTH {
                errors.insert("cardHolder", messages.card_holder.clone());
            }
            if !CARD_NUMBER_RE.is_match(&form.card_number) {
                errors.insert("cardNumber", messages.card_number.clone());
            }
            if !EXPIRY_RE.is_match(&form.expiry) {
                errors.insert("expiry", messages.expiry.clone());
            }
            if !CVV_RE.is_match(&form.cvv) {
                errors.insert("cvv", messages.cvv.clone());
            }
        }
        None => {}
    }

    errors
}

/// Meat price plus the flat delivery fee when delivery is requested.
pub fn order_total(meat_price: f64, delivery: bool) -> f64 {
    let fee = if delivery { DELIVERY_FEE } else { 0.0 };
    meat_price + fee
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PreorderState {
    Editing,
    Review,
    Payment,
    Success { paid_online: bool },
}

/// Order form, review, payment, confirmation.
#[derive(Debug, Clone)]
pub struct PreorderWizard {
    order: OrderForm,
    payment: PaymentForm,
    state: PreorderState,
    errors: FieldErrors,
}

impl Default for PreorderWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl PreorderWizard {
    pub fn new() -> Self {
        Self {
            order: OrderForm::default(),
            payment: PaymentForm::default(),
            state: PreorderState::Editing,
            errors: FieldErrors::new(),
        }
    }

    pub fn state(&self) -> PreorderState {
        self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn order(&self) -> &OrderForm {
        &self.order
    }

    pub fn payment(&self) -> &PaymentForm {
        &self.payment
    }

    fn clear_error(&mut self, key: &str) {
        self.errors.remove(key);
    }

    /// Updates an order field while the order form is being edited and drops
    /// any error already shown for it.
    pub fn update_order_field(&mut self, field: OrderField, value: String) {
        if self.state != PreorderState::Editing {
            return;
        }
        self.order.set(field, value);
        self.clear_error(field.key());
    }

    pub fn set_delivery(&mut self, delivery: bool) {
        if self.state != PreorderState::Editing {
            return;
        }
        self.order.delivery = delivery;
        if !delivery {
            self.clear_error(OrderField::DeliveryAddress.key());
        }
    }

    pub fn update_payment_field(&mut self, field: PaymentField, value: String) {
        if self.state != PreorderState::Payment {
            return;
        }
        self.payment.set(field, value);
        self.clear_error(field.key());
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        if self.state != PreorderState::Payment {
            return;
        }
        self.payment.payment_method = Some(method);
        self.clear_error("paymentMethod");
    }

    /// Order total using the prices in `catalogue`. An unknown or missing
    /// meat choice counts as zero.
    pub fn total(&self, catalogue: &PreorderText) -> f64 {
        let price = catalogue.meat_price(&self.order.meat_type).unwrap_or(0.0);
        order_total(price, self.order.delivery)
    }

    pub fn submit_order(&mut self, messages: &PreorderErrors) -> bool {
        if self.state != PreorderState::Editing {
            return false;
        }
        self.errors = validate_order(&self.order, messages);
        if !self.errors.is_empty() {
            return false;
        }
        self.state = PreorderState::Review;
        true
    }

    pub fn proceed_to_payment(&mut self) -> bool {
        if self.state != PreorderState::Review {
            return false;
        }
        self.state = PreorderState::Payment;
        true
    }

    pub fn submit_payment(&mut self, messages: &PreorderErrors) -> bool {
        if self.state != PreorderState::Payment {
            return false;
        }
        self.errors = validate_payment(&self.payment, messages);
        if !self.errors.is_empty() {
            return false;
        }

        let paid_online = self.payment.payment_method == Some(PaymentMethod::Online);
        if paid_online {
            log::info!("Processing card payment for pre-order: {:?}", self.order);
        } else {
            log::info!("Recording in-branch pre-order: {:?}", self.order);
        }
        self.state = PreorderState::Success { paid_online };
        true
    }

    /// Closes whichever modal is showing. Entered data is kept so the
    /// customer can adjust and resubmit, except after a completed order,
    /// which starts a fresh one.
    pub fn close(&mut self) {
        if matches!(self.state, PreorderState::Success { .. }) {
            self.order = OrderForm::default();
            self.payment = PaymentForm::default();
        }
        self.errors.clear();
        self.state = PreorderState::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Locale, Translations};

    fn messages() -> PreorderErrors {
        Translations::load()
            .unwrap()
            .bundle(Locale::En)
            .preorder
            .errors
            .clone()
    }

    fn valid_order() -> OrderForm {
        OrderForm {
            meat_type: "lamb".to_string(),
            cut_type: "medium".to_string(),
            spice: "mild".to_string(),
            udhiya_timing: "firstDay".to_string(),
            ..Default::default()
        }
    }

    fn branch_payment() -> PaymentForm {
        PaymentForm {
            payment_method: Some(PaymentMethod::InBranch),
            name: "Salim".to_string(),
            email: "a@b.com".to_string(),
            phone: "+96812345678".to_string(),
            branch: "Muscat".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_order_requires_fields() {
        let m = messages();
        let errors = validate_order(&OrderForm::default(), &m);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["meatType"], m.required);
    }

    #[test]
    fn test_delivery_needs_address() {
        let m = messages();
        let mut order = valid_order();
        order.delivery = true;
        assert!(validate_order(&order, &m).contains_key("deliveryAddress"));
        order.delivery_address = "Al Khuwair".to_string();
        assert!(validate_order(&order, &m).is_empty());
    }

    #[test]
    fn test_online_payment_card_rules() {
        let m = messages();
        let form = PaymentForm {
            payment_method: Some(PaymentMethod::Online),
            name: "S".to_string(),
            email: "a@b.com".to_string(),
            phone: "+96812345678".to_string(),
            card_holder: "Salim".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry: "1/27".to_string(),
            cvv: "12".to_string(),
            ..Default::default()
        };
        let errors = validate_payment(&form, &m);
        assert_eq!(errors["name"], m.name);
        assert_eq!(errors["cardNumber"], m.card_number);
        assert_eq!(errors["expiry"], m.expiry);
        assert_eq!(errors["cvv"], m.cvv);
        assert!(!errors.contains_key("cardHolder"));
        assert!(!errors.contains_key("branch"));
    }

    #[test]
    fn test_branch_payment_needs_branch() {
        let m = messages();
        let mut form = branch_payment();
        assert!(validate_payment(&form, &m).is_empty());
        form.branch.clear();
        assert_eq!(validate_payment(&form, &m)["branch"], m.required);
    }

    #[test]
    fn test_order_total() {
        assert_eq!(order_total(95.0, false), 95.0);
        assert_eq!(order_total(95.0, true), 97.0);
    }

    #[test]
    fn test_wizard_flow() {
        let m = messages();
        let mut wizard = PreorderWizard::new();

        assert!(!wizard.submit_order(&m));
        assert_eq!(wizard.state(), PreorderState::Editing);
        assert!(!wizard.errors().is_empty());

        wizard.order = valid_order();
        assert!(wizard.submit_order(&m));
        assert_eq!(wizard.state(), PreorderState::Review);

        assert!(wizard.proceed_to_payment());
        assert!(!wizard.submit_payment(&m));
        assert_eq!(wizard.state(), PreorderState::Payment);

        wizard.payment = branch_payment();
        assert!(wizard.submit_payment(&m));
        assert_eq!(wizard.state(), PreorderState::Success { paid_online: false });

        // a finished order starts over from a blank form
        wizard.close();
        assert_eq!(wizard.state(), PreorderState::Editing);
        assert_eq!(wizard.order(), &OrderForm::default());
        assert_eq!(wizard.payment(), &PaymentForm::default());
    }

    #[test]
    fn test_closing_review_keeps_order() {
        let m = messages();
        let mut wizard = PreorderWizard::new();
        wizard.order = valid_order();
        assert!(wizard.submit_order(&m));

        wizard.close();
        assert_eq!(wizard.state(), PreorderState::Editing);
        assert_eq!(wizard.order(), &valid_order());
    }

    #[test]
    fn test_typing_clears_only_that_fields_error() {
        let m = messages();
        let mut wizard = PreorderWizard::new();
        wizard.set_delivery(true);
        assert!(!wizard.submit_order(&m));
        assert!(wizard.errors().contains_key("meatType"));
        assert!(wizard.errors().contains_key("deliveryAddress"));

        wizard.update_order_field(OrderField::MeatType, "lamb".to_string());
        assert_eq!(wizard.order().meat_type, "lamb");
        assert!(!wizard.errors().contains_key("meatType"));
        assert!(wizard.errors().contains_key("cutType"));

        wizard.set_delivery(false);
        assert!(!wizard.errors().contains_key("deliveryAddress"));
    }

    #[test]
    fn test_payment_edits_clear_errors() {
        let m = messages();
        let mut wizard = PreorderWizard::new();
        wizard.order = valid_order();
        wizard.submit_order(&m);
        wizard.proceed_to_payment();
        assert!(!wizard.submit_payment(&m));
        assert!(wizard.errors().contains_key("paymentMethod"));
        assert!(wizard.errors().contains_key("email"));

        wizard.set_payment_method(PaymentMethod::Online);
        wizard.update_payment_field(PaymentField::Email, "a@b.com".to_string());
        assert!(!wizard.errors().contains_key("paymentMethod"));
        assert!(!wizard.errors().contains_key("email"));
        assert!(wizard.errors().contains_key("phone"));
        assert_eq!(wizard.payment().get(PaymentField::Email), "a@b.com");
    }

    #[test]
    fn test_fields_are_locked_outside_their_step() {
        let m = messages();
        let mut wizard = PreorderWizard::new();
        wizard.update_payment_field(PaymentField::Name, "Salim".to_string());
        assert!(wizard.payment().name.is_empty());

        wizard.order = valid_order();
        wizard.submit_order(&m);
        wizard.update_order_field(OrderField::MeatType, "goat".to_string());
        assert_eq!(wizard.order().meat_type, "lamb");
    }

    #[test]
    fn test_total_uses_catalogue_prices() {
        let translations = Translations::load().unwrap();
        let catalogue = &translations.bundle(Locale::En).preorder;
        let mut wizard = PreorderWizard::new();
        assert_eq!(wizard.total(catalogue), 0.0);

        wizard.update_order_field(OrderField::MeatType, "lamb".to_string());
        assert_eq!(wizard.total(catalogue), 8.5);
        wizard.set_delivery(true);
        assert_eq!(wizard.total(catalogue), 10.5);
    }

    #[test]
    fn test_card_fields_reject_arabic_indic_digits() {
        let m = messages();
        let form = PaymentForm {
            card_number: "٤١١١١١١١١١١١١١١١".to_string(),
            expiry: "١٢/٢٧".to_string(),
            cvv: "١٢٣".to_string(),
            card_holder: "Salim".to_string(),
            payment_method: Some(PaymentMethod::Online),
            ..branch_payment()
        };
        let errors = validate_payment(&form, &m);
        assert_eq!(errors["cardNumber"], m.card_number);
        assert_eq!(errors["expiry"], m.expiry);
        assert_eq!(errors["cvv"], m.cvv);

        let mut payment = branch_payment();
        payment.phone = "+٩٦٨١٢٣٤٥٦٧٨".to_string();
        assert_eq!(validate_payment(&payment, &m)["phone"], m.phone);
    }

    #[test]
    fn test_card_last_four() {
        let mut form = PaymentForm::default();
        assert_eq!(form.card_last_four(), "");
        form.card_number = "4111111111111234".to_string();
        assert_eq!(form.card_last_four(), "1234");
        form.card_number = "12".to_string();
        assert_eq!(form.card_last_four(), "12");
    }

    #[test]
    fn test_payment_out_of_order_is_rejected() {
        let m = messages();
        let mut wizard = PreorderWizard::new();
        wizard.payment = branch_payment();
        assert!(!wizard.proceed_to_payment());
        assert!(!wizard.submit_payment(&m));
        assert_eq!(wizard.state(), PreorderState::Editing);
    }
}
