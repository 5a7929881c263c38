use std::cell::{Ref, RefCell};
use std::rc::Rc;

use shared::locale::PreorderErrors;
use shared::preorder::{OrderField, PaymentField, PaymentMethod, PreorderWizard};
use yew::prelude::*;

/// Owns the page's `PreorderWizard`; every edit re-renders the page.
#[derive(Clone)]
pub struct PreorderHandle {
    wizard: Rc<RefCell<PreorderWizard>>,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for PreorderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.wizard, &other.wizard)
    }
}

impl PreorderHandle {
    pub fn wizard(&self) -> Ref<'_, PreorderWizard> {
        self.wizard.borrow()
    }

    fn update<R>(&self, f: impl FnOnce(&mut PreorderWizard) -> R) -> R {
        let result = f(&mut self.wizard.borrow_mut());
        self.refresh.force_update();
        result
    }

    pub fn update_order_field(&self, field: OrderField, value: String) {
        self.update(|w| w.update_order_field(field, value));
    }

    pub fn set_delivery(&self, delivery: bool) {
        self.update(|w| w.set_delivery(delivery));
    }

    pub fn submit_order(&self, messages: &PreorderErrors) {
        if !self.update(|w| w.submit_order(messages)) {
            log::debug!("Pre-order form has errors");
        }
    }

    pub fn proceed_to_payment(&self) {
        self.update(|w| w.proceed_to_payment());
    }

    pub fn set_payment_method(&self, method: PaymentMethod) {
        self.update(|w| w.set_payment_method(method));
    }

    pub fn update_payment_field(&self, field: PaymentField, value: String) {
        self.update(|w| w.update_payment_field(field, value));
    }

    pub fn submit_payment(&self, messages: &PreorderErrors) {
        if !self.update(|w| w.submit_payment(messages)) {
            log::debug!("Pre-order payment has errors");
        }
    }

    pub fn close(&self) {
        self.update(|w| w.close());
    }
}

#[hook]
pub fn use_preorder() -> PreorderHandle {
    let wizard = use_mut_ref(PreorderWizard::new);
    let refresh = use_force_update();
    PreorderHandle { wizard, refresh }
}
