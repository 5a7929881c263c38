use std::cell::{Ref, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::error::ConfigError;
use shared::locale::RegistrationErrors;
use shared::shared_wheel_game::{SubmitOutcome, WheelSession};
use shared::validation::RegistrationField;
use yew::prelude::*;

use super::use_language::LanguageHandle;

type SessionCell = Rc<RefCell<Result<WheelSession, ConfigError>>>;

/// Owns the page's `WheelSession` and drives its two timed transitions.
#[derive(Clone)]
pub struct WheelSessionHandle {
    session: SessionCell,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for WheelSessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}

impl WheelSessionHandle {
    pub fn session(&self) -> Ref<'_, Result<WheelSession, ConfigError>> {
        self.session.borrow()
    }

    fn update<R>(&self, f: impl FnOnce(&mut WheelSession) -> R) -> Option<R> {
        let result = match &mut *self.session.borrow_mut() {
            Ok(session) => Some(f(session)),
            Err(_) => None,
        };
        self.refresh.force_update();
        result
    }

    /// Starts a spin and schedules its resolution once the animation ends.
    /// A spin in flight always resolves, so the timer is never cancelled.
    pub fn spin(&self) {
        let ticket = self
            .update(|s| s.spin(&mut rand::thread_rng()))
            .flatten();

        if let Some(ticket) = ticket {
            let handle = self.clone();
            Timeout::new(ticket.duration_ms, move || {
                handle.update(|s| {
                    s.complete_spin();
                });
            })
            .forget();
        }
    }

    pub fn open_form(&self) {
        self.update(|s| s.open_form());
    }

    pub fn cancel(&self) {
        self.update(|s| s.cancel());
    }

    pub fn update_field(&self, field: RegistrationField, value: String) {
        self.update(|s| s.update_field(field, value));
    }

    pub fn submit(&self, messages: &RegistrationErrors) {
        let outcome = self.update(|s| s.submit(messages));

        if let Some(SubmitOutcome::Accepted { display_ms }) = outcome {
            let handle = self.clone();
            Timeout::new(display_ms, move || {
                handle.update(|s| s.finish_submission());
            })
            .forget();
        }
    }
}

#[hook]
pub fn use_wheel_session(language: LanguageHandle) -> WheelSessionHandle {
    let session = use_mut_ref(|| WheelSession::from_bundle(language.bundle()));
    let refresh = use_force_update();
    let handle = WheelSessionHandle { session, refresh };

    // Prize names follow the active language; the resolved index does not change.
    // The session was built for the initial locale, so only later switches rebuild it.
    let applied = use_mut_ref(|| language.context.locale);
    {
        let handle = handle.clone();
        use_effect_with(language.context, move |ctx| {
            if *applied.borrow() != ctx.locale {
                *applied.borrow_mut() = ctx.locale;
                let result = match &mut *handle.session.borrow_mut() {
                    Ok(session) => session.relocalize(language.bundle()),
                    Err(_) => Ok(()),
                };
                if let Err(e) = result {
                    log::error!("Failed to relocalize wheel: {}", e);
                }
                handle.refresh.force_update();
            }
            || ()
        });
    }

    handle
}
