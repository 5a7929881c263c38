use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FULL_CIRCLE, MIN_REVOLUTIONS, SPIN_DURATION_MS, SUBMIT_DISPLAY_MS};
use crate::error::ConfigError;
use crate::locale::{Bundle, RegistrationErrors};
use crate::spin_resolver::{random_spin_delta, SpinResolver};
use crate::validation::{validate_registration, FieldErrors, RegistrationField, RegistrationForm};
use crate::wheel_layout::{Prize, WheelConfiguration};

/// Where the player is in the spin-and-register flow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Idle,
    Spinning,
    Won,
    Registering,
    Submitted,
}

/// Rotation bookkeeping for one session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SpinState {
    /// Total degrees turned this session. Only ever grows.
    pub cumulative_rotation: f64,
    pub is_spinning: bool,
    /// Rotation the in-flight spin will settle on.
    pub target_rotation: Option<f64>,
    /// Index of the prize won this session.
    pub resolved: Option<usize>,
}

/// Handed to the renderer when a spin starts: animate from `from` to `to`
/// over `duration_ms`, then call `WheelSession::complete_spin`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Form was valid; call `finish_submission` after `display_ms`.
    Accepted { display_ms: u32 },
    Rejected(FieldErrors),
    /// Submit arrived outside the registering state.
    Ignored,
}

///
/// WheelSession
///
/// A single player's pass through the wheel: one spin, one prize, one
/// registration. Every mutation goes through this type.
///

#[derive(Debug, Clone)]
pub struct WheelSession {
    config: WheelConfiguration,
    spin: SpinState,
    state: WizardState,
    form: RegistrationForm,
    errors: FieldErrors,
    success_visible: bool,
}

impl WheelSession {
    pub fn new(config: WheelConfiguration) -> Self {
        Self {
            config,
            spin: SpinState::default(),
            state: WizardState::Idle,
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
            success_visible: false,
        }
    }

    /// Starts the wheel at a resting orientation other than 0.
    pub fn with_initial_rotation(mut self, degrees: f64) -> Self {
        self.spin.cumulative_rotation = degrees;
        self
    }

    pub fn from_bundle(bundle: &Bundle) -> Result<Self, ConfigError> {
        Ok(Self::new(WheelConfiguration::from_bundle(bundle)?))
    }

    // === Accessors ===

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn spin_state(&self) -> &SpinState {
        &self.spin
    }

    pub fn config(&self) -> &WheelConfiguration {
        &self.config
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn rotation(&self) -> f64 {
        self.spin.cumulative_rotation
    }

    pub fn prize(&self) -> Option<&Prize> {
        self.spin.resolved.and_then(|i| self.config.prize(i))
    }

    pub fn can_spin(&self) -> bool {
        self.state == WizardState::Idle && !self.spin.is_spinning && self.spin.resolved.is_none()
    }

    pub fn is_panel_open(&self) -> bool {
        self.state == WizardState::Registering || self.success_visible
    }

    pub fn is_success_visible(&self) -> bool {
        self.success_visible
    }

    // === Transitions ===

    /// Starts a spin with a random amount drawn from `rng`.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpinTicket> {
        if !self.can_spin() {
            log::debug!("Spin rejected in state {:?}", self.state);
            return None;
        }
        self.spin_by(random_spin_delta(rng))
    }

    /// Starts a spin that turns the wheel forward by exactly `delta` degrees.
    /// The delta must be finite and cover at least `MIN_REVOLUTIONS` turns.
    pub fn spin_by(&mut self, delta: f64) -> Option<SpinTicket> {
        if !self.can_spin() {
            log::debug!("Spin rejected in state {:?}", self.state);
            return None;
        }
        if !delta.is_finite() || delta < FULL_CIRCLE * MIN_REVOLUTIONS {
            log::warn!("Spin rejected: delta {} is below the minimum spin", delta);
            return None;
        }

        let from = self.spin.cumulative_rotation;
        let to = from + delta;
        self.spin.is_spinning = true;
        self.spin.target_rotation = Some(to);
        self.state = WizardState::Spinning;
        log::info!("Wheel spinning from {:.2} to {:.2}", from, to);

        Some(SpinTicket {
            from,
            to,
            duration_ms: SPIN_DURATION_MS,
        })
    }

    /// Called once the spin animation has run its course. Resolves the prize
    /// under the pointer and moves to `Won`.
    pub fn complete_spin(&mut self) -> Option<&Prize> {
        if self.state != WizardState::Spinning {
            return None;
        }
        let target = self.spin.target_rotation.take()?;

        let resolution = SpinResolver::new(self.config.wedges()).resolve(target);
        self.spin.cumulative_rotation = target;
        self.spin.is_spinning = false;
        self.spin.resolved = Some(resolution.index);
        self.state = WizardState::Won;

        let prize = self.config.prize(resolution.index);
        if let Some(prize) = prize {
            log::info!("Wheel stopped on prize {} ({})", prize.id, prize.name);
        }
        prize
    }

    pub fn open_form(&mut self) -> bool {
        if self.state != WizardState::Won {
            return false;
        }
        self.form.clear();
        self.errors.clear();
        self.state = WizardState::Registering;
        true
    }

    pub fn cancel(&mut self) -> bool {
        if self.state != WizardState::Registering {
            return false;
        }
        self.form.clear();
        self.errors.clear();
        self.state = WizardState::Won;
        true
    }

    /// Updates one field and drops any error already shown for it.
    pub fn update_field(&mut self, field: RegistrationField, value: String) {
        if self.state != WizardState::Registering {
            return;
        }
        self.form.set(field, value);
        self.errors.remove(field.key());
    }

    pub fn submit(&mut self, messages: &RegistrationErrors) -> SubmitOutcome {
        if self.state != WizardState::Registering {
            return SubmitOutcome::Ignored;
        }

        let errors = validate_registration(&self.form, messages);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        log::info!(
            "Prize registration submitted: name={}, email={}, phone={}, prize={:?}",
            self.form.name,
            self.form.email,
            self.form.phone,
            self.prize().map(|p| p.id)
        );
        self.errors.clear();
        self.state = WizardState::Submitted;
        self.success_visible = true;
        SubmitOutcome::Accepted {
            display_ms: SUBMIT_DISPLAY_MS,
        }
    }

    /// Called after the success message has been on screen for the display
    /// delay. Clears the form and closes the panel; the session stays
    /// `Submitted`.
    pub fn finish_submission(&mut self) {
        if self.state != WizardState::Submitted {
            return;
        }
        self.form.clear();
        self.errors.clear();
        self.success_visible = false;
    }

    /// Swaps prize names for another locale. Widths are fixed, so the
    /// resolved prize keeps its index.
    pub fn relocalize(&mut self, bundle: &Bundle) -> Result<(), ConfigError> {
        self.config = WheelConfiguration::from_bundle(bundle)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WHEEL_WIDTHS;
    use crate::locale::{Locale, Translations};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> WheelSession {
        let names: Vec<String> = (0..6).map(|i| format!("P{}", i)).collect();
        WheelSession::new(WheelConfiguration::new(&names, &WHEEL_WIDTHS).unwrap())
    }

    fn won_session() -> WheelSession {
        let mut s = session();
        s.spin_by(1810.0).unwrap();
        s.complete_spin().unwrap();
        s
    }

    fn fill_valid(s: &mut WheelSession) {
        s.update_field(RegistrationField::Name, "Salim".to_string());
        s.update_field(RegistrationField::Email, "a@b.com".to_string());
        s.update_field(RegistrationField::Phone, "+96812345678".to_string());
    }

    #[test]
    fn test_spin_resolves_after_completion() {
        let mut s = session().with_initial_rotation(10.0);
        let ticket = s.spin_by(1800.0).unwrap();
        assert_eq!(ticket.from, 10.0);
        assert_eq!(ticket.to, 1810.0);
        assert_eq!(ticket.duration_ms, SPIN_DURATION_MS);
        assert_eq!(s.state(), WizardState::Spinning);
        assert!(s.prize().is_none());

        let prize = s.complete_spin().unwrap();
        assert_eq!(prize.name, "P5");
        assert_eq!(s.state(), WizardState::Won);
        assert_eq!(s.rotation(), 1810.0);
        assert!(!s.spin_state().is_spinning);
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut s = session();
        let first = s.spin_by(2000.0).unwrap();
        assert!(s.spin_by(900.0).is_none());
        assert_eq!(s.spin_state().target_rotation, Some(first.to));
    }

    #[test]
    fn test_spin_by_rejects_short_or_backward_deltas() {
        let mut s = session().with_initial_rotation(100.0);
        for delta in [-500.0, 0.0, 359.0, 1799.9, f64::NAN, f64::INFINITY] {
            assert!(s.spin_by(delta).is_none(), "delta {} accepted", delta);
            assert_eq!(s.state(), WizardState::Idle);
            assert_eq!(s.rotation(), 100.0);
            assert!(s.spin_state().target_rotation.is_none());
        }

        let ticket = s.spin_by(1800.0).unwrap();
        assert!(ticket.to > ticket.from);
    }

    #[test]
    fn test_second_spin_after_win_is_noop() {
        let mut s = won_session();
        let before = s.spin_state().clone();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(s.spin(&mut rng).is_none());
        assert_eq!(s.spin_state(), &before);
        assert_eq!(s.state(), WizardState::Won);
        assert!(!s.can_spin());
    }

    #[test]
    fn test_random_spin_keeps_rotation_monotonic() {
        let mut s = session().with_initial_rotation(90.0);
        let mut rng = StdRng::seed_from_u64(99);
        let ticket = s.spin(&mut rng).unwrap();
        assert!(ticket.to - ticket.from >= 1800.0);
        s.complete_spin().unwrap();
        assert_eq!(s.rotation(), ticket.to);
    }

    #[test]
    fn test_complete_without_spin_is_ignored() {
        let mut s = session();
        assert!(s.complete_spin().is_none());
        assert_eq!(s.state(), WizardState::Idle);
    }

    #[test]
    fn test_form_only_opens_after_win() {
        let mut s = session();
        assert!(!s.open_form());
        s.spin_by(2000.0);
        assert!(!s.open_form());
        s.complete_spin();
        assert!(s.open_form());
        assert_eq!(s.state(), WizardState::Registering);
        assert!(s.is_panel_open());
        assert!(s.form().is_blank());
    }

    #[test]
    fn test_cancel_returns_to_won() {
        let mut s = won_session();
        s.open_form();
        s.update_field(RegistrationField::Name, "Salim".to_string());
        assert!(s.cancel());
        assert_eq!(s.state(), WizardState::Won);
        assert!(s.form().is_blank());
        assert!(!s.is_panel_open());
        assert!(s.prize().is_some());
    }

    #[test]
    fn test_invalid_submit_stays_registering() {
        let mut s = won_session();
        s.open_form();
        s.update_field(RegistrationField::Email, "a@b".to_string());
        s.update_field(RegistrationField::Phone, "123".to_string());

        match s.submit(&RegistrationErrors::default()) {
            SubmitOutcome::Rejected(errors) => {
                assert!(errors.contains_key("email"));
                assert!(errors.contains_key("phone"));
                assert!(errors.contains_key("name"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(s.state(), WizardState::Registering);
        assert_eq!(s.errors().len(), 3);

        // typing into a field clears only that field's error
        s.update_field(RegistrationField::Email, "a@b.com".to_string());
        assert!(!s.errors().contains_key("email"));
        assert!(s.errors().contains_key("phone"));
    }

    #[test]
    fn test_valid_submit_then_clear() {
        let mut s = won_session();
        s.open_form();
        fill_valid(&mut s);

        let outcome = s.submit(&RegistrationErrors::default());
        assert_eq!(outcome, SubmitOutcome::Accepted { display_ms: SUBMIT_DISPLAY_MS });
        assert_eq!(s.state(), WizardState::Submitted);
        assert!(s.is_success_visible());
        assert_eq!(s.form().name, "Salim");

        s.finish_submission();
        assert_eq!(s.state(), WizardState::Submitted);
        assert!(s.form().is_blank());
        assert!(s.errors().is_empty());
        assert!(!s.is_panel_open());
    }

    #[test]
    fn test_submitted_session_is_terminal() {
        let mut s = won_session();
        s.open_form();
        fill_valid(&mut s);
        s.submit(&RegistrationErrors::default());
        s.finish_submission();

        assert!(s.spin_by(2000.0).is_none());
        assert!(!s.open_form());
        assert!(!s.cancel());
        assert_eq!(s.submit(&RegistrationErrors::default()), SubmitOutcome::Ignored);
        assert_eq!(s.state(), WizardState::Submitted);
    }

    #[test]
    fn test_relocalize_keeps_resolved_prize() {
        let translations = Translations::load().unwrap();
        let mut s = WheelSession::from_bundle(translations.bundle(Locale::En)).unwrap();
        s.spin_by(1800.0 + 350.0);
        let english = s.complete_spin().unwrap().clone();

        s.relocalize(translations.bundle(Locale::Ar)).unwrap();
        let arabic = s.prize().unwrap();
        assert_eq!(arabic.id, english.id);
        assert_ne!(arabic.name, english.name);
    }
}
