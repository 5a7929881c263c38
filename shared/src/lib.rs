pub mod constants;
pub mod error;
pub mod locale;
pub mod preorder;
pub mod shared_wheel_game;
pub mod spin_resolver;
pub mod validation;
pub mod wheel_layout;

pub use error::ConfigError;
pub use locale::{Bundle, LanguageContext, Locale, Translations};
pub use shared_wheel_game::{SpinState, SpinTicket, SubmitOutcome, WheelSession, WizardState};
pub use wheel_layout::{Prize, WheelConfiguration, Wedge};
