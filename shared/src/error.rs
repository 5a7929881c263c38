use thiserror::Error as ThisError;

use crate::locale::Locale;

///
/// ConfigError
///
/// Raised while loading the wheel or translation configuration. None of
/// these are corrected silently: a wheel with a bad partition misstates the
/// odds of every prize.
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("wheel has no prizes configured")]
    Empty,

    #[error("prize count {prizes} does not match width count {widths}")]
    CountMismatch { prizes: usize, widths: usize },

    #[error("wedge widths sum to {sum} degrees, expected 360")]
    InvalidWidthSum { sum: f64 },

    #[error("wedge {index} has non-positive width {width}")]
    NonPositiveWidth { index: usize, width: f64 },

    #[error("no translation bundle for locale {0:?}")]
    MissingLocale(Locale),

    #[error("failed to parse translation bundle: {0}")]
    Bundle(#[from] serde_json::Error),
}
