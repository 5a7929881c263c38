pub mod use_language;
pub mod use_preorder;
pub mod use_wheel_session;

pub use use_language::*;
pub use use_preorder::*;
pub use use_wheel_session::*;
