//! Application layer: the affirmation session service and the share flow.

pub mod session;
pub mod share;

pub use session::AffirmationSession;
pub use share::{share_card, Clipboard, ShareOutcome, SharePlatform, ShareResult};
