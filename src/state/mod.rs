//! Runtime state owned by a quiz run.

mod session;

pub use session::{QuizSession, SessionState};
