pub mod session;

pub use session::{issue_session_token, verify_session_token};
