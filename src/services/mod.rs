pub mod coordinator;
pub mod lockout;
pub mod session;
pub mod storage;
pub mod toast;

pub use coordinator::{FetchCoordinator, FetchTicket};
pub use lockout::{AttemptOutcome, LockoutPolicy};
pub use session::{AuthState, MockUser, Session, SessionKind, SessionManager};
pub use storage::{KeyValueStore, MemoryStore};
pub use toast::{Toast, ToastLevel, Toasts};
