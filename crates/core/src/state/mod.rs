pub mod session;
pub mod view_state;

pub use session::CatalogSession;
pub use view_state::{ViewAction, ViewState};
