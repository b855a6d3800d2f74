pub mod poller;
pub mod session_store;

pub use poller::ResourcePoller;
pub use session_store::SessionStore;
