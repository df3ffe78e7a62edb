mod app;
mod message;
mod state;
mod widgets;

pub use app::{EdgeMapApp, run};
pub use message::Message;
pub use state::AppState;
