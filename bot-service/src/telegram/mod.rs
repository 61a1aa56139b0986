pub mod handlers;
mod keyboards;
mod messages;
mod web_app;

pub use keyboards::{make_mini_app_keyboard, OPEN_MINI_APP_LABEL};
pub use messages::start_message;
pub use web_app::WebAppLinks;
