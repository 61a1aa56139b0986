use shared::errors::{Result, ServiceError};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

pub const OPEN_MINI_APP_LABEL: &str = "Открыть мини-приложение 🚀";

pub fn make_mini_app_keyboard(web_app_url: &str) -> Result<InlineKeyboardMarkup> {
    let url = Url::parse(web_app_url)
        .map_err(|e| ServiceError::Config(format!("Invalid Mini App URL {}: {}", web_app_url, e)))?;

    Ok(InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::web_app(OPEN_MINI_APP_LABEL, WebAppInfo { url }),
    ]]))
}
