use crate::telegram::{make_mini_app_keyboard, start_message, WebAppLinks};
use shared::errors::{Result, ServiceError};
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::{InlineKeyboardMarkup, Me, Message},
    utils::command::BotCommands,
};

fn map_teloxide_err<E: std::fmt::Display>(e: E) -> ServiceError {
    ServiceError::Telegram(e.to_string())
}

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Open the marathons mini-app")]
    Start,
}

pub struct StartReply {
    pub text: String,
    pub keyboard: InlineKeyboardMarkup,
}

/// Routes a message that no scene claimed. Anything other than a known
/// command is ignored.
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    me: Me,
    links: Arc<WebAppLinks>,
) -> Result<()> {
    if let Some(text) = msg.text() {
        match Command::parse(text, me.username()) {
            Ok(Command::Start) => {
                handle_start(bot, msg, links).await?;
            }
            Err(_) => {
            }
        }
    }

    Ok(())
}

pub fn build_start_reply(first_name: Option<&str>, links: &WebAppLinks) -> Result<StartReply> {
    let first_name = first_name.ok_or(ServiceError::MissingSender)?;
    let web_app_url = links.next_url();

    Ok(StartReply {
        text: start_message(first_name),
        keyboard: make_mini_app_keyboard(&web_app_url)?,
    })
}

async fn handle_start(bot: Bot, msg: Message, links: Arc<WebAppLinks>) -> Result<()> {
    let start_time = std::time::Instant::now();
    let sender = msg.from.as_ref();

    tracing::info!(
        chat_id = msg.chat.id.0,
        user_id = sender.map(|u| u.id.0),
        "/start received"
    );

    let reply = build_start_reply(sender.map(|u| u.first_name.as_str()), &links)?;

    bot.send_message(msg.chat.id, reply.text)
        .reply_markup(reply.keyboard)
        .await
        .map_err(map_teloxide_err)?;

    shared::record_counter("bot_start_commands_total", 1);
    shared::record_timing("bot_start_duration_seconds", start_time.elapsed().as_secs_f64());
    tracing::debug!("/start answered in {:?}", start_time.elapsed());
    Ok(())
}
