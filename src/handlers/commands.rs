//! Command handlers
//!
//! /start begins (or restarts) the order questionnaire, /cancel abandons it,
//! /retry re-attempts persistence of a completed order that failed to save.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message, Bot};
use tracing::{debug, info};

use crate::services::OrderService;
use crate::state::ConversationRegistry;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Handle /start: begin or restart the questionnaire
pub async fn handle_start(
    bot: Bot,
    msg: Message,
    registry: Arc<ConversationRegistry>,
) -> Result<()> {
    let user_id = msg.chat.id.0;
    debug!(user_id = user_id, "Processing /start command");

    let prompt = registry.begin(user_id);
    log_user_action(user_id, "start", None);

    bot.send_message(msg.chat.id, prompt).await?;
    Ok(())
}

/// Handle /cancel: abandon the in-progress questionnaire
pub async fn handle_cancel(
    bot: Bot,
    msg: Message,
    registry: Arc<ConversationRegistry>,
) -> Result<()> {
    let user_id = msg.chat.id.0;

    let text = if registry.cancel(user_id) {
        log_user_action(user_id, "cancel", None);
        "Your order has been cancelled. Send /start to begin a new one."
    } else {
        "Nothing to cancel. Send /start to place an order."
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle /retry: re-attempt persistence of the last failed order.
///
/// Only the spreadsheet append is retried; the questionnaire is never re-run.
pub async fn handle_retry(bot: Bot, msg: Message, orders: Arc<OrderService>) -> Result<()> {
    let user_id = msg.chat.id.0;

    match orders.retry(user_id).await {
        Ok(Some(order_id)) => {
            info!(user_id = user_id, order_id = %order_id, "Pending order persisted on retry");
            let text = format!("✅ Thank you! Your order (ID: {}) has been saved.", order_id);
            bot.send_message(msg.chat.id, text).await?;
        }
        Ok(None) => {
            bot.send_message(
                msg.chat.id,
                "No unsaved order to retry. Send /start to place a new one.",
            )
            .await?;
        }
        Err(_) => {
            bot.send_message(
                msg.chat.id,
                "⚠️ Still unable to save your order. It is kept safe; please send /retry again in a moment.",
            )
            .await?;
        }
    }

    Ok(())
}

/// Handle /help: show usage
pub async fn handle_help(bot: Bot, msg: Message, descriptions: String) -> Result<()> {
    bot.send_message(msg.chat.id, descriptions).await?;
    Ok(())
}
