//! Message handlers
//!
//! Every plain text message from a user with an active conversation is the
//! answer to their current question. Users without one are pointed at /start.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message, Bot};
use tracing::{debug, error};

use crate::services::OrderService;
use crate::state::{ConversationRegistry, StepOutcome};
use crate::utils::errors::{OrderDeskError, Result};

/// Handle an incoming text message as a questionnaire answer
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    registry: Arc<ConversationRegistry>,
    orders: Arc<OrderService>,
) -> Result<()> {
    let user_id = msg.chat.id.0;

    // Stickers, photos and the like never reach the sequencer
    let text = match msg.text() {
        Some(text) => text,
        None => {
            bot.send_message(msg.chat.id, "Please answer with a text message.")
                .await?;
            return Ok(());
        }
    };

    debug!(user_id = user_id, "Processing questionnaire answer");

    match registry.advance(user_id, text) {
        Ok(StepOutcome::Prompt(prompt)) => {
            bot.send_message(msg.chat.id, prompt).await?;
        }
        Ok(StepOutcome::Complete(record)) => {
            let order_id = record.order_id.clone();

            match orders.submit(user_id, record).await {
                Ok(()) => {
                    let text =
                        format!("✅ Thank you! Your order (ID: {}) has been saved.", order_id);
                    bot.send_message(msg.chat.id, text).await?;
                }
                Err(e) => {
                    error!(user_id = user_id, order_id = %order_id, error = %e,
                           "Completed order could not be persisted");
                    let text = format!(
                        "⚠️ Your order (ID: {}) is complete but could not be saved yet. \
                         Send /retry to try saving it again.",
                        order_id
                    );
                    bot.send_message(msg.chat.id, text).await?;
                }
            }
        }
        Err(OrderDeskError::NoActiveConversation { .. }) => {
            bot.send_message(msg.chat.id, "Send /start to place an order.")
                .await?;
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
