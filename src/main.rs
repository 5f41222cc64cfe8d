//! orderdesk Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Update;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use tracing::{error, info, warn};

use orderdesk::{
    config::Settings,
    handlers::{commands, messages},
    services::{OrderService, SheetsService},
    state::{ConversationRegistry, QuestionSpec},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive the dispatcher
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting orderdesk Telegram bot...");

    // Initialize the conversation registry over the fixed order form
    let registry = Arc::new(ConversationRegistry::new(QuestionSpec::default_order_form()));

    // Initialize the persistence services
    let sheets = SheetsService::new(settings.sheets.clone())?;
    let orders = Arc::new(OrderService::new(sheets));

    // Initialize bot
    let bot = Bot::new(settings.bot.token.clone());

    info!("Setting up bot handlers...");
    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![registry, orders])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("orderdesk bot is ready!");

    // Transport mode is a configuration axis: webhook when a URL is
    // configured, long polling otherwise.
    match &settings.bot.webhook_url {
        Some(webhook_url) => {
            info!(url = %webhook_url, port = settings.bot.webhook_port, "Starting bot in webhook mode");

            let addr = ([0, 0, 0, 0], settings.bot.webhook_port).into();
            let url = webhook_url.parse()?;
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("Starting bot in polling mode");
            dispatcher.dispatch().await;
        }
    }

    info!("orderdesk bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<BotCommand>()
                    .endpoint(handle_commands),
            )
            .branch(dptree::endpoint(handle_messages)),
    )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Order bot commands")]
enum BotCommand {
    #[command(description = "Start a new order")]
    Start,
    #[command(description = "Cancel the current order")]
    Cancel,
    #[command(description = "Retry saving a completed order")]
    Retry,
    #[command(description = "Show help information")]
    Help,
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    registry: Arc<ConversationRegistry>,
    orders: Arc<OrderService>,
) -> HandlerResult {
    let result = match cmd {
        BotCommand::Start => commands::handle_start(bot, msg, registry).await,
        BotCommand::Cancel => commands::handle_cancel(bot, msg, registry).await,
        BotCommand::Retry => commands::handle_retry(bot, msg, orders).await,
        BotCommand::Help => {
            commands::handle_help(bot, msg, BotCommand::descriptions().to_string()).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages (questionnaire answers)
async fn handle_messages(
    bot: Bot,
    msg: Message,
    registry: Arc<ConversationRegistry>,
    orders: Arc<OrderService>,
) -> HandlerResult {
    if let Err(e) = messages::handle_message(bot, msg, registry, orders).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
