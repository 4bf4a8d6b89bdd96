use std::sync::Arc;
use teloxide::{
    dispatching::dialogue::InMemStorage, dispatching::UpdateHandler, prelude::*,
};

use crate::commands::{self, callback::handle_callback, DashboardCommand, MyDialogue};
use crate::di::ServiceContainer;
use crate::entity::State;

// Base router trait
pub trait Router: Send + Sync {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error>;
}

// Command router implementation
pub struct TelegramRouter {
    services: Arc<ServiceContainer>,
}

impl TelegramRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }
}

impl Router for TelegramRouter {
    fn setup_handlers(&self) -> UpdateHandler<anyhow::Error> {
        use dptree::case;

        let services_for_commands = self.services.clone();
        let services_for_callbacks = self.services.clone();

        // Commands take priority over whatever form the chat is filling in
        let command_handler = teloxide::filter_command::<DashboardCommand, _>().endpoint(
            move |bot: Bot, msg: Message, cmd: DashboardCommand, dialogue: MyDialogue| {
                let services = services_for_commands.clone();
                async move { commands::handle_command(bot, msg, cmd, dialogue, services).await }
            },
        );

        let services_for_dialog1 = self.services.clone();
        let services_for_dialog2 = self.services.clone();
        let services_for_dialog3 = self.services.clone();
        let services_for_dialog4 = self.services.clone();
        let services_for_dialog5 = self.services.clone();

        let message_handler = Update::filter_message()
            .branch(command_handler)
            .branch(
                dptree::entry()
                    .branch(case![State::AwaitingImportSecret].endpoint(
                        move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                            let services = services_for_dialog1.clone();
                            async move {
                                commands::wallet::receive_import_secret(
                                    bot, msg, dialogue, services,
                                )
                                .await
                            }
                        },
                    ))
                    .branch(case![State::AwaitingRecipientAddress].endpoint(
                        move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                            let services = services_for_dialog2.clone();
                            async move {
                                commands::send::receive_recipient_address(
                                    bot, msg, dialogue, services,
                                )
                                .await
                            }
                        },
                    ))
                    .branch(case![State::AwaitingAmount { recipient }].endpoint(
                        move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                            let services = services_for_dialog3.clone();
                            async move {
                                commands::send::receive_amount(bot, msg, state, dialogue, services)
                                    .await
                            }
                        },
                    ))
                    .branch(case![State::AwaitingConfirmation { recipient, amount }].endpoint(
                        move |bot: Bot, msg: Message, state: State, dialogue: MyDialogue| {
                            let services = services_for_dialog4.clone();
                            async move {
                                commands::send::receive_confirmation(
                                    bot, msg, state, dialogue, services,
                                )
                                .await
                            }
                        },
                    ))
                    .branch(case![State::AwaitingMintAmount].endpoint(
                        move |bot: Bot, msg: Message, dialogue: MyDialogue| {
                            let services = services_for_dialog5.clone();
                            async move {
                                commands::token::receive_mint_amount(bot, msg, dialogue, services)
                                    .await
                            }
                        },
                    ))
                    .branch(case![State::Start].endpoint(|bot: Bot, msg: Message| async move {
                        bot.send_message(msg.chat.id, "Use /menu to open the dashboard.")
                            .await?;
                        Ok::<(), anyhow::Error>(())
                    })),
            );

        // Add callback query handler for our buttons
        let callback_handler = Update::filter_callback_query().endpoint(
            move |bot: Bot, q: CallbackQuery, dialogue: MyDialogue| {
                let services = services_for_callbacks.clone();
                async move { handle_callback(bot, q, dialogue, services).await }
            },
        );

        teloxide::dispatching::dialogue::enter::<Update, InMemStorage<State>, State, _>()
            .branch(message_handler)
            .branch(callback_handler)
    }
}
