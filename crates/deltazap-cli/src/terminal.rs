// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use deltazap_core::dtos::{ChatId, NotificationPermission, SessionStatus};
use deltazap_core::{Client, ClientDelegate, ClientEvent, NotificationService, WindowFocusProvider};

use crate::type_display::MessageEnvelope;

pub struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, client: Client, event: ClientEvent) {
        match event {
            ClientEvent::SessionStatusChanged { status } => match status {
                SessionStatus::Restoring => println!("Restoring your last session…"),
                SessionStatus::Connecting => println!("Connecting…"),
                SessionStatus::Connected => println!("✅ Connected."),
                SessionStatus::Disconnected => println!("Disconnected."),
                SessionStatus::Failed { message } => println!("⚠️  Connection failed: {}", message),
            },
            ClientEvent::MessagesAppended {
                chat_id,
                message_ids,
            } => {
                if client.messaging.active_chat_id().as_ref() != Some(&chat_id) {
                    return;
                }
                let Some(chat) = client.messaging.chat(&chat_id) else {
                    return;
                };
                let account = client.account().map(|id| id.to_string());

                for message in chat
                    .messages
                    .iter()
                    .filter(|m| message_ids.contains(&m.id))
                    .filter(|m| Some(&m.sender) != account.as_ref())
                    .filter(|m| Some(&m.sender) != chat.nickname.as_ref())
                {
                    println!("💬 {} | {}", chat.name, MessageEnvelope(message));
                }
            }
            ClientEvent::PresenceSubRequestsChanged => {
                let count = client.contacts.pending_requests().len();
                if count > 0 {
                    println!("👋 You have {} pending contact request(s).", count);
                }
            }
            ClientEvent::ContactListChanged
            | ClientEvent::ContactChanged { .. }
            | ClientEvent::ChatListChanged
            | ClientEvent::MessagesUpdated { .. } => (),
        }
    }
}

/// Prints notifications to the terminal. The terminal never needs to ask for permission.
#[derive(Default)]
pub struct TerminalNotificationService {}

#[async_trait]
impl NotificationService for TerminalNotificationService {
    async fn request_permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    fn notify(&self, _chat_id: &ChatId, title: &str, body: &str) {
        println!("🔔 {}: {}", title, body);
    }
}

/// The terminal counts as focused while a chat is open in it.
#[derive(Clone, Default)]
pub struct TerminalFocus {
    is_focused: Arc<AtomicBool>,
}

impl TerminalFocus {
    pub fn set_focused(&self, is_focused: bool) {
        self.is_focused.store(is_focused, Ordering::SeqCst);
    }
}

impl WindowFocusProvider for TerminalFocus {
    fn is_window_focused(&self) -> bool {
        self.is_focused.load(Ordering::SeqCst)
    }
}
