// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use deltazap_xmpp::{
    client::Event as XMPPClientEvent, mods::chat::Event as XMPPChatEvent,
    mods::roster::Event as XMPPRosterEvent, mods::status::Event as XMPPStatusEvent, Event,
    IDProvider,
};

use crate::domain::shared::models::{ConnectionEvent, ServerEvent};

use message::parse_message;
use presence::parse_presence;

mod message;
mod presence;

/// Everything `classify` needs besides the event.
pub struct Context<'a> {
    pub now: DateTime<Utc>,
    /// Used for messages that arrive without an id.
    pub id_provider: &'a dyn IDProvider,
}

/// Turns an event of the XMPP client into a `ServerEvent`. Returns `None` for events that don't
/// affect the session and for stanzas that couldn't be interpreted.
pub fn classify(event: &Event, ctx: &Context) -> Option<ServerEvent> {
    match try_classify(event, ctx) {
        Ok(event) => event,
        Err(err) => {
            warn!("Failed to parse event {:?}. {}", event, err);
            None
        }
    }
}

fn try_classify(event: &Event, ctx: &Context) -> Result<Option<ServerEvent>> {
    let server_event = match event {
        Event::Client(event) => Some(parse_client_event(event)),
        Event::Roster(XMPPRosterEvent::RosterPush { item }) => {
            Some(ServerEvent::RosterPush(item.clone().into()))
        }
        Event::Status(XMPPStatusEvent::Presence(presence)) => parse_presence(presence)?,
        Event::Chat(XMPPChatEvent::Message(message)) => parse_message(message, ctx)?,
    };

    if server_event.is_none() {
        debug!("Ignoring event {:?}", event);
    }
    Ok(server_event)
}

fn parse_client_event(event: &XMPPClientEvent) -> ServerEvent {
    match event {
        XMPPClientEvent::Connected => ServerEvent::Connection(ConnectionEvent::Connected),
        XMPPClientEvent::Disconnected { error } => {
            ServerEvent::Connection(ConnectionEvent::Disconnected {
                error: error.clone(),
            })
        }
    }
}
