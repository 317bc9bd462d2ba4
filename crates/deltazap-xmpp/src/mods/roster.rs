// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::{BareJid, Jid};
use tracing::warn;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::presence::{Presence, Type};
use xmpp_parsers::roster::{Group, Item, Roster as Query, Subscription};

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::mods::Module;
use crate::ns;
use crate::util::RequestError;

#[derive(Default, Clone)]
pub struct Roster {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// RFC 6121: Roster Push
    /// https://xmpp.org/rfcs/rfc6121.html#roster-syntax-actions-push
    RosterPush { item: Item },
}

impl Module for Roster {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn handle_iq_stanza(&self, stanza: &Iq) -> Result<()> {
        let IqType::Set(payload) = &stanza.payload else {
            return Ok(());
        };

        if !payload.is("query", ns::ROSTER) {
            return Ok(());
        }

        // Pushes are only legitimate when they come from our own account.
        if let Some(from) = &stanza.from {
            if Some(from.to_bare()) != self.ctx.bare_jid() {
                warn!("Ignoring roster push from foreign sender {}.", from);
                return Ok(());
            }
        }

        let query = Query::try_from(payload.clone())?;

        for item in query.items {
            self.ctx
                .schedule_event(ClientEvent::Roster(Event::RosterPush { item }));
        }

        self.ctx.send_stanza(Iq {
            from: None,
            to: stanza.from.clone(),
            id: stanza.id.clone(),
            payload: IqType::Result(None),
        })?;

        Ok(())
    }
}

impl Roster {
    pub async fn load_roster(&self) -> Result<Query> {
        let roster = self
            .ctx
            .send_iq(Iq::from_get(
                self.ctx.generate_id(),
                Query {
                    ver: None,
                    items: vec![],
                },
            ))
            .await?;

        let Some(response) = roster else {
            return Err(RequestError::UnexpectedResponse.into());
        };

        Ok(Query::try_from(response)?)
    }

    pub async fn add_contact(
        &self,
        jid: &BareJid,
        name: Option<&str>,
        group: Option<&str>,
    ) -> Result<()> {
        let iq = Iq::from_set(
            self.ctx.generate_id(),
            Query {
                ver: None,
                items: vec![Item {
                    jid: jid.clone(),
                    name: name.map(ToString::to_string),
                    subscription: Default::default(),
                    ask: Default::default(),
                    groups: group
                        .map(|group| vec![Group(group.to_string())])
                        .unwrap_or_default(),
                }],
            },
        );
        self.ctx.send_iq(iq).await?;
        Ok(())
    }

    pub async fn remove_contact(&self, jid: &BareJid) -> Result<()> {
        let iq = Iq::from_set(
            self.ctx.generate_id(),
            Query {
                ver: None,
                items: vec![Item {
                    jid: jid.clone(),
                    name: None,
                    subscription: Subscription::Remove,
                    ask: Default::default(),
                    groups: vec![],
                }],
            },
        );
        self.ctx.send_iq(iq).await?;
        Ok(())
    }

    pub fn subscribe_to_presence(&self, jid: &BareJid) -> Result<()> {
        self.ctx
            .send_stanza(Presence::new(Type::Subscribe).with_to(Jid::Bare(jid.clone())))?;
        Ok(())
    }

    pub fn approve_presence_subscription_request(&self, from: &BareJid) -> Result<()> {
        self.ctx
            .send_stanza(Presence::new(Type::Subscribed).with_to(Jid::Bare(from.clone())))?;
        Ok(())
    }

    pub fn deny_presence_subscription_request(&self, from: &BareJid) -> Result<()> {
        self.ctx
            .send_stanza(Presence::new(Type::Unsubscribed).with_to(Jid::Bare(from.clone())))?;
        Ok(())
    }
}
