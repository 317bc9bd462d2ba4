// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use jid::BareJid;
use minidom::Element;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use xmpp_parsers::roster::{Item, Subscription};

use deltazap_core::test::{mock_data, ConstantTimeProvider};
use deltazap_xmpp::test::{
    BareJidTestAdditions, ClientTestAdditions, Connection, Connector, IncrementingIDProvider,
};
use deltazap_xmpp::client::Event as ClientEvent;
use deltazap_xmpp::{
    bare, full, mods, Client, ConnectionError, Event, IDProvider, RequestError, ServerEndpoint,
    TimeProvider,
};

use crate::tests::helpers::wait_until;

#[tokio::test]
async fn test_roster_push_is_acknowledged() -> Result<()> {
    let client = Client::connected_client().await?;

    let push: Element = r#"<iq xmlns="jabber:client" id="push-1" type="set">
        <query xmlns="jabber:iq:roster">
          <item jid="friend@deltazap.chat" name="Friend" subscription="both"/>
        </query>
      </iq>"#
        .parse()?;
    client.connection.receive_stanza(push).await;

    let events = client.wait_for_events(1).await;
    assert_eq!(
        events,
        vec![Event::Roster(mods::roster::Event::RosterPush {
            item: Item {
                jid: BareJid::theirs(),
                name: Some("Friend".to_string()),
                subscription: Subscription::Both,
                ask: Default::default(),
                groups: vec![],
            }
        })]
    );

    let sent = client.connection.sent_stanzas();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name(), "iq");
    assert_eq!(sent[0].attr("type"), Some("result"));
    assert_eq!(sent[0].attr("id"), Some("push-1"));

    Ok(())
}

#[tokio::test]
async fn test_roster_push_from_foreign_sender_is_ignored() -> Result<()> {
    let client = Client::connected_client().await?;

    let push: Element = r#"<iq xmlns="jabber:client" from="mallory@evil.example" id="push-1" type="set">
        <query xmlns="jabber:iq:roster">
          <item jid="mallory@evil.example" subscription="both"/>
        </query>
      </iq>"#
        .parse()?;
    client.connection.receive_stanza(push).await;

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    assert!(client.sent_events().is_empty());
    assert!(client.connection.sent_stanzas().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_messages_are_delivered_in_order() -> Result<()> {
    let client = Client::connected_client().await?;

    for idx in 1..=5 {
        let message: Element = format!(
            r#"<message xmlns="jabber:client" from="friend@deltazap.chat/phone" id="m-{idx}" type="chat">
              <body>Message {idx}</body>
            </message>"#
        )
        .parse()?;
        client.connection.receive_stanza(message).await;
    }

    // Chat states carry no content and don't produce events.
    let composing: Element = r#"<message xmlns="jabber:client" from="friend@deltazap.chat/phone" type="chat">
          <composing xmlns="http://jabber.org/protocol/chatstates"/>
        </message>"#
        .parse()?;
    client.connection.receive_stanza(composing).await;

    let events = client.wait_for_events(5).await;
    let bodies = events
        .into_iter()
        .map(|event| match event {
            Event::Chat(mods::chat::Event::Message(message)) => {
                assert_eq!(message.from, Some(full!("friend@deltazap.chat/phone").into()));
                message.body().map(ToString::to_string)
            }
            _ => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(
        bodies,
        (1..=5)
            .map(|idx| Some(format!("Message {idx}")))
            .collect::<Vec<_>>()
    );

    Ok(())
}

#[tokio::test]
async fn test_pending_request_times_out() -> Result<()> {
    let connection = Arc::new(Connection::default());
    let time_provider = Arc::new(ConstantTimeProvider::new(mock_data::reference_date()));

    let client = Client::builder()
        .set_connector_provider(Connector::provider(connection.clone()))
        .set_id_provider(Arc::new(IncrementingIDProvider::new("id")) as Arc<dyn IDProvider>)
        .set_time_provider(time_provider.clone() as Arc<dyn TimeProvider>)
        .add_mod(mods::Roster::default())
        .build();

    client
        .connect(
            &ServerEndpoint::new("localhost", 5222),
            &BareJid::ours().with_resource_str("test")?,
            SecretString::new(String::new()),
        )
        .await?;

    let roster = client.get_mod::<mods::Roster>()?;

    let (result, _) = tokio::join!(roster.load_roster(), async {
        wait_until("the roster request was sent", || {
            connection.sent_stanzas().len() == 1
        })
        .await?;

        // Not expired yet.
        time_provider.advance(Duration::seconds(14));
        connection.fire_timeout_timer().await;

        time_provider.advance(Duration::seconds(2));
        connection.fire_timeout_timer().await;
        Ok::<_, anyhow::Error>(())
    });

    let err = result.expect_err("The request must time out");
    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::TimedOut)
    ));

    Ok(())
}

#[tokio::test]
async fn test_disconnect_fails_pending_requests() -> Result<()> {
    let client = Client::connected_client().await?;
    let roster = client.client.get_mod::<mods::Roster>()?;

    let (result, _) = tokio::join!(roster.load_roster(), async {
        wait_until("the roster request was sent", || {
            client.connection.sent_stanzas().len() == 1
        })
        .await?;
        client
            .connection
            .close_with_error(Some(ConnectionError::TimedOut))
            .await;
        Ok::<_, anyhow::Error>(())
    });

    let err = result.expect_err("The request must fail");
    assert!(matches!(
        err.downcast_ref::<RequestError>(),
        Some(RequestError::Disconnected)
    ));

    let events = client.wait_for_events(1).await;
    assert_eq!(
        events,
        vec![Event::Client(ClientEvent::Disconnected {
            error: Some(ConnectionError::TimedOut)
        })]
    );
    assert!(!client.connection.is_connected());

    // Sending without a connection fails right away.
    assert!(client
        .client
        .get_mod::<mods::Roster>()?
        .subscribe_to_presence(&bare!("friend@deltazap.chat"))
        .is_err());

    Ok(())
}
