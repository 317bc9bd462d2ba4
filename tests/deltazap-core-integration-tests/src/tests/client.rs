// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use tempfile::TempDir;

use deltazap_core::domain::conversations::repos::ChatHistoryRepository as _;
use deltazap_core::domain::session::repos::SessionMarkersRepository as _;
use deltazap_core::dtos::{Availability, ChatKind, ContentKind, SessionStatus};
use deltazap_core::infra::conversations::ChatHistoryRepository;
use deltazap_core::infra::session::SessionMarkersRepository;
use deltazap_core::services::SendOutcome;
use deltazap_core::{
    chat_id, user_id, AppConfig, Client, ClientEvent, ConnectionError, ServerEndpoint, Store,
};
use deltazap_xmpp::ns;
use deltazap_xmpp::test::{Connection, Connector, IncrementingIDProvider};

use crate::tests::helpers::{wait_until, RecordingDelegate};
use crate::tests::store;

struct TestClient {
    client: Client,
    connection: Arc<Connection>,
    delegate: RecordingDelegate,
    store: Store,
    _dir: TempDir,
}

/// Builds a client backed by a real database and a scripted connection that answers
/// roster requests with a single contact. That contact answers our initial presence
/// with "do not disturb".
async fn test_client() -> Result<TestClient> {
    test_client_with_config(AppConfig::default()).await
}

async fn test_client_with_config(config: AppConfig) -> Result<TestClient> {
    let (store, dir) = store().await?;
    let connection = Arc::new(Connection::default());
    let delegate = RecordingDelegate::default();

    connection.set_stanza_handler(|stanza| {
        let is_initial_presence = stanza.name() == "presence"
            && stanza.attr("to").is_none()
            && stanza.attr("type").is_none();
        if is_initial_presence {
            let response = r#"<presence xmlns="jabber:client" from="bruno@deltazap.chat/phone">
                <show>dnd</show>
              </presence>"#;
            return vec![response.parse::<Element>().unwrap()];
        }

        let is_roster_get = stanza.name() == "iq"
            && stanza.attr("type") == Some("get")
            && stanza.has_child("query", ns::ROSTER);
        if !is_roster_get {
            return vec![];
        }

        let response = format!(
            r#"<iq xmlns="jabber:client" id="{}" type="result">
              <query xmlns="jabber:iq:roster">
                <item jid="bruno@deltazap.chat" name="Bruno" subscription="both"/>
              </query>
            </iq>"#,
            stanza.attr("id").unwrap_or_default()
        );
        vec![response.parse::<Element>().unwrap()]
    });

    let client = Client::builder()
        .set_store(store.clone())
        .set_connector_provider(Connector::provider(connection.clone()))
        .set_id_provider(IncrementingIDProvider::new("id"))
        .set_short_id_provider(IncrementingIDProvider::new("res"))
        .set_config(config)
        .set_delegate(Some(Box::new(delegate.clone())))
        .build();

    Ok(TestClient {
        client,
        connection,
        delegate,
        store,
        _dir: dir,
    })
}

#[tokio::test]
async fn test_connect_and_receive_message() -> Result<()> {
    let TestClient {
        client,
        connection,
        delegate,
        store,
        _dir,
    } = test_client().await?;

    client
        .connect("ana@deltazap.chat", SecretString::new("secret".to_string()))
        .await?;

    assert_eq!(client.session_status(), SessionStatus::Connected);
    assert_eq!(client.connected_user_id(), Some(user_id!("ana@deltazap.chat")));
    assert_eq!(
        client
            .contacts
            .roster()
            .into_iter()
            .map(|item| item.user_id)
            .collect::<Vec<_>>(),
        vec![user_id!("bruno@deltazap.chat")]
    );

    let markers = SessionMarkersRepository::new(store.clone())
        .get()
        .await?
        .expect("Markers must be saved once connected");
    assert_eq!(markers.user_id, user_id!("ana@deltazap.chat"));
    assert_eq!(markers.full_jid.to_string(), "ana@deltazap.chat/res-1");

    let message: Element = r#"<message xmlns="jabber:client" from="bruno@deltazap.chat/phone" id="bruno-1" type="chat">
          <body>Chego às 10h.</body>
        </message>"#
        .parse()?;
    connection.receive_stanza(message).await;

    let bruno = chat_id!("bruno@deltazap.chat");
    wait_until("the message was appended", || {
        client
            .messaging
            .chat(&bruno)
            .map(|chat| chat.messages.len() == 1)
            .unwrap_or_default()
    })
    .await?;

    let chat = client
        .messaging
        .chat(&bruno)
        .expect("The chat must exist");
    assert_eq!(chat.name, "Bruno");
    assert_eq!(chat.kind, ChatKind::Individual);
    assert_eq!(chat.unread_count, 1);
    assert_eq!(chat.messages[0].id.as_str(), "bruno-1");
    assert_eq!(chat.messages[0].content, "Chego às 10h.");

    let repo = ChatHistoryRepository::new(store.clone());
    let mut persisted = vec![];
    for _ in 0..100 {
        persisted = repo.load_history(&user_id!("ana@deltazap.chat"), 50).await?;
        if persisted.first().map(|c| c.messages.len()) == Some(1) {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].name, "Bruno");
    assert_eq!(
        persisted[0]
            .messages
            .iter()
            .map(|m| (m.id.as_str(), m.content.as_str(), m.is_read))
            .collect::<Vec<_>>(),
        vec![("bruno-1", "Chego às 10h.", false)]
    );

    assert!(delegate.events().contains(&ClientEvent::MessagesAppended {
        chat_id: bruno.clone(),
        message_ids: vec!["bruno-1".into()],
    }));

    let outcome = client
        .messaging
        .send_message(&bruno, "Combinado!", ContentKind::Text, None)
        .await?;
    assert!(matches!(outcome, SendOutcome::Delivered { .. }));
    assert!(connection
        .sent_stanza_strings()
        .iter()
        .any(|stanza| stanza.contains("Combinado!")));

    Ok(())
}

#[tokio::test]
async fn test_presence_answering_initial_presence_is_applied() -> Result<()> {
    let TestClient {
        client,
        connection,
        _dir,
        ..
    } = test_client_with_config(AppConfig {
        server_endpoint: ServerEndpoint::new("xmpp.deltazap.chat", 5223),
        ..Default::default()
    })
    .await?;

    client
        .connect("ana@deltazap.chat", SecretString::new("secret".to_string()))
        .await?;

    assert_eq!(
        connection.endpoint(),
        Some(ServerEndpoint::new("xmpp.deltazap.chat", 5223))
    );

    wait_until("Bruno's presence was applied", || {
        client
            .contacts
            .roster()
            .into_iter()
            .any(|item| {
                item.user_id == user_id!("bruno@deltazap.chat")
                    && item.availability == Availability::Dnd
            })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_direct_invite_from_contact_joins_room() -> Result<()> {
    let TestClient {
        client,
        connection,
        _dir,
        ..
    } = test_client().await?;

    client
        .connect("ana@deltazap.chat", SecretString::new("secret".to_string()))
        .await?;

    let invite: Element = r#"<message xmlns="jabber:client" from="bruno@deltazap.chat/phone" id="inv-1">
          <x xmlns="jabber:x:conference" jid="mutirao@groups.deltazap.chat" reason="Mutirão de sábado"/>
        </message>"#
        .parse()?;
    connection.receive_stanza(invite).await;

    let room = chat_id!("mutirao@groups.deltazap.chat");
    wait_until("the group chat was created", || {
        client
            .messaging
            .chat(&room)
            .map(|chat| chat.kind == ChatKind::Group)
            .unwrap_or_default()
    })
    .await?;

    wait_until("the room was entered", || {
        connection.sent_stanza_strings().iter().any(|stanza| {
            stanza.starts_with("<presence")
                && stanza.contains(r#"to="mutirao@groups.deltazap.chat/ana""#)
        })
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_connection_loss_fails_session() -> Result<()> {
    let TestClient {
        client,
        connection,
        delegate,
        store,
        _dir,
    } = test_client().await?;

    client
        .connect("ana@deltazap.chat", SecretString::new("secret".to_string()))
        .await?;

    connection
        .close_with_error(Some(ConnectionError::TimedOut))
        .await;

    let failed = SessionStatus::Failed {
        message: "Timed out".to_string(),
    };
    wait_until("the session failed", || client.session_status() == failed).await?;

    let mut markers = Some(());
    for _ in 0..100 {
        markers = SessionMarkersRepository::new(store.clone())
            .get()
            .await?
            .map(|_| ());
        if markers.is_none() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(markers, None);

    let status_changed = ClientEvent::SessionStatusChanged { status: failed };
    wait_until("the failure was reported", || {
        delegate.events().last() == Some(&status_changed)
    })
    .await?;

    Ok(())
}

#[tokio::test]
async fn test_connect_rejects_malformed_address() -> Result<()> {
    let TestClient {
        client,
        connection,
        delegate,
        ..
    } = test_client().await?;

    let result = client
        .connect("ana", SecretString::new("secret".to_string()))
        .await;

    assert!(result.is_err());
    assert_eq!(client.session_status(), SessionStatus::Disconnected);
    assert!(!connection.is_connected());
    assert!(delegate.events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_invalid_credentials() -> Result<()> {
    let TestClient {
        client, connection, ..
    } = test_client().await?;

    connection.set_connect_error(Some(ConnectionError::InvalidCredentials));

    let result = client
        .connect("ana@deltazap.chat", SecretString::new("wrong".to_string()))
        .await;

    assert!(result.is_err());
    assert_eq!(
        client.session_status(),
        SessionStatus::Failed {
            message: "Invalid credentials".to_string()
        }
    );

    Ok(())
}
