// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::{predicate, Sequence};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use tokio::sync::oneshot;

use deltazap_core::app::deps::AppContext;
use deltazap_core::domain::contacts::models::Subscription;
use deltazap_core::domain::conversations::models::{Chat, ChatKind};
use deltazap_core::domain::session::models::{
    LoginError, NotificationPermission, SessionMarkers, SessionStatus,
};
use deltazap_core::domain::shared::models::{Availability, RosterPushItem};
use deltazap_core::services::SessionService;
use deltazap_core::test::{mock_data, MockAppDependencies};
use deltazap_core::{chat_id, user_id, AppConfig, ClientEvent, ConnectionError, ServerEndpoint};

fn secret() -> SecretString {
    SecretString::new("secret".to_string())
}

fn record_events(deps: &mut MockAppDependencies) -> Arc<Mutex<Vec<ClientEvent>>> {
    let events = Arc::new(Mutex::new(vec![]));
    {
        let events = events.clone();
        deps.client_event_dispatcher
            .expect_dispatch_event()
            .returning(move |event| events.lock().push(event));
    }
    events
}

fn status_changed(status: SessionStatus) -> ClientEvent {
    ClientEvent::SessionStatusChanged { status }
}

#[tokio::test]
async fn test_connect_loads_roster_and_history() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps);

    deps.connection_service
        .expect_connect()
        .once()
        .withf(|_, jid, _| jid == &mock_data::account_jid())
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.presence_service
        .expect_send_presence()
        .once()
        .with(predicate::eq(Availability::Chat), predicate::eq(None))
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .once()
        .return_once(|| Box::pin(async { NotificationPermission::Granted }));
    deps.roster_service
        .expect_load_roster()
        .once()
        .return_once(|| {
            Box::pin(async {
                Ok(vec![RosterPushItem {
                    user_id: user_id!("bruno@deltazap.org"),
                    name: Some("Bruno".to_string()),
                    subscription: Subscription::Both,
                    groups: vec![],
                }])
            })
        });
    deps.session_markers_repo
        .expect_set()
        .once()
        .withf(|markers| {
            markers.user_id == mock_data::account()
                && markers.full_jid == mock_data::account_jid()
                && !markers.is_admin
        })
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.chat_history_repo
        .expect_load_history()
        .once()
        .with(predicate::eq(mock_data::account()), predicate::eq(50))
        .return_once(|_, _| Box::pin(async { Ok(vec![]) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    service.connect(" ana@deltazap.org ", secret()).await?;

    assert_eq!(service.status(), SessionStatus::Connected);
    assert_eq!(service.account(), Some(mock_data::account()));
    {
        let session = deps.ctx.session.lock();
        assert_eq!(session.roster.items().len(), 1);
        assert_eq!(session.roster.items()[0].display_name(), "Bruno");
        assert_eq!(
            session.notification_permission,
            NotificationPermission::Granted
        );
    }

    assert_eq!(
        *events.lock(),
        vec![
            status_changed(SessionStatus::Connecting),
            status_changed(SessionStatus::Connected),
            ClientEvent::ContactListChanged,
            ClientEvent::ChatListChanged,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_roster_is_installed_before_initial_presence() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = AppContext::new(AppConfig {
        server_endpoint: ServerEndpoint::new("xmpp.deltazap.org", 5223),
        ..Default::default()
    });
    record_events(&mut deps);

    let mut seq = Sequence::new();

    deps.connection_service
        .expect_connect()
        .once()
        .in_sequence(&mut seq)
        .withf(|endpoint, _, _| endpoint == &ServerEndpoint::new("xmpp.deltazap.org", 5223))
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.roster_service
        .expect_load_roster()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(vec![]) }));
    deps.presence_service
        .expect_send_presence()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { NotificationPermission::Granted }));
    deps.session_markers_repo
        .expect_set()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.chat_history_repo
        .expect_load_history()
        .return_once(|_, _| Box::pin(async { Ok(vec![]) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    service.connect("ana@deltazap.org", secret()).await?;
    assert_eq!(service.status(), SessionStatus::Connected);

    Ok(())
}

#[tokio::test]
async fn test_connect_reenters_stored_group_chats() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    record_events(&mut deps);

    deps.connection_service
        .expect_connect()
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.roster_service
        .expect_load_roster()
        .return_once(|| Box::pin(async { Ok(vec![]) }));
    deps.presence_service
        .expect_send_presence()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .return_once(|| Box::pin(async { NotificationPermission::Granted }));
    deps.session_markers_repo
        .expect_set()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.chat_history_repo
        .expect_load_history()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                let mut with_nickname = Chat::new(
                    chat_id!("mutirao@groups.deltazap.org"),
                    ChatKind::Group,
                    mock_data::reference_date(),
                );
                with_nickname.nickname = Some("aninha".to_string());
                let without_nickname = Chat::new(
                    chat_id!("feira@groups.deltazap.org"),
                    ChatKind::Group,
                    mock_data::reference_date(),
                );
                let individual = Chat::new(
                    chat_id!("bruno@deltazap.org"),
                    ChatKind::Individual,
                    mock_data::reference_date(),
                );
                Ok(vec![with_nickname, without_nickname, individual])
            })
        });

    let entered_rooms = Arc::new(Mutex::new(vec![]));
    {
        let entered_rooms = entered_rooms.clone();
        deps.room_service
            .expect_enter_room()
            .times(2)
            .returning(move |room, nickname| {
                entered_rooms
                    .lock()
                    .push((room.to_string(), nickname.to_string()));
                Box::pin(async { Ok(()) })
            });
    }

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    service.connect("ana@deltazap.org", secret()).await?;

    let mut entered_rooms = entered_rooms.lock().clone();
    entered_rooms.sort();
    assert_eq!(
        entered_rooms,
        vec![
            (
                "feira@groups.deltazap.org".to_string(),
                "ana".to_string()
            ),
            (
                "mutirao@groups.deltazap.org".to_string(),
                "aninha".to_string()
            ),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_connect_failure_sets_failed_status() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps);

    deps.connection_service
        .expect_connect()
        .once()
        .return_once(|_, _, _| Box::pin(async { Err(ConnectionError::InvalidCredentials) }));
    deps.session_markers_repo
        .expect_clear()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    let result = service.connect("ana@deltazap.org", secret()).await;

    assert!(matches!(
        result,
        Err(LoginError::Connection(ConnectionError::InvalidCredentials))
    ));
    assert_eq!(
        service.status(),
        SessionStatus::Failed {
            message: "Invalid credentials".to_string()
        }
    );
    assert_eq!(
        *events.lock(),
        vec![
            status_changed(SessionStatus::Connecting),
            status_changed(SessionStatus::Failed {
                message: "Invalid credentials".to_string()
            }),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_malformed_address_does_not_touch_session() -> Result<()> {
    let deps = MockAppDependencies::default().into_deps();
    let service = SessionService::from(&deps);

    let result = service.connect("ana.deltazap.org", secret()).await;

    assert!(matches!(result, Err(LoginError::MalformedAddress { .. })));
    assert_eq!(service.status(), SessionStatus::Disconnected);
    assert_eq!(service.account(), None);

    Ok(())
}

#[tokio::test]
async fn test_configured_admin_is_flagged() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let mut config = deltazap_core::AppConfig::default();
    config.admin_addresses = vec![mock_data::account()];
    deps.ctx = AppContext::new(config);
    record_events(&mut deps);

    deps.connection_service
        .expect_connect()
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.presence_service
        .expect_send_presence()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .return_once(|| Box::pin(async { NotificationPermission::Denied }));
    deps.roster_service
        .expect_load_roster()
        .return_once(|| Box::pin(async { Ok(vec![]) }));
    deps.session_markers_repo
        .expect_set()
        .once()
        .withf(|markers| markers.is_admin)
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.chat_history_repo
        .expect_load_history()
        .return_once(|_, _| Box::pin(async { Ok(vec![]) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    service.connect("ana@deltazap.org", secret()).await?;
    assert!(service.is_admin());

    Ok(())
}

#[tokio::test]
async fn test_disconnect_during_connect_discards_late_results() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps);

    let (roster_requested_tx, roster_requested_rx) = oneshot::channel::<()>();
    let (roster_tx, roster_rx) = oneshot::channel::<()>();

    deps.connection_service
        .expect_connect()
        .once()
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.connection_service
        .expect_disconnect()
        .once()
        .return_once(|| Box::pin(async {}));
    deps.presence_service
        .expect_send_presence()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .return_once(|| Box::pin(async { NotificationPermission::Granted }));
    deps.roster_service
        .expect_load_roster()
        .once()
        .return_once(move || {
            Box::pin(async move {
                _ = roster_requested_tx.send(());
                _ = roster_rx.await;
                Ok(vec![])
            })
        });
    deps.session_markers_repo
        .expect_clear()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));
    // Neither markers nor history may be written for the abandoned attempt.
    deps.session_markers_repo.expect_set().never();
    deps.chat_history_repo.expect_load_history().never();

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    let (connect_result, _) = tokio::join!(
        service.connect("ana@deltazap.org", secret()),
        async {
            _ = roster_requested_rx.await;
            service.disconnect().await;
            _ = roster_tx.send(());
        }
    );

    assert!(connect_result.is_ok());
    assert_eq!(service.status(), SessionStatus::Disconnected);
    assert_eq!(service.account(), None);
    assert_eq!(
        *events.lock(),
        vec![
            status_changed(SessionStatus::Connecting),
            status_changed(SessionStatus::Disconnected),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_disconnect_is_idempotent() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx = AppContext::connected();

    deps.presence_service
        .expect_send_unavailable_presence()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.connection_service
        .expect_disconnect()
        .times(2)
        .returning(|| Box::pin(async {}));
    deps.session_markers_repo
        .expect_clear()
        .times(2)
        .returning(|| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(status_changed(SessionStatus::Disconnected)))
        .return_const(());

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    service.disconnect().await;
    service.disconnect().await;

    assert_eq!(service.status(), SessionStatus::Disconnected);
    assert!(deps.ctx.session.lock().conversations.chats().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_restore_session_without_markers() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.session_markers_repo
        .expect_get()
        .once()
        .return_once(|| Box::pin(async { Ok(None) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    assert!(!service.restore_session().await?);
    assert_eq!(service.status(), SessionStatus::Disconnected);

    Ok(())
}

#[tokio::test]
async fn test_restore_session_reuses_markers() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps);

    deps.session_markers_repo.expect_get().once().return_once(|| {
        Box::pin(async {
            Ok(Some(SessionMarkers {
                user_id: mock_data::account(),
                full_jid: "ana@deltazap.org/laptop".parse()?,
                secret: secret(),
                is_admin: true,
            }))
        })
    });
    deps.connection_service
        .expect_connect()
        .once()
        .withf(|_, jid, _| jid.to_string() == "ana@deltazap.org/laptop")
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.presence_service
        .expect_send_presence()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.notification_service
        .expect_request_permission()
        .return_once(|| Box::pin(async { NotificationPermission::Granted }));
    deps.roster_service
        .expect_load_roster()
        .return_once(|| Box::pin(async { Ok(vec![]) }));
    deps.session_markers_repo
        .expect_set()
        .once()
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.chat_history_repo
        .expect_load_history()
        .return_once(|_, _| Box::pin(async { Ok(vec![]) }));

    let deps = deps.into_deps();
    let service = SessionService::from(&deps);

    assert!(service.restore_session().await?);
    assert_eq!(service.status(), SessionStatus::Connected);
    assert!(service.is_admin());
    assert_eq!(
        events.lock().first(),
        Some(&status_changed(SessionStatus::Restoring))
    );

    Ok(())
}
