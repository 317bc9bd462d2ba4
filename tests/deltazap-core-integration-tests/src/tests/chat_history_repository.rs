// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use deltazap_core::domain::conversations::models::{
    ChatHeader, ChatKind, ContentKind, Message, ReplyRef,
};
use deltazap_core::domain::conversations::repos::ChatHistoryRepository as _;
use deltazap_core::dtos::{ChatId, MessageId};
use deltazap_core::infra::conversations::ChatHistoryRepository;
use deltazap_core::test::mock_data;
use deltazap_core::{chat_id, user_id};

use crate::tests::store;

fn header(id: ChatId) -> ChatHeader {
    ChatHeader {
        name: id.local_part().to_string(),
        id,
        kind: ChatKind::Individual,
        avatar: None,
        participants: vec![],
        nickname: None,
        unread_count: 0,
        updated_at: mock_data::reference_date(),
    }
}

fn message(chat_id: &ChatId, idx: i64) -> Message {
    Message {
        id: MessageId::from(format!("msg-{idx}")),
        chat_id: chat_id.clone(),
        sender: "bruno@deltazap.org".to_string(),
        content: format!("Mensagem {idx}"),
        timestamp: mock_data::reference_date() + Duration::seconds(idx),
        is_read: true,
        reactions: Default::default(),
        kind: ContentKind::Text,
        filename: None,
        reply_to: None,
        is_forwarded: false,
    }
}

#[tokio::test]
async fn test_loads_newest_messages_in_ascending_order() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let chat_id = chat_id!("bruno@deltazap.org");

    repo.upsert_chat(&owner, &header(chat_id.clone())).await?;

    // Inserted in reverse to make sure the order comes from the timestamps.
    for idx in (0..60).rev() {
        repo.append_message(&owner, &message(&chat_id, idx)).await?;
    }

    let chats = repo.load_history(&owner, 50).await?;
    assert_eq!(chats.len(), 1);

    let ids = chats[0]
        .messages
        .iter()
        .map(|m| m.id.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        ids,
        (10..60).map(|idx| format!("msg-{idx}")).collect::<Vec<_>>()
    );
    assert_eq!(chats[0].unread_count, 0);

    Ok(())
}

#[tokio::test]
async fn test_message_round_trip_and_dedup() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let chat_id = chat_id!("bruno@deltazap.org");

    let mut document = message(&chat_id, 1);
    document.kind = ContentKind::Document;
    document.content = "https://files.deltazap.org/ata.pdf".to_string();
    document.filename = Some("ata.pdf".to_string());
    document.is_read = false;
    document.is_forwarded = true;
    document.reply_to = Some(ReplyRef {
        id: "msg-0".into(),
        sender: Some("ana@deltazap.org".to_string()),
        preview: Some("Bom dia!".to_string()),
    });

    repo.upsert_chat(
        &owner,
        &ChatHeader {
            unread_count: 1,
            ..header(chat_id.clone())
        },
    )
    .await?;
    repo.append_message(&owner, &document).await?;

    let mut duplicate = document.clone();
    duplicate.content = "Changed".to_string();
    repo.append_message(&owner, &duplicate).await?;

    let chats = repo.load_history(&owner, 50).await?;
    assert_eq!(chats[0].messages, vec![document]);
    assert_eq!(chats[0].unread_count, 1);

    Ok(())
}

#[tokio::test]
async fn test_update_reactions() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let chat_id = chat_id!("bruno@deltazap.org");

    repo.upsert_chat(&owner, &header(chat_id.clone())).await?;
    repo.append_message(&owner, &message(&chat_id, 1)).await?;

    let reactions = BTreeMap::from([
        (
            "👍".to_string(),
            BTreeSet::from([
                "ana@deltazap.org".to_string(),
                "bruno@deltazap.org".to_string(),
            ]),
        ),
        (
            "❤️".to_string(),
            BTreeSet::from(["bruno@deltazap.org".to_string()]),
        ),
    ]);
    repo.update_reactions(&owner, &chat_id, &"msg-1".into(), &reactions)
        .await?;

    let chats = repo.load_history(&owner, 50).await?;
    assert_eq!(chats[0].messages[0].reactions, reactions);

    Ok(())
}

#[tokio::test]
async fn test_message_ids_are_scoped_to_their_chat() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let bruno = chat_id!("bruno@deltazap.org");
    let carla = chat_id!("carla@deltazap.org");

    repo.upsert_chat(&owner, &header(bruno.clone())).await?;
    repo.upsert_chat(&owner, &header(carla.clone())).await?;
    // Both peers happen to use the same id.
    repo.append_message(&owner, &message(&bruno, 1)).await?;
    repo.append_message(&owner, &message(&carla, 1)).await?;

    let reactions = BTreeMap::from([(
        "🎉".to_string(),
        BTreeSet::from(["ana@deltazap.org".to_string()]),
    )]);
    repo.update_reactions(&owner, &carla, &"msg-1".into(), &reactions)
        .await?;

    let chats = repo.load_history(&owner, 50).await?;
    assert_eq!(chats.len(), 2);

    let messages = |id: &ChatId| {
        chats
            .iter()
            .find(|chat| &chat.id == id)
            .map(|chat| chat.messages.clone())
            .unwrap_or_default()
    };
    assert_eq!(messages(&bruno).len(), 1);
    assert!(messages(&bruno)[0].reactions.is_empty());
    assert_eq!(messages(&carla).len(), 1);
    assert_eq!(messages(&carla)[0].reactions, reactions);

    Ok(())
}

#[tokio::test]
async fn test_unread_count_is_persisted() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let chat_id = chat_id!("bruno@deltazap.org");

    let mut unread = message(&chat_id, 1);
    unread.is_read = false;

    repo.upsert_chat(
        &owner,
        &ChatHeader {
            unread_count: 3,
            ..header(chat_id.clone())
        },
    )
    .await?;
    repo.append_message(&owner, &unread).await?;

    // The counter is taken as stored, not recounted from the read flags.
    assert_eq!(repo.load_history(&owner, 50).await?[0].unread_count, 3);

    repo.update_unread_count(&owner, &chat_id, 0).await?;
    assert_eq!(repo.load_history(&owner, 50).await?[0].unread_count, 0);

    Ok(())
}

#[tokio::test]
async fn test_upsert_keeps_latest_update_and_orders_chats() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let now = mock_data::reference_date();

    let mut bruno = header(chat_id!("bruno@deltazap.org"));
    bruno.updated_at = now + Duration::minutes(5);
    repo.upsert_chat(&owner, &bruno).await?;

    let mut group = header(chat_id!("mutirao@groups.deltazap.org"));
    group.kind = ChatKind::Group;
    group.name = "Mutirão".to_string();
    group.nickname = Some("ana".to_string());
    group.participants = vec![
        user_id!("bruno@deltazap.org"),
        user_id!("carla@deltazap.org"),
    ];
    group.updated_at = now + Duration::minutes(1);
    repo.upsert_chat(&owner, &group).await?;

    // An older timestamp must not move the chat back in time.
    let mut renamed = bruno.clone();
    renamed.name = "Bruno".to_string();
    renamed.updated_at = now;
    repo.upsert_chat(&owner, &renamed).await?;

    let chats = repo.load_history(&owner, 50).await?;
    assert_eq!(
        chats.iter().map(|c| c.header()).collect::<Vec<_>>(),
        vec![
            ChatHeader {
                updated_at: now + Duration::minutes(5),
                ..renamed
            },
            group
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_history_is_scoped_to_its_owner() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = ChatHistoryRepository::new(store);
    let chat_id = chat_id!("carla@deltazap.org");

    repo.upsert_chat(&user_id!("ana@deltazap.org"), &header(chat_id.clone()))
        .await?;
    repo.append_message(&user_id!("ana@deltazap.org"), &message(&chat_id, 1))
        .await?;

    assert!(repo
        .load_history(&user_id!("bruno@deltazap.org"), 50)
        .await?
        .is_empty());
    assert_eq!(
        repo.load_history(&user_id!("ana@deltazap.org"), 50)
            .await?
            .len(),
        1
    );

    Ok(())
}
