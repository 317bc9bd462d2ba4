// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use deltazap_store::rusqlite::{params, Connection, Row};
use deltazap_store::{Error, Store};

use crate::domain::conversations::models::{Chat, ChatHeader, Message, Reactions};
use crate::domain::conversations::repos::ChatHistoryRepository as DomainChatHistoryRepository;
use crate::domain::shared::models::{ChatId, MessageId, UserId};
use crate::infra::store::{from_millis, parse_column, parse_json_column, to_millis};

pub struct ChatHistoryRepository {
    store: Store,
}

impl ChatHistoryRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DomainChatHistoryRepository for ChatHistoryRepository {
    async fn upsert_chat(&self, owner: &UserId, chat: &ChatHeader) -> Result<()> {
        let owner = owner.to_string();
        let chat = chat.clone();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT INTO "user_chats"
                    ("owner", "chat_id", "kind", "name", "avatar", "participants", "nickname",
                     "unread_count", "updated_at")
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                    ON CONFLICT ("owner", "chat_id") DO UPDATE SET
                        "kind" = excluded."kind",
                        "name" = excluded."name",
                        "avatar" = excluded."avatar",
                        "participants" = excluded."participants",
                        "nickname" = excluded."nickname",
                        "unread_count" = excluded."unread_count",
                        "updated_at" = MAX("updated_at", excluded."updated_at")"#,
                    params![
                        owner,
                        chat.id.to_string(),
                        chat.kind.to_string(),
                        chat.name,
                        chat.avatar,
                        serde_json::to_string(&chat.participants)?,
                        chat.nickname,
                        chat.unread_count,
                        to_millis(&chat.updated_at)
                    ],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn append_message(&self, owner: &UserId, message: &Message) -> Result<()> {
        let owner = owner.to_string();
        let message = message.clone();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"INSERT OR IGNORE INTO "user_messages"
                    ("owner", "id", "chat_id", "sender", "content", "timestamp", "is_read",
                     "reactions", "kind", "filename", "reply_to", "is_forwarded")
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
                    params![
                        owner,
                        message.id.as_str(),
                        message.chat_id.to_string(),
                        message.sender,
                        message.content,
                        to_millis(&message.timestamp),
                        message.is_read,
                        serde_json::to_string(&message.reactions)?,
                        message.kind.to_string(),
                        message.filename,
                        message
                            .reply_to
                            .as_ref()
                            .map(serde_json::to_string)
                            .transpose()?,
                        message.is_forwarded
                    ],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn update_reactions(
        &self,
        owner: &UserId,
        chat_id: &ChatId,
        message_id: &MessageId,
        reactions: &Reactions,
    ) -> Result<()> {
        let owner = owner.to_string();
        let chat_id = chat_id.to_string();
        let message_id = message_id.to_string();
        let reactions = serde_json::to_string(reactions)?;
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"UPDATE "user_messages" SET "reactions" = ?
                    WHERE "owner" = ? AND "chat_id" = ? AND "id" = ?"#,
                    params![reactions, owner, chat_id, message_id],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn update_unread_count(
        &self,
        owner: &UserId,
        chat_id: &ChatId,
        count: u32,
    ) -> Result<()> {
        let owner = owner.to_string();
        let chat_id = chat_id.to_string();
        self.store
            .interact(move |conn| {
                conn.execute(
                    r#"UPDATE "user_chats" SET "unread_count" = ?
                    WHERE "owner" = ? AND "chat_id" = ?"#,
                    params![count, owner, chat_id],
                )?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    async fn load_history(&self, owner: &UserId, limit: u32) -> Result<Vec<Chat>> {
        let owner = owner.to_string();
        let chats = self
            .store
            .interact(move |conn| {
                let conn = &*conn;
                let mut statement = conn.prepare(
                    r#"SELECT "chat_id", "kind", "name", "avatar", "participants", "nickname",
                        "unread_count", "updated_at"
                    FROM "user_chats" WHERE "owner" = ? ORDER BY "updated_at" DESC"#,
                )?;
                let headers = statement
                    .query_map(params![owner], header_from_row)?
                    .collect::<Result<Vec<_>, _>>()?;

                headers
                    .into_iter()
                    .map(|header| {
                        let messages = load_messages(conn, &owner, &header.id, limit)?;
                        Ok(Chat::from_history(header, messages))
                    })
                    .collect::<Result<Vec<_>, Error>>()
            })
            .await?;
        Ok(chats)
    }
}

/// Returns the newest `limit` messages of a chat, in ascending order.
fn load_messages(
    conn: &Connection,
    owner: &str,
    chat_id: &ChatId,
    limit: u32,
) -> Result<Vec<Message>, Error> {
    let mut statement = conn.prepare(
        r#"SELECT "id", "chat_id", "sender", "content", "timestamp", "is_read", "reactions",
            "kind", "filename", "reply_to", "is_forwarded"
        FROM "user_messages" WHERE "owner" = ? AND "chat_id" = ?
        ORDER BY "timestamp" DESC LIMIT ?"#,
    )?;
    let mut messages = statement
        .query_map(params![owner, chat_id.to_string(), limit], message_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    messages.reverse();
    Ok(messages)
}

fn header_from_row(row: &Row) -> deltazap_store::rusqlite::Result<ChatHeader> {
    Ok(ChatHeader {
        id: parse_column(0, row.get(0)?)?,
        kind: parse_column(1, row.get(1)?)?,
        name: row.get(2)?,
        avatar: row.get(3)?,
        participants: parse_json_column(4, row.get(4)?)?,
        nickname: row.get(5)?,
        unread_count: row.get(6)?,
        updated_at: from_millis(row.get(7)?),
    })
}

fn message_from_row(row: &Row) -> deltazap_store::rusqlite::Result<Message> {
    Ok(Message {
        id: MessageId::from(row.get::<_, String>(0)?),
        chat_id: parse_column(1, row.get(1)?)?,
        sender: row.get(2)?,
        content: row.get(3)?,
        timestamp: from_millis(row.get(4)?),
        is_read: row.get(5)?,
        reactions: parse_json_column(6, row.get(6)?)?,
        kind: parse_column(7, row.get(7)?)?,
        filename: row.get(8)?,
        reply_to: row
            .get::<_, Option<String>>(9)?
            .map(|json| parse_json_column(9, json))
            .transpose()?,
        is_forwarded: row.get(10)?,
    })
}
