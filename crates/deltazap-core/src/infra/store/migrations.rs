// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use deltazap_store::Migration;

/// Schema of the DeltaZap database. Migrations are append-only, never edit an existing one.
pub const MIGRATIONS: &[Migration] = &[r#"
    CREATE TABLE "notes" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "user_id" TEXT NOT NULL,
        "title" TEXT NOT NULL,
        "content" TEXT NOT NULL,
        "color" TEXT NOT NULL,
        "created_at" INTEGER NOT NULL,
        "updated_at" INTEGER NOT NULL
    );
    CREATE INDEX "notes_user_id" ON "notes" ("user_id");

    CREATE TABLE "appointments" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "user_id" TEXT NOT NULL,
        "title" TEXT NOT NULL,
        "description" TEXT,
        "starts_at" INTEGER NOT NULL,
        "ends_at" INTEGER,
        "location" TEXT
    );
    CREATE INDEX "appointments_user_id" ON "appointments" ("user_id", "starts_at");

    CREATE TABLE "support_materials" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "title" TEXT NOT NULL,
        "description" TEXT,
        "url" TEXT NOT NULL,
        "created_at" INTEGER NOT NULL
    );

    CREATE TABLE "internal_links" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "title" TEXT NOT NULL,
        "url" TEXT NOT NULL,
        "description" TEXT
    );

    CREATE TABLE "demands" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "user_id" TEXT NOT NULL,
        "title" TEXT NOT NULL,
        "description" TEXT NOT NULL,
        "status" TEXT NOT NULL DEFAULT 'Pendente',
        "created_at" INTEGER NOT NULL,
        "updated_at" INTEGER NOT NULL
    );
    CREATE INDEX "demands_user_id" ON "demands" ("user_id");

    CREATE TABLE "statuses" (
        "id" INTEGER PRIMARY KEY AUTOINCREMENT,
        "user_id" TEXT NOT NULL,
        "content" TEXT NOT NULL,
        "created_at" INTEGER NOT NULL
    );
    CREATE INDEX "statuses_user_id" ON "statuses" ("user_id", "created_at");

    CREATE TABLE "user_chats" (
        "owner" TEXT NOT NULL,
        "chat_id" TEXT NOT NULL,
        "kind" TEXT NOT NULL,
        "name" TEXT NOT NULL,
        "avatar" TEXT,
        "participants" TEXT NOT NULL DEFAULT '[]',
        "nickname" TEXT,
        "unread_count" INTEGER NOT NULL DEFAULT 0,
        "updated_at" INTEGER NOT NULL,
        PRIMARY KEY ("owner", "chat_id")
    );

    CREATE TABLE "user_messages" (
        "owner" TEXT NOT NULL,
        "id" TEXT NOT NULL,
        "chat_id" TEXT NOT NULL,
        "sender" TEXT NOT NULL,
        "content" TEXT NOT NULL,
        "timestamp" INTEGER NOT NULL,
        "is_read" INTEGER NOT NULL,
        "reactions" TEXT NOT NULL DEFAULT '{}',
        "kind" TEXT NOT NULL,
        "filename" TEXT,
        "reply_to" TEXT,
        "is_forwarded" INTEGER NOT NULL DEFAULT 0,
        PRIMARY KEY ("owner", "chat_id", "id")
    );
    CREATE INDEX "user_messages_chat" ON "user_messages" ("owner", "chat_id", "timestamp");

    CREATE TABLE "session_markers" (
        "key" TEXT PRIMARY KEY CHECK ("key" = 'current'),
        "user_id" TEXT NOT NULL,
        "full_jid" TEXT NOT NULL,
        "secret" TEXT NOT NULL,
        "is_admin" INTEGER NOT NULL
    );
"#];
