// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_history_repository::ChatHistoryRepository;

mod chat_history_repository;
mod messaging_service;
mod room_service;
