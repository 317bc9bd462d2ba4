// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppConfig;
pub use app::services;
pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, UndefinedStore};
pub use client_event::ClientEvent;
pub use deltazap_store::Store;
pub use domain::session::services::{NotificationService, WindowFocusProvider};
pub use deltazap_xmpp::{ConnectionError, ServerEndpoint};
pub use infra::store::open_store;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

pub mod dtos;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
