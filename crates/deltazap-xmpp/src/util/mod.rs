// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::pin::Pin;

pub use element_ext::{ElementBuilderExt, ElementExt};
pub use request_error::{ParseError, RequestError};
pub use xmpp_element::XMPPElement;

mod element_ext;
mod request_error;
mod xmpp_element;

pub type PinnedFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;
