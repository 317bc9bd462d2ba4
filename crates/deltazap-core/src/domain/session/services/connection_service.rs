// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::FullJid;
use secrecy::SecretString;

use deltazap_xmpp::{ConnectionError, ServerEndpoint};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        secret: SecretString,
    ) -> Result<(), ConnectionError>;
    async fn disconnect(&self);
}
