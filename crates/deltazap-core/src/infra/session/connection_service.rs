// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use jid::FullJid;
use secrecy::SecretString;

use deltazap_xmpp::{ConnectionError, ServerEndpoint};

use crate::domain::session::services::ConnectionService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ConnectionService for XMPPClient {
    async fn connect(
        &self,
        endpoint: &ServerEndpoint,
        jid: &FullJid,
        secret: SecretString,
    ) -> Result<(), ConnectionError> {
        self.client.connect(endpoint, jid, secret).await
    }

    async fn disconnect(&self) {
        self.client.disconnect()
    }
}
