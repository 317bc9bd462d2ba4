// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use deltazap_xmpp::client::ConnectorProvider;
use deltazap_xmpp::{mods, Client, ClientBuilder, Event, IDProvider, TimeProvider};

#[derive(Clone)]
pub struct XMPPClient {
    pub(crate) client: Arc<Client>,
}

impl XMPPClient {
    pub fn builder() -> XMPPClientBuilder {
        XMPPClientBuilder {
            builder: Client::builder(),
        }
    }
}

pub struct XMPPClientBuilder {
    builder: ClientBuilder,
}

impl XMPPClientBuilder {
    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.builder = self.builder.set_time_provider(time_provider);
        self
    }

    pub fn set_event_handler<T>(
        mut self,
        handler: impl Fn(Client, Event) -> T + Send + Sync + 'static,
    ) -> Self
    where
        T: Future<Output = ()> + Send + 'static,
    {
        self.builder = self.builder.set_event_handler(handler);
        self
    }

    pub fn build(self) -> XMPPClient {
        let client = self
            .builder
            .add_mod(mods::Chat::default())
            .add_mod(mods::MUC::default())
            .add_mod(mods::Roster::default())
            .add_mod(mods::Status::default())
            .build();

        XMPPClient {
            client: Arc::new(client),
        }
    }
}
