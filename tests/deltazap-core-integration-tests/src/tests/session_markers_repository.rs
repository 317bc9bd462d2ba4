// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::{ExposeSecret, SecretString};

use deltazap_core::domain::session::models::SessionMarkers;
use deltazap_core::domain::session::repos::SessionMarkersRepository as _;
use deltazap_core::infra::session::SessionMarkersRepository;
use deltazap_core::test::mock_data;

use crate::tests::store;

#[tokio::test]
async fn test_markers_round_trip_and_clear() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = SessionMarkersRepository::new(store);

    assert!(repo.get().await?.is_none());

    repo.set(&SessionMarkers {
        user_id: mock_data::account(),
        full_jid: mock_data::account_jid(),
        secret: SecretString::new("first".to_string()),
        is_admin: false,
    })
    .await?;
    repo.set(&SessionMarkers {
        user_id: mock_data::account(),
        full_jid: mock_data::account_jid(),
        secret: SecretString::new("second".to_string()),
        is_admin: true,
    })
    .await?;

    let markers = repo.get().await?.expect("Markers were not saved");
    assert_eq!(markers.user_id, mock_data::account());
    assert_eq!(markers.full_jid, mock_data::account_jid());
    assert_eq!(markers.secret.expose_secret(), "second");
    assert!(markers.is_admin);

    repo.clear().await?;
    assert!(repo.get().await?.is_none());

    Ok(())
}
