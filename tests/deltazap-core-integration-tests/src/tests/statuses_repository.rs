// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use deltazap_core::domain::content::repos::StatusesRepository as _;
use deltazap_core::infra::content::StatusesRepository;
use deltazap_core::test::mock_data;
use deltazap_core::user_id;

use crate::tests::store;

#[tokio::test]
async fn test_returns_latest_recent_post_per_user() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = StatusesRepository::new(store);
    let now = mock_data::reference_date();

    let ana = user_id!("ana@deltazap.org");
    let bruno = user_id!("bruno@deltazap.org");
    let carla = user_id!("carla@deltazap.org");
    let stranger = user_id!("x@elsewhere.org");

    repo.insert(&ana, "Bom dia".to_string(), now - Duration::hours(3))
        .await?;
    let ana_latest = repo
        .insert(&ana, "Almoço!".to_string(), now - Duration::hours(1))
        .await?;
    // Too old.
    repo.insert(&bruno, "Ontem".to_string(), now - Duration::hours(25))
        .await?;
    let carla_post = repo
        .insert(&carla, "Exatamente no limite".to_string(), now - Duration::hours(24))
        .await?;
    repo.insert(&stranger, "Not in roster".to_string(), now)
        .await?;

    let posts = repo
        .get_statuses_for_roster(&[ana.clone(), bruno, carla], now, Duration::hours(24))
        .await?;

    assert_eq!(posts, vec![ana_latest, carla_post]);

    Ok(())
}

#[tokio::test]
async fn test_delete_only_removes_own_posts() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = StatusesRepository::new(store);
    let now = mock_data::reference_date();
    let ana = user_id!("ana@deltazap.org");

    let post = repo.insert(&ana, "Oi".to_string(), now).await?;

    repo.delete(&user_id!("bruno@deltazap.org"), post.id).await?;
    assert_eq!(
        repo.get_statuses_for_roster(&[ana.clone()], now, Duration::hours(24))
            .await?
            .len(),
        1
    );

    repo.delete(&ana, post.id).await?;
    assert!(repo
        .get_statuses_for_roster(&[ana], now, Duration::hours(24))
        .await?
        .is_empty());

    assert!(repo
        .get_statuses_for_roster(&[], now, Duration::hours(24))
        .await?
        .is_empty());

    Ok(())
}
