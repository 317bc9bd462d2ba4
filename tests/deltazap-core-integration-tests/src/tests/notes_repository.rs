// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use deltazap_core::domain::content::models::{ContentError, NoteDraft, NOTE_COLORS};
use deltazap_core::domain::content::repos::NotesRepository as _;
use deltazap_core::infra::content::NotesRepository;
use deltazap_core::test::mock_data;
use deltazap_core::user_id;

use crate::tests::store;

fn draft(title: &str) -> NoteDraft {
    NoteDraft {
        title: title.to_string(),
        content: "…".to_string(),
    }
}

#[tokio::test]
async fn test_note_limit_is_enforced() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = NotesRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let now = mock_data::reference_date();

    for idx in 0..200 {
        repo.insert(&owner, draft(&format!("Note {idx}")), 200, now)
            .await?;
    }

    let err = repo
        .insert(&owner, draft("Note 201"), 200, now)
        .await
        .expect_err("The 201st note must be rejected");
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::NoteLimitReached { limit: 200 })
    );
    assert_eq!(repo.get_all(&owner).await?.len(), 200);

    // The limit is per user.
    repo.insert(&user_id!("bruno@deltazap.org"), draft("Note"), 200, now)
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_notes_are_sorted_by_last_update() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = NotesRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let now = mock_data::reference_date();

    let first = repo.insert(&owner, draft("Primeira"), 200, now).await?;
    let second = repo
        .insert(&owner, draft("Segunda"), 200, now + Duration::minutes(1))
        .await?;
    assert!(NOTE_COLORS.contains(&first.color.as_str()));

    assert_eq!(
        repo.get_all(&owner)
            .await?
            .into_iter()
            .map(|note| note.id)
            .collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    repo.update(
        &owner,
        first.id,
        draft("Primeira (editada)"),
        now + Duration::minutes(2),
    )
    .await?;

    let notes = repo.get_all(&owner).await?;
    assert_eq!(notes[0].id, first.id);
    assert_eq!(notes[0].title, "Primeira (editada)");
    assert_eq!(notes[0].created_at, now);
    assert_eq!(notes[0].updated_at, now + Duration::minutes(2));

    Ok(())
}

#[tokio::test]
async fn test_notes_are_scoped_to_their_owner() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = NotesRepository::new(store);
    let now = mock_data::reference_date();

    let note = repo
        .insert(&user_id!("ana@deltazap.org"), draft("Particular"), 200, now)
        .await?;

    let err = repo
        .update(&user_id!("bruno@deltazap.org"), note.id, draft("Hack"), now)
        .await
        .expect_err("Foreign notes must not be updated");
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::NotFound {
            entity: "Note",
            id: note.id
        })
    );

    repo.delete(&user_id!("bruno@deltazap.org"), note.id).await?;
    assert_eq!(repo.get_all(&user_id!("ana@deltazap.org")).await?.len(), 1);
    assert!(repo
        .get_all(&user_id!("bruno@deltazap.org"))
        .await?
        .is_empty());

    repo.delete(&user_id!("ana@deltazap.org"), note.id).await?;
    assert!(repo.get_all(&user_id!("ana@deltazap.org")).await?.is_empty());

    Ok(())
}
