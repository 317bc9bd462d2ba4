// deltazap-core/deltazap-core-integration-tests
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::Duration;
use pretty_assertions::assert_eq;

use deltazap_core::domain::content::models::{
    AppointmentDraft, ContentError, DemandDraft, DemandStatus, InternalLinkDraft,
    SupportMaterialDraft,
};
use deltazap_core::domain::content::repos::{
    AppointmentsRepository as _, DemandsRepository as _, LibraryRepository as _,
};
use deltazap_core::infra::content::{
    AppointmentsRepository, DemandsRepository, LibraryRepository,
};
use deltazap_core::test::mock_data;
use deltazap_core::user_id;

use crate::tests::store;

#[tokio::test]
async fn test_appointments_are_ordered_by_start() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = AppointmentsRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let now = mock_data::reference_date();

    let assembly = repo
        .insert(
            &owner,
            AppointmentDraft {
                title: "Assembleia".to_string(),
                description: Some("Pauta anual".to_string()),
                starts_at: now + Duration::days(7),
                ends_at: Some(now + Duration::days(7) + Duration::hours(2)),
                location: Some("Sede".to_string()),
            },
        )
        .await?;
    let meeting = repo
        .insert(
            &owner,
            AppointmentDraft {
                title: "Reunião".to_string(),
                description: None,
                starts_at: now + Duration::days(1),
                ends_at: None,
                location: None,
            },
        )
        .await?;

    assert_eq!(repo.get_all(&owner).await?, vec![meeting.clone(), assembly]);

    repo.update(
        &owner,
        meeting.id,
        AppointmentDraft {
            title: "Reunião adiada".to_string(),
            description: None,
            starts_at: now + Duration::days(10),
            ends_at: None,
            location: None,
        },
    )
    .await?;

    let titles = repo
        .get_all(&owner)
        .await?
        .into_iter()
        .map(|a| a.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["Assembleia", "Reunião adiada"]);

    assert!(repo
        .get_all(&user_id!("bruno@deltazap.org"))
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_updating_a_foreign_appointment_fails() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = AppointmentsRepository::new(store);
    let now = mock_data::reference_date();

    let draft = AppointmentDraft {
        title: "Plantão".to_string(),
        description: None,
        starts_at: now,
        ends_at: None,
        location: None,
    };
    let appointment = repo
        .insert(&user_id!("ana@deltazap.org"), draft.clone())
        .await?;

    let err = repo
        .update(&user_id!("bruno@deltazap.org"), appointment.id, draft)
        .await
        .expect_err("Foreign appointments must not be updated");
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::NotFound {
            entity: "Appointment",
            id: appointment.id
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_demand_status_transitions() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = DemandsRepository::new(store);
    let owner = user_id!("ana@deltazap.org");
    let now = mock_data::reference_date();

    let first = repo
        .insert(
            &owner,
            DemandDraft {
                title: "Cesta básica".to_string(),
                description: "Família do bloco C".to_string(),
            },
            now,
        )
        .await?;
    let second = repo
        .insert(
            &owner,
            DemandDraft {
                title: "Vaga em creche".to_string(),
                description: "Rua 3".to_string(),
            },
            now + Duration::minutes(1),
        )
        .await?;
    assert_eq!(first.status, DemandStatus::Pending);

    repo.update_status(
        &owner,
        first.id,
        DemandStatus::InProgress,
        now + Duration::hours(1),
    )
    .await?;

    let demands = repo.get_all(&owner).await?;
    assert_eq!(
        demands.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );
    assert_eq!(demands[1].status, DemandStatus::InProgress);
    assert_eq!(demands[1].created_at, now);
    assert_eq!(demands[1].updated_at, now + Duration::hours(1));

    repo.delete(&owner, second.id).await?;
    let err = repo
        .update_status(&owner, second.id, DemandStatus::Done, now)
        .await
        .expect_err("Deleted demands cannot change their status");
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::NotFound {
            entity: "Demand",
            id: second.id
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_library() -> Result<()> {
    let (store, _dir) = store().await?;
    let repo = LibraryRepository::new(store);
    let now = mock_data::reference_date();

    let statute = repo
        .insert_support_material(
            SupportMaterialDraft {
                title: "Estatuto".to_string(),
                description: None,
                url: "https://deltazap.org/estatuto.pdf".to_string(),
            },
            now,
        )
        .await?;
    let guide = repo
        .insert_support_material(
            SupportMaterialDraft {
                title: "Guia de acolhimento".to_string(),
                description: Some("Para novos membros".to_string()),
                url: "https://deltazap.org/guia.pdf".to_string(),
            },
            now + Duration::minutes(1),
        )
        .await?;
    assert_eq!(
        repo.get_support_materials().await?,
        vec![guide.clone(), statute.clone()]
    );

    repo.delete_support_material(guide.id).await?;
    assert_eq!(repo.get_support_materials().await?, vec![statute]);

    for title in ["Wiki", "Calendário", "Formulários"] {
        repo.insert_internal_link(InternalLinkDraft {
            title: title.to_string(),
            url: format!("https://intranet.deltazap.org/{}", title.to_lowercase()),
            description: None,
        })
        .await?;
    }

    let links = repo.get_internal_links().await?;
    assert_eq!(
        links.iter().map(|l| l.title.as_str()).collect::<Vec<_>>(),
        vec!["Calendário", "Formulários", "Wiki"]
    );

    repo.update_internal_link(
        links[2].id,
        InternalLinkDraft {
            title: "Arquivo".to_string(),
            url: "https://intranet.deltazap.org/arquivo".to_string(),
            description: Some("Documentos antigos".to_string()),
        },
    )
    .await?;
    assert_eq!(repo.get_internal_links().await?[0].title, "Arquivo");

    let err = repo
        .update_internal_link(
            9999,
            InternalLinkDraft {
                title: "?".to_string(),
                url: "https://deltazap.org".to_string(),
                description: None,
            },
        )
        .await
        .expect_err("Unknown links cannot be updated");
    assert_eq!(
        err.downcast_ref::<ContentError>(),
        Some(&ContentError::NotFound {
            entity: "Internal link",
            id: 9999
        })
    );

    Ok(())
}
