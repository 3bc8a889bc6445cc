use super::*;

/// Tests finding an existing player.
///
/// Expected: Ok with the bare player (servers not expanded)
#[tokio::test]
async fn finds_bare_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::register_player(db, &player.id, "Kanto").await?;

    let repo = PlayerRepository::new(db);
    let result = repo.find_by_id(&player.id).await;

    assert!(result.is_ok());
    let found = result.unwrap();
    assert_eq!(found.id, player.id);
    assert_eq!(found.username, player.username);
    assert_eq!(found.servers, None);

    Ok(())
}

/// Tests querying for a player that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.find_by_id("missing").await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
