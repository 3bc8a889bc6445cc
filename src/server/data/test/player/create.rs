use super::*;
use sea_orm::EntityTrait;

/// Tests creating a new player.
///
/// Verifies that the repository stores every profile field and returns a bare player.
///
/// Expected: Ok with the stored profile and no servers
#[tokio::test]
async fn creates_new_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo
        .create(CreatePlayerParam {
            egg_ultra: Some(true),
            ..ash()
        })
        .await;

    assert!(result.is_ok());
    let player = result.unwrap();
    assert_eq!(player.id, "u1");
    assert_eq!(player.username, "Ash");
    assert_eq!(player.ign, "AshK");
    assert_eq!(player.friend_code, "111122223333");
    assert_eq!(player.egg_ultra, Some(true));
    assert_eq!(player.servers, None);

    Ok(())
}

/// Tests creating a player whose id is already taken.
///
/// Verifies that the second insert is rejected as a duplicate and the first row is left
/// unchanged (no upsert).
///
/// Expected: Err(DuplicateKey) and original profile still stored
#[tokio::test]
async fn rejects_duplicate_id_without_updating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.create(ash()).await.unwrap();

    let result = repo
        .create(CreatePlayerParam {
            username: "Gary".to_string(),
            ign: "GaryO".to_string(),
            ..ash()
        })
        .await;

    assert!(matches!(result, Err(RepositoryError::DuplicateKey(_))));

    let stored = entity::prelude::Player::find_by_id("u1")
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.username, "Ash");
    assert_eq!(stored.ign, "AshK");

    Ok(())
}

/// Tests creating a player when the storage layer is missing its table.
///
/// Expected: Err(Unavailable)
#[tokio::test]
async fn reports_storage_failure_as_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.create(ash()).await;

    assert!(matches!(result, Err(RepositoryError::Unavailable(_))));

    Ok(())
}
