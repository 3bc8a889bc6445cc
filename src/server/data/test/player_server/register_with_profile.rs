use super::*;

fn profile(id: &str, username: &str) -> CreatePlayerParam {
    CreatePlayerParam {
        id: id.to_string(),
        username: username.to_string(),
        ign: "Red".to_string(),
        friend_code: "111122223333".to_string(),
        egg_ultra: None,
    }
}

/// Tests registering a player that does not exist yet.
///
/// Expected: Ok with the player created and listed on the server
#[tokio::test]
async fn creates_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerServerRepository::new(db);
    let result = repo.register_with_profile(profile("u1", "Ash"), "Kanto").await;

    assert!(result.is_ok());
    let listed = PlayerRepository::new(db)
        .list_by_server("Kanto")
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].username, "Ash");

    Ok(())
}

/// Tests registering an existing player with a different profile.
///
/// Expected: Ok with the stored profile unchanged
#[tokio::test]
async fn keeps_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .id("u1")
        .username("Misty")
        .build()
        .await?;

    let repo = PlayerServerRepository::new(db);
    repo.register_with_profile(profile("u1", "Ash"), "Kanto")
        .await
        .unwrap();

    let player = PlayerRepository::new(db).find_by_id("u1").await.unwrap();
    assert_eq!(player.username, "Misty");

    Ok(())
}

/// Tests two concurrent registrations of the same new player on different servers.
///
/// Expected: Ok for both and the player is a member of both servers
#[tokio::test]
async fn concurrent_registrations_both_succeed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerServerRepository::new(db);
    let (kanto, johto) = tokio::join!(
        repo.register_with_profile(profile("u1", "Ash"), "Kanto"),
        repo.register_with_profile(profile("u1", "Ash"), "Johto"),
    );

    assert!(kanto.is_ok());
    assert!(johto.is_ok());
    let lookup = PlayerRepository::new(db)
        .find_with_servers("u1")
        .await
        .unwrap();
    let PlayerLookup::Complete(found) = lookup else {
        panic!("expected complete lookup");
    };
    assert_eq!(
        found.servers,
        Some(vec!["Johto".to_string(), "Kanto".to_string()])
    );

    Ok(())
}

/// Tests registering the same player on the same server twice.
///
/// Expected: Err(DuplicateKey) on the second registration
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerServerRepository::new(db);
    repo.register_with_profile(profile("u1", "Ash"), "Kanto")
        .await
        .unwrap();
    let result = repo.register_with_profile(profile("u1", "Ash"), "Kanto").await;

    assert!(matches!(result, Err(RepositoryError::DuplicateKey(_))));

    Ok(())
}

/// Tests that a failed registration does not leave a newly created player behind.
///
/// The membership table is missing so the second insert fails.
///
/// Expected: Err(Unavailable) and no player row
#[tokio::test]
async fn rolls_back_player_when_registration_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerServerRepository::new(db);
    let result = repo.register_with_profile(profile("u1", "Ash"), "Kanto").await;

    assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    let result = PlayerRepository::new(db).find_by_id("u1").await;
    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
