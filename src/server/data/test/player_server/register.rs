use super::*;

/// Tests registering a player on a server.
///
/// Expected: Ok and the player is listed on that server
#[tokio::test]
async fn registers_player_on_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerServerRepository::new(db);
    let result = repo.register(&player.id, "Kanto").await;

    assert!(result.is_ok());
    let listed = PlayerRepository::new(db)
        .list_by_server("Kanto")
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, player.id);

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

    let player = factory::create_player(db).await?;

    let repo = PlayerServerRepository::new(db);
    repo.register(&player.id, "s1").await.unwrap();
    let result = repo.register(&player.id, "s1").await;

    assert!(matches!(result, Err(RepositoryError::DuplicateKey(_))));

    Ok(())
}

/// Tests registering one player on two servers.
///
/// Expected: Ok for both and the expanded player lists both servers
#[tokio::test]
async fn registers_player_on_multiple_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerServerRepository::new(db);
    assert!(repo.register(&player.id, "s1").await.is_ok());
    assert!(repo.register(&player.id, "s2").await.is_ok());

    let lookup = PlayerRepository::new(db)
        .find_with_servers(&player.id)
        .await
        .unwrap();
    let PlayerLookup::Complete(found) = lookup else {
        panic!("expected complete lookup");
    };
    let mut servers = found.servers.unwrap();
    servers.sort();
    assert_eq!(servers, vec!["s1".to_string(), "s2".to_string()]);

    Ok(())
}

/// Tests registering a player id that was never created.
///
/// The membership foreign key rejects the row.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerServerRepository::new(db);
    let result = repo.register("ghost", "Kanto").await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}
