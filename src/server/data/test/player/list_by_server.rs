use super::*;

/// Tests listing the players registered on a server.
///
/// Verifies that only players with a membership on the requested server are returned,
/// ordered by username, and without the redundant server list.
///
/// Expected: Ok with the two matching players
#[tokio::test]
async fn lists_only_players_on_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let misty = factory::player::PlayerFactory::new(db)
        .username("Misty")
        .build()
        .await?;
    let brock = factory::player::PlayerFactory::new(db)
        .username("Brock")
        .build()
        .await?;
    let gary = factory::player::PlayerFactory::new(db)
        .username("Gary")
        .build()
        .await?;
    factory::register_player(db, &misty.id, "Kanto").await?;
    factory::register_player(db, &brock.id, "Kanto").await?;
    factory::register_player(db, &gary.id, "Johto").await?;

    let repo = PlayerRepository::new(db);
    let players = repo.list_by_server("Kanto").await.unwrap();

    let names: Vec<&str> = players.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["Brock", "Misty"]);
    assert!(players.iter().all(|p| p.servers.is_none()));

    Ok(())
}

/// Tests that a player registered on several servers appears once per listed server.
///
/// Expected: Ok with the player listed under each server exactly once
#[tokio::test]
async fn lists_multi_server_player_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::register_player(db, &player.id, "Kanto").await?;
    factory::register_player(db, &player.id, "Johto").await?;

    let repo = PlayerRepository::new(db);
    let kanto = repo.list_by_server("Kanto").await.unwrap();
    let johto = repo.list_by_server("Johto").await.unwrap();

    assert_eq!(kanto.len(), 1);
    assert_eq!(johto.len(), 1);
    assert_eq!(kanto[0].id, player.id);

    Ok(())
}

/// Tests listing an unknown server.
///
/// Expected: Ok with an empty list, not an error
#[tokio::test]
async fn returns_empty_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::register_player(db, &player.id, "Kanto").await?;

    let repo = PlayerRepository::new(db);
    let result = repo.list_by_server("Hoenn").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
