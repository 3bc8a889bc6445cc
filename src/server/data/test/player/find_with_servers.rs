use super::*;

/// Tests expanding a player registered on several servers.
///
/// Expected: Ok(Complete) with every server, ordered by name
#[tokio::test]
async fn expands_all_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::register_player(db, &player.id, "s2").await?;
    factory::register_player(db, &player.id, "s1").await?;

    let repo = PlayerRepository::new(db);
    let result = repo.find_with_servers(&player.id).await;

    assert!(result.is_ok());
    match result.unwrap() {
        PlayerLookup::Complete(found) => {
            assert_eq!(found.id, player.id);
            assert_eq!(
                found.servers,
                Some(vec!["s1".to_string(), "s2".to_string()])
            );
        }
        other => panic!("expected complete lookup, got {:?}", other),
    }

    Ok(())
}

/// Tests expanding a player with no memberships.
///
/// Expected: Ok(Complete) with an empty server list
#[tokio::test]
async fn expands_to_empty_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let lookup = repo.find_with_servers(&player.id).await.unwrap();

    let expected = Player::from_entity(player).with_servers(Vec::new());
    assert_eq!(lookup, PlayerLookup::Complete(expected));

    Ok(())
}

/// Tests expanding a player that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.find_with_servers("missing").await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));

    Ok(())
}

/// Tests the partial result when the membership query fails.
///
/// The membership table is left out of the schema so the second query fails after the
/// player row has been read.
///
/// Expected: Ok(Partial) carrying the bare player and an Unavailable error
#[tokio::test]
async fn returns_partial_player_when_membership_query_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let lookup = repo.find_with_servers(&player.id).await.unwrap();

    match lookup {
        PlayerLookup::Partial { player: found, error } => {
            assert_eq!(found.id, player.id);
            assert_eq!(found.username, player.username);
            assert_eq!(found.ign, player.ign);
            assert_eq!(found.friend_code, player.friend_code);
            assert_eq!(found.servers, None);
            assert!(matches!(error, RepositoryError::Unavailable(_)));
        }
        other => panic!("expected partial lookup, got {:?}", other),
    }

    Ok(())
}
