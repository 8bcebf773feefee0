use super::*;

/// Expect Ok with a planet favorite referencing only the planet
#[tokio::test]
async fn creates_planet_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service.create_planet_favorite(1, 1).await;

    assert!(result.is_ok());
    let favorite = result.unwrap();
    assert_eq!(favorite.user_id, 1);
    assert_eq!(favorite.planet_id, Some(1));
    assert_eq!(favorite.people_id, None);

    Ok(())
}

/// Expect Ok with a people favorite referencing only the person
#[tokio::test]
async fn creates_people_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_person("Han Solo")
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let favorite = favorite_service.create_people_favorite(1, 1).await.unwrap();

    assert_eq!(favorite.planet_id, None);
    assert_eq!(favorite.people_id, Some(1));

    Ok(())
}

/// Expect UserNotFound & no favorite written for a user not present in table
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_planet("Alderaan")
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service.create_planet_favorite(1, 1).await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::UserNotFound(1)))
    ));
    assert!(FavoriteRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect PlanetsNotFound & no favorite written for a planet not present in table
#[tokio::test]
async fn fails_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service.create_planet_favorite(1, 5).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::PlanetsNotFound(5)))
    ));
    assert!(FavoriteRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect PeopleNotFound for a person not present in table
#[tokio::test]
async fn fails_for_nonexistent_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service.create_people_favorite(1, 2).await;

    assert!(matches!(
        result,
        Err(Error::CatalogError(CatalogError::PeopleNotFound(2)))
    ));

    Ok(())
}

/// Expect AlreadyFavorited & a single row when favoriting the same planet twice
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_user("leia@alderaan.net")
        .with_planet("Alderaan")
        .with_planet_favorite(1, 1)
        .build()
        .await?;

    let favorite_service = FavoriteService::new(&test.db);
    let result = favorite_service.create_planet_favorite(1, 1).await;

    assert!(matches!(
        result,
        Err(Error::FavoriteError(
            FavoriteError::PlanetAlreadyFavorited { .. }
        ))
    ));
    assert_eq!(FavoriteRepository::new(&test.db).get_all().await?.len(), 1);

    Ok(())
}
