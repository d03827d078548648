//! Integration tests for the bundled seed fixture loader.

use assert_matches::assert_matches;
use sqlx::SqlitePool;
use tmnt_core::collection::Collection;
use tmnt_db::repositories::{CatalogRepo, EpisodeRepo, VillainRepo};
use tmnt_db::seed::{self, CatalogFixture, SeedError};

#[sqlx::test(migrations = "./migrations")]
async fn test_load_inserts_whole_fixture(pool: SqlitePool) {
    let fixture = CatalogFixture::bundled().unwrap();
    let report = seed::load(&pool, &fixture).await.unwrap();

    assert_eq!(report.skipped(), 0);
    let turtles = report.get(Collection::Turtles).unwrap();
    assert_eq!(turtles.inserted, fixture.turtles.len());
    assert_eq!(
        CatalogRepo::count(&pool, Collection::Episodes).await.unwrap() as usize,
        fixture.episodes.len()
    );

    let shredder = VillainRepo::find_by_name(&pool, "shredder")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shredder.arch_enemy_of.as_deref(), Some("Splinter"));

    let premiere = EpisodeRepo::find_by_episode_id(&pool, 1)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(premiere.title, "Turtle Tracks");
    assert!(premiere.cast.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_load_skips_everything(pool: SqlitePool) {
    let fixture = CatalogFixture::bundled().unwrap();
    let first = seed::load(&pool, &fixture).await.unwrap();
    let second = seed::load(&pool, &fixture).await.unwrap();

    assert_eq!(second.inserted(), 0);
    assert_eq!(second.skipped(), first.inserted());
    for collection in Collection::ALL {
        let count = CatalogRepo::count(&pool, collection).await.unwrap() as usize;
        assert_eq!(count, first.get(collection).unwrap().inserted);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_load_after_clear_restores_catalog(pool: SqlitePool) {
    let fixture = CatalogFixture::bundled().unwrap();
    let first = seed::load(&pool, &fixture).await.unwrap();
    CatalogRepo::clear_all(&pool).await.unwrap();

    let again = seed::load(&pool, &fixture).await.unwrap();
    assert_eq!(again.inserted(), first.inserted());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_load_covers_every_season(pool: SqlitePool) {
    let fixture = CatalogFixture::bundled().unwrap();
    let report = seed::load(&pool, &fixture).await.unwrap();
    assert_eq!(report.get(Collection::Episodes).unwrap().inserted, 184);

    let finale = EpisodeRepo::find_by_episode_id(&pool, 184)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(finale.season, 10);
    let roles: Vec<String> = finale
        .cast
        .unwrap()
        .0
        .into_iter()
        .map(|member| member.role)
        .collect();
    assert!(roles.iter().any(|role| role == "special_guest"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_invalid_record_writes_nothing(pool: SqlitePool) {
    let mut fixture = CatalogFixture::bundled().unwrap();
    let last = fixture.weapons.len() - 1;
    fixture.weapons[last].description = String::new();

    let err = seed::load(&pool, &fixture).await.unwrap_err();
    assert_matches!(
        err,
        SeedError::Validation {
            collection: Collection::Weapons,
            ..
        }
    );
    for collection in Collection::ALL {
        assert_eq!(CatalogRepo::count(&pool, collection).await.unwrap(), 0);
    }
}
