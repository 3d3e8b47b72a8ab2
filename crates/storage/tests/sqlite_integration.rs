use sqlx::Row;
use storage::repository::{PROGRESS_STORAGE_KEY, ProgressRepository};
use storage::sqlite::SqliteRepository;
use studio_core::model::{ModuleId, ProgressSet, ProgressUpdate};

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn empty_database_loads_nothing() {
    let repo = connect("memdb_empty").await;
    assert!(repo.load().await.expect("load").is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_every_field() {
    let repo = connect("memdb_roundtrip").await;

    let mut set = ProgressSet::default();
    set.apply(ModuleId::HtmlCss, ProgressUpdate::lesson_viewed())
        .unwrap();
    set.apply(ModuleId::HtmlCss, ProgressUpdate::practice_attempted())
        .unwrap();
    set.apply(ModuleId::Python, ProgressUpdate::assessment_submitted(4))
        .unwrap();
    set.apply(ModuleId::Javascript, ProgressUpdate::time_spent_total(307))
        .unwrap();

    repo.save(&set).await.expect("save");
    let loaded = repo.load().await.expect("load").expect("stored set");
    assert_eq!(loaded, set);
}

#[tokio::test]
async fn save_overwrites_prior_state() {
    let repo = connect("memdb_overwrite").await;

    let mut first = ProgressSet::default();
    first
        .apply(ModuleId::Python, ProgressUpdate::time_spent_total(10))
        .unwrap();
    repo.save(&first).await.expect("save first");

    let mut second = first.clone();
    second
        .apply(ModuleId::Python, ProgressUpdate::time_spent_total(55))
        .unwrap();
    repo.save(&second).await.expect("save second");

    let loaded = repo.load().await.expect("load").expect("stored set");
    assert_eq!(loaded.record(ModuleId::Python).time_spent_seconds(), 55);
}

#[tokio::test]
async fn malformed_blob_degrades_to_nothing() {
    let repo = connect("memdb_malformed").await;

    sqlx::query("INSERT INTO kv_store (key, value) VALUES (?1, ?2)")
        .bind(PROGRESS_STORAGE_KEY)
        .bind("{\"PYTHON\": truncated")
        .execute(repo.pool())
        .await
        .expect("seed raw blob");

    assert!(repo.load().await.expect("load").is_none());
}

#[tokio::test]
async fn blob_is_stored_under_the_fixed_key() {
    let repo = connect("memdb_key").await;
    repo.save(&ProgressSet::default()).await.expect("save");

    let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
        .bind(PROGRESS_STORAGE_KEY)
        .fetch_one(repo.pool())
        .await
        .expect("fetch row");
    let value: String = row.try_get("value").expect("value column");
    assert!(value.contains("\"HTML_CSS\""));
}
