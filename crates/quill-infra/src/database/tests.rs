use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::{NewPost, PostStatus};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn sample_model(id: i32, status: &str) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id,
        title: "Hello".to_owned(),
        content: "<p>Hi</p>".to_owned(),
        meta_title: None,
        meta_description: None,
        tags: Some("intro,notes".to_owned()),
        status: status.to_owned(),
        image_url: None,
        video_url: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

/// Flatten the mock's transaction log into one searchable string. Debug
/// formatting escapes the quoting inside the SQL, so the backslashes are
/// stripped to let assertions use the literal statement text.
fn logged_sql(repo: PostgresPostRepository) -> String {
    format!("{:?}", repo.into_inner().into_transaction_log()).replace('\\', "")
}

fn sample_draft() -> NewPost {
    NewPost {
        title: "Hello".to_owned(),
        content: "<p>Hi</p>".to_owned(),
        meta_title: None,
        meta_description: None,
        tags: Some("intro,notes".to_owned()),
        status: PostStatus::Draft,
        image_url: None,
        video_url: None,
    }
}

#[tokio::test]
async fn find_by_id_normalizes_blank_media() {
    // Legacy rows may carry empty strings instead of NULLs; the read path
    // must fold both into "absent".
    let mut model = sample_model(7, "published");
    model.image_url = Some(String::new());
    model.video_url = Some("   ".to_owned());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let found = repo.find_by_id(7).await.unwrap().unwrap();

    assert_eq!(found.id, 7);
    assert_eq!(found.status, PostStatus::Published);
    assert_eq!(found.image_url, None);
    assert_eq!(found.video_url, None);
}

#[tokio::test]
async fn find_by_id_misses_return_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn create_skips_absent_media_columns() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_model(1, "draft")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let created = repo.create(sample_draft()).await.unwrap();
    assert_eq!(created.id, 1);

    // The INSERT must not touch the media columns when the draft carries
    // no URLs, leaving them at their NULL default. The RETURNING clause
    // lists every column, so each media column appears exactly once when
    // it is not part of the column list.
    let log = logged_sql(repo);
    assert!(log.contains("INSERT INTO"));
    assert_eq!(log.matches("image_url").count(), 1);
    assert_eq!(log.matches("video_url").count(), 1);
}

#[tokio::test]
async fn create_writes_media_columns_when_present() {
    let mut returned = sample_model(2, "draft");
    returned.image_url = Some("https://cdn.example/a.png".to_owned());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![returned]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let mut draft = sample_draft();
    draft.image_url = Some("https://cdn.example/a.png".to_owned());

    let created = repo.create(draft).await.unwrap();
    assert_eq!(created.image_url.as_deref(), Some("https://cdn.example/a.png"));

    // image_url shows up in the column list and in RETURNING; video_url
    // only in RETURNING.
    let log = logged_sql(repo);
    assert_eq!(log.matches("image_url").count(), 2);
    assert_eq!(log.matches("video_url").count(), 1);
}

#[tokio::test]
async fn create_rejects_empty_title() {
    // Validation fails before any statement is issued, so a mock with no
    // expectations is enough.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    let mut draft = sample_draft();
    draft.title = "   ".to_owned();

    match repo.create(draft).await {
        Err(RepoError::Constraint(_)) => {}
        other => panic!("expected constraint violation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    match repo.update(42, sample_draft()).await {
        Err(RepoError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn update_overwrites_mandatory_fields() {
    let mut returned = sample_model(3, "published");
    returned.title = "Updated".to_owned();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![returned]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let mut draft = sample_draft();
    draft.title = "Updated".to_owned();
    draft.status = PostStatus::Published;

    let updated = repo.update(3, draft).await.unwrap();
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.status, PostStatus::Published);

    // Media was absent from the draft, so the SET clause must leave those
    // columns alone instead of writing empty strings.
    let log = logged_sql(repo);
    assert!(log.contains("UPDATE"));
    assert!(!log.contains(r#""image_url" ="#));
    assert!(!log.contains(r#""video_url" ="#));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    assert!(repo.delete(12345).await.is_ok());
}

#[tokio::test]
async fn list_published_filters_and_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_model(1, "published")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_published().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].status, PostStatus::Published);

    let log = logged_sql(repo);
    assert!(log.contains(r#""status""#));
    assert!(log.contains("published"));
    assert!(log.contains(r#"ORDER BY "posts"."created_at" DESC"#));
}

#[tokio::test]
async fn list_all_is_unfiltered_and_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            sample_model(2, "published"),
            sample_model(1, "draft"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let posts = repo.list_all().await.unwrap();
    assert_eq!(posts.len(), 2);

    // Drafts are included: no WHERE clause, only the ordering.
    let log = logged_sql(repo);
    assert!(!log.contains("WHERE"));
    assert!(log.contains(r#"ORDER BY "posts"."created_at" DESC"#));
}
