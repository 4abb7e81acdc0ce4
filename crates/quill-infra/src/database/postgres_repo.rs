//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};

use quill_core::domain::{NewPost, Post, PostId, PostStatus};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Consume the repository and hand back the underlying connection.
    pub fn into_inner(self) -> DbConn {
        self.db
    }

    /// Build the write model for a create or update.
    ///
    /// The six mandatory columns are always set; the media columns are set
    /// only when the payload carries a value, so an absent URL neither
    /// inserts an empty string nor overwrites an existing one. Timestamps
    /// are left to the schema default on insert and refreshed explicitly
    /// on update.
    fn write_model(draft: NewPost) -> post::ActiveModel {
        post::ActiveModel {
            id: NotSet,
            title: Set(draft.title),
            content: Set(draft.content),
            meta_title: Set(draft.meta_title),
            meta_description: Set(draft.meta_description),
            tags: Set(draft.tags),
            status: Set(draft.status.to_string()),
            image_url: match draft.image_url {
                Some(url) => Set(Some(url)),
                None => NotSet,
            },
            video_url: match draft.video_url {
                Some(url) => Set(Some(url)),
                None => NotSet,
            },
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(e) => RepoError::Unavailable(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Unavailable(e.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("violates") || msg.contains("constraint") || msg.contains("null value")
            {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_published(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::Status.eq(PostStatus::Published.as_str()))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        draft.validate()?;

        let model = Self::write_model(draft)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "post created");
        Ok(model.into())
    }

    async fn update(&self, id: PostId, draft: NewPost) -> Result<Post, RepoError> {
        draft.validate()?;

        let mut active = Self::write_model(draft);
        active.id = Set(id);
        active.updated_at = Set(chrono::Utc::now().into());

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            tracing::debug!(post_id = id, "delete matched no row");
        }
        Ok(())
    }
}
