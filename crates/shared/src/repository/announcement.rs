use async_trait::async_trait;
use chrono::Utc;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::AnnouncementRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::CreateAnnouncementRequest;
use crate::model::announcement::Announcement;
use crate::schema::announcement::Announcements;
use crate::utils::AppError;

pub struct AnnouncementRepository {
    db_pool: ConnectionPool,
}

impl AnnouncementRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AnnouncementRepositoryTrait for AnnouncementRepository {
    async fn find_all(&self) -> Result<Vec<Announcement>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Announcements::AnnouncementId,
                Announcements::Title,
                Announcements::Content,
                Announcements::CreatedAt,
                Announcements::UpdatedAt,
            ])
            .from(Announcements::Table)
            .order_by(Announcements::AnnouncementId, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let announcements = sqlx::query_as_with::<_, Announcement, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await?;

        info!("Found {} announcements", announcements.len());

        Ok(announcements)
    }

    async fn create(&self, input: &CreateAnnouncementRequest) -> Result<Announcement, AppError> {
        let now = Utc::now();

        let (sql, values) = Query::insert()
            .into_table(Announcements::Table)
            .columns([
                Announcements::Title,
                Announcements::Content,
                Announcements::CreatedAt,
                Announcements::UpdatedAt,
            ])
            .values([
                input.title.clone().into(),
                input.content.clone().into(),
                now.into(),
                now.into(),
            ])
            .unwrap()
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let created = sqlx::query_as_with::<_, Announcement, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(AppError::SqlxError)?;

        info!("Announcement created with ID: {}", created.announcement_id);

        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let (sql, values) = Query::delete()
            .from_table(Announcements::Table)
            .and_where(Expr::col(Announcements::AnnouncementId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.db_pool)
            .await
            .map_err(AppError::SqlxError)?;

        if result.rows_affected() == 0 {
            error!("No announcement found to delete with ID: {id}");
            return Err(AppError::NotFound(format!(
                "Announcement with ID {id} not found",
            )));
        }

        info!("Announcement ID: {id} deleted successfully");
        Ok(())
    }
}
