use async_trait::async_trait;
use chrono::Utc;
use sea_query::{Expr, OnConflict, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::TopupRepositoryTrait;
use crate::config::ConnectionPool;
use crate::domain::request::CreateTopupRequest;
use crate::model::topup::{Topup, TopupStatus};
use crate::model::wallet::Wallet;
use crate::schema::topup::Topups;
use crate::schema::wallet::Wallets;
use crate::utils::AppError;

pub struct TopupRepository {
    db_pool: ConnectionPool,
}

impl TopupRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    /// Resolves why a status flip matched zero rows: the record is either
    /// gone or already settled.
    async fn settle_conflict(&self, id: i32) -> AppError {
        match self.find_by_id(id).await {
            Ok(Some(existing)) => {
                error!("Topup ID {id} is already {}", existing.status);
                AppError::Conflict(format!(
                    "Topup with ID {id} is already {}",
                    existing.status
                ))
            }
            Ok(None) => AppError::NotFound(format!("Topup with ID {id} not found")),
            Err(e) => e,
        }
    }
}

#[async_trait]
impl TopupRepositoryTrait for TopupRepository {
    async fn find_all(&self) -> Result<Vec<Topup>, AppError> {
        info!("Getting all topups");

        let (sql, values) = Query::select()
            .columns([
                Topups::TopupId,
                Topups::UserId,
                Topups::Amount,
                Topups::AccountType,
                Topups::AccountNumber,
                Topups::Status,
                Topups::CreatedAt,
                Topups::UpdatedAt,
            ])
            .from(Topups::Table)
            .order_by(Topups::TopupId, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let topups = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await?;

        info!("Found {} topups", topups.len());

        Ok(topups)
    }

    async fn find_by_status(&self, status: TopupStatus) -> Result<Vec<Topup>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Topups::TopupId,
                Topups::UserId,
                Topups::Amount,
                Topups::AccountType,
                Topups::AccountNumber,
                Topups::Status,
                Topups::CreatedAt,
                Topups::UpdatedAt,
            ])
            .from(Topups::Table)
            .and_where(Expr::col(Topups::Status).eq(status.as_str()))
            .order_by(Topups::TopupId, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let topups = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await?;

        Ok(topups)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Topup>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Topups::TopupId,
                Topups::UserId,
                Topups::Amount,
                Topups::AccountType,
                Topups::AccountNumber,
                Topups::Status,
                Topups::CreatedAt,
                Topups::UpdatedAt,
            ])
            .from(Topups::Table)
            .and_where(Expr::col(Topups::TopupId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(row)
    }

    async fn create(&self, input: &CreateTopupRequest) -> Result<Topup, AppError> {
        let now = Utc::now();

        let (sql, values) = Query::insert()
            .into_table(Topups::Table)
            .columns([
                Topups::UserId,
                Topups::Amount,
                Topups::AccountType,
                Topups::AccountNumber,
                Topups::Status,
                Topups::CreatedAt,
                Topups::UpdatedAt,
            ])
            .values([
                input.user_id.into(),
                input.amount.into(),
                input.account_type.clone().into(),
                input.account_number.clone().into(),
                TopupStatus::Pending.as_str().into(),
                now.into(),
                now.into(),
            ])
            .unwrap()
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let created = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_one(&self.db_pool)
            .await
            .map_err(AppError::SqlxError)?;

        info!("Topup created with ID: {}", created.topup_id);

        Ok(created)
    }

    async fn approve(&self, id: i32) -> Result<(Topup, Wallet), AppError> {
        info!("Approving topup with ID: {id}");

        let mut tx = self.db_pool.begin().await?;

        // Compare-and-swap on status: under concurrent approves only one
        // update matches, the loser sees zero rows.
        let (sql, values) = Query::update()
            .table(Topups::Table)
            .values([
                (Topups::Status, TopupStatus::Approved.as_str().into()),
                (Topups::UpdatedAt, Utc::now().into()),
            ])
            .and_where(Expr::col(Topups::TopupId).eq(id))
            .and_where(Expr::col(Topups::Status).eq(TopupStatus::Pending.as_str()))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let topup = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_optional(&mut *tx)
            .await?;

        let topup = match topup {
            Some(t) => t,
            None => {
                tx.rollback().await?;
                return Err(self.settle_conflict(id).await);
            }
        };

        // Same transaction as the status flip: wallet created on first
        // approval, credited otherwise.
        let now = Utc::now();
        let (sql, values) = Query::insert()
            .into_table(Wallets::Table)
            .columns([
                Wallets::UserId,
                Wallets::Balance,
                Wallets::CreatedAt,
                Wallets::UpdatedAt,
            ])
            .values([
                topup.user_id.into(),
                topup.amount.into(),
                now.into(),
                now.into(),
            ])
            .unwrap()
            .on_conflict(
                OnConflict::column(Wallets::UserId)
                    .value(
                        Wallets::Balance,
                        Expr::col((Wallets::Table, Wallets::Balance)).add(topup.amount),
                    )
                    .value(Wallets::UpdatedAt, now)
                    .to_owned(),
            )
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let wallet = sqlx::query_as_with::<_, Wallet, _>(&sql, values)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            "Topup ID {id} approved, wallet balance for user {} is now {}",
            wallet.user_id, wallet.balance
        );

        Ok((topup, wallet))
    }

    async fn decline(&self, id: i32) -> Result<Topup, AppError> {
        info!("Declining topup with ID: {id}");

        let (sql, values) = Query::update()
            .table(Topups::Table)
            .values([
                (Topups::Status, TopupStatus::Declined.as_str().into()),
                (Topups::UpdatedAt, Utc::now().into()),
            ])
            .and_where(Expr::col(Topups::TopupId).eq(id))
            .and_where(Expr::col(Topups::Status).eq(TopupStatus::Pending.as_str()))
            .returning_all()
            .build_sqlx(PostgresQueryBuilder);

        let topup = sqlx::query_as_with::<_, Topup, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        match topup {
            Some(t) => {
                info!("Topup ID {id} declined");
                Ok(t)
            }
            None => Err(self.settle_conflict(id).await),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let (sql, values) = Query::delete()
            .from_table(Topups::Table)
            .and_where(Expr::col(Topups::TopupId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.db_pool)
            .await
            .map_err(AppError::SqlxError)?;

        if result.rows_affected() == 0 {
            error!("No Topup found to delete with ID: {id}");
            return Err(AppError::NotFound(format!("Topup with ID {id} not found",)));
        }

        info!("Topup ID: {id} deleted successfully");
        Ok(())
    }
}
