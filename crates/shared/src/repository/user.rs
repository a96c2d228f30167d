use async_trait::async_trait;
use sea_query::{Alias, Expr, Func, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use tracing::{error, info};

use crate::abstract_trait::UserRepositoryTrait;
use crate::config::ConnectionPool;
use crate::model::user::{User, UserWithBalance};
use crate::schema::topup::Topups;
use crate::schema::user::Users;
use crate::schema::wallet::Wallets;
use crate::utils::AppError;

pub struct UserRepository {
    db_pool: ConnectionPool,
}

impl UserRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_all_with_balance(&self) -> Result<Vec<UserWithBalance>, AppError> {
        info!("Getting all users with wallet balances");

        let (sql, values) = Query::select()
            .columns([
                (Users::Table, Users::UserId),
                (Users::Table, Users::Fullname),
                (Users::Table, Users::Mobile),
                (Users::Table, Users::Email),
            ])
            .expr_as(
                Func::coalesce([
                    Expr::col((Wallets::Table, Wallets::Balance)).into(),
                    Expr::val(0_i64).into(),
                ]),
                Alias::new("balance"),
            )
            .columns([
                (Users::Table, Users::CreatedAt),
                (Users::Table, Users::UpdatedAt),
            ])
            .from(Users::Table)
            .left_join(
                Wallets::Table,
                Expr::col((Users::Table, Users::UserId)).equals((Wallets::Table, Wallets::UserId)),
            )
            .order_by((Users::Table, Users::UserId), Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let users_result = sqlx::query_as_with::<_, UserWithBalance, _>(&sql, values)
            .fetch_all(&self.db_pool)
            .await;

        let users = match users_result {
            Ok(rows) => rows,
            Err(e) => {
                error!("Error fetching users: {e}");
                return Err(AppError::SqlxError(e));
            }
        };

        info!("Found {} users", users.len());

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let (sql, values) = Query::select()
            .columns([
                Users::UserId,
                Users::Fullname,
                Users::Mobile,
                Users::Email,
                Users::Password,
                Users::CreatedAt,
                Users::UpdatedAt,
            ])
            .from(Users::Table)
            .and_where(Expr::col(Users::UserId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let user = sqlx::query_as_with::<_, User, _>(&sql, values)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        info!("Deleting user with ID: {id}");

        let mut tx = self.db_pool.begin().await?;

        let (sql, values) = Query::delete()
            .from_table(Topups::Table)
            .and_where(Expr::col(Topups::UserId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let removed_topups = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let (sql, values) = Query::delete()
            .from_table(Wallets::Table)
            .and_where(Expr::col(Wallets::UserId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::UserId).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            error!("No user found to delete with ID: {id}");
            return Err(AppError::NotFound(format!("User with ID {id} not found")));
        }

        tx.commit().await?;

        info!("User ID {id} deleted along with {removed_topups} topup records");
        Ok(())
    }
}
