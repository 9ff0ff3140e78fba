//! Customer account repository for database operations.

use sqlx::SqlitePool;

use orderdesk_core::{AccountId, CustomerId, PasswordHash};

use super::RepositoryError;
use crate::models::{Customer, CustomerAccount};

/// Internal row type for account queries.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password: String,
    customer_id: i64,
}

impl From<AccountRow> for CustomerAccount {
    fn from(row: AccountRow) -> Self {
        Self {
            id: AccountId::new(row.id),
            username: row.username,
            password_hash: PasswordHash::new(row.password),
            customer_id: CustomerId::new(row.customer_id),
        }
    }
}

/// Internal row type for account queries joined with the owning customer.
#[derive(Debug, sqlx::FromRow)]
struct AccountWithCustomerRow {
    id: i64,
    username: String,
    password: String,
    customer_id: i64,
    name: String,
    email: String,
    phone_number: String,
}

impl From<AccountWithCustomerRow> for (CustomerAccount, Customer) {
    fn from(row: AccountWithCustomerRow) -> Self {
        (
            CustomerAccount {
                id: AccountId::new(row.id),
                username: row.username,
                password_hash: PasswordHash::new(row.password),
                customer_id: CustomerId::new(row.customer_id),
            },
            Customer {
                id: CustomerId::new(row.customer_id),
                name: row.name,
                email: row.email,
                phone_number: row.phone_number,
            },
        )
    }
}

/// Repository for customer account database operations.
pub struct AccountRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an account by its ID, together with the owning customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_with_customer(
        &self,
        id: AccountId,
    ) -> Result<Option<(CustomerAccount, Customer)>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountWithCustomerRow>(
            "SELECT a.id, a.username, a.password, a.customer_id,
                    c.name, c.email, c.phone_number
             FROM customer_accounts a
             JOIN customers c ON c.id = a.customer_id
             WHERE a.id = ?",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Check whether a username is already taken, optionally excluding one
    /// account's own row (for updates).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn username_exists(
        &self,
        username: &str,
        exclude: Option<AccountId>,
    ) -> Result<bool, RepositoryError> {
        let taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM customer_accounts
                 WHERE username = ? AND id != COALESCE(?, -1)
             )",
        )
        .bind(username)
        .bind(exclude.map(|id| id.as_i64()))
        .fetch_one(self.pool)
        .await?;

        Ok(taken)
    }

    /// Create a new account with an already-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &PasswordHash,
        customer_id: CustomerId,
    ) -> Result<CustomerAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO customer_accounts (username, password, customer_id)
             VALUES (?, ?, ?)
             RETURNING id, username, password, customer_id",
        )
        .bind(username)
        .bind(password_hash.as_str())
        .bind(customer_id.as_i64())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    /// Update an account's username and/or password hash.
    ///
    /// Either argument may be `None` to leave that column untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Conflict` if the username is taken by
    /// another account.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: AccountId,
        username: Option<&str>,
        password_hash: Option<&PasswordHash>,
    ) -> Result<CustomerAccount, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "UPDATE customer_accounts
             SET username = COALESCE(?, username),
                 password = COALESCE(?, password)
             WHERE id = ?
             RETURNING id, username, password, customer_id",
        )
        .bind(username)
        .bind(password_hash.map(PasswordHash::as_str))
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("username already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(row.into())
    }

    /// Delete an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: AccountId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customer_accounts WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
