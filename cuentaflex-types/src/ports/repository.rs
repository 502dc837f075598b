//! Repository port trait.
//!
//! Adapters (in-memory today) implement this trait.

use rust_decimal::Decimal;

use crate::domain::{Account, AccountId};
use crate::error::RepoError;

/// Storage port for accounts.
///
/// `credit` MUST be atomic per account: concurrent credits to the same
/// account may not lose updates.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Stores a new account. Fails with `Conflict` if the id is taken.
    async fn create_account(&self, account: Account) -> Result<Account, RepoError>;

    /// Gets an account by ID.
    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>, RepoError>;

    /// Lists all accounts, ordered by id.
    async fn list_accounts(&self) -> Result<Vec<Account>, RepoError>;

    /// Adds `amount` to the account balance and returns the updated account.
    async fn credit(&self, id: &AccountId, amount: Decimal) -> Result<Account, RepoError>;
}
