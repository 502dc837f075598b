//! In-memory account store backed by a sharded concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use rust_decimal::Decimal;

use cuentaflex_types::{Account, AccountId, AccountRepository, RepoError};

/// Account repository held entirely in memory.
///
/// Cloning is cheap and every clone shares the same accounts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepo {
    accounts: Arc<DashMap<AccountId, Account>>,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with the given accounts.
    ///
    /// Later entries replace earlier ones with the same id.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let repo = Self::new();
        for account in accounts {
            repo.accounts.insert(account.id.clone(), account);
        }
        repo
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn create_account(&self, account: Account) -> Result<Account, RepoError> {
        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "Account {} already exists",
                account.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                tracing::debug!(account_id = %account.id, "account stored");
                Ok(account)
            }
        }
    }

    async fn get_account(&self, id: &AccountId) -> Result<Option<Account>, RepoError> {
        Ok(self.accounts.get(id).map(|entry| entry.value().clone()))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, RepoError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }

    async fn credit(&self, id: &AccountId, amount: Decimal) -> Result<Account, RepoError> {
        // The shard write lock is held until `account` is dropped.
        let mut account = self
            .accounts
            .get_mut(id)
            .ok_or_else(|| RepoError::AccountNotFound(id.clone()))?;
        if account.credit(amount).is_none() {
            return Err(RepoError::BalanceOverflow(id.clone()));
        }
        Ok(account.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: i64) -> Account {
        Account::new(AccountId::from(id), Decimal::new(balance, 0))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryAccountRepo::new();
        repo.create_account(account("A1", 500)).await.unwrap();

        let found = repo.get_account(&AccountId::from("A1")).await.unwrap();
        assert_eq!(found.map(|a| a.balance), Some(Decimal::new(500, 0)));
        assert!(repo.get_account(&AccountId::from("B2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_account_conflicts() {
        let repo = InMemoryAccountRepo::new();
        repo.create_account(account("A1", 0)).await.unwrap();

        let result = repo.create_account(account("A1", 10)).await;
        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let repo =
            InMemoryAccountRepo::with_accounts([account("C3", 1), account("A1", 2), account("B2", 3)]);

        let ids: Vec<String> = repo
            .list_accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id.to_string())
            .collect();
        assert_eq!(ids, ["A1", "B2", "C3"]);
    }

    #[tokio::test]
    async fn test_credit_unknown_account() {
        let repo = InMemoryAccountRepo::new();
        let result = repo.credit(&AccountId::from("ZZZ"), Decimal::ONE).await;
        assert!(matches!(result, Err(RepoError::AccountNotFound(id)) if id.as_str() == "ZZZ"));
    }

    #[tokio::test]
    async fn test_credit_overflow_is_rejected() {
        let repo = InMemoryAccountRepo::with_accounts([Account::new(
            AccountId::from("A1"),
            Decimal::MAX,
        )]);

        let result = repo.credit(&AccountId::from("A1"), Decimal::ONE).await;
        assert!(matches!(result, Err(RepoError::BalanceOverflow(id)) if id.as_str() == "A1"));

        let account = repo.get_account(&AccountId::from("A1")).await.unwrap().unwrap();
        assert_eq!(account.balance, Decimal::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_credits_are_not_lost() {
        let repo = InMemoryAccountRepo::with_accounts([account("A1", 0)]);

        let mut handles = Vec::new();
        for _ in 0..50 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.credit(&AccountId::from("A1"), Decimal::ONE).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let account = repo.get_account(&AccountId::from("A1")).await.unwrap().unwrap();
        assert_eq!(account.balance, Decimal::new(50, 0));
    }
}
