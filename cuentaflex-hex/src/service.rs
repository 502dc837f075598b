//! Application Services
//!
//! Orchestrate domain operations through the repository port.
//! Contain NO infrastructure logic - pure business orchestration.

use async_trait::async_trait;
use rust_decimal::Decimal;

use cuentaflex_types::{
    Account, AccountId, AccountRepository, AppError, CreateAccountRequest, DepositFromAtmUseCase,
    DomainError, Outcome, RepoError, TransactionDone, TransactionRequest,
};

/// Application service for account management.
///
/// Generic over `R: AccountRepository` - the adapter is injected at compile time.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a new account service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Opens a new account.
    pub async fn create_account(&self, req: CreateAccountRequest) -> Result<Account, AppError> {
        let id = AccountId::new(req.account_id.trim());
        if id.is_blank() {
            return Err(AppError::BadRequest("Account ID cannot be empty".into()));
        }
        if req.initial_balance < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Initial balance cannot be negative".into(),
            ));
        }

        self.repo
            .create_account(Account::new(id, req.initial_balance))
            .await
            .map_err(Into::into)
    }

    /// Gets an account by ID.
    pub async fn get_account(&self, id: &AccountId) -> Result<Account, AppError> {
        self.repo
            .get_account(id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(format!("Account {}", id))))
    }

    /// Lists all accounts.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.repo.list_accounts().await.map_err(Into::into)
    }
}

/// Deposit of cash received at an ATM.
///
/// The ATM fee is withheld from the deposited amount, so the amount must be
/// strictly greater than the fee.
pub struct DepositFromAtmService<R: AccountRepository> {
    repo: R,
    fee: Decimal,
}

impl<R: AccountRepository> DepositFromAtmService<R> {
    pub fn new(repo: R, fee: Decimal) -> Self {
        Self { repo, fee }
    }

    pub fn fee(&self) -> Decimal {
        self.fee
    }

    async fn deposit(&self, request: &TransactionRequest) -> Result<TransactionDone, DomainError> {
        let amount = request.amount();
        if amount <= Decimal::ZERO {
            return Err(DomainError::invalid_amount("Amount must be positive"));
        }
        if amount <= self.fee {
            return Err(DomainError::invalid_amount(format!(
                "Amount must be greater than the ATM deposit fee of {}",
                self.fee
            )));
        }

        let account = self
            .repo
            .credit(request.account_id(), amount - self.fee)
            .await
            .map_err(|err| match err {
                RepoError::AccountNotFound(_) => DomainError::account_not_found(),
                RepoError::BalanceOverflow(_) => DomainError::invalid_amount(
                    "Deposit would exceed the maximum account balance",
                ),
                other => {
                    tracing::error!(error = %other, "failed to credit ATM deposit");
                    DomainError::unexpected_db_error(other.to_string())
                }
            })?;

        Ok(TransactionDone::deposit(
            account.id,
            amount,
            self.fee,
            account.balance,
        ))
    }
}

#[async_trait]
impl<R: AccountRepository> DepositFromAtmUseCase for DepositFromAtmService<R> {
    async fn execute(&self, request: &TransactionRequest) -> Outcome<TransactionDone> {
        self.deposit(request).await.into()
    }
}
