//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations, hiding
//! the `SeaORM` implementation details from the rest of the application.
//! Every mutation runs inside a single database transaction scoped to its
//! aggregate; validation and derivation are delegated to `comercio-core`.

pub mod account;
pub mod batch;
pub mod inventory;
pub mod payment;
pub mod product;
pub mod purchase;
pub mod sale;

#[cfg(test)]
mod batch_tests;

pub use account::{
    AccountError, AccountFilter, AccountRepository, CommitTransactionInput, CreateAccountInput,
    UpdateAccountInput,
};
pub use batch::{BatchError, BatchRepository, BatchWithStatus, CreateBatchInput};
pub use inventory::InventoryRepository;
pub use payment::{
    AddPaymentInput, AddPaymentOutcome, DocumentSummary, PaymentRepository, ReconciliationError,
};
pub use product::{CreateProductInput, ProductError, ProductRepository};
pub use purchase::{CreatePurchaseInput, PurchaseError, PurchaseRepository};
pub use sale::{CreateSaleInput, SaleError, SaleRepository};
