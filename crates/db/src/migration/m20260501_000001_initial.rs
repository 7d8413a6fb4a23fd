//! Initial database migration.
//!
//! Creates the enums, tables, and indexes for accounts, the transaction
//! ledger, sales/purchases with payments, products, and batches.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: ACCOUNTS & LEDGER
        // ============================================================
        db.execute_unprepared(ACCOUNTS_SQL).await?;
        db.execute_unprepared(ACCOUNT_TRANSACTIONS_SQL).await?;

        // ============================================================
        // PART 3: DOCUMENTS & PAYMENTS
        // ============================================================
        db.execute_unprepared(SALES_SQL).await?;
        db.execute_unprepared(PURCHASES_SQL).await?;
        db.execute_unprepared(PAYMENTS_SQL).await?;

        // ============================================================
        // PART 4: INVENTORY
        // ============================================================
        db.execute_unprepared(PRODUCTS_SQL).await?;
        db.execute_unprepared(BATCHES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Account kinds
CREATE TYPE account_kind AS ENUM (
    'bank',
    'cash',
    'card'
);

-- Ledger transaction kinds
CREATE TYPE transaction_kind AS ENUM (
    'deposit',
    'withdrawal',
    'payment',
    'refund',
    'adjustment'
);

-- Derived payment status of a sale or purchase
CREATE TYPE payment_status AS ENUM (
    'pendiente',
    'parcial',
    'pagado'
);

-- Which document table a payment belongs to
CREATE TYPE document_kind AS ENUM (
    'sale',
    'purchase'
);
";

const ACCOUNTS_SQL: &str = r"
CREATE TABLE accounts (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    kind account_kind NOT NULL,
    account_number VARCHAR(64),
    currency CHAR(3) NOT NULL,
    initial_balance NUMERIC(16, 2) NOT NULL,
    initial_balance_date DATE NOT NULL,
    current_balance NUMERIC(16, 2) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_accounts_kind ON accounts (kind);
CREATE INDEX idx_accounts_is_active ON accounts (is_active);
";

const ACCOUNT_TRANSACTIONS_SQL: &str = r"
CREATE TABLE account_transactions (
    id UUID PRIMARY KEY,
    account_id UUID NOT NULL REFERENCES accounts (id),
    kind transaction_kind NOT NULL,
    amount NUMERIC(16, 2) NOT NULL CHECK (amount > 0),
    signed_amount NUMERIC(16, 2) NOT NULL,
    description TEXT NOT NULL,
    created_by VARCHAR(255) NOT NULL,
    new_balance NUMERIC(16, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_account_transactions_account
    ON account_transactions (account_id, created_at);
";

const SALES_SQL: &str = r"
CREATE TABLE sales (
    id UUID PRIMARY KEY,
    folio VARCHAR(64) NOT NULL,
    client_name VARCHAR(255) NOT NULL,
    total NUMERIC(16, 2) NOT NULL CHECK (total > 0),
    paid_amount NUMERIC(16, 2) NOT NULL DEFAULT 0,
    remaining_amount NUMERIC(16, 2) NOT NULL CHECK (remaining_amount >= 0),
    payment_status payment_status NOT NULL DEFAULT 'pendiente',
    notes TEXT,
    created_by VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_sales_payment_status ON sales (payment_status);
";

const PURCHASES_SQL: &str = r"
CREATE TABLE purchases (
    id UUID PRIMARY KEY,
    folio VARCHAR(64) NOT NULL,
    supplier_name VARCHAR(255) NOT NULL,
    total NUMERIC(16, 2) NOT NULL CHECK (total > 0),
    paid_amount NUMERIC(16, 2) NOT NULL DEFAULT 0,
    remaining_amount NUMERIC(16, 2) NOT NULL CHECK (remaining_amount >= 0),
    payment_status payment_status NOT NULL DEFAULT 'pendiente',
    notes TEXT,
    created_by VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_purchases_payment_status ON purchases (payment_status);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY,
    document_id UUID NOT NULL,
    document_kind document_kind NOT NULL,
    amount NUMERIC(16, 2) NOT NULL CHECK (amount > 0),
    method VARCHAR(64) NOT NULL,
    account_id UUID REFERENCES accounts (id),
    transaction_id UUID REFERENCES account_transactions (id),
    notes TEXT,
    created_by VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_payments_document ON payments (document_id, document_kind);
CREATE INDEX idx_payments_account ON payments (account_id);
";

const PRODUCTS_SQL: &str = r"
CREATE TABLE products (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    sku VARCHAR(64),
    unit VARCHAR(32) NOT NULL,
    stock NUMERIC(14, 3) NOT NULL DEFAULT 0 CHECK (stock >= 0),
    min_stock NUMERIC(14, 3) NOT NULL DEFAULT 0,
    cost NUMERIC(16, 2) NOT NULL DEFAULT 0,
    price NUMERIC(16, 2) NOT NULL DEFAULT 0,
    manages_batches BOOLEAN NOT NULL DEFAULT FALSE,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX idx_products_is_active ON products (is_active);
";

const BATCHES_SQL: &str = r"
CREATE TABLE batches (
    id UUID PRIMARY KEY,
    product_id UUID NOT NULL REFERENCES products (id),
    batch_number VARCHAR(64) NOT NULL,
    unit VARCHAR(32) NOT NULL,
    initial_stock NUMERIC(14, 3) NOT NULL CHECK (initial_stock > 0),
    current_stock NUMERIC(14, 3) NOT NULL
        CHECK (current_stock >= 0 AND current_stock <= initial_stock),
    production_date DATE NOT NULL,
    expiration_date DATE NOT NULL,
    cost NUMERIC(16, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    CHECK (expiration_date > production_date)
);

CREATE INDEX idx_batches_product ON batches (product_id, expiration_date);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS batches;
DROP TABLE IF EXISTS products;
DROP TABLE IF EXISTS payments;
DROP TABLE IF EXISTS purchases;
DROP TABLE IF EXISTS sales;
DROP TABLE IF EXISTS account_transactions;
DROP TABLE IF EXISTS accounts;
DROP TYPE IF EXISTS document_kind;
DROP TYPE IF EXISTS payment_status;
DROP TYPE IF EXISTS transaction_kind;
DROP TYPE IF EXISTS account_kind;
";
