//! Sell Order Contract for CirrusSwap
//!
//! One deployed instance holds exactly one sell-side order: a seller offers a
//! fixed amount of a token at a fixed price. The contract validates and stores
//! the order, holds any tokens the seller escrows to it, and on closure
//! deactivates the order and returns the escrow to the seller.

#![no_std]

#[cfg(test)]
extern crate std;

mod order;
mod storage;
mod token;

pub use order::OrderController;
pub use storage::{Field, InstanceState, OrderState};
pub use token::{TokenContractGateway, TokenGateway};

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, panic_with_error,
    symbol_short, Address, Env, Symbol,
};

contractmeta!(
    key = "Description",
    val = "Single sell order with seller-only closure and escrow refund"
);

/// Discriminator returned in [`OrderDetails::order_type`].
pub const ORDER_TYPE: Symbol = symbol_short!("SellOrder");

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SellOrderError {
    InvalidOrderParameters = 1,
    Unauthorized = 2,
    AlreadyClosed = 3,
    /// The token contract refused or trapped on the refund transfer.
    TransferFailed = 4,
    /// The token contract could not report the escrowed balance.
    BalanceUnavailable = 5,
    /// A stored order field is missing. Not reachable on a constructed instance.
    MissingField = 6,
}

/// Read-only snapshot of the stored order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDetails {
    pub seller_address: Address,
    pub token_address: Address,
    /// Price per token in the settlement currency's smallest unit
    pub token_price: u64,
    pub token_amount: u64,
    /// Always [`ORDER_TYPE`]; lets callers that handle several order kinds
    /// dispatch on the snapshot alone.
    pub order_type: Symbol,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct SellOrder;

#[contractimpl]
impl SellOrder {
    /// Create the order. Runs once, atomically with deployment.
    ///
    /// The authenticated `seller` becomes the order owner. `value` is the
    /// settlement-currency amount sent alongside creation; it is reported in
    /// the creation event and otherwise unused. Invalid parameters abort the
    /// deployment with `InvalidOrderParameters`.
    ///
    /// # Arguments
    /// * `seller` - Order owner (must authorize)
    /// * `value` - Value attached to the creation call
    /// * `token_address` - Token contract whose units are offered
    /// * `token_price` - Price per token, must be non-zero
    /// * `token_amount` - Tokens offered, must be non-zero
    ///
    /// # Events
    /// Emits `ord_new` with `(seller, token_address, token_price, token_amount, value)`
    pub fn __constructor(
        env: Env,
        seller: Address,
        value: u64,
        token_address: Address,
        token_price: u64,
        token_amount: u64,
    ) {
        seller.require_auth();

        if let Err(err) =
            Self::controller(&env).create(&seller, value, &token_address, token_price, token_amount)
        {
            panic_with_error!(&env, err);
        }
    }

    /// Get the order snapshot.
    pub fn get_order_details(env: Env) -> OrderDetails {
        Self::controller(&env).details()
    }

    /// Close the order (seller only).
    ///
    /// Deactivates the order, then returns every escrowed token to the
    /// seller. Returns the refunded amount.
    ///
    /// # Events
    /// Emits `ord_cls` with `(seller, refunded)`
    pub fn close_order(env: Env, caller: Address) -> Result<i128, SellOrderError> {
        caller.require_auth();

        Self::controller(&env).close(&caller)
    }

    pub fn seller(env: Env) -> Address {
        Self::controller(&env).seller()
    }

    pub fn token_address(env: Env) -> Address {
        Self::controller(&env).token_address()
    }

    pub fn token_price(env: Env) -> u64 {
        Self::controller(&env).token_price()
    }

    pub fn token_amount(env: Env) -> u64 {
        Self::controller(&env).token_amount()
    }

    pub fn is_active(env: Env) -> bool {
        Self::controller(&env).is_active()
    }

    /// Tokens currently escrowed by this contract for the order's token.
    pub fn escrow_balance(env: Env) -> Result<i128, SellOrderError> {
        Self::controller(&env).escrow_balance()
    }
}

impl SellOrder {
    fn controller(env: &Env) -> OrderController<'_, InstanceState<'_>, TokenContractGateway<'_>> {
        OrderController::new(env, InstanceState::new(env), TokenContractGateway::new(env))
    }
}
