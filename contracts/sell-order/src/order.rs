//! Lifecycle of a single sell order: `Active -> Closed`, nothing else.
//!
//! Every field is written by [`OrderController::create`] during deployment,
//! so the readers treat a missing field as a host error.

use soroban_sdk::{log, panic_with_error, symbol_short, Address, Env};

use crate::storage::{Field, OrderState};
use crate::token::TokenGateway;
use crate::{OrderDetails, SellOrderError, ORDER_TYPE};

/// Runs order operations against an injected store and token gateway.
///
/// The caller identity is always passed in explicitly; authenticating it is
/// the job of the contract entry point.
pub struct OrderController<'a, S, G> {
    env: &'a Env,
    state: S,
    gateway: G,
}

impl<'a, S: OrderState, G: TokenGateway> OrderController<'a, S, G> {
    pub fn new(env: &'a Env, state: S, gateway: G) -> Self {
        Self {
            env,
            state,
            gateway,
        }
    }

    /// Validate and persist a new order owned by `caller`.
    ///
    /// Nothing is read or written unless every check passes.
    pub fn create(
        &self,
        caller: &Address,
        value: u64,
        token_address: &Address,
        token_price: u64,
        token_amount: u64,
    ) -> Result<(), SellOrderError> {
        if token_price == 0 || token_amount == 0 {
            log!(
                self.env,
                "order rejected: price {} amount {}",
                token_price,
                token_amount
            );
            return Err(SellOrderError::InvalidOrderParameters);
        }

        self.state.set_address(Field::Seller, caller);
        self.state.set_address(Field::TokenAddress, token_address);
        self.state.set_u64(Field::TokenPrice, token_price);
        self.state.set_u64(Field::TokenAmount, token_amount);
        self.state.set_bool(Field::IsActive, true);

        self.env.events().publish(
            (symbol_short!("ord_new"),),
            (
                caller.clone(),
                token_address.clone(),
                token_price,
                token_amount,
                value,
            ),
        );

        Ok(())
    }

    pub fn details(&self) -> OrderDetails {
        OrderDetails {
            seller_address: self.seller(),
            token_address: self.token_address(),
            token_price: self.token_price(),
            token_amount: self.token_amount(),
            order_type: ORDER_TYPE,
            is_active: self.is_active(),
        }
    }

    /// Close the order on behalf of `caller` and refund the escrow.
    ///
    /// `IsActive` is cleared before the gateway is called, so a re-entrant
    /// close sees a closed order. If the refund fails the flag is restored.
    pub fn close(&self, caller: &Address) -> Result<i128, SellOrderError> {
        let seller = self.seller();

        if *caller != seller {
            log!(self.env, "close rejected: caller is not the seller");
            return Err(SellOrderError::Unauthorized);
        }

        if !self.is_active() {
            return Err(SellOrderError::AlreadyClosed);
        }

        let token = self.token_address();

        self.state.set_bool(Field::IsActive, false);

        let refunded = match self.refund(&token, &seller) {
            Ok(amount) => amount,
            Err(err) => {
                self.state.set_bool(Field::IsActive, true);
                return Err(err);
            }
        };

        self.env
            .events()
            .publish((symbol_short!("ord_cls"),), (seller, refunded));

        Ok(refunded)
    }

    fn refund(&self, token: &Address, seller: &Address) -> Result<i128, SellOrderError> {
        let escrowed = self.gateway.balance(token)?;
        if escrowed > 0 {
            self.gateway.transfer(token, seller, escrowed)?;
        }
        Ok(escrowed)
    }

    pub fn seller(&self) -> Address {
        self.required(self.state.get_address(Field::Seller))
    }

    pub fn token_address(&self) -> Address {
        self.required(self.state.get_address(Field::TokenAddress))
    }

    pub fn token_price(&self) -> u64 {
        self.required(self.state.get_u64(Field::TokenPrice))
    }

    pub fn token_amount(&self) -> u64 {
        self.required(self.state.get_u64(Field::TokenAmount))
    }

    pub fn is_active(&self) -> bool {
        self.required(self.state.get_bool(Field::IsActive))
    }

    pub fn escrow_balance(&self) -> Result<i128, SellOrderError> {
        self.gateway.balance(&self.token_address())
    }

    fn required<T>(&self, value: Option<T>) -> T {
        match value {
            Some(value) => value,
            None => panic_with_error!(self.env, SellOrderError::MissingField),
        }
    }
}
