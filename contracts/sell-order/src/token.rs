use soroban_sdk::{token, Address, Env};

use crate::SellOrderError;

/// Outbound access to the escrowed token.
///
/// Both calls hand control to another contract and may re-enter this one.
pub trait TokenGateway {
    /// Balance of `token` held by this contract.
    fn balance(&self, token: &Address) -> Result<i128, SellOrderError>;

    /// Move `amount` of `token` from this contract to `to`.
    fn transfer(&self, token: &Address, to: &Address, amount: i128) -> Result<(), SellOrderError>;
}

impl<T: TokenGateway + ?Sized> TokenGateway for &T {
    fn balance(&self, token: &Address) -> Result<i128, SellOrderError> {
        (**self).balance(token)
    }

    fn transfer(&self, token: &Address, to: &Address, amount: i128) -> Result<(), SellOrderError> {
        (**self).transfer(token, to, amount)
    }
}

/// Gateway over the standard token interface.
///
/// Uses the `try_` client calls so a trapping token contract comes back as
/// `BalanceUnavailable` or `TransferFailed` instead of aborting the invocation.
pub struct TokenContractGateway<'a> {
    env: &'a Env,
}

impl<'a> TokenContractGateway<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl TokenGateway for TokenContractGateway<'_> {
    fn balance(&self, token: &Address) -> Result<i128, SellOrderError> {
        let client = token::Client::new(self.env, token);
        match client.try_balance(&self.env.current_contract_address()) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(SellOrderError::BalanceUnavailable),
        }
    }

    fn transfer(&self, token: &Address, to: &Address, amount: i128) -> Result<(), SellOrderError> {
        let client = token::Client::new(self.env, token);
        match client.try_transfer(&self.env.current_contract_address(), to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(SellOrderError::TransferFailed),
        }
    }
}
