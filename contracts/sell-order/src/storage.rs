//! Durable order fields.
//!
//! The controller only sees [`OrderState`]; the contract plugs in
//! [`InstanceState`], which keeps every field in instance storage so the
//! order lives and expires together with the contract instance.

use soroban_sdk::{contracttype, Address, Env};

/// Storage key of each order field.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field {
    Seller,
    TokenAddress,
    TokenPrice,
    TokenAmount,
    IsActive,
}

/// Typed get/set access to the order fields.
///
/// Implementations must be read-after-write consistent within one invocation.
pub trait OrderState {
    fn get_address(&self, field: Field) -> Option<Address>;
    fn set_address(&self, field: Field, value: &Address);

    fn get_u64(&self, field: Field) -> Option<u64>;
    fn set_u64(&self, field: Field, value: u64);

    fn get_bool(&self, field: Field) -> Option<bool>;
    fn set_bool(&self, field: Field, value: bool);
}

impl<T: OrderState + ?Sized> OrderState for &T {
    fn get_address(&self, field: Field) -> Option<Address> {
        (**self).get_address(field)
    }

    fn set_address(&self, field: Field, value: &Address) {
        (**self).set_address(field, value)
    }

    fn get_u64(&self, field: Field) -> Option<u64> {
        (**self).get_u64(field)
    }

    fn set_u64(&self, field: Field, value: u64) {
        (**self).set_u64(field, value)
    }

    fn get_bool(&self, field: Field) -> Option<bool> {
        (**self).get_bool(field)
    }

    fn set_bool(&self, field: Field, value: bool) {
        (**self).set_bool(field, value)
    }
}

pub struct InstanceState<'a> {
    env: &'a Env,
}

impl<'a> InstanceState<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl OrderState for InstanceState<'_> {
    fn get_address(&self, field: Field) -> Option<Address> {
        self.env.storage().instance().get(&field)
    }

    fn set_address(&self, field: Field, value: &Address) {
        self.env.storage().instance().set(&field, value);
    }

    fn get_u64(&self, field: Field) -> Option<u64> {
        self.env.storage().instance().get(&field)
    }

    fn set_u64(&self, field: Field, value: u64) {
        self.env.storage().instance().set(&field, &value);
    }

    fn get_bool(&self, field: Field) -> Option<bool> {
        self.env.storage().instance().get(&field)
    }

    fn set_bool(&self, field: Field, value: bool) {
        self.env.storage().instance().set(&field, &value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{contract, contractimpl, testutils::Address as _, Env};

    #[contract]
    pub struct MockStateHost;

    #[contractimpl]
    impl MockStateHost {
        pub fn version(_env: Env) -> u32 {
            1
        }
    }

    #[test]
    fn test_fields_are_read_after_write_consistent() {
        let env = Env::default();
        let contract_id = env.register(MockStateHost, ());
        let seller = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let state = InstanceState::new(&env);

            assert_eq!(state.get_address(Field::Seller), None);

            state.set_address(Field::Seller, &seller);
            state.set_u64(Field::TokenPrice, 42);
            state.set_bool(Field::IsActive, true);

            assert_eq!(state.get_address(Field::Seller), Some(seller.clone()));
            assert_eq!(state.get_u64(Field::TokenPrice), Some(42));
            assert_eq!(state.get_u64(Field::TokenAmount), None);
            assert_eq!(state.get_bool(Field::IsActive), Some(true));

            state.set_bool(Field::IsActive, false);
            assert_eq!(state.get_bool(Field::IsActive), Some(false));
        });
    }

    #[test]
    fn test_fields_do_not_alias() {
        let env = Env::default();
        let contract_id = env.register(MockStateHost, ());

        env.as_contract(&contract_id, || {
            let state = InstanceState::new(&env);

            state.set_u64(Field::TokenPrice, 1);
            state.set_u64(Field::TokenAmount, 2);

            assert_eq!(state.get_u64(Field::TokenPrice), Some(1));
            assert_eq!(state.get_u64(Field::TokenAmount), Some(2));
            assert_eq!(state.get_bool(Field::IsActive), None);
        });
    }
}
