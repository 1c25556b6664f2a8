#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sell_order::{SellOrder, SellOrderClient, SellOrderError};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

#[derive(Arbitrary, Debug)]
enum Op {
    Fund { amount: u32 },
    Close { as_buyer: bool },
    Details,
}

#[derive(Arbitrary, Debug)]
struct Input {
    price: u64,
    amount: u64,
    value: u64,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    // Zero price or amount aborts deployment; nothing else to exercise.
    if input.price == 0 || input.amount == 0 {
        return;
    }

    let env = Env::default();
    env.mock_all_auths();

    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token_addr = env.register_stellar_asset_contract_v2(token_admin).address();
    let token = token::Client::new(&env, &token_addr);
    let minter = token::StellarAssetClient::new(&env, &token_addr);

    let contract_id = env.register(
        SellOrder,
        (
            seller.clone(),
            input.value,
            token_addr.clone(),
            input.price,
            input.amount,
        ),
    );
    let client = SellOrderClient::new(&env, &contract_id);

    // Model of what the contract should hold.
    let mut active = true;

    for op in input.ops.into_iter().take(32) {
        match op {
            Op::Fund { amount } => {
                let amount = i128::from(amount);
                minter.mint(&contract_id, &amount);
            }
            Op::Close { as_buyer } => {
                let caller = if as_buyer { &buyer } else { &seller };
                let escrowed = token.balance(&contract_id);
                let seller_before = token.balance(&seller);
                let result = client.try_close_order(caller);

                if as_buyer {
                    assert_eq!(result, Err(Ok(SellOrderError::Unauthorized)));
                    assert_eq!(token.balance(&contract_id), escrowed);
                } else if !active {
                    assert_eq!(result, Err(Ok(SellOrderError::AlreadyClosed)));
                } else {
                    assert_eq!(result, Ok(Ok(escrowed)));
                    assert_eq!(token.balance(&contract_id), 0);
                    assert_eq!(token.balance(&seller), seller_before + escrowed);
                    active = false;
                }
            }
            Op::Details => {
                let details = client.get_order_details();
                assert_eq!(details.seller_address, seller);
                assert_eq!(details.token_address, token_addr);
                assert_eq!(details.token_price, input.price);
                assert_eq!(details.token_amount, input.amount);
                assert_eq!(details.is_active, active);
            }
        }

        // Active only ever goes true -> false.
        assert_eq!(client.is_active(), active);
    }
});
