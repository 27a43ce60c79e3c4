use soroban_sdk::{token, Address, Env};

use super::storage::ConfigRepository;

/// Gateway for bond custody through the configured token contract.
/// Transfers run inside the transition's invocation, so a failed payout
/// rolls the whole transition back.
pub struct EscrowGateway;

impl EscrowGateway {
    /// Pulls the bond from the referee into the contract
    pub fn collect(env: &Env, from: &Address, amount: i128) {
        let token = token::TokenClient::new(env, &ConfigRepository::get_bond_token(env));
        token.transfer(from, &env.current_contract_address(), &amount);
    }

    /// Pays a settled bond out of the contract
    pub fn release(env: &Env, to: &Address, amount: i128) {
        let token = token::TokenClient::new(env, &ConfigRepository::get_bond_token(env));
        token.transfer(&env.current_contract_address(), to, &amount);
    }
}
