#![no_std]

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use application::{AnswerResult, GameRules, RevealResult};
pub use domain::{DomainError as Error, Game, GameStatus, RevealVerdict};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env};

use application::{
    AnswerCommand, ClaimForfeitCommand, CommitWordCommand, GetRulesQuery, ObserveGameQuery,
    RevealCommand, StartGameCommand,
};
use infrastructure::ConfigRepository;

#[contract]
pub struct HangmanContract;

#[contractimpl]
impl HangmanContract {
    /// Initialize contract with admin, referee, bond token, and bond amount.
    /// Referee, token, and bond are fixed for the life of the deployment.
    pub fn __constructor(
        env: Env,
        admin: Address,
        referee: Address,
        bond_token: Address,
        required_bond: i128,
    ) -> Result<(), Error> {
        if required_bond <= 0 {
            return Err(Error::BadBond);
        }
        ConfigRepository::set_admin(&env, &admin);
        ConfigRepository::set_referee(&env, &referee);
        ConfigRepository::set_bond_token(&env, &bond_token);
        ConfigRepository::set_required_bond(&env, required_bond);
        Ok(())
    }

    // ==================== Game Commands ====================

    /// Player opens a new game; returns the drawn word length
    pub fn start(env: Env, player: Address) -> Result<u32, Error> {
        StartGameCommand::execute(&env, player)
    }

    /// Referee commits the word digest and posts the bond
    pub fn commit(
        env: Env,
        referee: Address,
        player: Address,
        hash: BytesN<32>,
        bond: i128,
    ) -> Result<(), Error> {
        CommitWordCommand::execute(&env, referee, player, hash, bond)
    }

    /// Referee answers one guessed letter with its positions mask
    pub fn answer(
        env: Env,
        referee: Address,
        player: Address,
        letter: u32,
        positions: u32,
    ) -> Result<AnswerResult, Error> {
        AnswerCommand::execute(&env, referee, player, letter, positions)
    }

    /// Referee opens the commitment; the bond settles either way
    pub fn reveal(
        env: Env,
        referee: Address,
        player: Address,
        word: Bytes,
        salt: BytesN<32>,
    ) -> Result<RevealResult, Error> {
        RevealCommand::execute(&env, referee, player, word, salt)
    }

    /// Player claims the bond once the reveal deadline has passed
    pub fn claim_forfeit(env: Env, player: Address) -> Result<i128, Error> {
        ClaimForfeitCommand::execute(&env, player)
    }

    // ==================== Queries ====================

    /// Get a player's game state; a zeroed record if none exists
    pub fn observe(env: Env, player: Address) -> Game {
        ObserveGameQuery::execute(&env, player)
    }

    /// Get game rules
    pub fn get_rules(env: Env) -> GameRules {
        GetRulesQuery::execute(&env)
    }

    /// Build the commitment digest (utility for referee tooling)
    pub fn build_commitment(
        env: Env,
        player: Address,
        salt: BytesN<32>,
        word: Bytes,
    ) -> BytesN<32> {
        RevealCommand::commitment_digest(&env, &player, &salt, &word)
    }

    // ==================== Admin Functions ====================

    pub fn get_admin(env: Env) -> Address {
        ConfigRepository::get_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = ConfigRepository::get_admin(&env);
        admin.require_auth();
        ConfigRepository::set_admin(&env, &new_admin);
    }

    pub fn get_referee(env: Env) -> Address {
        ConfigRepository::get_referee(&env)
    }

    pub fn get_bond_token(env: Env) -> Address {
        ConfigRepository::get_bond_token(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = ConfigRepository::get_admin(&env);
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
