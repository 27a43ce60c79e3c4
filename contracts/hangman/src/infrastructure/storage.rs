use soroban_sdk::{contracttype, Address, Env};

use crate::domain::Game;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Game record by player address
    Game(Address),
    /// Admin address
    Admin,
    /// Referee address, fixed at deployment
    Referee,
    /// Token the bond is denominated in
    BondToken,
    /// Bond amount required at commit
    RequiredBond,
}

/// TTL for game storage (~30 days)
pub const GAME_TTL_LEDGERS: u32 = 518_400;

/// Repository pattern for game persistence
pub struct GameRepository;

impl GameRepository {
    /// Loads a player's game, or a zeroed record if none exists
    pub fn load_or_empty(env: &Env, player: &Address) -> Game {
        let key = DataKey::Game(player.clone());
        env.storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Game::empty(env))
    }

    /// Saves a game with TTL extension. Records hold escrowed funds, so they
    /// live in persistent storage and must not expire under a live bond.
    pub fn save(env: &Env, player: &Address, game: &Game) {
        let key = DataKey::Game(player.clone());
        env.storage().persistent().set(&key, game);
        env.storage()
            .persistent()
            .extend_ttl(&key, GAME_TTL_LEDGERS, GAME_TTL_LEDGERS);
    }
}

/// Repository for deployment configuration
pub struct ConfigRepository;

impl ConfigRepository {
    pub fn get_admin(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("Admin not set")
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    pub fn get_referee(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Referee)
            .expect("Referee not set")
    }

    pub fn set_referee(env: &Env, referee: &Address) {
        env.storage().instance().set(&DataKey::Referee, referee);
    }

    pub fn get_bond_token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::BondToken)
            .expect("Bond token not set")
    }

    pub fn set_bond_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::BondToken, token);
    }

    pub fn get_required_bond(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::RequiredBond)
            .expect("Required bond not set")
    }

    pub fn set_required_bond(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::RequiredBond, &amount);
    }
}
