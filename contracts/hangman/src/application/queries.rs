use soroban_sdk::{Address, Env};

use crate::domain::game::{MAX_WORD_LEN, MAX_WRONG, MIN_WORD_LEN, REVEAL_WINDOW};
use crate::domain::Game;
use crate::infrastructure::{ConfigRepository, GameRepository};

use super::dto::GameRules;

/// Query: Observe a player's game
pub struct ObserveGameQuery;

impl ObserveGameQuery {
    /// Never fails; players without a game observe a zeroed record.
    pub fn execute(env: &Env, player: Address) -> Game {
        GameRepository::load_or_empty(env, &player)
    }
}

/// Query: Get rule constants
pub struct GetRulesQuery;

impl GetRulesQuery {
    pub fn execute(env: &Env) -> GameRules {
        GameRules {
            min_word_len: MIN_WORD_LEN,
            max_word_len: MAX_WORD_LEN,
            max_wrong: MAX_WRONG,
            reveal_window: REVEAL_WINDOW,
            required_bond: ConfigRepository::get_required_bond(env),
        }
    }
}
