use soroban_sdk::{symbol_short, Address, Bytes, BytesN, Env};

use crate::domain::GameStatus;

/// Publisher for the engine's observable event log. One topic symbol per
/// event kind, the player address as the second topic.
pub struct GameEvents;

impl GameEvents {
    /// Topic: ["started", player]
    /// Data: [length, visible]
    pub fn started(env: &Env, player: &Address, length: u32, visible: &Bytes) {
        env.events().publish(
            (symbol_short!("started"), player.clone()),
            (length, visible.clone()),
        );
    }

    /// Topic: ["committed", player]
    /// Data: [hash, bond]
    pub fn committed(env: &Env, player: &Address, hash: &BytesN<32>, bond: i128) {
        env.events().publish(
            (symbol_short!("committed"), player.clone()),
            (hash.clone(), bond),
        );
    }

    /// Topic: ["answered", player]
    /// Data: [letter, positions, correct]
    pub fn answered(env: &Env, player: &Address, letter: u32, positions: u32, correct: bool) {
        env.events().publish(
            (symbol_short!("answered"), player.clone()),
            (letter, positions, correct),
        );
    }

    /// Topic: ["ended", player]
    /// Data: final status
    pub fn ended(env: &Env, player: &Address, status: GameStatus) {
        env.events()
            .publish((symbol_short!("ended"), player.clone()), status);
    }

    /// Topic: ["revealed", player]
    /// Data: [word, salt]
    pub fn revealed(env: &Env, player: &Address, word: &Bytes, salt: &BytesN<32>) {
        env.events().publish(
            (symbol_short!("revealed"), player.clone()),
            (word.clone(), salt.clone()),
        );
    }

    /// Topic: ["slashed", player]
    /// Data: forfeited amount
    pub fn slashed(env: &Env, player: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("slashed"), player.clone()), amount);
    }
}
