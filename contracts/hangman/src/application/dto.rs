use soroban_sdk::{contracttype, Bytes};

use crate::domain::{GameStatus, RevealVerdict};

/// Result of an accepted answer (returned to the referee frontend)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    /// Normalized lowercase letter that was answered
    pub letter: u32,
    /// Positions mask the answer claimed
    pub positions: u32,
    /// Whether the letter was marked present
    pub correct: bool,
    pub wrong_guesses: u32,
    pub status: GameStatus,
    /// Visible mask after the answer
    pub visible: Bytes,
}

/// Result of a reveal settlement
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RevealResult {
    /// Audit verdict; anything but Honest forfeited the bond
    pub verdict: RevealVerdict,
    /// Amount refunded to the referee
    pub refunded: i128,
    /// Amount routed to the player
    pub slashed: i128,
}

/// Rule constants (immutable configuration)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRules {
    pub min_word_len: u32,
    pub max_word_len: u32,
    pub max_wrong: u32,
    pub reveal_window: u64,
    pub required_bond: i128,
}
