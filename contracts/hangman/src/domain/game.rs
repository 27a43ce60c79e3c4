use soroban_sdk::{contracttype, Bytes, BytesN, Env, Vec};

use super::errors::DomainError;
use super::letter::{alphabet_bit, letter_ascii, letter_index, mask_fits, ALPHABET_SIZE, HOLE};

/// Shortest word a game may use
pub const MIN_WORD_LEN: u32 = 4;

/// Longest word a game may use
pub const MAX_WORD_LEN: u32 = 10;

/// Wrong answers that end the game as lost
pub const MAX_WRONG: u32 = 6;

/// Seconds the referee has to reveal once a game ends
pub const REVEAL_WINDOW: u64 = 1800;

/// Game lifecycle states
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameStatus {
    /// No game was ever started for this player
    None,
    /// Waiting for the referee to commit a word
    WaitingCommit,
    /// Play in progress
    Active,
    /// Player completed the word
    Won,
    /// Player ran out of wrong guesses
    Lost,
    /// Bond was routed to the player
    Forfeit,
}

/// Verdict of auditing a revealed word against the recorded answers
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RevealVerdict {
    Honest,
    CommitMismatch,
    WrongLetterPresent,
    PositionsMismatch,
    MaskMismatch,
}

/// Per-player game record - core domain entity
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub status: GameStatus,
    /// Word length, fixed at start
    pub length: u32,
    pub wrong_guesses: u32,
    /// Revealed letters so far; HOLE bytes mark unknown cells
    pub visible: Bytes,
    // 26-bit alphabet masks. correct | wrong == guessed, correct & wrong == 0.
    pub guessed_mask: u32,
    pub correct_mask: u32,
    pub wrong_mask: u32,
    /// Position mask per alphabet index, nonzero only for letters in
    /// correct_mask. Bit i = letter occupies cell i.
    pub positions: Vec<u32>,
    pub commitment: Option<BytesN<32>>,
    /// Escrowed amount, held from commit until settlement
    pub bond: i128,
    /// Ledger timestamp after which the player may claim the bond; 0 = unarmed
    pub reveal_deadline: u64,
    /// Set by the settlement that routed the bond
    pub revealed: bool,
}

impl Game {
    /// Record returned for players that never started a game.
    pub fn empty(env: &Env) -> Self {
        let mut positions = Vec::new(env);
        for _ in 0..ALPHABET_SIZE {
            positions.push_back(0);
        }
        Self {
            status: GameStatus::None,
            length: 0,
            wrong_guesses: 0,
            visible: Bytes::new(env),
            guessed_mask: 0,
            correct_mask: 0,
            wrong_mask: 0,
            positions,
            commitment: None,
            bond: 0,
            reveal_deadline: 0,
            revealed: false,
        }
    }

    /// Fresh record awaiting the referee's commitment.
    pub fn fresh(env: &Env, length: u32) -> Self {
        let mut visible = Bytes::new(env);
        for _ in 0..length {
            visible.push_back(HOLE);
        }
        Self {
            status: GameStatus::WaitingCommit,
            length,
            visible,
            ..Self::empty(env)
        }
    }

    /// True once the record may be overwritten by a new start: either no game
    /// exists or the bond of the previous one has been routed.
    pub fn settled(&self) -> bool {
        self.status == GameStatus::None || self.revealed
    }

    /// True in the two playable end states awaiting reveal or forfeit.
    pub fn awaiting_reveal(&self) -> bool {
        self.status == GameStatus::Won || self.status == GameStatus::Lost
    }

    /// Stores the commitment and escrowed amount, entering active play.
    pub fn commit_word(&mut self, hash: BytesN<32>, bond: i128) -> Result<(), DomainError> {
        if self.status != GameStatus::WaitingCommit || self.commitment.is_some() {
            return Err(DomainError::BadState);
        }
        self.commitment = Some(hash);
        self.bond = bond;
        self.status = GameStatus::Active;
        Ok(())
    }

    /// Applies the referee's answer for one letter. Returns whether the
    /// answer marked the letter present. The record is untouched on error.
    pub fn apply_answer(&mut self, letter: u32, mask: u32) -> Result<bool, DomainError> {
        if self.status != GameStatus::Active {
            return Err(DomainError::BadState);
        }
        let bit = alphabet_bit(letter);
        if self.guessed_mask & bit != 0 {
            return Err(DomainError::AlreadyGuessed);
        }
        if !mask_fits(mask, self.length) {
            return Err(DomainError::MaskOutOfRange);
        }

        if mask == 0 {
            self.guessed_mask |= bit;
            self.wrong_mask |= bit;
            self.wrong_guesses += 1;
            if self.wrong_guesses == MAX_WRONG {
                self.status = GameStatus::Lost;
            }
            return Ok(false);
        }

        // An answer may only claim cells that are holes or already show this
        // letter, and must claim every cell that shows it.
        let ascii = letter_ascii(letter);
        for i in 0..self.length {
            let cell = self.visible.get(i).unwrap();
            if cell == HOLE {
                continue;
            }
            let claimed = mask & (1 << i) != 0;
            if (cell == ascii) != claimed {
                return Err(DomainError::ContradictsRevealed);
            }
        }

        self.guessed_mask |= bit;
        self.correct_mask |= bit;
        self.positions.set(letter, mask);
        for i in 0..self.length {
            if mask & (1 << i) != 0 {
                self.visible.set(i, ascii);
            }
        }
        if !self.has_holes() {
            self.status = GameStatus::Won;
        }
        Ok(true)
    }

    /// Arms the forfeit deadline when the game reaches Won or Lost.
    pub fn arm_deadline(&mut self, now: u64) {
        self.reveal_deadline = now + REVEAL_WINDOW;
    }

    /// Checks a revealed word against every constraint the answers imposed.
    /// The commitment digest is the caller's concern; this audit only sees
    /// the recorded masks.
    pub fn audit_word(&self, word: &Bytes) -> RevealVerdict {
        let mut expected = [0u32; ALPHABET_SIZE as usize];
        for i in 0..self.length {
            if let Ok(idx) = letter_index(u32::from(word.get(i).unwrap())) {
                expected[idx as usize] |= 1 << i;
            }
        }

        for idx in 0..ALPHABET_SIZE {
            let bit = alphabet_bit(idx);
            if self.wrong_mask & bit != 0 && expected[idx as usize] != 0 {
                return RevealVerdict::WrongLetterPresent;
            }
            if self.correct_mask & bit != 0
                && expected[idx as usize] != self.positions.get(idx).unwrap()
            {
                return RevealVerdict::PositionsMismatch;
            }
        }

        // Every revealed cell must match the word. Unreachable once the mask
        // checks pass; kept as a backstop.
        for i in 0..self.length {
            let cell = self.visible.get(i).unwrap();
            if cell == HOLE {
                continue;
            }
            let cell_matches = match letter_index(u32::from(word.get(i).unwrap())) {
                Ok(idx) => letter_ascii(idx) == cell,
                Err(_) => false,
            };
            if !cell_matches {
                return RevealVerdict::MaskMismatch;
            }
        }

        RevealVerdict::Honest
    }

    /// Marks the bond routed back to the referee. Returns the amount.
    pub fn settle_refund(&mut self) -> i128 {
        let amount = self.bond;
        self.bond = 0;
        self.revealed = true;
        amount
    }

    /// Marks the bond routed to the player. Returns the amount.
    pub fn settle_slash(&mut self) -> i128 {
        let amount = self.bond;
        self.bond = 0;
        self.revealed = true;
        self.status = GameStatus::Forfeit;
        amount
    }

    fn has_holes(&self) -> bool {
        for i in 0..self.length {
            if self.visible.get(i).unwrap() == HOLE {
                return true;
            }
        }
        false
    }
}
