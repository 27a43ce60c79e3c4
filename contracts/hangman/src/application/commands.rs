use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::domain::game::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::domain::{letter_ascii, letter_index, DomainError, Game, RevealVerdict};
use crate::infrastructure::{ConfigRepository, EscrowGateway, GameEvents, GameRepository};

use super::dto::{AnswerResult, RevealResult};

/// Stellar strkeys (account `G...` and contract `C...`) are always 56 ASCII
/// characters, so a fixed buffer can hold any address's string form.
fn address_strkey_bytes(env: &Env, address: &Address) -> Bytes {
    let strkey = address.to_string();
    let mut buf = [0u8; 56];
    let len = strkey.len() as usize;
    strkey.copy_into_slice(&mut buf[..len]);
    Bytes::from_slice(env, &buf[..len])
}

/// Command: Start a new game
pub struct StartGameCommand;

impl StartGameCommand {
    pub fn execute(env: &Env, player: Address) -> Result<u32, DomainError> {
        player.require_auth();

        // A record holding an unsettled bond must not be overwritten.
        let previous = GameRepository::load_or_empty(env, &player);
        if !previous.settled() {
            return Err(DomainError::BadState);
        }

        let length = Self::draw_length(env, &player);
        let game = Game::fresh(env, length);
        GameRepository::save(env, &player, &game);

        GameEvents::started(env, &player, length, &game.visible);
        Ok(length)
    }

    /// Word length oracle: ledger data plus the caller identity, reduced to
    /// the supported range. The length is public the moment the start event
    /// fires, so predictability costs nothing.
    fn draw_length(env: &Env, player: &Address) -> u32 {
        let mut payload = Bytes::from_array(env, &env.ledger().sequence().to_be_bytes());
        payload.append(&Bytes::from_array(env, &env.ledger().timestamp().to_be_bytes()));
        payload.append(&address_strkey_bytes(env, player));
        let digest = env.crypto().keccak256(&payload).to_array();
        MIN_WORD_LEN + u32::from(digest[0]) % (MAX_WORD_LEN - MIN_WORD_LEN + 1)
    }
}

/// Command: Commit the word digest with the bond
pub struct CommitWordCommand;

impl CommitWordCommand {
    pub fn execute(
        env: &Env,
        referee: Address,
        player: Address,
        hash: BytesN<32>,
        bond: i128,
    ) -> Result<(), DomainError> {
        referee.require_auth();
        ensure_referee(env, &referee)?;

        let mut game = GameRepository::load_or_empty(env, &player);
        if bond != ConfigRepository::get_required_bond(env) {
            return Err(DomainError::BadBond);
        }
        game.commit_word(hash.clone(), bond)?;

        EscrowGateway::collect(env, &referee, bond);
        GameRepository::save(env, &player, &game);

        GameEvents::committed(env, &player, &hash, bond);
        Ok(())
    }
}

/// Command: Answer one guessed letter with its positions mask
pub struct AnswerCommand;

impl AnswerCommand {
    pub fn execute(
        env: &Env,
        referee: Address,
        player: Address,
        letter: u32,
        positions: u32,
    ) -> Result<AnswerResult, DomainError> {
        referee.require_auth();
        ensure_referee(env, &referee)?;

        let index = letter_index(letter)?;
        let mut game = GameRepository::load_or_empty(env, &player);
        let correct = game.apply_answer(index, positions)?;

        let over = game.awaiting_reveal();
        if over {
            game.arm_deadline(env.ledger().timestamp());
        }
        GameRepository::save(env, &player, &game);

        let ascii = u32::from(letter_ascii(index));
        GameEvents::answered(env, &player, ascii, positions, correct);
        if over {
            GameEvents::ended(env, &player, game.status.clone());
        }

        Ok(AnswerResult {
            letter: ascii,
            positions,
            correct,
            wrong_guesses: game.wrong_guesses,
            status: game.status.clone(),
            visible: game.visible.clone(),
        })
    }
}

/// Command: Open the commitment and settle the bond
pub struct RevealCommand;

impl RevealCommand {
    pub fn execute(
        env: &Env,
        referee: Address,
        player: Address,
        word: Bytes,
        salt: BytesN<32>,
    ) -> Result<RevealResult, DomainError> {
        referee.require_auth();
        ensure_referee(env, &referee)?;

        let mut game = GameRepository::load_or_empty(env, &player);
        if !game.awaiting_reveal() || game.revealed || game.bond == 0 {
            return Err(DomainError::BadState);
        }
        let stored = game.commitment.clone().ok_or(DomainError::BadState)?;
        if word.len() != game.length {
            return Err(DomainError::LengthMismatch);
        }
        let verdict = if Self::commitment_digest(env, &player, &salt, &word) != stored {
            RevealVerdict::CommitMismatch
        } else {
            game.audit_word(&word)
        };

        // A dishonest verdict is reported in the result rather than as an
        // error: an error return would revert the slash it must persist.
        if verdict == RevealVerdict::Honest {
            let amount = game.settle_refund();
            EscrowGateway::release(env, &referee, amount);
            GameRepository::save(env, &player, &game);

            GameEvents::revealed(env, &player, &word, &salt);
            Ok(RevealResult {
                verdict,
                refunded: amount,
                slashed: 0,
            })
        } else {
            let amount = game.settle_slash();
            EscrowGateway::release(env, &player, amount);
            GameRepository::save(env, &player, &game);

            GameEvents::slashed(env, &player, amount);
            GameEvents::ended(env, &player, game.status.clone());
            Ok(RevealResult {
                verdict,
                refunded: 0,
                slashed: amount,
            })
        }
    }

    /// Canonical commitment digest: player strkey bytes, then the salt, then
    /// the word bytes, concatenated without separators. The reveal-side
    /// producer must use the same encoding.
    pub fn commitment_digest(
        env: &Env,
        player: &Address,
        salt: &BytesN<32>,
        word: &Bytes,
    ) -> BytesN<32> {
        let mut payload = address_strkey_bytes(env, player);
        payload.append(&Bytes::from_array(env, &salt.to_array()));
        payload.append(word);
        env.crypto().keccak256(&payload).into()
    }
}

/// Command: Claim the bond after the reveal deadline passed
pub struct ClaimForfeitCommand;

impl ClaimForfeitCommand {
    pub fn execute(env: &Env, player: Address) -> Result<i128, DomainError> {
        player.require_auth();

        let mut game = GameRepository::load_or_empty(env, &player);
        if !game.awaiting_reveal() || game.revealed || game.reveal_deadline == 0 {
            return Err(DomainError::BadState);
        }
        if env.ledger().timestamp() <= game.reveal_deadline {
            return Err(DomainError::DeadlineNotPassed);
        }
        if game.bond == 0 {
            return Err(DomainError::NoBond);
        }

        let amount = game.settle_slash();
        EscrowGateway::release(env, &player, amount);
        GameRepository::save(env, &player, &game);

        GameEvents::slashed(env, &player, amount);
        GameEvents::ended(env, &player, game.status.clone());
        Ok(amount)
    }
}

fn ensure_referee(env: &Env, caller: &Address) -> Result<(), DomainError> {
    if *caller != ConfigRepository::get_referee(env) {
        return Err(DomainError::NotReferee);
    }
    Ok(())
}
