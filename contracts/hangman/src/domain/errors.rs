use soroban_sdk::contracterror;

/// Domain-specific errors for the Hangman engine
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DomainError {
    // State machine errors
    BadState = 1,
    NotReferee = 2,
    AlreadyGuessed = 3,
    DeadlineNotPassed = 4,
    NoBond = 5,

    // Input validation errors
    InvalidLetter = 6,
    MaskOutOfRange = 7,
    LengthMismatch = 8,
    BadBond = 9,

    // Answer contradicting previously revealed cells
    ContradictsRevealed = 10,
}
