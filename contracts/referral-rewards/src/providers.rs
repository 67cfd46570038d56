use soroban_sdk::{contractclient, contracterror, contracttype, Address, String};

/// Error codes for provider contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProviderError {
    UnknownUser = 1,
    Unavailable = 2,
}

/// Measured behavioral signals for one user. Real providers supply
/// data derived from session and survey history; test providers supply
/// fixtures. A failed or missing provider falls back to
/// `BehaviorSignals::neutral` in the scorer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BehaviorSignals {
    pub tenure_days: u64,  // Days since the user's account was created
    pub nps_score: u32,    // Latest NPS survey answer, 0-10
    pub features_used: u32, // Distinct product features used
}

impl BehaviorSignals {
    /// Signals assumed when no provider is configured or the call fails.
    /// Contributes nothing beyond the base score.
    pub fn neutral() -> Self {
        BehaviorSignals {
            tenure_days: 0,
            nps_score: 0,
            features_used: 0,
        }
    }
}

/// Interface for behavior-signal provider contracts.
#[allow(dead_code)]
#[contractclient(name = "BehaviorSignalClient")]
pub trait BehaviorSignalProvider {
    /// Returns the user's current behavioral signals.
    fn get_signals(user: Address) -> Result<BehaviorSignals, ProviderError>;
}

/// Interface for share-message provider contracts. Best effort: the
/// scorer substitutes a fixed message whenever this call fails.
#[allow(dead_code)]
#[contractclient(name = "ShareMessageClient")]
pub trait ShareMessageProvider {
    /// Returns a suggested share message for a user with the given score.
    fn suggest_message(user: Address, score: u32) -> Result<String, ProviderError>;
}
