use crate::types::{
    Campaign, CampaignConfig, CampaignStats, CampaignUpdate, ClickAttribution, Error,
    PaymentEvent, Prediction, Referral, Reward,
};
use soroban_sdk::{Address, BytesN, Env, String, Vec};

/// Manages administrative operations
pub trait AdminOperations {
    /// Initialize contract with admin and payment provider addresses
    fn initialize(env: Env, admin: Address, payment_provider: Address) -> Result<(), Error>;

    /// Get admin address
    fn get_admin(env: Env) -> Result<Address, Error>;

    /// Transfer admin rights to new address
    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error>;

    /// Pause contract operations (emergency)
    fn pause_contract(env: Env) -> Result<(), Error>;

    /// Resume contract operations
    fn resume_contract(env: Env) -> Result<(), Error>;

    /// Check if contract is paused
    fn get_paused_state(env: Env) -> Result<bool, Error>;

    /// Set the address allowed to submit payment events
    fn set_payment_provider(env: Env, provider: Address) -> Result<(), Error>;

    /// Set the behavior-signal provider contract
    fn set_signal_provider(env: Env, provider: Address) -> Result<(), Error>;

    /// Set the share-message provider contract
    fn set_message_provider(env: Env, provider: Address) -> Result<(), Error>;
}

/// Holds campaign reward configuration and aggregate counters
pub trait CampaignOperations {
    /// Create a campaign owned by a merchant
    fn create_campaign(env: Env, merchant: Address, config: CampaignConfig)
        -> Result<u64, Error>;

    /// Apply an enumerated partial update to a campaign
    fn update_campaign(env: Env, campaign_id: u64, update: CampaignUpdate)
        -> Result<Campaign, Error>;

    /// Toggle a campaign's active flag
    fn set_campaign_active(env: Env, campaign_id: u64, active: bool) -> Result<(), Error>;

    /// Get campaign configuration and counters
    fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error>;

    /// Get derived campaign statistics
    fn get_campaign_stats(env: Env, campaign_id: u64) -> Result<CampaignStats, Error>;
}

/// Owns referral identity and the click -> signup -> converted machine
pub trait TrackingOperations {
    /// Create a referral, idempotent per (campaign, referrer, referee email)
    fn create_referral(
        env: Env,
        campaign_id: u64,
        referrer: Address,
        referee_email: String,
    ) -> Result<Referral, Error>;

    /// Record click attribution; silent success for unknown codes
    fn record_click(env: Env, code: BytesN<32>, attribution: ClickAttribution)
        -> Result<(), Error>;

    /// Transition a referral to SignedUp; no-op if already past it
    fn mark_signed_up(env: Env, code: BytesN<32>, referee: Address) -> Result<(), Error>;

    /// Transition a referral to Converted; returns it unchanged if already there
    fn mark_converted(env: Env, code: BytesN<32>, conversion_value: i128)
        -> Result<Referral, Error>;

    /// Get a referral by id
    fn get_referral(env: Env, referral_id: u64) -> Result<Referral, Error>;

    /// Get a referral by tracking code
    fn get_referral_by_code(env: Env, code: BytesN<32>) -> Result<Referral, Error>;

    /// Get all referrals created by a referrer
    fn get_referrals_for_referrer(env: Env, referrer: Address) -> Vec<Referral>;
}

/// Turns a converted referral into exactly one reward
pub trait LedgerOperations {
    /// Create the reward for a converted referral, at most once
    fn process_reward(env: Env, referral_id: u64) -> Result<Option<Reward>, Error>;

    /// Get a reward by id
    fn get_reward(env: Env, reward_id: u64) -> Result<Reward, Error>;

    /// Get the reward created for a referral, if any
    fn get_reward_for_referral(env: Env, referral_id: u64) -> Option<Reward>;
}

/// Drives a pending reward to a terminal settlement state
pub trait PayoutOperations {
    /// Attempt settlement of a pending reward
    fn payout_reward(
        env: Env,
        reward_id: u64,
        destination: Option<Address>,
    ) -> Result<Option<Reward>, Error>;
}

/// Consumes verified payment-success events
pub trait IngestOperations {
    /// Apply a payment event: convert the referral and create its reward
    fn record_payment(env: Env, event: PaymentEvent) -> Result<Option<Reward>, Error>;
}

/// Advisory referral-likelihood scoring, cached per (user, campaign)
pub trait ScoringOperations {
    /// Get a fresh or cached prediction for a user under a campaign
    fn predict(env: Env, user: Address, campaign_id: u64) -> Result<Prediction, Error>;

    /// Get predictions for a campaign ordered by score, best first
    fn get_top_advocates(env: Env, campaign_id: u64, limit: u32) -> Vec<Prediction>;
}
