use soroban_sdk::{contracterror, contracttype, Address, BytesN, String, Symbol, Vec};

/// How a campaign computes the reward for a conversion
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardType {
    Flat,       // Fixed amount per conversion
    Percentage, // Percent of the conversion value
}

/// How a reward is ultimately settled
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PayoutKind {
    Cash,   // Token transfer to an external account
    Credit, // Settled outside this contract (store credit etc.)
}

/// Referral lifecycle states, strictly monotonic.
/// SignedUp may be skipped when a conversion arrives first;
/// Converted is terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ReferralStatus {
    Clicked = 0,
    SignedUp = 1,
    Converted = 2,
}

/// Reward settlement states. Pending may move to any of the other
/// three; all of those are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RewardStatus {
    Pending,
    Processing, // Manual / credit settlement happening elsewhere
    Paid,
    Failed,
}

/// Prediction confidence tiers derived from the likelihood score
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Confidence {
    High,   // score >= 70
    Medium, // score >= 40
    Low,
}

/// Campaign reward configuration plus aggregate counters.
/// Counters are only ever incremented by the engine, atomically with
/// the state transition that causes them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub merchant: Address,          // Owning merchant account
    pub name: String,
    pub reward_type: RewardType,
    pub reward_amount: i128,        // Flat: minor units; Percentage: percent
    pub reward_token: Address,      // Token the reward is denominated in
    pub payout_kind: PayoutKind,
    pub minimum_purchase: i128,     // Minor units, 0 = no minimum
    pub end_date: Option<u64>,      // Ledger timestamp, None = open-ended
    pub is_active: bool,
    pub total_referrals: u32,
    pub total_clicks: u32,
    pub total_signups: u32,
    pub total_conversions: u32,
    pub total_rewards_paid: i128,   // Sum of created reward amounts
    pub created_at: u64,
}

/// Parameters for creating a campaign
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub name: String,
    pub reward_type: RewardType,
    pub reward_amount: i128,
    pub reward_token: Address,
    pub payout_kind: PayoutKind,
    pub minimum_purchase: i128,
    pub end_date: Option<u64>,
}

/// Enumerated partial update for a campaign. Absent fields are left
/// untouched; present fields are validated before anything is applied.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignUpdate {
    pub name: Option<String>,
    pub reward_amount: Option<i128>,
    pub minimum_purchase: Option<i128>,
    pub end_date: Option<u64>,
    pub is_active: Option<bool>,
}

/// Derived campaign statistics
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStats {
    pub total_referrals: u32,
    pub total_clicks: u32,
    pub total_signups: u32,
    pub total_conversions: u32,
    pub total_rewards_paid: i128,
    pub conversion_rate_bps: u32, // conversions / clicks, basis points
}

/// Attribution metadata captured when the tracking widget reports a click
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClickAttribution {
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A tracked referrer/referee relationship under one campaign
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Referral {
    pub id: u64,
    pub code: BytesN<32>,           // Unique tracking code, immutable
    pub campaign_id: u64,
    pub referrer: Address,
    pub referee_email: String,
    pub referee: Option<Address>,   // Set once the referee signs up
    pub status: ReferralStatus,
    pub conversion_value: Option<i128>,
    pub attribution: Option<ClickAttribution>,
    pub created_at: u64,
    pub signed_up_at: Option<u64>,
    pub converted_at: Option<u64>,
}

/// A reward owed to a referrer. At most one exists per referral,
/// enforced by the `RewardByReferral` storage key.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reward {
    pub id: u64,
    pub referral_id: u64,
    pub user: Address,              // The referrer being rewarded
    pub amount: i128,
    pub token: Address,
    pub kind: PayoutKind,
    pub status: RewardStatus,
    pub transfer_ref: Option<u32>,  // Ledger sequence of the transfer, on Paid
    pub failure_reason: Option<String>,
    pub created_at: u64,
    pub paid_at: Option<u64>,
}

/// Output of the rule evaluator for an eligible conversion
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardQuote {
    pub amount: i128,
    pub token: Address,
}

/// A verified payment-success event handed in by the payment provider.
/// Signature verification happens at the transport boundary; the
/// provider address authorizing the call is what makes it authentic here.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentEvent {
    pub reference: BytesN<32>,      // Provider-side payment identifier
    pub referral_code: BytesN<32>,
    pub amount: i128,               // Conversion value, minor units
}

/// Cached referral-likelihood prediction for a (user, campaign) pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prediction {
    pub user: Address,
    pub campaign_id: u64,
    pub likelihood_score: u32,      // 0..=100
    pub confidence: Confidence,
    pub suggested_reward: i128,
    pub suggested_message: String,
    pub top_features: Vec<Symbol>,
    pub created_at: u64,
}

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,                                // Contract administrator
    PaymentProvider,                      // Address allowed to submit payment events
    SignalProvider,                       // Behavior-signal provider contract
    MessageProvider,                      // Share-message provider contract
    ContractPaused,                       // Emergency stop flag
    NextCampaignId,                       // Campaign id sequence
    NextReferralId,                       // Referral id sequence
    NextRewardId,                         // Reward id sequence
    Campaign(u64),                        // Campaign id -> Campaign
    Referral(u64),                        // Referral id -> Referral
    ReferralByCode(BytesN<32>),           // Tracking code -> referral id
    ReferralByParty(u64, Address, String), // (campaign, referrer, email) -> referral id
    ReferrerIndex(Address),               // Referrer -> referral ids
    Reward(u64),                          // Reward id -> Reward
    RewardByReferral(u64),                // Referral id -> reward id (uniqueness)
    Prediction(Address, u64),             // (user, campaign) -> Prediction
    AdvocateIndex(u64),                   // Campaign -> users with predictions
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,  // Contract already setup
    NotInitialized = 2,      // Contract not initialized
    Unauthorized = 3,        // Caller lacks permission
    ContractPaused = 4,      // Contract is paused
    CampaignNotFound = 5,    // Campaign doesn't exist
    ReferralNotFound = 6,    // Referral doesn't exist
    RewardNotFound = 7,      // Reward doesn't exist
    InvalidRewardConfig = 8, // Bad reward type / amount combination
    InvalidAmount = 9,       // Non-positive amount where one is required
}
