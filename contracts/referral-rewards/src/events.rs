use crate::types::RewardStatus;
use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing referral lifecycle events.
pub const REFERRAL: Symbol = symbol_short!("REFERRAL");

// Symbol representing click tracking events.
pub const CLICK: Symbol = symbol_short!("CLICK");

// Symbol representing signup events.
pub const SIGNUP: Symbol = symbol_short!("SIGNUP");

// Symbol representing conversion events.
pub const CONVERT: Symbol = symbol_short!("CONVERT");

// Symbol representing reward creation. Consumed by the notification
// service to trigger the reward email.
pub const REWARD: Symbol = symbol_short!("REWARD");

// Symbol representing payout settlement outcomes.
pub const PAYOUT: Symbol = symbol_short!("PAYOUT");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralCreated {
    pub referral_id: u64,
    pub campaign_id: u64,
    pub referrer: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignupRecorded {
    pub referral_id: u64,
    pub campaign_id: u64,
    pub referee: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConversionRecorded {
    pub referral_id: u64,
    pub campaign_id: u64,
    pub conversion_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardCreated {
    pub reward_id: u64,
    pub referral_id: u64,
    pub user: Address,
    pub amount: i128,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSettled {
    pub reward_id: u64,
    pub status: RewardStatus,
    pub timestamp: u64,
}
