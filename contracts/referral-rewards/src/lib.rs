#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod admin;
mod campaign;
mod eligibility;
mod events;
mod helpers;
mod ingest;
mod interface;
mod ledger;
mod payout;
mod providers;
mod scorer;
mod tracking;
mod types;

use admin::AdminModule;
use campaign::CampaignModule;
use ingest::IngestModule;
use interface::{
    AdminOperations, CampaignOperations, IngestOperations, LedgerOperations, PayoutOperations,
    ScoringOperations, TrackingOperations,
};
use ledger::LedgerModule;
use payout::PayoutModule;
use scorer::ScoringModule;
use tracking::TrackingModule;
use types::*;

#[contract]
pub struct ReferralRewardsContract;

#[contractimpl]
impl ReferralRewardsContract {
    /// Initializes the contract with an admin and the payment provider
    /// address allowed to submit conversion events
    ///
    /// # Arguments
    /// * `admin` - The address of the contract administrator
    /// * `payment_provider` - The address that authorizes payment events
    pub fn initialize(env: Env, admin: Address, payment_provider: Address) -> Result<(), Error> {
        AdminModule::initialize(env, admin, payment_provider)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        AdminModule::get_admin(env)
    }

    /// Transfers admin rights to a new address
    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        AdminModule::transfer_admin(env, new_admin)
    }

    /// Pauses all mutating operations
    pub fn pause_contract(env: Env) -> Result<(), Error> {
        AdminModule::pause_contract(env)
    }

    /// Resumes operations after a pause
    pub fn resume_contract(env: Env) -> Result<(), Error> {
        AdminModule::resume_contract(env)
    }

    /// Check if contract is paused
    pub fn get_paused_state(env: Env) -> Result<bool, Error> {
        AdminModule::get_paused_state(env)
    }

    /// Sets the address allowed to submit payment events
    pub fn set_payment_provider(env: Env, provider: Address) -> Result<(), Error> {
        AdminModule::set_payment_provider(env, provider)
    }

    /// Sets the behavior-signal provider contract used by the scorer
    pub fn set_signal_provider(env: Env, provider: Address) -> Result<(), Error> {
        AdminModule::set_signal_provider(env, provider)
    }

    /// Sets the share-message provider contract used by the scorer
    pub fn set_message_provider(env: Env, provider: Address) -> Result<(), Error> {
        AdminModule::set_message_provider(env, provider)
    }

    /// Creates a campaign owned by a merchant, active from the start
    ///
    /// # Arguments
    /// * `merchant` - The merchant account that owns the campaign
    /// * `config` - Reward rules for the campaign
    pub fn create_campaign(
        env: Env,
        merchant: Address,
        config: CampaignConfig,
    ) -> Result<u64, Error> {
        CampaignModule::create_campaign(env, merchant, config)
    }

    /// Applies an enumerated partial update to a campaign
    ///
    /// # Arguments
    /// * `campaign_id` - The campaign to update
    /// * `update` - Fields to change; absent fields are untouched
    pub fn update_campaign(
        env: Env,
        campaign_id: u64,
        update: CampaignUpdate,
    ) -> Result<Campaign, Error> {
        CampaignModule::update_campaign(env, campaign_id, update)
    }

    /// Toggles a campaign's active flag
    pub fn set_campaign_active(env: Env, campaign_id: u64, active: bool) -> Result<(), Error> {
        CampaignModule::set_campaign_active(env, campaign_id, active)
    }

    /// Retrieves campaign configuration and counters
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        CampaignModule::get_campaign(env, campaign_id)
    }

    /// Retrieves derived campaign statistics
    pub fn get_campaign_stats(env: Env, campaign_id: u64) -> Result<CampaignStats, Error> {
        CampaignModule::get_campaign_stats(env, campaign_id)
    }

    /// Quotes the reward a conversion of the given value would earn
    /// right now, without side effects
    pub fn quote_reward(
        env: Env,
        campaign_id: u64,
        conversion_value: i128,
    ) -> Result<Option<RewardQuote>, Error> {
        let campaign = CampaignModule::get_campaign(env.clone(), campaign_id)?;
        Ok(eligibility::quote_reward(
            &campaign,
            conversion_value,
            env.ledger().timestamp(),
        ))
    }

    /// Creates a referral for a (campaign, referrer, referee email)
    /// triple, returning the existing one if the triple is known
    pub fn create_referral(
        env: Env,
        campaign_id: u64,
        referrer: Address,
        referee_email: String,
    ) -> Result<Referral, Error> {
        TrackingModule::create_referral(env, campaign_id, referrer, referee_email)
    }

    /// Records click attribution for a tracking code. Always succeeds,
    /// even for unknown codes: the widget must never see an error
    pub fn record_click(
        env: Env,
        code: BytesN<32>,
        attribution: ClickAttribution,
    ) -> Result<(), Error> {
        TrackingModule::record_click(env, code, attribution)
    }

    /// Marks a referral as signed up and records the referee account.
    /// Idempotent once the referral is past Clicked
    pub fn mark_signed_up(env: Env, code: BytesN<32>, referee: Address) -> Result<(), Error> {
        TrackingModule::mark_signed_up(env, code, referee)
    }

    /// Manually marks a referral converted (admin). Duplicate calls
    /// return the converted referral without side effects
    pub fn mark_converted(
        env: Env,
        code: BytesN<32>,
        conversion_value: i128,
    ) -> Result<Referral, Error> {
        TrackingModule::mark_converted(env, code, conversion_value)
    }

    /// Get a referral by id
    pub fn get_referral(env: Env, referral_id: u64) -> Result<Referral, Error> {
        TrackingModule::get_referral(env, referral_id)
    }

    /// Get a referral by tracking code
    pub fn get_referral_by_code(env: Env, code: BytesN<32>) -> Result<Referral, Error> {
        TrackingModule::get_referral_by_code(env, code)
    }

    /// Get all referrals created by a referrer
    pub fn get_referrals_for_referrer(env: Env, referrer: Address) -> Vec<Referral> {
        TrackingModule::get_referrals_for_referrer(env, referrer)
    }

    /// Creates the reward for a converted referral. Returns the existing
    /// reward on retries and None when the referral is ineligible
    pub fn process_reward(env: Env, referral_id: u64) -> Result<Option<Reward>, Error> {
        helpers::verify_admin(&env)?;
        LedgerModule::process_reward(env, referral_id)
    }

    /// Get a reward by id
    pub fn get_reward(env: Env, reward_id: u64) -> Result<Reward, Error> {
        LedgerModule::get_reward(env, reward_id)
    }

    /// Get the reward created for a referral, if any
    pub fn get_reward_for_referral(env: Env, referral_id: u64) -> Option<Reward> {
        LedgerModule::get_reward_for_referral(env, referral_id)
    }

    /// Settles a pending reward: token transfer to `destination` for
    /// cash rewards, Processing otherwise. Returns None when the reward
    /// is no longer pending
    ///
    /// # Arguments
    /// * `reward_id` - The reward to settle
    /// * `destination` - External payout account, when one is connected
    pub fn payout_reward(
        env: Env,
        reward_id: u64,
        destination: Option<Address>,
    ) -> Result<Option<Reward>, Error> {
        PayoutModule::payout_reward(env, reward_id, destination)
    }

    /// Ingests a verified payment-success event from the payment
    /// provider, converting the referral and creating its reward in one
    /// atomic step. Duplicate deliveries are no-ops
    pub fn record_payment(env: Env, event: PaymentEvent) -> Result<Option<Reward>, Error> {
        IngestModule::record_payment(env, event)
    }

    /// Returns the referral-likelihood prediction for a user under a
    /// campaign, cached for 24 hours
    pub fn predict(env: Env, user: Address, campaign_id: u64) -> Result<Prediction, Error> {
        ScoringModule::predict(env, user, campaign_id)
    }

    /// Returns up to `limit` predictions for a campaign, best score first
    pub fn get_top_advocates(env: Env, campaign_id: u64, limit: u32) -> Vec<Prediction> {
        ScoringModule::get_top_advocates(env, campaign_id, limit)
    }
}
