use crate::eligibility;
use crate::events;
use crate::helpers::{
    ensure_contract_active, get_campaign, get_referral, get_reward, next_id, save_campaign,
    save_reward,
};
use crate::interface::LedgerOperations;
use crate::types::{DataKey, Error, Referral, ReferralStatus, Reward, RewardStatus};
use soroban_sdk::Env;

pub struct LedgerModule;

impl LedgerOperations for LedgerModule {
    fn process_reward(env: Env, referral_id: u64) -> Result<Option<Reward>, Error> {
        ensure_contract_active(&env)?;

        let referral = get_referral(&env, referral_id)?;
        Self::create_reward(&env, &referral)
    }

    fn get_reward(env: Env, reward_id: u64) -> Result<Reward, Error> {
        get_reward(&env, reward_id)
    }

    fn get_reward_for_referral(env: Env, referral_id: u64) -> Option<Reward> {
        let reward_id: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::RewardByReferral(referral_id))?;
        env.storage().persistent().get(&DataKey::Reward(reward_id))
    }
}

// Helper functions
impl LedgerModule {
    /// Creates the reward for a converted referral, at most once.
    ///
    /// The existence check and the write share one invocation, so a
    /// duplicate trigger for the same referral always observes either
    /// nothing (and creates) or the finished row (and returns it).
    pub(crate) fn create_reward(env: &Env, referral: &Referral) -> Result<Option<Reward>, Error> {
        // Only converted referrals can earn
        if referral.status != ReferralStatus::Converted {
            return Ok(None);
        }

        // Idempotency boundary: one reward per referral, ever
        let unique_key = DataKey::RewardByReferral(referral.id);
        if let Some(existing_id) = env.storage().persistent().get::<_, u64>(&unique_key) {
            return Ok(Some(get_reward(env, existing_id)?));
        }

        let mut campaign = get_campaign(env, referral.campaign_id)?;
        let quote = match eligibility::quote_reward(
            &campaign,
            referral.conversion_value.unwrap_or(0),
            env.ledger().timestamp(),
        ) {
            Some(quote) => quote,
            None => return Ok(None),
        };

        let id = next_id(env, &DataKey::NextRewardId);
        let reward = Reward {
            id,
            referral_id: referral.id,
            user: referral.referrer.clone(),
            amount: quote.amount,
            token: quote.token,
            kind: campaign.payout_kind,
            status: RewardStatus::Pending,
            transfer_ref: None,
            failure_reason: None,
            created_at: env.ledger().timestamp(),
            paid_at: None,
        };

        save_reward(env, &reward);
        env.storage().persistent().set(&unique_key, &id);

        campaign.total_rewards_paid += reward.amount;
        save_campaign(env, &campaign);

        // Notification trigger for the reward email
        env.events().publish(
            (events::REWARD, id),
            events::RewardCreated {
                reward_id: id,
                referral_id: referral.id,
                user: reward.user.clone(),
                amount: reward.amount,
                token: reward.token.clone(),
            },
        );

        Ok(Some(reward))
    }
}
