use crate::helpers::{ensure_contract_active, get_campaign, next_id, save_campaign};
use crate::interface::CampaignOperations;
use crate::types::{
    Campaign, CampaignConfig, CampaignStats, CampaignUpdate, DataKey, Error, RewardType,
};
use soroban_sdk::{Address, Env};

pub struct CampaignModule;

impl CampaignOperations for CampaignModule {
    fn create_campaign(
        env: Env,
        merchant: Address,
        config: CampaignConfig,
    ) -> Result<u64, Error> {
        ensure_contract_active(&env)?;
        merchant.require_auth();

        Self::validate_reward_config(config.reward_type, config.reward_amount)?;
        if config.minimum_purchase < 0 {
            return Err(Error::InvalidAmount);
        }

        let id = next_id(&env, &DataKey::NextCampaignId);
        let campaign = Campaign {
            id,
            merchant,
            name: config.name,
            reward_type: config.reward_type,
            reward_amount: config.reward_amount,
            reward_token: config.reward_token,
            payout_kind: config.payout_kind,
            minimum_purchase: config.minimum_purchase,
            end_date: config.end_date,
            is_active: true,
            total_referrals: 0,
            total_clicks: 0,
            total_signups: 0,
            total_conversions: 0,
            total_rewards_paid: 0,
            created_at: env.ledger().timestamp(),
        };
        save_campaign(&env, &campaign);

        Ok(id)
    }

    fn update_campaign(
        env: Env,
        campaign_id: u64,
        update: CampaignUpdate,
    ) -> Result<Campaign, Error> {
        ensure_contract_active(&env)?;

        let mut campaign = get_campaign(&env, campaign_id)?;
        campaign.merchant.require_auth();

        // Validate every present field before applying any of them
        if let Some(amount) = update.reward_amount {
            Self::validate_reward_config(campaign.reward_type, amount)?;
        }
        if let Some(minimum) = update.minimum_purchase {
            if minimum < 0 {
                return Err(Error::InvalidAmount);
            }
        }

        if let Some(name) = update.name {
            campaign.name = name;
        }
        if let Some(amount) = update.reward_amount {
            campaign.reward_amount = amount;
        }
        if let Some(minimum) = update.minimum_purchase {
            campaign.minimum_purchase = minimum;
        }
        if let Some(end_date) = update.end_date {
            campaign.end_date = Some(end_date);
        }
        if let Some(active) = update.is_active {
            campaign.is_active = active;
        }
        save_campaign(&env, &campaign);

        Ok(campaign)
    }

    fn set_campaign_active(env: Env, campaign_id: u64, active: bool) -> Result<(), Error> {
        ensure_contract_active(&env)?;

        let mut campaign = get_campaign(&env, campaign_id)?;
        campaign.merchant.require_auth();

        campaign.is_active = active;
        save_campaign(&env, &campaign);

        Ok(())
    }

    fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        get_campaign(&env, campaign_id)
    }

    fn get_campaign_stats(env: Env, campaign_id: u64) -> Result<CampaignStats, Error> {
        let campaign = get_campaign(&env, campaign_id)?;

        let conversion_rate_bps = if campaign.total_clicks > 0 {
            ((campaign.total_conversions as u64 * 10_000) / campaign.total_clicks as u64) as u32
        } else {
            0
        };

        Ok(CampaignStats {
            total_referrals: campaign.total_referrals,
            total_clicks: campaign.total_clicks,
            total_signups: campaign.total_signups,
            total_conversions: campaign.total_conversions,
            total_rewards_paid: campaign.total_rewards_paid,
            conversion_rate_bps,
        })
    }
}

// Helper functions
impl CampaignModule {
    fn validate_reward_config(reward_type: RewardType, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidRewardConfig);
        }
        // A percentage above 100 would reward more than the purchase
        if reward_type == RewardType::Percentage && amount > 100 {
            return Err(Error::InvalidRewardConfig);
        }
        Ok(())
    }
}
