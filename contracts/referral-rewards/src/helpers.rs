use crate::admin::AdminModule;
use crate::types::{Campaign, DataKey, Error, Referral, Reward};
use soroban_sdk::{Address, BytesN, Env};

pub fn get_campaign(env: &Env, campaign_id: u64) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}

pub fn get_referral(env: &Env, referral_id: u64) -> Result<Referral, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Referral(referral_id))
        .ok_or(Error::ReferralNotFound)
}

pub fn find_referral_by_code(env: &Env, code: &BytesN<32>) -> Option<Referral> {
    let id: u64 = env
        .storage()
        .persistent()
        .get(&DataKey::ReferralByCode(code.clone()))?;
    env.storage().persistent().get(&DataKey::Referral(id))
}

pub fn save_referral(env: &Env, referral: &Referral) {
    env.storage()
        .persistent()
        .set(&DataKey::Referral(referral.id), referral);
}

pub fn get_reward(env: &Env, reward_id: u64) -> Result<Reward, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Reward(reward_id))
        .ok_or(Error::RewardNotFound)
}

pub fn save_reward(env: &Env, reward: &Reward) {
    env.storage()
        .persistent()
        .set(&DataKey::Reward(reward.id), reward);
}

/// Mints the next id from a sequence counter held in instance storage.
pub fn next_id(env: &Env, key: &DataKey) -> u64 {
    let id: u64 = env.storage().instance().get(key).unwrap_or(0);
    env.storage().instance().set(key, &(id + 1));
    id + 1
}

pub fn verify_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(())
}

pub fn ensure_contract_active(env: &Env) -> Result<(), Error> {
    if AdminModule::is_contract_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}
