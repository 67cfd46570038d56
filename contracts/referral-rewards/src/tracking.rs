use crate::events;
use crate::helpers::{
    ensure_contract_active, find_referral_by_code, get_campaign, get_referral, next_id,
    save_campaign, save_referral, verify_admin,
};
use crate::interface::TrackingOperations;
use crate::types::{ClickAttribution, DataKey, Error, Referral, ReferralStatus};
use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String, Vec};

pub struct TrackingModule;

impl TrackingOperations for TrackingModule {
    fn create_referral(
        env: Env,
        campaign_id: u64,
        referrer: Address,
        referee_email: String,
    ) -> Result<Referral, Error> {
        ensure_contract_active(&env)?;
        referrer.require_auth();

        let mut campaign = get_campaign(&env, campaign_id)?;

        // Idempotent create: the same party triple always maps to the
        // same referral
        let party_key =
            DataKey::ReferralByParty(campaign_id, referrer.clone(), referee_email.clone());
        if let Some(existing_id) = env.storage().persistent().get::<_, u64>(&party_key) {
            return get_referral(&env, existing_id);
        }

        let id = next_id(&env, &DataKey::NextReferralId);
        let code = Self::generate_code(&env, campaign_id, &referrer, &referee_email, id);

        let referral = Referral {
            id,
            code: code.clone(),
            campaign_id,
            referrer: referrer.clone(),
            referee_email,
            referee: None,
            status: ReferralStatus::Clicked,
            conversion_value: None,
            attribution: None,
            created_at: env.ledger().timestamp(),
            signed_up_at: None,
            converted_at: None,
        };

        save_referral(&env, &referral);
        env.storage()
            .persistent()
            .set(&DataKey::ReferralByCode(code), &id);
        env.storage().persistent().set(&party_key, &id);

        let mut index: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::ReferrerIndex(referrer.clone()))
            .unwrap_or_else(|| Vec::new(&env));
        index.push_back(id);
        env.storage()
            .persistent()
            .set(&DataKey::ReferrerIndex(referrer.clone()), &index);

        campaign.total_referrals += 1;
        save_campaign(&env, &campaign);

        env.events().publish(
            (events::REFERRAL, id),
            events::ReferralCreated {
                referral_id: id,
                campaign_id,
                referrer,
            },
        );

        Ok(referral)
    }

    fn record_click(
        env: Env,
        code: BytesN<32>,
        attribution: ClickAttribution,
    ) -> Result<(), Error> {
        // Click tracking must never surface an error to the widget:
        // unknown codes and a paused contract are both silent successes
        if crate::admin::AdminModule::is_contract_paused(&env) {
            return Ok(());
        }

        let referral = match find_referral_by_code(&env, &code) {
            Some(referral) => referral,
            None => return Ok(()),
        };

        let mut referral = referral;
        referral.attribution = Some(attribution);
        save_referral(&env, &referral);

        let mut campaign = get_campaign(&env, referral.campaign_id)?;
        campaign.total_clicks += 1;
        save_campaign(&env, &campaign);

        env.events()
            .publish((events::CLICK, referral.id), referral.campaign_id);

        Ok(())
    }

    fn mark_signed_up(env: Env, code: BytesN<32>, referee: Address) -> Result<(), Error> {
        ensure_contract_active(&env)?;

        let mut referral =
            find_referral_by_code(&env, &code).ok_or(Error::ReferralNotFound)?;

        // Already signed up or converted: idempotent no-op
        if referral.status >= ReferralStatus::SignedUp {
            return Ok(());
        }

        referral.status = ReferralStatus::SignedUp;
        referral.referee = Some(referee.clone());
        referral.signed_up_at = Some(env.ledger().timestamp());
        save_referral(&env, &referral);

        let mut campaign = get_campaign(&env, referral.campaign_id)?;
        campaign.total_signups += 1;
        save_campaign(&env, &campaign);

        env.events().publish(
            (events::SIGNUP, referral.id),
            events::SignupRecorded {
                referral_id: referral.id,
                campaign_id: referral.campaign_id,
                referee,
            },
        );

        Ok(())
    }

    fn mark_converted(
        env: Env,
        code: BytesN<32>,
        conversion_value: i128,
    ) -> Result<Referral, Error> {
        ensure_contract_active(&env)?;
        verify_admin(&env)?;

        let referral = find_referral_by_code(&env, &code).ok_or(Error::ReferralNotFound)?;

        // Duplicate conversion signals stop here
        if referral.status == ReferralStatus::Converted {
            return Ok(referral);
        }

        Self::convert_referral(&env, referral, conversion_value)
    }

    fn get_referral(env: Env, referral_id: u64) -> Result<Referral, Error> {
        get_referral(&env, referral_id)
    }

    fn get_referral_by_code(env: Env, code: BytesN<32>) -> Result<Referral, Error> {
        find_referral_by_code(&env, &code).ok_or(Error::ReferralNotFound)
    }

    fn get_referrals_for_referrer(env: Env, referrer: Address) -> Vec<Referral> {
        let index: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::ReferrerIndex(referrer))
            .unwrap_or_else(|| Vec::new(&env));

        let mut referrals = Vec::new(&env);
        for id in index.iter() {
            if let Ok(referral) = get_referral(&env, id) {
                referrals.push_back(referral);
            }
        }
        referrals
    }
}

// Helper functions
impl TrackingModule {
    /// Performs the terminal transition to Converted and bumps the
    /// campaign conversion counter in the same invocation. Callers must
    /// have checked the referral is not already converted.
    pub(crate) fn convert_referral(
        env: &Env,
        mut referral: Referral,
        conversion_value: i128,
    ) -> Result<Referral, Error> {
        referral.status = ReferralStatus::Converted;
        referral.conversion_value = Some(conversion_value);
        referral.converted_at = Some(env.ledger().timestamp());
        save_referral(env, &referral);

        let mut campaign = get_campaign(env, referral.campaign_id)?;
        campaign.total_conversions += 1;
        save_campaign(env, &campaign);

        env.events().publish(
            (events::CONVERT, referral.id),
            events::ConversionRecorded {
                referral_id: referral.id,
                campaign_id: referral.campaign_id,
                conversion_value,
            },
        );

        Ok(referral)
    }

    /// Collision-resistant tracking code: sha256 over the identity triple
    /// and the freshly minted referral id.
    fn generate_code(
        env: &Env,
        campaign_id: u64,
        referrer: &Address,
        referee_email: &String,
        referral_id: u64,
    ) -> BytesN<32> {
        let payload = (campaign_id, referrer.clone(), referee_email.clone(), referral_id)
            .to_xdr(env);
        env.crypto().sha256(&payload).into()
    }
}
