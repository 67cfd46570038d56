use crate::admin::AdminModule;
use crate::helpers::{ensure_contract_active, find_referral_by_code};
use crate::interface::IngestOperations;
use crate::ledger::LedgerModule;
use crate::tracking::TrackingModule;
use crate::types::{Error, PaymentEvent, ReferralStatus, Reward};
use soroban_sdk::Env;

pub struct IngestModule;

impl IngestOperations for IngestModule {
    /// Applies a verified payment-success event. The conversion
    /// transition, the campaign counters and the reward creation all
    /// happen inside this one invocation, so a duplicate delivery either
    /// sees the referral unconverted and does everything, or sees it
    /// converted and does nothing.
    fn record_payment(env: Env, event: PaymentEvent) -> Result<Option<Reward>, Error> {
        ensure_contract_active(&env)?;
        AdminModule::verify_payment_provider(&env)?;

        let referral = match find_referral_by_code(&env, &event.referral_code) {
            Some(referral) => referral,
            // Payments without a known code are not referral conversions
            None => return Ok(None),
        };

        // Duplicate delivery of the same payment event
        if referral.status == ReferralStatus::Converted {
            return Ok(None);
        }

        let referral = TrackingModule::convert_referral(&env, referral, event.amount)?;
        LedgerModule::create_reward(&env, &referral)
    }
}
