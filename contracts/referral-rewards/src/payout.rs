use crate::events;
use crate::helpers::{ensure_contract_active, get_reward, save_reward, verify_admin};
use crate::interface::PayoutOperations;
use crate::types::{Error, PayoutKind, Reward, RewardStatus};
use soroban_sdk::{token::TokenClient, Address, Env, String};

pub struct PayoutModule;

impl PayoutOperations for PayoutModule {
    fn payout_reward(
        env: Env,
        reward_id: u64,
        destination: Option<Address>,
    ) -> Result<Option<Reward>, Error> {
        ensure_contract_active(&env)?;
        verify_admin(&env)?;

        let mut reward = get_reward(&env, reward_id)?;

        // A reward gets exactly one payout attempt from Pending;
        // anything else is a no-op
        if reward.status != RewardStatus::Pending {
            return Ok(None);
        }

        match destination {
            Some(account) if reward.kind == PayoutKind::Cash => {
                Self::transfer_to(&env, &mut reward, &account);
            }
            _ => {
                // No external account, or a credit reward: settlement
                // happens outside this contract
                reward.status = RewardStatus::Processing;
            }
        }

        save_reward(&env, &reward);

        env.events().publish(
            (events::PAYOUT, reward.id),
            events::RewardSettled {
                reward_id: reward.id,
                status: reward.status,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(Some(reward))
    }
}

// Helper functions
impl PayoutModule {
    /// Attempts the external token transfer. Failure is recorded on the
    /// reward, never propagated to the caller.
    fn transfer_to(env: &Env, reward: &mut Reward, destination: &Address) {
        let token = TokenClient::new(env, &reward.token);
        let result =
            token.try_transfer(&env.current_contract_address(), destination, &reward.amount);

        match result {
            Ok(Ok(())) => {
                reward.status = RewardStatus::Paid;
                reward.transfer_ref = Some(env.ledger().sequence());
                reward.paid_at = Some(env.ledger().timestamp());
            }
            _ => {
                reward.status = RewardStatus::Failed;
                reward.failure_reason = Some(String::from_str(env, "token transfer rejected"));
            }
        }
    }
}
