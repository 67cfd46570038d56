use crate::types::{Campaign, RewardQuote, RewardType};

/// Decides whether a conversion earns a reward and computes its amount.
///
/// Pure: same campaign, value and clock always produce the same quote.
/// `None` means ineligible, never an error.
pub fn quote_reward(campaign: &Campaign, conversion_value: i128, now: u64) -> Option<RewardQuote> {
    if !campaign.is_active {
        return None;
    }

    // Check if campaign has ended
    if let Some(end_date) = campaign.end_date {
        if now > end_date {
            return None;
        }
    }

    // Check minimum purchase requirement
    if conversion_value < campaign.minimum_purchase {
        return None;
    }

    let amount = match campaign.reward_type {
        RewardType::Flat => campaign.reward_amount,
        RewardType::Percentage => conversion_value.checked_mul(campaign.reward_amount)? / 100,
    };

    Some(RewardQuote {
        amount,
        token: campaign.reward_token.clone(),
    })
}
