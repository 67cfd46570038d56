use crate::helpers::{ensure_contract_active, get_campaign, get_referral};
use crate::interface::ScoringOperations;
use crate::providers::{BehaviorSignalClient, BehaviorSignals, ShareMessageClient};
use crate::types::{Confidence, DataKey, Error, Prediction, ReferralStatus};
use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

/// Cached predictions stay valid for 24 hours
pub const PREDICTION_TTL: u64 = 24 * 60 * 60;

/// Prior conversions only count toward the score within this window
const CONVERSION_LOOKBACK: u64 = 90 * 24 * 60 * 60;

const FALLBACK_MESSAGE: &str =
    "Hey! I've been using this product and it's been a game-changer. Thought you might like it too!";

pub struct ScoringModule;

impl ScoringOperations for ScoringModule {
    fn predict(env: Env, user: Address, campaign_id: u64) -> Result<Prediction, Error> {
        ensure_contract_active(&env)?;

        // Campaign must exist even though the score is campaign-agnostic
        get_campaign(&env, campaign_id)?;

        let now = env.ledger().timestamp();
        let cache_key = DataKey::Prediction(user.clone(), campaign_id);

        // Fresh cache entry wins, no recomputation
        if let Some(cached) = env.storage().persistent().get::<_, Prediction>(&cache_key) {
            if now.saturating_sub(cached.created_at) < PREDICTION_TTL {
                return Ok(cached);
            }
        }

        let signals = Self::fetch_signals(&env, &user);
        let prior_conversions = Self::count_recent_conversions(&env, &user, now);
        let (score, top_features) = Self::score(&env, &signals, prior_conversions);

        let confidence = if score >= 70 {
            Confidence::High
        } else if score >= 40 {
            Confidence::Medium
        } else {
            Confidence::Low
        };

        let suggested_reward: i128 = if score >= 80 {
            50
        } else if score >= 60 {
            30
        } else if score < 30 {
            10
        } else {
            25
        };

        let suggested_message = Self::fetch_message(&env, &user, score);

        let prediction = Prediction {
            user: user.clone(),
            campaign_id,
            likelihood_score: score,
            confidence,
            suggested_reward,
            suggested_message,
            top_features,
            created_at: now,
        };

        env.storage().persistent().set(&cache_key, &prediction);
        Self::index_advocate(&env, campaign_id, &user);

        Ok(prediction)
    }

    fn get_top_advocates(env: Env, campaign_id: u64, limit: u32) -> Vec<Prediction> {
        let index: Vec<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::AdvocateIndex(campaign_id))
            .unwrap_or_else(|| Vec::new(&env));

        // Insertion sort by score, best first; the index stays small
        // enough for quadratic cost not to matter
        let mut ranked: Vec<Prediction> = Vec::new(&env);
        for user in index.iter() {
            let prediction: Prediction = match env
                .storage()
                .persistent()
                .get(&DataKey::Prediction(user, campaign_id))
            {
                Some(prediction) => prediction,
                None => continue,
            };

            let mut position = ranked.len();
            for (i, existing) in ranked.iter().enumerate() {
                if existing.likelihood_score < prediction.likelihood_score {
                    position = i as u32;
                    break;
                }
            }
            ranked.insert(position, prediction);
        }

        while ranked.len() > limit {
            ranked.pop_back();
        }
        ranked
    }
}

// Helper functions
impl ScoringModule {
    /// Additive rule-based score over behavioral signals, clamped to
    /// [0, 100], with the contributing factors reported alongside.
    fn score(env: &Env, signals: &BehaviorSignals, prior_conversions: u32) -> (u32, Vec<Symbol>) {
        let mut score: u32 = 50; // Base score
        let mut features: Vec<Symbol> = Vec::new(env);

        // Tenure factor: longer-lived accounts refer more
        if signals.tenure_days > 90 {
            score += 15;
            features.push_back(symbol_short!("loyal"));
        } else if signals.tenure_days > 30 {
            score += 10;
            features.push_back(symbol_short!("growing"));
        }

        // Satisfaction factor
        if signals.nps_score >= 9 {
            score += 20;
            features.push_back(symbol_short!("high_nps"));
        } else if signals.nps_score >= 7 {
            score += 10;
            features.push_back(symbol_short!("satisfied"));
        }

        // Prior successful referrals
        if prior_conversions > 3 {
            score += 15;
            features.push_back(symbol_short!("advocate"));
        } else if prior_conversions > 0 {
            score += 10;
            features.push_back(symbol_short!("referred"));
        }

        // Feature adoption
        if signals.features_used >= 5 {
            score += 10;
            features.push_back(symbol_short!("poweruser"));
        }

        (score.min(100), features)
    }

    /// Counts the user's converted referrals inside the lookback window.
    /// This is the one signal the contract measures itself.
    fn count_recent_conversions(env: &Env, user: &Address, now: u64) -> u32 {
        let index: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::ReferrerIndex(user.clone()))
            .unwrap_or_else(|| Vec::new(env));

        let mut count = 0;
        for id in index.iter() {
            let referral = match get_referral(env, id) {
                Ok(referral) => referral,
                Err(_) => continue,
            };
            if referral.status != ReferralStatus::Converted {
                continue;
            }
            if let Some(converted_at) = referral.converted_at {
                if now.saturating_sub(converted_at) <= CONVERSION_LOOKBACK {
                    count += 1;
                }
            }
        }
        count
    }

    /// Best-effort provider call; neutral signals when the provider is
    /// missing or fails.
    fn fetch_signals(env: &Env, user: &Address) -> BehaviorSignals {
        let provider: Option<Address> = env.storage().instance().get(&DataKey::SignalProvider);
        let provider = match provider {
            Some(provider) => provider,
            None => return BehaviorSignals::neutral(),
        };

        match BehaviorSignalClient::new(env, &provider).try_get_signals(user) {
            Ok(Ok(signals)) => signals,
            _ => BehaviorSignals::neutral(),
        }
    }

    /// Best-effort provider call; fixed generic message when the
    /// provider is missing or fails.
    fn fetch_message(env: &Env, user: &Address, score: u32) -> String {
        let provider: Option<Address> = env.storage().instance().get(&DataKey::MessageProvider);
        let provider = match provider {
            Some(provider) => provider,
            None => return String::from_str(env, FALLBACK_MESSAGE),
        };

        match ShareMessageClient::new(env, &provider).try_suggest_message(user, &score) {
            Ok(Ok(message)) => message,
            _ => String::from_str(env, FALLBACK_MESSAGE),
        }
    }

    fn index_advocate(env: &Env, campaign_id: u64, user: &Address) {
        let key = DataKey::AdvocateIndex(campaign_id);
        let mut index: Vec<Address> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(env));
        if !index.contains(user) {
            index.push_back(user.clone());
            env.storage().persistent().set(&key, &index);
        }
    }
}
