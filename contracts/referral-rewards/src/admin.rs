use crate::helpers::verify_admin;
use crate::interface::AdminOperations;
use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env};

pub struct AdminModule;

impl AdminOperations for AdminModule {
    fn initialize(env: Env, admin: Address, payment_provider: Address) -> Result<(), Error> {
        // Check if contract is already initialized
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);

        env.storage()
            .instance()
            .set(&DataKey::PaymentProvider, &payment_provider);

        // Initialize contract as active
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &false);

        Ok(())
    }

    fn get_admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage().instance().set(&DataKey::Admin, &new_admin);
        Ok(())
    }

    fn pause_contract(env: Env) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &true);
        Ok(())
    }

    fn resume_contract(env: Env) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::ContractPaused, &false);
        Ok(())
    }

    fn get_paused_state(env: Env) -> Result<bool, Error> {
        Ok(Self::is_contract_paused(&env))
    }

    fn set_payment_provider(env: Env, provider: Address) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::PaymentProvider, &provider);
        Ok(())
    }

    fn set_signal_provider(env: Env, provider: Address) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::SignalProvider, &provider);
        Ok(())
    }

    fn set_message_provider(env: Env, provider: Address) -> Result<(), Error> {
        verify_admin(&env)?;
        env.storage()
            .instance()
            .set(&DataKey::MessageProvider, &provider);
        Ok(())
    }
}

// Helper functions
impl AdminModule {
    pub fn is_contract_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::ContractPaused)
            .unwrap_or(false)
    }

    /// Requires auth from the configured payment provider. This is the
    /// on-chain stand-in for webhook signature verification: only events
    /// the provider signed off on reach the ingestor.
    pub fn verify_payment_provider(env: &Env) -> Result<(), Error> {
        let provider: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentProvider)
            .ok_or(Error::NotInitialized)?;
        provider.require_auth();
        Ok(())
    }
}
