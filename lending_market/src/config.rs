multiversx_sc::imports!();

use crate::{storage, validation};
use common_errors::ERROR_INVALID_TOKEN;
use common_structs::ProgramConfig;

/// Owner governance over lending programs.
///
/// A program binds the loan token to the liquidity pool that funds it and fixes the late fee
/// rate snapshotted into every loan taken under it. Program admins operate the program's loans.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    /// Registers a lending program.
    ///
    /// # Arguments
    /// - `token`: Settlement token of the program's loans.
    /// - `liquidity_pool`: Pool contract funding the loans and receiving the hooks.
    /// - `late_fee_rate`: Late fee charged once at the due boundary, scaled by `RATE_FACTOR`.
    ///
    /// # Returns
    /// - `u32`: The new program id, starting from 1.
    #[only_owner]
    #[endpoint(registerProgram)]
    fn register_program(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        liquidity_pool: ManagedAddress,
        late_fee_rate: u32,
    ) -> u32 {
        require!(token.is_valid(), ERROR_INVALID_TOKEN);
        self.validate_liquidity_pool(&liquidity_pool);
        self.validate_late_fee_rate(late_fee_rate);

        let program_id = self.last_program_id().update(|id| {
            *id += 1;
            *id
        });
        self.programs(program_id)
            .set(ProgramConfig::new(token.clone(), liquidity_pool.clone(), late_fee_rate));

        self.program_registered_event(program_id, &token, &liquidity_pool, late_fee_rate);

        program_id
    }

    /// Changes the late fee rate for loans taken from now on. Existing loans keep their snapshot.
    #[only_owner]
    #[endpoint(setProgramLateFeeRate)]
    fn set_program_late_fee_rate(&self, program_id: u32, late_fee_rate: u32) {
        let mut program = self.require_program(program_id);
        self.validate_late_fee_rate(late_fee_rate);

        program.late_fee_rate = late_fee_rate;
        self.programs(program_id).set(&program);

        self.program_late_fee_rate_updated_event(program_id, late_fee_rate);
    }

    #[only_owner]
    #[endpoint(addProgramAdmin)]
    fn add_program_admin(&self, program_id: u32, admin: ManagedAddress) {
        self.require_program(program_id);
        self.program_admins(program_id).insert(admin.clone());
        self.program_admin_updated_event(program_id, &admin, true);
    }

    #[only_owner]
    #[endpoint(removeProgramAdmin)]
    fn remove_program_admin(&self, program_id: u32, admin: ManagedAddress) {
        self.require_program(program_id);
        self.program_admins(program_id).swap_remove(&admin);
        self.program_admin_updated_event(program_id, &admin, false);
    }
}
