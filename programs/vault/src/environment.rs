use anchor_lang::prelude::*;

use crate::constants::WITHDRAWAL_DEADLINE;

/// Execution context threaded through every vault operation.
///
/// Inside the runtime this is read from the `Rent` and `Clock` sysvars with
/// [`Environment::load`]. Off-chain callers (simulators, tests) build one
/// with [`Environment::new`] and the builder methods.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Identity the vault addresses are derived against
    pub program_id: Pubkey,
    /// Signer of the current transaction, already verified by the runtime
    pub authority: Pubkey,
    pub rent: Rent,
    pub unix_timestamp: i64,
    /// Withdrawals are refused at or after this timestamp when set
    pub withdrawal_deadline: Option<i64>,
}

impl Environment {
    pub fn new(program_id: Pubkey, authority: Pubkey, rent: Rent) -> Self {
        Self {
            program_id,
            authority,
            rent,
            unix_timestamp: 0,
            withdrawal_deadline: None,
        }
    }

    pub fn load(program_id: &Pubkey, authority: &Pubkey) -> Result<Self> {
        let rent = Rent::get()?;
        let clock = Clock::get()?;

        Ok(Self::new(*program_id, *authority, rent)
            .with_clock(clock.unix_timestamp)
            .with_withdrawal_deadline(WITHDRAWAL_DEADLINE))
    }

    pub fn with_clock(mut self, unix_timestamp: i64) -> Self {
        self.unix_timestamp = unix_timestamp;
        self
    }

    pub fn with_withdrawal_deadline(mut self, deadline: Option<i64>) -> Self {
        self.withdrawal_deadline = deadline;
        self
    }

    /// Rent-exempt floor for an account holding `data_len` bytes.
    pub fn minimum_balance(&self, data_len: usize) -> u64 {
        self.rent.minimum_balance(data_len)
    }

    pub fn withdrawals_open(&self) -> bool {
        match self.withdrawal_deadline {
            Some(deadline) => self.unix_timestamp < deadline,
            None => true,
        }
    }
}
