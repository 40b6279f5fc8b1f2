use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault address does not match the address derived from the owner")]
    AddressMismatch,
    #[msg("Vault is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not the vault owner")]
    Unauthorized,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Withdrawal would leave the vault below its rent-exempt minimum")]
    RentExemptionBreach,
    #[msg("Withdrawal amount exceeds the vault balance")]
    InsufficientBalance,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Vault has not been initialized")]
    VaultNotInitialized,
    #[msg("Withdrawals are closed")]
    WithdrawalClosed,
}
