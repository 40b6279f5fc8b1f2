/// Domain-separation tag for vault address derivation.
pub const VAULT_SEED: &[u8] = b"vault";

/// Vault accounts carry no payload; the derivation binds the owner and the
/// balance is the account's lamports.
pub const VAULT_SPACE: usize = 0;

/// January 1st 2026, 00:00 in UTC+2 (2025-12-31T22:00:00Z)
#[cfg(feature = "withdrawal-deadline")]
pub const WITHDRAWAL_DEADLINE: Option<i64> = Some(1_767_218_400);

#[cfg(not(feature = "withdrawal-deadline"))]
pub const WITHDRAWAL_DEADLINE: Option<i64> = None;
