// Revert messages. Kept in one place so the scenario tests can match on them.

pub const ERR_INVALID_AMOUNT: &str = "The value must be bigger than 0";
pub const ERR_DEPOSIT_NO_BENEFICIARIES: &str = "You need one payee at least";
pub const ERR_NO_BENEFICIARIES: &str = "PaySplitter: no payees";
pub const ERR_LENGTH_MISMATCH: &str = "PaySplitter: payees and weights length mismatch";
pub const ERR_WEIGHT_OUT_OF_RANGE: &str = "PaySplitter: 0 < weight <= 10000";
pub const ERR_ALREADY_REGISTERED: &str = "PaySplitter: account already has weights";
pub const ERR_NOT_REGISTERED: &str = "PaySplitter: account has no weights";
pub const ERR_OUTSTANDING_BALANCE: &str = "PaySplitter: There is balance in the account";
pub const ERR_NOTHING_DUE: &str = "PaySplitter: account is not due payment";
pub const ERR_INDEX_OUT_OF_RANGE: &str = "PaySplitter: index out of range";

pub const ERR_MISSING_ROLE: &str = "AccessControl: account is missing role";
pub const ERR_LAST_ADMIN: &str = "AccessControl: cannot remove the last admin";
