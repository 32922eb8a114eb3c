multiversx_sc::imports!();

/// Upper bound for a single beneficiary weight.
pub const WEIGHT_MAX: u64 = 10_000;

pub fn is_valid_weight(weight: u64) -> bool {
    weight > 0 && weight <= WEIGHT_MAX
}

/// `floor(amount * weight / total_weight)`.
///
/// Computed on `BigUint`, so the intermediate product cannot overflow.
/// Callers guarantee `total_weight > 0`.
pub fn proportional_share<M: ManagedTypeApi>(
    amount: &BigUint<M>,
    weight: u64,
    total_weight: u64,
) -> BigUint<M> {
    (amount * weight) / total_weight
}

/// Running account of one deposit being split across the beneficiaries.
///
/// Shares are floored individually, so the sum handed out can fall short of
/// the deposit. The shortfall is the dust that stays in the pool.
pub struct SplitTally<M: ManagedTypeApi> {
    amount: BigUint<M>,
    total_weight: u64,
    distributed: BigUint<M>,
}

impl<M: ManagedTypeApi> SplitTally<M> {
    pub fn new(amount: BigUint<M>, total_weight: u64) -> Self {
        SplitTally {
            amount,
            total_weight,
            distributed: BigUint::zero(),
        }
    }

    /// Share owed to a beneficiary of `weight`, recorded as distributed.
    pub fn take_share(&mut self, weight: u64) -> BigUint<M> {
        let share = proportional_share(&self.amount, weight, self.total_weight);
        self.distributed += &share;
        share
    }

    /// Part of the deposit not credited to anyone.
    pub fn dust(&self) -> BigUint<M> {
        &self.amount - &self.distributed
    }
}
