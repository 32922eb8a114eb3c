#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod errors;
pub mod split;
pub mod types;

use errors::{
    ERR_ALREADY_REGISTERED, ERR_DEPOSIT_NO_BENEFICIARIES, ERR_INDEX_OUT_OF_RANGE,
    ERR_INVALID_AMOUNT, ERR_LENGTH_MISMATCH, ERR_NOTHING_DUE, ERR_NOT_REGISTERED,
    ERR_NO_BENEFICIARIES, ERR_OUTSTANDING_BALANCE, ERR_WEIGHT_OUT_OF_RANGE,
};
use split::{is_valid_weight, SplitTally, WEIGHT_MAX};
use types::Operation;

// ============================================================
// Contract
// ============================================================

/// Weighted payment splitter.
///
/// Every deposit is credited to the registered beneficiaries in proportion to
/// `weight / total_weight` at the time of the deposit. Beneficiaries pull their
/// accrued balance with `withdraw`. Weight changes only affect later deposits.
#[multiversx_sc::contract]
pub trait PaySplitter: access_control::AccessControlModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, beneficiaries: ManagedVec<ManagedAddress>, weights: ManagedVec<u64>) {
        let deployer = self.blockchain().get_caller();
        self.setup_roles(&deployer);

        self.total_weight().set(0u64);
        self.pooled_balance().set(BigUint::zero());
        self.register_beneficiaries(&beneficiaries, &weights);
    }

    #[upgrade]
    fn upgrade(&self) {
        self.require_authorized(Operation::Upgrade);
    }

    // ========================================================
    // ENDPOINT: deposit
    // Splits the attached EGLD across all current beneficiaries.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        require!(!self.beneficiaries().is_empty(), ERR_DEPOSIT_NO_BENEFICIARIES);

        let mut tally = SplitTally::new(amount.clone(), self.total_weight().get());
        for beneficiary in self.beneficiaries().iter() {
            let share = tally.take_share(self.weight(&beneficiary).get());
            self.accrued_balance(&beneficiary)
                .update(|balance| *balance += &share);
        }

        // The pool takes the full amount, so the floored remainder stays in it as dust.
        self.pooled_balance().update(|pool| *pool += &amount);

        self.payment_received_event(&caller, &amount, &tally.dust());
    }

    // ========================================================
    // ENDPOINT: addBeneficiaries
    // ========================================================

    #[endpoint(addBeneficiaries)]
    fn add_beneficiaries(&self, beneficiaries: ManagedVec<ManagedAddress>, weights: ManagedVec<u64>) {
        self.require_authorized(Operation::AddBeneficiaries);
        self.register_beneficiaries(&beneficiaries, &weights);
    }

    // ========================================================
    // ENDPOINT: removeBeneficiary
    // Only allowed once the beneficiary has withdrawn everything,
    // otherwise their balance would be locked with no owner.
    // ========================================================

    #[endpoint(removeBeneficiary)]
    fn remove_beneficiary(&self, beneficiary: ManagedAddress) {
        self.require_authorized(Operation::RemoveBeneficiary);
        require!(!self.beneficiaries().is_empty(), ERR_NO_BENEFICIARIES);

        let weight = self.weight(&beneficiary).get();
        require!(weight > 0, ERR_NOT_REGISTERED);
        require!(
            self.accrued_balance(&beneficiary).get() == 0u64,
            ERR_OUTSTANDING_BALANCE
        );

        self.total_weight().update(|total| *total -= weight);
        self.remove_from_sequence(&beneficiary);
        self.weight(&beneficiary).clear();

        self.beneficiary_removed_event(&beneficiary, weight);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Pays the caller everything accrued so far.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) -> BigUint {
        let caller = self.blockchain().get_caller();
        require!(self.is_beneficiary(&caller), ERR_NOT_REGISTERED);

        let amount = self.accrued_balance(&caller).get();
        require!(amount > 0u64, ERR_NOTHING_DUE);

        // Zero the balance before sending: a re-entrant withdraw must see nothing due.
        // A failed send reverts the whole transaction, balance included.
        self.accrued_balance(&caller).clear();
        self.pooled_balance().update(|pool| *pool -= &amount);

        self.send().direct_egld(&caller, &amount);
        self.payment_released_event(&caller, &amount);

        amount
    }

    // ========================================================
    // INTERNAL: batch registration
    // The whole batch is validated before anything is written.
    // ========================================================

    fn register_beneficiaries(
        &self,
        beneficiaries: &ManagedVec<ManagedAddress>,
        weights: &ManagedVec<u64>,
    ) {
        let count = beneficiaries.len();
        require!(count > 0 && count == weights.len(), ERR_LENGTH_MISMATCH);

        for i in 0..count {
            require!(is_valid_weight(weights.get(i)), ERR_WEIGHT_OUT_OF_RANGE);
        }
        for i in 0..count {
            let account = beneficiaries.get(i);
            require!(!self.is_beneficiary(&account), ERR_ALREADY_REGISTERED);
            for j in 0..i {
                require!(*beneficiaries.get(j) != *account, ERR_ALREADY_REGISTERED);
            }
        }

        let mut added_weight = 0u64;
        for i in 0..count {
            let account = beneficiaries.get(i);
            let weight = weights.get(i);

            self.beneficiaries().push(&account);
            self.weight(&account).set(weight);
            self.accrued_balance(&account).clear();
            added_weight += weight;

            self.beneficiary_added_event(&account, weight);
        }
        self.total_weight().update(|total| *total += added_weight);
    }

    /// Drops `beneficiary` from the registration sequence, shifting the tail
    /// left so the remaining beneficiaries keep their order.
    fn remove_from_sequence(&self, beneficiary: &ManagedAddress) {
        let mut sequence = self.beneficiaries();
        let len = sequence.len();
        let Some(position) = (1..=len).find(|&i| sequence.get(i) == *beneficiary) else {
            return;
        };

        for i in position..len {
            let next = sequence.get(i + 1);
            sequence.set(i, &next);
        }
        // Removes the now-duplicated last slot.
        sequence.swap_remove(len);
    }

    fn is_beneficiary(&self, account: &ManagedAddress) -> bool {
        self.weight(account).get() > 0
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getWeight)]
    fn get_weight(&self, account: &ManagedAddress) -> u64 {
        self.weight(account).get()
    }

    #[view(getAccruedBalance)]
    fn get_accrued_balance(&self, account: &ManagedAddress) -> BigUint {
        self.accrued_balance(account).get()
    }

    #[view(getTotalWeight)]
    fn get_total_weight(&self) -> u64 {
        self.total_weight().get()
    }

    #[view(getPooledBalance)]
    fn get_pooled_balance(&self) -> BigUint {
        self.pooled_balance().get()
    }

    /// 0-based position in registration order.
    #[view(getBeneficiary)]
    fn get_beneficiary(&self, index: u64) -> ManagedAddress {
        let sequence = self.beneficiaries();
        // Bound-check in u64: usize is 32 bits on wasm32.
        require!(index < sequence.len() as u64, ERR_INDEX_OUT_OF_RANGE);
        sequence.get(index as usize + 1)
    }

    #[view(getBeneficiaryCount)]
    fn get_beneficiary_count(&self) -> u64 {
        self.beneficiaries().len() as u64
    }

    #[view(getBeneficiaries)]
    fn get_beneficiaries(&self) -> MultiValueEncoded<MultiValue2<ManagedAddress, u64>> {
        let mut result = MultiValueEncoded::new();
        for beneficiary in self.beneficiaries().iter() {
            let weight = self.weight(&beneficiary).get();
            result.push((beneficiary, weight).into());
        }
        result
    }

    /// Truncation remainder held by the pool that no beneficiary can withdraw.
    #[view(getUndistributedDust)]
    fn get_undistributed_dust(&self) -> BigUint {
        let mut accrued = BigUint::zero();
        for beneficiary in self.beneficiaries().iter() {
            accrued += self.accrued_balance(&beneficiary).get();
        }
        self.pooled_balance().get() - accrued
    }

    #[view(getWeightMax)]
    fn get_weight_max(&self) -> u64 {
        WEIGHT_MAX
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("paymentReceived")]
    fn payment_received_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] amount: &BigUint,
        dust: &BigUint,
    );

    #[event("beneficiaryAdded")]
    fn beneficiary_added_event(&self, #[indexed] account: &ManagedAddress, #[indexed] weight: u64);

    #[event("beneficiaryRemoved")]
    fn beneficiary_removed_event(&self, #[indexed] account: &ManagedAddress, #[indexed] weight: u64);

    #[event("paymentReleased")]
    fn payment_released_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Registration order, which is also the order deposits are credited in.
    #[storage_mapper("beneficiaries")]
    fn beneficiaries(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("weight")]
    fn weight(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("accruedBalance")]
    fn accrued_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalWeight")]
    fn total_weight(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("pooledBalance")]
    fn pooled_balance(&self) -> SingleValueMapper<BigUint>;
}
