multiversx_sc::imports!();

use crate::errors::{ERR_LAST_ADMIN, ERR_MISSING_ROLE};
use crate::types::{Operation, Role};

/// Role-based gate for the mutating endpoints.
///
/// The ledger never inspects roles itself; it only asks whether the caller is
/// authorized for an `Operation`.
#[multiversx_sc::module]
pub trait AccessControlModule {
    // ========================================================
    // ENDPOINTS: role management
    // ========================================================

    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        self.require_authorized(Operation::ManageRoles);
        if self.role_members(role).insert(account.clone()) {
            let sender = self.blockchain().get_caller();
            self.role_granted_event(role, &account, &sender);
        }
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_authorized(Operation::ManageRoles);
        self.remove_role_member(role, &account);
    }

    /// Caller drops one of its own roles.
    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        self.remove_role_member(role, &caller);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn setup_roles(&self, account: &ManagedAddress) {
        for role in [Role::Admin, Role::Upgrader] {
            self.role_members(role).insert(account.clone());
            self.role_granted_event(role, account, account);
        }
    }

    fn require_authorized(&self, operation: Operation) {
        let caller = self.blockchain().get_caller();
        require!(self.is_authorized(&caller, operation), ERR_MISSING_ROLE);
    }

    fn remove_role_member(&self, role: Role, account: &ManagedAddress) {
        let mut members = self.role_members(role);
        if !members.contains(account) {
            return;
        }
        require!(
            role != Role::Admin || members.len() > 1,
            ERR_LAST_ADMIN
        );

        members.swap_remove(account);
        let sender = self.blockchain().get_caller();
        self.role_revoked_event(role, account, &sender);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAuthorized)]
    fn is_authorized(&self, account: &ManagedAddress, operation: Operation) -> bool {
        self.has_role(operation.required_role(), account)
    }

    #[view(hasRole)]
    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            result.push(member);
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("roleGranted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    #[event("roleRevoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        sender: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
