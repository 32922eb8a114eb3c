multiversx_sc::derive_imports!();

// ============================================================
// Role — who may mutate the splitter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Role {
    /// Manages the beneficiary set and role membership.
    Admin,
    /// May upgrade the contract code.
    Upgrader,
}

// ============================================================
// Operation — gated mutations, each mapped to the role it needs
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Operation {
    AddBeneficiaries,
    RemoveBeneficiary,
    ManageRoles,
    Upgrade,
}

impl Operation {
    pub fn required_role(self) -> Role {
        match self {
            Operation::AddBeneficiaries
            | Operation::RemoveBeneficiary
            | Operation::ManageRoles => Role::Admin,
            Operation::Upgrade => Role::Upgrader,
        }
    }
}
