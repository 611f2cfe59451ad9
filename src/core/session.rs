use crate::models::{Account, Role};

/// Who is using the app right now. Screens that need a particular kind of
/// account match on the variant instead of assuming one is present.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    User(Account),
    Admin(Account),
    SuperAdmin(Account),
}

impl Session {
    /// Wraps an account in the variant matching its role.
    pub fn for_account(account: Account) -> Self {
        match account.role {
            Role::User => Session::User(account),
            Role::Admin => Session::Admin(account),
            Role::SuperAdmin => Session::SuperAdmin(account),
        }
    }

    pub fn account(&self) -> Option<&Account> {
        match self {
            Session::Anonymous => None,
            Session::User(account) | Session::Admin(account) | Session::SuperAdmin(account) => {
                Some(account)
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }

    pub fn as_user(&self) -> Option<&Account> {
        match self {
            Session::User(account) => Some(account),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&Account> {
        match self {
            Session::Admin(account) => Some(account),
            _ => None,
        }
    }

    pub fn as_super_admin(&self) -> Option<&Account> {
        match self {
            Session::SuperAdmin(account) => Some(account),
            _ => None,
        }
    }
}

/// Roles selectable on the staff login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl From<AdminRole> for Role {
    fn from(role: AdminRole) -> Self {
        match role {
            AdminRole::Admin => Role::Admin,
            AdminRole::SuperAdmin => Role::SuperAdmin,
        }
    }
}
