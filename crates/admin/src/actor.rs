//! Caller identity for administrative operations.

use common::UserId;

/// The capability level of a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Farmer,
    Admin,
}

/// An authenticated caller, threaded explicitly into every administrative
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub role: Role,
}

impl Actor {
    /// An actor with administrative capability.
    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Admin,
        }
    }

    /// An ordinary farmer actor.
    pub fn farmer(user_id: UserId) -> Self {
        Self {
            user_id,
            role: Role::Farmer,
        }
    }

    /// Returns true if this actor may drive status transitions.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
