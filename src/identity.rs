/// Supplies the identity of the currently signed-in user.
///
/// The actual sign-in flow lives outside this crate; the store and the save
/// path only ever ask "who is the owner right now". `None` means
/// unauthenticated, and callers route that to their own sign-in handling.
pub trait IdentityGate: Send + Sync {
    /// The owner id all persisted reads and writes are scoped by, if any.
    fn current_owner(&self) -> Option<String>;
}

/// Identity fixed at construction time.
///
/// Covers the single-user service deployment and tests. A multi-user frontend
/// would implement `IdentityGate` against its own auth session instead.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    owner: Option<String>,
}

impl StaticIdentity {
    pub fn signed_in(owner: impl Into<String>) -> Self {
        Self {
            owner: Some(owner.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { owner: None }
    }
}

impl IdentityGate for StaticIdentity {
    fn current_owner(&self) -> Option<String> {
        self.owner.clone()
    }
}
