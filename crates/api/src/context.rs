use jobboard_auth::Identity;

/// Identity context for a request.
///
/// Always present on requests that went through the identity middleware;
/// `None` inside means the request is unauthenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentIdentity(Option<Identity>);

impl CurrentIdentity {
    pub fn new(identity: Option<Identity>) -> Self {
        Self(identity)
    }

    pub fn get(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}
