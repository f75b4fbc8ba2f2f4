use crate::signers::Signer;
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Arc;

/// Parameters for one verification attempt
///
/// Built fresh for each attempt. Unset expectations (issuer, audience,
/// subject) are not checked.
#[derive(Clone)]
pub struct VerificationContext {
    signer: Arc<dyn Signer>,
    issuer: Option<String>,
    audience: Vec<String>,
    subject: Option<String>,
    now: DateTime<Utc>,
    leeway: Duration,
}

impl VerificationContext {
    /// Create a context evaluated at the current time with no leeway
    #[must_use]
    pub fn new(signer: Arc<dyn Signer>) -> Self {
        Self {
            signer,
            issuer: None,
            audience: Vec::new(),
            subject: None,
            now: Utc::now(),
            leeway: Duration::zero(),
        }
    }

    /// Expect this issuer
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Accept tokens addressed to any of these audiences
    #[must_use]
    pub fn with_audience<I, S>(mut self, audience: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.audience = audience.into_iter().map(Into::into).collect();
        self
    }

    /// Expect this subject
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Evaluate time-based claims at `now` instead of the current time
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Tolerate this much clock skew on `exp` and `nbf`
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// The signer used to check signatures
    #[must_use]
    pub fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    /// Expected issuer
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.issuer.as_deref()
    }

    /// Accepted audiences
    #[must_use]
    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    /// Expected subject
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Evaluation instant
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Clock skew tolerance
    #[must_use]
    pub fn leeway(&self) -> Duration {
        self.leeway
    }
}

impl fmt::Debug for VerificationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationContext")
            .field("algorithm", &self.signer.algorithm())
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("subject", &self.subject)
            .field("now", &self.now)
            .field("leeway", &self.leeway)
            .finish()
    }
}
