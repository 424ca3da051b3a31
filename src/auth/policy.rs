//! Declarative prefix → requirement policy.

use std::fmt;

/// Literal scheme prefix of a bearer `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Shared secret compared against presented bearer tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    fn matches(&self, presented: &str) -> bool {
        self.0.as_bytes() == presented.as_bytes()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(****)")
    }
}

/// Credential a protected prefix demands.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// `Authorization: Bearer <token>` with exactly this token.
    BearerToken(BearerToken),
}

/// Why a request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No `Authorization` header, or not of the form `Bearer <token>` (401).
    MissingCredentials,
    /// Well-formed header carrying the wrong token (403).
    InvalidToken,
}

/// Outcome of evaluating a request against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Path is not protected.
    Open,
    /// Path is protected and the credential checked out.
    Granted,
    /// Path is protected and the credential was rejected.
    Denied(Denial),
}

#[derive(Debug, Clone)]
struct Rule {
    prefix: String,
    requirement: Requirement,
}

/// Ordered list of protected prefixes; the first matching rule wins.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: Vec<Rule>,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `requirement` for every path starting with `prefix`.
    pub fn protect(mut self, prefix: impl Into<String>, requirement: Requirement) -> Self {
        self.rules.push(Rule {
            prefix: prefix.into(),
            requirement,
        });
        self
    }

    /// Protected prefixes, in evaluation order.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.prefix.as_str())
    }

    /// Decide whether a request for `path` carrying `authorization` may proceed.
    pub fn evaluate(&self, path: &str, authorization: Option<&str>) -> Decision {
        let Some(rule) = self.rules.iter().find(|rule| path.starts_with(&rule.prefix)) else {
            return Decision::Open;
        };

        match &rule.requirement {
            Requirement::BearerToken(expected) => {
                let Some(token) = authorization.and_then(|h| h.strip_prefix(BEARER_PREFIX)) else {
                    return Decision::Denied(Denial::MissingCredentials);
                };
                if expected.matches(token) {
                    Decision::Granted
                } else {
                    Decision::Denied(Denial::InvalidToken)
                }
            }
        }
    }
}
