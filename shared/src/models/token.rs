//! API token model

use serde::{Deserialize, Serialize};

/// API token as listed by the backend; the secret itself is never included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiToken {
    pub id: String,
    pub label: String,
    pub created_at: Option<String>,
    #[serde(default)]
    pub revoked: bool,
}

/// Token creation response; `token` is the one-time plaintext value, shown
/// once and never retrievable again
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedToken {
    pub id: String,
    pub label: String,
    pub token: String,
    pub created_at: Option<String>,
}

/// Split a token list into (active, revoked) — disjoint by construction
pub fn partition_tokens(tokens: Vec<ApiToken>) -> (Vec<ApiToken>, Vec<ApiToken>) {
    tokens.into_iter().partition(|t| !t.revoked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(id: &str, revoked: bool) -> ApiToken {
        ApiToken {
            id: id.to_string(),
            label: format!("token {}", id),
            created_at: None,
            revoked,
        }
    }

    #[test]
    fn partition_is_disjoint_and_complete() {
        let tokens = vec![token("a", false), token("b", true), token("c", false)];
        let (active, revoked) = partition_tokens(tokens);

        assert_eq!(active.len(), 2);
        assert_eq!(revoked.len(), 1);
        assert!(active.iter().all(|t| !t.revoked));
        assert!(revoked.iter().all(|t| t.revoked));
        assert!(active.iter().all(|a| revoked.iter().all(|r| r.id != a.id)));
    }
}
