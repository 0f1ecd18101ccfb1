use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity record as the authentication controller sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdapterUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub email_verified: Option<DateTime<Utc>>,
    pub image: Option<String>,
}

/// User fields supplied on creation; the id is always generated by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSession {
    pub session_token: String,
    pub user_id: String,
    pub expires: DateTime<Utc>,
}

impl AdapterSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionAndUser {
    pub session: AdapterSession,
    pub user: AdapterUser,
}

/// One identity-provider linkage. OAuth token fields keep the provider's
/// snake_case names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterAccount {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub provider: String,
    #[serde(rename = "providerAccountId")]
    pub provider_account_id: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i32>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub session_state: Option<String>,
}

/// Natural key of an account row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountKey {
    pub provider: String,
    pub provider_account_id: String,
}

impl AccountKey {
    pub fn new(provider: impl Into<String>, provider_account_id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            provider_account_id: provider_account_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub identifier: String,
    pub token: String,
    pub expires: DateTime<Utc>,
}

/// Natural key of a verification token row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationTokenKey {
    pub identifier: String,
    pub token: String,
}

impl VerificationTokenKey {
    pub fn new(identifier: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            token: token.into(),
        }
    }
}

/// Three-state field for partial updates of nullable columns.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    /// `None` when the column is left alone, `Some(None)` when it is cleared.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

/// Partial user update. `id` is optional only because the controller may
/// omit it; the adapter rejects such calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub id: Option<String>,
    pub name: PatchField<String>,
    pub email: Option<String>,
    pub email_verified: PatchField<DateTime<Utc>>,
    pub image: PatchField<String>,
}

impl UserPatch {
    pub fn for_user(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
}

/// Partial session update keyed by token (token rotation, expiry extension).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPatch {
    pub session_token: String,
    pub user_id: Option<String>,
    pub expires: Option<DateTime<Utc>>,
}

impl SessionPatch {
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            user_id: None,
            expires: None,
        }
    }
}
