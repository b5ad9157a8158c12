//! Favorite records and the per-request synced display shape.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Suffix appended to the displayed name when the breed no longer resolves
/// upstream. Display-only; never persisted.
pub const UNAVAILABLE_SUFFIX: &str = " (No Disponible)";

/// One user's interest in one catalog breed identifier.
///
/// ## Invariants
/// - `(user_id, cat_api_id)` is unique per user.
/// - Only `name` and `image_url` are mutated after creation, and only by the
///   reconciliation pass during a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Name shown when the catalog no longer recognises the breed.
    ///
    /// Derived from the clean stored name on every call, so repeated listing
    /// passes never accumulate suffixes. Falls back to the breed identifier
    /// when no name was ever resolved.
    pub fn unavailable_display_name(&self) -> String {
        let base = self.name.as_deref().unwrap_or(&self.cat_api_id);
        format!("{base}{UNAVAILABLE_SUFFIX}")
    }
}

/// Insert payload for the favorite repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
}

/// Outcome of one reconciliation attempt against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SyncStatus {
    /// Catalog confirmed current data; the stored record was refreshed.
    #[serde(rename = "actualizado")]
    Fresh,
    /// Catalog no longer recognises the breed; stored record left untouched.
    #[serde(rename = "raza no disponible")]
    UnavailableUpstream,
    /// Catalog unreachable or erroring; last-known values shown.
    #[serde(rename = "datos sin actualizar")]
    Unverified,
}

/// Display record emitted for each favorite by a listing pass.
///
/// Produced fresh on every call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SyncedFavorite {
    pub id: Uuid,
    pub cat_api_id: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub status: SyncStatus,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    fn favorite(name: Option<&str>) -> Favorite {
        Favorite {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            cat_api_id: "abys".to_owned(),
            name: name.map(str::to_owned),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unavailable_name_appends_suffix_to_stored_name() {
        assert_eq!(
            favorite(Some("Abyssinian")).unavailable_display_name(),
            "Abyssinian (No Disponible)"
        );
    }

    #[test]
    fn unavailable_name_falls_back_to_breed_id() {
        assert_eq!(
            favorite(None).unavailable_display_name(),
            "abys (No Disponible)"
        );
    }

    #[test]
    fn sync_status_serialises_to_client_facing_strings() {
        assert_eq!(
            serde_json::to_value(SyncStatus::Fresh).expect("serialises"),
            "actualizado"
        );
        assert_eq!(
            serde_json::to_value(SyncStatus::UnavailableUpstream).expect("serialises"),
            "raza no disponible"
        );
        assert_eq!(
            serde_json::to_value(SyncStatus::Unverified).expect("serialises"),
            "datos sin actualizar"
        );
    }
}
