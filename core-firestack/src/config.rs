//! # Configuration Resolution
//!
//! Merges a caller-supplied configuration request over the platform-default
//! options into the record handed to SDK construction.
//!
//! ## Precedence
//!
//! Per target field:
//! 1. A value from the request, if any alias of the field is present
//!    (even an empty string).
//! 2. Otherwise the platform default, if present and non-empty.
//! 3. Otherwise the field stays unset.
//!
//! Alias keys are consulted in the order declared in [`ALIAS_TABLE`]; when a
//! request carries several aliases of the same field, the last declared alias
//! wins (`databaseUrl` over `databaseURL`, `clientId` over `applicationId`).
//! Request keys that match no alias are ignored. Value shape is never
//! validated here; malformed values surface as SDK construction failures.

use std::collections::HashMap;

use bridge_traits::options::SdkOptions;
use tracing::debug;

/// Caller-supplied configuration: raw key/value strings from the host.
pub type ConfigurationRequest = HashMap<String, String>;

/// Resolution targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ApplicationId,
    ApiKey,
    GcmSenderId,
    StorageBucket,
    DatabaseUrl,
}

/// Request alias keys per target field, in consultation order.
const ALIAS_TABLE: &[(Field, &[&str])] = &[
    (Field::ApplicationId, &["applicationId", "clientId"]),
    (Field::ApiKey, &["apiKey"]),
    (Field::GcmSenderId, &["gcmSenderID"]),
    (Field::StorageBucket, &["storageBucket"]),
    (Field::DatabaseUrl, &["databaseURL", "databaseUrl"]),
];

fn default_for(defaults: &SdkOptions, field: Field) -> Option<&String> {
    match field {
        Field::ApplicationId => defaults.application_id.as_ref(),
        Field::ApiKey => defaults.api_key.as_ref(),
        Field::GcmSenderId => defaults.gcm_sender_id.as_ref(),
        Field::StorageBucket => defaults.storage_bucket.as_ref(),
        Field::DatabaseUrl => defaults.database_url.as_ref(),
    }
}

fn set_field(options: &mut SdkOptions, field: Field, value: Option<String>) {
    match field {
        Field::ApplicationId => options.application_id = value,
        Field::ApiKey => options.api_key = value,
        Field::GcmSenderId => options.gcm_sender_id = value,
        Field::StorageBucket => options.storage_bucket = value,
        Field::DatabaseUrl => options.database_url = value,
    }
}

/// Resolve a configuration request over platform defaults.
///
/// Pure function; the only side effect is a debug log per resolved value.
pub fn resolve(request: &ConfigurationRequest, defaults: &SdkOptions) -> SdkOptions {
    let mut resolved = SdkOptions::default();

    for (field, aliases) in ALIAS_TABLE {
        let from_request = aliases
            .iter()
            .rev()
            .find_map(|key| request.get(*key).map(|value| (*key, value)));

        let value = match from_request {
            Some((key, value)) => {
                debug!(key, value = %value, "Setting option from request");
                Some(value.clone())
            }
            None => {
                let fallback = default_for(defaults, *field)
                    .filter(|value| !value.is_empty())
                    .cloned();
                if let Some(value) = &fallback {
                    debug!(field = ?field, value = %value, "Setting option from platform defaults");
                }
                fallback
            }
        };

        set_field(&mut resolved, *field, value);
    }

    resolved
}
