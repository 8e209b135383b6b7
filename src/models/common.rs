//! Common building blocks shared across management API models.
//!
//! This module defines the closed-set enumeration helper used for server
//! vocabulary (severity, state, job state) and the serde adapter for
//! timestamp elements.

/// Declares a closed-set enumeration mirrored from server vocabulary.
///
/// Each variant maps to exactly one wire token. Decoding any other token
/// fails with a [`DecodeError`](crate::error::DecodeError) naming the field
/// and the token.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the token the server uses for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DecodeError;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token.trim() {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::error::DecodeError::unknown_token($field, other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let token = <String as serde::Deserialize>::deserialize(deserializer)?;
                token.parse::<$name>().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;

/// Serde adapter for optional timestamp elements.
///
/// Writes the server's fixed pattern and reads any RFC 3339 timestamp.
pub(crate) mod optional_date {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::endpoint::{format_date, parse_date};

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_date(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value)
                .map(Some)
                .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", value, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{IncidentSeverity, IncidentState, JobState};

    #[test]
    fn test_tokens_round_trip_through_from_str() {
        assert_eq!("warning".parse::<IncidentSeverity>().unwrap(), IncidentSeverity::Warning);
        assert_eq!("InProgress".parse::<IncidentState>().unwrap(), IncidentState::InProgress);
        assert_eq!("Running".parse::<JobState>().unwrap(), JobState::Running);
        assert_eq!(IncidentState::Created.to_string(), "Created");
    }

    #[test]
    fn test_unknown_token_is_rejected_with_field_name() {
        let err = "Warning".parse::<IncidentSeverity>().unwrap_err();
        assert!(err.message().contains("severity"));
        assert!(err.message().contains("Warning"));
    }
}
