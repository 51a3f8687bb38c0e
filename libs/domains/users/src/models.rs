use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Serde adapter for calendar dates in the fixed `YYYY-MM-DD` wire format.
///
/// The format is locale-invariant: encoding always emits exactly four year
/// digits, two month digits and two day digits. A string that does not parse
/// under the format fails deserialization, which the HTTP layer surfaces as
/// a 400 response.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }

    /// Same format, for optional date fields in partial payloads.
    pub mod option {
        use super::FORMAT;
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => serializer.serialize_some(&date.format(FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value = Option::<String>::deserialize(deserializer)?;
            value
                .map(|s| NaiveDate::parse_from_str(&s, FORMAT))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// User entity.
///
/// `user_id` is zero on creation payloads and assigned by the persistence
/// layer; every User returned by a read or create operation carries a
/// populated id. Instances are per-request values, never cached or shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned on create
    #[serde(default)]
    pub user_id: i32,
    /// Given name
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Calendar date of birth, wire format `YYYY-MM-DD`
    #[serde(with = "date_format")]
    pub date_of_birth: NaiveDate,
}

/// DTO for partially updating a user.
///
/// Supplied fields are merged into the existing record; absent fields are
/// left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "date_format::option::deserialize")]
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_user_serializes_camel_case_with_fixed_date_format() {
        let user = User {
            user_id: 7,
            first_name: "Grace".to_string(),
            date_of_birth: date(1906, 12, 9),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({
                "userId": 7,
                "firstName": "Grace",
                "dateOfBirth": "1906-12-09"
            })
        );
    }

    #[test]
    fn test_date_encoding_pads_month_and_day() {
        let user = User {
            user_id: 1,
            first_name: "Ada".to_string(),
            date_of_birth: date(2001, 1, 2),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"2001-01-02\""));
    }

    #[test]
    fn test_user_deserializes_without_id() {
        let user: User =
            serde_json::from_value(json!({"firstName": "Ada", "dateOfBirth": "1815-12-10"}))
                .unwrap();
        assert_eq!(user.user_id, 0);
        assert_eq!(user.date_of_birth, date(1815, 12, 10));
    }

    #[test]
    fn test_user_rejects_malformed_date() {
        let result = serde_json::from_value::<User>(json!({
            "firstName": "Ada",
            "dateOfBirth": "invalid-date"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_rejects_non_iso_date_order() {
        let result = serde_json::from_value::<User>(json!({
            "firstName": "Ada",
            "dateOfBirth": "10/12/1815"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_user_fields_default_to_none() {
        let update: UpdateUser = serde_json::from_value(json!({})).unwrap();
        assert_eq!(update, UpdateUser::default());
    }

    #[test]
    fn test_update_user_parses_present_date() {
        let update: UpdateUser =
            serde_json::from_value(json!({"dateOfBirth": "1990-06-15"})).unwrap();
        assert_eq!(update.date_of_birth, Some(date(1990, 6, 15)));
        assert_eq!(update.first_name, None);
    }

    #[test]
    fn test_update_user_rejects_malformed_date() {
        let result = serde_json::from_value::<UpdateUser>(json!({"dateOfBirth": "1990-6-15x"}));
        assert!(result.is_err());
    }
}
