//! Serialization and deserialization for hand types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hand_types::Hand;

impl Serialize for Hand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Hand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Hand>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid hand: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_string() {
        let json = serde_json::to_string(&[Hand::Rock, Hand::Scissor, Hand::Paper]).unwrap();
        assert_eq!(json, r#"["rock","scissor","paper"]"#);
    }

    #[test]
    fn rejects_unknown_hand() {
        let err = serde_json::from_str::<Hand>(r#""lizard""#).unwrap_err();
        assert!(err.to_string().contains("Invalid hand: lizard"));
    }
}
