use num_bigint::BigUint;

/// Parses a decimal or `0x`/`0X`-prefixed hexadecimal integer of any size.
pub fn parse_biguint(s: &str) -> Option<BigUint> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(s.as_bytes(), 10),
    }
}

/// (De)serializes an optional arbitrary-precision integer.
///
/// Accepts a plain number up to `u64::MAX`, or a decimal/hex string of any
/// size, and always writes a decimal string. Larger values must be given as
/// strings, since TOML and JSON numbers cannot carry the full range.
pub mod opt_biguint {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<BigUint>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(&v.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Raw> = Option::deserialize(deserializer)?;
        raw.map(|raw| match raw {
            Raw::Number(n) => Ok(BigUint::from(n)),
            Raw::Text(s) => super::parse_biguint(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid integer: {s:?}"))),
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use serde::{Deserialize, Serialize};

    use super::parse_biguint;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(default, with = "super::opt_biguint")]
        id: Option<BigUint>,
    }

    #[test]
    fn test_parse_biguint() {
        assert_eq!(parse_biguint("1"), Some(BigUint::from(1u32)));
        assert_eq!(parse_biguint("0x10"), Some(BigUint::from(16u32)));
        assert_eq!(parse_biguint("0X1f"), Some(BigUint::from(31u32)));
        assert_eq!(parse_biguint("not a number"), None);
        let huge = parse_biguint("340282366920938463463374607431768211456").unwrap();
        assert_eq!(huge, BigUint::from(u128::MAX) + 1u32);
    }

    #[test]
    fn test_number_or_string() {
        let a: Holder = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id": "5"}"#).unwrap();
        let c: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(a.id, Some(BigUint::from(5u32)));
        assert_eq!(a, b);
        assert_eq!(c.id, None);
        assert!(serde_json::from_str::<Holder>(r#"{"id": "five"}"#).is_err());
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"id":"5"}"#);
    }

    #[test]
    fn test_ids_beyond_u64_need_strings() {
        let max: Holder = serde_json::from_str(r#"{"id": 18446744073709551615}"#).unwrap();
        assert_eq!(max.id, Some(BigUint::from(u64::MAX)));
        assert!(serde_json::from_str::<Holder>(r#"{"id": 18446744073709551616}"#).is_err());

        let text: Holder = serde_json::from_str(r#"{"id": "18446744073709551616"}"#).unwrap();
        assert_eq!(text.id, Some(BigUint::from(u64::MAX) + 1u32));
        let hex: Holder = serde_json::from_str(r#"{"id": "0X10000000000000000"}"#).unwrap();
        assert_eq!(hex, text);
    }
}
