use serde::{Serialize, Deserialize};
use std::fmt;

/// The Boolean test a split applies to a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "==")]
    Equal,
}

impl Comparison {
    pub fn test(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterOrEqual => value >= threshold,
            Comparison::Greater => value > threshold,
            Comparison::Equal => value == threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::GreaterOrEqual => ">=",
            Comparison::Greater => ">",
            Comparison::Equal => "==",
        }
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::GreaterOrEqual
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert!(Comparison::GreaterOrEqual.test(60.0, 60.0));
        assert!(!Comparison::Greater.test(60.0, 60.0));
        assert!(Comparison::Equal.test(1.0, 1.0));
        assert!(!Comparison::Equal.test(0.0, 1.0));
    }

    #[test]
    fn nan_never_passes() {
        for cmp in [Comparison::GreaterOrEqual, Comparison::Greater, Comparison::Equal] {
            assert!(!cmp.test(f64::NAN, 0.0));
        }
    }

    #[test]
    fn uses_symbols_in_json() {
        assert_eq!(serde_json::to_string(&Comparison::Greater).unwrap(), "\">\"");
        let parsed: Comparison = serde_json::from_str("\"==\"").unwrap();
        assert_eq!(parsed, Comparison::Equal);
        assert!(serde_json::from_str::<Comparison>("\"<\"").is_err());
    }
}
