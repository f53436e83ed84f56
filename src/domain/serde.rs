//! `Serialize` / `Deserialize` through the transport string forms.
//!
//! | Type | Form | Example |
//! |------|------|---------|
//! | [`BigInteger`] | canonical digits | `"-42"` |
//! | [`BigDecimal`] | `unscaled:scale` | `"-150:2"` |
//! | [`BigRational`] | `numerator/denominator` | `"22/7"` |
//! | [`Number`] | the form of its variant | any of the above |
//!
//! Deserialization validates with the same rules as the
//! `from_transport_str` constructors.

use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, Visitor};
use ::serde::ser::{Serialize, Serializer};

use super::{BigDecimal, BigInteger, BigRational, Number};
use crate::error::Result;

/// A type with a single-string wire form.
trait Transport: Sized {
    const EXPECTING: &'static str;

    fn to_transport(&self) -> String;

    fn from_transport(text: &str) -> Result<Self>;
}

struct TransportVisitor<T>(PhantomData<T>);

impl<T: Transport> Visitor<'_> for TransportVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::EXPECTING)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> core::result::Result<T, E> {
        T::from_transport(v).map_err(E::custom)
    }
}

macro_rules! transport {
    ($($t:ty => $expecting:literal),* $(,)?) => {
        $(
            impl Transport for $t {
                const EXPECTING: &'static str = $expecting;

                fn to_transport(&self) -> String {
                    self.to_transport_string()
                }

                fn from_transport(text: &str) -> Result<Self> {
                    <$t>::from_transport_str(text)
                }
            }

            impl Serialize for $t {
                fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                    serializer.serialize_str(&self.to_transport())
                }
            }

            impl<'de> Deserialize<'de> for $t {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                    deserializer.deserialize_str(TransportVisitor::<$t>(PhantomData))
                }
            }
        )*
    };
}

transport! {
    BigInteger => "a canonical integer string",
    BigDecimal => "a decimal string of the form unscaled:scale",
    BigRational => "a rational string of the form numerator/denominator",
    Number => "an integer, unscaled:scale or numerator/denominator string",
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    use super::*;

    fn num(text: &str) -> Number {
        let Ok(n) = Number::of(text) else {
            panic!("valid number {text}");
        };
        n
    }

    // -- Token streams ------------------------------------------------------

    #[test]
    fn integer_tokens() {
        assert_tokens(&BigInteger::from(-42), &[Token::Str("-42")]);
        assert_tokens(&BigInteger::zero(), &[Token::Str("0")]);
    }

    #[test]
    fn decimal_tokens() {
        let Ok(d) = BigDecimal::of("-1.50") else {
            panic!("valid decimal");
        };
        assert_tokens(&d, &[Token::Str("-150:2")]);
    }

    #[test]
    fn rational_tokens() {
        let Ok(r) = BigRational::nd(4, 1) else {
            panic!("valid rational");
        };
        assert_tokens(&r, &[Token::Str("4/1")]);
    }

    #[test]
    fn number_tokens_keep_the_kind() {
        assert_tokens(&num("7"), &[Token::Str("7")]);
        assert_tokens(&num("0.7"), &[Token::Str("7:1")]);
        assert_tokens(&num("7/10"), &[Token::Str("7/10")]);
    }

    // -- Rejections ---------------------------------------------------------

    #[test]
    fn malformed_payloads() {
        assert_de_tokens_error::<BigInteger>(
            &[Token::Str("007")],
            "invalid number format: \"007\" is not a canonical integer",
        );
        assert_de_tokens_error::<BigDecimal>(
            &[Token::Str("7:-1")],
            "invalid argument: the scale cannot be negative",
        );
        assert_de_tokens_error::<BigRational>(
            &[Token::Str("7/0")],
            "division by zero: denominator",
        );
        assert_de_tokens_error::<Number>(
            &[Token::I64(7)],
            "invalid type: integer `7`, expected an integer, unscaled:scale or numerator/denominator string",
        );
    }

    // -- JSON ---------------------------------------------------------------

    #[test]
    fn json_round_trip() {
        let values = vec![num("-12"), num("3.140"), num("-22/7")];
        let Ok(json) = serde_json::to_string(&values) else {
            panic!("serializable");
        };
        assert_eq!(json, r#"["-12","3140:3","-22/7"]"#);
        let Ok(back) = serde_json::from_str::<Vec<Number>>(&json) else {
            panic!("deserializable");
        };
        assert_eq!(back, values);
    }

    #[test]
    fn json_rejects_non_strings() {
        assert!(serde_json::from_str::<BigInteger>("12").is_err());
        assert!(serde_json::from_str::<BigDecimal>(r#""1.5""#).is_err());
    }
}
