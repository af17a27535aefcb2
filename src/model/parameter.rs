use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::item::InputItem;

use serde_json::Value;

pub const GENERATE_RANDOM_NUMBER: &str = "generateRandomNumber";
pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Operation {
    #[default]
    GenerateRandomNumber,
    /// Accepted by the host but not handled here; such items produce no output.
    Unsupported(String),
}

impl From<&str> for Operation {
    fn from(name: &str) -> Self {
        match name {
            GENERATE_RANDOM_NUMBER => Operation::GenerateRandomNumber,
            other => Operation::Unsupported(other.to_owned()),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::GenerateRandomNumber => f.write_str(GENERATE_RANDOM_NUMBER),
            Operation::Unsupported(name) => f.write_str(name),
        }
    }
}

/// Parameters of one item, resolved fresh for every index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub operation: Operation,
    pub min: i64,
    pub max: i64,
}

impl Parameters {
    pub fn generate_random_number(min: i64, max: i64) -> Parameters {
        Parameters {
            operation: Operation::GenerateRandomNumber,
            min,
            max,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters::generate_random_number(DEFAULT_MIN, DEFAULT_MAX)
    }
}

pub fn validate_range(item_index: usize, min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(Error::InvalidRange {
            item_index,
            min,
            max,
        });
    }
    Ok(())
}

/// A parameter as configured on the node: either a constant or a reference
/// into the JSON body of the item being processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Literal(Value),
    JsonField(Vec<String>),
}

impl ParameterValue {
    pub fn evaluate<'a>(&'a self, item: &'a InputItem) -> Option<&'a Value> {
        match self {
            ParameterValue::Literal(value) => Some(value),
            ParameterValue::JsonField(path) => path
                .iter()
                .try_fold(&item.json, |value, key| value.get(key.as_str())),
        }
    }

    pub fn resolve_str(
        &self,
        name: &'static str,
        item_index: usize,
        item: &InputItem,
    ) -> Result<String> {
        match self.evaluate(item) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(Error::Parameter {
                name,
                item_index,
                reason: format!("expected a string, got {}", other),
            }),
            None => Err(missing(name, item_index, self)),
        }
    }

    pub fn resolve_i64(
        &self,
        name: &'static str,
        item_index: usize,
        item: &InputItem,
    ) -> Result<i64> {
        let value = self
            .evaluate(item)
            .ok_or_else(|| missing(name, item_index, self))?;
        as_integer(value).ok_or_else(|| Error::Parameter {
            name,
            item_index,
            reason: format!("expected an integer, got {}", value),
        })
    }
}

fn missing(name: &'static str, item_index: usize, value: &ParameterValue) -> Error {
    Error::Parameter {
        name,
        item_index,
        reason: format!("{} is not set on the item", value),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<i64> for ParameterValue {
    fn from(n: i64) -> Self {
        ParameterValue::Literal(n.into())
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::Literal(Value::String(s.to_owned()))
    }
}

impl Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterValue::Literal(Value::String(s)) => f.write_str(s),
            ParameterValue::Literal(value) => write!(f, "{}", value),
            ParameterValue::JsonField(path) => write!(f, "{{{{ $json.{} }}}}", path.join(".")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParseParameterError {
    got: Option<String>,
    expected: peg::error::ExpectedSet,
}

impl Display for ParseParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is expected", self.expected)?;
        if let Some(got) = &self.got {
            write!(f, ", but got {}", got)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseParameterError {}

impl FromStr for ParameterValue {
    type Err = ParseParameterError;

    fn from_str(input: &str) -> std::result::Result<ParameterValue, Self::Err> {
        parser::parameter(input).map_err(|e| ParseParameterError {
            got: input.get(e.location.offset..).map(ToOwned::to_owned),
            expected: e.expected,
        })
    }
}

/// The node's configured parameters, evaluated per item.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeParameters {
    pub operation: ParameterValue,
    pub min: ParameterValue,
    pub max: ParameterValue,
}

impl NodeParameters {
    pub fn resolve_operation(&self, item_index: usize, item: &InputItem) -> Result<Operation> {
        let name = self.operation.resolve_str("operation", item_index, item)?;
        Ok(Operation::from(name.as_str()))
    }

    /// Evaluates `min` and `max`; only meaningful for `generateRandomNumber`.
    pub fn resolve_range(&self, item_index: usize, item: &InputItem) -> Result<(i64, i64)> {
        let min = self.min.resolve_i64("min", item_index, item)?;
        let max = self.max.resolve_i64("max", item_index, item)?;
        Ok((min, max))
    }
}

impl Default for NodeParameters {
    fn default() -> Self {
        NodeParameters {
            operation: GENERATE_RANDOM_NUMBER.into(),
            min: DEFAULT_MIN.into(),
            max: DEFAULT_MAX.into(),
        }
    }
}

peg::parser! {
  grammar parser() for str {
    rule _() = [' ' | '\t']*

    rule key() -> String
      = s:$(['a'..='z' | 'A'..='Z' | '_'] ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']*) { s.to_owned() }

    rule path() -> Vec<String>
      = "$json" l:("." k:key() { k })+ { l }

    rule expression() -> ParameterValue
      = "="? "{{" _ p:path() _ "}}" { ParameterValue::JsonField(p) }

    rule integer() -> ParameterValue
      = n:$("-"? ['0'..='9']+) {?
          n.parse::<i64>()
              .map(ParameterValue::from)
              .map_err(|_| "64-bit integer")
      }

    rule text() -> ParameterValue
      = !("="? "{{") s:$([_]*) { ParameterValue::from(s) }

    pub rule parameter() -> ParameterValue
      = v:expression() ![_] { v }
      / v:integer() ![_] { v }
      / text()
  }
}

#[cfg(test)]
mod tests {
    use super::{validate_range, NodeParameters, Operation, ParameterValue};
    use crate::{error::Error, model::item::InputItem};

    use serde_json::json;

    #[test]
    fn test_parse_literals() {
        assert_eq!("10".parse::<ParameterValue>().unwrap(), ParameterValue::from(10));
        assert_eq!("-3".parse::<ParameterValue>().unwrap(), ParameterValue::from(-3));
        assert_eq!(
            "generateRandomNumber".parse::<ParameterValue>().unwrap(),
            ParameterValue::from("generateRandomNumber")
        );
        assert_eq!("12abc".parse::<ParameterValue>().unwrap(), ParameterValue::from("12abc"));
    }

    #[test]
    fn test_parse_expression() {
        let expected = ParameterValue::JsonField(vec!["range".to_owned(), "low".to_owned()]);
        assert_eq!("{{ $json.range.low }}".parse::<ParameterValue>().unwrap(), expected);
        assert_eq!("={{$json.range.low}}".parse::<ParameterValue>().unwrap(), expected);
    }

    #[test]
    fn test_parse_malformed_expression() {
        assert!("{{ $json. }}".parse::<ParameterValue>().is_err());
        assert!("={{ min }}".parse::<ParameterValue>().is_err());
    }

    #[test]
    fn test_display_round_trips_expression() {
        let value: ParameterValue = "={{$json.a.b}}".parse().unwrap();
        assert_eq!(value.to_string(), "{{ $json.a.b }}");
        assert_eq!(value.to_string().parse::<ParameterValue>().unwrap(), value);
    }

    #[test]
    fn test_resolve_per_item() {
        let params = NodeParameters {
            min: "{{ $json.min }}".parse().unwrap(),
            max: "{{ $json.max }}".parse().unwrap(),
            ..NodeParameters::default()
        };
        let first = InputItem::new(json!({ "min": 1, "max": 6 }));
        let second = InputItem::new(json!({ "min": "10", "max": 20.0 }));

        assert_eq!(params.resolve_range(0, &first).unwrap(), (1, 6));
        assert_eq!(params.resolve_range(1, &second).unwrap(), (10, 20));
    }

    #[test]
    fn test_resolve_defaults() {
        let params = NodeParameters::default();
        let item = InputItem::empty();
        assert_eq!(
            params.resolve_operation(0, &item).unwrap(),
            Operation::GenerateRandomNumber
        );
        assert_eq!(params.resolve_range(0, &item).unwrap(), (1, 100));
    }

    #[test]
    fn test_resolve_unsupported_operation() {
        let params = NodeParameters {
            operation: "shuffle".into(),
            min: "{{ $json.min }}".parse().unwrap(),
            ..NodeParameters::default()
        };
        assert_eq!(
            params.resolve_operation(0, &InputItem::empty()).unwrap(),
            Operation::Unsupported("shuffle".to_owned())
        );
    }

    #[test]
    fn test_resolve_missing_field() {
        let params = NodeParameters {
            max: "{{ $json.upper }}".parse().unwrap(),
            ..NodeParameters::default()
        };
        assert!(matches!(
            params.resolve_range(3, &InputItem::empty()),
            Err(Error::Parameter { name: "max", item_index: 3, .. })
        ));
    }

    #[test]
    fn test_resolve_non_integer() {
        let params = NodeParameters {
            min: "{{ $json.min }}".parse().unwrap(),
            ..NodeParameters::default()
        };
        let item = InputItem::new(json!({ "min": 1.5 }));
        assert!(matches!(
            params.resolve_range(0, &item),
            Err(Error::Parameter { name: "min", .. })
        ));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(0, 1, 10).is_ok());
        assert!(validate_range(0, 7, 7).is_ok());
        assert!(validate_range(0, -5, -1).is_ok());

        let err = validate_range(2, 10, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Minimum number cannot be greater than maximum number"
        );
        assert_eq!(err.item_index(), Some(2));
    }
}
