use super::{parse_argument, Rule, RuleKind};
use crate::error::RuleError;
use crate::value::{Kind, Value};

/// `len:N` — exact length.
///
/// Text is measured in characters. A list whose element type is text is
/// checked element by element and reports the first element of the wrong
/// length; any other list is measured by element count.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthRule;

impl Rule for LengthRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Len
    }

    fn check(&self, value: &Value<'_>, argument: &str) -> Result<(), RuleError> {
        let expected: usize = parse_argument(RuleKind::Len, argument)?;

        match value {
            Value::Str(text) => expect_length(text.chars().count(), expected),
            Value::List {
                element: Some(Kind::String),
                items,
            } => items
                .iter()
                .filter_map(Value::as_str)
                .map(|text| expect_length(text.chars().count(), expected))
                .find(Result::is_err)
                .unwrap_or(Ok(())),
            Value::List { items, .. } => expect_length(items.len(), expected),
            other => Err(RuleError::UnsupportedKind { kind: other.kind() }),
        }
    }
}

fn expect_length(found: usize, expected: usize) -> Result<(), RuleError> {
    if found == expected {
        Ok(())
    } else {
        Err(RuleError::LengthMismatch { found, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Inspect;

    #[test]
    fn text_length_is_counted_in_characters() {
        assert!(LengthRule.check(&"héllo".to_value(), "5").is_ok());
        assert_eq!(
            LengthRule.check(&"123".to_value(), "36"),
            Err(RuleError::LengthMismatch {
                found: 3,
                expected: 36
            })
        );
    }

    #[test]
    fn text_lists_report_first_bad_element() {
        let phones = vec!["12345678901".to_string(), "123456789".into(), "1".into()];
        assert_eq!(
            LengthRule.check(&phones.to_value(), "11"),
            Err(RuleError::LengthMismatch {
                found: 9,
                expected: 11
            })
        );
    }

    #[test]
    fn empty_text_list_passes() {
        let phones: Vec<String> = Vec::new();
        assert!(LengthRule.check(&phones.to_value(), "11").is_ok());
    }

    #[test]
    fn other_lists_use_element_count() {
        let bytes: Vec<u8> = vec![1, 2, 3];
        assert!(LengthRule.check(&bytes.to_value(), "3").is_ok());
        assert_eq!(
            LengthRule.check(&Vec::<i32>::new().to_value(), "2"),
            Err(RuleError::LengthMismatch {
                found: 0,
                expected: 2
            })
        );
    }

    #[test]
    fn scalars_are_unsupported() {
        assert_eq!(
            LengthRule.check(&true.to_value(), "1"),
            Err(RuleError::UnsupportedKind { kind: Kind::Bool })
        );
        assert_eq!(
            LengthRule.check(&Value::Null, "1"),
            Err(RuleError::UnsupportedKind { kind: Kind::Null })
        );
    }

    #[test]
    fn argument_is_parsed_before_kind_is_checked() {
        let err = LengthRule.check(&true.to_value(), "eleven").unwrap_err();
        assert!(matches!(err, RuleError::InvalidArgument { .. }));
    }
}
