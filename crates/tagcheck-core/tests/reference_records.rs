//! Integration test: the reference record table.
//!
//! Each case validates one record and compares the rendered aggregate
//! against the exact expected text, so both the set of violations and the
//! `"field: message; "` format are pinned.

use std::borrow::Cow;

use tagcheck_core::{record, validate, Inspect, Kind, ValidateError, Validate, Value};

/// A text newtype registered by hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRole(String);

impl Inspect for UserRole {
    fn to_value(&self) -> Value<'_> {
        Value::Str(Cow::Borrowed(&self.0))
    }

    fn declared_kind() -> Option<Kind> {
        Some(Kind::String)
    }
}

record! {
    #[derive(Debug, Clone, Default)]
    pub struct User {
        pub id: String = "len:36",
        pub name: String,
        pub age: i64 = "min:18|max:50",
        pub email: String = r"regexp:^[\w.]+@\w+\.\w+$",
        pub role: UserRole = "in:admin,stuff",
        pub phones: Vec<String> = "len:11",
        meta: Vec<u8>,
    }
}

record! {
    #[derive(Debug, Clone)]
    pub struct App {
        pub version: String = "len:5",
    }
}

record! {
    #[derive(Debug, Clone)]
    pub struct Token {
        pub header: Vec<u8>,
        pub payload: Vec<u8>,
        pub signature: Vec<u8>,
    }
}

record! {
    #[derive(Debug, Clone)]
    pub struct Response {
        pub code: i64 = "in:200,404,500",
        pub body: String,
    }
}

fn valid_user() -> User {
    User {
        id: "123456789012345678901234567890123456".into(),
        name: "John Doe".into(),
        age: 25,
        email: "john.doe@example.com".into(),
        role: UserRole("admin".into()),
        phones: vec!["12345678901".into(), "09876543211".into()],
        meta: vec![1, 2, 3],
    }
}

fn expect_violations<T: Inspect>(record: &T, expected: &str) {
    match validate(record) {
        Err(ValidateError::Invalid(violations)) => assert_eq!(violations.to_string(), expected),
        other => panic!("expected violations {expected:?}, got {other:?}"),
    }
}

#[test]
fn valid_user_passes() {
    assert!(validate(&valid_user()).is_ok());
}

#[test]
fn invalid_user_reports_every_field() {
    let user = User {
        id: "123".into(),
        age: 17,
        email: "john.doe@example".into(),
        role: UserRole("guest".into()),
        phones: vec!["123456789".into(), "09876543211".into()],
        ..User::default()
    };
    expect_violations(
        &user,
        "id: length of value is 3 but expected 36; \
         age: value 17 is less than minimum 18; \
         email: value john.doe@example does not match pattern ^[\\w.]+@\\w+\\.\\w+$; \
         role: value guest is not in the allowed list [admin,stuff]; \
         phones: length of value is 9 but expected 11; ",
    );
}

#[test]
fn age_above_maximum_fails() {
    let user = User {
        age: 51,
        ..valid_user()
    };
    expect_violations(&user, "age: value 51 is greater than maximum 50; ");
}

#[test]
fn empty_email_is_vacuously_valid() {
    let user = User {
        email: String::new(),
        ..valid_user()
    };
    assert!(user.validate().is_ok());
}

#[test]
fn private_fields_are_never_validated() {
    record! {
        pub struct Secret {
            pub(crate) pin: String = "len:4",
            key: String = "len:32",
        }
    }
    let secret = Secret {
        pin: "1".into(),
        key: "short".into(),
    };
    assert!(validate(&secret).is_ok());
    assert_eq!((secret.pin.len(), secret.key.len()), (1, 5));
}

#[test]
fn app_version_length() {
    assert!(validate(&App {
        version: "1.0.0".into()
    })
    .is_ok());
    expect_violations(
        &App {
            version: "123".into(),
        },
        "version: length of value is 3 but expected 5; ",
    );
}

#[test]
fn response_code_allow_list() {
    assert!(validate(&Response {
        code: 200,
        body: "Success".into()
    })
    .is_ok());
    expect_violations(
        &Response {
            code: 201,
            body: "Success".into(),
        },
        "code: value 201 is not in the allowed list [200,404,500]; ",
    );
}

#[test]
fn unannotated_token_passes() {
    let token = Token {
        header: vec![1, 2, 3],
        payload: vec![4, 5, 6],
        signature: vec![7, 8, 9],
    };
    assert!(validate(&token).is_ok());
}

#[test]
fn non_record_input_is_structural() {
    let err = validate(&17i64).unwrap_err();
    assert!(err.is_structural());
    assert!(err.violations().is_none());
    assert_eq!(err.to_string(), "input is not a structured record: found int");

    let doc = serde_json::json!({"id": "123"});
    assert!(matches!(
        validate(&doc),
        Err(ValidateError::NotARecord { kind: Kind::Map })
    ));
}

#[test]
fn unknown_rules_are_ignored() {
    record! {
        pub struct Tagged {
            pub a: String = "required",
            pub b: String = "omitempty|len:2",
        }
    }
    let tagged = Tagged {
        a: String::new(),
        b: "abc".into(),
    };
    expect_violations(&tagged, "b: length of value is 3 but expected 2; ");
}

#[test]
fn malformed_bound_is_recorded_and_walk_continues() {
    record! {
        pub struct Limits {
            pub low: i64 = "min:abc|max:10",
            pub high: i64 = "max:5",
        }
    }
    let err = validate(&Limits { low: 20, high: 6 }).unwrap_err();
    let violations = err.violations().expect("aggregate");
    assert_eq!(violations.len(), 3);
    let rendered: Vec<String> = violations.iter().map(ToString::to_string).collect();
    assert!(rendered[0].starts_with("low: invalid argument \"abc\" for rule min"));
    assert_eq!(rendered[1], "low: value 20 is greater than maximum 10");
    assert_eq!(rendered[2], "high: value 6 is greater than maximum 5");
}

#[test]
fn malformed_pattern_aborts_the_call() {
    record! {
        pub struct Code {
            pub first: i64 = "min:100",
            pub code: String = "regexp:([a-z]",
        }
    }
    let err = validate(&Code {
        first: 1,
        code: String::new(),
    })
    .unwrap_err();
    match err {
        ValidateError::InvalidPattern { field, pattern, .. } => {
            assert_eq!(field, "code");
            assert_eq!(pattern, "([a-z]");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn type_mismatches_report_found_kind() {
    record! {
        pub struct Mixed {
            pub ratio: f64 = "min:1",
            pub flag: bool = "len:1",
            pub nick: Option<String> = "len:3",
        }
    }
    expect_violations(
        &Mixed {
            ratio: 0.5,
            flag: true,
            nick: None,
        },
        "ratio: min validation expects an int but got float; \
         flag: unsupported kind: bool; \
         nick: unsupported kind: null; ",
    );
    assert!(validate(&Mixed {
        ratio: 1.0,
        flag: true,
        nick: Some("abc".into()),
    })
    .is_err());
}

#[test]
fn argument_may_contain_colons() {
    record! {
        pub struct Clock {
            pub at: String = "in:12:00,18:30",
        }
    }
    assert!(validate(&Clock { at: "18:30".into() }).is_ok());
    expect_violations(
        &Clock { at: "9:15".into() },
        "at: value 9:15 is not in the allowed list [12:00,18:30]; ",
    );
}

#[test]
fn nested_records_are_opaque_to_len() {
    record! {
        pub struct Envelope {
            pub app: App = "len:1",
            pub apps: Vec<App> = "len:2",
        }
    }
    let envelope = Envelope {
        app: App {
            version: "bad".into(),
        },
        apps: vec![
            App {
                version: "1.0.0".into(),
            },
            App {
                version: "2.0.0".into(),
            },
        ],
    };
    expect_violations(&envelope, "app: unsupported kind: record; ");
}

record! {
    #[derive(Debug, Clone)]
    pub struct Ratio {
        pub r: f32 = "in:0.1,0.5",
    }
}

#[test]
fn single_precision_floats_match_their_written_form() {
    assert!(validate(&Ratio { r: 0.1 }).is_ok());
    assert!(validate(&Ratio { r: 0.5 }).is_ok());
    expect_violations(
        &Ratio { r: 0.25 },
        "r: value 0.25 is not in the allowed list [0.1,0.5]; ",
    );
}
