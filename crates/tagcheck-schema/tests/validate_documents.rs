//! Integration test: the reference user record, expressed as a schema file
//! and validated from JSON and YAML documents on disk.

use std::path::{Path, PathBuf};

use tagcheck_schema::{DocumentValidator, SchemaError, Status};

const USER_SCHEMA: &str = r#"
name: User
fields:
  - name: ID
    validate: "len:36"
  - name: Name
  - name: Age
    validate: "min:18|max:50"
  - name: Email
    validate: 'regexp:^[\w.]+@\w+\.\w+$'
  - name: Role
    validate: "in:admin,stuff"
  - name: Phones
    validate: "len:11"
    elements: string
  - name: meta
    validate: "len:1"
    public: false
"#;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn user_validator(dir: &Path) -> DocumentValidator {
    let schema = write(dir, "user.schema.yaml", USER_SCHEMA);
    DocumentValidator::load(&schema).expect("schema loads")
}

#[test]
fn valid_user_document_passes() {
    let dir = tempfile::tempdir().unwrap();
    let validator = user_validator(dir.path());
    let doc = write(
        dir.path(),
        "valid.json",
        r#"{
            "ID": "123456789012345678901234567890123456",
            "Name": "John Doe",
            "Age": 25,
            "Email": "john.doe@example.com",
            "Role": "admin",
            "Phones": ["12345678901", "09876543211"],
            "meta": {"anything": "goes"}
        }"#,
    );
    validator.validate_file(&doc).unwrap();
}

#[test]
fn invalid_user_document_reports_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let validator = user_validator(dir.path());
    let doc = write(
        dir.path(),
        "invalid.yaml",
        "ID: \"123\"\nAge: 17\nEmail: john.doe@example\nRole: guest\nPhones:\n  - \"123456789\"\n  - \"09876543211\"\n",
    );
    let err = validator.validate_file(&doc).unwrap_err();
    assert!(err.is_violation());
    assert_eq!(
        err.to_string(),
        "ID: length of value is 3 but expected 36; \
         Age: value 17 is less than minimum 18; \
         Email: value john.doe@example does not match pattern ^[\\w.]+@\\w+\\.\\w+$; \
         Role: value guest is not in the allowed list [admin,stuff]; \
         Phones: length of value is 9 but expected 11; "
    );
}

#[test]
fn top_level_array_is_not_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let validator = user_validator(dir.path());
    let doc = write(dir.path(), "list.json", r#"[{"ID": "x"}]"#);
    let err = validator.validate_file(&doc).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Validate(tagcheck_core::ValidateError::NotARecord { .. })
    ));
}

#[test]
fn malformed_pattern_in_schema_is_an_operational_error() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "bad.schema.json",
        r#"{"name": "Bad", "fields": [{"name": "Code", "validate": "regexp:(["}]}"#,
    );
    let validator = DocumentValidator::load(&schema).unwrap();
    let doc = write(dir.path(), "doc.json", r#"{"Code": "abc"}"#);

    let report = validator.validate_files(&[doc]);
    assert_eq!(report.documents[0].status, Status::Error);
    assert!(report.documents[0]
        .message
        .as_deref()
        .is_some_and(|m| m.contains("invalid regexp pattern")));
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn empty_text_array_passes_like_an_empty_vec() {
    let dir = tempfile::tempdir().unwrap();
    let validator = user_validator(dir.path());
    let doc = write(
        dir.path(),
        "no-phones.yaml",
        "ID: \"123456789012345678901234567890123456\"\nAge: 30\nRole: stuff\nPhones: []\n",
    );
    validator.validate_file(&doc).unwrap();
}

#[test]
fn undeclared_empty_array_is_measured_by_count() {
    let dir = tempfile::tempdir().unwrap();
    let schema = write(
        dir.path(),
        "tags.yaml",
        "name: Tagged\nfields:\n  - name: Tags\n    validate: \"len:2\"\n",
    );
    let validator = DocumentValidator::load(&schema).unwrap();
    let doc = write(dir.path(), "tags.json", r#"{"Tags": []}"#);
    let err = validator.validate_file(&doc).unwrap_err();
    assert_eq!(err.to_string(), "Tags: length of value is 0 but expected 2; ");
}
