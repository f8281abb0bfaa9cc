use person_name::{NameError, PersonName};

/// 示範流程：讀取、改 given name、整個改寫、刪除
#[test]
fn test_reference_trace() {
    let mut user = PersonName::new("python", "comentado");
    assert_eq!(user.full_name().unwrap(), "python.comentado");

    user.set_given_name("javascript");
    assert_eq!(user.full_name().unwrap(), "javascript.comentado");

    user.set_full_name("java.comentado").unwrap();
    assert_eq!(user.given_name(), Some("java"));
    assert_eq!(user.family_name(), Some("comentado"));
    assert_eq!(user.full_name().unwrap(), "java.comentado");

    user.clear_full_name();
    assert_eq!(user.given_name(), None);
    assert_eq!(user.family_name(), None);
}

#[test]
fn test_primitives_reassigned_independently() {
    let mut user = PersonName::new("python", "comentado");
    user.set_family_name("documentado");
    assert_eq!(user.given_name(), Some("python"));
    assert_eq!(user.full_name().unwrap(), "python.documentado");
}

#[test]
fn test_direct_setter_does_not_validate_separator() {
    let mut user = PersonName::new("python", "comentado");
    user.set_given_name("a.b");
    assert_eq!(user.full_name().unwrap(), "a.b.comentado");
}

#[test]
fn test_empty_string_is_not_absent() {
    let user = PersonName::new("", "");
    assert!(user.has_full_name());
    assert_eq!(user.full_name().unwrap(), ".");
}

#[test]
fn test_reading_cleared_full_name_is_an_error() {
    let mut user = PersonName::new("python", "comentado");
    user.clear_full_name();

    let err = user.full_name().unwrap_err();
    assert!(matches!(err, NameError::AbsentValueError { .. }));
    assert!(err.to_string().contains("given_name"));
}
