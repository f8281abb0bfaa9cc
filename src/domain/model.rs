use crate::utils::error::{NameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEPARATOR: char = '.';

/// 人名：兩個原始欄位加上一個衍生的 full name。
///
/// `full_name` 沒有儲存欄位，每次讀取都由 `given_name` 與 `family_name` 重新組合。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    given_name: Option<String>,
    family_name: Option<String>,
}

impl PersonName {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: Some(given_name.into()),
            family_name: Some(family_name.into()),
        }
    }

    pub fn given_name(&self) -> Option<&str> {
        self.given_name.as_deref()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    pub fn set_given_name(&mut self, value: impl Into<String>) {
        self.given_name = Some(value.into());
    }

    pub fn set_family_name(&mut self, value: impl Into<String>) {
        self.family_name = Some(value.into());
    }

    pub fn has_full_name(&self) -> bool {
        self.given_name.is_some() && self.family_name.is_some()
    }

    /// 讀取 full name；任一欄位缺值時回傳 `AbsentValueError`（先檢查 given name）。
    pub fn full_name(&self) -> Result<String> {
        let given = self
            .given_name
            .as_deref()
            .ok_or_else(|| NameError::AbsentValueError {
                field: "given_name".to_string(),
            })?;
        let family = self
            .family_name
            .as_deref()
            .ok_or_else(|| NameError::AbsentValueError {
                field: "family_name".to_string(),
            })?;

        Ok(format!("{}{}{}", given, SEPARATOR, family))
    }

    /// 以 `<given>.<family>` 設定 full name。分隔符號數量不是一個時不會修改任何欄位。
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        let (given, family) = split_full_name(value)?;
        self.given_name = Some(given.to_string());
        self.family_name = Some(family.to_string());
        Ok(())
    }

    pub fn clear_full_name(&mut self) {
        self.given_name = None;
        self.family_name = None;
    }
}

fn split_full_name(value: &str) -> Result<(&str, &str)> {
    let separators = value.matches(SEPARATOR).count();
    if separators != 1 {
        return Err(NameError::FormatError {
            value: value.to_string(),
            separators,
        });
    }

    value
        .split_once(SEPARATOR)
        .ok_or_else(|| NameError::FormatError {
            value: value.to_string(),
            separators,
        })
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.full_name() {
            Ok(full_name) => write!(f, "{}", full_name),
            Err(_) => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_with_dot() {
        let person = PersonName::new("python", "comentado");
        assert_eq!(person.full_name().unwrap(), "python.comentado");
    }

    #[test]
    fn test_new_stores_values_verbatim() {
        let person = PersonName::new("  Ada ", "LOVELACE");
        assert_eq!(person.given_name(), Some("  Ada "));
        assert_eq!(person.family_name(), Some("LOVELACE"));
    }

    #[test]
    fn test_set_full_name_splits_into_parts() {
        let mut person = PersonName::new("python", "comentado");
        person.set_full_name("java.comentado").unwrap();
        assert_eq!(person.given_name(), Some("java"));
        assert_eq!(person.family_name(), Some("comentado"));
    }

    #[test]
    fn test_set_full_name_allows_empty_parts() {
        let mut person = PersonName::new("a", "b");
        person.set_full_name(".x").unwrap();
        assert_eq!(person.given_name(), Some(""));
        assert_eq!(person.family_name(), Some("x"));
        assert_eq!(person.full_name().unwrap(), ".x");
    }

    #[test]
    fn test_set_full_name_without_separator_fails() {
        let mut person = PersonName::new("python", "comentado");
        let err = person.set_full_name("java").unwrap_err();
        assert!(matches!(
            err,
            NameError::FormatError { separators: 0, .. }
        ));
        assert_eq!(person.full_name().unwrap(), "python.comentado");
    }

    #[test]
    fn test_set_full_name_with_two_separators_fails() {
        let mut person = PersonName::new("python", "comentado");
        let err = person.set_full_name("a.b.c").unwrap_err();
        assert!(matches!(
            err,
            NameError::FormatError { separators: 2, .. }
        ));
        assert_eq!(person.given_name(), Some("python"));
    }

    #[test]
    fn test_clear_full_name_is_idempotent() {
        let mut person = PersonName::new("python", "comentado");
        person.clear_full_name();
        person.clear_full_name();
        assert_eq!(person.given_name(), None);
        assert_eq!(person.family_name(), None);
        assert!(!person.has_full_name());
    }

    #[test]
    fn test_full_name_reports_first_absent_field() {
        let mut person = PersonName::new("python", "comentado");
        person.clear_full_name();
        match person.full_name() {
            Err(NameError::AbsentValueError { field }) => assert_eq!(field, "given_name"),
            other => panic!("unexpected result: {:?}", other),
        }

        person.set_given_name("java");
        match person.full_name() {
            Err(NameError::AbsentValueError { field }) => assert_eq!(field, "family_name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_set_full_name_restores_cleared_person() {
        let mut person = PersonName::new("python", "comentado");
        person.clear_full_name();
        person.set_full_name("rust.lang").unwrap();
        assert_eq!(person.full_name().unwrap(), "rust.lang");
    }

    #[test]
    fn test_display_and_serde() {
        let mut person = PersonName::new("python", "comentado");
        assert_eq!(person.to_string(), "python.comentado");

        person.clear_full_name();
        assert_eq!(person.to_string(), "None");

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"given_name": null, "family_name": null})
        );
    }
}
