use crate::domain::model::PersonName;
use crate::utils::error::Result;

/// 具有衍生 full name 的名字持有者。
pub trait NameHolder {
    fn given_name(&self) -> Option<&str>;
    fn family_name(&self) -> Option<&str>;
    fn set_given_name(&mut self, value: &str);
    fn set_family_name(&mut self, value: &str);

    fn full_name(&self) -> Result<String>;
    fn set_full_name(&mut self, value: &str) -> Result<()>;
    fn clear_full_name(&mut self);
}

impl NameHolder for PersonName {
    fn given_name(&self) -> Option<&str> {
        PersonName::given_name(self)
    }

    fn family_name(&self) -> Option<&str> {
        PersonName::family_name(self)
    }

    fn set_given_name(&mut self, value: &str) {
        PersonName::set_given_name(self, value)
    }

    fn set_family_name(&mut self, value: &str) {
        PersonName::set_family_name(self, value)
    }

    fn full_name(&self) -> Result<String> {
        PersonName::full_name(self)
    }

    fn set_full_name(&mut self, value: &str) -> Result<()> {
        PersonName::set_full_name(self, value)
    }

    fn clear_full_name(&mut self) {
        PersonName::clear_full_name(self)
    }
}
