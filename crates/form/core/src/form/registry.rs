//! Process-lifetime lookup from [`FormId`] to its definition.

use std::sync::OnceLock;

use strum::{EnumCount, IntoEnumIterator};

use super::catalog;
use super::definition::FormDefinition;
use super::FormId;
use crate::error::{ErrorSeverity, RuleError};

static GLOBAL: OnceLock<FormRegistry> = OnceLock::new();

/// Raw identifier outside the form enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown form identifier {0}")]
pub struct UnknownFormId(pub u8);

impl RuleError for UnknownFormId {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "FORM_UNKNOWN_ID"
    }
}

impl TryFrom<u8> for FormId {
    type Error = UnknownFormId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        FormId::from_repr(raw).ok_or(UnknownFormId(raw))
    }
}

/// Every form definition, indexed by [`FormId`].
///
/// Definitions are built once and never mutated, so references handed out by
/// [`lookup`](Self::lookup) stay valid for as long as the registry does.
#[derive(Debug)]
pub struct FormRegistry {
    definitions: Vec<FormDefinition>,
}

impl FormRegistry {
    pub fn new() -> Self {
        let definitions: Vec<_> = FormId::iter().map(catalog::definition).collect();
        debug_assert_eq!(definitions.len(), FormId::COUNT);
        Self { definitions }
    }

    /// The shared registry, built on first use.
    pub fn global() -> &'static FormRegistry {
        GLOBAL.get_or_init(FormRegistry::new)
    }

    #[inline]
    pub fn lookup(&self, id: FormId) -> &FormDefinition {
        &self.definitions[id.as_index()]
    }

    /// Looks up a raw identifier, e.g. one read back from a save file.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not name a form. Callers that cannot vouch for
    /// their input should go through [`FormId::try_from`] instead.
    pub fn lookup_raw(&self, raw: u8) -> &FormDefinition {
        match FormId::try_from(raw) {
            Ok(id) => self.lookup(id),
            Err(err) => panic!("{err}: form registry covers 0..{}", FormId::COUNT),
        }
    }

    /// Finds a form by its debug name or identifier text.
    pub fn find_by_name(&self, name: &str) -> Option<&FormDefinition> {
        self.definitions
            .iter()
            .find(|def| def.wiz_name.eq_ignore_ascii_case(name))
            .or_else(|| name.parse::<FormId>().ok().map(|id| self.lookup(id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormDefinition> {
        self.definitions.iter()
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_maps_to_its_own_definition() {
        let registry = FormRegistry::global();
        for id in FormId::iter() {
            assert_eq!(registry.lookup(id).id, id);
        }
    }

    #[test]
    fn lookup_returns_the_same_instance() {
        let a = FormRegistry::global().lookup(FormId::Statue);
        let b = FormRegistry::global().lookup(FormId::Statue);
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn raw_ids_round_trip() {
        for id in FormId::iter() {
            assert_eq!(FormId::try_from(id as u8), Ok(id));
        }
        assert_eq!(FormId::try_from(200), Err(UnknownFormId(200)));
    }

    #[test]
    #[should_panic(expected = "unknown form identifier")]
    fn lookup_raw_panics_outside_enumeration() {
        FormRegistry::global().lookup_raw(FormId::COUNT as u8);
    }

    #[test]
    fn finds_forms_by_name() {
        let registry = FormRegistry::global();
        assert_eq!(
            registry.find_by_name("ice_beast").map(|def| def.id),
            Some(FormId::IceBeast)
        );
        assert_eq!(
            registry.find_by_name("Hydra").map(|def| def.id),
            Some(FormId::Hydra)
        );
        assert!(registry.find_by_name("griffon").is_none());
    }
}
