//! The component value object.

use serde::{Deserialize, Serialize};

use crate::kind::ComponentKind;

/// A concrete ingredient tagged with the slot category it fills.
///
/// Capability is checked by comparing `kind`, never by the component's type:
/// a "thin crust dough" is a base because its kind says so.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    kind: ComponentKind,
    display_name: String,
}

impl Component {
    pub fn new(kind: ComponentKind, display_name: impl Into<String>) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether this component can fill a slot of `kind`.
    pub fn fits(&self, kind: ComponentKind) -> bool {
        self.kind == kind
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn components_compare_by_value() {
        let a = Component::new(ComponentKind::Base, "thin crust dough");
        let b = Component::new(ComponentKind::Base, "thin crust dough");
        assert_eq!(a, b);
        assert_ne!(a, Component::new(ComponentKind::Sauce, "thin crust dough"));
    }

    #[test]
    fn fits_checks_kind_equality() {
        let clams = Component::new(ComponentKind::Shellfish, "fresh clams");
        assert!(clams.fits(ComponentKind::Shellfish));
        assert!(!clams.fits(ComponentKind::Protein));
    }

    proptest! {
        /// Property: display is exactly the display name.
        #[test]
        fn display_is_display_name(name in "[a-z][a-z ]{0,40}") {
            let component = Component::new(ComponentKind::Topping, name.clone());
            prop_assert_eq!(component.to_string(), name.clone());
            prop_assert_eq!(component.display_name(), name.as_str());
        }
    }
}
