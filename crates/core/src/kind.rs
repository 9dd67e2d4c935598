//! Closed catalog sets: component kinds, variants, product kinds.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Slot category a product may require.
///
/// `Ord` follows declaration order; it is also the order in which populated
/// slots are listed on a finished product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Base,
    Sauce,
    Topping,
    ToppingSet,
    Protein,
    Shellfish,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Base,
        ComponentKind::Sauce,
        ComponentKind::Topping,
        ComponentKind::ToppingSet,
        ComponentKind::Protein,
        ComponentKind::Shellfish,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Base => "base",
            ComponentKind::Sauce => "sauce",
            ComponentKind::Topping => "topping",
            ComponentKind::ToppingSet => "topping-set",
            ComponentKind::Protein => "protein",
            ComponentKind::Shellfish => "shellfish",
        }
    }

    /// Whether a supplier hands this kind out as an ordered list.
    pub fn is_set(self) -> bool {
        matches!(self, ComponentKind::ToppingSet)
    }
}

impl core::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::component_kind(s))
    }
}

/// Regional style selecting which concrete components a supplier yields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    NewYork,
    Chicago,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::NewYork, Variant::Chicago];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::NewYork => "new-york",
            Variant::Chicago => "chicago",
        }
    }

    /// Prefix used when naming products of this variant.
    pub fn style(self) -> &'static str {
        match self {
            Variant::NewYork => "New York Style",
            Variant::Chicago => "Chicago Style",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new-york" | "newyork" | "ny" => Ok(Variant::NewYork),
            "chicago" => Ok(Variant::Chicago),
            _ => Err(ParseError::variant(s)),
        }
    }
}

/// Product category selecting which component kinds are required.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    /// Cheese pizza.
    Basic,
    /// Pepperoni pizza.
    Primary,
    /// Clam pizza.
    Shellfish,
    /// Veggie pizza.
    Mixed,
}

impl ProductKind {
    pub const ALL: [ProductKind; 4] = [
        ProductKind::Basic,
        ProductKind::Primary,
        ProductKind::Shellfish,
        ProductKind::Mixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Basic => "basic",
            ProductKind::Primary => "primary",
            ProductKind::Shellfish => "shellfish",
            ProductKind::Mixed => "mixed",
        }
    }

    /// Suffix used when naming products of this kind.
    pub fn label(self) -> &'static str {
        match self {
            ProductKind::Basic => "Cheese Pizza",
            ProductKind::Primary => "Pepperoni Pizza",
            ProductKind::Shellfish => "Clam Pizza",
            ProductKind::Mixed => "Veggie Pizza",
        }
    }
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "cheese" => Ok(ProductKind::Basic),
            "primary" | "pepperoni" => Ok(ProductKind::Primary),
            "shellfish" | "clam" => Ok(ProductKind::Shellfish),
            "mixed" | "veggie" => Ok(ProductKind::Mixed),
            _ => Err(ParseError::product_kind(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_kind_identity_round_trips() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn component_kind_order_is_declaration_order() {
        let mut sorted = ComponentKind::ALL;
        sorted.sort();
        assert_eq!(sorted, ComponentKind::ALL);
    }

    #[test]
    fn only_topping_set_is_list_valued() {
        let sets: Vec<_> = ComponentKind::ALL.into_iter().filter(|k| k.is_set()).collect();
        assert_eq!(sets, vec![ComponentKind::ToppingSet]);
    }

    #[test]
    fn unknown_component_kind_is_rejected() {
        let err = "crust".parse::<ComponentKind>().unwrap_err();
        assert_eq!(err, ParseError::ComponentKind("crust".to_string()));
    }

    #[test]
    fn product_kind_accepts_menu_aliases() {
        assert_eq!("cheese".parse::<ProductKind>().unwrap(), ProductKind::Basic);
        assert_eq!("Pepperoni".parse::<ProductKind>().unwrap(), ProductKind::Primary);
        assert_eq!("clam".parse::<ProductKind>().unwrap(), ProductKind::Shellfish);
        assert_eq!("veggie".parse::<ProductKind>().unwrap(), ProductKind::Mixed);
        for kind in ProductKind::ALL {
            assert_eq!(kind.as_str().parse::<ProductKind>().unwrap(), kind);
        }
    }

    #[test]
    fn variant_parses_short_forms() {
        assert_eq!("NY".parse::<Variant>().unwrap(), Variant::NewYork);
        assert_eq!("new-york".parse::<Variant>().unwrap(), Variant::NewYork);
        assert_eq!("chicago".parse::<Variant>().unwrap(), Variant::Chicago);
        assert!(matches!("california".parse::<Variant>(), Err(ParseError::Variant(_))));
    }

    #[test]
    fn serde_uses_textual_identity() {
        let json = serde_json::to_string(&ComponentKind::ToppingSet).unwrap();
        assert_eq!(json, "\"topping-set\"");
        let variant: Variant = serde_json::from_str("\"new-york\"").unwrap();
        assert_eq!(variant, Variant::NewYork);
    }
}
