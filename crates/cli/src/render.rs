//! Human-readable rendering of finished products.
//!
//! Rendering reads only the product's name and populated slots; it never
//! asks which builder or supplier produced it.

use std::fmt::Write as _;

use pizzeria_core::{Component, ComponentKind};
use pizzeria_products::Product;

fn first(product: &Product, kind: ComponentKind) -> Option<&str> {
    product.components(kind).first().map(Component::display_name)
}

/// One-sentence description, e.g.
/// "The pizza is a fresh clams pizza on thin crust dough with marinara sauce and reggiano cheese".
pub fn describe(product: &Product) -> String {
    let base = first(product, ComponentKind::Base).unwrap_or("no crust");
    let sauce = first(product, ComponentKind::Sauce).unwrap_or("no sauce");

    if product.has(ComponentKind::ToppingSet) {
        let mut line = format!("The pizza is a veggie pizza on {base} with {sauce}");
        for veggie in product.components(ComponentKind::ToppingSet) {
            let _ = write!(line, ", {veggie}");
        }
        return line;
    }

    let headline = [ComponentKind::Shellfish, ComponentKind::Protein, ComponentKind::Topping]
        .into_iter()
        .find_map(|kind| first(product, kind).map(|name| (kind, name)));

    match headline {
        Some((ComponentKind::Topping, cheese)) => {
            format!("The pizza is a {cheese} pizza on {base} with {sauce}")
        }
        Some((_, name)) => {
            let mut line = format!("The pizza is a {name} pizza on {base} with {sauce}");
            if let Some(cheese) = first(product, ComponentKind::Topping) {
                let _ = write!(line, " and {cheese}");
            }
            line
        }
        None => format!("The pizza is a plain pizza on {base} with {sauce}"),
    }
}

/// Name followed by one indented line per populated slot.
pub fn summary(product: &Product) -> String {
    let mut out = product.name().to_string();
    for (kind, value) in product.slots() {
        let names: Vec<_> = value.components().iter().map(Component::display_name).collect();
        let _ = write!(out, "\n  {kind}: {}", names.join(", "));
    }
    out
}
