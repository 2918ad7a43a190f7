//! TypeScript/TSX content templates for generated projects.
//!
//! Templates are plain string constants with three placeholders filled by
//! simple substitution: `{{PASCAL}}`, `{{SNAKE}}`, `{{CAMEL}}`. No template
//! engine: the generated files never need loops or conditionals keyed on the
//! name itself, and straight substitution keeps the output byte-predictable.
//!
//! Config-dependent base files (app entry, navigator, store) are built by
//! functions in [`base`] instead of constants.

pub mod base;
pub mod feature;

use crate::domain::FeatureName;

/// Fill the name placeholders in a template.
pub fn render(template: &str, name: &FeatureName) -> String {
    template
        .replace("{{PASCAL}}", name.pascal())
        .replace("{{SNAKE}}", name.snake())
        .replace("{{CAMEL}}", name.camel())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_fills_all_placeholders() {
        let name = FeatureName::new("order history");
        let out = render("{{PASCAL}}/{{SNAKE}}/{{CAMEL}}", &name);
        assert_eq!(out, "OrderHistory/order_history/orderHistory");
    }

    #[test]
    fn render_leaves_unrelated_braces_alone() {
        let name = FeatureName::new("cart");
        let out = render("const styles = StyleSheet.create({ a: 1 });", &name);
        assert_eq!(out, "const styles = StyleSheet.create({ a: 1 });");
    }
}
