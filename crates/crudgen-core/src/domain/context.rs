//! Placeholder templating.
//!
//! Stubs contain tokens of the exact form `{{ name }}` - one space of
//! padding on each side. Substitution is whole-token and repeats: every
//! occurrence of a placeholder is replaced. Because tokens are disjoint
//! strings the replacement order does not matter, so rendering is
//! deterministic.
//!
//! Tokens whose name has no entry in the context are left verbatim. This
//! is a deliberate best-effort policy: a stub may carry placeholders for
//! a later pass, and a partially-applicable context must not corrupt
//! them. Rendering the same stub twice with the same context is
//! byte-identical.

use std::collections::BTreeMap;
use std::fmt;

/// The closed set of placeholder keys stubs may reference.
///
/// Keeping this an enum (rather than a string-keyed map at the API
/// surface) means a typo in context-building code fails to compile
/// instead of silently leaving a token unreplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// Namespace derived from the artifact's output path.
    Namespace,
    /// Class name of the artifact being rendered.
    ClassName,
    /// Capitalized resource name.
    CapsName,
    /// Pluralized resource name.
    PluralName,
    /// Lowercased resource name.
    Name,
    /// Namespace-qualified resource path segment.
    ClassPath,
    /// Rendered validation-rules block (request stubs).
    Rules,
    /// Rendered validation-messages block (request stubs).
    Messages,
    /// Rendered field list (resource stubs).
    FieldsArray,
    /// Per-resource success message (resource stubs).
    Message,
}

impl Placeholder {
    /// The literal token name as it appears between `{{ }}` in stubs.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::ClassName => "className",
            Self::CapsName => "capsName",
            Self::PluralName => "pluralName",
            Self::Name => "name",
            Self::ClassPath => "nameSpaceOfClass",
            Self::Rules => "rules",
            Self::Messages => "messages",
            Self::FieldsArray => "fieldsArray",
            Self::Message => "message",
        }
    }

    /// The full delimited token, e.g. `{{ className }}`.
    pub fn token(&self) -> String {
        format!("{{{{ {} }}}}", self.key())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value map for one render.
///
/// A `BTreeMap` keeps iteration order stable; tokens are disjoint so the
/// order is irrelevant for correctness, but stable iteration makes
/// failures reproducible.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: BTreeMap<Placeholder, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self for fluent construction.
    pub fn with(mut self, key: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Insert a value in place.
    pub fn insert(&mut self, key: Placeholder, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: Placeholder) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Render a stub by replacing every occurrence of each context token.
    pub fn render(&self, stub: &str) -> String {
        let mut result = stub.to_string();
        for (key, value) in &self.values {
            result = result.replace(&key.token(), value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let ctx = TemplateContext::new().with(Placeholder::ClassName, "Invoice");
        let out = ctx.render("class {{ className }} extends {{ className }}Base");
        assert_eq!(out, "class Invoice extends InvoiceBase");
    }

    #[test]
    fn unknown_tokens_are_left_verbatim() {
        let ctx = TemplateContext::new().with(Placeholder::ClassName, "Invoice");
        let out = ctx.render("{{ className }} / {{ fieldsArray }}");
        assert_eq!(out, "Invoice / {{ fieldsArray }}");
    }

    #[test]
    fn spacing_must_match_exactly() {
        let ctx = TemplateContext::new().with(Placeholder::Name, "invoice");
        // No padding / double padding are not tokens.
        assert_eq!(ctx.render("{{name}}"), "{{name}}");
        assert_eq!(ctx.render("{{  name  }}"), "{{  name  }}");
        assert_eq!(ctx.render("{{ name }}"), "invoice");
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = TemplateContext::new()
            .with(Placeholder::ClassName, "Invoice")
            .with(Placeholder::Name, "invoice")
            .with(Placeholder::PluralName, "Invoices");
        let stub = "{{ className }} {{ name }} {{ pluralName }} {{ name }}";
        assert_eq!(ctx.render(stub), ctx.render(stub));
        assert_eq!(ctx.render(stub), "Invoice invoice Invoices invoice");
    }

    #[test]
    fn present_keys_never_survive_a_render() {
        let ctx = TemplateContext::new().with(Placeholder::Rules, "'a' => 'required',");
        let out = ctx.render("return [\n\t{{ rules }}\n];");
        assert!(!out.contains("{{ rules }}"));
    }
}
