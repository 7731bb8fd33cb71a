//! Attribute location.

use crate::audit::RewriteEvent;
use crate::config::PrefixRule;
use crate::emit::Edit;
use crate::mutate::Mutator;
use crate::parse::ParsedSource;
use crate::shape::Classifier;
use crate::transform::SkippedShape;
use swc_ecma_ast::{JSXAttr, JSXAttrName};
use swc_ecma_visit::{Visit, VisitWith};

/// Visits every JSX attribute and rewrites those named `attribute_name`.
pub(crate) struct AttributeLocator<'a> {
    classifier: Classifier<'a>,
    mutator: Mutator<'a>,
    attribute_name: &'a str,
    /// Number of matching attributes seen.
    matched: usize,
}

impl<'a> AttributeLocator<'a> {
    pub fn new(
        parsed: &'a ParsedSource<'a>,
        rule: &'a PrefixRule,
        attribute_name: &'a str,
        join_call_name: &'a str,
    ) -> Self {
        Self {
            classifier: Classifier::new(parsed, join_call_name),
            mutator: Mutator::new(rule),
            attribute_name,
            matched: 0,
        }
    }

    /// Walks the module and returns the collected edits, events and skipped
    /// shapes.
    pub fn run(mut self, parsed: &ParsedSource<'_>) -> (Vec<Edit>, Vec<RewriteEvent>, Vec<SkippedShape>) {
        parsed.module.visit_with(&mut self);
        tracing::trace!(matched = self.matched, "visited class attributes");
        self.mutator.finish()
    }

    fn is_target(&self, name: &JSXAttrName) -> bool {
        matches!(name, JSXAttrName::Ident(ident) if &*ident.sym == self.attribute_name)
    }
}

impl Visit for AttributeLocator<'_> {
    fn visit_jsx_attr(&mut self, attr: &JSXAttr) {
        if self.is_target(&attr.name) {
            self.matched += 1;
            if let Some(value) = &attr.value {
                let mut value = self.classifier.classify_value(value);
                self.mutator.rewrite_value(&mut value);
            }
        }

        // Nested elements (render props, conditional children) carry their own
        // attributes.
        attr.visit_children_with(self);
    }
}
