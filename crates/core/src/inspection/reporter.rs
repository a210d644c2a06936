use super::issue::SupportedIssue;
use crate::types::{DiagnosticRecord, PropagationVerdict, Symbol};
use std::collections::HashSet;
use tracing::trace;

/// Turns positive verdicts into diagnostic records.
///
/// Records are returned by value; attaching them to a source location is left to the
/// caller.
#[derive(Debug, Clone)]
pub struct InspectionReporter {
    issue: SupportedIssue,
    suppressed: HashSet<u32>,
}

impl Default for InspectionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionReporter {
    pub fn new() -> Self {
        Self {
            issue: SupportedIssue::INHERITED_DEPRECATED_INTERFACE,
            suppressed: HashSet::new(),
        }
    }

    /// Drop records whose issue code is in `codes`
    pub fn with_suppressed<I: IntoIterator<Item = u32>>(mut self, codes: I) -> Self {
        self.suppressed.extend(codes);
        self
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.contains(&self.issue.code)
    }

    pub fn report(&self, symbol: &Symbol, verdict: &PropagationVerdict) -> Option<DiagnosticRecord> {
        if !verdict.is_deprecated {
            return None;
        }
        if self.is_suppressed() {
            trace!("Issue {} suppressed for {}", self.issue.code, symbol);
            return None;
        }

        let subject = verdict.witness.as_ref().unwrap_or(symbol);
        Some(DiagnosticRecord {
            target_symbol: symbol.clone(),
            witness: verdict.witness.clone(),
            issue_code: self.issue.code,
            severity: self.issue.severity,
            message: self.issue.message(subject.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_negative_verdict_reports_nothing() {
        let reporter = InspectionReporter::new();
        let record = reporter.report(&Symbol::from("A\\I"), &PropagationVerdict::not_deprecated());
        assert!(record.is_none());
    }

    #[test]
    fn test_positive_verdict() {
        let reporter = InspectionReporter::new();
        let record = reporter
            .report(
                &Symbol::from("Vendor\\Module\\BarInterface"),
                &PropagationVerdict::deprecated_by(Symbol::from("Vendor\\ModuleApi\\FooInterface")),
            )
            .unwrap();

        assert_eq!(record.target_symbol, Symbol::from("Vendor\\Module\\BarInterface"));
        assert_eq!(
            record.witness,
            Some(Symbol::from("Vendor\\ModuleApi\\FooInterface"))
        );
        assert_eq!(record.issue_code, 1338);
        assert_eq!(record.severity, Severity::Warning);
        insta::assert_snapshot!(
            record.message,
            @r"Interface inherits deprecated interface 'Vendor\ModuleApi\FooInterface'"
        );
    }

    #[test]
    fn test_message_falls_back_to_target() {
        let reporter = InspectionReporter::new();
        let verdict = PropagationVerdict {
            is_deprecated: true,
            witness: None,
        };
        let record = reporter.report(&Symbol::from("A\\I"), &verdict).unwrap();
        assert_eq!(record.witness, None);
        assert_eq!(record.message, "Interface inherits deprecated interface 'A\\I'");
    }

    #[test]
    fn test_suppressed_code() {
        let reporter = InspectionReporter::new().with_suppressed([1338]);
        let verdict = PropagationVerdict::deprecated_by(Symbol::from("A\\Old"));
        assert!(reporter.report(&Symbol::from("A\\I"), &verdict).is_none());

        let reporter = InspectionReporter::new().with_suppressed([1131]);
        assert!(reporter.report(&Symbol::from("A\\I"), &verdict).is_some());
    }
}
