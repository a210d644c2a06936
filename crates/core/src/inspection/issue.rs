use crate::types::Severity;

/// Descriptor of an issue the scanner can report.
///
/// Codes are stable across releases; suppression lists refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedIssue {
    pub code: u32,
    pub severity: Severity,
    /// Message template, `{}` is replaced with the offending symbol
    template: &'static str,
}

impl SupportedIssue {
    pub const INHERITED_DEPRECATED_INTERFACE: SupportedIssue = SupportedIssue {
        code: 1338,
        severity: Severity::Warning,
        template: "Interface inherits deprecated interface '{}'",
    };

    pub const ALL: &'static [SupportedIssue] = &[Self::INHERITED_DEPRECATED_INTERFACE];

    pub fn from_code(code: u32) -> Option<SupportedIssue> {
        Self::ALL.iter().copied().find(|issue| issue.code == code)
    }

    pub fn message(&self, subject: &str) -> String {
        self.template.replacen("{}", subject, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_stable() {
        assert_eq!(SupportedIssue::INHERITED_DEPRECATED_INTERFACE.code, 1338);
        assert_eq!(
            SupportedIssue::from_code(1338),
            Some(SupportedIssue::INHERITED_DEPRECATED_INTERFACE)
        );
        assert_eq!(SupportedIssue::from_code(1), None);
    }

    #[test]
    fn test_message() {
        let message = SupportedIssue::INHERITED_DEPRECATED_INTERFACE.message("A\\Old");
        assert_eq!(message, "Interface inherits deprecated interface 'A\\Old'");
    }
}
