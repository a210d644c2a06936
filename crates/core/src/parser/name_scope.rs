//! PHP name resolution
//!
//! Turns a class name as written in source into a fully-qualified symbol using the
//! namespace and `use` imports in effect at that point of the file.

use crate::types::Symbol;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct NameScope {
    namespace: Option<String>,
    /// Lowercased alias to fully-qualified target
    imports: HashMap<String, String>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_namespace(namespace: &str) -> Self {
        let mut scope = Self::new();
        scope.enter_namespace(namespace);
        scope
    }

    /// Switch to another namespace; imports do not carry over
    pub fn enter_namespace(&mut self, namespace: &str) {
        let namespace = namespace.trim().trim_matches('\\');
        self.namespace = (!namespace.is_empty()).then(|| namespace.to_string());
        self.imports.clear();
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn import(&mut self, target: &str, alias: Option<&str>) {
        let target = target.trim().trim_start_matches('\\');
        if target.is_empty() {
            return;
        }
        let alias = alias
            .map(|a| a.trim().to_string())
            .unwrap_or_else(|| target.rsplit('\\').next().unwrap_or(target).to_string());
        self.imports.insert(alias.to_lowercase(), target.to_string());
    }

    /// Register every class import of a `use` statement's source text
    pub fn import_statement(&mut self, text: &str) {
        for (target, alias) in parse_use_statement(text) {
            self.import(&target, alias.as_deref());
        }
    }

    /// Qualify a name declared in the current namespace
    pub fn qualify(&self, name: &str) -> Symbol {
        match &self.namespace {
            Some(namespace) => Symbol::new(format!("{namespace}\\{name}")),
            None => Symbol::new(name),
        }
    }

    /// Resolve a referenced class name
    pub fn resolve(&self, name: &str) -> Symbol {
        let name = name.trim();

        if let Some(fully_qualified) = name.strip_prefix('\\') {
            return Symbol::new(fully_qualified);
        }

        if let Some(relative) = strip_prefix_ignore_case(name, "namespace\\") {
            return self.qualify(relative);
        }

        let (first, rest) = match name.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (name, None),
        };

        match (self.imports.get(&first.to_lowercase()), rest) {
            (Some(target), Some(rest)) => Symbol::new(format!("{target}\\{rest}")),
            (Some(target), None) => Symbol::new(target.as_str()),
            (None, _) => self.qualify(name),
        }
    }
}

/// Split a `use` statement into `(target, alias)` pairs.
///
/// Function and constant imports are dropped since they never name a class.
pub fn parse_use_statement(text: &str) -> Vec<(String, Option<String>)> {
    let body = text.trim().trim_end_matches(';').trim();
    let Some(body) = strip_keyword(body, "use") else {
        return Vec::new();
    };
    if strip_keyword(body, "function").is_some() || strip_keyword(body, "const").is_some() {
        return Vec::new();
    }

    if let (Some(open), Some(close)) = (body.find('{'), body.rfind('}')) {
        if open >= close {
            return Vec::new();
        }
        let prefix = body[..open].trim().trim_end_matches('\\');
        return body[open + 1..close]
            .split(',')
            .filter(|item| {
                strip_keyword(item.trim(), "function").is_none()
                    && strip_keyword(item.trim(), "const").is_none()
            })
            .filter_map(parse_use_clause)
            .map(|(name, alias)| (format!("{prefix}\\{name}"), alias))
            .collect();
    }

    body.split(',').filter_map(parse_use_clause).collect()
}

fn parse_use_clause(clause: &str) -> Option<(String, Option<String>)> {
    let mut tokens = clause.split_whitespace();
    let name = tokens.next()?.trim_start_matches('\\').to_string();
    let alias = match (tokens.next(), tokens.next()) {
        (Some(keyword), Some(alias)) if keyword.eq_ignore_ascii_case("as") => {
            Some(alias.to_string())
        }
        _ => None,
    };
    Some((name, alias))
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

/// Strip a leading keyword followed by whitespace, case-insensitively
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    let tail = &text[keyword.len()..];
    (head.eq_ignore_ascii_case(keyword) && tail.starts_with(char::is_whitespace))
        .then(|| tail.trim_start())
}
