use std::cmp::Ordering;

use crate::config::{OrderingConfig, SpecialPlacement};
use crate::extractor::{Function, Include, NamespaceConstant, SymbolModel};

use super::problem::{Problem, ProblemKind, pad};
use super::{Checker, SourceFile};

/// Flags adjacent declarations that break alphabetical ordering.
pub struct OrderingChecker {
    exceptions: Vec<String>,
    constructors: SpecialPlacement,
}

impl OrderingChecker {
    #[must_use]
    pub fn new(config: &OrderingConfig) -> Self {
        Self {
            exceptions: config.exceptions.clone(),
            constructors: config.constructors,
        }
    }

    fn is_exception(&self, function: &Function) -> bool {
        self.exceptions.iter().any(|name| *name == function.name)
    }

    /// Whether `f1` may directly precede `f2` in the same namespace.
    #[must_use]
    pub fn are_functions_ordered(&self, f1: &Function, f2: &Function) -> bool {
        let special1 = f1.is_constructor_or_destructor();
        let special2 = f2.is_constructor_or_destructor();

        match (special1, special2) {
            (true, true) => true,
            (true, false) => self.constructors == SpecialPlacement::First,
            (false, true) => self.constructors == SpecialPlacement::Last,
            (false, false) => {
                caseless_cmp(f1.ordering_name(), f2.ordering_name()) == Ordering::Less
            }
        }
    }

    /// Adjacent same-namespace function pairs that are out of order.
    #[must_use]
    pub fn unordered_functions<'a>(
        &self,
        functions: &'a [Function],
    ) -> Vec<(&'a Function, &'a Function)> {
        functions
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .filter(|(f1, f2)| f1.namespace == f2.namespace)
            .filter(|(f1, f2)| f1.ordering_name() != f2.ordering_name())
            .filter(|(f1, f2)| !self.is_exception(f1) && !self.is_exception(f2))
            .filter(|(f1, f2)| !self.are_functions_ordered(f1, f2))
            .collect()
    }
}

/// Case-insensitive comparison used by every ordering rule.
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Strict order where an empty value must come last.
fn empty_last_ordered(a: &str, b: &str) -> bool {
    if a.is_empty() {
        return b.is_empty();
    }
    if b.is_empty() {
        return true;
    }
    caseless_cmp(a, b) == Ordering::Less
}

#[must_use]
pub fn are_namespaces_ordered(n1: &str, n2: &str) -> bool {
    empty_last_ordered(n1, n2)
}

#[must_use]
pub fn are_constants_ordered(c1: &str, c2: &str) -> bool {
    empty_last_ordered(c1, c2)
}

#[must_use]
pub fn are_includes_ordered(i1: &Include, i2: &Include) -> bool {
    match i1.category.cmp(&i2.category) {
        Ordering::Greater => false,
        Ordering::Less => true,
        // Includes more than a line apart are in different blocks.
        Ordering::Equal if i1.line.abs_diff(i2.line) > 1 => true,
        Ordering::Equal => caseless_cmp(&i1.name, &i2.name) == Ordering::Less,
    }
}

/// First function of each namespace run, in file order.
#[must_use]
pub fn namespace_starters(functions: &[Function]) -> Vec<&Function> {
    let mut starters: Vec<&Function> = Vec::new();
    for function in functions {
        if starters
            .last()
            .is_none_or(|last| last.namespace != function.namespace)
        {
            starters.push(function);
        }
    }
    starters
}

#[must_use]
pub fn unordered_namespaces(functions: &[Function]) -> Vec<(&Function, &Function)> {
    namespace_starters(functions)
        .windows(2)
        .filter(|pair| !are_namespaces_ordered(&pair[0].namespace, &pair[1].namespace))
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

#[must_use]
pub fn unordered_includes(includes: &[Include]) -> Vec<(&Include, &Include)> {
    includes
        .windows(2)
        .filter(|pair| !are_includes_ordered(&pair[0], &pair[1]))
        .map(|pair| (&pair[0], &pair[1]))
        .collect()
}

#[must_use]
pub fn unordered_constants(
    constants: &[NamespaceConstant],
) -> Vec<(&NamespaceConstant, &NamespaceConstant)> {
    constants
        .windows(2)
        .filter(|pair| pair[0].namespace == pair[1].namespace)
        .filter(|pair| !are_constants_ordered(&pair[0].name, &pair[1].name))
        .map(|pair| (&pair[0], &pair[1]))
        .collect()
}

impl OrderingChecker {
    fn problems_for(&self, file: &SourceFile<'_>, model: &SymbolModel) -> Vec<Problem> {
        let mut problems = Vec::new();
        let path = file.path;

        for (f1, f2) in self.unordered_functions(&model.functions) {
            let detail = format!(
                "{} {} - {} {}",
                pad(f1.line, 4),
                pad(f1.full_name(), 40),
                pad(f2.line, 4),
                pad(&f2.name, 20)
            );
            problems.push(Problem::new(path, ProblemKind::UnorderedFunctions, f1.line, detail));
        }

        for (f1, f2) in unordered_namespaces(&model.functions) {
            let detail = format!(
                "{} {} - {} {}",
                pad(f1.line, 4),
                pad(&f1.namespace, 20),
                pad(f2.line, 4),
                pad(&f2.namespace, 20)
            );
            problems.push(Problem::new(path, ProblemKind::UnorderedNamespaces, f1.line, detail));
        }

        for (i1, i2) in unordered_includes(&model.includes) {
            let detail = format!(
                "{} {} - {} {}",
                pad(i1.line, 4),
                pad(&i1.name, 40),
                pad(i2.line, 4),
                pad(&i2.name, 40)
            );
            problems.push(Problem::new(path, ProblemKind::UnorderedIncludes, i1.line, detail));
        }

        for (c1, c2) in unordered_constants(&model.constants) {
            let detail = format!(
                "{} {} - {} {}",
                pad(c1.line, 4),
                pad(&c1.name, 20),
                pad(c2.line, 4),
                pad(&c2.name, 20)
            );
            problems.push(Problem::new(path, ProblemKind::UnorderedConstants, c1.line, detail));
        }

        problems
    }
}

impl Checker for OrderingChecker {
    fn name(&self) -> &'static str {
        "ordering"
    }

    fn check(&self, file: &SourceFile<'_>) -> Vec<Problem> {
        file.symbols
            .as_ref()
            .map_or_else(Vec::new, |model| self.problems_for(file, model))
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
