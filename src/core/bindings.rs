//! Binding collection and one-level dependency extraction.

use std::collections::{HashMap, HashSet};

use swc_ecma_ast::{Callee, Expr, Pat, Prop, PropOrSpread, VarDeclarator};

use super::parser::ParsedModule;

/// A named top-level value declaration, plus the identifiers its
/// initializer references one level deep.
pub struct Binding<'a> {
    pub name: String,
    pub init: &'a Expr,
    pub deps: Vec<String>,
}

/// Collect the top-level bindings of a compilation unit.
///
/// Only simple-identifier declarators with an initializer become bindings;
/// destructuring patterns are not translation declarations and are skipped.
/// When two declarations share a name (merged units), the later one wins.
pub fn collect_bindings(parsed: &ParsedModule) -> Vec<Binding<'_>> {
    let mut bindings = Vec::new();
    for decl in parsed.var_declarators() {
        if let Some(binding) = binding_from_declarator(decl) {
            bindings.push(binding);
        }
    }
    dedup_last_wins(bindings)
}

fn binding_from_declarator(decl: &VarDeclarator) -> Option<Binding<'_>> {
    let Pat::Ident(ident) = &decl.name else {
        return None;
    };
    let init = decl.init.as_deref()?;
    Some(Binding {
        name: ident.id.sym.to_string(),
        init,
        deps: initializer_deps(init),
    })
}

/// Identifiers referenced directly by an initializer, one level deep.
///
/// Member accesses and calls count as their root identifier. Object property
/// keys are never dependencies; only property values, shorthand properties,
/// spreads, and array elements are inspected. This is a reordering heuristic
/// for literal translation objects, not scope analysis.
pub fn initializer_deps(init: &Expr) -> Vec<String> {
    let mut deps = Vec::new();
    match unwrap_wrappers(init) {
        Expr::Object(object) => {
            for prop in &object.props {
                match prop {
                    PropOrSpread::Spread(spread) => push_root_ident(&spread.expr, &mut deps),
                    PropOrSpread::Prop(prop) => match &**prop {
                        Prop::KeyValue(kv) => push_root_ident(&kv.value, &mut deps),
                        Prop::Shorthand(ident) => deps.push(ident.sym.to_string()),
                        _ => {}
                    },
                }
            }
        }
        Expr::Array(array) => {
            for elem in array.elems.iter().flatten() {
                push_root_ident(&elem.expr, &mut deps);
            }
        }
        _ => push_root_ident(init, &mut deps),
    }

    let mut seen = HashSet::new();
    deps.retain(|name| seen.insert(name.clone()));
    deps
}

fn push_root_ident(expr: &Expr, deps: &mut Vec<String>) {
    if let Some(name) = root_ident(expr) {
        deps.push(name);
    }
}

/// The leftmost identifier of an expression, if it has one.
fn root_ident(expr: &Expr) -> Option<String> {
    match unwrap_wrappers(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => root_ident(&member.obj),
        Expr::Call(call) => match &call.callee {
            Callee::Expr(callee) => root_ident(callee),
            _ => None,
        },
        _ => None,
    }
}

/// Peel parentheses and TypeScript type-only wrappers.
pub(crate) fn unwrap_wrappers(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_wrappers(&paren.expr),
        Expr::TsAs(as_expr) => unwrap_wrappers(&as_expr.expr),
        Expr::TsConstAssertion(assertion) => unwrap_wrappers(&assertion.expr),
        Expr::TsSatisfies(satisfies) => unwrap_wrappers(&satisfies.expr),
        Expr::TsTypeAssertion(assertion) => unwrap_wrappers(&assertion.expr),
        Expr::TsNonNull(non_null) => unwrap_wrappers(&non_null.expr),
        other => other,
    }
}

/// Later declarations replace earlier ones with the same name. The merged
/// unit keeps last-write-wins semantics, so the importer shadows an import.
fn dedup_last_wins(bindings: Vec<Binding<'_>>) -> Vec<Binding<'_>> {
    let mut by_name: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<Binding> = Vec::new();
    for binding in bindings {
        match by_name.get(&binding.name) {
            Some(&slot) => deduped[slot] = binding,
            None => {
                by_name.insert(binding.name.clone(), deduped.len());
                deduped.push(binding);
            }
        }
    }
    deduped
}
