//! Topological sequencer: order bindings so dependencies come first.

use std::collections::{HashMap, HashSet};

use super::bindings::Binding;

/// Order bindings so every resolvable dependency precedes its dependent.
///
/// Post-order depth-first visit in declaration order: a binding's
/// dependencies are visited first, then the binding itself is appended; the
/// visited set guarantees each name appears exactly once. Dependency names
/// with no binding in the unit are leaves and are not emitted.
///
/// A dependency cycle is broken silently at the first revisited name
/// (visited-set short-circuit). The sequencer always terminates and never
/// reports cycles; whether the broken order evaluates is decided later.
pub fn sequence<'a, 'b>(bindings: &'b [Binding<'a>]) -> Vec<&'b Binding<'a>> {
    let by_name: HashMap<&str, usize> = bindings
        .iter()
        .enumerate()
        .map(|(slot, binding)| (binding.name.as_str(), slot))
        .collect();

    let mut visited: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<usize> = Vec::with_capacity(bindings.len());
    for binding in bindings {
        visit(binding.name.as_str(), bindings, &by_name, &mut visited, &mut ordered);
    }
    ordered.into_iter().map(|slot| &bindings[slot]).collect()
}

fn visit<'b>(
    name: &'b str,
    bindings: &'b [Binding<'_>],
    by_name: &HashMap<&'b str, usize>,
    visited: &mut HashSet<&'b str>,
    ordered: &mut Vec<usize>,
) {
    if !visited.insert(name) {
        return;
    }
    let Some(&slot) = by_name.get(name) else {
        // External/unresolvable identifier: a leaf with no expansion.
        return;
    };
    for dep in &bindings[slot].deps {
        visit(dep.as_str(), bindings, by_name, visited, ordered);
    }
    ordered.push(slot);
}
