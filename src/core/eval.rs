//! Literal-expression evaluator.
//!
//! Materializes the sequenced bindings into `serde_json::Value`s by walking
//! the AST directly. Only the literal/object/array subset used by
//! translation dictionaries is supported; there is no embedded scripting
//! runtime and no access to anything outside the scope map, so evaluation
//! is isolated and deterministic by construction.

use std::path::Path;

use serde_json::{Map, Number, Value};
use swc_ecma_ast::{Expr, Lit, MemberProp, Prop, PropName, PropOrSpread, UnaryOp};

use super::bindings::{Binding, unwrap_wrappers};
use super::error::ConvertError;

/// Evaluation scope: binding name → materialized value, in insertion order.
pub type Scope = Map<String, Value>;

/// Evaluate sequenced bindings into a fresh scope.
///
/// Bindings must already be ordered dependencies-first. A binding whose name
/// is already in scope overwrites it (last-write-wins). The first
/// unevaluable binding aborts this module's conversion.
pub fn evaluate_bindings(
    ordered: &[&Binding<'_>],
    path: &Path,
) -> Result<Scope, ConvertError> {
    let mut scope = Scope::new();
    for binding in ordered {
        let value = eval_expr(binding.init, &scope).map_err(|message| ConvertError::Evaluation {
            path: path.to_path_buf(),
            message: format!("{}: {}", binding.name, message),
        })?;
        scope.insert(binding.name.clone(), value);
    }
    Ok(scope)
}

fn eval_expr(expr: &Expr, scope: &Scope) -> Result<Value, String> {
    match unwrap_wrappers(expr) {
        Expr::Lit(lit) => eval_lit(lit),
        Expr::Tpl(tpl) => {
            if !tpl.exprs.is_empty() {
                return Err("template literals with substitutions are not supported".to_string());
            }
            let cooked = tpl
                .quasis
                .first()
                .and_then(|quasi| quasi.cooked.as_ref())
                .map(|cooked| cooked.to_string_lossy().to_string())
                .unwrap_or_default();
            Ok(Value::String(cooked))
        }
        Expr::Array(array) => {
            let mut items = Vec::with_capacity(array.elems.len());
            for elem in &array.elems {
                match elem {
                    None => items.push(Value::Null),
                    Some(elem) if elem.spread.is_some() => {
                        match eval_expr(&elem.expr, scope)? {
                            Value::Array(inner) => items.extend(inner),
                            _ => {
                                return Err(
                                    "only arrays can be spread into an array literal".to_string()
                                );
                            }
                        }
                    }
                    Some(elem) => items.push(eval_expr(&elem.expr, scope)?),
                }
            }
            Ok(Value::Array(items))
        }
        Expr::Object(object) => {
            let mut map = Map::new();
            for prop in &object.props {
                match prop {
                    PropOrSpread::Spread(spread) => match eval_expr(&spread.expr, scope)? {
                        Value::Object(inner) => {
                            for (key, value) in inner {
                                map.insert(key, value);
                            }
                        }
                        _ => {
                            return Err(
                                "only objects can be spread into an object literal".to_string()
                            );
                        }
                    },
                    PropOrSpread::Prop(prop) => match &**prop {
                        Prop::KeyValue(kv) => {
                            let key = prop_key(&kv.key, scope)?;
                            let value = eval_expr(&kv.value, scope)?;
                            map.insert(key, value);
                        }
                        Prop::Shorthand(ident) => {
                            let name = ident.sym.to_string();
                            let value = lookup(scope, &name)?;
                            map.insert(name, value);
                        }
                        _ => {
                            return Err(
                                "object methods and accessors are not supported".to_string()
                            );
                        }
                    },
                }
            }
            Ok(Value::Object(map))
        }
        Expr::Ident(ident) => lookup(scope, ident.sym.as_str()),
        Expr::Member(member) => {
            let object = eval_expr(&member.obj, scope)?;
            let key = match &member.prop {
                MemberProp::Ident(ident) => ident.sym.to_string(),
                MemberProp::Computed(computed) => match eval_expr(&computed.expr, scope)? {
                    Value::String(key) => key,
                    Value::Number(key) => key.to_string(),
                    other => return Err(format!("unsupported computed member key: {}", other)),
                },
                MemberProp::PrivateName(_) => {
                    return Err("private members are not supported".to_string());
                }
            };
            match &object {
                Value::Object(map) => map
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| format!("unknown property `{}`", key)),
                Value::Array(items) => key
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index).cloned())
                    .ok_or_else(|| format!("unknown array index `{}`", key)),
                other => Err(format!("cannot access `{}` on {}", key, value_kind(other))),
            }
        }
        Expr::Unary(unary) if unary.op == UnaryOp::Minus => {
            match eval_expr(&unary.arg, scope)? {
                Value::Number(number) => {
                    let value = number
                        .as_f64()
                        .ok_or_else(|| "number out of range".to_string())?;
                    json_number(-value)
                }
                _ => Err("unary minus is only supported on numbers".to_string()),
            }
        }
        other => Err(format!("unsupported expression: {}", expr_kind(other))),
    }
}

fn eval_lit(lit: &Lit) -> Result<Value, String> {
    match lit {
        Lit::Str(s) => Ok(Value::String(s.value.to_string_lossy().to_string())),
        Lit::Num(n) => json_number(n.value),
        Lit::Bool(b) => Ok(Value::Bool(b.value)),
        Lit::Null(_) => Ok(Value::Null),
        Lit::BigInt(_) => Err("bigint literals are not representable in JSON".to_string()),
        Lit::Regex(_) => Err("regex literals are not representable in JSON".to_string()),
        Lit::JSXText(_) => Err("unsupported literal".to_string()),
    }
}

fn lookup(scope: &Scope, name: &str) -> Result<Value, String> {
    scope
        .get(name)
        .cloned()
        .ok_or_else(|| format!("`{}` is not defined in the compilation unit", name))
}

fn prop_key(key: &PropName, scope: &Scope) -> Result<String, String> {
    match key {
        PropName::Ident(ident) => Ok(ident.sym.to_string()),
        PropName::Str(s) => Ok(s.value.to_string_lossy().to_string()),
        PropName::Num(n) => Ok(number_key(n.value)),
        PropName::Computed(computed) => match eval_expr(&computed.expr, scope)? {
            Value::String(key) => Ok(key),
            Value::Number(key) => Ok(key.to_string()),
            other => Err(format!("unsupported computed property key: {}", other)),
        },
        PropName::BigInt(_) => Err("bigint property keys are not supported".to_string()),
    }
}

/// Convert an f64 to a JSON number, preferring integer representation for
/// whole values so `1` does not become `1.0` in the output.
fn json_number(value: f64) -> Result<Value, String> {
    if !value.is_finite() {
        return Err(format!("non-finite number {} is not representable in JSON", value));
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        Ok(Value::Number(Number::from(value as i64)))
    } else {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| format!("number {} is not representable in JSON", value))
    }
}

fn number_key(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Arrow(_) => "Arrow",
        Expr::Fn(_) => "Fn",
        Expr::Call(_) => "Call",
        Expr::New(_) => "New",
        Expr::Bin(_) => "Bin",
        Expr::Cond(_) => "Cond",
        Expr::Assign(_) => "Assign",
        Expr::Tpl(_) => "Tpl",
        Expr::Class(_) => "Class",
        Expr::This(_) => "This",
        _ => "expression",
    }
}
