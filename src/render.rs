//! Phrasing helpers for turning records into prose.

use crate::diff_index::ValueDescriptor;
use crate::pointcut::{InvocationTarget, Pointcut, PointcutBranch, SizeAccessor};

pub fn describe(value: &ValueDescriptor) -> String {
    match value {
        ValueDescriptor::Exception { type_name, message } => {
            format!("an exception of type {type_name} with message \"{message}\"")
        }
        ValueDescriptor::Literal { value } => value.clone(),
        ValueDescriptor::Null { is_null: true } => "null".to_string(),
        ValueDescriptor::Null { is_null: false } => "non-null".to_string(),
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`, ...
pub fn ordinal(n: u128) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Base name of an observation location's `file`.
pub fn location_file(location: &serde_json::Value) -> Option<&str> {
    let file = location.get("file")?.as_str()?;
    Some(file.rsplit(['/', '\\']).next().unwrap_or(file))
}

/// Keep `Class.method(...)` from a qualified method signature.
pub fn trim_package(signature: &str) -> &str {
    let head_end = signature.find('(').unwrap_or(signature.len());
    let head = &signature[..head_end];
    match head.rmatch_indices('.').nth(1) {
        Some((dot, _)) => &signature[dot + 1..],
        None => signature,
    }
}

/// Ordinal of a 0-based pointcut index. Widened so `usize::MAX` still has a successor.
fn position(index: usize) -> String {
    ordinal(index as u128 + 1)
}

/// Where in the observed method a pointcut points, in words.
pub fn describe_pointcut(pointcut: &Pointcut) -> String {
    let mut text = match &pointcut.branch {
        PointcutBranch::Invocation {
            description,
            invocation,
            target,
        } => {
            let what = match target {
                InvocationTarget::Result => "the result".to_string(),
                InvocationTarget::That => "the receiver".to_string(),
                InvocationTarget::Argument(n) => format!("the {} argument", position(*n)),
            };
            format!("{what} of the {} call to {description}", position(*invocation))
        }
        PointcutBranch::Expression { index } => format!("the {} expression", position(*index)),
        PointcutBranch::Exception => "the exception thrown".to_string(),
    };
    text.push_str(&format!(" in {}.{}", pointcut.class, pointcut.method));
    if let Some(field) = &pointcut.field {
        text = format!("field {field} of {text}");
    }
    match pointcut.accessor {
        Some(SizeAccessor::Size) => format!("the size of {text}"),
        Some(SizeAccessor::Length) => format!("the length of {text}"),
        None => text,
    }
}
