//! Pointcuts: `|`-separated addresses of an observed value.
//!
//! ```text
//! pointcut := class '|' method '|' branch ('|' field)? ('|' '#size' | '|' '#length')?
//! branch   := description '|' invocation '|' '#' ('result' | 'that' | argument)
//!           | expression
//!           | '!'
//! ```
//!
//! `invocation`, `argument` and `expression` are decimal indices. A field never
//! contains `#`. Branches are tried in the order above and the first one whose
//! suffixes consume the rest of the string wins.

use serde::Serialize;

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationTarget {
    Result,
    That,
    Argument(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointcutBranch {
    /// A value around a call site inside the observed method.
    Invocation {
        description: String,
        invocation: usize,
        target: InvocationTarget,
    },
    Expression { index: usize },
    Exception,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeAccessor {
    Size,
    Length,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pointcut {
    pub class: String,
    pub method: String,
    pub branch: PointcutBranch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessor: Option<SizeAccessor>,
}

impl Pointcut {
    pub fn is_exception(&self) -> bool {
        matches!(self.branch, PointcutBranch::Exception)
    }

    pub fn expression(&self) -> Option<usize> {
        match self.branch {
            PointcutBranch::Expression { index } => Some(index),
            _ => None,
        }
    }
}

fn index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn target(segment: &str) -> Option<InvocationTarget> {
    match segment.strip_prefix('#')? {
        "result" => Some(InvocationTarget::Result),
        "that" => Some(InvocationTarget::That),
        other => index(other).map(InvocationTarget::Argument),
    }
}

fn accessor(segment: &str) -> Option<SizeAccessor> {
    match segment {
        "#size" => Some(SizeAccessor::Size),
        "#length" => Some(SizeAccessor::Length),
        _ => None,
    }
}

type Suffixes = (Option<String>, Option<SizeAccessor>);

/// `('|' field)? ('|' '#size' | '|' '#length')?` over the remaining segments.
fn suffixes(rest: &[&str]) -> Option<Suffixes> {
    match rest {
        [] => Some((None, None)),
        [one] => {
            if let Some(acc) = accessor(one) {
                Some((None, Some(acc)))
            } else if !one.contains('#') {
                Some((Some(one.to_string()), None))
            } else {
                None
            }
        }
        [field, acc] if !field.contains('#') => Some((Some(field.to_string()), Some(accessor(acc)?))),
        _ => None,
    }
}

fn invocation_branch(segs: &[&str]) -> Option<(PointcutBranch, Suffixes)> {
    let [description, invocation, tgt, rest @ ..] = segs else {
        return None;
    };
    let branch = PointcutBranch::Invocation {
        description: description.to_string(),
        invocation: index(invocation)?,
        target: target(tgt)?,
    };
    Some((branch, suffixes(rest)?))
}

fn expression_branch(segs: &[&str]) -> Option<(PointcutBranch, Suffixes)> {
    let [expr, rest @ ..] = segs else {
        return None;
    };
    let branch = PointcutBranch::Expression { index: index(expr)? };
    Some((branch, suffixes(rest)?))
}

fn exception_branch(segs: &[&str]) -> Option<(PointcutBranch, Suffixes)> {
    match segs {
        ["!", rest @ ..] => Some((PointcutBranch::Exception, suffixes(rest)?)),
        _ => None,
    }
}

/// Parse a whole pointcut string. Anything the grammar does not cover is an error.
pub fn parse_pointcut(raw: &str) -> Result<Pointcut> {
    let segs: Vec<&str> = raw.split('|').collect();
    let malformed = || ReportError::MalformedPointcut(raw.to_string());

    let [class, method, tail @ ..] = segs.as_slice() else {
        return Err(malformed());
    };
    if segs.iter().any(|s| s.is_empty()) {
        return Err(malformed());
    }

    let (branch, (field, accessor)) = invocation_branch(tail)
        .or_else(|| expression_branch(tail))
        .or_else(|| exception_branch(tail))
        .ok_or_else(malformed)?;

    Ok(Pointcut {
        class: class.to_string(),
        method: method.to_string(),
        branch,
        field,
        accessor,
    })
}

impl std::fmt::Display for Pointcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|", self.class, self.method)?;
        match &self.branch {
            PointcutBranch::Invocation {
                description,
                invocation,
                target,
            } => {
                write!(f, "{description}|{invocation}|#")?;
                match target {
                    InvocationTarget::Result => f.write_str("result")?,
                    InvocationTarget::That => f.write_str("that")?,
                    InvocationTarget::Argument(n) => write!(f, "{n}")?,
                }
            }
            PointcutBranch::Expression { index } => write!(f, "{index}")?,
            PointcutBranch::Exception => f.write_str("!")?,
        }
        if let Some(field) = &self.field {
            write!(f, "|{field}")?;
        }
        match self.accessor {
            Some(SizeAccessor::Size) => f.write_str("|#size"),
            Some(SizeAccessor::Length) => f.write_str("|#length"),
            None => Ok(()),
        }
    }
}

impl std::str::FromStr for Pointcut {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pointcut(s)
    }
}
