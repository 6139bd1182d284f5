use serde::{Deserialize, Serialize};

/// A test named by the mutation report. Either a whole test class or one of its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl TestCase {
    pub fn class_only(class: &str) -> Self {
        TestCase {
            class: class.to_string(),
            method: None,
        }
    }

    /// Parse a test identifier. Never fails: anything unrecognised becomes a bare class.
    ///
    /// Accepted shapes:
    /// - `pkg.FooTest.pkg.FooTest` (class-level entry)
    /// - `pkg.FooTest.testBar`, `pkg.FooTest.testBar()`, `pkg.FooTest.testBar(pkg.FooTest)`
    /// - `pkg.FooTest.testBar[1: a=2](pkg.FooTest)` (parameterized)
    /// - `pkg.FooTest.[engine:junit-jupiter]/[class:pkg.FooTest]/[method:testBar()]`
    pub fn parse(raw: &str) -> Self {
        parse_class_entry(raw)
            .or_else(|| parse_unique_id(raw))
            .or_else(|| parse_method_entry(raw))
            .unwrap_or_else(|| TestCase::class_only(raw))
    }

    /// `class.method`, or just the class.
    pub fn display_name(&self) -> String {
        match &self.method {
            Some(method) => format!("{}.{}", self.class, method),
            None => self.class.clone(),
        }
    }
}

fn parse_class_entry(raw: &str) -> Option<TestCase> {
    if raw.len() % 2 == 0 {
        return None;
    }
    let half = raw.len() / 2;
    if !raw.is_char_boundary(half) || raw.as_bytes()[half] != b'.' {
        return None;
    }
    let (class, rest) = (&raw[..half], &raw[half + 1..]);
    (!class.is_empty() && class == rest).then(|| TestCase::class_only(class))
}

/// JUnit 5 unique ids as written by the PIT JUnit 5 plugin.
fn parse_unique_id(raw: &str) -> Option<TestCase> {
    let mut class = None;
    let mut method = None;
    for part in raw.split('/') {
        let part = part.rsplit_once('[').map(|(_, p)| p).unwrap_or(part);
        let Some(body) = part.strip_suffix(']') else {
            continue;
        };
        if let Some(c) = body.strip_prefix("class:") {
            class = Some(c);
        } else if let Some(m) = body
            .strip_prefix("method:")
            .or_else(|| body.strip_prefix("test-template:"))
        {
            method = Some(m.split('(').next().unwrap_or(m));
        }
    }
    let class = class.filter(|c| !c.is_empty())?;
    Some(TestCase {
        class: class.to_string(),
        method: method.filter(|m| !m.is_empty()).map(str::to_string),
    })
}

fn parse_method_entry(raw: &str) -> Option<TestCase> {
    // Drop a trailing `(...)` whose content is empty or repeats the class.
    let (head, owner) = match raw.strip_suffix(')') {
        Some(body) => {
            let open = body.rfind('(')?;
            (&body[..open], Some(&body[open + 1..]))
        }
        None => (raw, None),
    };

    // Parameterized names carry a `[...]` suffix; the method itself has no `[`.
    let (named, params) = match head.find('[') {
        Some(open) => {
            if !head.ends_with(']') {
                return None;
            }
            (&head[..open], true)
        }
        None => (head, false),
    };
    if params && owner.is_none() {
        return None;
    }

    let (class, method) = named.rsplit_once('.')?;
    if class.is_empty() || method.is_empty() {
        return None;
    }
    match owner {
        Some(o) if !o.is_empty() && o != class => None,
        _ => Some(TestCase {
            class: class.to_string(),
            method: Some(method.to_string()),
        }),
    }
}
