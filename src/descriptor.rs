//! JVM method descriptors, e.g. `(I[Ljava/lang/String;)Z`.

use serde::Serialize;

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    pub params: Vec<String>,
    /// `"void"` when the method returns nothing.
    pub return_type: String,
    pub is_void: bool,
}

impl MethodSignature {
    /// Human readable parameter list, e.g. `(int, java.lang.String[])`.
    pub fn param_list(&self) -> String {
        format!("({})", self.params.join(", "))
    }
}

fn primitive_name(c: u8) -> Option<&'static str> {
    match c {
        b'B' => Some("byte"),
        b'C' => Some("char"),
        b'D' => Some("double"),
        b'F' => Some("float"),
        b'I' => Some("int"),
        b'J' => Some("long"),
        b'S' => Some("short"),
        b'Z' => Some("boolean"),
        _ => None,
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn fail(&self, reason: impl Into<String>) -> ReportError {
        ReportError::MalformedDescriptor {
            descriptor: self.src.to_string(),
            reason: reason.into(),
        }
    }

    fn expect(&mut self, c: u8) -> Result<()> {
        if self.peek() == Some(c) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.fail(format!("expected `{}` at offset {}", c as char, self.pos)))
        }
    }

    /// FieldType := BaseType | 'L' ClassName ';' | '[' FieldType
    fn field_type(&mut self) -> Result<String> {
        let mut dims = 0;
        while self.peek() == Some(b'[') {
            dims += 1;
            self.pos += 1;
        }
        let start = self.pos;
        let base = match self.peek() {
            None => return Err(self.fail("unexpected end of descriptor")),
            Some(b'L') => {
                self.pos += 1;
                let src = self.src;
                let rest = &src[self.pos..];
                let end = rest
                    .find(';')
                    .ok_or_else(|| self.fail(format!("unterminated class reference at offset {start}")))?;
                if end == 0 {
                    return Err(self.fail(format!("empty class reference at offset {start}")));
                }
                let name = rest[..end].replace('/', ".");
                self.pos += end + 1;
                name
            }
            Some(c) => {
                let name = primitive_name(c).ok_or_else(|| {
                    let ch = self.src[self.pos..].chars().next().unwrap_or('?');
                    self.fail(format!("unknown type code `{ch}` at offset {start}"))
                })?;
                self.pos += 1;
                name.to_string()
            }
        };
        Ok(format!("{base}{}", "[]".repeat(dims)))
    }
}

/// Decode a method descriptor into its parameter and return types.
pub fn parse_descriptor(descriptor: &str) -> Result<MethodSignature> {
    let mut cur = Cursor {
        src: descriptor,
        pos: 0,
    };
    cur.expect(b'(')?;

    let mut params = Vec::new();
    loop {
        match cur.peek() {
            Some(b')') => {
                cur.pos += 1;
                break;
            }
            None => return Err(cur.fail("unterminated parameter list")),
            Some(_) => params.push(cur.field_type()?),
        }
    }

    let (return_type, is_void) = if cur.peek() == Some(b'V') {
        cur.pos += 1;
        ("void".to_string(), true)
    } else {
        (cur.field_type()?, false)
    };

    if cur.pos != descriptor.len() {
        return Err(cur.fail(format!("trailing characters at offset {}", cur.pos)));
    }

    Ok(MethodSignature {
        params,
        return_type,
        is_void,
    })
}

/// `name(int, java.lang.String[])` for a method name and its descriptor.
pub fn render_signature(name: &str, descriptor: &str) -> Result<String> {
    let sig = parse_descriptor(descriptor)?;
    Ok(format!("{name}{}", sig.param_list()))
}

/// A method addressed by declaring class, name and descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodRef {
    pub class: String,
    pub method: String,
    pub descriptor: String,
    /// `class.method(params)`, ready for display.
    pub signature: String,
}

impl MethodRef {
    pub fn new(class: &str, method: &str, descriptor: &str) -> Result<Self> {
        let signature = format!("{class}.{}", render_signature(method, descriptor)?);
        Ok(MethodRef {
            class: class.to_string(),
            method: method.to_string(),
            descriptor: descriptor.to_string(),
            signature,
        })
    }

    /// Same class, name and descriptor.
    pub fn is_same_method(&self, class: &str, method: &str, descriptor: &str) -> bool {
        self.class == class && self.method == method && self.descriptor == descriptor
    }
}

impl std::fmt::Display for MethodRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.signature)
    }
}
