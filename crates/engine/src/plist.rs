// SPDX-License-Identifier: MIT

//! Minimal XML property-list writer
//!
//! Emits the subset of the plist format launchd job definitions need:
//! strings, integers, booleans, arrays, and dictionaries. Dictionary keys
//! are kept in sorted order so generated files are deterministic.

use std::collections::BTreeMap;
use std::fmt::Write;

/// A property-list value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    String(String),
    Array(Vec<Value>),
    Dict(BTreeMap<String, Value>),
}

impl Value {
    /// Render a complete plist document with XML declaration and doctype.
    pub fn document(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(
            "<!DOCTYPE plist PUBLIC \"-//Apple//DTD PLIST 1.0//EN\" \
             \"http://www.apple.com/DTDs/PropertyList-1.0.dtd\">\n",
        );
        out.push_str("<plist version=\"1.0\">\n");
        self.render(&mut out, 0);
        out.push_str("</plist>\n");
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        let pad = "\t".repeat(depth);
        match self {
            Value::Bool(true) => { let _ = writeln!(out, "{}<true/>", pad); }
            Value::Bool(false) => { let _ = writeln!(out, "{}<false/>", pad); }
            Value::Integer(n) => { let _ = writeln!(out, "{}<integer>{}</integer>", pad, n); }
            Value::String(s) => {
                let _ = writeln!(out, "{}<string>{}</string>", pad, escape_xml(s));
            }
            Value::Array(items) => {
                if items.is_empty() {
                    let _ = writeln!(out, "{}<array/>", pad);
                    return;
                }
                let _ = writeln!(out, "{}<array>", pad);
                for item in items {
                    item.render(out, depth + 1);
                }
                let _ = writeln!(out, "{}</array>", pad);
            }
            Value::Dict(entries) => {
                if entries.is_empty() {
                    let _ = writeln!(out, "{}<dict/>", pad);
                    return;
                }
                let _ = writeln!(out, "{}<dict>", pad);
                for (key, value) in entries {
                    let _ = writeln!(out, "{}\t<key>{}</key>", pad, escape_xml(key));
                    value.render(out, depth + 1);
                }
                let _ = writeln!(out, "{}</dict>", pad);
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "plist_tests.rs"]
mod tests;
