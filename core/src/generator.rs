#![deny(missing_docs)]

//! # Construct Generation
//!
//! Accumulates construct registrations keyed by fully-qualified name and
//! renders one serde-ready Rust struct per construct. Handles:
//! - Identifier conversion (wire names -> snake_case fields, `rename` attrs).
//! - JSON type -> Rust type mapping, including `Vec<T>` and `$ref` targets.
//! - Required vs optional properties (`Option<T>`).
//! - Import aggregation for the generated file header.

use crate::error::{AppError, AppResult};
use crate::refs::definition_name;
use heck::{ToSnakeCase, ToUpperCamelCase};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeSet;

/// One registration request issued to a type generator.
#[derive(Debug, Clone)]
pub struct ConstructRequest {
    /// Identity key, `namespace.name`.
    pub fqn: String,
    /// Emitted construct name (the definition key).
    pub kind: String,
    /// Schema subtree for the definition.
    pub schema: Value,
}

/// Accumulates construct registrations and emits source code for them.
pub trait TypeGenerator {
    /// Registers one construct.
    ///
    /// Fails with `AppError::Generation` when the schema is structurally
    /// unusable for generation.
    fn emit_construct(&mut self, request: ConstructRequest) -> AppResult<()>;

    /// Flushes all registered constructs into `sink`. Called exactly once,
    /// after all registrations.
    fn generate(&mut self, sink: &mut String) -> AppResult<()>;
}

/// Default generator rendering one serde-ready `pub struct` per construct.
#[derive(Debug, Default)]
pub struct ConstructGenerator {
    constructs: IndexMap<String, ConstructRequest>,
    generated: bool,
}

/// A struct field ready for rendering.
struct RenderedField {
    name: String,
    wire_name: String,
    ty: String,
    description: Option<String>,
}

impl ConstructGenerator {
    /// Creates an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered constructs.
    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    /// Returns whether no constructs are registered.
    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    /// Maps a definition schema to a field type string.
    fn field_type(&self, schema: &Value) -> String {
        if let Some(target) = schema.get("$ref").and_then(Value::as_str) {
            return match self.referenced_struct(target) {
                Some(name) => name,
                None => "serde_json::Value".to_string(),
            };
        }

        match schema.get("type").and_then(Value::as_str) {
            Some("string") => "String".to_string(),
            Some("boolean") => "bool".to_string(),
            Some("integer") => "i64".to_string(),
            Some("number") => "f64".to_string(),
            Some("array") => match schema.get("items") {
                Some(items) if items.is_object() => format!("Vec<{}>", self.field_type(items)),
                _ => "Vec<serde_json::Value>".to_string(),
            },
            // Unions, inline objects and unknown shapes stay dynamic.
            _ => "serde_json::Value".to_string(),
        }
    }

    /// Resolves a qualified `$ref` to the struct name of a registered
    /// construct, if one exists for the referenced definition.
    fn referenced_struct(&self, target: &str) -> Option<String> {
        let name = definition_name(target)?;
        self.constructs
            .values()
            .any(|c| c.kind == name)
            .then(|| name.to_upper_camel_case())
    }

    fn render_fields(&self, schema: &Value) -> Vec<RenderedField> {
        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
            return Vec::new();
        };

        properties
            .iter()
            .map(|(wire_name, prop)| {
                let base = self.field_type(prop);
                let ty = if required.contains(&wire_name.as_str()) {
                    base
                } else {
                    format!("Option<{}>", base)
                };
                RenderedField {
                    name: field_identifier(wire_name),
                    wire_name: wire_name.clone(),
                    ty,
                    description: prop
                        .get("description")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                }
            })
            .collect()
    }

    fn render_construct(&self, construct: &ConstructRequest) -> String {
        let mut code = String::new();

        if let Some(description) = construct.schema.get("description").and_then(Value::as_str) {
            for line in description.lines() {
                code.push_str(&format!("/// {}\n", line));
            }
            code.push_str("///\n");
        }
        code.push_str(&format!("/// Deployment construct `{}`.\n", construct.fqn));

        code.push_str("#[derive(Debug, Clone, Serialize, Deserialize)]\n");
        code.push_str(&format!(
            "pub struct {} {{\n",
            construct.kind.to_upper_camel_case()
        ));

        for field in self.render_fields(&construct.schema) {
            if let Some(desc) = &field.description {
                for line in desc.lines() {
                    code.push_str(&format!("    /// {}\n", line));
                }
            }
            if field.name != field.wire_name {
                code.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.wire_name));
            }
            code.push_str(&format!("    pub {}: {},\n", field.name, field.ty));
        }

        code.push_str("}\n");
        code
    }
}

impl TypeGenerator for ConstructGenerator {
    fn emit_construct(&mut self, request: ConstructRequest) -> AppResult<()> {
        if !request.schema.is_object() {
            return Err(AppError::Generation(format!(
                "Construct '{}' has a non-object schema",
                request.fqn
            )));
        }

        // The fqn is the identity key; the first registration wins.
        self.constructs.entry(request.fqn.clone()).or_insert(request);
        Ok(())
    }

    fn generate(&mut self, sink: &mut String) -> AppResult<()> {
        if self.generated {
            return Err(AppError::Generation(
                "generate may only be called once".to_string(),
            ));
        }
        self.generated = true;

        let bodies: Vec<String> = self
            .constructs
            .values()
            .map(|construct| self.render_construct(construct))
            .collect();

        // 1. Analyze imports across all constructs
        let mut imports = BTreeSet::new();
        imports.insert("use serde::{Deserialize, Serialize};".to_string());
        for body in &bodies {
            if body.contains("serde_json::Value") {
                imports.insert("use serde_json::Value;".to_string());
            }
        }

        // 2. Write header and imports
        sink.push_str("// generated by armgen\n");
        for import in imports {
            sink.push_str(&import);
            sink.push('\n');
        }
        sink.push('\n');

        // 3. Write definitions
        for (i, body) in bodies.iter().enumerate() {
            sink.push_str(body);
            if i < bodies.len() - 1 {
                sink.push('\n');
            }
        }

        Ok(())
    }
}

/// Converts a wire property name into a valid Rust field identifier.
fn field_identifier(wire_name: &str) -> String {
    let snake = wire_name.to_snake_case();
    if snake.is_empty() {
        return "unnamed".to_string();
    }
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        return format!("{}_", snake);
    }
    snake
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while",
];
