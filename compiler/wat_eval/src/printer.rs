//! Value rendering.
//!
//! Values refer to the pair arena and the interner, so rendering needs both;
//! [`Printer`] borrows them. `display` prints strings raw, `write` prints
//! them as string literals the reader accepts.

use std::fmt::{self, Write};

use wat_ir::value::AccessorRole;
use wat_ir::{PairArena, StringInterner, Value};

/// Nesting depth past which nested structure prints as `...`.
const MAX_DEPTH: usize = 512;

pub struct Printer<'a> {
    pairs: &'a PairArena,
    interner: &'a StringInterner,
}

impl<'a> Printer<'a> {
    pub fn new(pairs: &'a PairArena, interner: &'a StringInterner) -> Self {
        Printer { pairs, interner }
    }

    pub fn display(&self, value: &Value) -> String {
        self.render(value, false)
    }

    pub fn write(&self, value: &Value) -> String {
        self.render(value, true)
    }

    fn render(&self, value: &Value, quoted: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.print(&mut out, value, quoted, 0);
        out
    }

    fn print(&self, out: &mut String, value: &Value, quoted: bool, depth: usize) -> fmt::Result {
        if depth > MAX_DEPTH {
            return out.write_str("...");
        }
        match value {
            Value::Nil => out.write_str("()"),
            Value::Ign => out.write_str("#ign"),
            Value::Void => out.write_str("#void"),
            Value::Bool(true) => out.write_str("#t"),
            Value::Bool(false) => out.write_str("#f"),
            Value::Int(n) => write!(out, "{n}"),
            Value::Float(x) => write!(out, "{x:?}"),
            Value::Symbol(name) => out.write_str(self.interner.lookup(*name)),
            Value::Str(s) if quoted => write_string_literal(out, s),
            Value::Str(s) => out.write_str(s),
            Value::Pair(_) => self.print_list(out, value, quoted, depth),
            Value::Env(id) => write!(out, "#[environment {}]", id.index()),
            Value::Form(form) => write!(out, "#[form {}]", form.name()),
            Value::Primitive(prim) => write!(out, "#[primitive {}]", prim.name()),
            Value::Host(host) => write!(out, "#[host {}]", host.name),
            Value::Operative(_) => out.write_str("#[operative]"),
            Value::Applicative(apv) => {
                out.write_str("#[applicative ")?;
                self.print(out, &apv.combiner, quoted, depth + 1)?;
                out.write_char(']')
            }
            Value::TypeAccessor(accessor) => {
                let role = match accessor.role {
                    AccessorRole::Tag => "tagger",
                    AccessorRole::Untag => "untagger",
                };
                write!(out, "#[{role}")?;
                if let Some(label) = accessor.ty.label() {
                    write!(out, " {}", &*label)?;
                }
                out.write_char(']')
            }
            Value::Macro(_) => out.write_str("#[macro]"),
            Value::Vector(items) => {
                out.write_str("#(")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    self.print(out, item, quoted, depth + 1)?;
                }
                out.write_char(')')
            }
            Value::DynVar(_) => out.write_str("#[dynamic-variable]"),
            Value::Continuation(k) => write!(out, "#[continuation {} frames]", k.depth()),
            Value::Type(ty) => match ty.label() {
                Some(label) => write!(out, "#[type {}]", &*label),
                None => out.write_str("#[type]"),
            },
            Value::Tagged(tagged) => {
                out.write_str("#[")?;
                match tagged.ty.label() {
                    Some(label) => out.write_str(&label)?,
                    None => out.write_str("tagged")?,
                }
                out.write_char(' ')?;
                self.print(out, &tagged.value, quoted, depth + 1)?;
                out.write_char(']')
            }
            Value::IdentityTable(table) => {
                write!(out, "#[identity-hashtable {}]", table.len())
            }
            Value::StringTable(table) => write!(out, "#[string-hashtable {}]", table.len()),
        }
    }

    fn print_list(&self, out: &mut String, list: &Value, quoted: bool, depth: usize) -> fmt::Result {
        out.write_char('(')?;
        let mut cursor = list;
        let mut first = true;
        loop {
            match cursor {
                Value::Pair(id) => {
                    if !first {
                        out.write_char(' ')?;
                    }
                    first = false;
                    self.print(out, self.pairs.car(*id), quoted, depth + 1)?;
                    cursor = self.pairs.cdr(*id);
                }
                Value::Nil => break,
                tail => {
                    out.write_str(" . ")?;
                    self.print(out, tail, quoted, depth + 1)?;
                    break;
                }
            }
        }
        out.write_char(')')
    }
}

fn write_string_literal(out: &mut String, s: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\t' => out.write_str("\\t")?,
            '\r' => out.write_str("\\r")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lists_and_atoms() {
        let mut pairs = PairArena::new();
        let interner = StringInterner::new();
        let sym = Value::Symbol(interner.intern("x"));
        let dotted = pairs.list_star([Value::Int(1), sym], Value::Float(2.0));
        let list = pairs.list([Value::Bool(true), dotted, Value::Nil, Value::Void]);

        let printer = Printer::new(&pairs, &interner);
        assert_eq!(printer.write(&list), "(#t (1 x . 2.0) () #void)");
    }

    #[test]
    fn test_strings_quote_only_when_written() {
        let pairs = PairArena::new();
        let interner = StringInterner::new();
        let printer = Printer::new(&pairs, &interner);
        let s = Value::string("say \"hi\"\n");

        assert_eq!(printer.display(&s), "say \"hi\"\n");
        assert_eq!(printer.write(&s), r#""say \"hi\"\n""#);
    }

    #[test]
    fn test_opaque_values() {
        let pairs = PairArena::new();
        let interner = StringInterner::new();
        let printer = Printer::new(&pairs, &interner);

        assert_eq!(
            printer.write(&Value::applicative(Value::Primitive(wat_ir::Primitive::Add))),
            "#[applicative #[primitive +]]"
        );
        assert_eq!(printer.write(&Value::new_type(Some("point"))), "#[type point]");
        assert_eq!(
            printer.write(&Value::vector(vec![Value::Int(1), Value::string("a")])),
            r#"#(1 "a")"#
        );
    }
}
