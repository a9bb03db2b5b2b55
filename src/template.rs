//! Password pattern templates
//!
//! A pattern such as `{name}{symbol}{number}` is compiled once into literal and
//! placeholder segments, so the generator only concatenates slices at render
//! time. Doubled braces (`{{`, `}}`) produce literal braces.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised while compiling a pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder '{{{field}}}' in pattern '{pattern}'")]
    UnknownField { pattern: String, field: String },

    #[error("unbalanced '{brace}' at offset {offset} in pattern '{pattern}'")]
    StrayBrace {
        pattern: String,
        brace: char,
        offset: usize,
    },
}

/// Named placeholders a pattern may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Surname,
    Pet,
    Number,
    Symbol,
    Keyword,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Surname,
        Field::Pet,
        Field::Number,
        Field::Symbol,
        Field::Keyword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Surname => "surname",
            Field::Pet => "pet",
            Field::Number => "number",
            Field::Symbol => "symbol",
            Field::Keyword => "keyword",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Values substituted into a template for one cross-product tuple
#[derive(Debug, Clone, Copy, Default)]
pub struct Bindings<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub pet: &'a str,
    pub number: &'a str,
    pub symbol: &'a str,
    pub keyword: &'a str,
}

impl<'a> Bindings<'a> {
    #[inline]
    fn get(&self, field: Field) -> &'a str {
        match field {
            Field::Name => self.name,
            Field::Surname => self.surname,
            Field::Pet => self.pet,
            Field::Number => self.number,
            Field::Symbol => self.symbol,
            Field::Keyword => self.keyword,
        }
    }
}

/// A compiled password pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("template token regex is valid")
    })
}

impl Template {
    /// Compile a pattern string
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in token_regex().captures_iter(pattern) {
            let whole = caps.get(0).expect("group 0 always participates");
            literal.push_str(&pattern[last..whole.start()]);
            last = whole.end();

            match whole.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                "{" | "}" => {
                    return Err(TemplateError::StrayBrace {
                        pattern: pattern.to_string(),
                        brace: whole.as_str().chars().next().unwrap_or('{'),
                        offset: whole.start(),
                    });
                }
                _ => {
                    let name = caps.get(1).map_or("", |m| m.as_str());
                    let field =
                        Field::from_name(name).ok_or_else(|| TemplateError::UnknownField {
                            pattern: pattern.to_string(),
                            field: name.to_string(),
                        })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
            }
        }

        literal.push_str(&pattern[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// Render into a reusable buffer (cleared first)
    #[inline]
    pub fn render_into(&self, bindings: &Bindings<'_>, out: &mut String) {
        out.clear();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(bindings.get(*field)),
            }
        }
    }

    pub fn render(&self, bindings: &Bindings<'_>) -> String {
        let mut out = String::new();
        self.render_into(bindings, &mut out);
        out
    }

    /// Whether the pattern references `field` at least once
    pub fn uses(&self, field: Field) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Field(f) if *f == field))
    }

    /// The pattern as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Bindings<'static> {
        Bindings {
            name: "john",
            surname: "doe",
            pet: "rex",
            number: "1990",
            symbol: "!",
            keyword: "blue",
        }
    }

    #[test]
    fn test_render_all_fields() {
        let t = Template::parse("{name}{surname}{pet}{number}{symbol}{keyword}").unwrap();
        assert_eq!(t.render(&bindings()), "johndoerex1990!blue");
    }

    #[test]
    fn test_literals_and_repetition() {
        let t = Template::parse("{name}.{name}_{number}").unwrap();
        assert_eq!(t.render(&bindings()), "john.john_1990");
    }

    #[test]
    fn test_escaped_braces() {
        let t = Template::parse("{{{name}}}").unwrap();
        assert_eq!(t.render(&bindings()), "{john}");
    }

    #[test]
    fn test_unused_fields_ignored() {
        let t = Template::parse("{pet}").unwrap();
        assert_eq!(t.render(&bindings()), "rex");
        assert!(t.uses(Field::Pet));
        assert!(!t.uses(Field::Name));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Template::parse("{name}{dog}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownField {
                pattern: "{name}{dog}".to_string(),
                field: "dog".to_string(),
            }
        );
        assert!(Template::parse("{}").is_err());
    }

    #[test]
    fn test_stray_brace_rejected() {
        assert!(matches!(
            Template::parse("{name"),
            Err(TemplateError::StrayBrace { brace: '{', offset: 0, .. })
        ));
        assert!(matches!(
            Template::parse("name}"),
            Err(TemplateError::StrayBrace { brace: '}', offset: 4, .. })
        ));
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let t = Template::parse("{name}").unwrap();
        let mut buf = String::from("leftover");
        t.render_into(&bindings(), &mut buf);
        assert_eq!(buf, "john");
    }
}
