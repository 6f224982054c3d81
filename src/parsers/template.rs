use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::card::ArgumentDefinition;
use crate::locale::resolve_first;

// ----------------- Configuration -----------------

/// `[[name]]`, where name is ASCII word characters.
const PLACEHOLDER_PATTERN: &str = r"\[\[([A-Za-z0-9_]+)\]\]";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

// ----------------- Segments -----------------

/// Byte range of a segment in the template it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Plain text. `placeholder` is set when the text is the name of a
    /// `[[name]]` that matched no argument.
    Literal {
        text: &'a str,
        position: Position,
        placeholder: bool,
    },
    ArgumentRef {
        definition: &'a ArgumentDefinition,
        display_text: &'a str,
        position: Position,
    },
}

impl<'a> Segment<'a> {
    /// What a reader sees for this segment.
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Literal { text, .. } => text,
            Segment::ArgumentRef { display_text, .. } => display_text,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Segment::Literal { position, .. } | Segment::ArgumentRef { position, .. } => *position,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self, Segment::ArgumentRef { .. })
    }
}

// ----------------- Parser -----------------

/// Splits a formatted card title into literal text and argument references.
///
/// Never fails: malformed brackets stay literal text and a placeholder
/// naming no argument degrades to a literal carrying that name.
pub struct TemplateParser<'a, 'l> {
    args: &'a [ArgumentDefinition],
    lang: &'l str,
}

impl<'a, 'l> TemplateParser<'a, 'l> {
    pub fn new(args: &'a [ArgumentDefinition], lang: &'l str) -> Self {
        Self { args, lang }
    }

    pub fn parse(&self, template: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in PLACEHOLDER.captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            if whole.start() > last_end {
                segments.push(Segment::Literal {
                    text: &template[last_end..whole.start()],
                    position: Position {
                        start: last_end,
                        end: whole.start(),
                    },
                    placeholder: false,
                });
            }

            let position = Position {
                start: whole.start(),
                end: whole.end(),
            };
            segments.push(self.placeholder_segment(name.as_str(), position));
            last_end = whole.end();
        }

        if last_end < template.len() {
            segments.push(Segment::Literal {
                text: &template[last_end..],
                position: Position {
                    start: last_end,
                    end: template.len(),
                },
                placeholder: false,
            });
        }

        segments
    }

    fn placeholder_segment(&self, name: &'a str, position: Position) -> Segment<'a> {
        match self.args.iter().find(|arg| arg.name == name) {
            Some(definition) => Segment::ArgumentRef {
                definition,
                display_text: display_text(definition, self.lang).unwrap_or(name),
                position,
            },
            None => {
                debug!(placeholder = name, "placeholder has no matching argument");
                Segment::Literal {
                    text: name,
                    position,
                    placeholder: true,
                }
            }
        }
    }
}

/// title[lang], title.en, placeholder[lang], placeholder.en.
pub fn display_text<'a>(arg: &'a ArgumentDefinition, lang: &str) -> Option<&'a str> {
    resolve_first(&[arg.title.as_ref(), arg.placeholder.as_ref()], lang)
}

/// Shorthand for `TemplateParser::new(args, lang).parse(template)`.
pub fn parse<'a>(template: &'a str, args: &'a [ArgumentDefinition], lang: &str) -> Vec<Segment<'a>> {
    TemplateParser::new(args, lang).parse(template)
}
