use std::fmt::Write;

use crate::parsers::template::Segment;

/// Dumps parsed segments one per line for debugging.
/// The CLI prints this with `--debug`.
pub struct DebugPrinter;

impl DebugPrinter {
    fn kind_marker(segment: &Segment<'_>) -> &'static str {
        match segment {
            Segment::Literal {
                placeholder: false, ..
            } => "txt",
            Segment::Literal {
                placeholder: true, ..
            } => "???",
            Segment::ArgumentRef { .. } => "arg",
        }
    }

    pub fn format(segments: &[Segment<'_>]) -> String {
        let mut out = String::new();
        for segment in segments {
            let position = segment.position();
            let _ = write!(
                out,
                "{:>4}..{:<4} [{}] {:?}",
                position.start,
                position.end,
                Self::kind_marker(segment),
                segment.text()
            );
            if let Segment::ArgumentRef { definition, .. } = segment {
                let _ = write!(out, " ({}: {})", definition.name, definition.kind);
            }
            out.push('\n');
        }
        out
    }
}
