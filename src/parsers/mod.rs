mod debug;
pub mod template;

pub use debug::DebugPrinter;
pub use template::{Position, Segment, TemplateParser, display_text, parse};
