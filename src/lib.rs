//! Flow card rendering.
//!
//! A flow card is a trigger, condition or action from an app manifest. Its
//! formatted title (`Create task [[content]] in project [[project]]`) is
//! split into literal text and argument chips; every chip can be opened to
//! show what kind of input the argument takes.
//!
//! ```
//! use flowcard::{AppManifest, ComposeOptions, FlowCardComposer, render};
//!
//! let manifest = AppManifest::from_json_str(r#"{
//!     "name": { "en": "Todo" },
//!     "flow": { "actions": [{
//!         "id": "create_task",
//!         "title": { "en": "Create task" },
//!         "titleFormatted": { "en": "Create task [[content]]" },
//!         "args": [{ "name": "content", "type": "text", "title": { "en": "Content" } }]
//!     }] }
//! }"#).unwrap();
//!
//! let meta = manifest.meta();
//! let card = manifest.card("create_task").ok();
//! let rendered = FlowCardComposer::new(&meta)
//!     .compose(card, &ComposeOptions::default())
//!     .unwrap();
//! assert_eq!(rendered.title_text(), "Create task Content");
//! assert!(render::text(&rendered).contains("[Content]"));
//! ```

pub mod card;
pub mod chip;
pub mod compose;
pub mod locale;
pub mod manifest;
pub mod parsers;
pub mod registry;
pub mod render;
pub mod utility;

pub use card::{AppMeta, ArgumentDefinition, ArgumentValueOption, CardDefinition, LocalizedString, OutputToken};
pub use chip::{ArgChip, ChipDetails, ChipEvent, ChipSet, ChipState, Propagation};
pub use compose::{ComposeOptions, FlowCardComposer, RenderedCard, TitleNode};
pub use locale::resolve;
pub use manifest::{AppManifest, CardKind, ManifestError};
pub use parsers::{Segment, TemplateParser};
pub use registry::{ArgTypeDescriptor, DetailRow, describe};

#[cfg(test)]
mod tests;
