//! Argument type registry.
//!
//! Maps an argument's `type` tag to a display label, a one-line description
//! and a function that derives extra `label: value` rows from the argument's
//! configuration. The table is a constant; unknown tags get a synthesized
//! descriptor so [`describe`] never fails.

use std::borrow::Cow;

use tracing::trace;

use crate::card::ArgumentDefinition;
use crate::locale::resolve_first;
use crate::utility::{capitalize_first, format_number};

// ----------------- Descriptor -----------------

/// One `label: value` line shown in an argument's popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

pub type DetailDeriver = fn(&ArgumentDefinition, &str) -> Vec<DetailRow>;

#[derive(Debug, Clone)]
pub struct ArgTypeDescriptor {
    pub label: Cow<'static, str>,
    pub description: Cow<'static, str>,
    deriver: DetailDeriver,
}

impl ArgTypeDescriptor {
    const fn builtin(label: &'static str, description: &'static str, deriver: DetailDeriver) -> Self {
        Self {
            label: Cow::Borrowed(label),
            description: Cow::Borrowed(description),
            deriver,
        }
    }

    fn fallback(tag: &str) -> Self {
        Self {
            label: Cow::Owned(capitalize_first(tag)),
            description: Cow::Owned(format!("Input of type \"{}\".", tag)),
            deriver: no_details,
        }
    }

    /// Rows for the fields `arg` actually sets, in display order.
    pub fn derive_details(&self, arg: &ArgumentDefinition, lang: &str) -> Vec<DetailRow> {
        (self.deriver)(arg, lang)
    }
}

// ----------------- Table -----------------

static ARG_TYPES: &[(&str, ArgTypeDescriptor)] = &[
    (
        "text",
        ArgTypeDescriptor::builtin(
            "Text",
            "Free text input. Supports text, number, and boolean tokens.",
            no_details,
        ),
    ),
    (
        "autocomplete",
        ArgTypeDescriptor::builtin("Autocomplete", "Text input with autocomplete suggestions.", no_details),
    ),
    (
        "number",
        ArgTypeDescriptor::builtin("Number", "Numeric input. Supports tokens.", number_details),
    ),
    (
        "range",
        ArgTypeDescriptor::builtin("Range", "Slider with min/max values.", range_details),
    ),
    (
        "date",
        ArgTypeDescriptor::builtin("Date", "Date picker (dd-mm-yyyy).", no_details),
    ),
    (
        "time",
        ArgTypeDescriptor::builtin("Time", "Time picker (HH:mm).", no_details),
    ),
    (
        "dropdown",
        ArgTypeDescriptor::builtin("Dropdown", "Select one option from a list.", dropdown_details),
    ),
    (
        "multiselect",
        ArgTypeDescriptor::builtin(
            "Multiselect",
            "Select multiple options from a list.",
            multiselect_details,
        ),
    ),
    (
        "checkbox",
        ArgTypeDescriptor::builtin(
            "Checkbox",
            "Boolean toggle (true/false). Supports boolean tokens.",
            no_details,
        ),
    ),
    (
        "color",
        ArgTypeDescriptor::builtin(
            "Color",
            "Color picker. Returns HEX value (e.g., #FF0000).",
            no_details,
        ),
    ),
    (
        "device",
        ArgTypeDescriptor::builtin("Device", "Device selector.", device_details),
    ),
];

/// Descriptor for a type tag. Total: unknown tags get a synthesized one.
pub fn describe(tag: &str) -> ArgTypeDescriptor {
    match ARG_TYPES.iter().find(|(known, _)| *known == tag) {
        Some((_, descriptor)) => descriptor.clone(),
        None => {
            trace!(tag, "no registered argument type, synthesizing descriptor");
            ArgTypeDescriptor::fallback(tag)
        }
    }
}

/// Whether `tag` has a built-in descriptor.
pub fn is_known(tag: &str) -> bool {
    ARG_TYPES.iter().any(|(known, _)| *known == tag)
}

// ----------------- Detail derivation -----------------

fn no_details(_arg: &ArgumentDefinition, _lang: &str) -> Vec<DetailRow> {
    Vec::new()
}

fn bounds(arg: &ArgumentDefinition) -> Vec<DetailRow> {
    [("Min", arg.min), ("Max", arg.max), ("Step", arg.step)]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| DetailRow::new(label, format_number(v))))
        .collect()
}

fn number_details(arg: &ArgumentDefinition, _lang: &str) -> Vec<DetailRow> {
    bounds(arg)
}

fn range_details(arg: &ArgumentDefinition, _lang: &str) -> Vec<DetailRow> {
    let mut details = bounds(arg);
    if let Some(unit) = arg.label.as_deref().filter(|unit| !unit.is_empty()) {
        details.push(DetailRow::new("Unit", unit));
    }
    if let Some(multiplier) = arg.label_multiplier {
        details.push(DetailRow::new("Multiplier", format_number(multiplier)));
    }
    if let Some(decimals) = arg.label_decimals {
        details.push(DetailRow::new("Decimals", format_number(decimals)));
    }
    details
}

/// `label` is tried before `title` for options, the other way round from argument titles.
fn option_list(arg: &ArgumentDefinition, lang: &str) -> Option<DetailRow> {
    if arg.values.is_empty() {
        return None;
    }
    let options = arg
        .values
        .iter()
        .map(|option| {
            resolve_first(&[option.label.as_ref(), option.title.as_ref()], lang)
                .unwrap_or(option.id.as_str())
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(DetailRow::new("Options", options))
}

fn dropdown_details(arg: &ArgumentDefinition, lang: &str) -> Vec<DetailRow> {
    option_list(arg, lang).into_iter().collect()
}

fn multiselect_details(arg: &ArgumentDefinition, lang: &str) -> Vec<DetailRow> {
    let mut details: Vec<DetailRow> = option_list(arg, lang).into_iter().collect();
    if let Some(conjunction) = arg.conjunction.as_deref().filter(|c| !c.is_empty()) {
        details.push(DetailRow::new("Conjunction", conjunction));
    }
    details
}

fn device_details(arg: &ArgumentDefinition, _lang: &str) -> Vec<DetailRow> {
    arg.filter
        .as_deref()
        .filter(|filter| !filter.is_empty())
        .map(|filter| DetailRow::new("Filter", filter))
        .into_iter()
        .collect()
}
