//! Argument chips: the clickable markers that stand in for `[[name]]` in a
//! card title and open a popover describing the argument.

use crate::card::ArgumentDefinition;
use crate::registry::{DetailRow, describe};
use crate::utility::format_value;

// ----------------- State machine -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipEvent<'k> {
    /// Pointer click on the chip.
    Click,
    /// Key pressed while the chip has focus.
    Key(&'k str),
    /// Interaction with the overlay behind an open popover.
    Dismiss,
}

/// Whether an event may reach the surfaces enclosing the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

// ----------------- Popover content -----------------

/// Everything an open chip shows about its argument, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipDetails {
    pub name: String,
    pub required: bool,
    pub type_label: String,
    pub description: String,
    pub default_value: Option<String>,
    pub rows: Vec<DetailRow>,
}

impl ChipDetails {
    pub fn for_argument(arg: &ArgumentDefinition, lang: &str) -> Self {
        let descriptor = describe(&arg.kind);
        Self {
            name: arg.name.clone(),
            required: arg.is_required(),
            rows: descriptor.derive_details(arg, lang),
            type_label: descriptor.label.into_owned(),
            description: descriptor.description.into_owned(),
            default_value: arg.value.as_ref().map(format_value),
        }
    }

    pub fn badge(&self) -> &'static str {
        if self.required { "Required" } else { "Optional" }
    }
}

// ----------------- Chip -----------------

#[derive(Debug, Clone)]
pub struct ArgChip<'a> {
    arg: &'a ArgumentDefinition,
    display_text: &'a str,
    lang: String,
    state: ChipState,
}

impl<'a> ArgChip<'a> {
    pub fn new(arg: &'a ArgumentDefinition, display_text: &'a str, lang: &str) -> Self {
        Self {
            arg,
            display_text,
            lang: lang.to_string(),
            state: ChipState::Closed,
        }
    }

    pub fn argument(&self) -> &'a ArgumentDefinition {
        self.arg
    }

    pub fn display_text(&self) -> &'a str {
        self.display_text
    }

    pub fn state(&self) -> ChipState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ChipState::Open
    }

    pub fn is_optional(&self) -> bool {
        !self.arg.is_required()
    }

    /// Click or keyboard activation: toggles between closed and open.
    pub fn activate(&mut self) -> ChipState {
        self.state = match self.state {
            ChipState::Closed => ChipState::Open,
            ChipState::Open => ChipState::Closed,
        };
        self.state
    }

    pub fn dismiss(&mut self) {
        self.state = ChipState::Closed;
    }

    /// Activations are consumed here so enclosing clickable surfaces don't also react.
    pub fn handle(&mut self, event: ChipEvent<'_>) -> Propagation {
        match event {
            ChipEvent::Click | ChipEvent::Key("Enter") => {
                self.activate();
                Propagation::Stop
            }
            ChipEvent::Key(_) => Propagation::Continue,
            ChipEvent::Dismiss => {
                self.dismiss();
                Propagation::Continue
            }
        }
    }

    /// Popover content; `None` while closed.
    pub fn details(&self) -> Option<ChipDetails> {
        self.is_open()
            .then(|| ChipDetails::for_argument(self.arg, &self.lang))
    }
}

// ----------------- Owning container -----------------

/// The chips of one rendered card. Each chip keeps its own state; the set
/// only routes overlay dismissals to whichever chips are open.
#[derive(Debug, Clone, Default)]
pub struct ChipSet<'a> {
    chips: Vec<ArgChip<'a>>,
}

impl<'a> ChipSet<'a> {
    pub fn new() -> Self {
        Self { chips: Vec::new() }
    }

    /// Adds a chip and returns its index.
    pub fn push(&mut self, chip: ArgChip<'a>) -> usize {
        self.chips.push(chip);
        self.chips.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ArgChip<'a>> {
        self.chips.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ArgChip<'a>> {
        self.chips.get_mut(index)
    }

    /// First chip bound to the argument called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.chips.iter().position(|chip| chip.arg.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgChip<'a>> {
        self.chips.iter()
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Delivers an event to one chip. Unknown indices are ignored.
    pub fn handle(&mut self, index: usize, event: ChipEvent<'_>) -> Propagation {
        match self.chips.get_mut(index) {
            Some(chip) => chip.handle(event),
            None => Propagation::Continue,
        }
    }

    /// Overlay interaction: closes every open chip.
    pub fn dismiss_open(&mut self) {
        for chip in self.chips.iter_mut().filter(|chip| chip.is_open()) {
            chip.handle(ChipEvent::Dismiss);
        }
    }

    pub fn open_chips(&self) -> impl Iterator<Item = &ArgChip<'a>> {
        self.chips.iter().filter(|chip| chip.is_open())
    }
}
