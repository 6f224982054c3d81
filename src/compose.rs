use tracing::debug;

use crate::card::{AppMeta, CardDefinition};
use crate::chip::{ArgChip, ChipEvent, ChipSet, Propagation};
use crate::locale::{resolve, resolve_first};
use crate::parsers::{Segment, TemplateParser};

pub const DEFAULT_ICON_URL: &str = "/img/icon.svg";

// ----------------- Options -----------------

#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub lang: String,
    pub icon_url: String,
    /// Tint behind the icon; the app's brand color when unset.
    pub icon_color: Option<String>,
    /// Clamp the title to two lines.
    pub clamp_title: bool,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            icon_color: None,
            clamp_title: false,
        }
    }
}

// ----------------- Output -----------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleNode<'a> {
    Text(&'a str),
    /// Index into [`RenderedCard::chips`].
    Chip(usize),
    /// A placeholder that names no argument: styled like a chip, not interactive.
    Inert(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardIcon {
    pub url: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToken {
    pub name: String,
    pub kind: String,
    pub title: Option<String>,
    pub example: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RenderedCard<'a> {
    pub id: Option<&'a str>,
    pub owner: Option<String>,
    pub icon: CardIcon,
    /// The resolved template the title was parsed from.
    pub title_source: &'a str,
    pub title: Vec<TitleNode<'a>>,
    pub chips: ChipSet<'a>,
    pub clamp_title: bool,
    pub hint: Option<&'a str>,
    pub tokens: Vec<RenderedToken>,
    pub droptoken: &'a [String],
    pub duration: bool,
}

impl<'a> RenderedCard<'a> {
    /// Title as plain text, chips shown by their display text.
    pub fn title_text(&self) -> String {
        self.title
            .iter()
            .map(|node| match node {
                TitleNode::Text(text) | TitleNode::Inert(text) => *text,
                TitleNode::Chip(index) => self.chips.get(*index).map_or("", ArgChip::display_text),
            })
            .collect()
    }

    /// Activate the chip of the argument called `name`. Returns `false` when
    /// no chip in the title belongs to that argument.
    pub fn activate(&mut self, name: &str) -> bool {
        match self.chips.position(name) {
            Some(index) => self.chips.handle(index, ChipEvent::Click) == Propagation::Stop,
            None => false,
        }
    }

    /// Overlay interaction.
    pub fn dismiss(&mut self) {
        self.chips.dismiss_open();
    }
}

// ----------------- Composer -----------------

pub struct FlowCardComposer<'m> {
    app: &'m AppMeta,
}

impl<'m> FlowCardComposer<'m> {
    pub fn new(app: &'m AppMeta) -> Self {
        Self { app }
    }

    /// Build the renderable card. An absent card renders nothing.
    pub fn compose<'a>(&self, card: Option<&'a CardDefinition>, options: &ComposeOptions) -> Option<RenderedCard<'a>> {
        let card = card?;
        let lang = options.lang.as_str();

        let title_source = resolve_first(&[card.title_formatted.as_ref(), Some(&card.title)], lang).unwrap_or("");
        let segments = TemplateParser::new(&card.args, lang).parse(title_source);
        debug!(
            card = card.id.as_deref().unwrap_or("<anonymous>"),
            segments = segments.len(),
            "composed flow card title"
        );

        let mut chips = ChipSet::new();
        let title = segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal {
                    text,
                    placeholder: false,
                    ..
                } => TitleNode::Text(text),
                Segment::Literal {
                    text,
                    placeholder: true,
                    ..
                } => TitleNode::Inert(text),
                Segment::ArgumentRef {
                    definition,
                    display_text,
                    ..
                } => TitleNode::Chip(chips.push(ArgChip::new(definition, display_text, lang))),
            })
            .collect();

        let tokens = card
            .tokens
            .iter()
            .map(|token| RenderedToken {
                name: token.name.clone(),
                kind: token.kind.clone(),
                title: resolve(Some(&token.title), lang).map(str::to_string),
                example: resolve(token.example.as_ref(), lang).map(str::to_string),
            })
            .collect();

        Some(RenderedCard {
            id: card.id.as_deref(),
            owner: resolve(Some(&self.app.name), lang).map(str::to_string),
            icon: CardIcon {
                url: options.icon_url.clone(),
                color: options
                    .icon_color
                    .clone()
                    .unwrap_or_else(|| self.app.brand_color.clone()),
            },
            title_source,
            title,
            chips,
            clamp_title: options.clamp_title,
            hint: resolve(card.hint.as_ref(), lang),
            tokens,
            droptoken: &card.droptoken,
            duration: card.duration,
        })
    }
}
