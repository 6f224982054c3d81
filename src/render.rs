//! Presentation layers for a [`RenderedCard`]: a plain-text form for the
//! terminal and an HTML fragment for documentation pages.

use std::fmt::Write;

use crate::chip::{ArgChip, ChipDetails};
use crate::compose::{RenderedCard, TitleNode};
use crate::utility::escape_html;

// ----------------- Plain text -----------------

/// Chips are written as `[text]` (`[text?]` when optional); open chips get
/// their popover printed under the title.
pub fn text(card: &RenderedCard<'_>) -> String {
    let mut out = String::new();

    if let Some(owner) = &card.owner {
        out.push_str(owner);
        out.push('\n');
    }

    for node in &card.title {
        match node {
            TitleNode::Text(text) => out.push_str(text),
            TitleNode::Inert(text) => {
                let _ = write!(out, "[{}]", text);
            }
            TitleNode::Chip(index) => {
                if let Some(chip) = card.chips.get(*index) {
                    let marker = if chip.is_optional() { "?" } else { "" };
                    let _ = write!(out, "[{}{}]", chip.display_text(), marker);
                }
            }
        }
    }
    out.push('\n');

    for details in card.chips.open_chips().filter_map(ArgChip::details) {
        text_popover(&mut out, &details);
    }

    if let Some(hint) = card.hint {
        let _ = writeln!(out, "  i {}", hint);
    }
    if card.duration {
        out.push_str("  supports duration\n");
    }
    if !card.droptoken.is_empty() {
        let _ = writeln!(out, "  droptoken: {}", card.droptoken.join(", "));
    }
    for token in &card.tokens {
        let _ = write!(out, "  token {} ({})", token.name, token.kind);
        if let Some(title) = &token.title {
            let _ = write!(out, ": {}", title);
        }
        if let Some(example) = &token.example {
            let _ = write!(out, " e.g. {}", example);
        }
        out.push('\n');
    }

    out
}

fn text_popover(out: &mut String, details: &ChipDetails) {
    let _ = writeln!(out, "  + {} ({})", details.name, details.badge());
    let _ = writeln!(out, "  | Type: {}", details.type_label);
    let _ = writeln!(out, "  | {}", details.description);
    if let Some(value) = &details.default_value {
        let _ = writeln!(out, "  | Default: {}", value);
    }
    for row in &details.rows {
        let _ = writeln!(out, "  | {}: {}", row.label, row.value);
    }
}

// ----------------- HTML -----------------

pub fn html(card: &RenderedCard<'_>) -> String {
    let mut out = String::new();

    out.push_str(r#"<div class="flowcard-container"><div class="flowcard">"#);
    let _ = write!(
        out,
        r#"<div class="icon" style="background-color: {color}"><div class="icon-inner" style="mask-image: url({url}); -webkit-mask-image: url({url})"></div></div>"#,
        color = escape_html(&card.icon.color),
        url = escape_html(&card.icon.url),
    );

    out.push_str(r#"<div class="text">"#);
    let _ = write!(
        out,
        r#"<div class="owner">{}</div>"#,
        escape_html(card.owner.as_deref().unwrap_or(""))
    );
    let title_class = if card.clamp_title { "title-clamped" } else { "title" };
    let _ = write!(out, r#"<div class="{}">"#, title_class);
    for node in &card.title {
        match node {
            TitleNode::Text(text) => out.push_str(&escape_html(text)),
            TitleNode::Inert(text) => {
                let _ = write!(out, r#"<span class="arg">{}</span>"#, escape_html(text));
            }
            TitleNode::Chip(index) => {
                if let Some(chip) = card.chips.get(*index) {
                    html_chip(&mut out, chip);
                }
            }
        }
    }
    out.push_str("</div></div>");

    if let Some(hint) = card.hint {
        let _ = write!(
            out,
            r#"<div class="tooltip-wrapper"><div class="tooltip-icon">i</div><div class="tooltip"><div class="tooltip-text">{}</div></div></div>"#,
            markdown::to_html(hint)
        );
    }

    out.push_str("</div></div>");
    out
}

fn html_chip(out: &mut String, chip: &ArgChip<'_>) {
    let mut classes = String::from("arg");
    if chip.is_optional() {
        classes.push_str(" arg-optional");
    }
    if chip.is_open() {
        classes.push_str(" arg-active");
    }

    let _ = write!(
        out,
        r#"<span class="arg-wrapper"><span class="{}" role="button" tabindex="0" data-arg="{}">{}</span>"#,
        classes,
        escape_html(&chip.argument().name),
        escape_html(chip.display_text())
    );

    if let Some(details) = chip.details() {
        out.push_str(r#"<div class="arg-overlay"></div><div class="arg-popover">"#);
        let badge_class = if details.required {
            "arg-popover-badge"
        } else {
            "arg-popover-badge arg-popover-badge-optional"
        };
        let _ = write!(
            out,
            r#"<div class="arg-popover-header"><span class="arg-popover-name">{}</span><span class="{}">{}</span></div>"#,
            escape_html(&details.name),
            badge_class,
            details.badge()
        );
        html_row(out, "Type", &details.type_label);
        let _ = write!(
            out,
            r#"<div class="arg-popover-description">{}</div>"#,
            escape_html(&details.description)
        );
        if let Some(value) = &details.default_value {
            html_row(out, "Default", value);
        }
        for row in &details.rows {
            html_row(out, row.label, &row.value);
        }
        out.push_str("</div>");
    }

    out.push_str("</span>");
}

fn html_row(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        r#"<div class="arg-popover-row"><span class="arg-popover-label">{}</span><span class="arg-popover-value">{}</span></div>"#,
        escape_html(label),
        escape_html(value)
    );
}
