use pretty_assertions::assert_eq;
use serde_json::json;

use crate::card::{AppMeta, ArgumentDefinition, CardDefinition, LocalizedString, OutputToken};
use crate::compose::{ComposeOptions, FlowCardComposer, TitleNode};
use crate::render;

fn todoist() -> AppMeta {
    AppMeta {
        name: LocalizedString::from([("en", "Todoist"), ("nl", "Todoist NL")]),
        brand_color: "#E44332".to_string(),
    }
}

fn create_task() -> CardDefinition {
    CardDefinition {
        id: Some("create_task".to_string()),
        title: LocalizedString::from([("en", "Create task"), ("nl", "Maak taak")]),
        title_formatted: Some(LocalizedString::from([
            ("en", "Create task [[content]] in project [[project]]"),
            ("nl", "Maak taak [[content]] in project [[project]]"),
        ])),
        hint: Some(LocalizedString::from([("en", "Creates a **new** task.")])),
        args: vec![
            ArgumentDefinition {
                title: Some(LocalizedString::from([("en", "Content"), ("nl", "Inhoud")])),
                value: Some(json!("Groceries")),
                ..ArgumentDefinition::new("content", "text")
            },
            ArgumentDefinition {
                placeholder: Some(LocalizedString::from([("en", "Project")])),
                required: Some(false),
                ..ArgumentDefinition::new("project", "autocomplete")
            },
        ],
        tokens: vec![OutputToken {
            name: "task_id".to_string(),
            kind: "string".to_string(),
            title: LocalizedString::from([("en", "Task ID")]),
            example: Some(LocalizedString::from([("en", "123")])),
        }],
        ..Default::default()
    }
}

fn options(lang: &str) -> ComposeOptions {
    ComposeOptions {
        lang: lang.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_absent_card_renders_nothing() {
    let app = todoist();
    assert!(FlowCardComposer::new(&app).compose(None, &options("en")).is_none());
}

#[test]
fn test_compose_title_and_decoration() {
    let app = todoist();
    let card = create_task();
    let rendered = FlowCardComposer::new(&app)
        .compose(Some(&card), &options("nl"))
        .unwrap();

    assert_eq!(rendered.id, Some("create_task"));
    assert_eq!(rendered.owner.as_deref(), Some("Todoist NL"));
    assert_eq!(rendered.title_source, "Maak taak [[content]] in project [[project]]");
    assert_eq!(rendered.title_text(), "Maak taak Inhoud in project Project");
    assert_eq!(
        rendered.title,
        vec![
            TitleNode::Text("Maak taak "),
            TitleNode::Chip(0),
            TitleNode::Text(" in project "),
            TitleNode::Chip(1),
        ]
    );
    // no nl hint, falls back to en
    assert_eq!(rendered.hint, Some("Creates a **new** task."));
    assert_eq!(rendered.icon.url, "/img/icon.svg");
    assert_eq!(rendered.icon.color, "#E44332");
    assert_eq!(rendered.tokens[0].title.as_deref(), Some("Task ID"));
    assert_eq!(rendered.tokens[0].example.as_deref(), Some("123"));
}

#[test]
fn test_icon_color_override() {
    let app = todoist();
    let card = create_task();
    let opts = ComposeOptions {
        icon_url: "/img/todoist.svg".to_string(),
        icon_color: Some("#000".to_string()),
        clamp_title: true,
        ..Default::default()
    };
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &opts).unwrap();

    assert_eq!(rendered.icon.url, "/img/todoist.svg");
    assert_eq!(rendered.icon.color, "#000");
    assert!(rendered.clamp_title);
}

#[test]
fn test_title_falls_back_to_plain_title() {
    let app = todoist();
    let card = CardDefinition {
        title: LocalizedString::from([("en", "It is raining")]),
        ..Default::default()
    };
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("de")).unwrap();
    assert_eq!(rendered.title, vec![TitleNode::Text("It is raining")]);
    assert!(rendered.chips.is_empty());
}

#[test]
fn test_title_formatted_en_beats_title_in_lang() {
    let app = todoist();
    let card = CardDefinition {
        title: LocalizedString::from([("nl", "Het regent")]),
        title_formatted: Some(LocalizedString::from([("en", "It rains [[amount]]")])),
        ..Default::default()
    };
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("nl")).unwrap();
    assert_eq!(rendered.title_source, "It rains [[amount]]");
}

#[test]
fn test_empty_title_composes_empty() {
    let app = AppMeta::default();
    let card = CardDefinition::default();
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();
    assert!(rendered.title.is_empty());
    assert_eq!(rendered.owner, None);
    assert_eq!(rendered.hint, None);
}

#[test]
fn test_dangling_placeholder_is_inert() {
    let app = todoist();
    let card = CardDefinition {
        title: LocalizedString::from([("en", "Do [[missing]]")]),
        ..Default::default()
    };
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();
    assert_eq!(rendered.title, vec![TitleNode::Text("Do "), TitleNode::Inert("missing")]);
    assert_eq!(render::text(&rendered), "Todoist\nDo [missing]\n");
}

#[test]
fn test_activate_and_dismiss_through_card() {
    let app = todoist();
    let card = create_task();
    let mut rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();

    assert!(rendered.activate("content"));
    assert!(!rendered.activate("nope"));
    assert_eq!(rendered.chips.open_chips().count(), 1);

    // second activation closes
    rendered.activate("content");
    assert_eq!(rendered.chips.open_chips().count(), 0);

    rendered.activate("content");
    rendered.activate("project");
    rendered.dismiss();
    assert_eq!(rendered.chips.open_chips().count(), 0);
}

#[test]
fn test_text_rendering_with_open_chip() {
    let app = todoist();
    let card = create_task();
    let mut rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();
    rendered.activate("content");

    let expected = "\
Todoist
Create task [Content] in project [Project?]
  + content (Required)
  | Type: Text
  | Free text input. Supports text, number, and boolean tokens.
  | Default: Groceries
  i Creates a **new** task.
  token task_id (string): Task ID e.g. 123
";
    assert_eq!(render::text(&rendered), expected);
}

#[test]
fn test_html_rendering() {
    let app = todoist();
    let card = create_task();
    let mut rendered = FlowCardComposer::new(&app)
        .compose(
            Some(&card),
            &ComposeOptions {
                clamp_title: true,
                ..Default::default()
            },
        )
        .unwrap();

    let closed = render::html(&rendered);
    assert!(closed.contains(r#"<div class="title-clamped">"#));
    assert!(closed.contains("background-color: #E44332"));
    assert!(closed.contains(r#"<span class="arg arg-optional" role="button" tabindex="0" data-arg="project">Project</span>"#));
    assert!(!closed.contains("arg-popover"));
    assert!(closed.contains("<strong>new</strong>"));

    rendered.activate("project");
    let open = render::html(&rendered);
    assert!(open.contains("arg arg-optional arg-active"));
    assert!(open.contains(r#"<span class="arg-popover-badge arg-popover-badge-optional">Optional</span>"#));
    assert!(open.contains(r#"<span class="arg-popover-value">Autocomplete</span>"#));
}

#[test]
fn test_html_escapes_text() {
    let app = todoist();
    let card = CardDefinition {
        title: LocalizedString::from([("en", "If <b> & [[x]]")]),
        args: vec![ArgumentDefinition {
            title: Some(LocalizedString::from([("en", "\"quoted\"")])),
            ..ArgumentDefinition::new("x", "text")
        }],
        ..Default::default()
    };
    let rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();
    let html = render::html(&rendered);
    assert!(html.contains("If &lt;b&gt; &amp; "));
    assert!(html.contains("&quot;quoted&quot;"));
}

#[test]
fn test_range_chip_details_end_to_end() {
    let app = todoist();
    let card = CardDefinition {
        title: LocalizedString::from([("en", "Dim to [[level]]")]),
        args: vec![ArgumentDefinition {
            min: Some(0.0),
            max: Some(100.0),
            step: Some(5.0),
            label: Some("%".to_string()),
            ..ArgumentDefinition::new("level", "range")
        }],
        duration: true,
        droptoken: vec!["number".to_string()],
        ..Default::default()
    };
    let mut rendered = FlowCardComposer::new(&app).compose(Some(&card), &options("en")).unwrap();
    rendered.activate("level");

    let text = render::text(&rendered);
    assert!(text.contains("  | Min: 0\n  | Max: 100\n  | Step: 5\n  | Unit: %\n"));
    assert!(text.contains("  supports duration\n"));
    assert!(text.contains("  droptoken: number\n"));
}
