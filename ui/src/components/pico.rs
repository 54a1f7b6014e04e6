//! A set of reusable, lifetime-free Dioxus components in the Pico.css style,
//! used as the card's design-system primitives.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

/// A full-viewport dimmed backdrop with its content centered.
///
/// Clicks on the backdrop are ignored; closing is up to the content.
#[component]
pub fn Overlay(children: Element) -> Element {
    rsx! {
        div {
            class: "overlay",
            role: "dialog",
            "aria-modal": "true",
            {children}
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    #[props(default)]
    class: String,
}

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
pub fn Card(props: CardProps) -> Element {
    rsx! { article { class: "{props.class}", {props.children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct AccordionProps {
    title: String,
    children: Element,
}

/// An accordion for showing/hiding content, using the <details> element.
pub fn Accordion(props: AccordionProps) -> Element {
    rsx! {
        details {
            summary { role: "button", class: "outline secondary", "{props.title}" }
            {props.children}
        }
    }
}

/// A small pill label.
#[component]
pub fn Badge(children: Element, #[props(default)] class: String) -> Element {
    rsx! { span { class: "badge {class}", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// Extra classes appended to the Pico ones.
    #[props(default)]
    class: String,
    #[props(optional)]
    title: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let variant = match props.button_type {
        ButtonType::Primary => "",
        ButtonType::Secondary => "secondary",
        ButtonType::Contrast => "contrast",
    };
    let outline = if props.outline { "outline" } else { "" };
    rsx! {
        button {
            class: "{variant} {outline} {props.class}",
            disabled: props.disabled,
            title: props.title.clone(),
            "aria-label": props.title,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// A read-only text field with a trailing action button, Pico's
/// `role="group"` layout.
#[component]
pub fn ReadOnlyInput(value: String, #[props(default)] muted: bool, children: Element) -> Element {
    rsx! {
        div {
            role: "group",
            class: "readonly-group",
            input {
                r#type: "text",
                readonly: true,
                class: if muted { "muted" },
                value: "{value}",
            }
            {children}
        }
    }
}

/// The "×" control in the corner of a card.
#[component]
pub fn CloseButton(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            crate::components::icons::CloseIcon {}
        }
    }
}
