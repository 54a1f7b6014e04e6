//! Inline stroke icons (Lucide geometry) used by the verification card.

#![allow(non_snake_case)]

use dioxus::prelude::*;

/// 24×24 stroke-icon frame; the shapes are passed as children.
#[component]
fn StrokeIcon(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "icon {class}",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn CopyIcon() -> Element {
    rsx! {
        StrokeIcon {
            rect { x: "9", y: "9", width: "13", height: "13", rx: "2", ry: "2" }
            path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" }
        }
    }
}

#[component]
pub fn CheckCircleIcon(#[props(default)] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn ExternalLinkIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
            polyline { points: "15 3 21 3 21 9" }
            line { x1: "10", y1: "14", x2: "21", y2: "3" }
        }
    }
}

#[component]
pub fn FlagIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z" }
            line { x1: "4", y1: "22", x2: "4", y2: "15" }
        }
    }
}

#[component]
pub fn QrCodeIcon() -> Element {
    rsx! {
        StrokeIcon {
            rect { x: "3", y: "3", width: "5", height: "5", rx: "1" }
            rect { x: "16", y: "3", width: "5", height: "5", rx: "1" }
            rect { x: "3", y: "16", width: "5", height: "5", rx: "1" }
            path { d: "M21 16h-3a2 2 0 0 0-2 2v3" }
            path { d: "M21 21v.01" }
            path { d: "M12 7v3a2 2 0 0 1-2 2H7" }
            path { d: "M3 12h.01" }
            path { d: "M12 3h.01" }
            path { d: "M12 16v.01" }
            path { d: "M16 12h1" }
            path { d: "M21 12v.01" }
            path { d: "M12 21v-1" }
        }
    }
}

#[component]
pub fn PhoneIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        }
    }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! {
        StrokeIcon {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn MapPinIcon() -> Element {
    rsx! {
        StrokeIcon {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        StrokeIcon {
            class: "icon-lg".to_string(),
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}

/// Loader2; spins via the `.spin` animation.
#[component]
pub fn SpinnerIcon(#[props(default)] class: String) -> Element {
    rsx! {
        StrokeIcon {
            class: format!("spin {class}"),
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}

#[component]
pub fn WhatsappIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "icon whatsapp",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path { d: "M17.47 14.38c-.3-.15-1.76-.87-2.03-.97-.27-.1-.47-.15-.67.15-.2.3-.77.97-.94 1.17-.17.2-.35.22-.65.07-.3-.15-1.25-.46-2.39-1.47-.88-.79-1.48-1.76-1.65-2.06-.17-.3-.02-.46.13-.61.13-.13.3-.35.45-.52.15-.17.2-.3.3-.5.1-.2.05-.37-.03-.52-.07-.15-.67-1.61-.92-2.21-.24-.58-.49-.5-.67-.51h-.57c-.2 0-.52.07-.79.37-.27.3-1.04 1.02-1.04 2.48s1.07 2.88 1.21 3.08c.15.2 2.1 3.2 5.08 4.49.71.31 1.26.49 1.7.63.71.23 1.36.2 1.87.12.57-.09 1.76-.72 2.01-1.41.25-.7.25-1.29.17-1.41-.07-.12-.27-.2-.57-.35z" }
            path { d: "M12.04 2C6.58 2 2.13 6.45 2.13 11.91c0 1.75.46 3.45 1.32 4.95L2.05 22l5.25-1.38c1.45.79 3.08 1.21 4.74 1.21 5.46 0 9.91-4.45 9.91-9.91S17.5 2 12.04 2zm0 18.15c-1.48 0-2.93-.4-4.2-1.15l-.3-.18-3.12.82.83-3.04-.2-.31a8.26 8.26 0 0 1-1.26-4.38c0-4.54 3.7-8.24 8.25-8.24 4.54 0 8.24 3.7 8.24 8.24 0 4.55-3.7 8.24-8.24 8.24z" }
        }
    }
}
