use dioxus::prelude::*;

use crate::components::icons::SpinnerIcon;

#[derive(Props, Clone, PartialEq)]
pub struct RemoteImageProps {
    pub src: String,
    pub alt: String,
    /// Hides the spinner and reveals the image.
    pub loaded: bool,
    /// Classes of the positioned frame holding spinner and image.
    #[props(default)]
    pub frame_class: String,
    #[props(default)]
    pub spinner_class: String,
    pub on_load: EventHandler<()>,
    pub on_error: EventHandler<()>,
}

/// An image fetched over the network with a spinner over it until the
/// owner reports it settled.
///
/// The load state itself lives with the owner (see
/// [`ImageLoad`](crate::card_state::ImageLoad)); this only forwards the
/// element's load and error events.
#[allow(non_snake_case)]
pub fn RemoteImage(props: RemoteImageProps) -> Element {
    let visibility = if props.loaded { "revealed" } else { "concealed" };

    rsx! {
        div {
            class: "remote-image {props.frame_class}",
            if !props.loaded {
                div {
                    class: "spinner-overlay",
                    SpinnerIcon { class: props.spinner_class.clone() }
                }
            }
            img {
                src: "{props.src}",
                alt: "{props.alt}",
                class: "{visibility}",
                onload: move |_| props.on_load.call(()),
                onerror: move |_| props.on_error.call(()),
            }
        }
    }
}
