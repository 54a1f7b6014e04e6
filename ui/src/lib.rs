// The client-side Dioxus application: the Care4All verification card and
// the small directory shell that hosts it.

use dioxus::prelude::*;
use dioxus_logger::tracing;

pub mod actions;
mod app_state;
pub mod card_state;
pub mod compat;
mod components;
pub mod hooks;
pub mod qr;
mod screens;
pub mod toast;

use app_state::AppState;
use components::pico::Container;
use components::toaster::Toaster;
use model::prefs::card_prefs::CardPrefs;
use model::Directory;
use screens::directory::DirectoryScreen;
use screens::profile::ProfileScreen;

pub use components::verification_card::VerificationCard;
pub use components::verification_card::COPY_FEEDBACK;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        DirectoryScreen {},
        #[route("/ngo/:id")]
        ProfileScreen { id: String },
}

/// Page frame around every route.
#[component]
fn Shell() -> Element {
    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li { strong { "Care4All" } }
                    }
                    ul {
                        li {
                            Link { to: Route::DirectoryScreen {}, "Directory" }
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- OVERLAY --- */
    .overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background-color: rgba(0, 0, 0, 0.5);
    }

    /* --- VERIFICATION CARD --- */
    article.verification-card {
        position: relative;
        width: 100%;
        max-width: 350px;
        max-height: calc(100vh - 2rem);
        overflow-y: auto;
        margin: 0;
        padding: 0;
        background-color: #111827;
        color: #ffffff;
        border: 2px solid #374151;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.35);
    }
    .verification-card > header {
        margin: 0;
        padding: 1rem 1rem 0.75rem;
        background: transparent;
        border-bottom: 1px solid #374151;
    }
    .verification-card > section { margin: 0; padding: 1rem 1rem 0; }
    .verification-card > footer {
        margin: 0;
        padding: 1rem;
        background: transparent;
        border: none;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .verification-card h2.card-title { font-size: 1rem; font-weight: 500; margin: 0; color: #ffffff; }
    .verification-card h3 {
        font-size: 0.875rem;
        font-weight: 500;
        color: #d1d5db;
        margin-bottom: 0.5rem;
        display: flex;
        align-items: center;
        gap: 0.25rem;
    }
    .verification-card .identity { display: flex; align-items: center; gap: 0.75rem; padding-right: 2rem; }

    .close-button {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        z-index: 10;
        padding: 0;
        width: auto;
        margin: 0;
        border: none;
        background: none;
        color: #9ca3af;
    }
    .close-button:hover { color: #ffffff; }

    /* --- REMOTE IMAGES --- */
    .remote-image { position: relative; overflow: hidden; }
    .remote-image img { transition: opacity 0.2s; }
    .remote-image img.concealed { opacity: 0; }
    .remote-image img.revealed { opacity: 1; }
    .spinner-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #9ca3af;
    }
    .logo-frame { width: 3rem; height: 3rem; flex-shrink: 0; border-radius: 0.375rem; background-color: #1f2937; }
    .logo-frame img { width: 100%; height: 100%; object-fit: cover; }
    .qr-row { display: flex; justify-content: center; }
    .qr-frame { min-height: 134px; padding: 0.5rem; border: 1px solid #374151; border-radius: 0.375rem; background-color: #ffffff; }
    .qr-frame .spinner-overlay { background-color: #f3f4f6; }
    .qr-frame img { display: block; width: 130px; height: 130px; }

    /* --- ICONS --- */
    .icon { width: 1rem; height: 1rem; vertical-align: middle; flex-shrink: 0; }
    .icon-lg { width: 1.25rem; height: 1.25rem; }
    .icon-xl { width: 2.5rem; height: 2.5rem; }
    .icon.success, .icon.whatsapp { color: #22c55e; }
    .spin { animation: spin 1s linear infinite; }
    @keyframes spin { to { transform: rotate(360deg); } }

    /* --- CONTROLS --- */
    .badge {
        display: inline-flex;
        align-items: center;
        gap: 0.25rem;
        margin-top: 0.25rem;
        padding: 0.125rem 0.5rem;
        border-radius: 999px;
        font-size: 0.75rem;
        background-color: #4b5563;
        color: #ffffff;
    }
    .badge.verified { background-color: #16a34a; }
    .readonly-group { margin: 0; }
    .readonly-group input { background-color: #1f2937; border-color: #374151; color: #ffffff; }
    .readonly-group input.muted { color: #9ca3af; }
    .contact-list { display: flex; flex-direction: column; gap: 0.5rem; }
    .contact-row { display: flex; align-items: center; }
    .contact-value { flex: 1; display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: #e5e7eb; }
    .contact-value .icon { color: #9ca3af; }
    .contact-value.unavailable { color: #9ca3af; }
    .contact-actions { display: flex; gap: 0.25rem; }
    button.icon-button { width: 2rem; height: 2rem; padding: 0; margin: 0; display: inline-flex; align-items: center; justify-content: center; }
    button.wide { width: 100%; margin: 0; }
    button.report { color: #f87171; }
    .powered-by { display: block; text-align: center; color: #6b7280; font-size: 0.75rem; padding-top: 0.5rem; }

    /* --- SHELL --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        margin: 1rem 0;
    }
    .stat { display: flex; flex-direction: column; }

    /* --- TOASTS --- */
    .toaster {
        position: fixed;
        right: 1rem;
        bottom: 1rem;
        z-index: 100;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        max-width: 22rem;
    }
    .toast {
        position: relative;
        padding: 0.75rem 2.5rem 0.75rem 1rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-background-color);
        box-shadow: var(--pico-card-box-shadow);
        font-size: 0.875rem;
    }
    .toast .close-button { top: 0.6rem; right: 0.6rem; }
    .toast-success { border-left: 4px solid #22c55e; }
    .toast-error { border-left: 4px solid #ef4444; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

fn load_app_state() -> AppState {
    let directory = match Directory::embedded() {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("failed to load the NGO directory: {}", e);
            Directory::default()
        }
    };
    let card_prefs = CardPrefs::from_env();
    tracing::info!("card prefs: {:#?}", card_prefs);

    AppState::new(directory, card_prefs)
}

#[component]
fn AppBody() -> Element {
    let app_state = use_context_provider(load_app_state);
    // The card looks its preferences up on its own, so it also works
    // outside this shell.
    use_context_provider(|| app_state.card_prefs.clone());

    rsx! {
        Router::<Route> {}
        Toaster {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::links;

    #[test]
    fn test_profile_route_matches_link_builder() {
        let route = Route::ProfileScreen {
            id: "ngo42".to_string(),
        };
        assert_eq!(route.to_string(), links::profile_path("ngo42"));
        assert_eq!(Route::DirectoryScreen {}.to_string(), "/");
    }
}
