pub mod components;
pub mod forms;
pub mod pages;

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::AuthClient;
use crate::config::ServiceConfig;
use crate::services::{AuthState, Session, SessionKind, SessionManager, Toasts};
use components::{Sidebar, Spinner, ToastHost};
use pages::{
    BooksPage, DashboardPage, NotFound, RecommendationsPage, ReviewsPage, SignInPage, SignUpPage,
};

/// Username handed from sign-up to sign-in for prefilling.
#[derive(Clone, Copy)]
pub struct PrefillUsername(pub RwSignal<Option<String>>);

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ServiceConfig::default();
    provide_context(config.clone());

    #[cfg(target_arch = "wasm32")]
    let store: Box<dyn crate::services::KeyValueStore> =
        Box::new(crate::services::storage::BrowserStore::new());
    #[cfg(not(target_arch = "wasm32"))]
    let store: Box<dyn crate::services::KeyValueStore> =
        Box::new(crate::services::MemoryStore::default());

    let session = Session::new(SessionManager::new(store));
    provide_context(session.clone());
    provide_context(Toasts::new());
    provide_context(PrefillUsername(RwSignal::new(None)));

    // Revalidate any persisted token before rendering protected pages.
    // Offline tokens have no remote counterpart; the expiry check in
    // `stored_token` is all the validation they get.
    match session.manager().stored_token(Utc::now()) {
        Some(stored) if stored.kind == SessionKind::Offline => {
            session.kind.set(Some(SessionKind::Offline));
            session.state.set(AuthState::Authenticated);
        }
        Some(stored) => {
            session.state.set(AuthState::Validating);
            let auth_client = AuthClient::new(config);
            let session = session.clone();
            spawn_local(async move {
                match auth_client.validate(&stored.token).await {
                    Ok(()) => {
                        session.kind.set(Some(SessionKind::Remote));
                        session.state.set(AuthState::Authenticated);
                    }
                    Err(err) => {
                        log::warn!("stored token rejected: {err}");
                        session.manager().clear_session();
                        session.state.set(AuthState::Unauthenticated);
                    }
                }
            });
        }
        None => {}
    }

    view! {
        <Title text="Book Dashboard — Management System" />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/signup") view=SignUpPage />
                    <ParentRoute path=path!("") view=Shell>
                        <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path=path!("dashboard") view=DashboardPage />
                        <Route path=path!("books") view=BooksPage />
                        <Route path=path!("recommendations") view=RecommendationsPage />
                        <Route path=path!("reviews") view=ReviewsPage />
                    </ParentRoute>
                </Routes>
            </main>
        </Router>

        <ToastHost />
    }
}

/// Authenticated chrome: sidebar plus the routed page. Anyone without a
/// session is sent to sign-in; a session still being validated shows a
/// full-page spinner instead of flashing the login form.
#[component]
fn Shell() -> impl IntoView {
    let session = expect_context::<Session>();
    let collapsed = RwSignal::new(false);

    view! {
        {move || match session.state.get() {
            AuthState::Validating => view! {
                <div class="min-h-screen bg-slate-950">
                    <Spinner tip="Checking your session..." />
                </div>
            }
            .into_any(),
            AuthState::Unauthenticated => view! { <Redirect path="/signin" /> }.into_any(),
            AuthState::Authenticated => view! {
                <div class="flex min-h-screen bg-slate-950">
                    <Sidebar collapsed=collapsed />
                    <div class="flex-1 min-w-0">
                        <OfflineBanner />
                        <Outlet />
                    </div>
                </div>
            }
            .into_any(),
        }}
    }
}

/// Visible marker that the session was fabricated locally.
#[component]
fn OfflineBanner() -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <Show when=move || session.kind.get() == Some(SessionKind::Offline) fallback=|| ()>
            <div class="bg-amber-500/15 border-b border-amber-500/30 text-amber-300 text-sm text-center py-1.5">
                "Demo mode — you are working against locally stored data."
            </div>
        </Show>
    }
}
