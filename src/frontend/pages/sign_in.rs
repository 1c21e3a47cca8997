//! Sign-in: remote auth with an explicit offline fallback, remember-me,
//! and the client-side lockout counter.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::AuthClient;
use crate::common::ApiError;
use crate::config::{AuthMode, ServiceConfig};
use crate::frontend::components::{
    Button, ErrorAlert, PasswordInput, TextInput, WarningAlert,
};
use crate::frontend::forms::SignInForm;
use crate::frontend::PrefillUsername;
use crate::services::lockout::remaining_label;
use crate::services::{AttemptOutcome, Session, SessionKind, Toasts};
use crate::types::LoginRequest;

/// User-facing message for a rejected remote login.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, body } => match status {
            400 => "Invalid username or password.".to_string(),
            401 => "Invalid credentials. Please check your username and password.".to_string(),
            403 => "Account access denied. Please contact support.".to_string(),
            404 => "User not found. Please check your username or sign up.".to_string(),
            429 => "Too many login attempts. Please try again later.".to_string(),
            500 => "Server error. Please try again later.".to_string(),
            _ => body
                .clone()
                .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string()),
        },
        ApiError::Transport(_) => {
            "Network error. Please check your internet connection.".to_string()
        }
        ApiError::Decode(_) => "Login failed. Please check your credentials.".to_string(),
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let auth_client = AuthClient::new(config.clone());
    let auth_mode = config.auth_mode;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let remember_me = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let lockout_end = RwSignal::new(session.manager().active_lockout(Utc::now()));
    let now = RwSignal::new(Utc::now());

    // Prefill from a just-finished sign-up, otherwise from remember-me.
    let handed_over = use_context::<PrefillUsername>().and_then(|slot| {
        let name = slot.0.get_untracked();
        slot.0.set(None);
        name
    });
    match handed_over {
        Some(prefill) => set_username.set(prefill),
        None => {
            if let Some(remembered) = session.manager().remembered_username() {
                set_username.set(remembered);
                remember_me.set(true);
            }
        }
    }

    // One-second tick drives the countdown and lifts the lockout on time.
    if let Ok(handle) = set_interval_with_handle(
        move || now.set(Utc::now()),
        std::time::Duration::from_secs(1),
    ) {
        on_cleanup(move || handle.clear());
    }
    Effect::new({
        let session = session.clone();
        move |_| {
            let tick = now.get();
            if lockout_end.get_untracked().is_some()
                && session.manager().active_lockout(tick).is_none()
            {
                lockout_end.set(None);
                error.set(None);
            }
        }
    });

    let is_locked = move || lockout_end.get().is_some();
    let policy = session.manager().policy();
    let countdown = move || {
        lockout_end
            .get()
            .map(|end| remaining_label(policy.remaining_minutes(end, now.get())))
            .unwrap_or_default()
    };

    let submit = {
        let session = session.clone();
        let toasts = toasts.clone();
        let auth_client = auth_client.clone();
        let navigate = navigate.clone();
        move || {
            if let Some(end) = lockout_end.get_untracked() {
                toasts.error(format!(
                    "Account temporarily locked. Try again in {}.",
                    remaining_label(policy.remaining_minutes(end, Utc::now()))
                ));
                return;
            }

            let form = SignInForm {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            if let Err(errors) = form.validate() {
                error.set(Some(errors.join(" · ")));
                toasts.error("Please fix the form errors before submitting.");
                return;
            }

            loading.set(true);
            error.set(None);

            let session = session.clone();
            let toasts = toasts.clone();
            let auth_client = auth_client.clone();
            let navigate = navigate.clone();
            let request = LoginRequest {
                username: form.username.trim().to_string(),
                password: form.password.clone(),
            };
            let wants_remember = remember_me.get_untracked();

            spawn_local(async move {
                let finish_success = |token: &str, kind: SessionKind| {
                    loading.set(false);
                    if wants_remember {
                        session.manager().remember_username(&request.username);
                    } else {
                        session.manager().forget_username();
                    }
                    session.login_succeeded(token, kind, Utc::now());
                    toasts.success(match kind {
                        SessionKind::Remote => "Welcome back! Login successful.",
                        SessionKind::Offline => "Welcome back! Login successful. (Demo mode)",
                    });
                    navigate("/dashboard", Default::default());
                };

                let register_failure = |message: String| {
                    loading.set(false);
                    match session.manager().record_failed_attempt(Utc::now()) {
                        AttemptOutcome::LockedOut(end) => {
                            lockout_end.set(Some(end));
                            error.set(Some(
                                "Too many failed login attempts. Account locked for 15 minutes for security."
                                    .to_string(),
                            ));
                            toasts.error(
                                "Account temporarily locked due to multiple failed attempts.",
                            );
                        }
                        AttemptOutcome::Remaining(left) => {
                            let message = format!(
                                "{message} ({left} attempt{} remaining)",
                                if left == 1 { "" } else { "s" }
                            );
                            error.set(Some(message.clone()));
                            toasts.error(message);
                        }
                    }
                };

                let offline_login = |register: &dyn Fn(String)| {
                    match session
                        .manager()
                        .verify_mock_credentials(&request.username, &request.password)
                    {
                        Some(user) => {
                            let token = session.manager().issue_offline_token(&user, Utc::now());
                            Some(token)
                        }
                        None => {
                            register("Invalid username or password".to_string());
                            None
                        }
                    }
                };

                match auth_mode {
                    AuthMode::Offline => {
                        if let Some(token) = offline_login(&register_failure) {
                            finish_success(&token, SessionKind::Offline);
                        }
                    }
                    AuthMode::Remote | AuthMode::RemoteWithOfflineFallback => {
                        match auth_client.login(&request).await {
                            Ok(response) => match response.bearer_token() {
                                Some(token) => finish_success(token, SessionKind::Remote),
                                None => register_failure(
                                    "Login failed. Please check your credentials.".to_string(),
                                ),
                            },
                            Err(err) if err.is_transport()
                                && auth_mode == AuthMode::RemoteWithOfflineFallback =>
                            {
                                log::info!("auth service unreachable, using offline sign-in");
                                if let Some(token) = offline_login(&register_failure) {
                                    finish_success(&token, SessionKind::Offline);
                                }
                            }
                            Err(err) => {
                                log::error!("login error: {err}");
                                register_failure(login_error_message(&err));
                            }
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="w-full max-w-md">
                <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <span class="inline-block text-4xl mb-4">"📚"</span>
                        <h1 class="text-2xl font-bold text-white">"Welcome Back"</h1>
                        <p class="text-slate-400 mt-2">"Sign in to your account"</p>
                    </div>

                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <ErrorAlert message=Signal::derive(move || {
                            error.get().unwrap_or_default()
                        }) />
                    </Show>

                    <Show when=is_locked fallback=|| ()>
                        <WarningAlert message=Signal::derive(move || {
                            format!(
                                "For security reasons, this account is locked for {}. Please try again later.",
                                countdown(),
                            )
                        }) />
                    </Show>

                    <form
                        class="space-y-5"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <TextInput
                            label="Username"
                            name="username"
                            placeholder="Enter your username"
                            required=true
                            disabled=Signal::derive(is_locked)
                            value=username
                            set_value=set_username
                        />
                        <PasswordInput
                            label="Password"
                            disabled=Signal::derive(is_locked)
                            value=password
                            set_value=set_password
                        />

                        <label class="flex items-center gap-2 text-sm text-slate-300">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                                disabled=is_locked
                                class="rounded border-slate-700 bg-slate-800"
                            />
                            "Remember me"
                        </label>

                        <Button
                            button_type="submit"
                            loading=loading
                            disabled=Signal::derive(is_locked)
                        >
                            {move || if loading.get() { "Signing In..." } else { "Sign In" }}
                        </Button>
                    </form>

                    <div class="mt-6 pt-6 border-t border-slate-800 text-center">
                        <p class="text-sm text-slate-400">"Don't have an account?"</p>
                        <a href="/signup" class="text-orange-400 hover:text-orange-300 font-medium">
                            "Create New Account"
                        </a>
                    </div>

                    <p class="mt-6 text-xs text-slate-500">
                        <span class="font-semibold">"Demo Mode: "</span>
                        "If the server is unavailable, the app will automatically switch to demo mode using local storage."
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message_maps_statuses() {
        let unauthorized = ApiError::Status {
            status: 401,
            body: None,
        };
        assert!(login_error_message(&unauthorized).starts_with("Invalid credentials"));

        let server = ApiError::Status {
            status: 500,
            body: None,
        };
        assert!(login_error_message(&server).starts_with("Server error"));

        let custom = ApiError::Status {
            status: 418,
            body: Some("teapot".into()),
        };
        assert_eq!(login_error_message(&custom), "teapot");
    }

    #[test]
    fn test_transport_error_reads_as_network_problem() {
        let err = ApiError::Transport("connection refused".into());
        assert!(login_error_message(&err).starts_with("Network error"));
    }
}
