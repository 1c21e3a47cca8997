//! Account creation with the password strength meter and the same
//! remote/offline strategy sign-in uses.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::AuthClient;
use crate::common::{ApiError, AuthFailure};
use crate::config::{AuthMode, ServiceConfig};
use crate::frontend::components::{Button, ErrorAlert, PasswordInput, TextInput};
use crate::frontend::forms::{password_strength, SignUpForm};
use crate::frontend::PrefillUsername;
use crate::services::{Session, Toasts};
use crate::types::SignupRequest;

fn signup_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, body } => {
            let body_text = body.clone().unwrap_or_default();
            match status {
                400 if body_text.contains("Username already exists") => {
                    "This username is already taken. Please choose another one.".to_string()
                }
                400 if body_text.contains("Email already exists") => {
                    "This email is already registered. Please use a different email or sign in."
                        .to_string()
                }
                400 => "Invalid registration data. Please check your inputs.".to_string(),
                409 => "Username or email already exists. Please try different credentials."
                    .to_string(),
                500 => "Server error. Please try again later.".to_string(),
                status => format!("Registration failed ({status}). Please try again."),
            }
        }
        ApiError::Transport(_) => {
            "Network error. Please check your internet connection.".to_string()
        }
        ApiError::Decode(_) => "An unexpected error occurred. Please try again.".to_string(),
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<ServiceConfig>();
    let session = expect_context::<Session>();
    let toasts = expect_context::<Toasts>();
    let navigate = use_navigate();
    let auth_client = AuthClient::new(config.clone());
    let auth_mode = config.auth_mode;
    let prefill = use_context::<PrefillUsername>();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let strength = move || password_strength(&password.get());

    let submit = {
        let session = session.clone();
        let toasts = toasts.clone();
        let auth_client = auth_client.clone();
        let navigate = navigate.clone();
        move || {
            let form = SignUpForm {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm.get_untracked(),
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
            let request = SignupRequest {
                username: form.username.trim().to_string(),
                password: form.password.clone(),
                email: form.email.trim().to_lowercase(),
            };

            spawn_local(async move {
                let finish_success = |demo: bool| {
                    loading.set(false);
                    toasts.success(if demo {
                        "Account created successfully! (Using demo mode)"
                    } else {
                        "Account created successfully! Please sign in."
                    });
                    if let Some(slot) = prefill {
                        slot.0.set(Some(request.username.clone()));
                    }
                    navigate("/signin", Default::default());
                };

                let fail = |message: String| {
                    loading.set(false);
                    error.set(Some(message.clone()));
                    toasts.error(message);
                };

                let offline_signup = || {
                    session.manager().register_mock_user(
                        &request.username,
                        &request.email,
                        &request.password,
                        Utc::now(),
                    )
                };

                match auth_mode {
                    AuthMode::Offline => match offline_signup() {
                        Ok(_) => finish_success(true),
                        Err(AuthFailure::AlreadyExists) => {
                            fail("Username or email already exists".to_string())
                        }
                        Err(err) => fail(err.to_string()),
                    },
                    AuthMode::Remote | AuthMode::RemoteWithOfflineFallback => {
                        match auth_client.signup(&request).await {
                            Ok(()) => finish_success(false),
                            Err(err)
                                if err.is_transport()
                                    && auth_mode == AuthMode::RemoteWithOfflineFallback =>
                            {
                                log::info!("auth service unreachable, using offline sign-up");
                                match offline_signup() {
                                    Ok(_) => finish_success(true),
                                    Err(AuthFailure::AlreadyExists) => {
                                        fail("Username or email already exists".to_string())
                                    }
                                    Err(err) => fail(err.to_string()),
                                }
                            }
                            Err(err) => {
                                log::error!("signup error: {err}");
                                fail(signup_error_message(&err));
                            }
                        }
                    }
                }
            });
        }
    };

    let criteria_row = |met: bool, label: &'static str| {
        view! {
            <li class="flex items-center gap-2 text-xs">
                <span class=if met { "text-emerald-400" } else { "text-slate-600" }>
                    {if met { "✓" } else { "○" }}
                </span>
                <span class=if met { "text-slate-300" } else { "text-slate-500" }>{label}</span>
            </li>
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <div class="w-full max-w-md">
                <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <span class="inline-block text-4xl mb-4">"📚"</span>
                        <h1 class="text-2xl font-bold text-white">"Create Account"</h1>
                        <p class="text-slate-400 mt-2">"Join us today and get started"</p>
                    </div>

                    <Show when=move || error.get().is_some() fallback=|| ()>
                        <ErrorAlert message=Signal::derive(move || {
                            error.get().unwrap_or_default()
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
                            name="new-username"
                            placeholder="Choose a username"
                            required=true
                            value=username
                            set_value=set_username
                        />
                        <TextInput
                            label="Email"
                            name="new-email"
                            placeholder="you@example.com"
                            input_type="email"
                            required=true
                            value=email
                            set_value=set_email
                        />
                        <PasswordInput
                            label="Password"
                            name="new-password"
                            value=password
                            set_value=set_password
                        />

                        <Show when=move || !password.get().is_empty() fallback=|| ()>
                            <div>
                                <div class="flex items-center gap-3 mb-2">
                                    <div class="flex-1 h-2 bg-slate-800 rounded-full overflow-hidden">
                                        <div
                                            class=move || {
                                                let color = match strength().percent() {
                                                    0..=39 => "bg-red-500",
                                                    40..=79 => "bg-amber-500",
                                                    _ => "bg-emerald-500",
                                                };
                                                format!("h-full transition-all {color}")
                                            }
                                            style:width=move || format!("{}%", strength().percent())
                                        ></div>
                                    </div>
                                    <span class="text-xs text-slate-400">
                                        {move || strength().label()}
                                    </span>
                                </div>
                                <ul class="space-y-1">
                                    {move || {
                                        let report = strength();
                                        vec![
                                            criteria_row(report.length, "At least 8 characters"),
                                            criteria_row(report.uppercase, "One uppercase letter"),
                                            criteria_row(report.lowercase, "One lowercase letter"),
                                            criteria_row(report.number, "One number"),
                                            criteria_row(report.special, "One special character"),
                                        ]
                                    }}
                                </ul>
                            </div>
                        </Show>

                        <PasswordInput
                            label="Confirm Password"
                            name="confirm-password"
                            value=confirm
                            set_value=set_confirm
                        />

                        <Button button_type="submit" loading=loading>
                            {move || if loading.get() { "Creating Account..." } else { "Create Account" }}
                        </Button>
                    </form>

                    <div class="mt-6 pt-6 border-t border-slate-800 text-center">
                        <p class="text-sm text-slate-400">"Already have an account?"</p>
                        <a href="/signin" class="text-orange-400 hover:text-orange-300 font-medium">
                            "Sign in"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_error_message_recognizes_duplicate_username() {
        let err = ApiError::Status {
            status: 400,
            body: Some("Username already exists".into()),
        };
        assert!(signup_error_message(&err).contains("already taken"));
    }

    #[test]
    fn test_signup_error_message_conflict_status() {
        let err = ApiError::Status {
            status: 409,
            body: None,
        };
        assert!(signup_error_message(&err).contains("already exists"));
    }

    #[test]
    fn test_signup_error_message_unknown_status_includes_code() {
        let err = ApiError::Status {
            status: 502,
            body: None,
        };
        assert_eq!(
            signup_error_message(&err),
            "Registration failed (502). Please try again."
        );
    }
}
