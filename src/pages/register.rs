//! Account registration page.
//!
//! Validates the three inputs locally, posts username and password to the
//! account API, and hands the created user to the session, which moves on to
//! the dashboard. Passwords are never logged.

use leptos::{ev::SubmitEvent, prelude::*};

use crate::components::alert::{FieldMessage, FormError};
use crate::components::loading_overlay::LoadingOverlay;
use crate::state::registration::{Field, FieldErrors, RegistrationFlow, RegistrationForm};
use crate::state::session::use_session;
use crate::util::navigation::Page;

const INPUT_CLASS: &str = "w-full rounded-md border border-slate-600 bg-transparent px-3 py-2 text-sm text-white";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let flow = RegistrationFlow::default();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if flow.loading.get_untracked() {
            return;
        }

        let form = RegistrationForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let account = match form.validate() {
            Ok(account) => {
                field_errors.set(FieldErrors::default());
                account
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpAccountApi::default();
                flow.submit(&api, &session, account).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (account, &session);
        }
    };

    let error_for = move |field: Field| Signal::derive(move || field_errors.with(|errors| errors.get(field)));

    view! {
        <div class="relative grid min-h-[calc(100dvh-150px)] place-items-center">
            <LoadingOverlay visible=flow.loading/>

            <form
                class="relative w-1/2 space-y-8 rounded-[10px] bg-[#191919]/90 p-[25px] text-white"
                on:submit=on_submit
            >
                <div class="space-y-2">
                    <label class="block text-sm font-medium" for="username">"Username"</label>
                    <input
                        id="username"
                        class=INPUT_CLASS
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <p class="text-sm text-slate-400">"This is your public display name."</p>
                    <FieldMessage message=error_for(Field::Username)/>
                </div>
                <div class="space-y-2">
                    <label class="block text-sm font-medium" for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="text-sm text-slate-400">"This is your private password."</p>
                    <FieldMessage message=error_for(Field::Password)/>
                </div>
                <div class="space-y-2">
                    <label class="block text-sm font-medium" for="confirm_password">
                        "Confirm password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="new-password"
                        placeholder="Confirm password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    <p class="text-sm text-slate-400">"This is your private password."</p>
                    <FieldMessage message=error_for(Field::ConfirmPassword)/>
                </div>

                <div>
                    {move || flow.form_error.get().map(|message| view! { <FormError message/> })}
                </div>

                <div class="flex items-center gap-4">
                    <button
                        type="submit"
                        class="rounded-lg bg-white px-5 py-2.5 text-sm font-medium text-black disabled:opacity-70"
                        disabled=move || flow.loading.get()
                    >
                        "Register"
                    </button>
                    <a class="text-sm text-slate-400 hover:text-white" href=Page::Landing.path()>
                        "Back to home"
                    </a>
                </div>
            </form>
        </div>
    }
}
