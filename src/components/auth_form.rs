//! Auth form card for login, signup and password reset. The view only renders
//! controller state; validation, the submit lifecycle and stale-result
//! handling live in `features::auth::controller`.
//!
//! Everything mode-dependent is derived from the controller's mode rather
//! than the prop, so a mode switch and the clearing of input and errors reach
//! the DOM in the same update.

use crate::{
    app_lib::config::AppConfig,
    components::{
        social_login::SocialLoginButtons,
        ui::{Alert, Button, Spinner},
    },
    features::{
        auth::{
            controller::{AuthFormController, FormStore, SubmissionEffects, submit_form},
            mode::{AuthMode, BUSY_LABEL, Field},
            submitter::AuthSubmitter,
        },
        notify::{
            Notice, NoticeKind,
            state::{ToastContext, use_toasts},
        },
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, components::A, hooks::use_navigate};
use tracing::debug;

impl FormStore for RwSignal<AuthFormController> {
    fn with_form<R>(&self, update: impl FnOnce(&mut AuthFormController) -> R) -> Option<R> {
        self.try_update(update)
    }
}

/// Applies completions through the toast context and the router.
#[derive(Clone)]
struct ViewEffects<N> {
    toasts: ToastContext,
    navigate: N,
}

impl<N> SubmissionEffects for ViewEffects<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn notify(&self, notice: Notice) {
        self.toasts.push(notice);
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Renders the auth card for `mode` and drives submissions.
#[component]
pub fn AuthForm(#[prop(into)] mode: Signal<AuthMode>) -> impl IntoView {
    let initial_mode = mode.get_untracked();
    debug!(mode = %initial_mode, "auth form mounted");

    let controller = RwSignal::new(AuthFormController::new(initial_mode));
    let submitter = AuthSubmitter::from_config(&AppConfig::load());
    let effects = ViewEffects {
        toasts: use_toasts(),
        navigate: use_navigate(),
    };

    Effect::new(move |_| {
        let next = mode.get();
        controller.maybe_update(|form| form.set_mode(next));
    });

    let current_mode = Memo::new(move |_| controller.with(AuthFormController::mode));
    let submitting = Signal::derive(move || controller.with(AuthFormController::is_submitting));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let effects = effects.clone();
        spawn_local(async move {
            if let Err(rejected) = submit_form(&controller, &submitter, &effects).await {
                debug!(?rejected, "auth form submit not started");
            }
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8 dark:border-slate-800 dark:bg-slate-900">
            <div class="space-y-2 text-center">
                <h1 class="text-2xl font-bold">{move || current_mode.get().content().title}</h1>
                <p class="text-sm text-slate-500 dark:text-slate-400">
                    {move || current_mode.get().content().description}
                </p>
            </div>

            <form class="mt-6 space-y-4" novalidate on:submit=on_submit>
                {move || {
                    let mode = current_mode.get();
                    Field::ALL
                        .into_iter()
                        .filter(|field| mode.shows(*field))
                        .map(|field| view! { <FormField field=field mode=mode controller=controller /> })
                        .collect_view()
                }}

                <Button button_type="submit" disabled=submitting>
                    {move || {
                        if submitting.get() {
                            view! {
                                <Spinner />
                                <span>{BUSY_LABEL}</span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <span>{current_mode.get().content().submit_label}</span>
                                <span class="material-symbols-outlined text-base">"arrow_forward"</span>
                            }
                                .into_any()
                        }
                    }}
                </Button>

                {move || {
                    controller
                        .with(|form| form.failure().map(str::to_string))
                        .map(|message| view! { <Alert kind=NoticeKind::Error message=message /> })
                }}
            </form>

            <Show when=move || current_mode.get().shows_social_login()>
                <SocialLoginButtons />
            </Show>

            <div class="mt-6 flex justify-center text-sm">
                {move || {
                    let link = current_mode.get().footer_link();
                    view! {
                        <p class="text-slate-500 dark:text-slate-400">
                            {link.prompt} " "
                            <A href={link.href} {..} class="font-semibold text-blue-600 hover:underline">
                                {link.label}
                            </A>
                        </p>
                    }
                }}
            </div>
        </div>
    }
}

/// One labeled input with its inline validation message.
#[component]
fn FormField(
    field: Field,
    mode: AuthMode,
    controller: RwSignal<AuthFormController>,
) -> impl IntoView {
    let id = field.as_str();
    let error = move || controller.with(|form| form.error(field));

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <label class="text-sm font-medium" for=id>{field.label()}</label>
                {(field == Field::Password && mode.shows_forgot_link())
                    .then(|| {
                        view! {
                            <A href={paths::FORGOT_PASSWORD} {..} class="text-sm font-medium text-blue-600 hover:underline">
                                "Forgot?"
                            </A>
                        }
                    })}
            </div>
            <div class="relative">
                <span class="material-symbols-outlined pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-base text-slate-400">
                    {field.icon()}
                </span>
                <input
                    id=id
                    name=id
                    type=field.input_type()
                    autocomplete=field.autocomplete(mode)
                    placeholder=field.placeholder()
                    class="w-full rounded-lg border bg-slate-50 py-2.5 pl-10 pr-3 text-sm focus:ring-2 focus:ring-slate-200 dark:bg-slate-800"
                    class=("border-red-400", move || error().is_some())
                    class=("border-slate-200", move || error().is_none())
                    aria-invalid=move || error().is_some().to_string()
                    prop:value=move || controller.with(|form| form.value(field).to_string())
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        controller.update(|form| form.set_field(field, value));
                    }
                    on:blur=move |_| controller.update(|form| form.touch(field))
                />
            </div>
            {move || error().map(|message| view! { <p class="text-sm text-red-600">{message}</p> })}
        </div>
    }
}
