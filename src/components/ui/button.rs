use leptos::{ev::MouseEvent, prelude::*};

/// Visual weight of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, used for the form's submit action.
    #[default]
    Primary,
    /// Bordered, used for secondary actions such as provider sign-in.
    Outline,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "text-white bg-slate-900 hover:bg-slate-800 focus:ring-slate-300 dark:bg-slate-100 dark:text-slate-900 dark:hover:bg-white"
            }
            Self::Outline => {
                "border border-slate-200 bg-white text-slate-700 hover:bg-slate-50 focus:ring-slate-200 dark:border-slate-700 dark:bg-slate-800 dark:text-slate-200 dark:hover:bg-slate-700"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = format!(
        "inline-flex w-full items-center justify-center gap-2 rounded-lg px-5 py-2.5 text-center text-sm font-medium focus:outline-none focus:ring-4 {}",
        variant.classes()
    );

    view! {
        <button
            type=button_type
            class=class
            class=("cursor-not-allowed", move || disabled.get())
            class=("opacity-70", move || disabled.get())
            disabled=move || disabled.get()
            on:click=move |event| {
                if let Some(on_click) = on_click {
                    on_click.run(event);
                }
            }
        >
            {children()}
        </button>
    }
}
