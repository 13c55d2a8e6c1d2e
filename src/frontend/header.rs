use leptos::*;
use leptos_router::A;

use super::icon::Icon;
use super::Theme;
use crate::ViewMode;

/// Sticky top bar: brand, page navigation, optional grid/list toggle (the
/// home page passes its own signal in) and the dark-mode switch.
#[component]
pub fn Header(#[prop(optional)] view_mode: Option<RwSignal<ViewMode>>) -> impl IntoView {
    let theme = expect_context::<Theme>();

    view! {
        <header class="site-header">
            <div class="header-inner">
                <A href="/" class="brand">
                    <span class="brand-mark">
                        <Icon name="upload" size=22/>
                    </span>
                    <h1>"DropZone"</h1>
                </A>

                <div class="header-actions">
                    <nav class="header-nav">
                        <A href="/" exact=true class="nav-link">
                            <Icon name="files" size=14/>
                            <span>"Files"</span>
                        </A>
                        <A href="/dashboard" class="nav-link">
                            <Icon name="bar-chart" size=14/>
                            <span>"Dashboard"</span>
                        </A>
                    </nav>

                    {view_mode.map(|mode| view! { <ViewModeToggle mode=mode/> })}

                    <button
                        class="icon-btn"
                        title="Toggle dark mode"
                        on:click=move |_| theme.toggle()
                    >
                        <Show
                            when=move || theme.is_dark()
                            fallback=|| view! { <Icon name="moon"/> }
                        >
                            <Icon name="sun"/>
                        </Show>
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn ViewModeToggle(mode: RwSignal<ViewMode>) -> impl IntoView {
    let button_class = move |target: ViewMode| {
        if mode.get() == target {
            "icon-btn active"
        } else {
            "icon-btn"
        }
    };

    view! {
        <div class="view-toggle">
            <button
                class=move || button_class(ViewMode::Grid)
                title="Grid view"
                on:click=move |_| mode.set(ViewMode::Grid)
            >
                <Icon name="grid"/>
            </button>
            <button
                class=move || button_class(ViewMode::List)
                title="List view"
                on:click=move |_| mode.set(ViewMode::List)
            >
                <Icon name="list"/>
            </button>
        </div>
    }
}
