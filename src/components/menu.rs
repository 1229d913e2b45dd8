//! Popup menu widgets: trigger wrapper, text options, and nested submenus.
//!
//! DESIGN
//! ======
//! Menu contents render once and are shown or hidden with an `open` class,
//! so option callbacks are built a single time per row.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;

/// Which side a submenu opens toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubMenuPosition {
    #[default]
    Bottom,
    Left,
}

impl SubMenuPosition {
    fn class(self) -> &'static str {
        match self {
            Self::Bottom => "SubMenu--bottom",
            Self::Left => "SubMenu--left",
        }
    }
}

fn wrapper_class(extra: &str) -> String {
    if extra.is_empty() {
        "MenuWrapper".to_owned()
    } else {
        format!("MenuWrapper {extra}")
    }
}

/// Options trigger plus the popup it opens.
///
/// Clicking any option inside the popup closes it. With
/// `stop_propagation_on_toggle`, the trigger click does not reach the
/// enclosing row's own click handler.
#[component]
pub fn MenuWrapper(
    #[prop(into)] class: Signal<String>,
    #[prop(optional)] stop_propagation_on_toggle: bool,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(default = "⋯")] icon: &'static str,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let set_open = move |next: bool| {
        open.set(next);
        if let Some(on_toggle) = on_toggle {
            on_toggle.run(next);
        }
    };

    view! {
        <div class=move || wrapper_class(&class.get())>
            <button
                class="IconButton"
                aria-label="Options"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    if stop_propagation_on_toggle {
                        ev.stop_propagation();
                    }
                    set_open(!open.get_untracked());
                }
            >
                {icon}
            </button>
            <div
                class="Menu"
                class:open=move || open.get()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    set_open(false);
                }
            >
                {children()}
            </div>
        </div>
    }
}

/// A single clickable menu option. `on_click` receives the option `id`.
#[component]
pub fn MenuText(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    icon: &'static str,
    on_click: Callback<String>,
) -> impl IntoView {
    let click_id = id.clone();
    view! {
        <div id=id class="MenuOption TextOption" on:click=move |_| on_click.run(click_id.clone())>
            <span class="menu-icon">{icon}</span>
            <span class="menu-name">{name}</span>
        </div>
    }
}

/// A labelled option that reveals nested options on hover or click.
#[component]
pub fn SubMenu(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    icon: &'static str,
    #[prop(optional)] position: SubMenuPosition,
    children: Children,
) -> impl IntoView {
    let open = RwSignal::new(false);
    view! {
        <div
            id=id
            class="MenuOption SubMenuOption"
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
        >
            <div
                class="SubMenuOption__label"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    open.update(|o| *o = !*o);
                }
            >
                <span class="menu-icon">{icon}</span>
                <span class="menu-name">{name}</span>
                <span class="SubmenuTriangleIcon">"▸"</span>
            </div>
            <div class=format!("SubMenu Menu {}", position.class()) class:open=move || open.get()>
                {children()}
            </div>
        </div>
    }
}
