//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::i18n::Messages;
use crate::mutator::{Mutator, RestMutator};
use crate::pages::sidebar::SidebarPage;
use crate::permissions::Permissions;
use crate::state::selection::{SelectionState, Team};
use crate::state::sidebar::SidebarState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// Collaborators not passed in fall back to an empty sidebar, a deny-all
/// permission set, the REST mutator bound to the sidebar, and English
/// strings. Without `permissions`, gated entries such as "Delete Board"
/// never render; pass a checker to expose them.
#[component]
pub fn App(
    #[prop(optional)] sidebar: SidebarState,
    #[prop(optional)] team: Option<Team>,
    #[prop(optional)] permissions: Option<Permissions>,
    #[prop(optional)] mutator: Option<Mutator>,
    #[prop(optional)] messages: Messages,
) -> impl IntoView {
    provide_meta_context();

    let sidebar = RwSignal::new(sidebar);
    let selection = RwSignal::new(SelectionState {
        current_team: team,
        ..SelectionState::default()
    });

    provide_context(sidebar);
    provide_context(selection);
    provide_context(permissions.unwrap_or_default());
    provide_context(mutator.unwrap_or_else(|| Mutator::new(RestMutator::with_sidebar(sidebar))));
    provide_context(messages);

    view! {
        <Stylesheet id="leptos" href="/pkg/board-sidebar.css"/>
        <Title text="Boards"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SidebarPage/>
                <Route path=(StaticSegment("board"), ParamSegment("board_id")) view=SidebarPage/>
                <Route
                    path=(StaticSegment("board"), ParamSegment("board_id"), ParamSegment("view_id"))
                    view=SidebarPage
                />
            </Routes>
        </Router>
    }
}
