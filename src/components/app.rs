use super::{
    about::About, ar_studio::ArStudio, contact::Contact, dashboards::StudentDashboard,
    dashboards::TeacherDashboard, explore::ExploreNature, features::Features, forest_view::SaveTheForest,
    get_started::GetStarted, hero::Hero, navigation::Navigation, not_found::NotFound,
    notice_stack::NoticeStack,
};
use crate::config::GameConfig;
use crate::route::Route;
use crate::state::{NoticeAction, NoticeQueue, Tone};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

// Route context (so any page can link without prop drilling)
#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub route: Route,
    pub navigate: Callback<Route>,
}

/// Lets pages raise toast notices.
#[derive(Clone, PartialEq)]
pub struct NoticeContext {
    pub push: Callback<(String, String, Tone)>,
}

impl NoticeContext {
    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>, tone: Tone) {
        self.push.emit((title.into(), description.into(), tone));
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<GameConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let route = use_state(Route::current);
    let notices = use_reducer(NoticeQueue::default);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let on_pop = Closure::wrap(Box::new(move |_: web_sys::Event| {
                route.set(Route::current());
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref()) {
                    log::warn!("could not listen for popstate: {e:?}");
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref());
                }
                drop(on_pop);
            }
        });
    }

    // Log unknown routes
    use_effect_with((*route).clone(), |r| {
        if let Route::NotFound(path) = r {
            log::error!("404: no page for route {path}");
        }
        || ()
    });

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if *route != next {
                log::debug!("navigate {} -> {}", route.path(), next.path());
                next.push();
                route.set(next);
            }
            if let Some(win) = web_sys::window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };
    let nav_ctx = NavContext {
        route: (*route).clone(),
        navigate,
    };

    let push = {
        let notices = notices.clone();
        Callback::from(move |(title, description, tone): (String, String, Tone)| {
            notices.dispatch(NoticeAction::Push { title, description, tone });
        })
    };
    let dismiss = {
        let notices = notices.clone();
        Callback::from(move |id: u64| notices.dispatch(NoticeAction::Dismiss(id)))
    };
    let notice_ctx = NoticeContext { push };

    let page = match &*route {
        Route::Home => html! { <><Hero /><Features /></> },
        Route::Features => html! { <Features /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::GetStarted => html! { <GetStarted /> },
        Route::Explore => html! { <ExploreNature /> },
        Route::ArStudio => html! { <ArStudio /> },
        Route::StudentDashboard => html! { <StudentDashboard /> },
        Route::TeacherDashboard => html! { <TeacherDashboard /> },
        Route::SaveTheForest => html! { <SaveTheForest config={props.config.clone()} /> },
        Route::NotFound(_) => html! { <NotFound /> },
    };
    // The game and the 404 page are full-screen, the rest sit under the nav bar.
    let with_nav = !matches!(&*route, Route::SaveTheForest | Route::NotFound(_));

    html! {
        <ContextProvider<NavContext> context={nav_ctx}>
            <ContextProvider<NoticeContext> context={notice_ctx}>
                <div id="root" style="min-height:100vh; background:#0e1116; color:#e6edf3; font-family:system-ui, sans-serif;">
                    { if with_nav { html! { <Navigation /> } } else { html! {} } }
                    <main style={if with_nav { "padding-top:64px;" } else { "" }}>{ page }</main>
                    <NoticeStack notices={notices.items.clone()} dismiss={dismiss} />
                </div>
            </ContextProvider<NoticeContext>>
        </ContextProvider<NavContext>>
    }
}
