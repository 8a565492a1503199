use super::app::NavContext;
use crate::route::{NAV_ROUTES, Route};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub style: AttrValue,
    pub children: Html,
}

/// In-app link: updates the route without reloading the page.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let nav = use_context::<NavContext>();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(nav) = &nav {
                e.prevent_default();
                nav.navigate.emit(to.clone());
            }
        })
    };
    html! { <a href={props.to.path().to_string()} style={props.style.clone()} {onclick}>{ props.children.clone() }</a> }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let nav = use_context::<NavContext>();
    let current = nav.as_ref().map(|n| n.route.clone()).unwrap_or(Route::Home);

    let item_style = |active: bool| {
        if active {
            "padding:6px 12px; border-radius:8px; color:#3fb950; background:rgba(46,160,67,0.12); font-weight:600; text-decoration:none;"
        } else {
            "padding:6px 12px; border-radius:8px; color:#e6edf3; text-decoration:none;"
        }
    };
    let items = NAV_ROUTES.iter().map(|(route, label)| {
        html! {
            <Link to={route.clone()} style={item_style(*route == current)}>{ *label }</Link>
        }
    });

    html! {<nav id="top-bar" style="position:fixed; top:0; left:0; right:0; height:64px; z-index:50; background:rgba(14,17,22,0.95); border-bottom:1px solid #30363d; display:flex; align-items:center; justify-content:space-between; padding:0 24px;">
        <Link to={Route::Home} style="display:flex; align-items:center; gap:8px; font-weight:700; font-size:20px; color:#3fb950; text-decoration:none;">
            <span>{"🍃"}</span><span>{"EcoLearn"}</span>
        </Link>
        <div style="display:flex; align-items:center; gap:8px; flex-wrap:wrap;">
            { for items }
            <Link to={Route::GetStarted} style="margin-left:12px; padding:6px 14px; border-radius:8px; background:#238636; color:#fff; text-decoration:none;">{"Get Started"}</Link>
        </div>
    </nav>}
}
