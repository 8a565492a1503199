use super::app::NavContext;
use super::navigation::Link;
use crate::route::Route;
use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_context::<NavContext>().map(|n| n.route.path().to_string()).unwrap_or_default();
    html! {<div style="min-height:100vh; display:flex; align-items:center; justify-content:center; text-align:center;">
        <div style="display:flex; flex-direction:column; gap:16px; align-items:center;">
            <div style="font-size:80px;">{"🌲"}</div>
            <h1 style="font-size:72px; margin:0; color:#3fb950;">{"404"}</h1>
            <h2 style="margin:0;">{"Oops! This path doesn't exist"}</h2>
            <p style="opacity:0.8; max-width:440px;">
                {"Looks like you've wandered off the beaten path. Let's get you back to exploring our eco-learning platform."}
            </p>
            <code style="opacity:0.6;">{ path }</code>
            <div style="display:flex; gap:12px;">
                <Link to={Route::Home} style="padding:10px 22px; border-radius:8px; background:#238636; color:#fff; text-decoration:none;">{"🏠 Return Home"}</Link>
                <Link to={Route::Features} style="padding:10px 22px; border-radius:8px; border:1px solid #30363d; color:inherit; text-decoration:none;">{"Explore Features"}</Link>
            </div>
        </div>
    </div>}
}
