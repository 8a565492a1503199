use super::navigation::Link;
use crate::content::HERO_HIGHLIGHTS;
use crate::route::Route;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let highlights = HERO_HIGHLIGHTS.iter().map(|c| html! {
        <div style="flex:1; min-width:200px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;">
            <div style="font-size:28px;">{ c.icon }</div>
            <div style="font-weight:600; margin:6px 0;">{ c.title }</div>
            <div style="font-size:13px; opacity:0.8;">{ c.description }</div>
        </div>
    });
    html! {<section style="padding:64px 24px; max-width:1100px; margin:0 auto; text-align:center; display:flex; flex-direction:column; gap:24px;">
        <span style="align-self:center; padding:4px 12px; border-radius:999px; border:1px solid #2ea043; font-size:13px;">{"Environmental Education App"}</span>
        <h1 style="font-size:48px; margin:0;">{"Learn. Play. "}<span style="color:#3fb950;">{"Save the Planet"}</span></h1>
        <p style="font-size:18px; opacity:0.85; max-width:680px; margin:0 auto;">
            {"Transform environmental learning into an exciting adventure. Earn points, unlock achievements, and make a real difference for our planet."}
        </p>
        <div style="display:flex; gap:12px; justify-content:center; flex-wrap:wrap;">
            <Link to={Route::GetStarted} style="padding:12px 28px; border-radius:8px; background:#238636; color:#fff; text-decoration:none;">{"Get Started →"}</Link>
            <Link to={Route::SaveTheForest} style="padding:12px 28px; border-radius:8px; border:1px solid #30363d; color:inherit; text-decoration:none;">{"▶ Play Save the Forest"}</Link>
        </div>
        <div style="display:flex; gap:14px; flex-wrap:wrap;">{ for highlights }</div>
    </section>}
}
