use super::progress_bar::ProgressBar;
use crate::content::{FEATURES, SAMPLE_PROGRESS};
use yew::prelude::*;

#[function_component(Features)]
pub fn features() -> Html {
    let cards = FEATURES.iter().map(|f| html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:18px; display:flex; flex-direction:column; gap:8px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <span style="font-size:30px;">{ f.icon }</span>
                <span style="font-size:12px; padding:2px 8px; border-radius:999px; background:#21262d;">{ f.stat }</span>
            </div>
            <div style="font-weight:600; font-size:18px;">{ f.title }</div>
            <div style="font-size:14px; opacity:0.8;">{ f.description }</div>
        </div>
    });
    let progress = SAMPLE_PROGRESS.iter().map(|(name, pct)| html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <div style="display:flex; justify-content:space-between; font-size:13px;"><span>{ *name }</span><span>{ format!("{}%", pct) }</span></div>
            <ProgressBar percent={*pct} />
        </div>
    });
    html! {<section style="padding:48px 24px; max-width:1100px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
        <div style="text-align:center;">
            <span style="font-size:13px; opacity:0.7;">{"Why Choose EcoLearn"}</span>
            <h2 style="font-size:34px; margin:8px 0;">{"Features That Make "}<span style="color:#3fb950;">{"Learning Fun"}</span></h2>
            <p style="opacity:0.8; max-width:700px; margin:0 auto;">
                {"Our platform combines cutting-edge gamification with comprehensive environmental education to create an engaging learning experience."}
            </p>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(230px, 1fr)); gap:14px;">{ for cards }</div>
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:18px; display:flex; flex-direction:column; gap:12px;">
            <h3 style="margin:0;">{"Track Your Environmental Impact"}</h3>
            <p style="margin:0; font-size:14px; opacity:0.8;">{"See your learning progress in real-time with our advanced tracking system. Earn achievements and compete with friends!"}</p>
            { for progress }
        </div>
    </section>}
}
