use crate::content::FOREST_LEADERBOARD;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardViewProps {
    pub back: Callback<()>,
}

#[function_component(LeaderboardView)]
pub fn leaderboard_view(props: &LeaderboardViewProps) -> Html {
    let back = {
        let cb = props.back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rows = FOREST_LEADERBOARD.iter().enumerate().map(|(i, p)| {
        html! {
            <div style="display:flex; align-items:center; justify-content:space-between; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:14px 18px;">
                <div style="display:flex; align-items:center; gap:14px;">
                    <span style="font-size:28px;">{ p.avatar }</span>
                    <span style="font-size:22px; font-weight:700; color:#3fb950;">{ format!("#{}", i + 1) }</span>
                    <div>
                        <div style="font-weight:600;">{ p.name }</div>
                        <div style="font-size:12px; opacity:0.7;">{ p.class }</div>
                    </div>
                </div>
                <div style="text-align:right;">
                    <div style="font-size:22px; font-weight:700; color:#3fb950;">{ p.score }</div>
                    <div style="font-size:11px; opacity:0.7;">{"points"}</div>
                </div>
            </div>
        }
    });
    html! {<div style="max-width:820px; margin:0 auto; padding:24px 16px; display:flex; flex-direction:column; gap:12px;">
        <div style="display:flex; align-items:center; justify-content:space-between; margin-bottom:8px;">
            <h1 style="margin:0;">{"🏆 Leaderboard"}</h1>
            <button onclick={back}>{"Back to Game 🎮"}</button>
        </div>
        { for rows }
    </div>}
}
