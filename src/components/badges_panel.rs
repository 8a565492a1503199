use crate::config::BadgeDef;
use crate::model::BadgeId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BadgesPanelProps {
    pub catalog: Vec<BadgeDef>,
    pub owned: Vec<BadgeId>,
    pub total_trees_planted: u32,
    pub total_trees_cut: u32,
}

#[function_component]
pub fn BadgesPanel(props: &BadgesPanelProps) -> Html {
    let tiles = props.catalog.iter().map(|b| {
        let earned = props.owned.contains(&b.id);
        let style = if earned {
            "border:2px solid #2ea043; background:rgba(46,160,67,0.1);"
        } else {
            "border:2px solid #30363d; background:#161b22; filter:grayscale(1); opacity:0.7;"
        };
        html! {
            <div key={b.name.clone()} style={format!("text-align:center; padding:12px; border-radius:10px; {}", style)}>
                <div style="font-size:30px;">{ b.icon.clone() }</div>
                <div style="font-weight:600; font-size:14px;">{ b.name.clone() }</div>
                <div style="font-size:11px; opacity:0.7; margin-top:2px;">{ b.requirement.clone() }</div>
                { if earned { html!{ <div style="font-size:11px; color:#3fb950; font-weight:700; margin-top:4px;">{"✅ Earned!"}</div> } } else { html!{} } }
            </div>
        }
    });
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:16px;">
        <h3 style="margin:0 0 12px 0;">{"🏅 Your Badges"}</h3>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(130px, 1fr)); gap:10px;">{ for tiles }</div>
        <div style="margin-top:14px; text-align:center; font-size:13px; opacity:0.8;">
            { format!("Total Trees Planted: {} 🌲 · Trees Cut: {} 🪓", props.total_trees_planted, props.total_trees_cut) }
        </div>
    </div>}
}
