use super::progress_bar::ProgressBar;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub trees: u32,
    pub coins: u32,
    pub oxygen: u32,
    pub oxygen_percent: u32,
    pub score: u64,
    pub level: u32,
    pub streak: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let card_style = "flex:1; min-width:160px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:14px; text-align:center; display:flex; flex-direction:column; gap:6px;";
    let value_style = "font-size:28px; font-weight:700; font-variant-numeric:tabular-nums;";
    html! {
        <div style="display:flex; flex-direction:column; gap:10px;">
            <div style="display:flex; gap:12px; flex-wrap:wrap;">
                <div style={card_style}>
                    <span style="font-size:30px;">{"🌲"}</span>
                    <span style={format!("{} color:#3fb950;", value_style)}>{ props.trees }</span>
                    <span style="font-size:12px; opacity:0.7;">{"Trees in Forest"}</span>
                </div>
                <div style={card_style}>
                    <span style="font-size:30px;">{"💰"}</span>
                    <span style={format!("{} color:#d4af37;", value_style)}>{ props.coins }</span>
                    <span style="font-size:12px; opacity:0.7;">{"Eco Coins"}</span>
                </div>
                <div style={card_style}>
                    <span style="font-size:30px;">{"🌍"}</span>
                    <span style={format!("{} color:#58a6ff;", value_style)}>{ props.oxygen }</span>
                    <span style="font-size:12px; opacity:0.7;">{"Oxygen Level"}</span>
                    <ProgressBar percent={props.oxygen_percent} color="#58a6ff" />
                </div>
            </div>
            <div style="display:flex; gap:18px; justify-content:center; font-size:14px;">
                <span>{ format!("⭐ Score {}", props.score) }</span>
                <span>{ format!("🏅 Level {}", props.level) }</span>
                <span>{ format!("🔥 Streak {}", props.streak) }</span>
            </div>
        </div>
    }
}
