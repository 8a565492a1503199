use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    /// 0..=100, larger values are clamped.
    pub percent: u32,
    #[prop_or("#3fb950")]
    pub color: &'static str,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let pct = props.percent.min(100);
    html! { <div style="width:100%; height:8px; background:#21262d; border-radius:4px; overflow:hidden;">
        <div style={format!("width:{}%; height:100%; background:{};", pct, props.color)}></div>
    </div> }
}
