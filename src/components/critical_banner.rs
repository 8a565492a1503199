use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CriticalBannerProps {
    pub show: bool,
    pub no_trees: bool,
}

/// Non-blocking advisory while oxygen or trees have run out. Play continues.
#[function_component]
pub fn CriticalBanner(props: &CriticalBannerProps) -> Html {
    if !props.show {
        return html! {};
    }
    let detail = if props.no_trees {
        "Your forest is empty. Plant a tree to bring it back!"
    } else {
        "Oxygen has run out. Plant trees to help Earth breathe again!"
    };
    html! {
        <div role="alert" style="background:rgba(88,166,255,0.12); border:2px solid #58a6ff; padding:12px 16px; border-radius:10px; text-align:center;">
            <div style="font-weight:700; color:#58a6ff;">{"Earth needs your help! 🌍💙"}</div>
            <div style="font-size:13px; opacity:0.85;">{ detail }</div>
        </div>
    }
}
