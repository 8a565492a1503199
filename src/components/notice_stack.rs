use crate::state::{NOTICE_TTL_MS, Notice};
use crate::util::after_ms;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeStackProps {
    pub notices: Vec<Notice>,
    pub dismiss: Callback<u64>,
}

#[function_component]
pub fn NoticeStack(props: &NoticeStackProps) -> Html {
    html! {<div style="position:fixed; right:16px; bottom:16px; z-index:100; display:flex; flex-direction:column; gap:8px; max-width:360px;">
        { for props.notices.iter().map(|n| html! { <NoticeToast key={n.id} notice={n.clone()} dismiss={props.dismiss.clone()} /> }) }
    </div>}
}

#[derive(Properties, PartialEq, Clone)]
struct NoticeToastProps {
    notice: Notice,
    dismiss: Callback<u64>,
}

#[function_component]
fn NoticeToast(props: &NoticeToastProps) -> Html {
    // Auto-dismiss; the timeout is cleared if the toast goes away first.
    {
        let dismiss = props.dismiss.clone();
        use_effect_with(props.notice.id, move |id| {
            let id = *id;
            let timeout = after_ms(NOTICE_TTL_MS, move || dismiss.emit(id));
            move || drop(timeout)
        });
    }
    let close = {
        let dismiss = props.dismiss.clone();
        let id = props.notice.id;
        Callback::from(move |_| dismiss.emit(id))
    };
    let n = &props.notice;
    html! {<div role="status" style={format!("background:#161b22; border:1px solid {}; border-left-width:4px; border-radius:8px; padding:10px 12px; display:flex; gap:10px; align-items:flex-start;", n.tone.border_color())}>
        <div style="flex:1;">
            <div style="font-weight:600; margin-bottom:2px;">{ n.title.clone() }</div>
            { if n.description.is_empty() { html!{} } else { html!{ <div style="font-size:13px; opacity:0.8;">{ n.description.clone() }</div> } } }
        </div>
        <button onclick={close} style="padding:0 6px;">{"✕"}</button>
    </div>}
}
