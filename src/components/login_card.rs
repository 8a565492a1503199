use crate::state::{CLASSES, LoginForm};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginCardProps {
    pub form: LoginForm,
    pub on_change: Callback<LoginForm>,
    pub on_submit: Callback<()>,
}

#[function_component(LoginCard)]
pub fn login_card(props: &LoginCardProps) -> Html {
    let on_name = {
        let form = props.form.clone();
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(LoginForm { name: input.value(), ..form.clone() });
        })
    };
    let on_class = {
        let form = props.form.clone();
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(LoginForm { class: select.value(), ..form.clone() });
        })
    };
    let submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let field_style = "width:100%; padding:10px; border-radius:8px; border:2px solid #30363d; background:#0d1117; color:inherit; font-size:16px; box-sizing:border-box;";
    html! {<div style="min-height:100vh; display:flex; align-items:center; justify-content:center; padding:16px;">
        <form onsubmit={submit} style="width:100%; max-width:420px; background:#161b22; border:1px solid #2ea043; border-radius:14px; padding:24px; display:flex; flex-direction:column; gap:14px;">
            <div style="text-align:center;">
                <div style="font-size:56px;">{"🌲"}</div>
                <h2 style="margin:6px 0; color:#3fb950;">{"Save the Forest! 🌍"}</h2>
                <p style="margin:0; opacity:0.75;">{"Join the adventure to save our planet! 🌱"}</p>
            </div>
            <label style="display:flex; flex-direction:column; gap:6px;">
                <span style="font-size:13px;">{"Your Name 😊"}</span>
                <input type="text" placeholder="Enter your name" value={props.form.name.clone()} oninput={on_name} style={field_style} />
            </label>
            <label style="display:flex; flex-direction:column; gap:6px;">
                <span style="font-size:13px;">{"Your Class 📚"}</span>
                <select onchange={on_class} style={field_style}>
                    <option value="" selected={props.form.class.is_empty()}>{"Select your class"}</option>
                    { for CLASSES.iter().map(|c| html!{ <option value={*c} selected={props.form.class == *c}>{ *c }</option> }) }
                </select>
            </label>
            <button type="submit" style="padding:14px; font-size:18px;">{"Start Playing! 🚀"}</button>
        </form>
    </div>}
}
