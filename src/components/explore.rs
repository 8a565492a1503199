use crate::content::{MOCK_IDENTIFICATION, RECENT_DISCOVERIES};
use crate::util::{Timeout, after_ms, alert};
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

/// How long the mock identifier "thinks" before answering.
const IDENTIFY_DELAY_MS: i32 = 2000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    Identifying,
    Identified,
}

#[function_component(ExploreNature)]
pub fn explore_nature() -> Html {
    let image_url = use_state(|| None::<String>);
    let stage = use_state(|| Stage::Idle);
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| move || drop(pending.borrow_mut().take()));
    }

    let open_camera = Callback::from(|_| alert("Opening camera... (Camera API would be implemented here)"));

    let on_file = {
        let image_url = image_url.clone();
        let stage = stage.clone();
        let pending = pending.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|list| list.get(0)) else { return };
            let url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(err) => {
                    log::warn!("could not preview {}: {err:?}", file.name());
                    return;
                }
            };
            log::debug!("identifying {}", file.name());
            image_url.set(Some(url));
            stage.set(Stage::Identifying);
            let stage = stage.clone();
            *pending.borrow_mut() = after_ms(IDENTIFY_DELAY_MS, move || stage.set(Stage::Identified));
        })
    };

    let reset = {
        let image_url = image_url.clone();
        let stage = stage.clone();
        let pending = pending.clone();
        Callback::from(move |_| {
            pending.borrow_mut().take();
            if let Some(url) = &*image_url {
                let _ = Url::revoke_object_url(url);
            }
            image_url.set(None);
            stage.set(Stage::Idle);
        })
    };

    let id = &MOCK_IDENTIFICATION;
    let body = match &*image_url {
        None => html! {<div style="background:rgba(22,27,34,0.9); border:2px dashed #30363d; border-radius:12px; padding:32px; text-align:center; display:flex; flex-direction:column; gap:12px; align-items:center;">
            <div style="font-size:48px;">{"📷"}</div>
            <button onclick={open_camera}>{"Open Camera"}</button>
            <label style="cursor:pointer; padding:8px 16px; border:1px solid #30363d; border-radius:8px;">
                {"Choose File"}
                <input id="file-upload" type="file" accept="image/*" onchange={on_file} style="display:none;" />
            </label>
        </div>},
        Some(url) => html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:20px; display:flex; flex-direction:column; gap:12px;">
            <h2 style="margin:0;">{"Plant Identification"}</h2>
            <img src={url.clone()} alt="Uploaded plant" style="width:100%; max-height:280px; object-fit:cover; border-radius:8px;" />
            {
                match *stage {
                    Stage::Identifying => html! { <div style="text-align:center; opacity:0.8;">{"🔍 Identifying..."}</div> },
                    Stage::Identified => html! {<div style="display:flex; flex-direction:column; gap:6px;">
                        <div style="display:flex; justify-content:space-between; align-items:baseline;">
                            <h3 style="margin:0;">{ id.common_name }</h3>
                            <span style="font-size:12px; color:#3fb950;">{ format!("{}% confidence", id.confidence) }</span>
                        </div>
                        <em style="opacity:0.8;">{ id.species }</em>
                        <div style="font-size:13px;">{ format!("Family: {}", id.family) }</div>
                        <div style="font-size:13px;">{ format!("Habitat: {}", id.habitat) }</div>
                        <div style="font-size:13px;">{ format!("Conservation: {}", id.conservation) }</div>
                        <ul style="margin:4px 0; padding-left:20px;">{ for id.facts.iter().map(|f| html!{ <li>{ *f }</li> }) }</ul>
                    </div>},
                    Stage::Idle => html! {},
                }
            }
            <button onclick={reset}>{"Try Another Image"}</button>
        </div>},
    };

    html! {<section style="padding:48px 24px; max-width:820px; margin:0 auto; display:flex; flex-direction:column; gap:24px;">
        <div style="text-align:center;">
            <h1 style="margin:0 0 8px 0; font-size:40px; color:#3fb950;">{"Explore Nature"}</h1>
            <p style="opacity:0.85;">{"Discover and identify plant species around you. Use your camera or upload photos to learn about trees, flowers, and plants instantly!"}</p>
        </div>
        { body }
        <div>
            <h3>{"Recent Discoveries"}</h3>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(180px, 1fr)); gap:10px;">
                { for RECENT_DISCOVERIES.iter().map(|(name, species, emoji)| html! {
                    <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:12px; text-align:center;">
                        <div style="font-size:32px;">{ *emoji }</div>
                        <div style="font-weight:600;">{ *name }</div>
                        <div style="font-size:12px; font-style:italic; opacity:0.7;">{ *species }</div>
                    </div>
                }) }
            </div>
        </div>
    </section>}
}
