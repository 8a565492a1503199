use crate::util::alert;
use yew::prelude::*;

#[function_component(ArStudio)]
pub fn ar_studio() -> Html {
    let enter = Callback::from(|_| {
        log::info!("AR world requested");
        alert("Entering AR World... (AR functionality would be implemented here)");
    });
    html! {<section style="padding:64px 24px; max-width:760px; margin:0 auto; text-align:center; display:flex; flex-direction:column; gap:20px; align-items:center;">
        <div style="font-size:64px;">{"🥽"}</div>
        <h1 style="margin:0; font-size:40px;">{"AR Studios"}</h1>
        <p style="opacity:0.85;">
            {"Step into immersive augmented reality worlds and explore environmental concepts like never before. Experience nature, ecosystems, and sustainability in 3D!"}
        </p>
        <button onclick={enter} style="padding:18px 48px; font-size:18px; font-weight:700;">{"Enter AR World"}</button>
        <p style="font-size:12px; opacity:0.6;">{"* AR functionality requires compatible device and camera access"}</p>
    </section>}
}
