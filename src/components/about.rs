use crate::content::{ABOUT_STATS, VALUES};
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {<section style="padding:48px 24px; max-width:1100px; margin:0 auto; display:flex; flex-direction:column; gap:28px;">
        <div style="text-align:center;">
            <span style="font-size:13px; opacity:0.7;">{"About EcoLearn"}</span>
            <h1 style="font-size:38px; margin:8px 0;">{"Empowering the Next Generation of "}<span style="color:#3fb950;">{"Eco Warriors"}</span></h1>
            <p style="opacity:0.85; max-width:720px; margin:0 auto;">
                {"EcoLearn was founded with a simple mission: to make environmental education engaging, accessible, and impactful through innovative gamification and interactive learning experiences."}
            </p>
        </div>
        <div>
            <h2>{"Our Mission"}</h2>
            <p style="opacity:0.85;">{"We're on a mission to transform how people learn about environmental conservation. By combining gamification with comprehensive educational content, we make learning about sustainability fun, engaging, and rewarding."}</p>
            <p style="opacity:0.85;">{"Our platform serves as a bridge between complex environmental concepts and practical, actionable knowledge that learners can apply in their daily lives to make a positive impact on our planet."}</p>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(160px, 1fr)); gap:12px;">
            { for ABOUT_STATS.iter().map(|(value, label)| html! {
                <div style="text-align:center; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;">
                    <div style="font-size:28px; font-weight:700; color:#3fb950;">{ *value }</div>
                    <div style="font-size:13px; opacity:0.75;">{ *label }</div>
                </div>
            }) }
        </div>
        <div>
            <h2 style="text-align:center;">{"Our Core Values"}</h2>
            <p style="text-align:center; opacity:0.75;">{"These principles guide everything we do at EcoLearn"}</p>
            <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:12px;">
                { for VALUES.iter().map(|v| html! {
                    <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;">
                        <div style="font-size:26px;">{ v.icon }</div>
                        <div style="font-weight:600; margin:6px 0;">{ v.title }</div>
                        <div style="font-size:13px; opacity:0.8;">{ v.description }</div>
                    </div>
                }) }
            </div>
        </div>
        <div style="text-align:center; padding:24px; border-radius:12px; background:rgba(46,160,67,0.1); border:1px solid #2ea043;">
            <h2 style="margin-top:0;">{"Built by Environmental Enthusiasts"}</h2>
            <p style="opacity:0.85;">{"Our team combines expertise in education, technology, and environmental science to create the most effective learning platform for sustainability education."}</p>
            <p style="font-weight:600;">{"Together, we can build a more sustainable future through education"}</p>
        </div>
    </section>}
}
