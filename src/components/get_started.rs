use super::app::NavContext;
use crate::route::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
struct RoleCardProps {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    perks: [&'static str; 3],
    cta: &'static str,
    target: Route,
}

#[function_component]
fn RoleCard(props: &RoleCardProps) -> Html {
    let nav = use_context::<NavContext>();
    let go = {
        let target = props.target.clone();
        Callback::from(move |_| {
            if let Some(nav) = &nav {
                nav.navigate.emit(target.clone());
            }
        })
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:2px solid #30363d; border-radius:14px; padding:24px; text-align:center; display:flex; flex-direction:column; gap:12px;">
        <div style="font-size:56px;">{ props.icon }</div>
        <h2 style="margin:0;">{ props.title }</h2>
        <p style="opacity:0.8; margin:0;">{ props.blurb }</p>
        <ul style="text-align:left; margin:0; padding-left:20px; display:flex; flex-direction:column; gap:4px;">
            { for props.perks.iter().map(|p| html!{ <li>{ *p }</li> }) }
        </ul>
        <button onclick={go} style="padding:12px; font-weight:600;">{ props.cta }</button>
    </div>}
}

#[function_component(GetStarted)]
pub fn get_started() -> Html {
    html! {<section style="padding:48px 24px; max-width:900px; margin:0 auto; display:flex; flex-direction:column; gap:28px;">
        <div style="text-align:center;">
            <div style="font-size:56px;">{"📖"}</div>
            <h1 style="margin:8px 0; font-size:40px; color:#3fb950;">{"Welcome to EcoLearn"}</h1>
            <p style="opacity:0.8;">{"Choose your role to start your environmental education journey"}</p>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(280px, 1fr)); gap:18px;">
            <RoleCard
                icon="🎓"
                title="I'm a Student"
                blurb="Access interactive learning modules, earn points, compete with classmates, and track your environmental education progress."
                perks={["Earn points and badges", "Interactive learning modules", "Compete with classmates"]}
                cta="Continue as Student"
                target={Route::StudentDashboard}
            />
            <RoleCard
                icon="👥"
                title="I'm a Teacher"
                blurb="Manage your students, track their progress, create engaging assignments, and monitor institutional performance."
                perks={["Manage student progress", "Institution leaderboards", "Create assignments"]}
                cta="Continue as Teacher"
                target={Route::TeacherDashboard}
            />
        </div>
        <p style="text-align:center; opacity:0.6;">{"Don't have an account? The app will guide you through the setup process."}</p>
    </section>}
}
