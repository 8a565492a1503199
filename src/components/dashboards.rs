// Student and teacher dashboards. Mock data only.
use super::progress_bar::ProgressBar;
use crate::content::{
    INSTITUTION_LEADERBOARD, MY_STUDENTS, RECENT_ACHIEVEMENTS, SCHOOL_RANKING, STUDENT, StudentStatus,
    TEACHER, TOP_GLOBAL_STUDENTS,
};
use yew::prelude::*;

const PANEL: &str = "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px; display:flex; flex-direction:column; gap:8px;";

fn row_style(highlight: bool) -> &'static str {
    if highlight {
        "display:flex; justify-content:space-between; align-items:center; padding:8px 10px; border-radius:8px; background:rgba(46,160,67,0.12); border:1px solid #2ea043;"
    } else {
        "display:flex; justify-content:space-between; align-items:center; padding:8px 10px; border-radius:8px; background:#0d1117;"
    }
}

#[derive(Properties, PartialEq, Clone)]
struct StatTileProps {
    icon: &'static str,
    label: &'static str,
    value: String,
}

#[function_component]
fn StatTile(props: &StatTileProps) -> Html {
    html! {<div style="flex:1; min-width:150px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:14px;">
        <div style="font-size:22px;">{ props.icon }</div>
        <div style="font-size:24px; font-weight:700;">{ props.value.clone() }</div>
        <div style="font-size:12px; opacity:0.7;">{ props.label }</div>
    </div>}
}

#[function_component(StudentDashboard)]
pub fn student_dashboard() -> Html {
    let s = &STUDENT;
    html! {<section style="padding:32px 24px; max-width:1100px; margin:0 auto; display:flex; flex-direction:column; gap:20px;">
        <div>
            <h1 style="margin:0;">{ format!("Welcome back, {}! 👋", s.name) }</h1>
            <p style="margin:4px 0 0 0; opacity:0.75;">{ s.institution }</p>
        </div>
        <div style="display:flex; gap:12px; flex-wrap:wrap;">
            <StatTile icon="⭐" label="Total Points" value={s.total_points.to_string()} />
            <StatTile icon="📈" label="Today" value={format!("+{}", s.today_points)} />
            <StatTile icon="📚" label="Courses Completed" value={s.courses_completed.to_string()} />
            <StatTile icon="🎮" label="Games Finished" value={s.games_finished.to_string()} />
        </div>
        <div style={PANEL}>
            <strong>{ format!("Level {}", s.level) }</strong>
            <span style="font-size:13px; opacity:0.75;">{ format!("{} points to next level", s.next_level_points) }</span>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(320px, 1fr)); gap:16px;">
            <div style={PANEL}>
                <h3 style="margin:0;">{"👥 Institution Ranking"}</h3>
                <div style="font-size:28px; font-weight:700;">{ format!("#{}", s.institution_position) }</div>
                <span style="font-size:13px; opacity:0.75;">{ format!("in {}", s.institution) }</span>
                <ProgressBar percent={s.institution_standing.0} />
                <span style="font-size:12px; opacity:0.7;">{ s.institution_standing.1 }</span>
            </div>
            <div style={PANEL}>
                <h3 style="margin:0;">{"⭐ Global Ranking"}</h3>
                <div style="font-size:28px; font-weight:700;">{ format!("#{}", s.global_position) }</div>
                <span style="font-size:13px; opacity:0.75;">{"worldwide"}</span>
                <ProgressBar percent={s.global_standing.0} />
                <span style="font-size:12px; opacity:0.7;">{ s.global_standing.1 }</span>
            </div>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(320px, 1fr)); gap:16px;">
            <div style={PANEL}>
                <h3 style="margin:0;">{"🏆 Institution Leaderboard"}</h3>
                { for INSTITUTION_LEADERBOARD.iter().map(|r| html! {
                    <div style={row_style(r.is_current_user)}>
                        <span>{ format!("#{} {} {}", r.rank, r.avatar, r.name) }{ if r.is_current_user { " (You)" } else { "" } }</span>
                        <span style="font-weight:600;">{ format!("{} pts", r.points) }</span>
                    </div>
                }) }
            </div>
            <div style={PANEL}>
                <h3 style="margin:0;">{"🎖️ Recent Achievements"}</h3>
                { for RECENT_ACHIEVEMENTS.iter().map(|a| html! {
                    <div style={row_style(false)}>
                        <span>{ format!("{} ", a.icon) }<strong>{ a.title }</strong><span style="font-size:12px; opacity:0.7;">{ format!(" · {}", a.description) }</span></span>
                        <span style="color:#3fb950;">{ format!("+{}", a.points) }</span>
                    </div>
                }) }
            </div>
        </div>
    </section>}
}

#[function_component(TeacherDashboard)]
pub fn teacher_dashboard() -> Html {
    let t = &TEACHER;
    html! {<section style="padding:32px 24px; max-width:1100px; margin:0 auto; display:flex; flex-direction:column; gap:20px;">
        <div>
            <h1 style="margin:0;">{ format!("Welcome, {} 👋", t.name) }</h1>
            <p style="margin:4px 0 0 0; opacity:0.75;">{ t.institution }</p>
        </div>
        <div style="display:flex; gap:12px; flex-wrap:wrap;">
            <StatTile icon="👥" label="Students" value={t.students_count.to_string()} />
            <StatTile icon="📚" label="Classes" value={t.classes_count.to_string()} />
            <StatTile icon="🏆" label="Institution Rank" value={format!("#{}", t.institution_rank)} />
        </div>
        <div style={PANEL}>
            <h3 style="margin:0;">{"📋 My Students"}</h3>
            { for MY_STUDENTS.iter().map(|st| {
                let (label, color) = match st.status {
                    StudentStatus::Active => ("Active", "#3fb950"),
                    StudentStatus::NeedsAttention => ("Needs Attention", "#f85149"),
                };
                html! {
                    <div style="display:grid; grid-template-columns:2fr 1fr 1fr 2fr 1fr; gap:10px; align-items:center; padding:8px 10px; border-radius:8px; background:#0d1117;">
                        <strong>{ st.name }</strong>
                        <span>{ format!("{} pts", st.points) }</span>
                        <span>{ format!("Lvl {}", st.level) }</span>
                        <ProgressBar percent={st.progress} />
                        <span style={format!("font-size:12px; color:{};", color)}>{ label }</span>
                    </div>
                }
            }) }
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(320px, 1fr)); gap:16px;">
            <div style={PANEL}>
                <h3 style="margin:0;">{"🏫 Institution Ranking"}</h3>
                { for SCHOOL_RANKING.iter().map(|r| html! {
                    <div style={row_style(r.is_current_school)}>
                        <span>{ format!("#{} {}", r.rank, r.school) }<span style="font-size:12px; opacity:0.7;">{ format!(" · {} students", r.students) }</span></span>
                        <span style="font-weight:600;">{ format!("{} avg", r.avg_points) }</span>
                    </div>
                }) }
            </div>
            <div style={PANEL}>
                <h3 style="margin:0;">{"🌐 Top Students Globally"}</h3>
                { for TOP_GLOBAL_STUDENTS.iter().map(|r| html! {
                    <div style={row_style(r.is_my_student)}>
                        <span>{ format!("#{} {}", r.rank, r.name) }<span style="font-size:12px; opacity:0.7;">{ format!(" · {}", r.school) }</span></span>
                        <span style="font-weight:600;">{ format!("{} pts", r.points) }</span>
                    </div>
                }) }
            </div>
        </div>
    </section>}
}
