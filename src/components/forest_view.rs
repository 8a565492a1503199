use super::{
    app::NoticeContext, badges_panel::BadgesPanel, critical_banner::CriticalBanner,
    leaderboard_view::LeaderboardView, login_card::LoginCard, stats_panel::StatsPanel,
};
use crate::config::GameConfig;
use crate::model::{ForestAction, ForestSession};
use crate::state::{LoginForm, Tone, describe};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SaveTheForestProps {
    pub config: Rc<GameConfig>,
}

#[function_component(SaveTheForest)]
pub fn save_the_forest(props: &SaveTheForestProps) -> Html {
    let session = {
        let config = props.config.clone();
        use_reducer(move || ForestSession::new(config))
    };
    let login_form = use_state(LoginForm::default);
    let notices = use_context::<NoticeContext>();

    // Effect: on each version update, turn the transition's events into notices
    {
        let session = session.clone();
        let notices = notices.clone();
        use_effect_with(session.version, move |_| {
            if let Some(notices) = &notices {
                for event in &session.events {
                    let (title, description, tone) = describe(event, &session.config);
                    notices.notify(title, description, tone);
                }
            }
            || ()
        });
    }

    let Some(game) = session.game.clone() else {
        let on_change = {
            let login_form = login_form.clone();
            Callback::from(move |f: LoginForm| login_form.set(f))
        };
        let on_submit = {
            let session = session.clone();
            let login_form = login_form.clone();
            let notices = notices.clone();
            Callback::from(move |_: ()| match login_form.validate() {
                Ok((name, class)) => session.dispatch(ForestAction::Login { name, class }),
                Err(e) => {
                    log::debug!("login refused: {e}");
                    if let Some(n) = &notices {
                        n.notify("Almost there! ✏️", e.to_string(), Tone::Warning);
                    }
                }
            })
        };
        return html! { <LoginCard form={(*login_form).clone()} {on_change} {on_submit} /> };
    };

    let set_leaderboard = |show: bool| {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(ForestAction::ShowLeaderboard(show)))
    };
    if session.show_leaderboard {
        return html! { <LeaderboardView back={set_leaderboard(false)} /> };
    }

    let plant = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(ForestAction::Plant))
    };
    let cut = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(ForestAction::Cut))
    };
    let cfg = &session.config;
    let can_plant = game.can_plant(cfg);
    let can_cut = game.can_cut();

    let forest = if game.trees == 0 {
        html! { <div style="font-size:28px; opacity:0.7;">{"🏜️ No trees left! Plant some! 🌱"}</div> }
    } else {
        html! { <>{ for (0..game.trees).map(|i| html! { <span key={i}>{"🌲"}</span> }) }</> }
    };

    html! {<div style="max-width:1000px; margin:0 auto; padding:24px 16px; display:flex; flex-direction:column; gap:18px;">
        <div style="display:flex; align-items:center; justify-content:space-between; gap:12px; flex-wrap:wrap;">
            <div>
                <h1 style="margin:0 0 4px 0; color:#3fb950;">{"🌲 Save the Forest!"}</h1>
                <p style="margin:0; opacity:0.8;">{ format!("Welcome back, {} from {}! 🎉", game.player_name, game.player_class) }</p>
            </div>
            <button onclick={set_leaderboard(true).reform(|_: MouseEvent| ())}>{"Leaderboard 🏆"}</button>
        </div>

        <StatsPanel
            trees={game.trees}
            coins={game.coins}
            oxygen={game.oxygen}
            oxygen_percent={game.oxygen_percent()}
            score={game.score}
            level={game.level}
            streak={game.streak}
        />

        <CriticalBanner show={game.is_critical()} no_trees={game.trees == 0} />

        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:16px; text-align:center;">
            <h3 style="margin:0 0 10px 0;">{"🌳 Your Forest 🌳"}</h3>
            <div style="font-size:44px; line-height:1.5; padding:16px; border-radius:8px; background:linear-gradient(#0d2538, #0f2a1a);">{ forest }</div>
        </div>

        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(240px, 1fr)); gap:14px;">
            <button onclick={plant} disabled={!can_plant} style="padding:16px; font-size:18px;">
                <div style="font-size:28px;">{"🌱"}</div>
                <div>{"Plant Tree"}</div>
                <div style="font-size:12px; opacity:0.8;">{ format!("(Costs {} coins)", cfg.plant.cost) }</div>
            </button>
            <button onclick={cut} disabled={!can_cut} style="padding:16px; font-size:18px;">
                <div style="font-size:28px;">{"🪓"}</div>
                <div>{"Cut Tree"}</div>
                <div style="font-size:12px; opacity:0.8;">{ format!("(+{} coins, -{} oxygen)", cfg.cut.reward, cfg.cut.oxygen_loss) }</div>
            </button>
        </div>

        <BadgesPanel
            catalog={cfg.badges.clone()}
            owned={game.badges.clone()}
            total_trees_planted={game.total_trees_planted}
            total_trees_cut={game.total_trees_cut}
        />
    </div>}
}
