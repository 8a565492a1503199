// Toast notices: the queue shown in the corner, and how game events read to the player.
use crate::config::GameConfig;
use crate::error::ActionError;
use crate::model::GameEvent;
use std::rc::Rc;
use yew::Reducible;

/// How long a toast stays up before it is dismissed automatically.
pub const NOTICE_TTL_MS: i32 = 4000;
/// Older toasts are dropped once the stack grows past this.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub fn border_color(self) -> &'static str {
        match self {
            Tone::Success => "#2ea043",
            Tone::Warning => "#d29922",
            Tone::Danger => "#f85149",
            Tone::Info => "#58a6ff",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    /// Queue a notice and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, tone: Tone) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            title: title.into(),
            description: description.into(),
            tone,
        });
        if self.items.len() > MAX_VISIBLE {
            let excess = self.items.len() - MAX_VISIBLE;
            self.items.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id)
    }
}

pub enum NoticeAction {
    Push { title: String, description: String, tone: Tone },
    Dismiss(u64),
}

impl Reducible for NoticeQueue {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            NoticeAction::Push { title, description, tone } => {
                new.push(title, description, tone);
            }
            NoticeAction::Dismiss(id) => {
                if !new.contains(id) {
                    return self;
                }
                new.dismiss(id);
            }
        }
        Rc::new(new)
    }
}

/// Title, description and tone for one game event.
pub fn describe(event: &GameEvent, cfg: &GameConfig) -> (String, String, Tone) {
    match event {
        GameEvent::Welcomed { name } => (
            format!("Welcome {name}! 🎉"),
            "Ready to save the forest? Let's go! 🌲".into(),
            Tone::Success,
        ),
        GameEvent::Planted => (
            "Great job planting trees! 🌱".into(),
            "You're helping save our planet! Earth loves you! 🌍💚".into(),
            Tone::Success,
        ),
        GameEvent::Cut => (
            "Tree cut! 🪓".into(),
            format!("You earned {} coins, but oxygen is decreasing! 📉", cfg.cut.reward),
            Tone::Warning,
        ),
        GameEvent::BadgeEarned(id) => {
            let label = cfg
                .badge(*id)
                .map(|b| format!("{} {}", b.name, b.icon))
                .unwrap_or_else(|| format!("{id:?}"));
            (
                format!("🎉 New Badge Earned! {label}"),
                "Congratulations! You're amazing! 🌟".into(),
                Tone::Success,
            )
        }
        GameEvent::Critical => (
            "Earth needs your help! 🌍💙".into(),
            "Without trees, our planet suffers. Try again and save the forest! 🌲✨".into(),
            Tone::Info,
        ),
        GameEvent::Rejected(ActionError::NotEnoughCoins { need, .. }) => (
            "Not enough coins! 💰".into(),
            format!("You need {need} coins to plant a tree. Keep trying! 💪"),
            Tone::Danger,
        ),
        GameEvent::Rejected(ActionError::NoTreesToCut) => (
            "No trees to cut! 😔".into(),
            "Plant some trees first to help our planet grow! 🌱".into(),
            Tone::Danger,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BadgeId;

    #[test]
    fn ids_are_unique_and_dismiss_removes_one() {
        let mut q = NoticeQueue::default();
        let a = q.push("a", "", Tone::Info);
        let b = q.push("b", "", Tone::Info);
        assert_ne!(a, b);
        q.dismiss(a);
        assert!(!q.contains(a));
        assert!(q.contains(b));
        q.dismiss(a);
        assert_eq!(q.items.len(), 1);
    }

    #[test]
    fn oldest_notices_fall_off() {
        let mut q = NoticeQueue::default();
        let first = q.push("first", "", Tone::Info);
        for i in 0..MAX_VISIBLE {
            q.push(format!("n{i}"), "", Tone::Info);
        }
        assert_eq!(q.items.len(), MAX_VISIBLE);
        assert!(!q.contains(first));
    }

    #[test]
    fn reducer_ignores_stale_dismissals() {
        let q = Rc::new(NoticeQueue::default());
        let q = q.reduce(NoticeAction::Push { title: "hi".into(), description: String::new(), tone: Tone::Info });
        let id = q.items[0].id;
        let q = q.reduce(NoticeAction::Dismiss(id));
        assert!(q.items.is_empty());
        let same = q.clone().reduce(NoticeAction::Dismiss(id));
        assert!(Rc::ptr_eq(&q, &same));
    }

    #[test]
    fn badge_notice_uses_catalog_name() {
        let cfg = GameConfig::default();
        let (title, _, tone) = describe(&GameEvent::BadgeEarned(BadgeId::ForestHero), &cfg);
        assert_eq!(title, "🎉 New Badge Earned! Forest Hero 🌳");
        assert_eq!(tone, Tone::Success);
    }

    #[test]
    fn rejected_plant_mentions_cost() {
        let cfg = GameConfig::default();
        let event = GameEvent::Rejected(ActionError::NotEnoughCoins { have: 2, need: 5 });
        let (_, description, tone) = describe(&event, &cfg);
        assert!(description.contains("5 coins"));
        assert_eq!(tone, Tone::Danger);
    }
}
