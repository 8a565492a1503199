pub mod forms;
pub mod notices;

pub use forms::{CLASSES, ContactField, ContactForm, LoginForm};
pub use notices::{NOTICE_TTL_MS, Notice, NoticeAction, NoticeQueue, Tone, describe};
