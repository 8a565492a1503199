use super::app::NoticeContext;
use crate::content::{CONTACT_CHANNELS, FAQS};
use crate::state::{ContactField, ContactForm, Tone};
use crate::util::{Timeout, after_ms};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Simulated network round trip for the contact form.
const SUBMIT_DELAY_MS: i32 = 1500;

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let pending = use_mut_ref(|| None::<Timeout>);
    let notices = use_context::<NoticeContext>();

    // Cancel a pending submission when leaving the page
    {
        let pending = pending.clone();
        use_effect_with((), move |_| move || drop(pending.borrow_mut().take()));
    }

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                area.value()
            } else {
                e.target_unchecked_into::<HtmlInputElement>().value()
            };
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let pending = pending.clone();
        let notices = notices.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.begin_submit() {
                Ok(false) => {}
                Ok(true) => {
                    log::info!("contact message from {} queued", next.email.trim());
                    form.set(next);
                    let form = form.clone();
                    let notices = notices.clone();
                    *pending.borrow_mut() = after_ms(SUBMIT_DELAY_MS, move || {
                        if let Some(n) = &notices {
                            n.notify("Message sent successfully!", "We'll get back to you within 24 hours.", Tone::Success);
                        }
                        let mut done = (*form).clone();
                        done.finish_submit();
                        form.set(done);
                    });
                }
                Err(err) => {
                    if let Some(n) = &notices {
                        n.notify("Please check the form", err.to_string(), Tone::Danger);
                    }
                }
            }
        })
    };

    let field_style = "width:100%; padding:10px; border-radius:8px; border:1px solid #30363d; background:#0d1117; color:inherit; box-sizing:border-box;";
    let f = &*form;
    html! {<section style="padding:48px 24px; max-width:1100px; margin:0 auto; display:flex; flex-direction:column; gap:28px;">
        <div style="text-align:center;">
            <span style="font-size:13px; opacity:0.7;">{"💬 Get in Touch"}</span>
            <h1 style="font-size:40px; margin:8px 0;">{"Let's Start a "}<span style="color:#3fb950;">{"Conversation"}</span></h1>
            <p style="opacity:0.85; max-width:720px; margin:0 auto;">
                {"Have questions about our platform? Want to partner with us? We'd love to hear from you and help you on your environmental learning journey."}
            </p>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:12px;">
            { for CONTACT_CHANNELS.iter().map(|c| html! {
                <a href={c.href} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px; color:inherit; text-decoration:none;">
                    <div style="font-size:26px;">{ c.icon }</div>
                    <div style="font-weight:600;">{ c.title }</div>
                    <div style="font-size:12px; opacity:0.7;">{ c.description }</div>
                    <div style="margin-top:6px; color:#3fb950;">{ c.value }</div>
                </a>
            }) }
        </div>
        <form onsubmit={on_submit} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:20px; display:flex; flex-direction:column; gap:12px;">
            <h2 style="margin:0;">{"Send us a Message"}</h2>
            <div style="display:flex; gap:12px; flex-wrap:wrap;">
                <input style={field_style} placeholder="Your name" value={f.name.clone()} oninput={on_input(ContactField::Name)} disabled={f.submitting} />
                <input style={field_style} type="email" placeholder="you@example.com" value={f.email.clone()} oninput={on_input(ContactField::Email)} disabled={f.submitting} />
            </div>
            <input style={field_style} placeholder="Subject" value={f.subject.clone()} oninput={on_input(ContactField::Subject)} disabled={f.submitting} />
            <textarea style={field_style} rows="6" placeholder="Tell us how we can help..." value={f.message.clone()} oninput={on_input(ContactField::Message)} disabled={f.submitting} />
            <button type="submit" disabled={f.submitting} style="padding:12px; font-weight:600;">
                { if f.submitting { "Sending..." } else { "Send Message" } }
            </button>
        </form>
        <div>
            <h2>{"Frequently Asked Questions"}</h2>
            { for FAQS.iter().map(|(q, a)| html! {
                <div style="border-bottom:1px solid #30363d; padding:12px 0;">
                    <div style="font-weight:600;">{ *q }</div>
                    <div style="font-size:14px; opacity:0.8; margin-top:4px;">{ *a }</div>
                </div>
            }) }
        </div>
    </section>}
}
