use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use log::{error, info};

use crate::components::notification::{Notification, Toast};
use crate::components::reveal::use_in_view;
use crate::config;
use crate::content::{CONTACT_CARDS, INQUIRY_OPTIONS};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),
    #[error("Check-out must be after check-in")]
    CheckOutBeforeCheckIn,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry: String,
    pub check_in: String,
    pub check_out: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            inquiry: INQUIRY_OPTIONS[0].0.to_string(),
            check_in: String::new(),
            check_out: String::new(),
            message: String::new(),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<Option<NaiveDate>, ContactFormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(Some)
        .map_err(|_| ContactFormError::InvalidDate(field))
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactFormError> {
        for (value, field) in [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.email, "Email"),
        ] {
            if value.trim().is_empty() {
                return Err(ContactFormError::MissingField(field));
            }
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail);
        }
        let check_in = parse_date(&self.check_in, "Check-in date")?;
        let check_out = parse_date(&self.check_out, "Check-out date")?;
        if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
            if check_out <= check_in {
                return Err(ContactFormError::CheckOutBeforeCheckIn);
            }
        }
        Ok(())
    }
}

fn input_setter(form: &UseStateHandle<ContactForm>, apply: fn(&mut ContactForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let form = use_state(ContactForm::default);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let toast = use_state(|| None::<Toast>);
    let sent_count = use_mut_ref(|| 0_u32);

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let toast = toast.clone();
        let sent_count = sent_count.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(err) = form.validate() {
                form_error.set(Some(err.to_string()));
                return;
            }
            form_error.set(None);
            match serde_json::to_string(&*form) {
                Ok(payload) => info!("Submitting inquiry {}", payload),
                Err(err) => error!("Could not serialize inquiry: {}", err),
            }
            submitting.set(true);

            let form = form.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            let sent_count = sent_count.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::CONTACT_SUBMIT_DELAY_MS).await;
                let id = {
                    let mut count = sent_count.borrow_mut();
                    *count = count.wrapping_add(1);
                    *count
                };
                toast.set(Some(Toast::message_sent(id)));
                form.set(ContactForm::default());
                submitting.set(false);
            });
        })
    };

    let on_inquiry = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.inquiry = select.value();
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let cards = CONTACT_CARDS.iter().map(|card| html! {
        <div key={card.title} class="contact-card">
            <span class="contact-card-icon">{ card.icon }</span>
            <div>
                <h4>{ card.title }</h4>
                { card.details.iter().map(|d| html! { <p key={*d}>{*d}</p> }).collect::<Html>() }
                <a href={card.href} target="_blank" rel="noopener noreferrer" class="contact-card-action">
                    { card.action }
                </a>
            </div>
        </div>
    }).collect::<Html>();

    let inquiry_options = INQUIRY_OPTIONS.iter().map(|(value, label)| html! {
        <option key={*value} value={*value} selected={form.inquiry == *value}>{*label}</option>
    }).collect::<Html>();

    html! {
        <section id="contact" class={classes!("contact", "reveal", in_view.then(|| "visible"))} ref={node}>
            <div class="container">
                <div class="section-header light">
                    <h3 class="eyebrow">{"GET IN TOUCH"}</h3>
                    <h2>{"Plan Your Perfect Getaway"}</h2>
                    <p>{"Ready to experience rustic royalty? Contact us to plan your stay or ask any questions about our facilities and services."}</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="contact-cards">{ cards }</div>
                        <div class="reception-hours">
                            <h4>{"🕑 Reception Hours"}</h4>
                            <p><span>{"Check-in:"}</span>{" 2:00 PM - 11:00 PM"}</p>
                            <p><span>{"Check-out:"}</span>{" 7:00 AM - 12:00 PM"}</p>
                            <p class="reception-note">{"24/7 Emergency Assistance Available"}</p>
                        </div>
                    </div>
                    <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                        <h3>{"Send us a Message"}</h3>
                        <div class="form-row">
                            <label>
                                {"First Name *"}
                                <input
                                    placeholder="Your first name"
                                    value={form.first_name.clone()}
                                    oninput={input_setter(&form, |f, v| f.first_name = v)}
                                />
                            </label>
                            <label>
                                {"Last Name *"}
                                <input
                                    placeholder="Your last name"
                                    value={form.last_name.clone()}
                                    oninput={input_setter(&form, |f, v| f.last_name = v)}
                                />
                            </label>
                        </div>
                        <label>
                            {"Email *"}
                            <input
                                type="email"
                                placeholder="your.email@example.com"
                                value={form.email.clone()}
                                oninput={input_setter(&form, |f, v| f.email = v)}
                            />
                        </label>
                        <div class="form-row">
                            <label>
                                {"Phone Number"}
                                <input
                                    type="tel"
                                    placeholder={config::RESORT_PHONE}
                                    value={form.phone.clone()}
                                    oninput={input_setter(&form, |f, v| f.phone = v)}
                                />
                            </label>
                            <label>
                                {"Room Inquiry"}
                                <select onchange={on_inquiry}>{ inquiry_options }</select>
                            </label>
                        </div>
                        <div class="form-row">
                            <label>
                                {"Check-in Date"}
                                <input
                                    type="date"
                                    value={form.check_in.clone()}
                                    oninput={input_setter(&form, |f, v| f.check_in = v)}
                                />
                            </label>
                            <label>
                                {"Check-out Date"}
                                <input
                                    type="date"
                                    value={form.check_out.clone()}
                                    oninput={input_setter(&form, |f, v| f.check_out = v)}
                                />
                            </label>
                        </div>
                        <label>
                            {"Message"}
                            <textarea
                                rows="5"
                                placeholder="Tell us about your plans, special requests or questions..."
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </label>
                        {
                            if let Some(message) = (*form_error).as_ref() {
                                html! { <p class="form-error">{ message }</p> }
                            } else {
                                html! {}
                            }
                        }
                        <button type="submit" class="contact-submit cursor-luxury" disabled={*submitting}>
                            { if *submitting { "Sending..." } else { "✈ Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
            {
                if let Some(current) = (*toast).clone() {
                    html! { <Notification toast={current} on_dismiss={dismiss_toast} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Anitha".into(),
            last_name: "Reddy".into(),
            email: "anitha@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.first_name = "  ".into();
        form.email.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("First name")));

        let mut form = filled();
        form.last_name.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("Last name")));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingField("Email")));
    }

    #[test]
    fn email_must_look_like_an_address() {
        for bad in ["anitha", "@example.com", "anitha@", "anitha@example", "a@b@c.com", "anitha@example."] {
            let mut form = filled();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn stay_dates_must_be_ordered() {
        let mut form = filled();
        form.check_in = "2026-12-20".into();
        form.check_out = "2026-12-23".into();
        assert_eq!(form.validate(), Ok(()));

        form.check_out = "2026-12-20".into();
        assert_eq!(form.validate(), Err(ContactFormError::CheckOutBeforeCheckIn));

        form.check_out = "2026-12-18".into();
        assert_eq!(form.validate(), Err(ContactFormError::CheckOutBeforeCheckIn));
    }

    #[test]
    fn one_sided_or_garbled_dates() {
        let mut form = filled();
        form.check_in = "2026-12-20".into();
        assert_eq!(form.validate(), Ok(()));

        form.check_out = "next friday".into();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidDate("Check-out date")));
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(ContactFormError::MissingField("Email").to_string(), "Email is required");
        assert_eq!(
            ContactFormError::CheckOutBeforeCheckIn.to_string(),
            "Check-out must be after check-in"
        );
    }

    #[test]
    fn inquiry_serializes_with_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["first_name"], "Anitha");
        assert_eq!(json["inquiry"], "general");
        assert_eq!(json["check_in"], "");
    }
}
