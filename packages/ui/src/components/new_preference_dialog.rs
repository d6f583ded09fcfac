use std::fmt;

use api::{Preference, PreferencePatch, Profile};
use chrono::{DateTime, Local, TimeZone, Utc};
use dioxus::prelude::*;

use super::Spacer;
use crate::containers::use_update_preference;

/// Where the "Not you?" link sends the user.
pub const SIGN_OUT_URL: &str = "/accounts/logout";

/// Path of a user's public, read-only preference page.
pub fn public_preference_path(username: &str) -> String {
    format!("/preferences/user/{username}")
}

/// Dialog shown to signed-in users.
///
/// Lets the user edit their preference, starting from `existing_preference`
/// when they have one, and thanks them once it has been recorded.
#[component]
pub fn NewPreferenceDialog(profile: Profile, existing_preference: Option<Preference>) -> Element {
    let editor = use_update_preference(existing_preference);
    let state = editor.state();
    let preference = state.preference;
    let display_name = profile.display_name().to_string();

    if state.last_submitted_at.is_some() {
        return rsx! {
            h2 { class: "headline", "Thank you, {display_name}" }
            p { class: "body", "Your preferences have been recorded." }
            Spacer {}
            ul {
                class: "body preference-summary",
                li {
                    "You "
                    strong { if preference.allow_capture { " DO " } else { " DO NOT " } }
                    " agree to having your lectures recorded."
                }
                li {
                    "You "
                    strong { if preference.request_hold { " DO " } else { " DO NOT " } }
                    " wish to hold recordings for trimming."
                }
            }
            Spacer {}
            p {
                class: "body",
                "You may check your preference at any point by visiting your "
                a { href: public_preference_path(&profile.username), "public profile page" }
                " or you may "
                a { href: "/", "change them" }
                "."
            }
        };
    }

    rsx! {
        h2 { class: "headline", "Welcome, {display_name}" }
        p {
            class: "caption",
            "Not you? Please "
            a { href: SIGN_OUT_URL, "sign out" }
            "."
        }
        Spacer {}
        p { class: "body", {last_expressed(preference.expressed_at)} }
        Spacer {}
        div {
            class: "form-group",
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: preference.allow_capture,
                    disabled: state.is_submitting,
                    onchange: move |evt: FormEvent| {
                        editor.update(PreferencePatch::allow_capture(evt.checked()))
                    },
                }
                "I agree that my lectures may be captured"
            }
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: preference.request_hold,
                    disabled: state.is_submitting,
                    onchange: move |evt: FormEvent| {
                        editor.update(PreferencePatch::request_hold(evt.checked()))
                    },
                }
                "I wish to hold recordings for trimming before they are published"
            }
        }
        Spacer {}
        p {
            class: "caption",
            "Opt-ins are for the current Academic year and will renew each year automatically unless the option is deselected. Your lecture capture preference is public information."
        }
        Spacer {}
        div {
            class: "actions",
            button {
                class: "button button-outlined",
                disabled: state.is_submitting,
                onclick: move |_| editor.submit(),
                "Express preference"
            }
        }
    }
}

fn last_expressed(expressed_at: Option<DateTime<Utc>>) -> String {
    match expressed_at {
        Some(at) => format!(
            "You last expressed a preference at {}.",
            format_timestamp(&at.with_timezone(&Local))
        ),
        None => "You have not previously expressed a preference.".to_string(),
    }
}

fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%a %b %d %Y %H:%M:%S").to_string()
}
