use dioxus::prelude::*;

use store::PersonalInfo;

use crate::components::{Button, ButtonVariant, Card, Input, Label, Section, Textarea};
use crate::icons::{FaEnvelope, FaGithub, FaLinkedin, FaLocationDot, FaPhone, FaTwitter};
use crate::{make_store_with, use_portfolio, Icon};

/// Shared profile view: read-only card plus a wholesale-replace edit form.
#[component]
pub fn ProfileView() -> Element {
    let mut portfolio = use_portfolio();
    let mut editing = use_signal(|| false);
    let mut form = use_signal(PersonalInfo::default);

    let handle_edit = move |_| {
        form.set(portfolio.peek().personal_info.clone());
        editing.set(true);
    };

    let handle_save = move |_| {
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.update_personal_info(form.peek().clone()).await;
            portfolio.set(store.into_data());
            editing.set(false);
        });
    };

    let info = portfolio().personal_info;

    rsx! {
        div {
            class: "view-page",
            if editing() {
                Section {
                    title: "Personal Information",
                    Card {
                        div {
                            class: "form-field",
                            Label { html_for: "profile-image", "Profile Image URL" }
                            Input {
                                id: "profile-image",
                                placeholder: "https://example.com/profile.jpg",
                                value: form().profile_image,
                                oninput: move |evt: FormEvent| form.write().profile_image = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-name", "Full Name" }
                            Input {
                                id: "profile-name",
                                placeholder: "John Doe",
                                value: form().name,
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-title", "Professional Title" }
                            Input {
                                id: "profile-title",
                                placeholder: "Full Stack Developer",
                                value: form().title,
                                oninput: move |evt: FormEvent| form.write().title = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-bio", "Bio" }
                            Textarea {
                                id: "profile-bio",
                                placeholder: "Tell visitors about yourself...",
                                rows: 4,
                                value: form().bio,
                                oninput: move |evt: FormEvent| form.write().bio = evt.value(),
                            }
                        }
                    }
                }
                Section {
                    title: "Contact Details",
                    Card {
                        div {
                            class: "form-field",
                            Label { html_for: "profile-email", "Email" }
                            Input {
                                id: "profile-email",
                                r#type: "email",
                                placeholder: "john.doe@example.com",
                                value: form().email,
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-phone", "Phone" }
                            Input {
                                id: "profile-phone",
                                placeholder: "+1 (123) 456-7890",
                                value: form().phone,
                                oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-location", "Location" }
                            Input {
                                id: "profile-location",
                                placeholder: "San Francisco, CA",
                                value: form().location,
                                oninput: move |evt: FormEvent| form.write().location = evt.value(),
                            }
                        }
                    }
                }
                Section {
                    title: "Social Links",
                    Card {
                        div {
                            class: "form-field",
                            Label { html_for: "profile-linkedin", "LinkedIn URL" }
                            Input {
                                id: "profile-linkedin",
                                placeholder: "https://linkedin.com/in/johndoe",
                                value: form().social_links.linkedin,
                                oninput: move |evt: FormEvent| form.write().social_links.linkedin = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-github", "GitHub URL" }
                            Input {
                                id: "profile-github",
                                placeholder: "https://github.com/johndoe",
                                value: form().social_links.github,
                                oninput: move |evt: FormEvent| form.write().social_links.github = evt.value(),
                            }
                        }
                        div {
                            class: "form-field",
                            Label { html_for: "profile-twitter", "Twitter URL" }
                            Input {
                                id: "profile-twitter",
                                placeholder: "https://twitter.com/johndoe",
                                value: form().social_links.twitter,
                                oninput: move |evt: FormEvent| form.write().social_links.twitter = evt.value(),
                            }
                        }
                    }
                }
                div {
                    class: "button-row",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editing.set(false),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: form().name.trim().is_empty(),
                        onclick: handle_save,
                        "Save"
                    }
                }
            } else {
                Card {
                    class: "profile-card",
                    div {
                        class: "profile-header",
                        if !info.profile_image.is_empty() {
                            img {
                                class: "profile-image",
                                src: "{info.profile_image}",
                                alt: "{info.name}",
                            }
                        }
                        div {
                            class: "profile-identity",
                            h1 { class: "profile-name", "{info.name}" }
                            div { class: "profile-title", "{info.title}" }
                        }
                    }
                    div {
                        class: "contact-list",
                        div {
                            class: "contact-item",
                            Icon { icon: FaEnvelope, width: 16, height: 16 }
                            span { "{info.email}" }
                        }
                        div {
                            class: "contact-item",
                            Icon { icon: FaPhone, width: 16, height: 16 }
                            span { "{info.phone}" }
                        }
                        div {
                            class: "contact-item",
                            Icon { icon: FaLocationDot, width: 16, height: 16 }
                            span { "{info.location}" }
                        }
                    }
                    div {
                        class: "social-row",
                        if !info.social_links.linkedin.is_empty() {
                            a {
                                class: "social-button",
                                href: "{info.social_links.linkedin}",
                                target: "_blank",
                                Icon { icon: FaLinkedin, width: 20, height: 20 }
                            }
                        }
                        if !info.social_links.github.is_empty() {
                            a {
                                class: "social-button",
                                href: "{info.social_links.github}",
                                target: "_blank",
                                Icon { icon: FaGithub, width: 20, height: 20 }
                            }
                        }
                        if !info.social_links.twitter.is_empty() {
                            a {
                                class: "social-button",
                                href: "{info.social_links.twitter}",
                                target: "_blank",
                                Icon { icon: FaTwitter, width: 20, height: 20 }
                            }
                        }
                    }
                    p { class: "profile-bio", "{info.bio}" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "full-width",
                    onclick: handle_edit,
                    "Edit Profile Information"
                }
            }
        }
    }
}
