use dioxus::prelude::*;

use store::WorkExperience;

use crate::components::{Button, ButtonVariant, Card, Input, Label, Section, Textarea};
use crate::icons::{FaPenToSquare, FaPlus, FaTrashCan, FaXmark};
use crate::{make_store_with, use_portfolio, Icon};

#[component]
pub fn ExperienceView() -> Element {
    let mut portfolio = use_portfolio();
    let mut editing = use_signal(|| Option::<WorkExperience>::None);
    let mut edit_achievement_input = use_signal(String::new);
    let mut show_add_form = use_signal(|| false);
    let mut draft = use_signal(WorkExperience::default);
    let mut achievement_input = use_signal(String::new);

    let handle_add = move |_| {
        let job = draft.peek().clone();
        if job.company.trim().is_empty() || job.position.trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.add_work_experience(job).await;
            portfolio.set(store.into_data());
            draft.set(WorkExperience::default());
            achievement_input.set(String::new());
            show_add_form.set(false);
        });
    };

    let handle_update = move |_| {
        let Some(job) = editing.peek().clone() else {
            return;
        };
        if job.company.trim().is_empty() || job.position.trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.update_work_experience(job).await;
            portfolio.set(store.into_data());
            editing.set(None);
            edit_achievement_input.set(String::new());
        });
    };

    let add_draft_achievement = move |_| {
        let achievement = achievement_input.peek().trim().to_string();
        if !achievement.is_empty() {
            draft.write().achievements.push(achievement);
            achievement_input.set(String::new());
        }
    };

    let add_edit_achievement = move |_| {
        let achievement = edit_achievement_input.peek().trim().to_string();
        if achievement.is_empty() {
            return;
        }
        if let Some(job) = editing.write().as_mut() {
            job.achievements.push(achievement);
        }
        edit_achievement_input.set(String::new());
    };

    let experience = portfolio().work_experience;
    let editing_id = editing().map(|job| job.id);

    rsx! {
        div {
            class: "view-page",
            Section {
                title: "Work Experience",
                if experience.is_empty() {
                    Card {
                        p { class: "empty-text", "No work experience added yet. Add your career history!" }
                    }
                }
                for job in experience {
                    if editing_id.as_deref() == Some(job.id.as_str()) {
                        Card {
                            key: "{job.id}",
                            class: "edit-card",
                            h3 { class: "form-title", "Edit Experience" }
                            div {
                                class: "form-field",
                                Label { html_for: "job-company", "Company" }
                                Input {
                                    id: "job-company",
                                    placeholder: "Company Name",
                                    value: editing().map(|j| j.company).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(j) = editing.write().as_mut() {
                                            j.company = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "job-position", "Position" }
                                Input {
                                    id: "job-position",
                                    placeholder: "Job Title",
                                    value: editing().map(|j| j.position).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(j) = editing.write().as_mut() {
                                            j.position = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "job-start", "Start Date" }
                                Input {
                                    id: "job-start",
                                    placeholder: "e.g. Jan 2021",
                                    value: editing().map(|j| j.start_date).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(j) = editing.write().as_mut() {
                                            j.start_date = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "job-end", "End Date" }
                                Input {
                                    id: "job-end",
                                    placeholder: "e.g. Present",
                                    value: editing().map(|j| j.end_date).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(j) = editing.write().as_mut() {
                                            j.end_date = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "job-description", "Description" }
                                Textarea {
                                    id: "job-description",
                                    placeholder: "Describe your role and responsibilities...",
                                    value: editing().map(|j| j.description).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(j) = editing.write().as_mut() {
                                            j.description = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "job-achievements", "Key Achievements" }
                                div {
                                    class: "chip-input-row",
                                    Input {
                                        id: "job-achievements",
                                        placeholder: "e.g. Led a team of 5 developers",
                                        value: edit_achievement_input(),
                                        oninput: move |evt: FormEvent| edit_achievement_input.set(evt.value()),
                                    }
                                    Button {
                                        variant: ButtonVariant::Secondary,
                                        onclick: add_edit_achievement,
                                        "Add"
                                    }
                                }
                                ul {
                                    class: "achievement-list editable",
                                    for (index, achievement) in editing().map(|j| j.achievements).unwrap_or_default().into_iter().enumerate() {
                                        li {
                                            key: "{index}",
                                            span { "{achievement}" }
                                            button {
                                                class: "chip-remove",
                                                onclick: move |_| {
                                                    if let Some(j) = editing.write().as_mut() {
                                                        if index < j.achievements.len() {
                                                            j.achievements.remove(index);
                                                        }
                                                    }
                                                },
                                                Icon { icon: FaXmark, width: 10, height: 10 }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                class: "button-row",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        editing.set(None);
                                        edit_achievement_input.set(String::new());
                                    },
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: editing()
                                        .map(|j| j.company.trim().is_empty() || j.position.trim().is_empty())
                                        .unwrap_or(true),
                                    onclick: handle_update,
                                    "Save"
                                }
                            }
                        }
                    } else {
                        Card {
                            key: "{job.id}",
                            div {
                                class: "item-header",
                                div {
                                    span { class: "item-title", "{job.position}" }
                                    p { class: "item-subtitle", "{job.company}" }
                                }
                                div {
                                    class: "item-actions",
                                    button {
                                        class: "icon-button",
                                        title: "Edit experience",
                                        onclick: {
                                            let job = job.clone();
                                            move |_| editing.set(Some(job.clone()))
                                        },
                                        Icon { icon: FaPenToSquare, width: 16, height: 16 }
                                    }
                                    button {
                                        class: "icon-button danger",
                                        title: "Delete experience",
                                        onclick: {
                                            let id = job.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                spawn(async move {
                                                    let mut store = make_store_with(portfolio.peek().clone());
                                                    store.remove_work_experience(&id).await;
                                                    portfolio.set(store.into_data());
                                                });
                                            }
                                        },
                                        Icon { icon: FaTrashCan, width: 16, height: 16 }
                                    }
                                }
                            }
                            p { class: "item-duration", "{job.start_date} - {job.end_date}" }
                            if !job.description.is_empty() {
                                p { class: "item-description", "{job.description}" }
                            }
                            if !job.achievements.is_empty() {
                                ul {
                                    class: "achievement-list",
                                    for achievement in &job.achievements {
                                        li { key: "{achievement}", "{achievement}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_add_form() {
                Card {
                    class: "add-card",
                    h3 { class: "form-title", "Add New Experience" }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-company", "Company" }
                        Input {
                            id: "new-job-company",
                            placeholder: "Company Name",
                            value: draft().company,
                            oninput: move |evt: FormEvent| draft.write().company = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-position", "Position" }
                        Input {
                            id: "new-job-position",
                            placeholder: "Job Title",
                            value: draft().position,
                            oninput: move |evt: FormEvent| draft.write().position = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-start", "Start Date" }
                        Input {
                            id: "new-job-start",
                            placeholder: "e.g. Jan 2021",
                            value: draft().start_date,
                            oninput: move |evt: FormEvent| draft.write().start_date = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-end", "End Date" }
                        Input {
                            id: "new-job-end",
                            placeholder: "e.g. Present",
                            value: draft().end_date,
                            oninput: move |evt: FormEvent| draft.write().end_date = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-description", "Description" }
                        Textarea {
                            id: "new-job-description",
                            placeholder: "Describe your role and responsibilities...",
                            value: draft().description,
                            oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-job-achievements", "Key Achievements" }
                        div {
                            class: "chip-input-row",
                            Input {
                                id: "new-job-achievements",
                                placeholder: "e.g. Led a team of 5 developers",
                                value: achievement_input(),
                                oninput: move |evt: FormEvent| achievement_input.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: add_draft_achievement,
                                "Add"
                            }
                        }
                        ul {
                            class: "achievement-list editable",
                            for (index, achievement) in draft().achievements.into_iter().enumerate() {
                                li {
                                    key: "{index}",
                                    span { "{achievement}" }
                                    button {
                                        class: "chip-remove",
                                        onclick: move |_| {
                                            let mut draft = draft.write();
                                            if index < draft.achievements.len() {
                                                draft.achievements.remove(index);
                                            }
                                        },
                                        Icon { icon: FaXmark, width: 10, height: 10 }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "button-row",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_add_form.set(false),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: draft().company.trim().is_empty() || draft().position.trim().is_empty(),
                            onclick: handle_add,
                            "Add Experience"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    class: "full-width",
                    onclick: move |_| show_add_form.set(true),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add New Experience"
                }
            }
        }
    }
}
