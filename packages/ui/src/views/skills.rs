use dioxus::prelude::*;

use store::Skill;

use crate::components::{Button, ButtonVariant, Card, Input, Label, ProgressBar, Section};
use crate::icons::{FaPenToSquare, FaPlus, FaTrashCan};
use crate::{make_store_with, use_portfolio, Icon};

/// Shared skills view: list with inline editing plus an add form.
#[component]
pub fn SkillsView() -> Element {
    let mut portfolio = use_portfolio();
    let mut editing = use_signal(|| Option::<Skill>::None);
    let mut show_add_form = use_signal(|| false);
    let mut new_name = use_signal(String::new);
    let mut new_proficiency = use_signal(|| 75u8);

    let handle_add = move |_| {
        if new_name.peek().trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.add_skill(new_name.peek().clone(), *new_proficiency.peek()).await;
            portfolio.set(store.into_data());
            new_name.set(String::new());
            new_proficiency.set(75);
            show_add_form.set(false);
        });
    };

    let handle_update = move |_| {
        let Some(skill) = editing.peek().clone() else {
            return;
        };
        if skill.name.trim().is_empty() {
            return;
        }
        spawn(async move {
            let mut store = make_store_with(portfolio.peek().clone());
            store.update_skill(skill).await;
            portfolio.set(store.into_data());
            editing.set(None);
        });
    };

    let skills = portfolio().skills;
    let editing_id = editing().map(|s| s.id);

    rsx! {
        div {
            class: "view-page",
            Section {
                title: "Skills",
                if skills.is_empty() {
                    Card {
                        p { class: "empty-text", "No skills added yet. Add your first skill!" }
                    }
                }
                for skill in skills {
                    if editing_id.as_deref() == Some(skill.id.as_str()) {
                        Card {
                            key: "{skill.id}",
                            class: "edit-card",
                            div {
                                class: "form-field",
                                Label { html_for: "skill-name", "Skill Name" }
                                Input {
                                    id: "skill-name",
                                    placeholder: "e.g. React, JavaScript, UI Design",
                                    value: editing().map(|s| s.name).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some(s) = editing.write().as_mut() {
                                            s.name = evt.value();
                                        }
                                    },
                                }
                            }
                            div {
                                class: "form-field",
                                Label {
                                    html_for: "skill-proficiency",
                                    "Proficiency: {editing().map(|s| s.proficiency).unwrap_or_default()}%"
                                }
                                Input {
                                    id: "skill-proficiency",
                                    r#type: "number",
                                    min: "0",
                                    max: "100",
                                    placeholder: "75",
                                    value: "{editing().map(|s| s.proficiency).unwrap_or_default()}",
                                    oninput: move |evt: FormEvent| {
                                        // Out-of-range input is ignored.
                                        if let Ok(v) = evt.value().parse::<u8>() {
                                            if v <= 100 {
                                                if let Some(s) = editing.write().as_mut() {
                                                    s.proficiency = v;
                                                }
                                            }
                                        }
                                    },
                                }
                            }
                            div {
                                class: "button-row",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| editing.set(None),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: editing().map(|s| s.name.trim().is_empty()).unwrap_or(true),
                                    onclick: handle_update,
                                    "Save"
                                }
                            }
                        }
                    } else {
                        Card {
                            key: "{skill.id}",
                            div {
                                class: "item-header",
                                span { class: "item-title", "{skill.name}" }
                                div {
                                    class: "item-actions",
                                    button {
                                        class: "icon-button",
                                        title: "Edit skill",
                                        onclick: {
                                            let skill = skill.clone();
                                            move |_| editing.set(Some(skill.clone()))
                                        },
                                        Icon { icon: FaPenToSquare, width: 16, height: 16 }
                                    }
                                    button {
                                        class: "icon-button danger",
                                        title: "Delete skill",
                                        onclick: {
                                            let id = skill.id.clone();
                                            move |_| {
                                                let id = id.clone();
                                                spawn(async move {
                                                    let mut store = make_store_with(portfolio.peek().clone());
                                                    store.remove_skill(&id).await;
                                                    portfolio.set(store.into_data());
                                                });
                                            }
                                        },
                                        Icon { icon: FaTrashCan, width: 16, height: 16 }
                                    }
                                }
                            }
                            ProgressBar { value: skill.proficiency }
                        }
                    }
                }
            }

            if show_add_form() {
                Card {
                    class: "add-card",
                    h3 { class: "form-title", "Add New Skill" }
                    div {
                        class: "form-field",
                        Label { html_for: "new-skill-name", "Skill Name" }
                        Input {
                            id: "new-skill-name",
                            placeholder: "e.g. React, JavaScript, UI Design",
                            value: new_name(),
                            oninput: move |evt: FormEvent| new_name.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "new-skill-proficiency", "Proficiency: {new_proficiency()}%" }
                        Input {
                            id: "new-skill-proficiency",
                            r#type: "number",
                            min: "0",
                            max: "100",
                            placeholder: "75",
                            value: "{new_proficiency()}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(v) = evt.value().parse::<u8>() {
                                    if v <= 100 {
                                        new_proficiency.set(v);
                                    }
                                }
                            },
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
                            disabled: new_name().trim().is_empty(),
                            onclick: handle_add,
                            "Add Skill"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    class: "full-width",
                    onclick: move |_| show_add_form.set(true),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Add New Skill"
                }
            }
        }
    }
}
