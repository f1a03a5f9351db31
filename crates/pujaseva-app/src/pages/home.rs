// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page: services grid, detail modal and booking request form.

use dioxus::prelude::*;

use pujaseva_core::view::{GRID_CLASS, ViewNode, card_view};
use pujaseva_core::{FormField, UiEvent, UiState};

use crate::services::app_services::AppServices;
use crate::state::{dispatch, page_key};

#[component]
pub fn Home() -> Element {
    let state = use_context::<Signal<UiState>>();
    let svc = use_context::<AppServices>();

    rsx! {
        div {
            tabindex: "0",
            style: "min-height: 100vh; outline: none; font-family: system-ui, -apple-system, sans-serif; background: #fffaf3; color: #3a2a1a;",
            onkeydown: move |evt: KeyboardEvent| {
                dispatch(state, &svc, UiEvent::KeyDown(page_key(&evt.key().to_string())));
            },

            header { style: "padding: 32px 16px 8px; text-align: center;",
                h1 { style: "margin: 0; color: #b34700;", "Pujaseva" }
                p { style: "color: #7a6150;", "Vedic ceremonies performed with care. Tap a service to learn more." }
            }

            ServicesGrid {}
            ServiceModal {}
            RequestForm {}
        }
    }
}

/// One card per catalog record, in catalog order, built from the core's
/// card view tree.
#[component]
fn ServicesGrid() -> Element {
    let state = use_context::<Signal<UiState>>();
    let svc = use_context::<AppServices>();

    let Some(cards) = state
        .read()
        .grid
        .as_ref()
        .map(|g| g.cards().iter().map(card_view).collect::<Vec<ViewNode>>())
    else {
        return rsx! {};
    };

    rsx! {
        section { style: "padding: 16px;",
            h2 { "Our Services" }
            div { class: GRID_CLASS,
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                for (index, card) in cards.into_iter().enumerate() {
                    {
                        let svc = svc.clone();
                        let attr = |node: Option<&ViewNode>, name: &str| {
                            node.and_then(|n| n.get_attr(name)).unwrap_or_default().to_string()
                        };
                        let title = attr(Some(&card), "data-title");
                        let img = card.find_child("img");
                        let heading = card.find_child("h3").map(ViewNode::text_content).unwrap_or_default();
                        rsx! {
                            div { key: "{index}-{title}",
                                class: attr(Some(&card), "class"),
                                "data-title": "{title}",
                                "data-description": attr(Some(&card), "data-description"),
                                "data-img": attr(Some(&card), "data-img"),
                                style: "border: 1px solid #ecd9c6; border-radius: 12px; overflow: hidden; background: white; cursor: pointer;",
                                onclick: move |_| dispatch(state, &svc, UiEvent::CardClicked { index }),
                                img { src: attr(img, "src"), alt: attr(img, "alt"),
                                    style: "width: 100%; height: 160px; object-fit: cover; background: #f3e6d8;",
                                }
                                h3 { style: "margin: 12px; font-size: 17px;", "{heading}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Overlay showing the selected service. Hidden while closed.
#[component]
fn ServiceModal() -> Element {
    let state = use_context::<Signal<UiState>>();
    let svc = use_context::<AppServices>();

    let Some(modal) = state.read().modal.clone() else {
        return rsx! {};
    };
    let display = modal.display();
    let aria_hidden = modal.aria_hidden();
    let content = modal.content().cloned();

    rsx! {
        div { id: "serviceModal",
            "aria-hidden": aria_hidden,
            style: "display: {display}; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.55); align-items: center; justify-content: center; z-index: 10;",
            onclick: {
                let svc = svc.clone();
                move |_| dispatch(state, &svc, UiEvent::BackdropClicked)
            },

            if let Some(content) = content {
                div { class: "modal-content",
                    style: "position: relative; max-width: 480px; width: 90%; background: white; border-radius: 16px; padding: 24px;",
                    onclick: {
                        let svc = svc.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            dispatch(state, &svc, UiEvent::ContentClicked);
                        }
                    },

                    span { id: "closeModal",
                        style: "position: absolute; top: 8px; right: 16px; font-size: 28px; cursor: pointer;",
                        onclick: {
                            let svc = svc.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                dispatch(state, &svc, UiEvent::CloseClicked);
                            }
                        },
                        "\u{00D7}"
                    }
                    img { id: "modalImage", src: "{content.image_ref}", alt: "{content.title}",
                        style: "width: 100%; max-height: 240px; object-fit: cover; border-radius: 12px;",
                    }
                    h2 { id: "modalTitle", "{content.title}" }
                    p { id: "modalDescription", style: "color: #555; line-height: 1.5;", "{content.description}" }
                    a { id: "waLink",
                        href: "{content.contact_link}",
                        target: "_blank",
                        rel: "noopener",
                        style: "display: inline-block; margin-top: 8px; padding: 12px 20px; border-radius: 24px; background: #25d366; color: white; text-decoration: none; font-weight: bold;",
                        onclick: {
                            let svc = svc.clone();
                            move |evt: MouseEvent| {
                                evt.prevent_default();
                                evt.stop_propagation();
                                dispatch(state, &svc, UiEvent::ContactClicked);
                            }
                        },
                        "Book on WhatsApp"
                    }
                }
            }
        }
    }
}

/// Booking request form. Submitting opens the messaging app.
#[component]
fn RequestForm() -> Element {
    let state = use_context::<Signal<UiState>>();
    let svc = use_context::<AppServices>();

    let Some(form) = state.read().form_input() else {
        return rsx! {};
    };
    let service_select = state.read().service_select.clone();

    let field_style = "width: 100%; padding: 12px; font-size: 16px; border: 1px solid #d9c2ab; border-radius: 8px; box-sizing: border-box; margin-bottom: 12px;";

    rsx! {
        section { style: "max-width: 520px; margin: 32px auto; padding: 16px;",
            h2 { "Request a Puja" }
            form { id: "requestForm",
                onsubmit: {
                    let svc = svc.clone();
                    move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch(state, &svc, UiEvent::Submit);
                    }
                },

                input { id: "name", name: "name", r#type: "text", placeholder: "Your name",
                    value: "{form.name}",
                    style: field_style,
                    oninput: {
                        let svc = svc.clone();
                        move |evt: FormEvent| dispatch(state, &svc, UiEvent::FieldChanged(FormField::Name, evt.value()))
                    },
                }
                input { id: "phone", name: "phone", r#type: "tel", placeholder: "Phone number",
                    value: "{form.phone}",
                    style: field_style,
                    oninput: {
                        let svc = svc.clone();
                        move |evt: FormEvent| dispatch(state, &svc, UiEvent::FieldChanged(FormField::Phone, evt.value()))
                    },
                }
                if let Some(choice) = service_select {
                    select { id: "service", name: "service",
                        value: "{choice.value}",
                        style: field_style,
                        onchange: {
                            let svc = svc.clone();
                            move |evt: FormEvent| dispatch(state, &svc, UiEvent::ServiceSelected(evt.value()))
                        },
                        for opt in choice.options.iter() {
                            option { key: "{opt.value}",
                                value: "{opt.value}",
                                selected: opt.value == choice.value,
                                "{opt.text}"
                            }
                        }
                    }
                } else {
                    input { id: "service", name: "service", r#type: "text", placeholder: "Service",
                        value: "{form.service}",
                        style: field_style,
                        oninput: {
                            let svc = svc.clone();
                            move |evt: FormEvent| dispatch(state, &svc, UiEvent::FieldChanged(FormField::Service, evt.value()))
                        },
                    }
                }
                textarea { id: "details", name: "details", rows: "3",
                    placeholder: "Preferred date, place and any details",
                    value: "{form.details}",
                    style: field_style,
                    oninput: {
                        let svc = svc.clone();
                        move |evt: FormEvent| dispatch(state, &svc, UiEvent::FieldChanged(FormField::Details, evt.value()))
                    },
                }
                button { r#type: "submit",
                    style: "width: 100%; padding: 14px; border-radius: 12px; border: none; background: #b34700; color: white; font-size: 17px; font-weight: bold;",
                    "Send Request on WhatsApp"
                }
            }
        }
    }
}
