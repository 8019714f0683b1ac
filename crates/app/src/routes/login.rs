use crate::shell::use_shell;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdGraduationCap, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{LoginForm, Role, ALL_ROLES, DEMO_PASSWORD, DEMO_USERNAME};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Field, Input,
};

/// Role-selecting sign-in screen. Any non-empty credentials are accepted.
#[component]
pub fn Login() -> Element {
    let mut shell = use_shell();
    let mut form = use_signal(LoginForm::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().submit() {
            Some(role) => shell.login(role),
            None => tracing::debug!("sign-in ignored: missing role or credentials"),
        }
    };

    let current = form.read().clone();
    let selected = current.role;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-inner",
                div { class: "auth-hero",
                    div { class: "auth-hero-icon",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 48, height: 48 }
                    }
                    h1 { "College Attendance Monitoring System" }
                    p {
                        "Secure, transparent, and efficient attendance tracking with biometric verification"
                    }
                }

                div { class: "role-grid",
                    {ALL_ROLES.iter().copied().map(|role| {
                        let key = role.as_str();
                        rsx! {
                            RoleCard {
                                key: "{key}",
                                role,
                                selected: selected == Some(role),
                                on_select: move |role| form.write().select_role(role),
                            }
                        }
                    })}
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { {current.heading()} }
                    }

                    CardContent {
                        form { class: "auth-form", onsubmit: handle_login,
                            Field { label: "Username / Email", html_for: "username",
                                Input {
                                    id: "username",
                                    placeholder: "Enter your username",
                                    value: current.username.clone(),
                                    on_input: move |evt: FormEvent| form.write().username = evt.value(),
                                    required: true,
                                }
                            }
                            Field { label: "Password", html_for: "password",
                                Input {
                                    id: "password",
                                    input_type: "password",
                                    placeholder: "Enter your password",
                                    value: current.password.clone(),
                                    on_input: move |evt: FormEvent| form.write().password = evt.value(),
                                    required: true,
                                }
                            }
                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                disabled: !current.can_submit(),
                                {current.submit_label()}
                            }
                        }

                        div { class: "demo-credentials",
                            p { class: "demo-credentials-title", "Demo Credentials:" }
                            p {
                                strong { "Username:" }
                                " {DEMO_USERNAME}"
                            }
                            p {
                                strong { "Password:" }
                                " {DEMO_PASSWORD}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One selectable role card with its feature list.
#[component]
fn RoleCard(role: Role, selected: bool, on_select: EventHandler<Role>) -> Element {
    rsx! {
        Card {
            class: "role-card",
            highlighted: selected,
            onclick: move |_| on_select.call(role),
            CardHeader {
                div { class: "role-icon", "data-selected": "{selected}", {role_icon(role)} }
                CardTitle { {role.title()} }
                CardDescription { {role.description()} }
            }
            CardContent {
                ul { class: "role-features",
                    for feature in role.features().iter() {
                        li { key: "{feature}",
                            Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 16, height: 16 }
                            "{feature}"
                        }
                    }
                }
            }
        }
    }
}

fn role_icon(role: Role) -> Element {
    match role {
        Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 32, height: 32 } },
        Role::Teacher => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 32, height: 32 } },
        Role::Student => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
    }
}
