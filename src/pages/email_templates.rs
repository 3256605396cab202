//! Admin page for the notification email templates.

use leptos::prelude::*;

use crate::components::shell::DashboardShell;
use crate::net::http::ApiResult;
use crate::net::types::{EmailTemplate, EmailTemplateUpdate};
use crate::services;
use crate::state::session::SessionState;
use crate::state::toast::{self, ToastKind, ToastState};

#[component]
pub fn EmailTemplatesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let is_admin = move || session.get().user.map(|u| u.is_admin).unwrap_or(false);

    view! {
        <DashboardShell>
            <h1 class="page-title">"Email Templates"</h1>
            <Show
                when=is_admin
                fallback=|| {
                    view! {
                        <div class="card">
                            <p class="muted">"This area is limited to platform administrators."</p>
                        </div>
                    }
                }
            >
                <TemplateTable/>
            </Show>
        </DashboardShell>
    }
}

#[component]
fn TemplateTable() -> impl IntoView {
    let templates = LocalResource::new(|| services::admin::list_templates());
    let editing = RwSignal::new(Option::<EmailTemplate>::None);

    let on_close = Callback::new(move |()| editing.set(None));
    let on_saved = Callback::new(move |()| {
        editing.set(None);
        templates.refetch();
    });

    view! {
        <div class="card">
            <Suspense fallback=move || view! { <p class="muted">"Loading templates..."</p> }>
                {move || {
                    templates
                        .get()
                        .map(|result: ApiResult<Vec<EmailTemplate>>| match result {
                            Ok(list) => {
                                view! { <TemplateRows list=list templates=templates editing=editing/> }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="form-error">{format!("Couldn't load templates: {err}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            {move || {
                editing
                    .get()
                    .map(|template| {
                        view! { <EditDialog template=template on_close=on_close on_saved=on_saved/> }
                    })
            }}
        </div>
    }
}

#[component]
fn TemplateRows(
    list: Vec<EmailTemplate>,
    templates: LocalResource<ApiResult<Vec<EmailTemplate>>>,
    editing: RwSignal<Option<EmailTemplate>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    if list.is_empty() {
        return view! { <p class="muted">"No templates defined."</p> }.into_any();
    }

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Subject"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|template| {
                        let template_id = template.id;
                        let edit = {
                            let template = template.clone();
                            move |_| editing.set(Some(template.clone()))
                        };
                        let delete = move |_| {
                            #[cfg(feature = "hydrate")]
                            {
                                let templates = templates.clone();
                                leptos::task::spawn_local(async move {
                                    match services::admin::delete_template(template_id).await {
                                        Ok(_) => templates.refetch(),
                                        Err(err) => toast::notify_error(
                                            toasts,
                                            "Couldn't delete template",
                                            err.to_string(),
                                        ),
                                    }
                                });
                            }
                            #[cfg(not(feature = "hydrate"))]
                            {
                                let _ = (template_id, templates, toasts);
                            }
                        };
                        view! {
                            <tr>
                                <td>{template.name.clone()}</td>
                                <td><span class="tag">{template.kind.clone()}</span></td>
                                <td>{template.subject.clone()}</td>
                                <td class="admin-table__actions">
                                    <button class="btn btn--ghost" on:click=edit>"Edit"</button>
                                    <button class="btn btn--danger" on:click=delete>"Delete"</button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Modal editor for one template's subject and body.
#[component]
fn EditDialog(
    template: EmailTemplate,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let subject = RwSignal::new(template.subject.clone());
    let body = RwSignal::new(template.body.clone());
    let saving = RwSignal::new(false);

    let template_id = template.id;
    let save = move |_| {
        if subject.get().trim().is_empty() || body.get().trim().is_empty() {
            toast::notify_error(
                toasts,
                "Nothing saved",
                "Subject and body are both required.",
            );
            return;
        }
        let payload = EmailTemplateUpdate {
            subject: subject.get().trim().to_owned(),
            body: body.get(),
        };
        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                match services::admin::update_template(template_id, &payload).await {
                    Ok(_) => {
                        toast::notify(
                            toasts,
                            ToastKind::Success,
                            "Template saved",
                            "Outgoing emails will use the new copy.",
                        );
                        on_saved.run(());
                    }
                    Err(err) => toast::notify_error(toasts, "Save failed", err.to_string()),
                }
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, template_id, toasts, saving, on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{template.name.clone()}</h2>
                <label class="profile-form__label">
                    "Subject"
                    <input
                        class="profile-form__input"
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__label">
                    "Body"
                    <textarea
                        class="profile-form__textarea"
                        rows="10"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=save disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Template" }}
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
