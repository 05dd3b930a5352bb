use actix_web::{http::StatusCode, web, HttpResponse};
use crate::{
    ui::{
        client::ApiClient,
        forms::UserDraft,
        notification::{NoticeQuery, Notification},
        outcome::{self, SubmitFailure},
        views::{self, FormView},
    },
    utils::error::FieldErrors,
};

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Which of the two user forms is being drawn
#[derive(Clone, Copy)]
enum FormKind<'a> {
    Create,
    Edit { id: &'a str },
}

fn render_form(
    kind: FormKind<'_>,
    draft: &UserDraft,
    errors: &FieldErrors,
    notification: Option<&Notification>,
) -> HttpResponse {
    let edit_action;
    let view = match kind {
        FormKind::Create => FormView {
            heading: "Add New User",
            action: "/add",
            submit_label: "Submit",
            busy_label: "Adding User...",
            draft,
            errors,
            live_validation: false,
        },
        FormKind::Edit { id } => {
            edit_action = format!("/update/{}", urlencoding::encode(id));
            FormView {
                heading: "Update User",
                action: &edit_action,
                submit_label: "Update User",
                busy_label: "Updating User...",
                draft,
                errors,
                live_validation: true,
            }
        }
    };

    html(
        StatusCode::OK,
        views::layout(view.heading, notification, &views::user_form(&view)),
    )
}

/// Re-renders the form or leaves it, depending on how the submit failed
fn submit_failed(kind: FormKind<'_>, draft: &UserDraft, failure: SubmitFailure) -> HttpResponse {
    match failure {
        SubmitFailure::Field { field, message, notice } => {
            let mut errors = FieldErrors::new();
            errors.insert(field.as_str(), message);
            render_form(kind, draft, &errors, Some(&notice))
        }
        SubmitFailure::Notify(notice) => render_form(kind, draft, &FieldErrors::new(), Some(&notice)),
        SubmitFailure::Redirect(notice) => notice.redirect_to("/"),
    }
}

/// GET / - Lista de usuários
pub async fn list_page(api: web::Data<ApiClient>, query: web::Query<NoticeQuery>) -> HttpResponse {
    let notification = query.into_inner().into_notification();

    match api.list_users().await {
        Ok(users) => html(
            StatusCode::OK,
            views::layout("Users", notification.as_ref(), &views::user_list(&users)),
        ),
        Err(e) => {
            log::error!("❌ UI: failed to load users: {}", e);
            html(
                StatusCode::OK,
                views::layout(
                    "Users",
                    notification.as_ref(),
                    &views::list_error(outcome::list_failure_reason(&e)),
                ),
            )
        }
    }
}

/// GET /add
pub async fn add_form() -> HttpResponse {
    render_form(FormKind::Create, &UserDraft::default(), &FieldErrors::new(), None)
}

/// POST /add
pub async fn submit_add(api: web::Data<ApiClient>, form: web::Form<UserDraft>) -> HttpResponse {
    let draft = form.into_inner();

    match api.create_user(&draft.to_create_request()).await {
        Ok(user) => {
            log::info!("✅ UI: user created: {}", user.id);
            Notification::success("User created successfully").redirect_to("/")
        }
        Err(e) => {
            log::warn!("⚠️ UI: create failed: {}", e);
            submit_failed(FormKind::Create, &draft, outcome::classify_submit_failure(&e))
        }
    }
}

/// GET /update/{id}
pub async fn edit_form(api: web::Data<ApiClient>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match api.get_user(&id).await {
        Ok(user) => render_form(
            FormKind::Edit { id: &id },
            &UserDraft::from(user),
            &FieldErrors::new(),
            None,
        ),
        Err(e) => {
            log::warn!("⚠️ UI: failed to load user {}: {}", id, e);
            outcome::load_failure_notice(&e).redirect_to("/")
        }
    }
}

/// POST /update/{id}
pub async fn submit_update(
    api: web::Data<ApiClient>,
    path: web::Path<String>,
    form: web::Form<UserDraft>,
) -> HttpResponse {
    let id = path.into_inner();
    let draft = form.into_inner();
    let kind = FormKind::Edit { id: &id };

    let errors = draft.validate();
    if !errors.is_empty() {
        return render_form(
            kind,
            &draft,
            &errors,
            Some(&Notification::error("Please fix all errors before submitting")),
        );
    }

    match api.update_user(&id, &draft.to_update_request()).await {
        Ok(response) => {
            log::info!("✅ UI: user updated: {}", id);
            Notification::success(response.message).redirect_to("/")
        }
        Err(e) => {
            log::warn!("⚠️ UI: update of {} failed: {}", id, e);
            submit_failed(kind, &draft, outcome::classify_submit_failure(&e))
        }
    }
}

/// POST /delete/{id}
pub async fn submit_delete(api: web::Data<ApiClient>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();

    match api.delete_user(&id).await {
        Ok(response) => {
            log::info!("✅ UI: user deleted: {}", id);
            Notification::success(response.message).redirect_to("/")
        }
        Err(e) => {
            log::warn!("⚠️ UI: delete of {} failed: {}", id, e);
            outcome::delete_failure_notice(&e).redirect_to("/")
        }
    }
}
