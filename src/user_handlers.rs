use crate::auth;
use crate::db::CredentialStore;
use crate::error::CredentialError;
use crate::models::{ActionResponse, CredentialForm, User};
use crate::state::AppState;
use crate::views::{render_page, FormValues, Notice, View};
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};

type Action = fn(&CredentialStore, &CredentialForm) -> Result<User, CredentialError>;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(index)
        .service(login_page)
        .service(register_page)
        .service(login)
        .service(register)
        .service(api_login)
        .service(api_register);
}

/// Runs one credential action on the blocking pool and waits for it.
async fn run(state: &AppState, form: CredentialForm, action: Action) -> Result<User, CredentialError> {
    let store = state.store.clone();
    web::block(move || action(&store, &form)).await?
}

fn page(state: &AppState, view: View, notice: Option<&Notice>, values: &FormValues) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(state.theme, view, notice, values))
}

fn retained(form: &CredentialForm) -> FormValues {
    FormValues {
        username: form.username.clone(),
        password: form.password.clone(),
    }
}

/// Simple health check
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/")]
async fn index(state: web::Data<AppState>) -> impl Responder {
    page(&state, View::Login, None, &FormValues::default())
}

#[get("/login")]
async fn login_page(state: web::Data<AppState>) -> impl Responder {
    page(&state, View::Login, None, &FormValues::default())
}

#[get("/register")]
async fn register_page(state: web::Data<AppState>) -> impl Responder {
    page(&state, View::Register, None, &FormValues::default())
}

#[post("/login")]
pub async fn login(state: web::Data<AppState>, form: web::Form<CredentialForm>) -> impl Responder {
    let form = form.into_inner();
    let values = retained(&form);
    match run(&state, form, auth::login).await {
        Ok(user) => {
            let notice = Notice::welcome(&user.username);
            page(&state, View::Login, Some(&notice), &FormValues::default())
        }
        Err(err) => page(&state, View::Login, Some(&Notice::from(&err)), &values),
    }
}

/// A successful registration clears the form and switches to the login view.
#[post("/register")]
pub async fn register(state: web::Data<AppState>, form: web::Form<CredentialForm>) -> impl Responder {
    let form = form.into_inner();
    let values = retained(&form);
    match run(&state, form, auth::register).await {
        Ok(_) => page(&state, View::Login, Some(&Notice::registered()), &FormValues::default()),
        Err(err) => page(&state, View::Register, Some(&Notice::from(&err)), &values),
    }
}

fn json_outcome(
    result: Result<User, CredentialError>,
    success: StatusCode,
    notice: impl FnOnce(&User) -> Notice,
) -> HttpResponse {
    let (status, notice, username) = match result {
        Ok(user) => (success, notice(&user), Some(user.username)),
        Err(err) => {
            let status = match err {
                CredentialError::Validation => StatusCode::BAD_REQUEST,
                CredentialError::DuplicateUsername(_) => StatusCode::CONFLICT,
                CredentialError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                CredentialError::Connection(_)
                | CredentialError::Storage(_)
                | CredentialError::WorkerUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Notice::from(&err), None)
        }
    };
    HttpResponse::build(status).json(ActionResponse {
        status: notice.severity.as_str(),
        title: notice.title,
        message: notice.message,
        username,
    })
}

#[post("/api/login")]
pub async fn api_login(state: web::Data<AppState>, data: web::Json<CredentialForm>) -> impl Responder {
    let result = run(&state, data.into_inner(), auth::login).await;
    json_outcome(result, StatusCode::OK, |user| Notice::welcome(&user.username))
}

#[post("/api/register")]
pub async fn api_register(state: web::Data<AppState>, data: web::Json<CredentialForm>) -> impl Responder {
    let result = run(&state, data.into_inner(), auth::register).await;
    json_outcome(result, StatusCode::CREATED, |_| Notice::registered())
}
