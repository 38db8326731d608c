use axum::{
    extract::Json,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use staff_board::{
    api::{BoardApi, HttpBoardApi},
    error::Error,
    models::{
        CreatePostRequest, Department, Gender, LoginRequest, PostAudience, RegisterRequest, Role,
    },
};
use tokio::net::TcpListener;

// --- STUB COLLABORATOR ---
//
// A minimal in-process stand-in for the backend, bound to an ephemeral port.
// It implements just enough of the HTTP contract to exercise HttpBoardApi:
// one known account, one taken email, a fixed two-post board.

fn stub_user_json() -> Value {
    json!({
        "id": "0123456789abcdef",
        "email": "x@y.com",
        "name": "Анна Петрова",
        "role": "User",
        "department": "Отдел IT",
        "gender": "female",
        "birthDate": "1991-04-05"
    })
}

async fn login_stub(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "x@y.com" && body["password"] == "secret" {
        (StatusCode::OK, Json(stub_user_json()))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        )
    }
}

async fn register_stub(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Email already registered"})),
        );
    }
    let mut created = body;
    created["id"] = json!("deadbeef01234567");
    created.as_object_mut().unwrap().remove("password");
    (StatusCode::OK, Json(created))
}

async fn list_posts_stub() -> Json<Value> {
    Json(json!([
        {
            "id": "p1",
            "content": "Общее объявление",
            "department": "all",
            "createdAt": "2024-05-02T09:00:00Z",
            "author": stub_user_json()
        },
        {
            "id": "p2",
            "content": "Только для бухгалтерии",
            "department": "Бухгалтерия",
            "createdAt": "2024-05-01T09:00:00Z",
            "author": stub_user_json()
        }
    ]))
}

async fn create_post_stub(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "id": "p3",
        "content": body["content"],
        "department": body["department"],
        "createdAt": "2024-05-03T12:00:00Z",
        "author": stub_user_json()
    }))
}

async fn spawn_stub() -> String {
    let router = Router::new()
        .route("/api/login", post(login_stub))
        .route("/api/register", post(register_stub))
        .route("/api/posts", get(list_posts_stub).post(create_post_stub));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

// --- TESTS ---

#[tokio::test]
async fn test_login_success_parses_full_user() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let user = api
        .login(&LoginRequest {
            email: "x@y.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, "0123456789abcdef");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.department, Some(Department::It));
    assert_eq!(user.gender, Gender::Female);
}

#[tokio::test]
async fn test_login_rejection_is_authentication_error() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let result = api
        .login(&LoginRequest {
            email: "x@y.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(Error::Authentication(msg)) => assert!(msg.contains("401")),
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_success_returns_assigned_id() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let user = api
        .register(&RegisterRequest {
            email: "fresh@example.com".to_string(),
            password: "secret".to_string(),
            name: "Новичок".to_string(),
            role: Role::Manager,
            department: None,
            gender: Gender::Male,
            birth_date: chrono::NaiveDate::from_ymd_opt(1987, 2, 11).unwrap(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, "deadbeef01234567");
    assert_eq!(user.email, "fresh@example.com");
    assert_eq!(user.role, Role::Manager);
}

#[tokio::test]
async fn test_register_duplicate_surfaces_detail_verbatim() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let result = api
        .register(&RegisterRequest {
            email: "taken@example.com".to_string(),
            password: "secret".to_string(),
            name: "Дубликат".to_string(),
            role: Role::Admin,
            department: None,
            gender: Gender::Male,
            birth_date: chrono::NaiveDate::from_ymd_opt(1985, 9, 1).unwrap(),
        })
        .await;

    match result {
        Err(Error::Registration(msg)) => assert_eq!(msg, "Email already registered"),
        other => panic!("expected Registration error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_posts_parses_audiences() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let posts = api.fetch_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].department, PostAudience::All);
    assert_eq!(
        posts[1].department,
        PostAudience::Department(Department::Accounting)
    );
    assert_eq!(posts[0].author.email, "x@y.com");
}

#[tokio::test]
async fn test_create_post_returns_resolved_author() {
    let api = HttpBoardApi::new(&spawn_stub().await);

    let post = api
        .create_post(&CreatePostRequest {
            content: "Совещание в 15:00".to_string(),
            department: PostAudience::Department(Department::Sales),
        })
        .await
        .unwrap();

    assert_eq!(post.id, "p3");
    assert_eq!(post.department, PostAudience::Department(Department::Sales));
    assert_eq!(post.author.name, "Анна Петрова");
}

#[tokio::test]
async fn test_unreachable_collaborator_is_network_error() {
    // Nothing listens on the discard port; the transport failure must map to
    // the Network variant, never to an authentication-flavored error.
    let api = HttpBoardApi::new("http://127.0.0.1:9");

    assert!(matches!(api.fetch_posts().await, Err(Error::Network(_))));

    let login = api
        .login(&LoginRequest {
            email: "x@y.com".to_string(),
            password: "secret".to_string(),
        })
        .await;
    assert!(matches!(login, Err(Error::Network(_))));
}
