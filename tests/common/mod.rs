use std::sync::Arc;

use axum::Router;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use secretaria_auth::Session;
use secretaria_client::ApiClient;
use secretaria_config::ApiConfig;

/// Mint an access token the way the backend would: HS256 with a secret the
/// client never sees, carrying the `username` and `cargo` claims.
pub fn access_token(cargo: Option<&str>) -> String {
    let claims = json!({
        "token_type": "access",
        "exp": 4_102_444_800i64,
        "iat": 1_700_000_000i64,
        "jti": "test-jti",
        "user_id": 1,
        "username": "52998224725",
        "cargo": cargo,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"backend-only-secret"),
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn session_for(cargo: Option<&str>) -> Session {
    Session::from_tokens(access_token(cargo), "refresh-token".to_string()).unwrap()
}

/// Serve a mock backend on an ephemeral port, returning the API base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

#[allow(dead_code)]
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        session_file: std::env::temp_dir().join("secretaria-test-session.json"),
    }
}

/// An authenticated client whose session carries the given role.
#[allow(dead_code)]
pub fn client_for(base_url: &str, cargo: Option<&str>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&api_config(base_url), session_for(cargo)))
}

/// A random person name for create payloads.
#[allow(dead_code)]
pub fn fake_name() -> String {
    use fake::Fake;
    use fake::faker::name::en::Name;
    Name().fake()
}

/// A student record in the backend's wire shape.
#[allow(dead_code)]
pub fn student_json(id: i64, name: &str, class: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name_aluno": name,
        "email_aluno": format!("aluno{id}@escola.example"),
        "cpf_aluno": "52998224725",
        "class_choice": class,
        "month_choice": "02",
        "ano_letivo": 2025,
        "Responsavel": null,
        "responsavel_nome": null,
        "faltas_aluno": 4,
        "presencas_aluno": 36,
        "ativo": true,
        "comentario_descritivo": null,
    })
}
