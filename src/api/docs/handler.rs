// Human-readable route listing served at the base path

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse},
};

use crate::config::state::AppState;

/// (method, path below the base path, description, example body)
pub const ROUTES: &[(&str, &str, &str, Option<&str>)] = &[
    ("GET", "/api/notifications", "Retorna todas as notificações, mais recentes primeiro, incluindo o entrance_id.", None),
    ("GET", "/api/notifications/with-entrance", "Retorna todas as notificações com os dados da entrada relacionada (tipo, janela, placa, doca...). Campos da entrada ficam nulos quando não há correspondência.", None),
    ("GET", "/api/notifications/:id", "Retorna uma notificação pelo ID.", None),
    ("GET", "/api/notifications/entrance/:entranceId", "Retorna as notificações de uma entrada específica.", None),
    ("GET", "/api/entrance", "Retorna todas as entradas registradas, mais recentes primeiro.", None),
    ("GET", "/api/entrance/:id", "Retorna uma entrada pelo ID.", None),
    (
        "PUT",
        "/api/notifications/:id/status",
        "Atualiza o status de uma notificação. O campo sent_date é opcional.",
        Some("{\n  \"status\": \"enviado\",\n  \"sent_date\": \"2023-09-27T15:30:00\"\n}"),
    ),
    ("GET", "/api/status", "Verifica se a API está funcionando.", None),
];

pub async fn docs_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_docs(&state.environment.base_path))
}

/// `GET /` sends clients to the documentation page
pub async fn redirect_to_docs_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, state.environment.base_path.to_string())])
}

pub fn render_docs(base_path: &str) -> String {
    let endpoints: String = ROUTES
        .iter()
        .map(|&(method, path, description, example)| {
            let example: String = example
                .map(|body| format!("<pre><code>{body}</code></pre>"))
                .unwrap_or_default();

            format!(
                r#"<div class="endpoint">
  <h3><span class="method">{method}</span> <span class="url">{base_path}{path}</span></h3>
  <p>{description}</p>
  {example}
</div>
"#
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <title>API de Notificações</title>
  <style>
    body {{ font-family: sans-serif; max-width: 820px; margin: 0 auto; padding: 20px; }}
    .endpoint {{ background: #f5f5f5; padding: 12px 16px; border-radius: 6px; margin-bottom: 12px; }}
    .endpoint h3 {{ margin: 0 0 6px; }}
    .method {{ display: inline-block; width: 56px; font-weight: bold; }}
    .url {{ color: #2d6eee; }}
  </style>
</head>
<body>
  <h1>API de Notificações</h1>
  <p>Acesso às notificações e às entradas (flex_entrance). Todas as respostas JSON seguem o formato
  <code>{{ "success": ..., "data" | "message": ..., "error"?: ... }}</code>.</p>
  <h2>Endpoints</h2>
{endpoints}</body>
</html>
"#
    )
}
