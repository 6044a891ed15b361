use crate::composition::CompositionStore;
use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }

    fn json(body: String) -> Self {
        Self {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body,
        }
    }
}

pub fn route_request(
    store: &CompositionStore,
    method: &str,
    path: &str,
    body: &str,
) -> HttpResponse {
    let path = path.split('?').next().unwrap_or(path);
    match (method, path) {
        ("GET", "/api/health") => respond(api::health_payload()),
        ("GET", "/api/catalog") => respond(api::catalog_payload(store)),
        ("GET", "/api/composition") => respond(api::composition_payload(store)),
        ("POST", "/api/composition/steps") => match api::step_payload(store, body) {
            Ok(payload) => HttpResponse::json(payload),
            Err(api::StepError::Script(err)) => error_response(400, "Bad Request", &err.to_string()),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/simulation/request") => respond(api::simulation_request_payload(store)),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

pub fn payload_too_large(limit: usize) -> HttpResponse {
    error_response(
        413,
        "Payload Too Large",
        &format!("request body exceeds {limit} bytes"),
    )
}

fn respond(payload: Result<String, serde_json::Error>) -> HttpResponse {
    match payload {
        Ok(body) => HttpResponse::json(body),
        Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
