use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error,
};
use base64::Engine;
use futures::future::LocalBoxFuture;
use std::env;
use std::future::{ready, Ready};

/// HTTP Basic access gate. Runs ahead of the API handlers and rejects
/// unauthenticated requests; a gate without configured credentials passes
/// everything through.
#[derive(Clone)]
pub struct BasicAuthGate {
    credentials: Option<(String, String)>,
}

impl BasicAuthGate {
    /// Enabled only when both BASIC_AUTH_USERNAME and BASIC_AUTH_PASSWORD
    /// are set.
    pub fn from_env() -> Self {
        let credentials = match (
            env::var("BASIC_AUTH_USERNAME"),
            env::var("BASIC_AUTH_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some((username, password)),
            _ => None,
        };

        Self { credentials }
    }

    pub fn with_credentials(username: &str, password: &str) -> Self {
        Self {
            credentials: Some((username.to_string(), password.to_string())),
        }
    }

    pub fn disabled() -> Self {
        Self { credentials: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.credentials.is_some()
    }
}

impl<S, B> Transform<S, ServiceRequest> for BasicAuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BasicAuthGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthGateService {
            service,
            credentials: self.credentials.clone(),
        }))
    }
}

pub struct BasicAuthGateService<S> {
    service: S,
    credentials: Option<(String, String)>,
}

impl<S, B> Service<ServiceRequest> for BasicAuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let (expected_username, expected_password) = match &self.credentials {
            Some(credentials) => credentials.clone(),
            None => {
                let fut = self.service.call(req);
                return Box::pin(async move {
                    let res = fut.await?;
                    Ok(res)
                });
            }
        };

        // Skip auth for health check and CORS preflight
        if req.path() == "/health" || req.method() == Method::OPTIONS {
            let fut = self.service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res)
            });
        }

        // Get Authorization header
        let auth_header = req.headers().get("Authorization");

        match auth_header {
            Some(header_value) => {
                if let Ok(header_str) = header_value.to_str() {
                    if let Some(encoded) = header_str.strip_prefix("Basic ") {
                        if credentials_match(encoded, &expected_username, &expected_password) {
                            let fut = self.service.call(req);
                            return Box::pin(async move {
                                let res = fut.await?;
                                Ok(res)
                            });
                        }
                    }
                }

                log::warn!("🔒 Rejected request with invalid credentials: {}", req.path());
                Box::pin(async move {
                    Err(actix_web::error::ErrorUnauthorized("Invalid credentials"))
                })
            }
            None => Box::pin(async move {
                Err(actix_web::error::ErrorUnauthorized(
                    "Missing authorization header",
                ))
            }),
        }
    }
}

/// Decodes `username:password` from the Basic payload and compares it against
/// the configured credentials.
fn credentials_match(encoded: &str, username: &str, password: &str) -> bool {
    let decoded = match base64::engine::general_purpose::STANDARD.decode(encoded.trim()) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let decoded = match String::from_utf8(decoded) {
        Ok(s) => s,
        Err(_) => return false,
    };

    match decoded.split_once(':') {
        Some((user, pass)) => user == username && pass == password,
        None => false,
    }
}
